//! FinMate Core - remittance comparison domain.
//!
//! This crate holds the business logic behind the remittance tools:
//! ranking transfer services by total cost and classifying recent
//! exchange-rate movement. It has no I/O of its own; rates come from the
//! `market-data` crate through a [`RateRegistry`](finmate_market_data::RateRegistry).

pub mod errors;
pub mod remittance;

pub use finmate_market_data::{Currency, CurrencyInfo, RatePoint};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
