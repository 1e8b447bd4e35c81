//! FinMate Market Data Crate
//!
//! This crate supplies USD-based exchange-rate series for the remittance
//! engine.
//!
//! # Overview
//!
//! - A closed registry of supported target currencies with display metadata
//!   and reference mid-market rates
//! - A synthetic provider that perturbs the reference rate to build a daily
//!   series (optionally seeded for reproducible output)
//! - A live provider backed by the Frankfurter time-series API
//! - A registry that bounds the live call with a timeout and falls back to
//!   the synthetic provider, so callers always receive a series
//!
//! # Architecture
//!
//! ```text
//! +------------------+
//! |  RateRegistry    |  (timeout + validation + fallback)
//! +------------------+
//!      |         |
//!      v         v
//! +---------+  +------------+
//! |  Live   |  | Synthetic  |
//! +---------+  +------------+
//!      |         |
//!      v         v
//! +------------------+
//! |   RatePoint[]    |  (chronological, currency per 1 USD)
//! +------------------+
//! ```

pub mod errors;
pub mod models;
pub mod provider;
pub mod registry;

pub use errors::MarketDataError;
pub use models::{Currency, CurrencyInfo, RatePoint};
pub use provider::frankfurter::FrankfurterProvider;
pub use provider::synthetic::SyntheticRateProvider;
pub use provider::RateProvider;
pub use registry::{FetchedRates, RateRegistry, SeriesValidator};
