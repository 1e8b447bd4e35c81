//! Market data models
//!
//! - `currency` - Supported target currencies and their display metadata
//! - `rate_point` - A single dated exchange-rate observation

mod currency;
mod rate_point;

pub use currency::{Currency, CurrencyInfo};
pub use rate_point::RatePoint;
