//! Core error types.
//!
//! All variants are input-validation failures detected before any
//! computation runs, so an error always means "no output at all".

use finmate_market_data::MarketDataError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// Amount is zero, negative, NaN, infinite or not representable.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Currency code outside the supported set.
    #[error("Currency '{0}' is not supported")]
    InvalidCurrency(String),

    /// Empty rate series or an out-of-range lookback window.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<MarketDataError> for Error {
    fn from(err: MarketDataError) -> Self {
        match err {
            MarketDataError::UnsupportedCurrency(code) => Error::InvalidCurrency(code),
            other => Error::InvalidInput(other.to_string()),
        }
    }
}
