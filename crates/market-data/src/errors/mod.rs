//! Error types for the market data crate.

use thiserror::Error;

/// Errors that can occur while producing exchange-rate series.
///
/// Only [`UnsupportedCurrency`](Self::UnsupportedCurrency) is meant to reach
/// callers. Everything else comes from the live provider and is absorbed by
/// the registry, which falls back to synthetic rates.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The currency code is not part of the supported set.
    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),

    /// The provider returned fewer daily points than requested.
    #[error("No data for date range")]
    NoDataForRange,

    /// The provider did not answer within the configured budget.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// A provider-specific error occurred.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// The provider returned a series that failed validation.
    #[error("Validation failed: {message}")]
    ValidationFailed {
        /// Description of the validation failure
        message: String,
    },

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
