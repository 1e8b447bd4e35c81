//! Rate provider trait definition.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{Currency, RatePoint};

/// Trait for exchange-rate sources.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use finmate_market_data::{Currency, MarketDataError, RatePoint, RateProvider};
///
/// struct FixedProvider;
///
/// #[async_trait]
/// impl RateProvider for FixedProvider {
///     fn id(&self) -> &'static str {
///         "FIXED"
///     }
///
///     async fn fetch_rates(
///         &self,
///         currency: Currency,
///         days: u32,
///     ) -> Result<Vec<RatePoint>, MarketDataError> {
///         // ...
///     }
/// }
/// ```
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Unique identifier, used in logs and in [`FetchedRates::source`](crate::FetchedRates).
    fn id(&self) -> &'static str;

    /// Fetch the mid-market USD → `currency` series for the last `days` days.
    ///
    /// # Returns
    ///
    /// Exactly `days` points ordered by timestamp ascending, the last one
    /// being the most recent available observation.
    async fn fetch_rates(
        &self,
        currency: Currency,
        days: u32,
    ) -> Result<Vec<RatePoint>, MarketDataError>;
}
