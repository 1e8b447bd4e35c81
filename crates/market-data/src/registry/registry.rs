//! Rate registry: live provider with a bounded wait and synthetic fallback.
//!
//! The registry is the only place that talks to a live provider. Whatever
//! goes wrong there (network failure, timeout, malformed or short series) is
//! logged and replaced by a synthetic series, so `fetch_rates` is total.

use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};

use super::SeriesValidator;
use crate::errors::MarketDataError;
use crate::models::{Currency, RatePoint};
use crate::provider::synthetic::SyntheticRateProvider;
use crate::provider::RateProvider;

/// Default budget for a live fetch before falling back.
pub const DEFAULT_LIVE_TIMEOUT: Duration = Duration::from_secs(3);

/// A series together with where it came from.
#[derive(Clone, Debug)]
pub struct FetchedRates {
    pub points: Vec<RatePoint>,
    /// Provider id that produced `points`.
    pub source: &'static str,
    /// True when a live provider was configured but the synthetic fallback
    /// had to be used.
    pub degraded: bool,
}

/// Registry orchestrating the live provider and the synthetic fallback.
pub struct RateRegistry {
    primary: Option<Arc<dyn RateProvider>>,
    fallback: SyntheticRateProvider,
    timeout: Duration,
    validator: SeriesValidator,
}

impl RateRegistry {
    /// Registry that only serves synthetic rates.
    pub fn synthetic(fallback: SyntheticRateProvider) -> Self {
        Self {
            primary: None,
            fallback,
            timeout: DEFAULT_LIVE_TIMEOUT,
            validator: SeriesValidator::new(),
        }
    }

    /// Registry that tries `primary` first, waiting at most `timeout`.
    pub fn with_primary(
        primary: Arc<dyn RateProvider>,
        fallback: SyntheticRateProvider,
        timeout: Duration,
    ) -> Self {
        Self {
            primary: Some(primary),
            fallback,
            timeout,
            validator: SeriesValidator::new(),
        }
    }

    pub fn with_validator(mut self, validator: SeriesValidator) -> Self {
        self.validator = validator;
        self
    }

    /// Id of the provider consulted first.
    pub fn primary_id(&self) -> &'static str {
        match &self.primary {
            Some(p) => p.id(),
            None => self.fallback.id(),
        }
    }

    /// Fetch `days` daily mid-market points for `currency`.
    ///
    /// Never fails: live-provider errors degrade to synthetic rates.
    pub async fn fetch_rates(&self, currency: Currency, days: u32) -> FetchedRates {
        if let Some(primary) = &self.primary {
            match self.fetch_from(primary.as_ref(), currency, days).await {
                Ok(points) => {
                    debug!(
                        "Fetched {} {} rates from {}",
                        points.len(),
                        currency,
                        primary.id()
                    );
                    return FetchedRates {
                        points,
                        source: primary.id(),
                        degraded: false,
                    };
                }
                Err(e) => {
                    warn!(
                        "Rate provider {} failed for {} ({}); serving synthetic rates (degraded mode)",
                        primary.id(),
                        currency,
                        e
                    );
                }
            }
        }

        FetchedRates {
            points: self.fallback.generate(currency, days),
            source: self.fallback.id(),
            degraded: self.primary.is_some(),
        }
    }

    async fn fetch_from(
        &self,
        provider: &dyn RateProvider,
        currency: Currency,
        days: u32,
    ) -> Result<Vec<RatePoint>, MarketDataError> {
        let points = tokio::time::timeout(self.timeout, provider.fetch_rates(currency, days))
            .await
            .map_err(|_| MarketDataError::Timeout {
                provider: provider.id().to_string(),
            })??;
        self.validator.validate(&points, days as usize)?;
        Ok(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ValidatorConfig;
    use async_trait::async_trait;
    use chrono::{Duration as ChronoDuration, Utc};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    struct FixedProvider {
        rate: Decimal,
    }

    #[async_trait]
    impl RateProvider for FixedProvider {
        fn id(&self) -> &'static str {
            "FIXED"
        }

        async fn fetch_rates(
            &self,
            _currency: Currency,
            days: u32,
        ) -> Result<Vec<RatePoint>, MarketDataError> {
            let now = Utc::now();
            Ok((0..days)
                .map(|i| {
                    RatePoint::new(now - ChronoDuration::days(i64::from(days - 1 - i)), self.rate)
                })
                .collect())
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl RateProvider for FailingProvider {
        fn id(&self) -> &'static str {
            "FAILING"
        }

        async fn fetch_rates(
            &self,
            _currency: Currency,
            _days: u32,
        ) -> Result<Vec<RatePoint>, MarketDataError> {
            Err(MarketDataError::ProviderError {
                provider: "FAILING".to_string(),
                message: "HTTP 503".to_string(),
            })
        }
    }

    struct SlowProvider;

    #[async_trait]
    impl RateProvider for SlowProvider {
        fn id(&self) -> &'static str {
            "SLOW"
        }

        async fn fetch_rates(
            &self,
            currency: Currency,
            days: u32,
        ) -> Result<Vec<RatePoint>, MarketDataError> {
            tokio::time::sleep(Duration::from_millis(500)).await;
            FixedProvider { rate: currency.base_rate() }
                .fetch_rates(currency, days)
                .await
        }
    }

    struct ShortSeriesProvider;

    #[async_trait]
    impl RateProvider for ShortSeriesProvider {
        fn id(&self) -> &'static str {
            "SHORT"
        }

        async fn fetch_rates(
            &self,
            currency: Currency,
            _days: u32,
        ) -> Result<Vec<RatePoint>, MarketDataError> {
            Ok(vec![RatePoint::new(Utc::now(), currency.base_rate())])
        }
    }

    fn registry_with(primary: Arc<dyn RateProvider>) -> RateRegistry {
        RateRegistry::with_primary(
            primary,
            SyntheticRateProvider::seeded(3),
            Duration::from_millis(50),
        )
    }

    #[tokio::test]
    async fn test_synthetic_only_is_not_degraded() {
        let registry = RateRegistry::synthetic(SyntheticRateProvider::seeded(1));
        let fetched = registry.fetch_rates(Currency::Inr, 7).await;
        assert_eq!(fetched.points.len(), 7);
        assert_eq!(fetched.source, "SYNTHETIC");
        assert!(!fetched.degraded);
        assert_eq!(registry.primary_id(), "SYNTHETIC");
    }

    #[tokio::test]
    async fn test_primary_success() {
        let registry = registry_with(Arc::new(FixedProvider { rate: dec!(83.5) }));
        let fetched = registry.fetch_rates(Currency::Inr, 5).await;
        assert_eq!(fetched.source, "FIXED");
        assert!(!fetched.degraded);
        assert!(fetched.points.iter().all(|p| p.rate == dec!(83.5)));
    }

    #[tokio::test]
    async fn test_primary_error_falls_back() {
        let registry = registry_with(Arc::new(FailingProvider));
        let fetched = registry.fetch_rates(Currency::Eur, 7).await;
        assert_eq!(fetched.source, "SYNTHETIC");
        assert!(fetched.degraded);
        assert_eq!(fetched.points.len(), 7);
    }

    #[tokio::test]
    async fn test_primary_timeout_falls_back() {
        let registry = registry_with(Arc::new(SlowProvider));
        let fetched = registry.fetch_rates(Currency::Cad, 7).await;
        assert_eq!(fetched.source, "SYNTHETIC");
        assert!(fetched.degraded);
    }

    #[tokio::test]
    async fn test_invalid_series_falls_back() {
        let registry = registry_with(Arc::new(ShortSeriesProvider));
        let fetched = registry.fetch_rates(Currency::Aud, 7).await;
        assert_eq!(fetched.source, "SYNTHETIC");
        assert!(fetched.degraded);
        assert_eq!(fetched.points.len(), 7);
    }

    #[tokio::test]
    async fn test_custom_validator_rejects_out_of_range_rates() {
        let validator = SeriesValidator::with_config(ValidatorConfig {
            max_rate: Some(dec!(50)),
        });
        let registry =
            registry_with(Arc::new(FixedProvider { rate: dec!(83.5) })).with_validator(validator);
        let fetched = registry.fetch_rates(Currency::Inr, 3).await;
        assert_eq!(fetched.source, "SYNTHETIC");
        assert!(fetched.degraded);
    }
}
