//! Frankfurter provider for published reference exchange rates.
//!
//! Uses the time-series endpoint of <https://www.frankfurter.app>, which
//! needs no API key. Rates are only published on working days, so the
//! provider requests a calendar window wide enough to contain the requested
//! number of observations and keeps the most recent ones.

mod models;

use async_trait::async_trait;
use chrono::{Duration, NaiveTime, TimeZone, Utc};
use log::debug;
use reqwest::Client;
use rust_decimal::Decimal;

use crate::errors::MarketDataError;
use crate::models::{Currency, RatePoint};
use crate::provider::RateProvider;

use models::{FrankfurterErrorResponse, FrankfurterSeriesResponse};

/// Provider ID constant
const PROVIDER_ID: &str = "FRANKFURTER";

/// Public endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.frankfurter.app";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

/// Frankfurter exchange-rate provider.
///
/// # Example
///
/// ```ignore
/// use finmate_market_data::FrankfurterProvider;
///
/// let provider = FrankfurterProvider::new("https://api.frankfurter.app");
/// ```
pub struct FrankfurterProvider {
    client: Client,
    base_url: String,
}

impl FrankfurterProvider {
    /// Create a provider against the given base URL (no trailing slash needed).
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Calendar days to request so that `days` working-day observations fit.
    fn lookback_window(days: u32) -> i64 {
        i64::from(days) * 2 + 7
    }

    fn series_url(&self, currency: Currency, days: u32) -> String {
        let end = Utc::now().date_naive();
        let start = end - Duration::days(Self::lookback_window(days));
        format!(
            "{}/{}..{}?from=USD&to={}",
            self.base_url,
            start.format("%Y-%m-%d"),
            end.format("%Y-%m-%d"),
            currency.code()
        )
    }

    /// Parse a time-series body into the last `days` observations.
    fn parse_series(
        body: &str,
        currency: Currency,
        days: u32,
    ) -> Result<Vec<RatePoint>, MarketDataError> {
        let response: FrankfurterSeriesResponse =
            serde_json::from_str(body).map_err(|e| MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to parse response: {}", e),
            })?;

        let mut points = Vec::with_capacity(response.rates.len());
        for (date, rates) in response.rates {
            let Some(rate) = rates.get(currency.code()) else {
                continue;
            };
            let rate = Decimal::try_from(*rate).map_err(|_| MarketDataError::ValidationFailed {
                message: format!("Invalid rate {} on {}", rate, date),
            })?;
            let timestamp = Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN));
            points.push(RatePoint::new(timestamp, rate));
        }

        let wanted = days as usize;
        if points.len() < wanted {
            return Err(MarketDataError::NoDataForRange);
        }
        Ok(points.split_off(points.len() - wanted))
    }
}

#[async_trait]
impl RateProvider for FrankfurterProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_rates(
        &self,
        currency: Currency,
        days: u32,
    ) -> Result<Vec<RatePoint>, MarketDataError> {
        let url = self.series_url(currency, days);
        debug!("Frankfurter request: {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                MarketDataError::Timeout {
                    provider: PROVIDER_ID.to_string(),
                }
            } else {
                MarketDataError::ProviderError {
                    provider: PROVIDER_ID.to_string(),
                    message: format!("Request failed: {}", e),
                }
            }
        })?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<FrankfurterErrorResponse>(&body)
                .ok()
                .and_then(|e| e.message)
                .unwrap_or_else(|| format!("HTTP {}", status));
            return Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message,
            });
        }

        Self::parse_series(&body, currency, days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const SAMPLE: &str = r#"{
        "amount": 1.0,
        "base": "USD",
        "start_date": "2024-03-01",
        "end_date": "2024-03-08",
        "rates": {
            "2024-03-08": {"INR": 82.71},
            "2024-03-01": {"INR": 82.90},
            "2024-03-04": {"INR": 82.88},
            "2024-03-05": {"INR": 82.85},
            "2024-03-06": {"INR": 82.80},
            "2024-03-07": {"INR": 82.75}
        }
    }"#;

    #[test]
    fn test_parse_keeps_most_recent_points_in_order() {
        let points = FrankfurterProvider::parse_series(SAMPLE, Currency::Inr, 3).unwrap();
        assert_eq!(points.len(), 3);
        assert_eq!(points[0].rate, dec!(82.80));
        assert_eq!(points[2].rate, dec!(82.71));
        assert!(points[0].timestamp < points[1].timestamp);
        assert_eq!(points[2].timestamp.format("%Y-%m-%d").to_string(), "2024-03-08");
    }

    #[test]
    fn test_parse_not_enough_points() {
        let err = FrankfurterProvider::parse_series(SAMPLE, Currency::Inr, 10).unwrap_err();
        assert!(matches!(err, MarketDataError::NoDataForRange));
    }

    #[test]
    fn test_parse_missing_currency() {
        let err = FrankfurterProvider::parse_series(SAMPLE, Currency::Eur, 1).unwrap_err();
        assert!(matches!(err, MarketDataError::NoDataForRange));
    }

    #[test]
    fn test_parse_malformed_body() {
        let err = FrankfurterProvider::parse_series("not json", Currency::Inr, 1).unwrap_err();
        assert!(matches!(err, MarketDataError::ProviderError { .. }));
    }

    #[test]
    fn test_series_url() {
        let provider = FrankfurterProvider::new("https://rates.example.com/");
        let url = provider.series_url(Currency::Gbp, 7);
        assert!(url.starts_with("https://rates.example.com/"));
        assert!(url.ends_with("?from=USD&to=GBP"));
        assert!(url.contains(".."));
    }

    #[test]
    fn test_lookback_covers_weekends() {
        assert_eq!(FrankfurterProvider::lookback_window(7), 21);
        assert!(FrankfurterProvider::lookback_window(30) >= 30 * 7 / 5);
    }

    #[test]
    fn test_provider_id() {
        let provider = FrankfurterProvider::new(DEFAULT_BASE_URL);
        assert_eq!(provider.id(), "FRANKFURTER");
    }
}
