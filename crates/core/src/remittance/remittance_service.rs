use std::sync::Arc;

use async_trait::async_trait;
use finmate_market_data::{FetchedRates, RateRegistry};
use log::debug;

use super::comparator::{compare_transfers, parse_amount};
use super::rate_table::RateTable;
use super::remittance_model::{
    CalculateTransfersResponse, TransferSummary, TrendAnalysis, TrendResponse, DEFAULT_TREND_DAYS,
    MAX_TREND_DAYS,
};
use super::remittance_traits::RemittanceServiceTrait;
use super::service_profiles::{ServiceProfile, SERVICE_PROFILES};
use super::trends::{analyze_series, find_best_rate};
use crate::errors::{Error, Result};
use crate::{Currency, CurrencyInfo};

#[derive(Clone)]
pub struct RemittanceService {
    registry: Arc<RateRegistry>,
    profiles: &'static [ServiceProfile],
}

impl RemittanceService {
    pub fn new(registry: Arc<RateRegistry>) -> Self {
        Self {
            registry,
            profiles: SERVICE_PROFILES,
        }
    }

    /// Use a different service table.
    pub fn with_profiles(mut self, profiles: &'static [ServiceProfile]) -> Self {
        self.profiles = profiles;
        self
    }

    fn resolve_days(days: Option<u32>) -> Result<u32> {
        match days.unwrap_or(DEFAULT_TREND_DAYS) {
            0 => Err(Error::InvalidInput("days must be at least 1".to_string())),
            d if d > MAX_TREND_DAYS => Err(Error::InvalidInput(format!(
                "days must be at most {}, got {}",
                MAX_TREND_DAYS, d
            ))),
            d => Ok(d),
        }
    }

    /// Fetch the mid-market series and derive the per-service series from it.
    ///
    /// Returns the table with the id of the provider that served it and
    /// whether the registry had to fall back.
    async fn load_rate_table(
        &self,
        currency: Currency,
        days: u32,
    ) -> Result<(RateTable, &'static str, bool)> {
        let FetchedRates {
            points,
            source,
            degraded,
        } = self.registry.fetch_rates(currency, days).await;
        let table = RateTable::build(points, self.profiles)?;
        Ok((table, source, degraded))
    }
}

#[async_trait]
impl RemittanceServiceTrait for RemittanceService {
    fn supported_currencies(&self) -> Vec<CurrencyInfo> {
        Currency::ALL.iter().map(Currency::info).collect()
    }

    fn service_profiles(&self) -> &[ServiceProfile] {
        self.profiles
    }

    async fn calculate_transfers(
        &self,
        amount: f64,
        to_currency: &str,
    ) -> Result<CalculateTransfersResponse> {
        let amount = parse_amount(amount)?;
        let currency: Currency = to_currency.parse()?;

        let (table, source, _) = self.load_rate_table(currency, DEFAULT_TREND_DAYS).await?;
        let mid_market_rate = table.latest_mid_market_rate();
        debug!(
            "Pricing {} USD -> {} at mid-market {} (source {})",
            amount, currency, mid_market_rate, source
        );

        let comparison = compare_transfers(amount, currency, mid_market_rate, self.profiles)?;

        Ok(CalculateTransfersResponse {
            calculations: comparison.calculations,
            summary: TransferSummary {
                amount,
                to_currency: currency,
                currency_info: currency.info(),
                best: comparison.best,
                savings: comparison.savings,
                mid_market_rate,
            },
        })
    }

    async fn get_trend(&self, to_currency: &str, days: Option<u32>) -> Result<TrendResponse> {
        let currency: Currency = to_currency.parse()?;
        let days = Self::resolve_days(days)?;

        let (table, source, degraded) = self.load_rate_table(currency, days).await?;
        let summary = analyze_series(table.mid_market())?;
        let best_rate = find_best_rate(table.service_rates());
        debug!(
            "{} over {} days: {:?} ({}%), volatility {:?}",
            currency, days, summary.trend, summary.percentage_change, summary.volatility
        );

        let (rates, service_rates) = table.into_parts();
        Ok(TrendResponse {
            currency,
            currency_info: currency.info(),
            rates,
            service_rates,
            analysis: TrendAnalysis {
                trend: summary.trend,
                percentage_change: summary.percentage_change,
                insight: summary.insight,
                best_rate,
                volatility: summary.volatility,
            },
            rate_source: source.to_string(),
            degraded,
        })
    }
}
