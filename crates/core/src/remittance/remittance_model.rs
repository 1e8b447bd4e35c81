use rust_decimal::Decimal;
use serde::Serialize;

use super::comparator::TransferCalculation;
use super::rate_table::ServiceRates;
use super::trends::{BestRate, Trend, Volatility};
use crate::{Currency, CurrencyInfo, RatePoint};

/// Default lookback window for trend analysis and the comparator's rate table.
pub const DEFAULT_TREND_DAYS: u32 = 7;

/// Longest lookback window accepted.
pub const MAX_TREND_DAYS: u32 = 365;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferSummary {
    /// USD sent
    pub amount: Decimal,
    pub to_currency: Currency,
    pub currency_info: CurrencyInfo,
    pub best: String,
    pub savings: Decimal,
    /// Mid-market rate the comparison was priced at.
    pub mid_market_rate: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateTransfersResponse {
    pub calculations: Vec<TransferCalculation>,
    pub summary: TransferSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendAnalysis {
    pub trend: Trend,
    pub percentage_change: Decimal,
    pub insight: String,
    pub best_rate: Option<BestRate>,
    pub volatility: Volatility,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendResponse {
    pub currency: Currency,
    pub currency_info: CurrencyInfo,
    /// Mid-market series, oldest first.
    pub rates: Vec<RatePoint>,
    pub service_rates: ServiceRates,
    pub analysis: TrendAnalysis,
    /// Provider that produced `rates`.
    pub rate_source: String,
    /// True when the live provider failed and synthetic rates were served.
    pub degraded: bool,
}
