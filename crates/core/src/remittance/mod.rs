//! Remittance module - service profiles, cost comparison and rate trends.

pub mod comparator;
pub mod rate_table;
mod remittance_model;
mod remittance_service;
mod remittance_traits;
pub mod service_profiles;
pub mod trends;


pub use comparator::{compare_transfers, parse_amount, TransferCalculation, TransferComparison};
pub use rate_table::{RateTable, ServiceRates, ServiceSeries};
pub use remittance_model::{
    CalculateTransfersResponse, TransferSummary, TrendAnalysis, TrendResponse, DEFAULT_TREND_DAYS,
    MAX_TREND_DAYS,
};
pub use remittance_service::RemittanceService;
pub use remittance_traits::RemittanceServiceTrait;
pub use service_profiles::{find_profile, FeeTier, ServiceProfile, SERVICE_PROFILES};
pub use trends::{analyze_series, find_best_rate, BestRate, Trend, TrendSummary, Volatility};
