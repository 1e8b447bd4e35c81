use async_trait::async_trait;

use super::remittance_model::{CalculateTransfersResponse, TrendResponse};
use super::service_profiles::ServiceProfile;
use crate::errors::Result;
use crate::CurrencyInfo;

/// Trait defining the contract for remittance service operations.
#[async_trait]
pub trait RemittanceServiceTrait: Send + Sync {
    fn supported_currencies(&self) -> Vec<CurrencyInfo>;

    fn service_profiles(&self) -> &[ServiceProfile];

    /// Rank every service for sending `amount` USD to `to_currency`.
    async fn calculate_transfers(
        &self,
        amount: f64,
        to_currency: &str,
    ) -> Result<CalculateTransfersResponse>;

    /// Rate history and trend for `to_currency` over `days` (default 7).
    async fn get_trend(&self, to_currency: &str, days: Option<u32>) -> Result<TrendResponse>;
}
