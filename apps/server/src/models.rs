use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

/// Both fields are optional at the wire level so that a missing or `null`
/// value reaches validation and fails with the same error as a bad value.
#[derive(Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CalculateTransfersRequest {
    /// USD amount to send.
    #[schema(example = 1500.0)]
    pub amount: Option<f64>,
    /// ISO 4217 code of the currency the recipient gets.
    #[schema(example = "INR")]
    pub to_currency: Option<String>,
}

#[derive(Deserialize, IntoParams, Debug, Clone)]
#[into_params(parameter_in = Query)]
pub struct TrendQuery {
    /// ISO 4217 code, e.g. `INR`.
    pub currency: Option<String>,
    /// Lookback window in days (1-365, default 7).
    pub days: Option<u32>,
}
