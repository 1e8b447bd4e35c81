//! Frankfurter API response models.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use serde::Deserialize;

/// Response of the time-series endpoint (`/{start}..{end}`).
///
/// Dates without published rates (weekends, holidays) are simply absent.
#[derive(Debug, Deserialize)]
pub struct FrankfurterSeriesResponse {
    #[allow(dead_code)]
    pub base: String,
    /// Date -> (currency code -> rate). BTreeMap keeps dates ascending.
    pub rates: BTreeMap<NaiveDate, HashMap<String, f64>>,
}

/// Error body returned with non-2xx statuses.
#[derive(Debug, Deserialize)]
pub struct FrankfurterErrorResponse {
    pub message: Option<String>,
}
