//! Rate series validation.
//!
//! Checks applied to series coming from live providers before they are
//! trusted:
//! - Exact requested length
//! - Strictly positive rates below a sanity ceiling
//! - Strictly increasing timestamps

use rust_decimal::Decimal;

use crate::errors::MarketDataError;
use crate::models::RatePoint;

/// Series validator configuration.
#[derive(Clone, Debug)]
pub struct ValidatorConfig {
    /// Maximum allowed rate value (for sanity check).
    pub max_rate: Option<Decimal>,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            max_rate: Some(Decimal::from(1_000_000i64)),
        }
    }
}

/// Rate series validator.
#[derive(Clone, Debug, Default)]
pub struct SeriesValidator {
    config: ValidatorConfig,
}

impl SeriesValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// Validate a series against the number of points that was requested.
    pub fn validate(&self, points: &[RatePoint], expected_len: usize) -> Result<(), MarketDataError> {
        if points.len() != expected_len {
            return Err(MarketDataError::ValidationFailed {
                message: format!("expected {} points, got {}", expected_len, points.len()),
            });
        }

        for point in points {
            if point.rate <= Decimal::ZERO {
                return Err(MarketDataError::ValidationFailed {
                    message: format!("non-positive rate {} at {}", point.rate, point.timestamp),
                });
            }
            if let Some(max) = self.config.max_rate {
                if point.rate > max {
                    return Err(MarketDataError::ValidationFailed {
                        message: format!("rate {} exceeds sanity ceiling {}", point.rate, max),
                    });
                }
            }
        }

        if let Some(pair) = points.windows(2).find(|w| w[1].timestamp <= w[0].timestamp) {
            return Err(MarketDataError::ValidationFailed {
                message: format!(
                    "timestamps out of order: {} then {}",
                    pair[0].timestamp, pair[1].timestamp
                ),
            });
        }

        Ok(())
    }
}
