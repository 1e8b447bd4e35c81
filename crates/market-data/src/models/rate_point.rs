use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A dated exchange-rate observation, in units of target currency per 1 USD.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RatePoint {
    pub timestamp: DateTime<Utc>,
    pub rate: Decimal,
}

impl RatePoint {
    pub fn new(timestamp: DateTime<Utc>, rate: Decimal) -> Self {
        Self { timestamp, rate }
    }

    /// The same observation with the rate multiplied by `multiplier`.
    pub fn scaled(&self, multiplier: Decimal) -> Self {
        Self {
            timestamp: self.timestamp,
            rate: self.rate * multiplier,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_scaled_keeps_timestamp() {
        let now = Utc::now();
        let point = RatePoint::new(now, dec!(83.5));
        let scaled = point.scaled(dec!(0.998));
        assert_eq!(scaled.timestamp, now);
        assert_eq!(scaled.rate, dec!(83.333));
    }

    #[test]
    fn test_serializes_rate_as_number() {
        let point = RatePoint::new(Utc::now(), dec!(0.92));
        let value = serde_json::to_value(&point).unwrap();
        assert_eq!(value["rate"].as_f64(), Some(0.92));
        assert!(value["timestamp"].is_string());
    }
}
