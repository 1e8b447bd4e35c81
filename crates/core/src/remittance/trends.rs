//! Exchange-rate trend and volatility classification.

use chrono::{DateTime, Utc};
use rust_decimal::prelude::*;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::rate_table::ServiceRates;
use crate::errors::{Error, Result};
use crate::RatePoint;

/// Relative change (as a fraction) beyond which a series counts as moving.
pub const TREND_THRESHOLD: Decimal = dec!(0.0005);

/// Coefficient of variation (percent) below which volatility is low.
pub const LOW_VOLATILITY_CV: Decimal = dec!(1);

/// Coefficient of variation (percent) below which volatility is medium.
pub const MEDIUM_VOLATILITY_CV: Decimal = dec!(2.5);

const HUNDRED: Decimal = dec!(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    /// Advice for a sender, given how many days the trend covers.
    pub fn insight(&self, days: usize) -> String {
        match self {
            Trend::Stable => format!(
                "Exchange rate has been stable over the past {} days. No immediate rush to transfer.",
                days
            ),
            Trend::Up => format!(
                "Rate is trending upward over the past {} days. Consider waiting for a better rate.",
                days
            ),
            Trend::Down => format!(
                "Rate is trending downward over the past {} days. Now might be a good time to transfer.",
                days
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Volatility {
    Low,
    Medium,
    High,
}

/// Direction, magnitude and spread of a rate series.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendSummary {
    pub trend: Trend,
    /// Percent, first to last point.
    pub percentage_change: Decimal,
    pub insight: String,
    pub volatility: Volatility,
}

/// Highest rate any service offered within the window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BestRate {
    pub service: String,
    pub rate: Decimal,
    pub date: DateTime<Utc>,
}

pub fn analyze_series(points: &[RatePoint]) -> Result<TrendSummary> {
    let (first, last) = match (points.first(), points.last()) {
        (Some(first), Some(last)) => (first.rate, last.rate),
        _ => return Err(Error::InvalidInput("empty rate series".to_string())),
    };
    if first <= Decimal::ZERO {
        return Err(Error::InvalidInput(format!(
            "rate series must start with a positive rate, got {}",
            first
        )));
    }

    let ratio = (last - first) / first;
    let trend = if ratio > TREND_THRESHOLD {
        Trend::Up
    } else if ratio < -TREND_THRESHOLD {
        Trend::Down
    } else {
        Trend::Stable
    };

    let rates: Vec<Decimal> = points.iter().map(|p| p.rate).collect();
    let volatility = classify_volatility(&rates);

    Ok(TrendSummary {
        trend,
        percentage_change: ratio * HUNDRED,
        insight: trend.insight(points.len()),
        volatility,
    })
}

/// Population standard deviation over the mean, in percent.
pub fn coefficient_of_variation(rates: &[Decimal]) -> Decimal {
    if rates.len() < 2 {
        return Decimal::ZERO;
    }

    let count = Decimal::from(rates.len());
    let sum: Decimal = rates.iter().sum();
    let mean = sum / count;
    if mean <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let sum_squared_diff: Decimal = rates
        .iter()
        .map(|&r| {
            let diff = r - mean;
            diff * diff
        })
        .sum();

    let variance = sum_squared_diff / count;
    if variance.is_sign_negative() {
        return Decimal::ZERO;
    }

    let std_dev = variance.sqrt().unwrap_or(Decimal::ZERO);
    std_dev / mean * HUNDRED
}

pub fn classify_volatility(rates: &[Decimal]) -> Volatility {
    let cv = coefficient_of_variation(rates);
    if cv < LOW_VOLATILITY_CV {
        Volatility::Low
    } else if cv < MEDIUM_VOLATILITY_CV {
        Volatility::Medium
    } else {
        Volatility::High
    }
}

/// Maximum rate across every service series.
///
/// Ties go to the earlier service, then the earlier date.
pub fn find_best_rate(service_rates: &ServiceRates) -> Option<BestRate> {
    let mut best: Option<BestRate> = None;
    for series in service_rates.iter() {
        for point in &series.points {
            let better = best.as_ref().map_or(true, |b| point.rate > b.rate);
            if better {
                best = Some(BestRate {
                    service: series.service.to_string(),
                    rate: point.rate,
                    date: point.timestamp,
                });
            }
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remittance::rate_table::ServiceSeries;
    use chrono::Duration;

    fn series(rates: &[Decimal]) -> Vec<RatePoint> {
        let now = Utc::now();
        let n = rates.len() as i64;
        rates
            .iter()
            .enumerate()
            .map(|(i, r)| RatePoint::new(now - Duration::days(n - 1 - i as i64), *r))
            .collect()
    }

    #[test]
    fn test_one_percent_per_step_is_up() {
        let mut rates = vec![dec!(100)];
        for _ in 0..6 {
            let next = *rates.last().unwrap() * dec!(1.01);
            rates.push(next);
        }

        let summary = analyze_series(&series(&rates)).unwrap();
        assert_eq!(summary.trend, Trend::Up);
        assert_eq!(summary.percentage_change, dec!(6.1520150601));
        assert!(summary.insight.contains("upward"));
        assert!(summary.insight.contains("7 days"));
    }

    #[test]
    fn test_falling_series_is_down() {
        let summary = analyze_series(&series(&[dec!(0.92), dec!(0.91), dec!(0.90)])).unwrap();
        assert_eq!(summary.trend, Trend::Down);
        assert!(summary.percentage_change < Decimal::ZERO);
        assert!(summary.insight.contains("good time to transfer"));
    }

    #[test]
    fn test_threshold_is_exclusive() {
        // +0.05% exactly
        let summary = analyze_series(&series(&[dec!(100), dec!(100.05)])).unwrap();
        assert_eq!(summary.trend, Trend::Stable);

        let summary = analyze_series(&series(&[dec!(100), dec!(100.051)])).unwrap();
        assert_eq!(summary.trend, Trend::Up);

        let summary = analyze_series(&series(&[dec!(100), dec!(99.95)])).unwrap();
        assert_eq!(summary.trend, Trend::Stable);
    }

    #[test]
    fn test_single_point() {
        let summary = analyze_series(&series(&[dec!(83.5)])).unwrap();
        assert_eq!(summary.trend, Trend::Stable);
        assert_eq!(summary.percentage_change, Decimal::ZERO);
        assert_eq!(summary.volatility, Volatility::Low);
        assert!(summary.insight.contains("stable"));
    }

    #[test]
    fn test_empty_series_is_invalid_input() {
        assert!(matches!(analyze_series(&[]), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_volatility_buckets() {
        let calm = [dec!(83.5), dec!(83.6), dec!(83.4), dec!(83.55), dec!(83.45)];
        assert_eq!(classify_volatility(&calm), Volatility::Low);

        // population CV = 2%
        let moderate = [dec!(98), dec!(102)];
        assert_eq!(coefficient_of_variation(&moderate).round_dp(6), dec!(2));
        assert_eq!(classify_volatility(&moderate), Volatility::Medium);

        let swings = [dec!(95), dec!(105), dec!(95), dec!(105)];
        assert_eq!(coefficient_of_variation(&swings).round_dp(6), dec!(5));
        assert_eq!(classify_volatility(&swings), Volatility::High);

        assert_eq!(classify_volatility(&[dec!(1.36)]), Volatility::Low);
        assert_eq!(classify_volatility(&[]), Volatility::Low);
    }

    #[test]
    fn test_volatility_boundaries() {
        assert_eq!(classify_volatility(&[dec!(99.02), dec!(100.98)]), Volatility::Low);
        assert_eq!(classify_volatility(&[dec!(98.98), dec!(101.02)]), Volatility::Medium);
        assert_eq!(classify_volatility(&[dec!(97.52), dec!(102.48)]), Volatility::Medium);
        assert_eq!(classify_volatility(&[dec!(97.48), dec!(102.52)]), Volatility::High);
    }

    #[test]
    fn test_best_rate_across_services() {
        let points = series(&[dec!(83.0), dec!(84.0), dec!(83.5)]);
        let rates = ServiceRates(vec![
            ServiceSeries {
                service: "Wise",
                points: points.iter().map(|p| p.scaled(dec!(0.998))).collect(),
            },
            ServiceSeries {
                service: "PayPal",
                points: points.iter().map(|p| p.scaled(dec!(0.96))).collect(),
            },
        ]);

        let best = find_best_rate(&rates).unwrap();
        assert_eq!(best.service, "Wise");
        assert_eq!(best.rate, dec!(83.832));
        assert_eq!(best.date, points[1].timestamp);
    }

    #[test]
    fn test_best_rate_ties_keep_first() {
        let points = series(&[dec!(1.5), dec!(1.5)]);
        let rates = ServiceRates(vec![
            ServiceSeries {
                service: "A",
                points: points.clone(),
            },
            ServiceSeries {
                service: "B",
                points: points.clone(),
            },
        ]);

        let best = find_best_rate(&rates).unwrap();
        assert_eq!(best.service, "A");
        assert_eq!(best.date, points[0].timestamp);
        assert!(find_best_rate(&ServiceRates::default()).is_none());
    }

    #[test]
    fn test_enums_serialize_lowercase() {
        assert_eq!(serde_json::to_value(Trend::Up).unwrap(), "up");
        assert_eq!(serde_json::to_value(Volatility::Medium).unwrap(), "medium");
    }
}
