//! Mid-market series plus one derived series per service.

use rust_decimal::Decimal;
use serde::ser::{Serialize, SerializeMap, Serializer};

use super::service_profiles::ServiceProfile;
use crate::errors::{Error, Result};
use crate::RatePoint;

/// Decimal places kept on derived service rates.
const SERVICE_RATE_SCALE: u32 = 6;

/// Rate series for one service.
#[derive(Clone, Debug, PartialEq)]
pub struct ServiceSeries {
    pub service: &'static str,
    pub points: Vec<RatePoint>,
}

/// Per-service series in configuration order.
///
/// Serializes as a JSON object keyed by service name, keeping that order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ServiceRates(pub Vec<ServiceSeries>);

impl ServiceRates {
    pub fn get(&self, service: &str) -> Option<&[RatePoint]> {
        self.0
            .iter()
            .find(|s| s.service == service)
            .map(|s| s.points.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ServiceSeries> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for ServiceRates {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for series in &self.0 {
            map.serialize_entry(series.service, &series.points)?;
        }
        map.end()
    }
}

/// The authoritative rate table for one request.
#[derive(Clone, Debug)]
pub struct RateTable {
    mid_market: Vec<RatePoint>,
    service_rates: ServiceRates,
}

impl RateTable {
    /// Derive every service's series from the mid-market series.
    pub fn build(mid_market: Vec<RatePoint>, profiles: &[ServiceProfile]) -> Result<Self> {
        if mid_market.is_empty() {
            return Err(Error::InvalidInput("empty rate series".to_string()));
        }

        let service_rates = profiles
            .iter()
            .map(|profile| ServiceSeries {
                service: profile.name,
                points: mid_market
                    .iter()
                    .map(|p| {
                        let mut scaled = p.scaled(profile.markdown);
                        scaled.rate = scaled.rate.round_dp(SERVICE_RATE_SCALE);
                        scaled
                    })
                    .collect(),
            })
            .collect();

        Ok(Self {
            mid_market,
            service_rates: ServiceRates(service_rates),
        })
    }

    pub fn mid_market(&self) -> &[RatePoint] {
        &self.mid_market
    }

    pub fn service_rates(&self) -> &ServiceRates {
        &self.service_rates
    }

    /// Most recent mid-market rate.
    pub fn latest_mid_market_rate(&self) -> Decimal {
        // build() guarantees at least one point
        self.mid_market
            .last()
            .map(|p| p.rate)
            .unwrap_or(Decimal::ZERO)
    }

    pub fn into_parts(self) -> (Vec<RatePoint>, ServiceRates) {
        (self.mid_market, self.service_rates)
    }
}
