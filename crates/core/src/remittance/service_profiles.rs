//! Remittance service configuration.
//!
//! One static table drives both the per-service rate series and the cost
//! comparison, so a markdown multiplier can never disagree between the two.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// One band of a fee schedule.
///
/// `fee = flat + amount * percent` for amounts up to and including `up_to`;
/// `None` means no upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeTier {
    pub up_to: Option<Decimal>,
    pub flat: Decimal,
    pub percent: Decimal,
}

impl FeeTier {
    pub const fn flat(up_to: Option<Decimal>, flat: Decimal) -> Self {
        Self {
            up_to,
            flat,
            percent: Decimal::ZERO,
        }
    }

    fn covers(&self, amount: Decimal) -> bool {
        self.up_to.map_or(true, |cap| amount <= cap)
    }
}

/// A remittance service and how it charges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceProfile {
    pub name: &'static str,
    /// Fraction of the mid-market rate the service pays out (0.96 = 4% worse).
    pub markdown: Decimal,
    /// Ordered tiers; the first one covering the amount applies.
    pub fee_tiers: &'static [FeeTier],
    pub transfer_speed: &'static str,
}

impl ServiceProfile {
    /// Fee in USD for sending `amount` USD, rounded to cents.
    pub fn fee_for(&self, amount: Decimal) -> Decimal {
        let tier = self
            .fee_tiers
            .iter()
            .find(|t| t.covers(amount))
            .or_else(|| self.fee_tiers.last());

        match tier {
            Some(t) => (t.flat + amount * t.percent).round_dp(2),
            None => Decimal::ZERO,
        }
    }

    /// Rate the service pays out given the mid-market rate.
    pub fn effective_rate(&self, mid_market_rate: Decimal) -> Decimal {
        mid_market_rate * self.markdown
    }
}

const WISE_FEES: &[FeeTier] = &[FeeTier {
    up_to: None,
    flat: dec!(1.00),
    percent: dec!(0.0041),
}];

const PAYPAL_FEES: &[FeeTier] = &[FeeTier::flat(None, dec!(4.99))];

const WESTERN_UNION_FEES: &[FeeTier] = &[
    FeeTier::flat(Some(dec!(500)), dec!(5.00)),
    FeeTier::flat(Some(dec!(1000)), dec!(8.00)),
    FeeTier::flat(None, dec!(12.00)),
];

const BANK_WIRE_FEES: &[FeeTier] = &[FeeTier::flat(None, dec!(25.00))];

/// The configured services, in display order.
pub const SERVICE_PROFILES: &[ServiceProfile] = &[
    ServiceProfile {
        name: "Wise",
        markdown: dec!(0.998),
        fee_tiers: WISE_FEES,
        transfer_speed: "Same day",
    },
    ServiceProfile {
        name: "PayPal",
        markdown: dec!(0.960),
        fee_tiers: PAYPAL_FEES,
        transfer_speed: "Instant",
    },
    ServiceProfile {
        name: "Western Union",
        markdown: dec!(0.945),
        fee_tiers: WESTERN_UNION_FEES,
        transfer_speed: "Minutes",
    },
    ServiceProfile {
        name: "Bank Wire",
        markdown: dec!(0.935),
        fee_tiers: BANK_WIRE_FEES,
        transfer_speed: "3-5 days",
    },
];

pub fn find_profile(name: &str) -> Option<&'static ServiceProfile> {
    SERVICE_PROFILES.iter().find(|p| p.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wise_percentage_fee() {
        let wise = find_profile("Wise").unwrap();
        assert_eq!(wise.fee_for(dec!(1500)), dec!(7.15));
        assert_eq!(wise.fee_for(dec!(100)), dec!(1.41));
    }

    #[test]
    fn test_flat_fees() {
        assert_eq!(find_profile("PayPal").unwrap().fee_for(dec!(1500)), dec!(4.99));
        assert_eq!(find_profile("Bank Wire").unwrap().fee_for(dec!(1)), dec!(25.00));
    }

    #[test]
    fn test_western_union_tiers_are_inclusive() {
        let wu = find_profile("Western Union").unwrap();
        assert_eq!(wu.fee_for(dec!(500)), dec!(5.00));
        assert_eq!(wu.fee_for(dec!(500.01)), dec!(8.00));
        assert_eq!(wu.fee_for(dec!(1000)), dec!(8.00));
        assert_eq!(wu.fee_for(dec!(1000.01)), dec!(12.00));
        assert_eq!(wu.fee_for(dec!(25000)), dec!(12.00));
    }

    #[test]
    fn test_empty_schedule_is_free() {
        let free = ServiceProfile {
            name: "Free",
            markdown: Decimal::ONE,
            fee_tiers: &[],
            transfer_speed: "Instant",
        };
        assert_eq!(free.fee_for(dec!(100)), Decimal::ZERO);
    }

    #[test]
    fn test_schedule_without_open_tier_uses_last() {
        const CAPPED: &[FeeTier] = &[FeeTier::flat(Some(dec!(100)), dec!(2))];
        let capped = ServiceProfile {
            name: "Capped",
            markdown: Decimal::ONE,
            fee_tiers: CAPPED,
            transfer_speed: "Instant",
        };
        assert_eq!(capped.fee_for(dec!(5000)), dec!(2));
    }

    #[test]
    fn test_effective_rate() {
        let wise = find_profile("Wise").unwrap();
        assert_eq!(wise.effective_rate(dec!(83.5)), dec!(83.333));
    }

    #[test]
    fn test_markdowns_are_fractions() {
        for profile in SERVICE_PROFILES {
            assert!(profile.markdown > Decimal::ZERO && profile.markdown <= Decimal::ONE);
        }
        assert_eq!(SERVICE_PROFILES.len(), 4);
    }
}
