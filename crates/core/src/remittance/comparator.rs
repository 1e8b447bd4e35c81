//! Transfer cost comparison across services.
//!
//! Services hide their margin differently (some in the fee, some in the
//! rate), so ranking uses a single figure: the fee plus the USD value lost to
//! the spread versus the mid-market rate.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use super::service_profiles::ServiceProfile;
use crate::errors::{Error, Result};
use crate::Currency;

/// Decimal places kept on the effective exchange rate.
const EXCHANGE_RATE_SCALE: u32 = 6;

/// USD amounts (fees, costs, savings) are kept in cents.
const USD_SCALE: u32 = 2;

/// Largest USD amount that will be priced. Larger amounts are rejected as
/// `InvalidAmount`, keeping `amount × rate` well inside `Decimal`'s range.
pub const MAX_AMOUNT: Decimal = dec!(1000000000);

/// Outcome of sending a given amount through one service.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferCalculation {
    pub service_name: String,
    /// USD
    pub fee: Decimal,
    /// Target currency per 1 USD actually paid out.
    pub exchange_rate: Decimal,
    /// Target currency, rounded to the currency's display precision.
    pub amount_received: Decimal,
    /// USD: fee plus spread cost.
    pub total_cost: Decimal,
    pub transfer_speed: String,
    pub recommended: bool,
}

/// Ranked calculations with the best/worst spread.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferComparison {
    /// Ascending by total cost; exactly the first entry is recommended.
    pub calculations: Vec<TransferCalculation>,
    pub best: String,
    pub worst: String,
    /// USD saved by the best service over the worst one.
    pub savings: Decimal,
}

/// Validate a caller-supplied USD amount.
pub fn parse_amount(amount: f64) -> Result<Decimal> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(Error::InvalidAmount(format!(
            "amount must be a positive number, got {}",
            amount
        )));
    }
    let value = Decimal::try_from(amount)
        .map_err(|_| Error::InvalidAmount(format!("amount {} is out of range", amount)))?;
    if value <= Decimal::ZERO {
        return Err(Error::InvalidAmount(format!(
            "amount {} rounds to zero",
            amount
        )));
    }
    check_ceiling(value)?;
    Ok(value)
}

fn check_ceiling(amount: Decimal) -> Result<()> {
    if amount > MAX_AMOUNT {
        return Err(Error::InvalidAmount(format!(
            "amount {} exceeds the maximum of {}",
            amount, MAX_AMOUNT
        )));
    }
    Ok(())
}

/// Compute the cost of sending `amount` USD through one service.
///
/// Fails with `InvalidAmount` when the amount is above [`MAX_AMOUNT`] or the
/// payout does not fit in a `Decimal`.
pub fn calculate_transfer(
    profile: &ServiceProfile,
    amount: Decimal,
    currency: Currency,
    mid_market_rate: Decimal,
) -> Result<TransferCalculation> {
    check_ceiling(amount)?;
    let overflow = || Error::InvalidAmount(format!("amount {} is too large to price", amount));

    let fee = profile.fee_for(amount);
    let effective_rate = profile.effective_rate(mid_market_rate);

    let sendable = (amount - fee).max(Decimal::ZERO);
    let amount_received = sendable
        .checked_mul(effective_rate)
        .ok_or_else(overflow)?
        .round_dp(currency.decimals());

    let spread_cost = amount
        .checked_mul(mid_market_rate - effective_rate)
        .and_then(|v| v.checked_div(mid_market_rate))
        .ok_or_else(overflow)?;
    let total_cost = (fee + spread_cost).round_dp(USD_SCALE);

    Ok(TransferCalculation {
        service_name: profile.name.to_string(),
        fee,
        exchange_rate: effective_rate.round_dp(EXCHANGE_RATE_SCALE),
        amount_received,
        total_cost,
        transfer_speed: profile.transfer_speed.to_string(),
        recommended: false,
    })
}

/// Rank every service for a transfer of `amount` USD into `currency`.
pub fn compare_transfers(
    amount: Decimal,
    currency: Currency,
    mid_market_rate: Decimal,
    profiles: &[ServiceProfile],
) -> Result<TransferComparison> {
    if amount <= Decimal::ZERO {
        return Err(Error::InvalidAmount(amount.to_string()));
    }
    if mid_market_rate <= Decimal::ZERO {
        return Err(Error::InvalidInput(format!(
            "mid-market rate must be positive, got {}",
            mid_market_rate
        )));
    }
    if profiles.is_empty() {
        return Err(Error::InvalidInput("no services configured".to_string()));
    }

    let mut calculations: Vec<TransferCalculation> = profiles
        .iter()
        .map(|p| calculate_transfer(p, amount, currency, mid_market_rate))
        .collect::<Result<_>>()?;

    // Stable: ties keep configuration order.
    calculations.sort_by(|a, b| a.total_cost.cmp(&b.total_cost));
    calculations[0].recommended = true;

    let best = &calculations[0];
    let worst = &calculations[calculations.len() - 1];
    let savings = (worst.total_cost - best.total_cost).round_dp(USD_SCALE);

    Ok(TransferComparison {
        best: best.service_name.clone(),
        worst: worst.service_name.clone(),
        savings,
        calculations,
    })
}
