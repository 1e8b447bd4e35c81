//! Synthetic exchange-rate provider.
//!
//! Builds a daily series around each currency's reference mid-market rate,
//! applying a small uniform perturbation to every point so charts do not
//! render a perfectly flat line. No network or disk access is involved.
//!
//! The random source is chosen per call: a fixed seed reproduces the same
//! series for the same timestamp, otherwise the generator is seeded from
//! entropy. The provider itself holds no mutable state.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::errors::MarketDataError;
use crate::models::{Currency, RatePoint};
use crate::provider::RateProvider;

/// Provider ID constant
const PROVIDER_ID: &str = "SYNTHETIC";

/// Default perturbation band, as a fraction of the reference rate (±0.5%).
pub const DEFAULT_JITTER: Decimal = dec!(0.005);

/// Resolution of the uniform draw inside the band.
const DRAW_STEPS: i64 = 1_000_000;

/// Decimal places kept on generated rates.
const RATE_SCALE: u32 = 6;

/// Synthetic provider for exchange-rate series.
///
/// # Example
///
/// ```
/// use finmate_market_data::{Currency, SyntheticRateProvider};
///
/// let provider = SyntheticRateProvider::seeded(42);
/// let series = provider.generate(Currency::Inr, 7);
/// assert_eq!(series.len(), 7);
/// ```
#[derive(Clone, Debug)]
pub struct SyntheticRateProvider {
    seed: Option<u64>,
    jitter: Decimal,
}

impl Default for SyntheticRateProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntheticRateProvider {
    /// Create a provider that draws from entropy on every call.
    pub fn new() -> Self {
        Self {
            seed: None,
            jitter: DEFAULT_JITTER,
        }
    }

    /// Create a provider whose output is reproducible.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            jitter: DEFAULT_JITTER,
        }
    }

    /// Override the perturbation band. Zero yields a flat series at the
    /// reference rate.
    pub fn with_jitter(mut self, jitter: Decimal) -> Self {
        self.jitter = jitter.abs();
        self
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn jitter(&self) -> Decimal {
        self.jitter
    }

    /// Generate `days` daily points ending now.
    pub fn generate(&self, currency: Currency, days: u32) -> Vec<RatePoint> {
        self.generate_at(currency, days, Utc::now())
    }

    /// Generate `days` daily points, the last one stamped `now`.
    pub fn generate_at(&self, currency: Currency, days: u32, now: DateTime<Utc>) -> Vec<RatePoint> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.generate_with_rng(&mut rng, currency, days, now)
    }

    fn generate_with_rng<R: Rng>(
        &self,
        rng: &mut R,
        currency: Currency,
        days: u32,
        now: DateTime<Utc>,
    ) -> Vec<RatePoint> {
        let base_rate = currency.base_rate();

        (0..days)
            .map(|i| {
                let days_ago = i64::from(days - 1 - i);
                let draw = Decimal::new(rng.gen_range(-DRAW_STEPS..=DRAW_STEPS), 6);
                let rate = (base_rate * (Decimal::ONE + draw * self.jitter)).round_dp(RATE_SCALE);
                RatePoint::new(now - Duration::days(days_ago), rate)
            })
            .collect()
    }
}

#[async_trait]
impl RateProvider for SyntheticRateProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_rates(
        &self,
        currency: Currency,
        days: u32,
    ) -> Result<Vec<RatePoint>, MarketDataError> {
        Ok(self.generate(currency, days))
    }
}
