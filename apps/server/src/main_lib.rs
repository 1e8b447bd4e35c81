use std::sync::Arc;

use finmate_core::remittance::{RemittanceService, RemittanceServiceTrait};
use finmate_market_data::{FrankfurterProvider, RateRegistry, SyntheticRateProvider};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{Config, LogFormat, RatesMode};

pub struct AppState {
    pub remittance_service: Arc<dyn RemittanceServiceTrait>,
}

pub fn init_tracing(log_format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format == LogFormat::Json {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let fallback = match config.rates_seed {
        Some(seed) => SyntheticRateProvider::seeded(seed),
        None => SyntheticRateProvider::new(),
    };

    let registry = match config.rates_mode {
        RatesMode::Synthetic => RateRegistry::synthetic(fallback),
        RatesMode::Live => {
            let live = FrankfurterProvider::new(config.rates_api_url.as_str());
            RateRegistry::with_primary(Arc::new(live), fallback, config.rates_timeout)
        }
    };
    tracing::info!(
        "Rate source: {} (mode {:?}, seed {:?})",
        registry.primary_id(),
        config.rates_mode,
        config.rates_seed
    );

    let remittance_service = Arc::new(RemittanceService::new(Arc::new(registry)));

    Ok(Arc::new(AppState { remittance_service }))
}
