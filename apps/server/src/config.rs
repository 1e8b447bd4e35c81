use std::{net::SocketAddr, str::FromStr, time::Duration};

use anyhow::{anyhow, Context};
use finmate_market_data::provider::frankfurter::DEFAULT_BASE_URL;

/// Where mid-market rates come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatesMode {
    /// Seeded or entropy-driven random walk around reference rates.
    Synthetic,
    /// Frankfurter API, falling back to synthetic rates on failure.
    Live,
}

impl FromStr for RatesMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "synthetic" => Ok(RatesMode::Synthetic),
            "live" => Ok(RatesMode::Live),
            other => Err(anyhow!(
                "Invalid FM_RATES_MODE '{}': expected 'synthetic' or 'live'",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    fn parse(s: &str) -> Self {
        if s.eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Text
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub rates_mode: RatesMode,
    pub rates_api_url: String,
    pub rates_timeout: Duration,
    pub rates_seed: Option<u64>,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let listen_addr: SocketAddr = var("FM_LISTEN_ADDR", "0.0.0.0:8080")
            .parse()
            .context("Invalid FM_LISTEN_ADDR")?;
        let cors_allow = var("FM_CORS_ALLOW_ORIGINS", "*")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = var("FM_REQUEST_TIMEOUT_MS", "30000")
            .parse()
            .unwrap_or(30000);
        let rates_mode: RatesMode = var("FM_RATES_MODE", "synthetic").parse()?;
        let rates_api_url = var("FM_RATES_API_URL", DEFAULT_BASE_URL);
        let rates_timeout_ms: u64 = var("FM_RATES_TIMEOUT_MS", "3000")
            .parse()
            .unwrap_or(3000);
        let rates_seed = match lookup("FM_RATES_SEED") {
            Some(raw) => Some(
                raw.trim()
                    .parse::<u64>()
                    .context("Invalid FM_RATES_SEED")?,
            ),
            None => None,
        };
        let log_format = LogFormat::parse(&var("FM_LOG_FORMAT", "text"));

        Ok(Self {
            listen_addr,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            rates_mode,
            rates_api_url,
            rates_timeout: Duration::from_millis(rates_timeout_ms),
            rates_seed,
            log_format,
        })
    }
}
