//! Rate registry module.
//!
//! This module provides orchestration for rate providers, including:
//! - Live provider with a bounded wait
//! - Synthetic fallback when the live provider is unavailable
//! - Series validation

mod registry;
mod validator;

pub use registry::{FetchedRates, RateRegistry, DEFAULT_LIVE_TIMEOUT};
pub use validator::{SeriesValidator, ValidatorConfig};
