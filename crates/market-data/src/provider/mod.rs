//! Exchange-rate provider abstractions and implementations.
//!
//! This module contains:
//! - The `RateProvider` trait that all providers implement
//! - `SyntheticRateProvider`, which needs no network access
//! - `FrankfurterProvider`, which fetches published reference rates
//!
//! Providers receive an already-validated [`Currency`](crate::Currency), so
//! the only failures they report are their own.

mod traits;

pub mod frankfurter;
pub mod synthetic;

pub use traits::RateProvider;
