use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::errors::MarketDataError;

/// Target currency for a USD transfer.
///
/// The set is closed: every variant has a reference mid-market rate and
/// display metadata, so a parsed `Currency` never needs a lookup that can
/// fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Inr,
    Eur,
    Gbp,
    Cad,
    Aud,
    Jpy,
    Cny,
    Mxn,
}

/// Display metadata for a currency, as shown next to transfer results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyInfo {
    pub code: String,
    pub symbol: String,
    pub country: String,
    pub flag: String,
    pub decimals: u32,
}

impl Currency {
    /// All supported currencies, in display order.
    pub const ALL: [Currency; 8] = [
        Currency::Inr,
        Currency::Eur,
        Currency::Gbp,
        Currency::Cad,
        Currency::Aud,
        Currency::Jpy,
        Currency::Cny,
        Currency::Mxn,
    ];

    /// ISO 4217 code.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Inr => "INR",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Cad => "CAD",
            Currency::Aud => "AUD",
            Currency::Jpy => "JPY",
            Currency::Cny => "CNY",
            Currency::Mxn => "MXN",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Inr => "₹",
            Currency::Eur => "€",
            Currency::Gbp => "£",
            Currency::Cad => "C$",
            Currency::Aud => "A$",
            Currency::Jpy => "¥",
            Currency::Cny => "¥",
            Currency::Mxn => "MX$",
        }
    }

    pub fn country(&self) -> &'static str {
        match self {
            Currency::Inr => "India",
            Currency::Eur => "Eurozone",
            Currency::Gbp => "United Kingdom",
            Currency::Cad => "Canada",
            Currency::Aud => "Australia",
            Currency::Jpy => "Japan",
            Currency::Cny => "China",
            Currency::Mxn => "Mexico",
        }
    }

    pub fn flag(&self) -> &'static str {
        match self {
            Currency::Inr => "🇮🇳",
            Currency::Eur => "🇪🇺",
            Currency::Gbp => "🇬🇧",
            Currency::Cad => "🇨🇦",
            Currency::Aud => "🇦🇺",
            Currency::Jpy => "🇯🇵",
            Currency::Cny => "🇨🇳",
            Currency::Mxn => "🇲🇽",
        }
    }

    /// Conventional display precision for amounts in this currency.
    pub fn decimals(&self) -> u32 {
        match self {
            Currency::Jpy => 0,
            _ => 2,
        }
    }

    /// Reference mid-market rate, in units of this currency per 1 USD.
    pub fn base_rate(&self) -> Decimal {
        match self {
            Currency::Inr => dec!(83.5),
            Currency::Eur => dec!(0.92),
            Currency::Gbp => dec!(0.79),
            Currency::Cad => dec!(1.36),
            Currency::Aud => dec!(1.52),
            Currency::Jpy => dec!(149.5),
            Currency::Cny => dec!(7.24),
            Currency::Mxn => dec!(17.10),
        }
    }

    pub fn info(&self) -> CurrencyInfo {
        CurrencyInfo {
            code: self.code().to_string(),
            symbol: self.symbol().to_string(),
            country: self.country().to_string(),
            flag: self.flag().to_string(),
            decimals: self.decimals(),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = MarketDataError;

    /// Parses a code case-insensitively, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Currency::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| MarketDataError::UnsupportedCurrency(code.to_string()))
    }
}
