//! Currency and amount helpers
//!
//! Amounts are plain `rust_decimal::Decimal` values so persisted documents
//! stay a flat JSON shape. The currency is a document-wide setting and only
//! matters for rounding.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Currency codes following ISO 4217
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    MXN,
    USD,
    EUR,
    COP,
    CLP,
    ARS,
}

impl Currency {
    /// Returns the number of decimal places for this currency
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::CLP => 0,
            _ => 2,
        }
    }

    /// Returns the ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::MXN => "MXN",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::COP => "COP",
            Currency::CLP => "CLP",
            Currency::ARS => "ARS",
        }
    }

    /// Rounds an amount to this currency's minor unit (half away from zero)
    pub fn round(&self, amount: Decimal) -> Decimal {
        amount.round_dp_with_strategy(
            self.decimal_places(),
            RoundingStrategy::MidpointAwayFromZero,
        )
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// `part` as a percentage of `whole`, rounded to two decimals
///
/// Returns `None` when `whole` is zero.
pub fn percentage_of(part: Decimal, whole: Decimal) -> Option<Decimal> {
    if whole.is_zero() {
        return None;
    }
    Some((part * dec!(100) / whole).round_dp(2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(Currency::MXN.round(dec!(10.125)), dec!(10.13));
        assert_eq!(Currency::MXN.round(dec!(-10.125)), dec!(-10.13));
    }

    #[test]
    fn test_percentage_of() {
        assert_eq!(percentage_of(dec!(400), dec!(1000)), Some(dec!(40)));
        assert_eq!(percentage_of(dec!(1), dec!(3)), Some(dec!(33.33)));
        assert_eq!(percentage_of(dec!(1), Decimal::ZERO), None);
    }

    #[test]
    fn test_currency_serde_uppercase() {
        let json = serde_json::to_string(&Currency::MXN).unwrap();
        assert_eq!(json, "\"MXN\"");
    }
}
