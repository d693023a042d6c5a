//! Fixed-point monetary value.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ChargeError;

/// Number of nanos in one unit.
const NANOS_PER_UNIT: i32 = 1_000_000_000;

/// Fixed-point monetary value: ISO 4217 currency code plus integer
/// major units and fractional nanos.
///
/// Amounts are split into whole units and a 0..=999,999,999 nano part
/// to avoid floating-point precision issues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    currency_code: String,
    units: i64,
    nanos: i32,
}

impl Money {
    /// Creates a new Money value, rejecting invalid amounts.
    pub fn new(
        currency_code: impl Into<String>,
        units: i64,
        nanos: i32,
    ) -> Result<Self, ChargeError> {
        let money = Self {
            currency_code: currency_code.into(),
            units,
            nanos,
        };
        money.validate()?;
        Ok(money)
    }

    /// Checks the Money invariants.
    ///
    /// Deserialized values bypass [`Money::new`], so callers validating
    /// inbound requests must invoke this explicitly.
    pub fn validate(&self) -> Result<(), ChargeError> {
        if self.currency_code.trim().is_empty() {
            return Err(ChargeError::InvalidAmount(
                "currency code cannot be empty".into(),
            ));
        }
        if self.units < 0 || self.nanos < 0 {
            return Err(ChargeError::InvalidAmount(
                "amount cannot be negative".into(),
            ));
        }
        if self.nanos >= NANOS_PER_UNIT {
            return Err(ChargeError::InvalidAmount(format!(
                "nanos must be below {}, got {}",
                NANOS_PER_UNIT, self.nanos
            )));
        }
        Ok(())
    }

    /// Returns the ISO 4217 currency code.
    pub fn currency_code(&self) -> &str {
        &self.currency_code
    }

    /// Returns the major units.
    pub fn units(&self) -> i64 {
        self.units
    }

    /// Returns the fractional nanos.
    pub fn nanos(&self) -> i32 {
        self.nanos
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:09} {}", self.units, self.nanos, self.currency_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_creation() {
        let money = Money::new("USD", 10, 0).unwrap();
        assert_eq!(money.currency_code(), "USD");
        assert_eq!(money.units(), 10);
        assert_eq!(money.nanos(), 0);
    }

    #[test]
    fn test_negative_units_fails() {
        let result = Money::new("USD", -10, 0);
        assert!(matches!(result, Err(ChargeError::InvalidAmount(_))));
    }

    #[test]
    fn test_negative_nanos_fails() {
        let result = Money::new("USD", 10, -1);
        assert!(matches!(result, Err(ChargeError::InvalidAmount(_))));
    }

    #[test]
    fn test_empty_currency_fails() {
        let result = Money::new("", 10, 0);
        assert!(matches!(result, Err(ChargeError::InvalidAmount(_))));
    }

    #[test]
    fn test_nanos_out_of_range_fails() {
        let result = Money::new("USD", 10, 1_000_000_000);
        assert!(matches!(result, Err(ChargeError::InvalidAmount(_))));
    }

    #[test]
    fn test_max_nanos_ok() {
        let money = Money::new("USD", 0, 999_999_999).unwrap();
        assert_eq!(money.nanos(), 999_999_999);
    }

    #[test]
    fn test_money_display() {
        let money = Money::new("USD", 10, 500_000_000).unwrap();
        assert_eq!(format!("{}", money), "10.500000000 USD");
    }

    #[test]
    fn test_deserialized_money_revalidates() {
        let money: Money =
            serde_json::from_str(r#"{"currency_code":"USD","units":-5,"nanos":0}"#).unwrap();
        assert!(money.validate().is_err());
    }
}
