//! Credit card payload and its acceptance predicate.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ChargeError;

/// Credit card details as submitted by the caller.
///
/// All fields mirror the wire names of the charge API. The CVV is an
/// explicit `Option` rather than a truthiness check: absence, the empty
/// string, and a literal zero value are the only rejected forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditCard {
    /// Card number as a digit string.
    #[serde(rename = "credit_card_number")]
    number: String,
    /// Card verification value. Accepted from the wire as either a JSON
    /// number or a string.
    #[serde(
        rename = "credit_card_cvv",
        default,
        deserialize_with = "deserialize_cvv",
        skip_serializing_if = "Option::is_none"
    )]
    cvv: Option<String>,
    #[serde(
        rename = "credit_card_expiration_month",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    expiration_month: Option<u32>,
    #[serde(
        rename = "credit_card_expiration_year",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    expiration_year: Option<u32>,
}

impl CreditCard {
    /// Creates a card with a number and CVV, without expiration fields.
    pub fn new(number: impl Into<String>, cvv: Option<impl Into<String>>) -> Self {
        Self {
            number: number.into(),
            cvv: cvv.map(Into::into),
            expiration_month: None,
            expiration_year: None,
        }
    }

    /// Sets the expiration fields.
    pub fn with_expiration(mut self, month: u32, year: u32) -> Self {
        self.expiration_month = Some(month);
        self.expiration_year = Some(year);
        self
    }

    /// Returns the card number.
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Returns the CVV, if present.
    pub fn cvv(&self) -> Option<&str> {
        self.cvv.as_deref()
    }

    /// Returns the last four digits of the card number, for logging.
    /// Never log the full number.
    pub fn last_four(&self) -> &str {
        let split = self
            .number
            .char_indices()
            .rev()
            .nth(3)
            .map(|(i, _)| i)
            .unwrap_or(0);
        &self.number[split..]
    }

    /// Checks the acceptance predicate: non-empty number, CVV present,
    /// non-empty and non-zero.
    pub fn validate(&self) -> Result<(), ChargeError> {
        if self.number.trim().is_empty() {
            return Err(ChargeError::InvalidCreditCard);
        }
        match self.cvv.as_deref() {
            Some(cvv) if !cvv.is_empty() && !is_zero_cvv(cvv) => Ok(()),
            _ => Err(ChargeError::InvalidCreditCard),
        }
    }
}

/// A CVV whose digits parse to literal zero counts as absent.
fn is_zero_cvv(cvv: &str) -> bool {
    cvv.parse::<u64>() == Ok(0)
}

/// Accepts the CVV as a JSON number, a string, or null.
fn deserialize_cvv<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Cvv {
        Number(u64),
        Text(String),
    }

    let cvv = Option::<Cvv>::deserialize(deserializer)?;
    Ok(cvv.map(|c| match c {
        Cvv::Number(n) => n.to_string(),
        Cvv::Text(s) => s,
    }))
}
