//! Data Transfer Objects (DTOs) for requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{CreditCard, Money, Order};

// ─────────────────────────────────────────────────────────────────────────────
// Charge DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to charge a credit card.
///
/// Both fields are required for a charge to succeed, but they are
/// modeled as explicit optionals so an absent field is representable
/// and reported as `MissingFields` instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChargeRequest {
    /// Amount to bill
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Money>,
    /// Card to bill it to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit_card: Option<CreditCard>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Order DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to place an order: charge the card, then confirm by email.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceOrderRequest {
    /// Address the confirmation is sent to
    pub email: String,
    pub order: Order,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit_card: Option<CreditCard>,
}

/// Response after placing an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceOrderResponse {
    /// Transaction id issued by the charge
    pub transaction_id: String,
    /// Whether the confirmation email was accepted by the collaborator
    pub confirmation_sent: bool,
}

/// Payload sent to the email confirmation collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderConfirmationRequest {
    pub email: String,
    pub order: Order,
}
