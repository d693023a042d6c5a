//! Order payload sent to the email confirmation collaborator.

use serde::{Deserialize, Serialize};

use super::money::Money;

/// An order as presented in the confirmation email.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Caller-assigned order identifier
    pub order_id: String,
    pub shipping_address: Address,
    /// Line items with their costs
    pub items: Vec<OrderItem>,
}

/// Shipping address for an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub zip_code: String,
}

/// A single order line: the product and what it cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub item: Product,
    pub cost: Money,
}

/// Product reference within an order line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: String,
    pub quantity: u32,
}
