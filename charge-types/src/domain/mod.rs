//! Domain models for the charge service.

pub mod card;
pub mod money;
pub mod order;
pub mod transaction;

pub use card::CreditCard;
pub use money::Money;
pub use order::{Address, Order, OrderItem, Product};
pub use transaction::{ChargeResult, TRANSACTION_ID_PREFIX};
