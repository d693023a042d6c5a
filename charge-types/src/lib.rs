//! # Charge Types
//!
//! Domain types and port traits for the charge service.
//! This crate has ZERO external IO dependencies - only data structures,
//! business rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (Money, CreditCard, Order)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Data Transfer Objects for API boundaries
//! - `error/` - Domain and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{Address, ChargeResult, CreditCard, Money, Order, OrderItem, Product};
pub use dto::*;
pub use error::{AppError, ChargeError, ConfirmationError};
pub use ports::{ConfirmationSender, FixedIdSource, TransactionIdSource};
