//! # Charge Hex
//!
//! Application service layer and HTTP adapter for the charge service.
//!
//! ## Architecture
//!
//! - `service` - Charge processor (validation pipeline + issuance)
//! - `orders` - Order flow (charge, then email confirmation)
//! - `inbound/` - HTTP adapter (Axum server)
//! - `outbound/` - Email collaborator adapter (reqwest)
//!
//! The services are generic over `TransactionIdSource` and
//! `ConfirmationSender`, allowing different adapters to be injected.

pub mod id;
pub mod inbound;
pub mod orders;
pub mod outbound;
pub mod service;

#[cfg(test)]
mod service_tests;

pub use id::RandomIdSource;
pub use orders::OrderService;
pub use service::ChargeService;
