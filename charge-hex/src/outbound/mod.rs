//! Outbound adapters
//!
//! HTTP client for the email confirmation collaborator.

mod email;

pub use email::EmailClient;
