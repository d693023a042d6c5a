//! Port traits (interfaces for adapters).
//!
//! These are the contracts that adapters must implement.
//! The application layer depends on these traits, not concrete implementations.

mod confirmation;
mod id_source;

pub use confirmation::ConfirmationSender;
pub use id_source::{FixedIdSource, TransactionIdSource};
