//! Issued charge record.

use serde::{Deserialize, Serialize};

/// The record minted for a successfully validated charge.
///
/// Results are immutable once created - the transaction id is an opaque
/// token the caller owns from here on. This core does not persist or
/// deduplicate it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeResult {
    /// Opaque unique transaction identifier (`txn_` prefixed).
    pub transaction_id: String,
}

/// Prefix carried by every issued transaction id.
pub const TRANSACTION_ID_PREFIX: &str = "txn_";
