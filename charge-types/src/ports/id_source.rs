//! Transaction id source port.
//!
//! Identifier generation is the only non-deterministic part of the
//! charge pipeline, so it is injected rather than drawn from a global
//! generator. Tests substitute a fixed source to make issuance
//! deterministic.

/// Source of opaque transaction identifiers.
///
/// Implementations must be safe for concurrent use: every call draws an
/// independent value without blocking other callers.
pub trait TransactionIdSource: Send + Sync + 'static {
    /// Returns the next transaction id, `txn_` prefix included.
    fn next_id(&self) -> String;
}

/// Id source returning one fixed value, for deterministic tests.
#[derive(Debug, Clone)]
pub struct FixedIdSource {
    id: String,
}

impl FixedIdSource {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl TransactionIdSource for FixedIdSource {
    fn next_id(&self) -> String {
        self.id.clone()
    }
}
