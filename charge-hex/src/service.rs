//! Charge Processor
//!
//! Runs the ordered validation pipeline and issues transaction ids.
//! Contains NO infrastructure logic - pure validation and issuance.

use charge_types::{ChargeError, ChargeRequest, ChargeResult, TransactionIdSource};

/// The charge processor.
///
/// Generic over `I: TransactionIdSource` - the id source is injected at
/// compile time. This enables:
/// - Deterministic issuance in tests via a fixed source
/// - No reliance on a global random generator
///
/// Each call is stateless and independent; the processor is safe to
/// share across threads.
pub struct ChargeService<I: TransactionIdSource> {
    ids: I,
}

impl<I: TransactionIdSource> ChargeService<I> {
    /// Creates a new charge service with the given id source.
    pub fn new(ids: I) -> Self {
        Self { ids }
    }

    /// Validates a charge request and issues a transaction id.
    ///
    /// The pipeline is ordered and short-circuiting: the first failing
    /// rule determines the reported error.
    ///
    /// 1. Presence - `amount`, then `credit_card`
    /// 2. Amount validity - Money invariants
    /// 3. Card validity - number and CVV acceptance
    /// 4. Issuance - draw an id from the source
    ///
    /// No transaction id is produced on any failure.
    pub fn charge(&self, req: &ChargeRequest) -> Result<ChargeResult, ChargeError> {
        let amount = req.amount.as_ref().ok_or(ChargeError::MissingFields)?;
        let card = req.credit_card.as_ref().ok_or(ChargeError::MissingFields)?;

        amount.validate()?;
        card.validate()?;

        let transaction_id = self.ids.next_id();
        tracing::debug!(
            transaction_id = %transaction_id,
            amount = %amount,
            card_last_four = card.last_four(),
            "charge accepted"
        );

        Ok(ChargeResult { transaction_id })
    }
}
