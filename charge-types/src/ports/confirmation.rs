//! Email confirmation collaborator port.

use crate::dto::OrderConfirmationRequest;
use crate::error::ConfirmationError;

/// Outbound port for the email confirmation collaborator.
///
/// The charge pipeline never calls this directly; it is invoked by the
/// order flow after a successful charge. The collaborator returns a
/// binary success/failure signal.
#[async_trait::async_trait]
pub trait ConfirmationSender: Send + Sync + 'static {
    /// Asks the collaborator to send an order confirmation email.
    async fn send_order_confirmation(
        &self,
        req: &OrderConfirmationRequest,
    ) -> Result<(), ConfirmationError>;
}
