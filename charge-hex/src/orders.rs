//! Order flow
//!
//! The higher-level order-processing flow: charge the card first, then
//! ask the email collaborator to confirm. The charge processor itself
//! never talks to the collaborator.

use charge_types::{
    AppError, ChargeRequest, ConfirmationSender, OrderConfirmationRequest, PlaceOrderRequest,
    PlaceOrderResponse, TransactionIdSource,
};

use crate::ChargeService;

/// Orchestrates a charge followed by an order confirmation email.
///
/// Generic over the id source and the confirmation sender so both can
/// be substituted in tests.
pub struct OrderService<I: TransactionIdSource, C: ConfirmationSender> {
    charges: ChargeService<I>,
    confirmations: C,
}

impl<I: TransactionIdSource, C: ConfirmationSender> OrderService<I, C> {
    /// Creates a new order service.
    pub fn new(charges: ChargeService<I>, confirmations: C) -> Self {
        Self {
            charges,
            confirmations,
        }
    }

    /// Returns the underlying charge service.
    pub fn charges(&self) -> &ChargeService<I> {
        &self.charges
    }

    /// Places an order: validates and charges, then sends the
    /// confirmation email.
    ///
    /// A charge failure aborts the order and no confirmation is
    /// attempted. A confirmation failure after a successful charge is
    /// logged and reported through `confirmation_sent` - the issued
    /// transaction stands either way.
    pub async fn place_order(
        &self,
        req: PlaceOrderRequest,
    ) -> Result<PlaceOrderResponse, AppError> {
        if req.email.trim().is_empty() {
            return Err(AppError::BadRequest("Email cannot be empty".into()));
        }

        let charge_req = ChargeRequest {
            amount: req.amount,
            credit_card: req.credit_card,
        };
        let result = self.charges.charge(&charge_req)?;

        let confirmation = OrderConfirmationRequest {
            email: req.email,
            order: req.order,
        };
        let confirmation_sent = match self
            .confirmations
            .send_order_confirmation(&confirmation)
            .await
        {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(
                    order_id = %confirmation.order.order_id,
                    "order confirmation failed: {}",
                    e
                );
                false
            }
        };

        Ok(PlaceOrderResponse {
            transaction_id: result.transaction_id,
            confirmation_sent,
        })
    }
}
