//! Email confirmation collaborator adapter.

use charge_types::{ConfirmationError, ConfirmationSender, OrderConfirmationRequest};
use tracing::instrument;

/// HTTP adapter for the email confirmation service.
///
/// Posts the confirmation payload to `<base>/send_order_confirmation`
/// and treats any non-2xx response as a rejection.
pub struct EmailClient {
    http: reqwest::Client,
    base_url: String,
}

impl EmailClient {
    /// Creates a new client against the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait::async_trait]
impl ConfirmationSender for EmailClient {
    #[instrument(skip(self, req), fields(order_id = %req.order.order_id))]
    async fn send_order_confirmation(
        &self,
        req: &OrderConfirmationRequest,
    ) -> Result<(), ConfirmationError> {
        let resp = self
            .http
            .post(format!("{}/send_order_confirmation", self.base_url))
            .json(req)
            .send()
            .await
            .map_err(|e| ConfirmationError::Transport(e.to_string()))?;

        if resp.status().is_success() {
            Ok(())
        } else {
            Err(ConfirmationError::Rejected {
                status: resp.status().as_u16(),
            })
        }
    }
}
