//! # Charge Client SDK
//!
//! A typed Rust client for the Charge API.

use charge_types::{
    ChargeRequest, ChargeResult, CreditCard, Money, Order, PlaceOrderRequest, PlaceOrderResponse,
};
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Charge API client.
pub struct ChargeClient {
    base_url: String,
    http: Client,
}

impl ChargeClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Checks if the API is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Ok(resp.status().is_success())
    }

    /// Charges a credit card, returning the issued transaction id.
    pub async fn charge(
        &self,
        amount: Money,
        credit_card: CreditCard,
    ) -> Result<ChargeResult, ClientError> {
        let req = ChargeRequest {
            amount: Some(amount),
            credit_card: Some(credit_card),
        };
        self.post("/api/charge", &req).await
    }

    /// Places an order: charge plus confirmation email.
    pub async fn place_order(
        &self,
        email: &str,
        order: Order,
        amount: Money,
        credit_card: CreditCard,
    ) -> Result<PlaceOrderResponse, ClientError> {
        let req = PlaceOrderRequest {
            email: email.to_string(),
            order,
            amount: Some(amount),
            credit_card: Some(credit_card),
        };
        self.post("/api/orders", &req).await
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let resp = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .await?;
        self.handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
                .unwrap_or(body);
            Err(ClientError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}
