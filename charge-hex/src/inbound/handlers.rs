//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use charge_types::{
    AppError, ChargeRequest, ConfirmationSender, PlaceOrderRequest, TransactionIdSource,
};

use crate::OrderService;

/// Application state shared across handlers.
pub struct AppState<I: TransactionIdSource, C: ConfirmationSender> {
    pub service: OrderService<I, C>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            // All validation failures are client-input errors
            AppError::Charge(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = serde_json::json!({
            "error": message,
            "code": status.as_u16()
        });

        (status, Json(body)).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Charge a credit card.
#[tracing::instrument(skip(state, req))]
pub async fn charge<I: TransactionIdSource, C: ConfirmationSender>(
    State(state): State<Arc<AppState<I, C>>>,
    Json(req): Json<ChargeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let result = state
        .service
        .charges()
        .charge(&req)
        .map_err(AppError::from)?;
    Ok(Json(result))
}

/// Place an order: charge, then send the confirmation email.
#[tracing::instrument(skip(state, req), fields(order_id = %req.order.order_id))]
pub async fn place_order<I: TransactionIdSource, C: ConfirmationSender>(
    State(state): State<Arc<AppState<I, C>>>,
    Json(req): Json<PlaceOrderRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let receipt = state.service.place_order(req).await?;
    Ok(Json(receipt))
}
