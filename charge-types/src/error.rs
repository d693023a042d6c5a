//! Error types for the charge service.

/// Validation errors reported by the charge pipeline.
///
/// All variants are deterministic client-input errors: never retried
/// internally, never fatal to the process. The first failing rule in
/// the pipeline determines the reported variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChargeError {
    /// `amount` and/or `credit_card` absent from the request.
    #[error("Missing required fields")]
    MissingFields,

    /// Card present but its number or CVV fails the acceptance check.
    #[error("Invalid credit card")]
    InvalidCreditCard,

    /// Amount present but violates the Money invariants.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}

/// Errors from the email confirmation collaborator.
#[derive(Debug, thiserror::Error)]
pub enum ConfirmationError {
    #[error("Confirmation transport error: {0}")]
    Transport(String),

    #[error("Confirmation rejected with HTTP {status}")]
    Rejected { status: u16 },
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Charge(#[from] ChargeError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
