use super::CheckoutState;
use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Checkout flow errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    #[error("Cannot {action} while {from}")]
    InvalidTransition {
        from: CheckoutState,
        action: &'static str,
    },

    /// A required order-detail field is blank
    #[error("Please enter your {0}")]
    MissingField(&'static str),

    #[error("Order is already being submitted")]
    SubmissionInFlight,

    #[error("Cart is empty")]
    EmptyCart,
}

impl CheckoutError {
    pub fn code(&self) -> ErrorCode {
        match self {
            CheckoutError::InvalidTransition { .. } => ErrorCode::OrderInvalidTransition,
            CheckoutError::MissingField(_) => ErrorCode::RequiredField,
            CheckoutError::SubmissionInFlight => ErrorCode::OrderAlreadySubmitting,
            CheckoutError::EmptyCart => ErrorCode::OrderEmpty,
        }
    }
}

impl From<CheckoutError> for AppError {
    fn from(err: CheckoutError) -> Self {
        let app = AppError::with_message(err.code(), err.to_string());
        match err {
            CheckoutError::MissingField(field) => app.with_detail("field", field),
            CheckoutError::InvalidTransition { from, action } => app
                .with_detail("state", from.to_string())
                .with_detail("action", action),
            _ => app,
        }
    }
}

pub type CheckoutResult<T> = Result<T, CheckoutError>;
