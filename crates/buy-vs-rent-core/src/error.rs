use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuyVsRentError {
    #[error("Invalid input: {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Division by zero in {context}")]
    DivisionByZero { context: String },

    #[error("Arithmetic overflow in {context}")]
    Overflow { context: String },
}

impl BuyVsRentError {
    pub(crate) fn invalid(field: &str, reason: impl Into<String>) -> Self {
        BuyVsRentError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn overflow(context: &str) -> Self {
        BuyVsRentError::Overflow {
            context: context.into(),
        }
    }
}
