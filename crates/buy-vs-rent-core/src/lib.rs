pub mod error;
pub mod loan;
pub mod simulation;
pub mod time_value;
pub mod types;

pub use error::BuyVsRentError;
pub use types::*;

/// Standard result type for all buy-vs-rent operations
pub type BuyVsRentResult<T> = Result<T, BuyVsRentError>;
