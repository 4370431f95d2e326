//! Input validation errors.

use thiserror::Error;

/// Errors raised while turning raw values into typed calculator input.
///
/// Arithmetic never fails; bad numbers surface as NaN or infinity in the
/// output instead.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InputError {
    #[error("Digit must be between 0 and 9 (got {0})")]
    InvalidDigit(u8),

    #[error("Unknown operator '{0}', expected one of + - * /")]
    UnknownOperator(String),
}
