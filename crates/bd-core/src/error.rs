use thiserror::Error;

pub type BdResult<T> = Result<T, BdError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BdError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Shape mismatch for {what}: expected {expected} points, got {actual}")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Division by zero in {what} at index {index}")]
    DivisionByZero { what: &'static str, index: usize },
}
