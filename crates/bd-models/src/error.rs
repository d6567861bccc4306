//! Degradation model errors.

use crate::stress::Stressor;
use bd_core::BdError;
use thiserror::Error;

/// Result type for model evaluation.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors that can occur while evaluating a fade model.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// A stressor was supplied that the model does not use.
    #[error("Model '{model}' does not recognize stressor '{stressor}'")]
    UnrecognizedStressor { model: String, stressor: Stressor },

    /// Input value outside the physical domain of the model.
    #[error("Value out of range for {what}: {value}")]
    OutOfRange { what: &'static str, value: f64 },

    #[error(transparent)]
    Core(#[from] BdError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ModelError::UnrecognizedStressor {
            model: "empirical".into(),
            stressor: Stressor::CRate,
        };
        assert!(err.to_string().contains("c_rate"));

        let err: ModelError = BdError::ShapeMismatch {
            what: "cycles",
            expected: 2,
            actual: 3,
        }
        .into();
        assert!(err.to_string().contains("expected 2"));
    }
}
