//! Analysis errors.

use bd_core::BdError;
use bd_models::ModelError;
use thiserror::Error;

/// Result type for analysis operations.
pub type AnalysisResult<T> = Result<T, AnalysisError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// The wrapped degradation model rejected its inputs.
    #[error("Model '{model}' failed: {source}")]
    Model {
        model: String,
        #[source]
        source: ModelError,
    },

    /// Two scenarios share a name.
    #[error("Duplicate scenario name: {0}")]
    DuplicateScenario(String),

    /// Shape, argument, and division errors shared with the core.
    #[error(transparent)]
    Core(#[from] BdError),
}

impl AnalysisError {
    pub(crate) fn model(model: &str, source: ModelError) -> Self {
        Self::Model {
            model: model.to_string(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bd_models::Stressor;

    #[test]
    fn model_error_names_the_model() {
        let err = AnalysisError::model(
            "empirical",
            ModelError::UnrecognizedStressor {
                model: "empirical".into(),
                stressor: Stressor::SocAvg,
            },
        );
        let msg = err.to_string();
        assert!(msg.contains("empirical"));
        assert!(msg.contains("soc_avg"));
    }
}
