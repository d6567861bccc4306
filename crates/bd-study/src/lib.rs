//! bd-study: study file format, validation and conversion to analysis inputs.
//!
//! A study bundles the model choice, lifetime settings, operating scenarios
//! and stress sweeps in a single YAML document:
//!
//! ```yaml
//! version: 1
//! name: Home storage
//! model:
//!   kind: semi_empirical
//! scenarios:
//!   - name: Garage
//!     temperature: 30
//!     dod: 0.8
//! sweeps:
//!   - variable: temperature
//!     values: [15, 25, 35, 45]
//! ```

pub mod convert;
pub mod schema;
pub mod validate;

pub use schema::*;
pub use validate::{LATEST_VERSION, ValidationError, validate_study};

use bd_analysis::AnalysisError;
use std::path::Path;

pub type StudyResult<T> = Result<T, StudyError>;

#[derive(thiserror::Error, Debug)]
pub enum StudyError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Analysis error: {0}")]
    Analysis(#[from] AnalysisError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Parse and validate a study from YAML text.
pub fn from_yaml_str(content: &str) -> StudyResult<Study> {
    let study: Study = serde_yaml::from_str(content)?;
    validate_study(&study)?;
    Ok(study)
}

pub fn load_yaml(path: &Path) -> StudyResult<Study> {
    let content = std::fs::read_to_string(path)?;
    from_yaml_str(&content)
}

pub fn save_yaml(path: &Path, study: &Study) -> StudyResult<()> {
    validate_study(study)?;
    let content = serde_yaml::to_string(study)?;
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = "version: 1\nname: minimal\n";

    #[test]
    fn minimal_study_uses_defaults() {
        let study = from_yaml_str(MINIMAL).unwrap();
        assert_eq!(study.model, bd_models::ModelSpec::default());
        assert_eq!(study.lifetime, LifetimeDef::default());
        assert!(study.scenarios.is_empty());
    }

    #[test]
    fn scenario_without_temperature_is_rejected() {
        let yaml = "version: 1\nname: bad\nscenarios:\n  - name: Garage\n    dod: 0.8\n";
        let err = from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, StudyError::Yaml(_)));
        assert!(err.to_string().contains("temperature"));
    }

    #[test]
    fn unknown_scenario_key_is_rejected() {
        let yaml = "version: 1\nname: bad\nscenarios:\n  - name: Garage\n    temperature: 30\n    humidity: 0.4\n";
        assert!(matches!(from_yaml_str(yaml), Err(StudyError::Yaml(_))));
    }

    #[test]
    fn duplicate_scenarios_are_rejected() {
        let yaml = "version: 1\nname: dup\nscenarios:\n  - name: A\n    temperature: 20\n  - name: A\n    temperature: 30\n";
        let err = from_yaml_str(yaml).unwrap_err();
        assert!(matches!(
            err,
            StudyError::Validation(ValidationError::DuplicateId { .. })
        ));
    }

    #[test]
    fn stressor_unknown_to_model_is_rejected() {
        let yaml = "version: 1\nname: emp\nmodel:\n  kind: empirical\nscenarios:\n  - name: A\n    temperature: 20\n    c_rate: 2.0\n";
        let err = from_yaml_str(yaml).unwrap_err();
        assert!(matches!(
            err,
            StudyError::Validation(ValidationError::UnsupportedStressor { .. })
        ));
    }

    #[test]
    fn sweep_needs_exactly_one_value_source() {
        let neither = "version: 1\nname: s\nsweeps:\n  - variable: dod\n";
        assert!(matches!(
            from_yaml_str(neither),
            Err(StudyError::Validation(ValidationError::InvalidValue { .. }))
        ));

        let both = "version: 1\nname: s\nsweeps:\n  - variable: dod\n    values: [0.5]\n    range: {start: 0.1, end: 1.0, points: 4}\n";
        assert!(matches!(
            from_yaml_str(both),
            Err(StudyError::Validation(ValidationError::InvalidValue { .. }))
        ));
    }

    #[test]
    fn future_version_is_rejected() {
        let err = from_yaml_str("version: 9\nname: future\n").unwrap_err();
        assert!(matches!(
            err,
            StudyError::Validation(ValidationError::UnsupportedVersion { version: 9 })
        ));
    }
}
