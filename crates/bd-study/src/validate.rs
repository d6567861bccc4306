//! Study validation logic.

use crate::schema::{LifetimeDef, ScenarioDef, Study, SweepDef};
use bd_models::{DegradationModel, StressParameters};
use std::collections::HashSet;

/// Newest study file version this build understands.
pub const LATEST_VERSION: u32 = 1;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported stressor: {stressor} is not used by model '{model}' ({context})")]
    UnsupportedStressor {
        stressor: String,
        model: String,
        context: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

fn invalid(field: impl Into<String>, value: impl ToString, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.into(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

pub fn validate_study(study: &Study) -> Result<(), ValidationError> {
    if study.version == 0 || study.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: study.version,
        });
    }

    let model = study.model.build();
    validate_lifetime(&study.lifetime)?;

    let mut names = HashSet::new();
    for scenario in &study.scenarios {
        if !names.insert(scenario.name.as_str()) {
            return Err(ValidationError::DuplicateId {
                id: scenario.name.clone(),
                context: "scenarios".to_string(),
            });
        }
        validate_scenario(scenario, &*model)?;
    }

    for (i, sweep) in study.sweeps.iter().enumerate() {
        validate_sweep(i, sweep, &*model)?;
    }

    Ok(())
}

fn validate_lifetime(lifetime: &LifetimeDef) -> Result<(), ValidationError> {
    if !lifetime.eol_threshold.is_finite() {
        return Err(invalid(
            "lifetime.eol_threshold",
            lifetime.eol_threshold,
            "must be finite",
        ));
    }
    if !(lifetime.cycles_per_day.is_finite() && lifetime.cycles_per_day >= 0.0) {
        return Err(invalid(
            "lifetime.cycles_per_day",
            lifetime.cycles_per_day,
            "must be finite and non-negative",
        ));
    }
    Ok(())
}

fn validate_scenario(
    scenario: &ScenarioDef,
    model: &dyn DegradationModel,
) -> Result<(), ValidationError> {
    if scenario.name.trim().is_empty() {
        return Err(invalid("scenario.name", "", "must not be empty"));
    }
    if !scenario.temperature.is_finite() {
        return Err(invalid(
            format!("scenarios[{}].temperature", scenario.name),
            scenario.temperature,
            "must be finite",
        ));
    }
    check_stressors(
        &scenario.stress(),
        model,
        format!("scenario '{}'", scenario.name),
    )
}

fn validate_sweep(
    index: usize,
    sweep: &SweepDef,
    model: &dyn DegradationModel,
) -> Result<(), ValidationError> {
    let field = |name: &str| format!("sweeps[{index}].{name}");

    match (&sweep.values, &sweep.range) {
        (Some(_), Some(_)) => {
            return Err(invalid(
                field("values"),
                "values + range",
                "give either explicit values or a range, not both",
            ));
        }
        (None, None) => {
            return Err(invalid(
                field("values"),
                "none",
                "a sweep needs explicit values or a range",
            ));
        }
        (Some(values), None) => {
            if values.is_empty() {
                return Err(invalid(field("values"), "[]", "must not be empty"));
            }
            if let Some(v) = values.iter().find(|v| !v.is_finite()) {
                return Err(invalid(field("values"), v, "must be finite"));
            }
        }
        (None, Some(range)) => {
            range
                .validate()
                .map_err(|e| invalid(field("range"), range, &e.to_string()))?;
        }
    }

    if !(sweep.time_years.is_finite() && sweep.time_years >= 0.0) {
        return Err(invalid(
            field("time_years"),
            sweep.time_years,
            "must be finite and non-negative",
        ));
    }
    if !(sweep.cycles_per_day.is_finite() && sweep.cycles_per_day >= 0.0) {
        return Err(invalid(
            field("cycles_per_day"),
            sweep.cycles_per_day,
            "must be finite and non-negative",
        ));
    }

    if let Some(stressor) = sweep.variable.stressor() {
        if !model.recognized_stressors().contains(&stressor) {
            return Err(ValidationError::UnsupportedStressor {
                stressor: stressor.to_string(),
                model: model.name().to_string(),
                context: format!("sweeps[{index}].variable"),
            });
        }
    }
    check_stressors(&sweep.stress, model, format!("sweeps[{index}].stress"))
}

fn check_stressors(
    stress: &StressParameters,
    model: &dyn DegradationModel,
    context: String,
) -> Result<(), ValidationError> {
    let recognized = model.recognized_stressors();
    match stress.supplied().find(|s| !recognized.contains(s)) {
        Some(stressor) => Err(ValidationError::UnsupportedStressor {
            stressor: stressor.to_string(),
            model: model.name().to_string(),
            context,
        }),
        None => Ok(()),
    }
}
