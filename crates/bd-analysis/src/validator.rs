//! Agreement between model predictions and measured data.

use crate::error::AnalysisResult;
use crate::eval::evaluate_fade_raw;
use crate::metrics;
use bd_core::{BdError, ensure_same_len, retention_from_fade};
use bd_models::{DegradationModel, StressParameters};
use serde::Serialize;
use tracing::debug;

/// Summary metrics of one prediction/measurement comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValidationReport {
    pub points: usize,
    pub rmse: f64,
    /// `None` when a measured value is zero and MAPE is undefined.
    pub mape: Option<f64>,
    pub max_abs_error: f64,
}

impl ValidationReport {
    fn from_series(predicted: &[f64], actual: &[f64]) -> AnalysisResult<Self> {
        let mape = match metrics::mape(predicted, actual) {
            Ok(v) => Some(v),
            Err(BdError::DivisionByZero { .. }) => None,
            Err(e) => return Err(e.into()),
        };
        Ok(Self {
            points: predicted.len(),
            rmse: metrics::rmse(predicted, actual)?,
            mape,
            max_abs_error: metrics::max_abs_error(predicted, actual)?,
        })
    }
}

/// Error metrics for a wrapped degradation model.
#[derive(Debug, Clone)]
pub struct ModelValidator<M> {
    model: M,
}

impl<M: DegradationModel> ModelValidator<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Root-mean-square error between two equal-length series.
    pub fn calculate_rmse(&self, predicted: &[f64], actual: &[f64]) -> AnalysisResult<f64> {
        Ok(metrics::rmse(predicted, actual)?)
    }

    /// Mean absolute percentage error; fails on a zero in `actual`.
    pub fn calculate_mape(&self, predicted: &[f64], actual: &[f64]) -> AnalysisResult<f64> {
        Ok(metrics::mape(predicted, actual)?)
    }

    /// Run the model on the measurement grid and compare fade in percent.
    pub fn validate_against(
        &self,
        time_days: &[f64],
        cycles: &[f64],
        temperature_c: f64,
        stress: &StressParameters,
        measured_fade_pct: &[f64],
    ) -> AnalysisResult<ValidationReport> {
        ensure_same_len(time_days.len(), measured_fade_pct.len(), "measured fade")?;
        let predicted = evaluate_fade_raw(&self.model, time_days, cycles, temperature_c, stress)?;
        let report = ValidationReport::from_series(&predicted, measured_fade_pct)?;
        debug!(model = self.model.name(), ?report, "validated fade");
        Ok(report)
    }

    /// Same as [`validate_against`](Self::validate_against) but compares
    /// retention fractions (`1 - fade/100`).
    pub fn compare_retention(
        &self,
        time_days: &[f64],
        cycles: &[f64],
        temperature_c: f64,
        stress: &StressParameters,
        measured_retention: &[f64],
    ) -> AnalysisResult<ValidationReport> {
        ensure_same_len(time_days.len(), measured_retention.len(), "measured retention")?;
        let fade = evaluate_fade_raw(&self.model, time_days, cycles, temperature_c, stress)?;
        let predicted = retention_from_fade(&fade);
        let report = ValidationReport::from_series(&predicted, measured_retention)?;
        debug!(model = self.model.name(), ?report, "validated retention");
        Ok(report)
    }
}
