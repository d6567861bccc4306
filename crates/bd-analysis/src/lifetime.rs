//! End-of-life estimation.
//!
//! The predictor simulates a fade trajectory on a daily grid in one batched
//! model call and returns the first grid point whose retention is at or below
//! the EOL threshold. Failing to reach the threshold inside the horizon is a
//! normal outcome ([`EolResult::NotReached`]), not an error.

use crate::error::AnalysisResult;
use crate::eval::{evaluate_fade, map_ordered};
use crate::scenario::{ScenarioComparison, ScenarioOutcome, ScenarioSet};
use bd_core::{
    BdError, CycleGrid, TimeGrid, days_to_years, ensure_finite, retention_from_fade, years_to_days,
};
use bd_models::{DegradationModel, StressParameters};
use serde::Serialize;
use tracing::{debug, info, warn};

/// Inputs shared by lifetime estimation and scenario comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LifetimeOptions {
    /// Average equivalent full cycles per day
    pub cycles_per_day: f64,
    /// Retention fraction at which the cell is end of life
    pub eol_threshold: f64,
    /// Simulated horizon in years (one grid sample per day)
    pub max_years: u32,
}

impl Default for LifetimeOptions {
    fn default() -> Self {
        Self {
            cycles_per_day: 1.0,
            eol_threshold: 0.8,
            max_years: 30,
        }
    }
}

/// Outcome of an EOL search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EolResult {
    /// Threshold crossed at this grid point.
    WithinHorizon { time_days: f64, cycles: f64 },
    /// Retention stayed above the threshold for the whole horizon.
    NotReached { horizon_years: u32 },
}

impl EolResult {
    pub fn is_reached(&self) -> bool {
        matches!(self, Self::WithinHorizon { .. })
    }

    pub fn time_days(&self) -> Option<f64> {
        match self {
            Self::WithinHorizon { time_days, .. } => Some(*time_days),
            Self::NotReached { .. } => None,
        }
    }

    pub fn cycles(&self) -> Option<f64> {
        match self {
            Self::WithinHorizon { cycles, .. } => Some(*cycles),
            Self::NotReached { .. } => None,
        }
    }

    pub fn years(&self) -> Option<f64> {
        self.time_days().map(days_to_years)
    }

    /// `(time_days, cycles)` with `+inf` standing in for "not reached".
    pub fn as_floats(&self) -> (f64, f64) {
        match self {
            Self::WithinHorizon { time_days, cycles } => (*time_days, *cycles),
            Self::NotReached { .. } => (f64::INFINITY, f64::INFINITY),
        }
    }
}

/// Resolution of a [`RetentionCurve`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveOptions {
    pub horizon_years: f64,
    pub samples: usize,
    pub eol_threshold: f64,
}

impl Default for CurveOptions {
    fn default() -> Self {
        Self {
            horizon_years: 25.0,
            samples: 500,
            eol_threshold: 0.8,
        }
    }
}

/// Retention over time, ready for a plotting consumer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RetentionCurve {
    pub temperature_c: f64,
    pub years: Vec<f64>,
    pub retention_pct: Vec<f64>,
    pub eol_threshold_pct: f64,
}

/// Lifetime and end-of-life analysis for one degradation model.
#[derive(Debug, Clone)]
pub struct LifetimePredictor<M> {
    model: M,
}

impl<M: DegradationModel> LifetimePredictor<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Time and cycles until retention first drops to `eol_threshold`.
    ///
    /// The grid has `max_years * 365` daily samples starting at day 0, so the
    /// reported time is exact to one day. A threshold of 1.0 or more is met at
    /// day 0 by any non-negative fade.
    pub fn estimate_lifetime(
        &self,
        temperature_c: f64,
        options: &LifetimeOptions,
        stress: &StressParameters,
    ) -> AnalysisResult<EolResult> {
        let threshold = ensure_finite(options.eol_threshold, "EOL threshold")?;
        let time = TimeGrid::daily(options.max_years);
        let cycles = CycleGrid::from_time(&time, options.cycles_per_day)?;

        let fade = evaluate_fade(&self.model, &time, &cycles, temperature_c, stress)?;
        let retention = retention_from_fade(&fade);

        let result = match retention.iter().position(|r| *r <= threshold) {
            Some(i) => EolResult::WithinHorizon {
                time_days: time.as_slice()[i],
                cycles: cycles.as_slice()[i],
            },
            None => EolResult::NotReached {
                horizon_years: options.max_years,
            },
        };

        debug!(
            model = self.model.name(),
            temperature_c,
            threshold,
            samples = time.len(),
            ?result,
            "lifetime estimated"
        );
        Ok(result)
    }

    /// Estimate every scenario's lifetime, keeping the input order.
    pub fn compare_scenarios(
        &self,
        scenarios: &ScenarioSet,
        options: &LifetimeOptions,
    ) -> AnalysisResult<ScenarioComparison> {
        info!(
            model = self.model.name(),
            scenarios = scenarios.len(),
            eol_threshold = options.eol_threshold,
            "comparing scenarios"
        );

        let outcomes = map_ordered(scenarios.as_slice(), |scenario| {
            let eol = self.estimate_lifetime(scenario.temperature_c, options, &scenario.stress)?;
            if !eol.is_reached() {
                warn!(
                    scenario = %scenario.name,
                    max_years = options.max_years,
                    "EOL not reached within horizon"
                );
            }
            Ok(ScenarioOutcome {
                name: scenario.name.clone(),
                temperature_c: scenario.temperature_c,
                eol,
            })
        })?;

        Ok(ScenarioComparison {
            eol_threshold: options.eol_threshold,
            max_years: options.max_years,
            outcomes,
        })
    }

    /// Retention trajectory in percent over an evenly sampled horizon.
    pub fn retention_curve(
        &self,
        temperature_c: f64,
        cycles_per_day: f64,
        stress: &StressParameters,
        options: &CurveOptions,
    ) -> AnalysisResult<RetentionCurve> {
        if options.samples == 0 {
            return Err(BdError::InvalidArg {
                what: "retention curve needs at least one sample",
            }
            .into());
        }
        let time = TimeGrid::linspace(years_to_days(options.horizon_years), options.samples)?;
        let cycles = CycleGrid::from_time(&time, cycles_per_day)?;
        let fade = evaluate_fade(&self.model, &time, &cycles, temperature_c, stress)?;

        Ok(RetentionCurve {
            temperature_c,
            years: time.as_slice().iter().map(|d| days_to_years(*d)).collect(),
            retention_pct: retention_from_fade(&fade)
                .into_iter()
                .map(|r| r * 100.0)
                .collect(),
            eol_threshold_pct: options.eol_threshold * 100.0,
        })
    }
}
