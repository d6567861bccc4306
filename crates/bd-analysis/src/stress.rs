//! Single-variable stress factor sweeps.
//!
//! Each sweep fixes the exposure (years and cycles per day), varies one
//! stressor over the caller's values and reports the fade after that
//! exposure. Points are independent, so they are evaluated through the
//! ordered fan-out in [`crate::eval`].

use crate::error::AnalysisResult;
use crate::eval::{evaluate_fade, map_ordered};
use bd_core::{CycleGrid, TimeGrid};
use bd_models::{DegradationModel, StressParameters, Stressor};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;

/// Temperature used by DoD and C-rate sweeps unless the caller overrides it [°C].
pub const DEFAULT_SWEEP_TEMPERATURE_C: f64 = 25.0;

/// Stressor varied by a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SweepVariable {
    Temperature,
    Dod,
    CRate,
}

impl SweepVariable {
    /// The matching field of [`StressParameters`]; `None` for temperature.
    pub fn stressor(self) -> Option<Stressor> {
        match self {
            Self::Temperature => None,
            Self::Dod => Some(Stressor::Dod),
            Self::CRate => Some(Stressor::CRate),
        }
    }

    /// Axis title for the swept values.
    pub fn axis_label(self) -> &'static str {
        match self {
            Self::Temperature => "Temperature (°C)",
            Self::Dod => "Depth of Discharge (%)",
            Self::CRate => "C-rate",
        }
    }

    /// Factor applied to raw values for display (DoD is shown in percent).
    pub fn display_scale(self) -> f64 {
        match self {
            Self::Dod => 100.0,
            Self::Temperature | Self::CRate => 1.0,
        }
    }
}

impl fmt::Display for SweepVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Temperature => write!(f, "temperature"),
            Self::Dod => write!(f, "dod"),
            Self::CRate => write!(f, "c_rate"),
        }
    }
}

/// Fixed exposure at which every sweep point is evaluated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepOptions {
    pub time_years: f64,
    pub cycles_per_day: f64,
}

impl Default for SweepOptions {
    fn default() -> Self {
        Self {
            time_years: 10.0,
            cycles_per_day: 1.0,
        }
    }
}

/// Fade per swept value; `fades[i]` belongs to `values[i]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepResult {
    pub variable: SweepVariable,
    pub values: Vec<f64>,
    pub fades: Vec<f64>,
    pub time_years: f64,
    /// Temperature held fixed for DoD and C-rate sweeps.
    pub fixed_temperature_c: Option<f64>,
}

impl SweepResult {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// `(value, fade)` pairs in input order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.values.iter().copied().zip(self.fades.iter().copied())
    }

    /// Axis title for the fade values.
    pub fn fade_label(&self) -> String {
        format!("Capacity Fade after {} years (%)", self.time_years)
    }
}

/// Stress factor sweeps for one degradation model.
#[derive(Debug, Clone)]
pub struct StressFactorAnalysis<M> {
    model: M,
}

impl<M: DegradationModel> StressFactorAnalysis<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Fade after the fixed exposure at each temperature in `temps_c`.
    pub fn temperature_sweep(
        &self,
        temps_c: &[f64],
        options: &SweepOptions,
        stress: &StressParameters,
    ) -> AnalysisResult<SweepResult> {
        self.sweep(SweepVariable::Temperature, temps_c, None, options, stress)
    }

    /// Fade at each depth of discharge in `dod_values`, at `temperature_c`.
    pub fn dod_sweep(
        &self,
        dod_values: &[f64],
        temperature_c: f64,
        options: &SweepOptions,
        stress: &StressParameters,
    ) -> AnalysisResult<SweepResult> {
        self.sweep(
            SweepVariable::Dod,
            dod_values,
            Some(temperature_c),
            options,
            stress,
        )
    }

    /// Fade at each C-rate in `c_rates`, at `temperature_c`.
    pub fn crate_sweep(
        &self,
        c_rates: &[f64],
        temperature_c: f64,
        options: &SweepOptions,
        stress: &StressParameters,
    ) -> AnalysisResult<SweepResult> {
        self.sweep(
            SweepVariable::CRate,
            c_rates,
            Some(temperature_c),
            options,
            stress,
        )
    }

    /// Generic sweep. `temperature_c` is ignored for temperature sweeps and
    /// defaults to 25 °C otherwise.
    pub fn sweep(
        &self,
        variable: SweepVariable,
        values: &[f64],
        temperature_c: Option<f64>,
        options: &SweepOptions,
        stress: &StressParameters,
    ) -> AnalysisResult<SweepResult> {
        let time = TimeGrid::single_years(options.time_years)?;
        let cycles = CycleGrid::from_time(&time, options.cycles_per_day)?;
        let fixed_temperature_c = match variable {
            SweepVariable::Temperature => None,
            _ => Some(temperature_c.unwrap_or(DEFAULT_SWEEP_TEMPERATURE_C)),
        };

        info!(
            model = self.model.name(),
            %variable,
            points = values.len(),
            time_years = options.time_years,
            "running stress sweep"
        );

        let fades = map_ordered(values, |&value| {
            let (temp, point_stress) = match variable.stressor() {
                None => (value, *stress),
                Some(stressor) => (
                    fixed_temperature_c.unwrap_or(DEFAULT_SWEEP_TEMPERATURE_C),
                    stress.with(stressor, value),
                ),
            };
            let fade = evaluate_fade(&self.model, &time, &cycles, temp, &point_stress)?;
            Ok(fade[0])
        })?;

        Ok(SweepResult {
            variable,
            values: values.to_vec(),
            fades,
            time_years: options.time_years,
            fixed_temperature_c,
        })
    }
}
