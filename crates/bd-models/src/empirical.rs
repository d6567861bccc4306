//! Empirical fade model.
//!
//! Square-root-of-time calendar loss scaled by an Arrhenius factor, plus a
//! cycling loss that grows linearly with throughput:
//!
//! ```text
//! fade = k_cal * AF(T) * sqrt(t) + k_cyc * N * DoD
//! ```

use crate::error::ModelResult;
use crate::model::{DegradationModel, validation};
use crate::stress::{StressParameters, Stressor};
use serde::{Deserialize, Serialize};

/// Coefficients of [`EmpiricalModel`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EmpiricalParams {
    /// Calendar coefficient [%/sqrt(day)] at the reference temperature
    pub k_cal: f64,
    /// Calendar activation energy [J/mol]
    pub ea_cal: f64,
    /// Cycling coefficient [% per full-DoD cycle]
    pub k_cyc: f64,
    /// Reference temperature [°C]
    pub t_ref_c: f64,
}

impl Default for EmpiricalParams {
    fn default() -> Self {
        Self {
            k_cal: 0.165,
            ea_cal: 24_500.0,
            k_cyc: 0.0034,
            t_ref_c: 25.0,
        }
    }
}

/// Curve-fit style model with a single cycling stressor (DoD).
#[derive(Debug, Clone, Default)]
pub struct EmpiricalModel {
    pub params: EmpiricalParams,
}

impl EmpiricalModel {
    pub fn new(params: EmpiricalParams) -> Self {
        Self { params }
    }
}

impl DegradationModel for EmpiricalModel {
    fn name(&self) -> &str {
        "empirical"
    }

    fn recognized_stressors(&self) -> &'static [Stressor] {
        &[Stressor::Dod]
    }

    fn predict_fade(
        &self,
        time_days: &[f64],
        cycles: &[f64],
        temperature_c: f64,
        stress: &StressParameters,
    ) -> ModelResult<Vec<f64>> {
        self.check_stressors(stress)?;
        let t_k = validation::validate_inputs(time_days, cycles, temperature_c)?;
        let s = validation::resolve_stress(stress)?;
        let p = &self.params;

        let af = validation::arrhenius(p.ea_cal, t_k, bd_core::celsius_to_kelvin(p.t_ref_c));

        Ok(time_days
            .iter()
            .zip(cycles)
            .map(|(&t, &n)| p.k_cal * af * t.sqrt() + p.k_cyc * n * s.dod)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_fade_at_beginning_of_life() {
        let model = EmpiricalModel::default();
        let fade = model
            .predict_fade(&[0.0], &[0.0], 25.0, &StressParameters::default())
            .unwrap();
        assert_eq!(fade, vec![0.0]);
    }

    #[test]
    fn ten_years_at_room_temperature_is_plausible() {
        let model = EmpiricalModel::default();
        let fade = model
            .predict_fade(&[3650.0], &[3650.0], 25.0, &StressParameters::default())
            .unwrap()[0];
        assert!(fade > 10.0 && fade < 30.0, "fade = {fade}");
    }

    #[test]
    fn rejects_c_rate() {
        let model = EmpiricalModel::default();
        let stress = StressParameters::default().with_c_rate(2.0);
        assert!(model.predict_fade(&[1.0], &[1.0], 25.0, &stress).is_err());
    }

    #[test]
    fn deeper_cycles_fade_faster() {
        let model = EmpiricalModel::default();
        let shallow = StressParameters::default().with_dod(0.2);
        let deep = StressParameters::default().with_dod(1.0);
        let f_shallow = model.predict_fade(&[1000.0], &[1000.0], 25.0, &shallow).unwrap()[0];
        let f_deep = model.predict_fade(&[1000.0], &[1000.0], 25.0, &deep).unwrap()[0];
        assert!(f_deep > f_shallow);
    }
}
