//! Semi-empirical fade model.
//!
//! Separates calendar and cycle aging, each with physically motivated stress
//! factors:
//!
//! ```text
//! calendar = a_cal * AF_cal(T) * exp(k_soc * (SOC - 0.5)) * t^z
//! cycle    = b_cyc * AF_cyc(T) * DoD^beta * exp(k_c * (C - 1)) * (N * DoD)^0.5
//! fade     = calendar + cycle
//! ```

use crate::error::ModelResult;
use crate::model::{DegradationModel, validation};
use crate::stress::{StressParameters, Stressor};
use serde::{Deserialize, Serialize};

/// Coefficients of [`SemiEmpiricalModel`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SemiEmpiricalParams {
    /// Calendar pre-factor [%/day^z]
    pub a_cal: f64,
    /// Calendar time exponent
    pub z: f64,
    /// Calendar activation energy [J/mol]
    pub ea_cal: f64,
    /// SOC sensitivity of calendar aging
    pub k_soc: f64,
    /// Cycle pre-factor [%/sqrt(cycle)]
    pub b_cyc: f64,
    /// Cycle activation energy [J/mol]
    pub ea_cyc: f64,
    /// DoD exponent
    pub beta: f64,
    /// C-rate sensitivity
    pub k_c: f64,
    /// Reference temperature [°C]
    pub t_ref_c: f64,
}

impl Default for SemiEmpiricalParams {
    fn default() -> Self {
        Self {
            a_cal: 0.017,
            z: 0.75,
            ea_cal: 31_500.0,
            k_soc: 1.2,
            b_cyc: 0.207,
            ea_cyc: 15_000.0,
            beta: 1.5,
            k_c: 0.35,
            t_ref_c: 25.0,
        }
    }
}

/// Calendar + cycle model recognizing every stressor.
#[derive(Debug, Clone, Default)]
pub struct SemiEmpiricalModel {
    pub params: SemiEmpiricalParams,
}

impl SemiEmpiricalModel {
    pub fn new(params: SemiEmpiricalParams) -> Self {
        Self { params }
    }
}

impl DegradationModel for SemiEmpiricalModel {
    fn name(&self) -> &str {
        "semi_empirical"
    }

    fn recognized_stressors(&self) -> &'static [Stressor] {
        &Stressor::ALL
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
        let t_ref_k = bd_core::celsius_to_kelvin(p.t_ref_c);

        let cal_factor = p.a_cal
            * validation::arrhenius(p.ea_cal, t_k, t_ref_k)
            * (p.k_soc * (s.soc_avg - 0.5)).exp();
        let cyc_factor = p.b_cyc
            * validation::arrhenius(p.ea_cyc, t_k, t_ref_k)
            * s.dod.powf(p.beta)
            * (p.k_c * (s.c_rate - 1.0)).exp();

        Ok(time_days
            .iter()
            .zip(cycles)
            .map(|(&t, &n)| cal_factor * t.powf(p.z) + cyc_factor * (n * s.dod).sqrt())
            .collect())
    }
}
