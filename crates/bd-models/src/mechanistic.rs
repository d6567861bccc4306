//! Mechanistic fade model.
//!
//! Capacity fade is the sum of three loss-of-lithium-inventory mechanisms:
//!
//! - **SEI growth**: diffusion limited, so loss grows with `sqrt(D(T) * t)`;
//!   a high average SOC lowers the anode potential and speeds it up.
//! - **Particle cracking**: fresh surface exposed by volume change per
//!   cycle, scaling with `DoD^2` and cycle count.
//! - **Lithium plating**: only above a C-rate threshold, and more severe at
//!   low temperature (negative effective activation energy).
//!
//! ```text
//! sei      = a_sei * (1 + k_soc * (SOC - 0.5)) * sqrt(D(T) * t)
//! crack    = a_crack * DoD^2 * N
//! plating  = a_plate * max(C - C_th, 0) * exp(+Ea_pl/R * (1/T - 1/T_ref)) * N
//! ```

use crate::error::ModelResult;
use crate::model::{DegradationModel, validation};
use crate::stress::{StressParameters, Stressor};
use serde::{Deserialize, Serialize};

/// Coefficients of [`MechanisticModel`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MechanisticParams {
    /// SEI growth coefficient [%/sqrt(day)]
    pub a_sei: f64,
    /// Activation energy of SEI solvent diffusion [J/mol]
    pub ea_sei: f64,
    /// SOC sensitivity of SEI growth
    pub k_soc: f64,
    /// Cracking coefficient [% per cycle at full DoD]
    pub a_crack: f64,
    /// Plating coefficient [% per cycle per unit C-rate above threshold]
    pub a_plate: f64,
    /// Plating activation energy magnitude [J/mol]
    pub ea_plate: f64,
    /// C-rate above which plating starts
    pub c_threshold: f64,
    /// Reference temperature [°C]
    pub t_ref_c: f64,
}

impl Default for MechanisticParams {
    fn default() -> Self {
        Self {
            a_sei: 0.12,
            ea_sei: 28_000.0,
            k_soc: 0.8,
            a_crack: 0.00214,
            a_plate: 0.0005,
            ea_plate: 40_000.0,
            c_threshold: 0.5,
            t_ref_c: 25.0,
        }
    }
}

/// Sum of SEI growth, particle cracking and lithium plating losses.
#[derive(Debug, Clone, Default)]
pub struct MechanisticModel {
    pub params: MechanisticParams,
}

impl MechanisticModel {
    pub fn new(params: MechanisticParams) -> Self {
        Self { params }
    }
}

impl DegradationModel for MechanisticModel {
    fn name(&self) -> &str {
        "mechanistic"
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

        let diffusivity = validation::arrhenius(p.ea_sei, t_k, t_ref_k);
        let sei = p.a_sei * (1.0 + p.k_soc * (s.soc_avg - 0.5));
        let crack = p.a_crack * s.dod * s.dod;
        // Plating speeds up as the cell gets colder.
        let plating = p.a_plate
            * (s.c_rate - p.c_threshold).max(0.0)
            * validation::arrhenius(-p.ea_plate, t_k, t_ref_k);

        Ok(time_days
            .iter()
            .zip(cycles)
            .map(|(&t, &n)| sei * (diffusivity * t).sqrt() + (crack + plating) * n)
            .collect())
    }
}
