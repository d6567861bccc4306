//! Degradation model trait and input validation helpers.

use crate::error::{ModelError, ModelResult};
use crate::stress::{ResolvedStress, StressParameters, Stressor};

/// Trait for capacity fade models.
///
/// Implementations must be thread-safe (Send + Sync) so sweeps and scenario
/// comparisons can evaluate one model from several workers. Evaluation must
/// not mutate observable state: the same inputs always give the same fade.
pub trait DegradationModel: Send + Sync {
    /// Get the model name (for logging and reports).
    fn name(&self) -> &str;

    /// Stressors this model reads from [`StressParameters`].
    fn recognized_stressors(&self) -> &'static [Stressor];

    /// Reject any supplied stressor the model does not recognize.
    ///
    /// Unset fields are always accepted, so an empty [`StressParameters`]
    /// is valid for every model.
    fn check_stressors(&self, stress: &StressParameters) -> ModelResult<()> {
        let recognized = self.recognized_stressors();
        match stress.supplied().find(|s| !recognized.contains(s)) {
            Some(stressor) => Err(ModelError::UnrecognizedStressor {
                model: self.name().to_string(),
                stressor,
            }),
            None => Ok(()),
        }
    }

    /// Percent capacity fade at each grid point.
    ///
    /// # Arguments
    /// * `time_days` - Elapsed time per point [days]
    /// * `cycles` - Equivalent full cycles per point, same length as `time_days`
    /// * `temperature_c` - Cell temperature [°C]
    /// * `stress` - Remaining stressors; unset fields take their defaults
    ///
    /// # Returns
    /// One fade value [%] per input point.
    fn predict_fade(
        &self,
        time_days: &[f64],
        cycles: &[f64],
        temperature_c: f64,
        stress: &StressParameters,
    ) -> ModelResult<Vec<f64>>;
}

impl<M: DegradationModel + ?Sized> DegradationModel for &M {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn recognized_stressors(&self) -> &'static [Stressor] {
        (**self).recognized_stressors()
    }

    fn check_stressors(&self, stress: &StressParameters) -> ModelResult<()> {
        (**self).check_stressors(stress)
    }

    fn predict_fade(
        &self,
        time_days: &[f64],
        cycles: &[f64],
        temperature_c: f64,
        stress: &StressParameters,
    ) -> ModelResult<Vec<f64>> {
        (**self).predict_fade(time_days, cycles, temperature_c, stress)
    }
}

impl<M: DegradationModel + ?Sized> DegradationModel for Box<M> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn recognized_stressors(&self) -> &'static [Stressor] {
        (**self).recognized_stressors()
    }

    fn check_stressors(&self, stress: &StressParameters) -> ModelResult<()> {
        (**self).check_stressors(stress)
    }

    fn predict_fade(
        &self,
        time_days: &[f64],
        cycles: &[f64],
        temperature_c: f64,
        stress: &StressParameters,
    ) -> ModelResult<Vec<f64>> {
        (**self).predict_fade(time_days, cycles, temperature_c, stress)
    }
}

/// Validation helpers shared by the model variants.
pub(crate) mod validation {
    use super::*;
    use bd_core::{celsius_to_kelvin, ensure_finite, ensure_same_len};

    /// Check grid shape and temperature, returning the temperature in Kelvin.
    pub fn validate_inputs(
        time_days: &[f64],
        cycles: &[f64],
        temperature_c: f64,
    ) -> ModelResult<f64> {
        ensure_same_len(time_days.len(), cycles.len(), "cycle grid")?;
        let t_k = celsius_to_kelvin(ensure_finite(temperature_c, "temperature")?);
        if t_k <= 0.0 {
            return Err(ModelError::OutOfRange {
                what: "temperature",
                value: temperature_c,
            });
        }
        if let Some(&t) = time_days.iter().find(|t| !(**t >= 0.0)) {
            return Err(ModelError::OutOfRange {
                what: "time",
                value: t,
            });
        }
        if let Some(&n) = cycles.iter().find(|n| !(**n >= 0.0)) {
            return Err(ModelError::OutOfRange {
                what: "cycles",
                value: n,
            });
        }
        Ok(t_k)
    }

    /// Resolve stressors and check their physical ranges.
    pub fn resolve_stress(stress: &StressParameters) -> ModelResult<ResolvedStress> {
        let r = stress.resolved();
        if !(0.0..=1.0).contains(&r.soc_avg) {
            return Err(ModelError::OutOfRange {
                what: "soc_avg",
                value: r.soc_avg,
            });
        }
        if !(r.dod > 0.0 && r.dod <= 1.0) {
            return Err(ModelError::OutOfRange {
                what: "dod",
                value: r.dod,
            });
        }
        if !(r.c_rate >= 0.0 && r.c_rate.is_finite()) {
            return Err(ModelError::OutOfRange {
                what: "c_rate",
                value: r.c_rate,
            });
        }
        Ok(r)
    }

    /// Arrhenius acceleration relative to a reference temperature.
    ///
    /// ```text
    /// AF = exp(-Ea/R * (1/T - 1/T_ref))
    /// ```
    pub fn arrhenius(ea_j_per_mol: f64, t_k: f64, t_ref_k: f64) -> f64 {
        (-ea_j_per_mol / bd_core::R_GAS * (1.0 / t_k - 1.0 / t_ref_k)).exp()
    }
}
