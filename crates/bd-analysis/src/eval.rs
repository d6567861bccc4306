//! Checked model evaluation and ordered fan-out shared by the analyses.

use crate::error::{AnalysisError, AnalysisResult};
use bd_core::{CycleGrid, TimeGrid, ensure_same_len};
use bd_models::{DegradationModel, StressParameters};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// One batched `predict_fade` call over a grid, with the returned length checked.
pub(crate) fn evaluate_fade<M: DegradationModel + ?Sized>(
    model: &M,
    time: &TimeGrid,
    cycles: &CycleGrid,
    temperature_c: f64,
    stress: &StressParameters,
) -> AnalysisResult<Vec<f64>> {
    evaluate_fade_raw(model, time.as_slice(), cycles.as_slice(), temperature_c, stress)
}

pub(crate) fn evaluate_fade_raw<M: DegradationModel + ?Sized>(
    model: &M,
    time_days: &[f64],
    cycles: &[f64],
    temperature_c: f64,
    stress: &StressParameters,
) -> AnalysisResult<Vec<f64>> {
    ensure_same_len(time_days.len(), cycles.len(), "cycle grid")?;
    model
        .check_stressors(stress)
        .map_err(|e| AnalysisError::model(model.name(), e))?;
    let fade = model
        .predict_fade(time_days, cycles, temperature_c, stress)
        .map_err(|e| AnalysisError::model(model.name(), e))?;
    ensure_same_len(time_days.len(), fade.len(), "model fade output")?;
    Ok(fade)
}

/// Apply `f` to every item, in parallel when enabled, keeping input order.
pub(crate) fn map_ordered<T, R, F>(items: &[T], f: F) -> AnalysisResult<Vec<R>>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> AnalysisResult<R> + Sync + Send,
{
    #[cfg(feature = "parallel")]
    let results = items.par_iter().map(f).collect();

    #[cfg(not(feature = "parallel"))]
    let results = items.iter().map(f).collect();

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use bd_core::BdError;
    use bd_models::{ModelResult, Stressor};

    struct Truncating;

    impl DegradationModel for Truncating {
        fn name(&self) -> &str {
            "truncating"
        }

        fn recognized_stressors(&self) -> &'static [Stressor] {
            &[]
        }

        fn predict_fade(
            &self,
            time_days: &[f64],
            _cycles: &[f64],
            _temperature_c: f64,
            _stress: &StressParameters,
        ) -> ModelResult<Vec<f64>> {
            Ok(vec![0.0; time_days.len().saturating_sub(1)])
        }
    }

    #[test]
    fn short_model_output_is_a_shape_mismatch() {
        let time = TimeGrid::daily(1);
        let cycles = CycleGrid::from_time(&time, 1.0).unwrap();
        let err = evaluate_fade(&Truncating, &time, &cycles, 25.0, &StressParameters::default())
            .unwrap_err();
        assert_eq!(
            err,
            AnalysisError::Core(BdError::ShapeMismatch {
                what: "model fade output",
                expected: 365,
                actual: 364,
            })
        );
    }

    #[test]
    fn unrecognized_stressor_is_caught_before_evaluation() {
        let time = TimeGrid::daily(1);
        let cycles = CycleGrid::from_time(&time, 1.0).unwrap();
        let stress = StressParameters::default().with_dod(0.5);
        let err = evaluate_fade(&Truncating, &time, &cycles, 25.0, &stress).unwrap_err();
        assert!(matches!(err, AnalysisError::Model { .. }));
    }

    #[test]
    fn map_ordered_keeps_order() {
        let items: Vec<usize> = (0..64).collect();
        let out = map_ordered(&items, |i| Ok(i * 2)).unwrap();
        assert_eq!(out, (0..64).map(|i| i * 2).collect::<Vec<_>>());
    }
}
