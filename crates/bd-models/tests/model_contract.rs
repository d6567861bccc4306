//! Contract checks shared by every reference model variant.

use bd_models::{DegradationModel, ModelError, ModelSpec, StressParameters, Stressor};

fn all_models() -> Vec<Box<dyn DegradationModel>> {
    vec![
        ModelSpec::empirical().build(),
        ModelSpec::semi_empirical().build(),
        ModelSpec::mechanistic().build(),
    ]
}

#[test]
fn empty_stress_is_accepted_by_every_model() {
    let t: Vec<f64> = (0..365).map(|d| d as f64).collect();
    for model in all_models() {
        let fade = model
            .predict_fade(&t, &t, 25.0, &StressParameters::default())
            .unwrap();
        assert_eq!(fade.len(), t.len(), "{}", model.name());
        assert!(fade.iter().all(|f| f.is_finite() && *f >= 0.0));
    }
}

#[test]
fn repeated_calls_are_identical() {
    let t = [0.0, 100.0, 1000.0];
    let stress = StressParameters::default().with_dod(0.5);
    for model in all_models() {
        let a = model.predict_fade(&t, &t, 35.0, &stress).unwrap();
        let b = model.predict_fade(&t, &t, 35.0, &stress).unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn shape_mismatch_is_an_error() {
    for model in all_models() {
        let err = model
            .predict_fade(&[0.0, 1.0], &[0.0], 25.0, &StressParameters::default())
            .unwrap_err();
        assert!(matches!(err, ModelError::Core(_)), "{}", model.name());
    }
}

#[test]
fn declared_stressors_match_behaviour() {
    for model in all_models() {
        for stressor in Stressor::ALL {
            let stress = StressParameters::default().with(stressor, 0.5);
            let result = model.predict_fade(&[10.0], &[10.0], 25.0, &stress);
            let recognized = model.recognized_stressors().contains(&stressor);
            assert_eq!(result.is_ok(), recognized, "{} / {}", model.name(), stressor);
        }
    }
}

mod proptests {
    use super::all_models;
    use bd_models::StressParameters;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn fade_never_decreases_with_exposure(
            temp in -20.0_f64..60.0,
            dod in 0.05_f64..1.0,
            rate in 0.0_f64..3.0,
        ) {
            let t: Vec<f64> = (0..50).map(|i| i as f64 * 73.0).collect();
            let n: Vec<f64> = t.iter().map(|d| d * rate).collect();
            let stress = StressParameters::default().with_dod(dod);
            for model in all_models() {
                let fade = model.predict_fade(&t, &n, temp, &stress).unwrap();
                prop_assert!(fade.windows(2).all(|w| w[1] >= w[0]), "{}", model.name());
            }
        }
    }
}
