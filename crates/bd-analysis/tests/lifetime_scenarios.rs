//! End-to-end lifetime and scenario checks against stub and reference models.

use bd_analysis::{EolResult, LifetimeOptions, LifetimePredictor, Scenario, ScenarioSet};
use bd_models::{DegradationModel, ModelResult, SemiEmpiricalModel, StressParameters, Stressor};

/// Same fade at every time point.
struct ConstantFade(f64);

impl DegradationModel for ConstantFade {
    fn name(&self) -> &str {
        "constant"
    }

    fn recognized_stressors(&self) -> &'static [Stressor] {
        &Stressor::ALL
    }

    fn predict_fade(
        &self,
        time_days: &[f64],
        _cycles: &[f64],
        _temperature_c: f64,
        _stress: &StressParameters,
    ) -> ModelResult<Vec<f64>> {
        Ok(vec![self.0; time_days.len()])
    }
}

/// Fade proportional to `(T - 0 °C) * t`, so hotter scenarios age faster.
struct TemperatureScaled;

impl DegradationModel for TemperatureScaled {
    fn name(&self) -> &str {
        "temperature-scaled"
    }

    fn recognized_stressors(&self) -> &'static [Stressor] {
        &[]
    }

    fn predict_fade(
        &self,
        time_days: &[f64],
        _cycles: &[f64],
        temperature_c: f64,
        _stress: &StressParameters,
    ) -> ModelResult<Vec<f64>> {
        Ok(time_days.iter().map(|t| 1e-4 * temperature_c * t).collect())
    }
}

#[test]
fn constant_twenty_percent_fade_is_eol_at_day_zero() {
    let predictor = LifetimePredictor::new(ConstantFade(20.0));
    let eol = predictor
        .estimate_lifetime(25.0, &LifetimeOptions::default(), &StressParameters::default())
        .unwrap();
    assert_eq!(
        eol,
        EolResult::WithinHorizon {
            time_days: 0.0,
            cycles: 0.0
        }
    );
}

#[test]
fn no_degradation_never_reaches_eol() {
    let predictor = LifetimePredictor::new(ConstantFade(0.0));
    let options = LifetimeOptions {
        max_years: 5,
        ..LifetimeOptions::default()
    };
    let eol = predictor
        .estimate_lifetime(25.0, &options, &StressParameters::default())
        .unwrap();
    assert_eq!(eol, EolResult::NotReached { horizon_years: 5 });
    assert_eq!(eol.time_days(), None);
    assert_eq!(eol.cycles(), None);
    let (t, n) = eol.as_floats();
    assert!(t.is_infinite() && n.is_infinite());
}

#[test]
fn threshold_of_one_is_met_immediately() {
    let predictor = LifetimePredictor::new(ConstantFade(0.0));
    let options = LifetimeOptions {
        eol_threshold: 1.0,
        ..LifetimeOptions::default()
    };
    let eol = predictor
        .estimate_lifetime(25.0, &options, &StressParameters::default())
        .unwrap();
    assert_eq!(eol.time_days(), Some(0.0));
    assert_eq!(eol.cycles(), Some(0.0));
}

#[test]
fn zero_threshold_needs_total_fade() {
    let predictor = LifetimePredictor::new(ConstantFade(99.0));
    let options = LifetimeOptions {
        eol_threshold: 0.0,
        ..LifetimeOptions::default()
    };
    let eol = predictor
        .estimate_lifetime(25.0, &options, &StressParameters::default())
        .unwrap();
    assert!(!eol.is_reached());
}

#[test]
fn comparison_keeps_order_and_converts_to_years() {
    let predictor = LifetimePredictor::new(TemperatureScaled);
    let scenarios = ScenarioSet::try_from_iter([
        Scenario::new("Hot climate", 40.0),
        Scenario::new("Mild climate", 20.0),
    ])
    .unwrap();

    let comparison = predictor
        .compare_scenarios(&scenarios, &LifetimeOptions::default())
        .unwrap();

    let names: Vec<_> = comparison.names().collect();
    assert_eq!(names, ["Hot climate", "Mild climate"]);
    assert_eq!(comparison.len(), 2);

    for outcome in comparison.iter() {
        let days = outcome.eol.time_days().unwrap();
        assert_eq!(outcome.eol_years(), Some(days / 365.0));
        assert_eq!(outcome.eol_cycles(), Some(days));
    }

    let hot = comparison.get("Hot climate").unwrap();
    let mild = comparison.get("Mild climate").unwrap();
    assert_eq!(hot.temperature_c, 40.0);
    assert!(hot.eol_years().unwrap() < mild.eol_years().unwrap());
}

#[test]
fn scenario_stress_reaches_the_model() {
    let predictor = LifetimePredictor::new(SemiEmpiricalModel::default());
    let gentle = StressParameters::default().with_dod(0.3).with_c_rate(0.5);
    let harsh = StressParameters::default().with_dod(1.0).with_c_rate(2.0);
    let scenarios = ScenarioSet::try_from_iter([
        Scenario::new("gentle", 25.0).with_stress(gentle),
        Scenario::new("harsh", 25.0).with_stress(harsh),
    ])
    .unwrap();

    let comparison = predictor
        .compare_scenarios(&scenarios, &LifetimeOptions::default())
        .unwrap();
    let gentle_years = comparison.get("gentle").unwrap().eol_years();
    let harsh_years = comparison.get("harsh").unwrap().eol_years().unwrap();
    if let Some(years) = gentle_years {
        assert!(years > harsh_years);
    }
}

#[test]
fn comparison_serializes_with_status_tags() {
    let predictor = LifetimePredictor::new(ConstantFade(0.0));
    let scenarios = ScenarioSet::try_from_iter([Scenario::new("idle", 25.0)]).unwrap();
    let options = LifetimeOptions {
        max_years: 1,
        ..LifetimeOptions::default()
    };
    let comparison = predictor.compare_scenarios(&scenarios, &options).unwrap();
    let json = serde_json::to_value(&comparison).unwrap();
    assert_eq!(json["outcomes"][0]["eol"]["status"], "not_reached");
    assert_eq!(json["outcomes"][0]["name"], "idle");
}
