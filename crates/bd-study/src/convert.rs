//! Conversion from study definitions to analysis inputs.

use crate::StudyResult;
use crate::schema::{LifetimeDef, ScenarioDef, Study, SweepDef};
use bd_analysis::{LifetimeOptions, Scenario, ScenarioSet, SweepOptions};

impl Study {
    pub fn scenario_set(&self) -> StudyResult<ScenarioSet> {
        Ok(ScenarioSet::try_from_iter(
            self.scenarios.iter().map(ScenarioDef::to_scenario),
        )?)
    }

    pub fn lifetime_options(&self) -> LifetimeOptions {
        self.lifetime.to_options()
    }
}

impl LifetimeDef {
    pub fn to_options(&self) -> LifetimeOptions {
        LifetimeOptions {
            cycles_per_day: self.cycles_per_day,
            eol_threshold: self.eol_threshold,
            max_years: self.max_years,
        }
    }
}

impl ScenarioDef {
    pub fn to_scenario(&self) -> Scenario {
        Scenario::new(self.name.clone(), self.temperature).with_stress(self.stress())
    }
}

impl SweepDef {
    /// Values to sweep, from the explicit list or the generated range.
    pub fn sweep_values(&self) -> Vec<f64> {
        match (&self.values, &self.range) {
            (Some(values), _) => values.clone(),
            (None, Some(range)) => range.generate_points(),
            (None, None) => Vec::new(),
        }
    }

    pub fn options(&self) -> SweepOptions {
        SweepOptions {
            time_years: self.time_years,
            cycles_per_day: self.cycles_per_day,
        }
    }
}
