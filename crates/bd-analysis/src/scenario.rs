//! Named operating scenarios and their lifetime comparison results.

use crate::error::{AnalysisError, AnalysisResult};
use crate::lifetime::EolResult;
use bd_models::StressParameters;
use serde::Serialize;

/// A named operating condition: temperature plus the other stressors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scenario {
    pub name: String,
    pub temperature_c: f64,
    pub stress: StressParameters,
}

impl Scenario {
    pub fn new(name: impl Into<String>, temperature_c: f64) -> Self {
        Self {
            name: name.into(),
            temperature_c,
            stress: StressParameters::default(),
        }
    }

    pub fn with_stress(mut self, stress: StressParameters) -> Self {
        self.stress = stress;
        self
    }
}

/// Scenarios in insertion order, with unique names.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScenarioSet {
    scenarios: Vec<Scenario>,
}

impl ScenarioSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set, failing on the first repeated name.
    pub fn try_from_iter(iter: impl IntoIterator<Item = Scenario>) -> AnalysisResult<Self> {
        let mut set = Self::new();
        for scenario in iter {
            set.push(scenario)?;
        }
        Ok(set)
    }

    pub fn push(&mut self, scenario: Scenario) -> AnalysisResult<()> {
        if self.get(&scenario.name).is_some() {
            return Err(AnalysisError::DuplicateScenario(scenario.name));
        }
        self.scenarios.push(scenario);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Scenario> {
        self.scenarios.iter().find(|s| s.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Scenario> {
        self.scenarios.iter()
    }

    pub fn as_slice(&self) -> &[Scenario] {
        &self.scenarios
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }
}

/// Lifetime of one scenario.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioOutcome {
    pub name: String,
    pub temperature_c: f64,
    pub eol: EolResult,
}

impl ScenarioOutcome {
    /// Years to EOL (`time_days / 365`), `None` when not reached.
    pub fn eol_years(&self) -> Option<f64> {
        self.eol.years()
    }

    pub fn eol_cycles(&self) -> Option<f64> {
        self.eol.cycles()
    }
}

/// Outcomes of a scenario comparison, in the input scenario order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioComparison {
    pub eol_threshold: f64,
    pub max_years: u32,
    pub outcomes: Vec<ScenarioOutcome>,
}

impl ScenarioComparison {
    pub fn get(&self, name: &str) -> Option<&ScenarioOutcome> {
        self.outcomes.iter().find(|o| o.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScenarioOutcome> {
        self.outcomes.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.outcomes.iter().map(|o| o.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Longest-lived scenario; unreached EOL counts as longer than any reached one.
    pub fn longest_lived(&self) -> Option<&ScenarioOutcome> {
        self.outcomes.iter().max_by(|a, b| {
            let key = |o: &ScenarioOutcome| o.eol.time_days().unwrap_or(f64::INFINITY);
            key(a).total_cmp(&key(b))
        })
    }
}
