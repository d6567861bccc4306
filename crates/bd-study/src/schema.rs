//! Study file schema definitions.

use bd_analysis::{SweepDefinition, SweepVariable};
use bd_models::{ModelSpec, StressParameters};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Study {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub model: ModelSpec,
    #[serde(default)]
    pub lifetime: LifetimeDef,
    #[serde(default)]
    pub scenarios: Vec<ScenarioDef>,
    #[serde(default)]
    pub sweeps: Vec<SweepDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct LifetimeDef {
    pub cycles_per_day: f64,
    pub eol_threshold: f64,
    pub max_years: u32,
}

impl Default for LifetimeDef {
    fn default() -> Self {
        Self {
            cycles_per_day: 1.0,
            eol_threshold: 0.8,
            max_years: 30,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScenarioDef {
    pub name: String,
    /// Cell temperature [°C]; required.
    pub temperature: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soc_avg: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dod: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub c_rate: Option<f64>,
}

impl ScenarioDef {
    pub fn stress(&self) -> StressParameters {
        StressParameters {
            soc_avg: self.soc_avg,
            dod: self.dod,
            c_rate: self.c_rate,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SweepDef {
    pub variable: SweepVariable,
    /// Explicit sweep values, used as given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<f64>>,
    /// Generated sweep values; exclusive with `values`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<SweepDefinition>,
    /// Fixed temperature for DoD and C-rate sweeps [°C].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default = "default_time_years")]
    pub time_years: f64,
    #[serde(default = "default_cycles_per_day")]
    pub cycles_per_day: f64,
    #[serde(default)]
    pub stress: StressParameters,
}

fn default_time_years() -> f64 {
    10.0
}

fn default_cycles_per_day() -> f64 {
    1.0
}
