//! Operating stressors passed to degradation models.
//!
//! Temperature is always an explicit argument of
//! [`DegradationModel::predict_fade`](crate::DegradationModel::predict_fade);
//! the remaining stressors live here as optional fields. An unset field means
//! "use the default" and is never reported as unrecognized.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default average state of charge (fraction).
pub const DEFAULT_SOC_AVG: f64 = 0.5;
/// Default depth of discharge (fraction).
pub const DEFAULT_DOD: f64 = 0.8;
/// Default C-rate.
pub const DEFAULT_C_RATE: f64 = 1.0;

/// Named stressor other than temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stressor {
    /// Average state of charge during storage and cycling
    SocAvg,
    /// Depth of discharge per cycle
    Dod,
    /// Charge/discharge current relative to capacity
    CRate,
}

impl Stressor {
    pub const ALL: [Stressor; 3] = [Stressor::SocAvg, Stressor::Dod, Stressor::CRate];

    pub fn key(self) -> &'static str {
        match self {
            Self::SocAvg => "soc_avg",
            Self::Dod => "dod",
            Self::CRate => "c_rate",
        }
    }
}

impl fmt::Display for Stressor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Caller-supplied stressors; `None` falls back to the documented default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StressParameters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soc_avg: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dod: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub c_rate: Option<f64>,
}

impl StressParameters {
    pub fn with_soc_avg(mut self, soc_avg: f64) -> Self {
        self.soc_avg = Some(soc_avg);
        self
    }

    pub fn with_dod(mut self, dod: f64) -> Self {
        self.dod = Some(dod);
        self
    }

    pub fn with_c_rate(mut self, c_rate: f64) -> Self {
        self.c_rate = Some(c_rate);
        self
    }

    /// Copy with one stressor replaced, used by single-variable sweeps.
    pub fn with(mut self, stressor: Stressor, value: f64) -> Self {
        match stressor {
            Stressor::SocAvg => self.soc_avg = Some(value),
            Stressor::Dod => self.dod = Some(value),
            Stressor::CRate => self.c_rate = Some(value),
        }
        self
    }

    pub fn get(&self, stressor: Stressor) -> Option<f64> {
        match stressor {
            Stressor::SocAvg => self.soc_avg,
            Stressor::Dod => self.dod,
            Stressor::CRate => self.c_rate,
        }
    }

    /// Stressors explicitly set by the caller, in declaration order.
    pub fn supplied(&self) -> impl Iterator<Item = Stressor> + '_ {
        Stressor::ALL
            .into_iter()
            .filter(|s| self.get(*s).is_some())
    }

    /// All stressors with defaults filled in.
    pub fn resolved(&self) -> ResolvedStress {
        ResolvedStress {
            soc_avg: self.soc_avg.unwrap_or(DEFAULT_SOC_AVG),
            dod: self.dod.unwrap_or(DEFAULT_DOD),
            c_rate: self.c_rate.unwrap_or(DEFAULT_C_RATE),
        }
    }
}

/// Fully specified stressors as seen by a model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedStress {
    pub soc_avg: f64,
    pub dod: f64,
    pub c_rate: f64,
}
