//! Serializable model selection.

use crate::empirical::{EmpiricalModel, EmpiricalParams};
use crate::mechanistic::{MechanisticModel, MechanisticParams};
use crate::model::DegradationModel;
use crate::semi_empirical::{SemiEmpiricalModel, SemiEmpiricalParams};
use serde::{Deserialize, Serialize};

/// Which model variant to build, with optional coefficient overrides.
///
/// ```yaml
/// kind: semi_empirical
/// params:
///   a_cal: 0.02
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelSpec {
    Empirical {
        #[serde(default)]
        params: EmpiricalParams,
    },
    SemiEmpirical {
        #[serde(default)]
        params: SemiEmpiricalParams,
    },
    Mechanistic {
        #[serde(default)]
        params: MechanisticParams,
    },
}

impl Default for ModelSpec {
    fn default() -> Self {
        Self::SemiEmpirical {
            params: SemiEmpiricalParams::default(),
        }
    }
}

impl ModelSpec {
    pub fn empirical() -> Self {
        Self::Empirical {
            params: EmpiricalParams::default(),
        }
    }

    pub fn semi_empirical() -> Self {
        Self::default()
    }

    pub fn mechanistic() -> Self {
        Self::Mechanistic {
            params: MechanisticParams::default(),
        }
    }

    pub fn build(&self) -> Box<dyn DegradationModel> {
        match self {
            Self::Empirical { params } => Box::new(EmpiricalModel::new(*params)),
            Self::SemiEmpirical { params } => Box::new(SemiEmpiricalModel::new(*params)),
            Self::Mechanistic { params } => Box::new(MechanisticModel::new(*params)),
        }
    }
}
