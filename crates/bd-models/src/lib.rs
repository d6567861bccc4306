//! bd-models: capacity fade models for the battery degradation workspace.
//!
//! Provides:
//! - `DegradationModel` trait, the single capability every analysis depends on
//! - `StressParameters`, the explicit set of recognized stressors
//! - Reference model variants (empirical, semi-empirical, mechanistic)
//! - `ModelSpec` for selecting and parameterizing a variant from configuration
//!
//! # Example
//!
//! ```
//! use bd_models::{DegradationModel, SemiEmpiricalModel, StressParameters};
//!
//! let model = SemiEmpiricalModel::default();
//! let stress = StressParameters::default().with_dod(0.6);
//! let fade = model
//!     .predict_fade(&[0.0, 365.0], &[0.0, 365.0], 25.0, &stress)
//!     .unwrap();
//! assert_eq!(fade.len(), 2);
//! assert_eq!(fade[0], 0.0);
//! ```

pub mod empirical;
pub mod error;
pub mod mechanistic;
pub mod model;
pub mod semi_empirical;
pub mod spec;
pub mod stress;

pub use empirical::{EmpiricalModel, EmpiricalParams};
pub use error::{ModelError, ModelResult};
pub use mechanistic::{MechanisticModel, MechanisticParams};
pub use model::DegradationModel;
pub use semi_empirical::{SemiEmpiricalModel, SemiEmpiricalParams};
pub use spec::ModelSpec;
pub use stress::{ResolvedStress, StressParameters, Stressor};
