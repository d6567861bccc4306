//! bd-analysis: lifetime, stress and validation analyses over any
//! [`DegradationModel`](bd_models::DegradationModel).
//!
//! Provides:
//! - `LifetimePredictor`: end-of-life search over a simulated fade curve and
//!   multi-scenario comparison
//! - `StressFactorAnalysis`: single-variable sweeps of temperature, DoD and C-rate
//! - `ModelValidator`: RMSE / MAPE agreement between predictions and measurements
//!
//! Every analysis borrows the model read-only. With the `parallel` feature
//! (default) independent sweep points and scenarios are evaluated on the rayon
//! pool; results always come back in input order.
//!
//! # Example
//!
//! ```
//! use bd_analysis::{LifetimeOptions, LifetimePredictor};
//! use bd_models::{SemiEmpiricalModel, StressParameters};
//!
//! let predictor = LifetimePredictor::new(SemiEmpiricalModel::default());
//! let eol = predictor
//!     .estimate_lifetime(35.0, &LifetimeOptions::default(), &StressParameters::default())
//!     .unwrap();
//! if let Some(years) = eol.years() {
//!     println!("EOL after {years:.1} years");
//! }
//! ```

mod eval;

pub mod error;
pub mod lifetime;
pub mod metrics;
pub mod scenario;
pub mod stress;
pub mod sweeps;
pub mod validator;

pub use error::{AnalysisError, AnalysisResult};
pub use lifetime::{CurveOptions, EolResult, LifetimeOptions, LifetimePredictor, RetentionCurve};
pub use scenario::{Scenario, ScenarioComparison, ScenarioOutcome, ScenarioSet};
pub use stress::{StressFactorAnalysis, SweepOptions, SweepResult, SweepVariable};
pub use sweeps::{Spacing, SweepDefinition};
pub use validator::{ModelValidator, ValidationReport};
