//! bd-core: stable foundation for the battery degradation workspace.
//!
//! Contains:
//! - units (day/year/cycle conversions, Celsius to Kelvin)
//! - numeric (Real + tolerances + float helpers)
//! - grid (time and equivalent-cycle grids)
//! - error (shared error types)

pub mod error;
pub mod grid;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{BdError, BdResult};
pub use grid::*;
pub use numeric::*;
pub use units::*;
