//! Sweep value generation.
//!
//! A [`SweepDefinition`] describes the values of one swept stressor by bounds,
//! point count and spacing. Explicit value lists can be passed to the sweep
//! functions directly; definitions are a convenience for configuration files.

use bd_core::{BdError, BdResult, Tolerances, ensure_finite, nearly_equal};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Type of sweep progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Spacing {
    /// Uniformly spaced points
    #[default]
    Linear,
    /// Logarithmically spaced points
    Logarithmic,
}

/// Bounds and resolution of a single parameter sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SweepDefinition {
    pub start: f64,
    pub end: f64,
    pub points: usize,
    #[serde(default)]
    pub spacing: Spacing,
}

impl SweepDefinition {
    pub fn new(start: f64, end: f64, points: usize, spacing: Spacing) -> BdResult<Self> {
        let def = Self {
            start,
            end,
            points,
            spacing,
        };
        def.validate()?;
        Ok(def)
    }

    pub fn linear(start: f64, end: f64, points: usize) -> BdResult<Self> {
        Self::new(start, end, points, Spacing::Linear)
    }

    pub fn validate(&self) -> BdResult<()> {
        ensure_finite(self.start, "sweep start")?;
        ensure_finite(self.end, "sweep end")?;
        if self.points == 0 {
            return Err(BdError::InvalidArg {
                what: "sweep must have at least 1 point",
            });
        }
        if self.points > 1 && nearly_equal(self.start, self.end, Tolerances::default()) {
            return Err(BdError::InvalidArg {
                what: "start and end values must be different",
            });
        }
        Ok(())
    }

    /// Generate all points in the sweep.
    pub fn generate_points(&self) -> Vec<f64> {
        match self.spacing {
            Spacing::Linear => self.generate_linear(),
            Spacing::Logarithmic => self.generate_logarithmic(),
        }
    }

    fn generate_linear(&self) -> Vec<f64> {
        if self.points <= 1 {
            return vec![self.start];
        }

        let delta = (self.end - self.start) / (self.points - 1) as f64;
        let mut points: Vec<f64> = (0..self.points)
            .map(|i| self.start + i as f64 * delta)
            .collect();

        // Ensure exact endpoint
        points[self.points - 1] = self.end;
        points
    }

    fn generate_logarithmic(&self) -> Vec<f64> {
        if self.points <= 1 {
            return vec![self.start];
        }

        // Log spacing needs positive bounds
        if self.start <= 0.0 || self.end <= 0.0 {
            return self.generate_linear();
        }

        let log_start = self.start.ln();
        let log_delta = (self.end.ln() - log_start) / (self.points - 1) as f64;
        let mut points: Vec<f64> = (0..self.points)
            .map(|i| (log_start + i as f64 * log_delta).exp())
            .collect();

        points[0] = self.start;
        points[self.points - 1] = self.end;
        points
    }
}

impl fmt::Display for Spacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "linear"),
            Self::Logarithmic => write!(f, "logarithmic"),
        }
    }
}

impl fmt::Display for SweepDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} to {} ({} points, {})",
            self.start, self.end, self.points, self.spacing
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_sweep_generation() {
        let sweep = SweepDefinition::linear(10.0, 50.0, 5).unwrap();
        let points = sweep.generate_points();
        assert_eq!(points, vec![10.0, 20.0, 30.0, 40.0, 50.0]);
    }

    #[test]
    fn linear_endpoint_is_exact() {
        let sweep = SweepDefinition::linear(0.1, 1.0, 7).unwrap();
        let points = sweep.generate_points();
        assert_eq!(points[0], 0.1);
        assert_eq!(points[6], 1.0);
    }

    #[test]
    fn logarithmic_sweep_generation() {
        let sweep = SweepDefinition::new(0.1, 10.0, 3, Spacing::Logarithmic).unwrap();
        let points = sweep.generate_points();
        assert_eq!(points.len(), 3);
        assert!((points[1] - 1.0).abs() < 1e-12);
        assert_eq!(points[2], 10.0);
    }

    #[test]
    fn logarithmic_falls_back_to_linear_for_non_positive_bounds() {
        let sweep = SweepDefinition::new(0.0, 2.0, 3, Spacing::Logarithmic).unwrap();
        assert_eq!(sweep.generate_points(), vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn single_point_sweep() {
        let sweep = SweepDefinition::linear(25.0, 25.0, 1).unwrap();
        assert_eq!(sweep.generate_points(), vec![25.0]);
    }

    #[test]
    fn reject_invalid_definitions() {
        assert!(SweepDefinition::linear(0.0, 1.0, 0).is_err());
        assert!(SweepDefinition::linear(1.0, 1.0, 5).is_err());
        assert!(SweepDefinition::linear(f64::NAN, 1.0, 5).is_err());
    }
}
