//! Time and equivalent-cycle grids shared by every analysis.
//!
//! A [`TimeGrid`] is an ordered sequence of days, strictly increasing and
//! starting at zero. A [`CycleGrid`] is derived from it point by point, so the
//! two always have the same length.

use crate::units::{equivalent_cycles, years_to_days};
use crate::{BdError, BdResult, ensure_finite};

/// Ordered time points in days.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeGrid {
    days: Vec<f64>,
}

impl TimeGrid {
    /// One sample per day over `[0, max_years * 365)`.
    pub fn daily(max_years: u32) -> Self {
        let samples = max_years as usize * 365;
        Self {
            days: (0..samples).map(|d| d as f64).collect(),
        }
    }

    /// `samples` evenly spaced points from 0 to `end_days`, endpoint included.
    pub fn linspace(end_days: f64, samples: usize) -> BdResult<Self> {
        let end_days = ensure_finite(end_days, "grid end")?;
        if end_days <= 0.0 {
            return Err(BdError::InvalidArg {
                what: "grid end must be positive",
            });
        }
        let days = match samples {
            0 => Vec::new(),
            1 => vec![0.0],
            n => {
                let step = end_days / (n - 1) as f64;
                let mut days: Vec<f64> = (0..n).map(|i| i as f64 * step).collect();
                // Ensure exact endpoint
                days[n - 1] = end_days;
                days
            }
        };
        Ok(Self { days })
    }

    /// A single exposure point, used by fixed-horizon sweeps.
    pub fn single(days: f64) -> BdResult<Self> {
        let days = ensure_finite(days, "exposure time")?;
        if days < 0.0 {
            return Err(BdError::InvalidArg {
                what: "exposure time must be non-negative",
            });
        }
        Ok(Self { days: vec![days] })
    }

    /// Single point placed `years` into the future.
    pub fn single_years(years: f64) -> BdResult<Self> {
        Self::single(years_to_days(years))
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.days
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.days.get(index).copied()
    }
}

/// Equivalent full cycles, one per [`TimeGrid`] point.
#[derive(Debug, Clone, PartialEq)]
pub struct CycleGrid {
    cycles: Vec<f64>,
}

impl CycleGrid {
    pub fn from_time(time: &TimeGrid, cycles_per_day: f64) -> BdResult<Self> {
        let cycles_per_day = ensure_finite(cycles_per_day, "cycles per day")?;
        if cycles_per_day < 0.0 {
            return Err(BdError::InvalidArg {
                what: "cycles per day must be non-negative",
            });
        }
        Ok(Self {
            cycles: time
                .as_slice()
                .iter()
                .map(|&d| equivalent_cycles(d, cycles_per_day))
                .collect(),
        })
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.cycles
    }

    pub fn len(&self) -> usize {
        self.cycles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cycles.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.cycles.get(index).copied()
    }
}
