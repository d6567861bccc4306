use crate::BdError;

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, BdError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(BdError::NonFinite { what, value: v })
    }
}

/// Reject a second series whose length differs from the first.
pub fn ensure_same_len(
    expected: usize,
    actual: usize,
    what: &'static str,
) -> Result<(), BdError> {
    if expected == actual {
        Ok(())
    } else {
        Err(BdError::ShapeMismatch {
            what,
            expected,
            actual,
        })
    }
}

/// Arithmetic mean; `None` for an empty series.
pub fn mean(values: impl ExactSizeIterator<Item = Real>) -> Option<Real> {
    let n = values.len();
    if n == 0 {
        return None;
    }
    Some(values.sum::<Real>() / n as Real)
}

/// Capacity retention fraction for each fade percentage (`1 - fade/100`).
pub fn retention_from_fade(fade_pct: &[Real]) -> Vec<Real> {
    fade_pct.iter().map(|f| 1.0 - f / 100.0).collect()
}
