//! Regression error metrics between predicted and reference series.
//!
//! All metrics check shape before doing any arithmetic: both series must have
//! the same, non-zero length.

use bd_core::{BdError, BdResult, ensure_same_len, mean};

fn check_pair(predicted: &[f64], actual: &[f64]) -> BdResult<()> {
    ensure_same_len(predicted.len(), actual.len(), "actual values")?;
    if predicted.is_empty() {
        return Err(BdError::InvalidArg {
            what: "metrics need at least one point",
        });
    }
    Ok(())
}

/// Root-mean-square error, `sqrt(mean((p - a)^2))`.
pub fn rmse(predicted: &[f64], actual: &[f64]) -> BdResult<f64> {
    check_pair(predicted, actual)?;
    let mse = mean(predicted.iter().zip(actual).map(|(p, a)| (p - a).powi(2)))
        .unwrap_or_default();
    Ok(mse.sqrt())
}

/// Mean absolute percentage error, `mean(|p - a| / |a|) * 100`.
///
/// Fails with [`BdError::DivisionByZero`] at the first zero in `actual`.
pub fn mape(predicted: &[f64], actual: &[f64]) -> BdResult<f64> {
    check_pair(predicted, actual)?;
    if let Some(index) = actual.iter().position(|a| *a == 0.0) {
        return Err(BdError::DivisionByZero {
            what: "MAPE reference values",
            index,
        });
    }
    let ratio = mean(
        predicted
            .iter()
            .zip(actual)
            .map(|(p, a)| ((p - a) / a).abs()),
    )
    .unwrap_or_default();
    Ok(ratio * 100.0)
}

/// Largest absolute pointwise error.
pub fn max_abs_error(predicted: &[f64], actual: &[f64]) -> BdResult<f64> {
    check_pair(predicted, actual)?;
    Ok(predicted
        .iter()
        .zip(actual)
        .map(|(p, a)| (p - a).abs())
        .fold(0.0, f64::max))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn rmse_self_comparison_is_zero(x in prop::collection::vec(-1e6_f64..1e6, 1..50)) {
            prop_assert_eq!(rmse(&x, &x).unwrap(), 0.0);
        }

        #[test]
        fn rmse_is_symmetric_and_non_negative(
            pairs in prop::collection::vec((-1e3_f64..1e3, -1e3_f64..1e3), 1..50)
        ) {
            let (a, b): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();
            let ab = rmse(&a, &b).unwrap();
            prop_assert!(ab >= 0.0);
            prop_assert_eq!(ab, rmse(&b, &a).unwrap());
        }

        #[test]
        fn rmse_never_exceeds_max_error(
            pairs in prop::collection::vec((-1e3_f64..1e3, -1e3_f64..1e3), 1..50)
        ) {
            let (a, b): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();
            prop_assert!(rmse(&a, &b).unwrap() <= max_abs_error(&a, &b).unwrap() + 1e-9);
        }
    }
}
