//! Boundary checks for numeric inputs
//!
//! Every public math operation runs its arguments through these helpers so
//! that NaN and infinities are rejected before any trigonometry happens.

use crate::error::{PlanarError, PlanarResult};

/// Return `value` if it is finite, otherwise an input error naming `name`
pub fn ensure_finite(name: &'static str, value: f64) -> PlanarResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        log::warn!("Rejecting non-finite argument '{}': {}", name, value);
        Err(PlanarError::NonFinite { name, value })
    }
}

/// Check a list of named arguments, failing on the first non-finite one
pub fn ensure_all_finite(args: &[(&'static str, f64)]) -> PlanarResult<()> {
    for &(name, value) in args {
        ensure_finite(name, value)?;
    }
    Ok(())
}

/// Check computed values, rejecting results that overflowed to ±inf or NaN
pub fn ensure_finite_result(operation: &'static str, values: &[f64]) -> PlanarResult<()> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        log::warn!("Non-finite result from '{}': {:?}", operation, values);
        Err(PlanarError::NonFiniteResult { operation })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finite_passes_through() {
        assert_eq!(ensure_finite("x", 1.5).unwrap(), 1.5);
        assert_eq!(ensure_finite("x", -0.0).unwrap(), 0.0);
        assert_eq!(ensure_finite("x", f64::MAX).unwrap(), f64::MAX);
    }

    #[test]
    fn test_rejects_nan_and_infinity() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = ensure_finite("origin_x", bad).unwrap_err();
            assert_eq!(err.argument(), Some("origin_x"));
        }
    }

    #[test]
    fn test_reports_first_offender() {
        let err = ensure_all_finite(&[("x", 0.0), ("y", f64::NAN), ("theta", f64::INFINITY)])
            .unwrap_err();
        assert_eq!(err.argument(), Some("y"));
    }

    #[test]
    fn test_result_check() {
        assert!(ensure_finite_result("compose", &[1.0, -f64::MAX]).is_ok());

        let err = ensure_finite_result("compose", &[1.0, f64::INFINITY]).unwrap_err();
        assert!(matches!(
            err,
            PlanarError::NonFiniteResult { operation: "compose" }
        ));
        assert!(ensure_finite_result("compose", &[f64::NAN]).is_err());
    }

    #[test]
    fn test_empty_list_is_ok() {
        assert!(ensure_all_finite(&[]).is_ok());
    }
}
