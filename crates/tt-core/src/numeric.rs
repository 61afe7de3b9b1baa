use crate::TtError;

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

impl Tolerances {
    /// Relative-only tolerance, handy for comparing correlation outputs.
    pub const fn relative(rel: Real) -> Self {
        Self { abs: 0.0, rel }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, TtError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(TtError::NonFinite { what, value: v })
    }
}

/// Σ cᵢ·x^eᵢ over paired coefficient/exponent slices.
///
/// Extra entries in the longer slice are ignored.
pub fn power_sum(coefficients: &[Real], exponents: &[Real], x: Real) -> Real {
    coefficients
        .iter()
        .zip(exponents)
        .map(|(c, e)| c * x.powf(*e))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn relative_tolerance_ignores_abs() {
        let tol = Tolerances::relative(1e-4);
        assert!(nearly_equal(1000.0, 1000.05, tol));
        assert!(!nearly_equal(1e-14, 2e-14, tol));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn power_sum_polynomial() {
        // 1 + 2x + 3x^2 at x = 2
        let v = power_sum(&[1.0, 2.0, 3.0], &[0.0, 1.0, 2.0], 2.0);
        assert_eq!(v, 17.0);
    }

    proptest! {
        #[test]
        fn power_sum_single_term_matches_powf(
            c in -10.0_f64..10.0,
            e in -3.0_f64..3.0,
            x in 0.1_f64..10.0,
        ) {
            prop_assert_eq!(power_sum(&[c], &[e], x), c * x.powf(e));
        }
    }
}
