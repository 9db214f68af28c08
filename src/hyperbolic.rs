//! Hyperbolic functions and their domain-validated inverses.
//!
//! The forward functions are total over the reals. The inverses are partial
//! and return [`DomainError`] where the result would be complex; the domain
//! check always runs before any square root or logarithm is taken.
//!
//! All functions are written directly from their closed forms in terms of
//! `exp`, `ln` and `sqrt`.

use crate::error::{DomainError, InverseHyperbolic, MathResult};
use crate::logarithm::LN_2;

/// Hyperbolic cosine, `cosh(x) = (e^-x + e^x) / 2`.
///
/// Even function with `cosh(x) ≥ 1`. Overflows to `+inf` once `e^|x|` does,
/// near `|x| ≈ 709.8`.
///
/// # Examples
/// ```
/// use u_advmath::hyperbolic::cosh;
/// assert_eq!(cosh(0.0), 1.0);
/// assert!((cosh(1.0) - 1.5430806348152437).abs() < 1e-12);
/// ```
pub fn cosh(x: f64) -> f64 {
    ((-x).exp() + x.exp()) / 2.0
}

/// Hyperbolic sine, `sinh(x) = (e^x - e^-x) / 2`.
///
/// # Examples
/// ```
/// use u_advmath::hyperbolic::sinh;
/// assert_eq!(sinh(0.0), 0.0);
/// assert!((sinh(1.0) - 1.1752011936438014).abs() < 1e-12);
/// ```
pub fn sinh(x: f64) -> f64 {
    (x.exp() - (-x).exp()) / 2.0
}

/// Hyperbolic tangent via the double-angle identity
/// `tanh(x) = sinh(2x) / (cosh(2x) + 1)`.
///
/// Once `cosh(2x)` overflows the quotient would be `inf / inf`, so the
/// result saturates to `±1` there.
///
/// # Examples
/// ```
/// use u_advmath::hyperbolic::tanh;
/// assert_eq!(tanh(0.0), 0.0);
/// assert!((tanh(1.0) - 0.7615941559557649).abs() < 1e-12);
/// assert_eq!(tanh(1000.0), 1.0);
/// ```
pub fn tanh(x: f64) -> f64 {
    let denominator = cosh(2.0 * x) + 1.0;
    if denominator.is_infinite() {
        return x.signum();
    }
    sinh(2.0 * x) / denominator
}

/// Inverse hyperbolic cosine, `acosh(x) = ln(x + √(x−1)·√(x+1))`.
///
/// Above about `f64::MAX / 2` the sum overflows, and the logarithm is split
/// as `ln x + ln 2` instead.
///
/// # Errors
/// [`DomainError`] if `x < 1` (either radicand negative) or `x` is NaN.
///
/// # Examples
/// ```
/// use u_advmath::hyperbolic::acosh;
/// assert_eq!(acosh(1.0).unwrap(), 0.0);
/// assert!((acosh(2.0).unwrap() - 1.3169578969248166).abs() < 1e-12);
/// assert!(acosh(0.5).is_err());
/// ```
#[allow(clippy::neg_cmp_op_on_partial_ord)]
pub fn acosh(x: f64) -> MathResult<f64> {
    // Negated comparisons so NaN is rejected too.
    if !(x - 1.0 >= 0.0) || !(x + 1.0 >= 0.0) {
        return Err(violation(InverseHyperbolic::Acosh, x));
    }
    let sum = x + (x - 1.0).sqrt() * (x + 1.0).sqrt();
    if sum.is_finite() {
        Ok(sum.ln())
    } else {
        Ok(x.ln() + LN_2)
    }
}

/// Inverse hyperbolic sine, `asinh(x) = ln(x + √(1 + x²))`.
///
/// Evaluated on `|x|` with the sign restored afterwards, since for large
/// negative `x` the sum `x + √(1 + x²)` cancels to zero. `√(1 + x²)` is
/// taken with `hypot` so `x²` cannot overflow, and if the sum itself
/// overflows the logarithm is split as `ln|x| + ln 2`.
///
/// # Errors
/// [`DomainError`] if the intermediate sum is not strictly positive. For
/// finite inputs this does not happen; NaN is the only input that trips it.
///
/// # Examples
/// ```
/// use u_advmath::hyperbolic::asinh;
/// assert_eq!(asinh(0.0).unwrap(), 0.0);
/// assert!((asinh(1.0).unwrap() - 0.881373587019543).abs() < 1e-12);
/// assert!((asinh(-1.0).unwrap() + 0.881373587019543).abs() < 1e-12);
/// ```
#[allow(clippy::neg_cmp_op_on_partial_ord)]
pub fn asinh(x: f64) -> MathResult<f64> {
    let a = x.abs();
    let sum = a + a.hypot(1.0);
    if !(sum > 0.0) {
        return Err(violation(InverseHyperbolic::Asinh, x));
    }
    let magnitude = if sum.is_finite() {
        sum.ln()
    } else {
        a.ln() + LN_2
    };
    Ok(magnitude.copysign(x))
}

/// Inverse hyperbolic tangent, `atanh(x) = ½·(ln(1+x) − ln(1−x))`.
///
/// # Errors
/// [`DomainError`] if `|x| ≥ 1` (the boundary is excluded, as it would take
/// the logarithm of zero) or `x` is NaN.
///
/// # Examples
/// ```
/// use u_advmath::hyperbolic::atanh;
/// assert_eq!(atanh(0.0).unwrap(), 0.0);
/// assert!((atanh(0.5).unwrap() - 0.5493061443340549).abs() < 1e-12);
/// assert!(atanh(1.0).is_err());
/// assert!(atanh(-1.0).is_err());
/// ```
#[allow(clippy::neg_cmp_op_on_partial_ord)]
pub fn atanh(x: f64) -> MathResult<f64> {
    if !(x.abs() < 1.0) {
        return Err(violation(InverseHyperbolic::Atanh, x));
    }
    Ok(0.5 * ((1.0 + x).ln() - (1.0 - x).ln()))
}

fn violation(function: InverseHyperbolic, x: f64) -> DomainError {
    tracing::debug!(function = function.name(), x, "domain violation");
    DomainError::new(function)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn cosh_at_least_one_and_even(x in -700.0_f64..700.0) {
            prop_assert!(cosh(x) >= 1.0, "cosh({x}) = {}", cosh(x));
            prop_assert_eq!(cosh(-x), cosh(x));
        }

        #[test]
        fn sinh_is_odd(x in -700.0_f64..700.0) {
            prop_assert_eq!(sinh(-x), -sinh(x));
        }

        #[test]
        fn tanh_strictly_bounded(x in -15.0_f64..15.0) {
            let t = tanh(x);
            prop_assert!(t > -1.0 && t < 1.0, "tanh({x}) = {t}");
        }

        #[test]
        fn tanh_closed_bounds_everywhere(x in proptest::num::f64::NORMAL) {
            let t = tanh(x);
            prop_assert!((-1.0..=1.0).contains(&t), "tanh({x}) = {t}");
        }

        #[test]
        fn acosh_rejects_below_one(x in -1e6_f64..1.0) {
            prop_assert!(acosh(x).is_err());
        }

        #[test]
        fn acosh_non_negative(x in 1.0_f64..1e6) {
            prop_assert!(acosh(x).unwrap() >= 0.0);
        }

        #[test]
        fn asinh_total_on_finite(x in proptest::num::f64::NORMAL | proptest::num::f64::SUBNORMAL | proptest::num::f64::ZERO) {
            let y = asinh(x);
            prop_assert!(y.is_ok(), "asinh({x}) raised {:?}", y);
            prop_assert!(y.unwrap().is_finite());
        }

        #[test]
        fn asinh_is_odd(x in -1e6_f64..1e6) {
            prop_assert_eq!(asinh(-x).unwrap(), -asinh(x).unwrap());
        }

        #[test]
        fn atanh_rejects_outside_open_interval(x in 1.0_f64..1e6, negate in any::<bool>()) {
            let x = if negate { -x } else { x };
            prop_assert!(atanh(x).is_err());
        }

        #[test]
        fn atanh_inverts_tanh(x in -5.0_f64..5.0) {
            let back = atanh(tanh(x)).unwrap();
            prop_assert!((back - x).abs() < 1e-6, "atanh(tanh({x})) = {back}");
        }
    }
}
