//! Base-2 logarithm by change of base.

/// ln 2 ≈ 0.6931471805599453
pub const LN_2: f64 = std::f64::consts::LN_2;

/// Base-2 logarithm, `log2(x) = ln(x) / ln(2)`.
///
/// No domain check of its own: non-positive input behaves exactly as
/// [`f64::ln`] does.
///
/// # Returns
/// - `f64::NEG_INFINITY` if `x == 0.0`.
/// - `f64::NAN` if `x < 0.0` or `x` is NaN.
///
/// # Examples
/// ```
/// use u_advmath::logarithm::log2;
/// assert_eq!(log2(1.0), 0.0);
/// assert!((log2(8.0) - 3.0).abs() < 1e-12);
/// assert!((log2(1024.0) - 10.0).abs() < 1e-12);
/// ```
pub fn log2(x: f64) -> f64 {
    x.ln() / LN_2
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn log2_matches_std(x in 1e-300_f64..1e300) {
            let err = (log2(x) - x.log2()).abs();
            prop_assert!(err < 1e-12 * x.log2().abs().max(1.0), "log2({x}) off by {err}");
        }

        #[test]
        fn log2_of_product_is_sum(a in 1e-6_f64..1e6, b in 1e-6_f64..1e6) {
            let err = (log2(a * b) - (log2(a) + log2(b))).abs();
            prop_assert!(err < 1e-9, "log2({a}·{b}) off by {err}");
        }
    }
}
