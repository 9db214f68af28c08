//! Exact decimal truncation.
//!
//! Truncating by arithmetic, `floor(x · 10^d) / 10^d`, inherits binary
//! representation error: `0.29 · 100` is `28.999999999999996`, so the naive
//! result is `0.28`. Instead the value is rendered as its canonical decimal
//! text, cut on a digit boundary, and parsed back.
//!
//! # Canonical text
//! `f64`'s `Display` implementation prints the shortest digit string that
//! parses back to the same value, and never switches to exponent notation.
//! That gives exactly one sign, an integer-digit run and an optional
//! fractional-digit run, which is what `DecimalParts` captures.

use std::cmp::Ordering;

/// A finite `f64` split along its canonical decimal text.
///
/// `integer` is never empty; `fraction` is empty for integral values.
/// `negative` is set for `-0.0` too.
#[derive(Debug, Clone, PartialEq, Eq)]
struct DecimalParts {
    negative: bool,
    integer: String,
    fraction: String,
}

impl DecimalParts {
    /// Decomposes `x`, or returns `None` if `x` is NaN or infinite.
    fn from_f64(x: f64) -> Option<Self> {
        if !x.is_finite() {
            return None;
        }
        let text = x.to_string();
        let (negative, unsigned) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text.as_str()),
        };
        let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
        Some(Self {
            negative,
            integer: integer.to_owned(),
            fraction: fraction.to_owned(),
        })
    }

    /// Reassembles sign, `integer`, and an optional `.fraction`, then parses.
    fn assemble(&self, integer: &str, fraction: &str) -> f64 {
        let mut text = String::with_capacity(integer.len() + fraction.len() + 2);
        if self.negative {
            text.push('-');
        }
        text.push_str(integer);
        if !fraction.is_empty() {
            text.push('.');
            text.push_str(fraction);
        }
        text.parse()
            .expect("reassembled decimal digits form a valid float literal")
    }
}

/// Truncates `x` toward zero at the decimal position given by `digits`.
///
/// - `digits > 0`: keep that many fractional digits. If the canonical text
///   has no more fractional digits than that, `x` is returned unchanged.
/// - `digits == 0`: keep the integer part.
/// - `digits < 0`: zero out the last `|digits|` integer digits. Zeroing as
///   many digits as there are (or more) gives zero, keeping the sign of
///   `x` like the other branches do.
///
/// NaN and infinities are returned unchanged.
///
/// # Examples
/// ```
/// use u_advmath::truncate::trunc;
/// assert_eq!(trunc(22.64, 1), 22.6);
/// assert_eq!(trunc(-22.64, 1), -22.6);
/// assert_eq!(trunc(0.29, 2), 0.29);
/// assert_eq!(trunc(12345.678, -2), 12300.0);
/// assert_eq!(trunc(5.0, 3), 5.0);
/// assert_eq!(trunc(123.0, -5), 0.0);
/// ```
pub fn trunc(x: f64, digits: i32) -> f64 {
    let Some(parts) = DecimalParts::from_f64(x) else {
        return x;
    };
    tracing::trace!(
        negative = parts.negative,
        integer = %parts.integer,
        fraction = %parts.fraction,
        digits,
        "truncating"
    );

    let places = digits.unsigned_abs() as usize;
    match digits.cmp(&0) {
        Ordering::Greater => {
            if places >= parts.fraction.len() {
                return x;
            }
            parts.assemble(&parts.integer, &parts.fraction[..places])
        }
        Ordering::Equal => parts.assemble(&parts.integer, ""),
        Ordering::Less => {
            let len = parts.integer.len();
            if places >= len {
                return 0.0_f64.copysign(x);
            }
            // Pad with zeros rather than multiplying by 10^k, which is
            // inexact beyond 10^22.
            let integer = format!("{}{}", &parts.integer[..len - places], "0".repeat(places));
            parts.assemble(&integer, "")
        }
    }
}

/// Truncates `x` toward zero to an integer, `trunc(x, 0)` as `i64`.
///
/// Values outside the `i64` range saturate to `i64::MIN` / `i64::MAX`,
/// and NaN maps to `0`.
///
/// # Examples
/// ```
/// use u_advmath::truncate::trunc_to_int;
/// assert_eq!(trunc_to_int(22.64), 22);
/// assert_eq!(trunc_to_int(-22.64), -22);
/// ```
pub fn trunc_to_int(x: f64) -> i64 {
    trunc(x, 0) as i64
}
