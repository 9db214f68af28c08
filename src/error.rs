//! Error types for partial real functions.
//!
//! The inverse hyperbolic functions are only defined on part of the real
//! line. Outside it the true result lives on the complex plane, which this
//! crate does not model, so the caller gets a [`DomainError`] instead of a
//! silent NaN or infinity.

use std::fmt;
use thiserror::Error;

/// Result type returned by the domain-validated functions.
pub type MathResult<T> = Result<T, DomainError>;

/// Identifies which inverse hyperbolic function rejected its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InverseHyperbolic {
    /// Inverse hyperbolic cosine, defined for `x ≥ 1`.
    Acosh,
    /// Inverse hyperbolic sine, defined for all finite `x`.
    Asinh,
    /// Inverse hyperbolic tangent, defined for `-1 < x < 1`.
    Atanh,
}

impl InverseHyperbolic {
    /// Returns the conventional lowercase name of the function.
    pub fn name(self) -> &'static str {
        match self {
            InverseHyperbolic::Acosh => "acosh",
            InverseHyperbolic::Asinh => "asinh",
            InverseHyperbolic::Atanh => "atanh",
        }
    }
}

impl fmt::Display for InverseHyperbolic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The operation would produce a non-real (complex) result.
///
/// Carries no payload beyond the function that raised it.
///
/// # Examples
/// ```
/// use u_advmath::error::{DomainError, InverseHyperbolic};
/// use u_advmath::hyperbolic::atanh;
///
/// let err = atanh(1.0).unwrap_err();
/// assert_eq!(err, DomainError::new(InverseHyperbolic::Atanh));
/// assert_eq!(err.to_string(), "complex result: atanh has no real value for this input");
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[error("complex result: {function} has no real value for this input")]
pub struct DomainError {
    /// The function whose domain was violated.
    pub function: InverseHyperbolic,
}

impl DomainError {
    /// Creates a domain error for `function`.
    pub fn new(function: InverseHyperbolic) -> Self {
        Self { function }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_function() {
        let cases = [
            (InverseHyperbolic::Acosh, "acosh"),
            (InverseHyperbolic::Asinh, "asinh"),
            (InverseHyperbolic::Atanh, "atanh"),
        ];
        for (function, name) in cases {
            let msg = DomainError::new(function).to_string();
            assert!(msg.contains(name), "{msg} should mention {name}");
            assert!(msg.starts_with("complex result"));
        }
    }

    #[test]
    fn test_error_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
        assert_error(&DomainError::new(InverseHyperbolic::Acosh));
    }

    #[test]
    fn test_distinguishes_functions() {
        assert_ne!(
            DomainError::new(InverseHyperbolic::Acosh),
            DomainError::new(InverseHyperbolic::Atanh)
        );
    }
}
