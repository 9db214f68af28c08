//! # u-advmath
//!
//! Small, stateless numeric utilities.
//!
//! ## Modules
//!
//! - [`hyperbolic`] — `cosh`, `sinh`, `tanh` and the domain-validated
//!   inverses `acosh`, `asinh`, `atanh`
//! - [`logarithm`] — base-2 logarithm
//! - [`truncate`] — decimal truncation to a digit position, exact in decimal
//! - [`random`] — uniform integers between bounds given in either order
//! - [`error`] — [`DomainError`](error::DomainError) for non-real results
//!
//! ## Design Philosophy
//!
//! - **No silent NaN**: partial functions return a `Result` instead of a
//!   non-finite value
//! - **Decimal, not binary, truncation**: digits are cut on the canonical
//!   decimal text so `0.29` truncated to two places stays `0.29`
//! - **Property-based testing**: mathematical invariants verified via proptest

pub mod error;
pub mod hyperbolic;
pub mod logarithm;
pub mod random;
pub mod truncate;
