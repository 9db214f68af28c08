//! Random integers between two bounds given in either order.
//!
//! # Entropy source
//!
//! Every draw takes an explicit `R: Rng`. For reproducible runs use
//! [`create_rng`] with a fixed seed; [`thread_random_int`] uses rand's
//! thread-local generator, so concurrent callers never share state.

use rand::Rng;

/// Creates a fast, seeded random number generator.
///
/// Uses `SmallRng` (Xoshiro256++) for high performance.
/// The sequence is deterministic for a given seed on the same platform.
///
/// # Examples
/// ```
/// use u_advmath::random::create_rng;
/// use rand::Rng;
/// let mut rng = create_rng(42);
/// let x: f64 = rng.random();
/// assert!(x >= 0.0 && x < 1.0);
/// ```
pub fn create_rng(seed: u64) -> rand::rngs::SmallRng {
    use rand::SeedableRng;
    rand::rngs::SmallRng::seed_from_u64(seed)
}

/// Returns a uniformly distributed integer in `[min(a, b), max(a, b)]`.
///
/// The bounds may be passed in either order and both are inclusive;
/// `random_int(a, b, rng)` and `random_int(b, a, rng)` consume the same
/// draw and return the same value. Equal bounds return that value
/// without drawing.
///
/// # Complexity
/// O(1) expected (rejection sampling inside `random_range`).
///
/// # Examples
/// ```
/// use u_advmath::random::{create_rng, random_int};
/// let mut rng = create_rng(42);
/// let n = random_int(10, 1, &mut rng);
/// assert!((1..=10).contains(&n));
/// assert_eq!(random_int(5, 5, &mut rng), 5);
/// ```
pub fn random_int<R: Rng>(a: i64, b: i64, rng: &mut R) -> i64 {
    let (low, high) = if b < a { (b, a) } else { (a, b) };
    if low == high {
        return low;
    }
    rng.random_range(low..=high)
}

/// [`random_int`] drawing from the calling thread's generator.
///
/// # Examples
/// ```
/// use u_advmath::random::thread_random_int;
/// let n = thread_random_int(-3, 3);
/// assert!((-3..=3).contains(&n));
/// ```
pub fn thread_random_int(a: i64, b: i64) -> i64 {
    random_int(a, b, &mut rand::rng())
}

// ============================================================================
// Tests
// ============================================================================
