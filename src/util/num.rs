/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Converts an `f64` to `i64` when the value is finite, integral and exactly
/// representable.
///
/// Returns `None` for fractional, non-finite or out-of-range values instead of
/// failing, since callers use it to decide whether integer arithmetic applies
/// at all.
///
/// ## Example
/// ```
/// use calcula::util::num::f64_to_i64_exact;
///
/// assert_eq!(f64_to_i64_exact(-12.0), Some(-12));
/// assert_eq!(f64_to_i64_exact(1.5), None);
/// assert_eq!(f64_to_i64_exact(f64::INFINITY), None);
/// assert_eq!(f64_to_i64_exact(1e20), None);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn f64_to_i64_exact(value: f64) -> Option<i64> {
    if !value.is_finite() || value.fract() != 0.0 {
        return None;
    }
    if value.abs() > MAX_SAFE_U64_INT as f64 {
        return None;
    }
    Some(value as i64)
}

/// Greatest common divisor by Euclid's algorithm. `gcd(0, 0)` is `0`.
#[must_use]
pub const fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Tests whether two numbers are equal within the given tolerances.
///
/// The difference must not exceed the larger of `abs_tol` and `rel_tol`
/// scaled by the larger magnitude of the two operands.
///
/// ## Example
/// ```
/// use calcula::util::num::is_close;
///
/// assert!(is_close(0.1 + 0.2, 0.3, 0.0, 1e-10));
/// assert!(!is_close(1.0, 1.1, 0.0, 1e-10));
/// assert!(is_close(0.0, 1e-12, 1e-9, 0.0));
/// ```
#[must_use]
pub fn is_close(a: f64, b: f64, abs_tol: f64, rel_tol: f64) -> bool {
    if a == b {
        return true;
    }
    let difference = (a - b).abs();
    let max_norm = a.abs().max(b.abs());
    difference <= abs_tol.max(rel_tol * max_norm)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gcd_handles_zero_operands() {
        assert_eq!(gcd(0, 7), 7);
        assert_eq!(gcd(7, 0), 7);
        assert_eq!(gcd(0, 0), 0);
        assert_eq!(gcd(12, 18), 6);
    }

    #[test]
    fn exact_conversion_rejects_unsafe_values() {
        assert_eq!(f64_to_i64_exact(9_007_199_254_740_991.0), Some(9_007_199_254_740_991));
        assert_eq!(f64_to_i64_exact(f64::NAN), None);
        assert_eq!(f64_to_i64_exact(-0.5), None);
    }
}
