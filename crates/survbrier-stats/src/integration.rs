//! Numerical integration of sampled curves.

/// Integrates `y` over `x` with the composite trapezoidal rule.
///
/// The sample points need not be evenly spaced. They are expected in ascending
/// order; unsorted points produce signed (possibly negative) segment areas.
///
/// Returns `0.0` when fewer than two points are given.
///
/// # Panics
///
/// Panics if `x` and `y` have different lengths.
///
/// # Examples
///
/// ```
/// # use survbrier_stats::integration::trapezoid;
/// let x = [0.0, 1.0, 3.0];
/// let y = [1.0, 1.0, 0.0];
/// assert_eq!(trapezoid(&y, &x), 2.0);
/// ```
#[must_use]
pub fn trapezoid(y: &[f64], x: &[f64]) -> f64 {
    assert_eq!(
        x.len(),
        y.len(),
        "sample points and values must have the same length"
    );
    x.windows(2)
        .zip(y.windows(2))
        .map(|(x, y)| (x[1] - x[0]) * (y[0] + y[1]) / 2.0)
        .sum()
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_fewer_than_two_points() {
        assert_eq!(trapezoid(&[], &[]), 0.0);
        assert_eq!(trapezoid(&[3.0], &[1.0]), 0.0);
    }

    #[test]
    fn test_linear_function_is_exact() {
        let x = [0.0, 0.5, 2.0, 4.0];
        let y = x.map(|v| 2.0 * v + 1.0);
        // Integral of 2x + 1 over [0, 4] = 16 + 4
        assert_abs_diff_eq!(trapezoid(&y, &x), 20.0, epsilon = 1e-12);
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn test_length_mismatch_panics() {
        let _ = trapezoid(&[1.0, 2.0], &[0.0]);
    }
}
