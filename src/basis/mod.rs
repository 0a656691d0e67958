//! Binomial coefficients and the Bernstein polynomial basis.
//!
//! The degree-`n` Bernstein basis is the polynomial family
//!
//! ```text
//! B(n, i, t) = C(n, i) * t^i * (1 - t)^(n - i),   i = 0..=n
//! ```
//!
//! which forms a partition of unity: for every `t` the `n + 1` values sum to 1.
//! Every curve and surface in this crate blends its control points with these
//! weights.
//!
//! # Example
//!
//! ```
//! use bezierkit::basis::{bernstein, binomial};
//!
//! assert_eq!(binomial(5, 2), Some(10));
//! let total: f64 = (0..=3).map(|i| bernstein(3, i, 0.3)).sum();
//! assert!((total - 1.0).abs() < 1e-12);
//! ```

use crate::error::BezierError;
use num_traits::Float;

/// Largest degree the basis graph is sampled for.
pub const MAX_VISUALIZED_DEGREE: usize = 10;

/// Computes the binomial coefficient `C(n, k)`.
///
/// Uses the multiplicative form over the smaller of `k` and `n - k`, so no
/// factorial is formed. Returns `Some(0)` when `k > n` and `None` when the
/// coefficient does not fit in a `u64` (from `C(68, 34)` upward).
pub fn binomial(n: usize, k: usize) -> Option<u64> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k) as u128;
    let n = n as u128;
    let mut result = 1u128;
    for i in 0..k {
        // Exact: result * (n - i) is divisible by (i + 1) at every step.
        result = result.checked_mul(n - i)? / (i + 1);
    }
    u64::try_from(result).ok()
}

/// Computes `C(n, k)` directly in floating point.
///
/// Follows the same multiplicative recurrence as [`binomial`]; results are
/// exact while they fit the mantissa and lose precision, rather than
/// overflowing, beyond that.
fn binomial_float<F: Float>(n: usize, k: usize) -> F {
    let k = k.min(n - k);
    let mut result = F::one();
    for i in 0..k {
        result = result * F::from(n - i).unwrap() / F::from(i + 1).unwrap();
    }
    result
}

/// Evaluates the Bernstein basis polynomial `B(n, i, t)`.
///
/// No clamping is applied to `t`; values outside [0, 1] give the analytic
/// extension of the polynomial. Returns zero when `i > n`. Any degree is
/// accepted; the coefficient is accumulated in `F`.
pub fn bernstein<F: Float>(n: usize, i: usize, t: F) -> F {
    if i > n {
        return F::zero();
    }
    binomial_float::<F>(n, i) * t.powi(i as i32) * (F::one() - t).powi((n - i) as i32)
}

/// Evaluates all `n + 1` basis polynomials of degree `n` at `t`.
pub fn bernstein_basis<F: Float>(n: usize, t: F) -> Vec<F> {
    (0..=n).map(|i| bernstein(n, i, t)).collect()
}

/// Samples the graph of every degree-`n` basis polynomial over [0, 1].
///
/// Returns one curve per basis function; each curve holds
/// `resolution + 1` `(t, B(n, i, t))` pairs at uniformly spaced `t`.
///
/// # Errors
///
/// * [`BezierError::InvalidDegree`] if `n` is 0
/// * [`BezierError::DegreeTooHigh`] if `n` is above [`MAX_VISUALIZED_DEGREE`]
/// * [`BezierError::InvalidResolution`] if `resolution` is 0
pub fn sample_basis<F: Float>(
    n: usize,
    resolution: usize,
) -> Result<Vec<Vec<(F, F)>>, BezierError> {
    if n < 1 {
        return Err(BezierError::InvalidDegree { points: n + 1 });
    }
    if n > MAX_VISUALIZED_DEGREE {
        return Err(BezierError::DegreeTooHigh {
            degree: n,
            max: MAX_VISUALIZED_DEGREE,
        });
    }
    if resolution < 1 {
        return Err(BezierError::InvalidResolution { resolution });
    }

    let steps = F::from(resolution).unwrap();
    let graphs: Vec<Vec<(F, F)>> = (0..=n)
        .map(|i| {
            (0..=resolution)
                .map(|j| {
                    let t = F::from(j).unwrap() / steps;
                    (t, bernstein(n, i, t))
                })
                .collect()
        })
        .collect();
    Ok(graphs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_binomial_small_values() {
        assert_eq!(binomial(0, 0), Some(1));
        assert_eq!(binomial(4, 0), Some(1));
        assert_eq!(binomial(4, 4), Some(1));
        assert_eq!(binomial(4, 2), Some(6));
        assert_eq!(binomial(10, 3), Some(120));
        assert_eq!(binomial(20, 10), Some(184_756));
    }

    #[test]
    fn test_binomial_out_of_range() {
        assert_eq!(binomial(3, 4), Some(0));
    }

    #[test]
    fn test_binomial_symmetry() {
        for n in 0..=30 {
            for k in 0..=n {
                assert_eq!(binomial(n, k), binomial(n, n - k), "C({}, {})", n, k);
            }
        }
    }

    #[test]
    fn test_binomial_large_no_overflow() {
        assert_eq!(binomial(60, 30), Some(118_264_581_564_861_424));
        assert_eq!(binomial(64, 32), Some(1_832_624_140_942_590_534));
        assert_eq!(binomial(67, 33), Some(14_226_520_737_620_288_370));
    }

    #[test]
    fn test_binomial_beyond_u64() {
        assert_eq!(binomial(68, 34), None);
        assert_eq!(binomial(70, 35), None);
        assert_eq!(binomial(200, 100), None);
        assert_eq!(binomial(200, 1), Some(200));
    }

    #[test]
    fn test_high_degree_basis() {
        let c: f64 = binomial_float(64, 32);
        assert_relative_eq!(c, 1_832_624_140_942_590_534.0, max_relative = 1e-12);

        for n in [64, 65, 100] {
            let total: f64 = bernstein_basis(n, 0.3).iter().sum();
            assert_relative_eq!(total, 1.0, epsilon = 1e-9);
        }
        assert_eq!(bernstein(64, 0, 0.0f64), 1.0);
        assert_eq!(bernstein(64, 64, 1.0f64), 1.0);
    }

    #[test]
    fn test_partition_of_unity() {
        for n in 1..=10 {
            for step in -4..=14 {
                let t = step as f64 / 10.0;
                let total: f64 = bernstein_basis(n, t).iter().sum();
                assert_relative_eq!(total, 1.0, epsilon = 1e-5);
            }
        }
    }

    #[test]
    fn test_bernstein_cubic_weights_at_half() {
        let weights = bernstein_basis(3, 0.5f64);
        assert_eq!(weights, vec![0.125, 0.375, 0.375, 0.125]);
    }

    #[test]
    fn test_bernstein_endpoints() {
        assert_eq!(bernstein(4, 0, 0.0f64), 1.0);
        assert_eq!(bernstein(4, 2, 0.0f64), 0.0);
        assert_eq!(bernstein(4, 4, 1.0f64), 1.0);
        assert_eq!(bernstein(4, 3, 1.0f64), 0.0);
        assert_eq!(bernstein(4, 5, 0.5f64), 0.0);
    }

    #[test]
    fn test_sample_basis_shape() {
        let graphs: Vec<Vec<(f64, f64)>> = sample_basis(3, 100).unwrap();
        assert_eq!(graphs.len(), 4);
        for graph in &graphs {
            assert_eq!(graph.len(), 101);
            assert_eq!(graph[0].0, 0.0);
            assert_eq!(graph[100].0, 1.0);
        }
        assert_relative_eq!(graphs[1][50].1, 0.375, epsilon = 1e-12);
    }

    #[test]
    fn test_sample_basis_rejects_bad_input() {
        assert_eq!(
            sample_basis::<f64>(0, 10),
            Err(BezierError::InvalidDegree { points: 1 })
        );
        assert_eq!(
            sample_basis::<f64>(MAX_VISUALIZED_DEGREE + 1, 10),
            Err(BezierError::DegreeTooHigh {
                degree: MAX_VISUALIZED_DEGREE + 1,
                max: MAX_VISUALIZED_DEGREE
            })
        );
        assert_eq!(
            sample_basis::<f64>(3, 0),
            Err(BezierError::InvalidResolution { resolution: 0 })
        );
    }
}
