//! Degree elevation and least-squares degree reduction.
//!
//! Elevation rewrites a degree-`n` curve exactly as a degree-`n + 1` curve.
//! Reduction inverts that map in the least-squares sense: with `M` the
//! elevation matrix from degree `n - 1` to `n`, the reduced polygon is
//! `(MᵗM)⁻¹Mᵗ P`, applied to each coordinate independently. A polygon that
//! came out of an elevation is therefore recovered exactly (up to rounding).

use crate::config::DEFAULT_PIVOT_EPSILON;
use crate::error::BezierError;
use crate::linalg::Matrix;
use crate::primitives::Point3;
use num_traits::Float;

/// Elevates the degree of a curve by one.
///
/// The result has one more point and traces the identical curve. Its first
/// and last points are the original endpoints; interior point `i` is
/// `α p[i - 1] + (1 - α) p[i]` with `α = i / (n + 1)`.
///
/// # Errors
///
/// Returns [`BezierError::InvalidDegree`] if fewer than 2 points are given.
///
/// # Example
///
/// ```
/// use bezierkit::Point3;
/// use bezierkit::curves::elevate;
///
/// let line = [Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 0.0, 0.0)];
/// let quadratic = elevate(&line).unwrap();
/// assert_eq!(quadratic[1], Point3::new(1.0, 0.0, 0.0));
/// ```
pub fn elevate<F: Float>(points: &[Point3<F>]) -> Result<Vec<Point3<F>>, BezierError> {
    if points.len() < 2 {
        return Err(BezierError::InvalidDegree {
            points: points.len(),
        });
    }
    let n = points.len() - 1;
    let denom = F::from(n + 1).unwrap();

    let mut elevated = Vec::with_capacity(n + 2);
    elevated.push(points[0]);
    for i in 1..=n {
        let alpha = F::from(i).unwrap() / denom;
        // lerp(a, b, 1 - α) = α a + (1 - α) b
        elevated.push(points[i - 1].lerp(points[i], F::one() - alpha));
    }
    elevated.push(points[n]);
    Ok(elevated)
}

/// Builds the `k x (k - 1)` matrix mapping a `k - 1` point polygon to its
/// `k` point elevation.
///
/// # Panics
///
/// Panics if `k < 2`.
pub fn elevation_matrix<F: Float>(k: usize) -> Matrix<F> {
    assert!(k >= 2, "An elevated polygon has at least 2 points");
    let n = k - 1;
    let denom = F::from(n).unwrap();
    let mut m = Matrix::zeros(k, n);

    m[(0, 0)] = F::one();
    m[(n, n - 1)] = F::one();
    for i in 1..n {
        let alpha = F::from(i).unwrap() / denom;
        m[(i, i - 1)] = alpha;
        m[(i, i)] = F::one() - alpha;
    }
    m
}

/// Builds the `(k - 1) x k` least-squares reduction operator `(MᵗM)⁻¹Mᵗ`.
///
/// # Errors
///
/// Returns [`BezierError::SingularSystem`] if inverting `MᵗM` meets a pivot
/// smaller than `pivot_epsilon`.
///
/// # Panics
///
/// Panics if `k < 2`.
pub fn reduction_matrix<F: Float>(k: usize, pivot_epsilon: F) -> Result<Matrix<F>, BezierError> {
    let m = elevation_matrix(k);
    let mt = m.transpose();
    let normal = mt.multiply(&m);
    let inverse = normal.inverse(pivot_epsilon)?;
    Ok(inverse.multiply(&mt))
}

/// Reduces the degree of a curve by one using the default pivot tolerance.
///
/// See [`reduce_with_tolerance`].
///
/// # Errors
///
/// * [`BezierError::ReductionGuard`] if 3 or fewer points are given
/// * [`BezierError::SingularSystem`] if the normal equations are singular
pub fn reduce<F: Float>(points: &[Point3<F>]) -> Result<Vec<Point3<F>>, BezierError> {
    reduce_with_tolerance(points, F::from(DEFAULT_PIVOT_EPSILON).unwrap())
}

/// Reduces the degree of a curve by one.
///
/// Returns the `k - 1` point polygon whose elevation is closest to `points`
/// in the least-squares sense. This is lossy unless `points` is itself an
/// elevation.
///
/// # Errors
///
/// * [`BezierError::ReductionGuard`] if 3 or fewer points are given
/// * [`BezierError::SingularSystem`] if a pivot falls below `pivot_epsilon`
///
/// # Example
///
/// ```
/// use bezierkit::Point3;
/// use bezierkit::curves::{elevate, reduce};
///
/// let cubic = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 2.0, 0.0),
///     Point3::new(2.0, 2.0, 1.0),
///     Point3::new(3.0, 0.0, 0.0),
/// ];
/// let restored = reduce(&elevate(&cubic).unwrap()).unwrap();
/// for (a, b) in cubic.iter().zip(&restored) {
///     assert!(a.distance(*b) < 1e-9);
/// }
/// ```
pub fn reduce_with_tolerance<F: Float>(
    points: &[Point3<F>],
    pivot_epsilon: F,
) -> Result<Vec<Point3<F>>, BezierError> {
    let k = points.len();
    if k <= 3 {
        return Err(BezierError::ReductionGuard { points: k });
    }

    let v = reduction_matrix(k, pivot_epsilon)?;
    let xs = v.multiply(&Matrix::column(points.iter().map(|p| p.x).collect()));
    let ys = v.multiply(&Matrix::column(points.iter().map(|p| p.y).collect()));
    let zs = v.multiply(&Matrix::column(points.iter().map(|p| p.z).collect()));

    Ok((0..k - 1)
        .map(|i| Point3::new(xs[(i, 0)], ys[(i, 0)], zs[(i, 0)]))
        .collect())
}
