//! Iterative De Casteljau evaluation of curves of any degree.
//!
//! Evaluation repeatedly replaces `m` points with the `m - 1` affine blends
//! `(1 - t) * p[j] + t * p[j + 1]` until one point is left. The reduction
//! runs in place over a scratch buffer, so no recursion or per-level
//! allocation takes place.

use crate::error::BezierError;
use crate::primitives::{Point3, Vec3};
use num_traits::Float;

/// Reusable De Casteljau evaluator.
///
/// Holds the scratch buffer between calls so evaluating the same curve once
/// per frame does not allocate after the first call.
///
/// # Example
///
/// ```
/// use bezierkit::Point3;
/// use bezierkit::curves::DeCasteljau;
///
/// let points = [
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 2.0, 0.0),
///     Point3::new(2.0, 2.0, 0.0),
///     Point3::new(3.0, 0.0, 0.0),
/// ];
///
/// let mut evaluator = DeCasteljau::new();
/// let mid = evaluator.eval(&points, 0.5).unwrap();
/// assert_eq!(mid, Point3::new(1.5, 1.5, 0.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DeCasteljau<F> {
    scratch: Vec<Point3<F>>,
}

impl<F: Float> DeCasteljau<F> {
    /// Creates an evaluator with an empty scratch buffer.
    pub fn new() -> Self {
        Self {
            scratch: Vec::new(),
        }
    }

    /// Creates an evaluator pre-sized for curves of up to `points` control points.
    pub fn with_capacity(points: usize) -> Self {
        Self {
            scratch: Vec::with_capacity(points),
        }
    }

    /// Evaluates the curve defined by `points` at parameter `t`.
    ///
    /// A single point is a constant curve and is returned for every `t`.
    ///
    /// # Errors
    ///
    /// Returns [`BezierError::InvalidDegree`] for an empty slice.
    pub fn eval(&mut self, points: &[Point3<F>], t: F) -> Result<Point3<F>, BezierError> {
        if points.is_empty() {
            return Err(BezierError::InvalidDegree { points: 0 });
        }

        self.scratch.clear();
        self.scratch.extend_from_slice(points);
        Ok(self.collapse(t))
    }

    /// Evaluates the first derivative of the curve at `t`.
    ///
    /// The derivative of a degree-`n` curve is the degree-`n - 1` curve over
    /// the hodograph, evaluated with the same reduction. The result is not
    /// normalized.
    ///
    /// # Errors
    ///
    /// Returns [`BezierError::InvalidDegree`] if fewer than 2 points are given.
    pub fn derivative(&mut self, points: &[Point3<F>], t: F) -> Result<Vec3<F>, BezierError> {
        let hodograph = hodograph(points)?;

        // Vectors blend like points from the origin.
        self.scratch.clear();
        self.scratch.extend(hodograph.into_iter().map(Point3::from));
        Ok(self.collapse(t).to_vec())
    }

    /// Runs the reduction over the filled scratch buffer.
    fn collapse(&mut self, t: F) -> Point3<F> {
        for level in (1..self.scratch.len()).rev() {
            for j in 0..level {
                self.scratch[j] = self.scratch[j].lerp(self.scratch[j + 1], t);
            }
        }
        self.scratch[0]
    }
}

/// Evaluates the curve defined by `points` at parameter `t`.
///
/// Convenience wrapper over a fresh [`DeCasteljau`]. `t` is not clamped.
///
/// # Errors
///
/// Returns [`BezierError::InvalidDegree`] for an empty slice.
pub fn evaluate<F: Float>(points: &[Point3<F>], t: F) -> Result<Point3<F>, BezierError> {
    DeCasteljau::with_capacity(points.len()).eval(points, t)
}

/// Evaluates the unnormalized first derivative at parameter `t`.
///
/// # Errors
///
/// Returns [`BezierError::InvalidDegree`] if fewer than 2 points are given.
pub fn derivative<F: Float>(points: &[Point3<F>], t: F) -> Result<Vec3<F>, BezierError> {
    DeCasteljau::with_capacity(points.len()).derivative(points, t)
}

/// Returns the unit tangent at `t`.
///
/// `None` where the derivative vanishes, e.g. at a cusp or on a curve whose
/// control points coincide.
///
/// # Errors
///
/// Returns [`BezierError::InvalidDegree`] if fewer than 2 points are given.
pub fn tangent<F: Float>(points: &[Point3<F>], t: F) -> Result<Option<Vec3<F>>, BezierError> {
    Ok(derivative(points, t)?.normalize())
}

/// Builds the hodograph: the control polygon of the derivative curve.
///
/// For `n + 1` points this is `n * (p[i + 1] - p[i])` for `i` in `0..n`.
///
/// # Errors
///
/// Returns [`BezierError::InvalidDegree`] if fewer than 2 points are given.
pub fn hodograph<F: Float>(points: &[Point3<F>]) -> Result<Vec<Vec3<F>>, BezierError> {
    if points.len() < 2 {
        return Err(BezierError::InvalidDegree {
            points: points.len(),
        });
    }
    let degree = F::from(points.len() - 1).unwrap();
    Ok(points
        .windows(2)
        .map(|pair| (pair[1] - pair[0]) * degree)
        .collect())
}

/// Samples `segments + 1` uniformly spaced points along the curve.
///
/// The first and last samples are the curve's endpoints.
///
/// # Errors
///
/// * [`BezierError::InvalidDegree`] for an empty slice
/// * [`BezierError::InvalidResolution`] if `segments` is 0
pub fn polyline<F: Float>(
    points: &[Point3<F>],
    segments: usize,
) -> Result<Vec<Point3<F>>, BezierError> {
    if points.is_empty() {
        return Err(BezierError::InvalidDegree { points: 0 });
    }
    if segments < 1 {
        return Err(BezierError::InvalidResolution {
            resolution: segments,
        });
    }

    let mut evaluator = DeCasteljau::with_capacity(points.len());
    let steps = F::from(segments).unwrap();
    (0..=segments)
        .map(|i| evaluator.eval(points, F::from(i).unwrap() / steps))
        .collect()
}
