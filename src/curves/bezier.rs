//! Bezier curve entity owning its control polygon.

use super::casteljau::{self, DeCasteljau};
use super::degree;
use crate::config::{DEFAULT_CURVE_SEGMENTS, DEFAULT_PIVOT_EPSILON};
use crate::error::BezierError;
use crate::primitives::{Point3, Vec3};
use num_traits::Float;

/// A 3D Bezier curve of arbitrary degree.
///
/// The curve exclusively owns its control polygon. Evaluation never touches
/// it; [`elevate_degree`](Self::elevate_degree) and
/// [`reduce_degree`](Self::reduce_degree) replace it wholesale on success
/// and leave it untouched on failure.
///
/// # Example
///
/// ```
/// use bezierkit::{BezierCurve3, Point3};
///
/// let mut curve = BezierCurve3::new(vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 2.0, 0.0),
///     Point3::new(2.0, 2.0, 0.0),
///     Point3::new(3.0, 0.0, 0.0),
/// ])
/// .unwrap();
///
/// curve.elevate_degree().unwrap();
/// assert_eq!(curve.degree(), 4);
/// curve.reduce_degree().unwrap();
/// assert_eq!(curve.degree(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BezierCurve3<F> {
    points: Vec<Point3<F>>,
}

impl<F: Float> BezierCurve3<F> {
    /// Creates a curve from its control polygon.
    ///
    /// # Errors
    ///
    /// Returns [`BezierError::InvalidDegree`] if fewer than 2 points are given.
    pub fn new(points: Vec<Point3<F>>) -> Result<Self, BezierError> {
        if points.len() < 2 {
            return Err(BezierError::InvalidDegree {
                points: points.len(),
            });
        }
        Ok(Self { points })
    }

    /// Polynomial degree (one less than the number of control points).
    #[inline]
    pub fn degree(&self) -> usize {
        self.points.len() - 1
    }

    #[inline]
    pub fn control_points(&self) -> &[Point3<F>] {
        &self.points
    }

    /// Moves a single control point, as a drag handle in an editor would.
    ///
    /// Returns `false` without changing anything if `index` is out of range.
    pub fn set_control_point(&mut self, index: usize, point: Point3<F>) -> bool {
        match self.points.get_mut(index) {
            Some(slot) => {
                *slot = point;
                true
            }
            None => false,
        }
    }

    /// Evaluates the curve at parameter `t`.
    pub fn eval(&self, t: F) -> Point3<F> {
        DeCasteljau::with_capacity(self.points.len())
            .eval(&self.points, t)
            .unwrap_or(self.points[0])
    }

    /// Evaluates the curve with a caller-owned evaluator, reusing its buffer.
    pub fn eval_with(&self, evaluator: &mut DeCasteljau<F>, t: F) -> Point3<F> {
        evaluator.eval(&self.points, t).unwrap_or(self.points[0])
    }

    /// Unnormalized first derivative at `t`.
    pub fn derivative(&self, t: F) -> Vec3<F> {
        casteljau::derivative(&self.points, t).unwrap_or_else(|_| Vec3::zero())
    }

    /// Unit tangent at `t`, or `None` where the derivative vanishes.
    pub fn tangent(&self, t: F) -> Option<Vec3<F>> {
        self.derivative(t).normalize()
    }

    /// Samples `segments + 1` points along the curve.
    ///
    /// # Errors
    ///
    /// Returns [`BezierError::InvalidResolution`] if `segments` is 0.
    pub fn polyline(&self, segments: usize) -> Result<Vec<Point3<F>>, BezierError> {
        casteljau::polyline(&self.points, segments)
    }

    /// Samples the curve at the default editor resolution.
    pub fn to_polyline(&self) -> Vec<Point3<F>> {
        self.polyline(DEFAULT_CURVE_SEGMENTS)
            .unwrap_or_else(|_| self.points.clone())
    }

    /// Raises the degree by one without changing the curve's shape.
    ///
    /// # Errors
    ///
    /// Returns [`BezierError::InvalidDegree`] only if the polygon is invalid,
    /// which the constructor rules out.
    pub fn elevate_degree(&mut self) -> Result<(), BezierError> {
        let elevated = degree::elevate(&self.points)?;
        log::debug!(
            "elevated curve from degree {} to {}",
            self.degree(),
            elevated.len() - 1
        );
        self.points = elevated;
        Ok(())
    }

    /// Lowers the degree by one using the default pivot tolerance.
    ///
    /// # Errors
    ///
    /// See [`reduce_degree_with_tolerance`](Self::reduce_degree_with_tolerance).
    pub fn reduce_degree(&mut self) -> Result<(), BezierError> {
        self.reduce_degree_with_tolerance(F::from(DEFAULT_PIVOT_EPSILON).unwrap())
    }

    /// Lowers the degree by one with a least-squares best fit.
    ///
    /// # Errors
    ///
    /// * [`BezierError::ReductionGuard`] for curves of degree 2 or lower
    /// * [`BezierError::SingularSystem`] if a pivot falls below `pivot_epsilon`
    ///
    /// The control polygon is unchanged when an error is returned.
    pub fn reduce_degree_with_tolerance(&mut self, pivot_epsilon: F) -> Result<(), BezierError> {
        match degree::reduce_with_tolerance(&self.points, pivot_epsilon) {
            Ok(reduced) => {
                log::debug!(
                    "reduced curve from degree {} to {}",
                    self.degree(),
                    reduced.len() - 1
                );
                self.points = reduced;
                Ok(())
            }
            Err(err) => {
                log::warn!("degree reduction skipped: {}", err);
                Err(err)
            }
        }
    }
}
