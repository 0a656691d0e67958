//! Rectangular control-point grid.

use crate::error::BezierError;
use crate::primitives::Point3;
use num_traits::Float;

/// A `rows x cols` grid of control points stored in row-major order.
///
/// Rows run along the `u` direction and columns along `v`, so the surface
/// degree is `rows - 1` in `u` and `cols - 1` in `v`. The shape is fixed at
/// construction; individual points may be moved.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlGrid<F> {
    rows: usize,
    cols: usize,
    points: Vec<Point3<F>>,
}

impl<F: Float> ControlGrid<F> {
    /// Creates a grid from a flat row-major list of points.
    ///
    /// # Errors
    ///
    /// * [`BezierError::InvalidDegree`] if `rows` or `cols` is 0
    /// * [`BezierError::MismatchedGridDimensions`] if `points.len()` is not
    ///   `rows * cols`
    ///
    /// # Example
    ///
    /// ```
    /// use bezierkit::Point3;
    /// use bezierkit::surfaces::ControlGrid;
    ///
    /// let points = vec![Point3::new(0.0, 0.0, 0.0); 6];
    /// assert!(ControlGrid::from_flat(points.clone(), 2, 3).is_ok());
    /// assert!(ControlGrid::from_flat(points, 4, 4).is_err());
    /// ```
    pub fn from_flat(points: Vec<Point3<F>>, rows: usize, cols: usize) -> Result<Self, BezierError> {
        if rows == 0 || cols == 0 {
            return Err(BezierError::InvalidDegree {
                points: points.len(),
            });
        }
        if points.len() != rows * cols {
            return Err(BezierError::MismatchedGridDimensions {
                rows,
                cols,
                len: points.len(),
            });
        }
        Ok(Self { rows, cols, points })
    }

    /// Creates a grid from nested rows.
    ///
    /// # Errors
    ///
    /// * [`BezierError::InvalidDegree`] if there are no rows or the rows are empty
    /// * [`BezierError::MismatchedGridDimensions`] if the rows differ in length
    pub fn from_rows(rows: Vec<Vec<Point3<F>>>) -> Result<Self, BezierError> {
        let row_count = rows.len();
        let cols = rows.first().map_or(0, Vec::len);
        let len = rows.iter().map(Vec::len).sum();
        if rows.iter().any(|row| row.len() != cols) {
            return Err(BezierError::MismatchedGridDimensions {
                rows: row_count,
                cols,
                len,
            });
        }
        Self::from_flat(rows.into_iter().flatten().collect(), row_count, cols)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Degree in the `u` direction.
    #[inline]
    pub fn degree_u(&self) -> usize {
        self.rows - 1
    }

    /// Degree in the `v` direction.
    #[inline]
    pub fn degree_v(&self) -> usize {
        self.cols - 1
    }

    /// Returns the point at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Point3<F> {
        assert!(row < self.rows && col < self.cols, "Grid index out of range");
        self.points[row * self.cols + col]
    }

    /// Returns one row of the grid.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of range.
    #[inline]
    pub fn row(&self, row: usize) -> &[Point3<F>] {
        &self.points[row * self.cols..(row + 1) * self.cols]
    }

    /// All points in row-major order.
    #[inline]
    pub fn points(&self) -> &[Point3<F>] {
        &self.points
    }

    /// Moves one control point. Returns `false` if the index is out of range.
    pub fn set(&mut self, row: usize, col: usize, point: Point3<F>) -> bool {
        if row >= self.rows || col >= self.cols {
            return false;
        }
        self.points[row * self.cols + col] = point;
        true
    }
}
