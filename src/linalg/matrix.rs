//! Row-major dense matrix with Gauss-Jordan inversion.

use crate::error::BezierError;
use num_traits::Float;
use std::ops::{Index, IndexMut, Mul};

/// A dense `rows x cols` matrix stored in row-major order.
///
/// Sized for the systems degree change produces (at most a dozen rows),
/// so every operation allocates a fresh result.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<F> {
    rows: usize,
    cols: usize,
    values: Vec<F>,
}

impl<F: Float> Matrix<F> {
    /// Creates a matrix filled with zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            values: vec![F::zero(); rows * cols],
        }
    }

    /// Creates the `size x size` identity matrix.
    pub fn identity(size: usize) -> Self {
        let mut m = Self::zeros(size, size);
        for i in 0..size {
            m[(i, i)] = F::one();
        }
        m
    }

    /// Creates a matrix from nested rows.
    ///
    /// # Panics
    ///
    /// Panics if the rows have different lengths.
    pub fn from_rows(rows: &[Vec<F>]) -> Self {
        let cols = rows.first().map_or(0, Vec::len);
        let mut values = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            assert!(row.len() == cols, "All rows must have the same length");
            values.extend_from_slice(row);
        }
        Self {
            rows: rows.len(),
            cols,
            values,
        }
    }

    /// Creates a single-column matrix.
    pub fn column(values: Vec<F>) -> Self {
        Self {
            rows: values.len(),
            cols: 1,
            values,
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the transpose.
    pub fn transpose(&self) -> Self {
        let mut result = Self::zeros(self.cols, self.rows);
        for r in 0..self.rows {
            for c in 0..self.cols {
                result[(c, r)] = self[(r, c)];
            }
        }
        result
    }

    /// Computes the product `self * other`.
    ///
    /// # Panics
    ///
    /// Panics if `self.cols() != other.rows()`.
    pub fn multiply(&self, other: &Self) -> Self {
        assert!(
            self.cols == other.rows,
            "Cannot multiply {}x{} by {}x{}",
            self.rows,
            self.cols,
            other.rows,
            other.cols
        );
        let mut result = Self::zeros(self.rows, other.cols);
        for r in 0..self.rows {
            for c in 0..other.cols {
                let mut sum = F::zero();
                for k in 0..self.cols {
                    sum = sum + self[(r, k)] * other[(k, c)];
                }
                result[(r, c)] = sum;
            }
        }
        result
    }

    /// Inverts a square matrix by Gauss-Jordan elimination.
    ///
    /// For each column the row with the largest remaining magnitude is
    /// swapped into the pivot position. If that magnitude is below
    /// `pivot_epsilon` the system is treated as singular.
    ///
    /// # Errors
    ///
    /// Returns [`BezierError::SingularSystem`] naming the column whose pivot
    /// was rejected. `self` is never modified.
    ///
    /// # Panics
    ///
    /// Panics if the matrix is not square.
    pub fn inverse(&self, pivot_epsilon: F) -> Result<Self, BezierError> {
        assert!(
            self.rows == self.cols,
            "Only square matrices can be inverted"
        );
        let size = self.rows;
        let mut work = self.clone();
        let mut result = Self::identity(size);

        for col in 0..size {
            let mut pivot_row = col;
            let mut pivot_value = work[(col, col)].abs();
            for r in (col + 1)..size {
                let value = work[(r, col)].abs();
                if value > pivot_value {
                    pivot_value = value;
                    pivot_row = r;
                }
            }
            if pivot_value < pivot_epsilon {
                return Err(BezierError::SingularSystem { column: col });
            }
            if pivot_row != col {
                work.swap_rows(col, pivot_row);
                result.swap_rows(col, pivot_row);
            }

            let pivot = work[(col, col)];
            for c in 0..size {
                work[(col, c)] = work[(col, c)] / pivot;
                result[(col, c)] = result[(col, c)] / pivot;
            }

            for r in 0..size {
                if r == col {
                    continue;
                }
                let factor = work[(r, col)];
                if factor == F::zero() {
                    continue;
                }
                for c in 0..size {
                    work[(r, c)] = work[(r, c)] - factor * work[(col, c)];
                    result[(r, c)] = result[(r, c)] - factor * result[(col, c)];
                }
            }
        }

        Ok(result)
    }

    fn swap_rows(&mut self, a: usize, b: usize) {
        for c in 0..self.cols {
            self.values.swap(a * self.cols + c, b * self.cols + c);
        }
    }
}

impl<F> Index<(usize, usize)> for Matrix<F> {
    type Output = F;

    #[inline]
    fn index(&self, (r, c): (usize, usize)) -> &F {
        &self.values[r * self.cols + c]
    }
}

impl<F> IndexMut<(usize, usize)> for Matrix<F> {
    #[inline]
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut F {
        &mut self.values[r * self.cols + c]
    }
}

impl<'a, F: Float> Mul for &'a Matrix<F> {
    type Output = Matrix<F>;

    fn mul(self, other: Self) -> Matrix<F> {
        self.multiply(other)
    }
}
