//! Tensor-product Bezier surface evaluation.

use super::grid::ControlGrid;
use super::mesh::{self, SurfaceMesh};
use crate::basis::bernstein_basis;
use crate::config::TessellationConfig;
use crate::error::BezierError;
use crate::primitives::{Point3, Vec3};
use num_traits::Float;

/// Evaluates the surface over `grid` at `(u, v)`.
///
/// Computes `Σ_i Σ_j B(rows - 1, i, u) B(cols - 1, j, v) P[i][j]` with the
/// basis values for each direction computed once per call. The corners of
/// the grid are interpolated exactly.
pub fn evaluate_surface<F: Float>(grid: &ControlGrid<F>, u: F, v: F) -> Point3<F> {
    let bu = bernstein_basis(grid.degree_u(), u);
    let bv = bernstein_basis(grid.degree_v(), v);

    let mut acc = Vec3::zero();
    for (i, &wu) in bu.iter().enumerate() {
        for (j, &wv) in bv.iter().enumerate() {
            acc += grid.get(i, j).to_vec() * (wu * wv);
        }
    }
    Point3::from(acc)
}

/// Partial derivative of the surface with respect to `u`.
///
/// Zero when the grid has a single row.
pub fn partial_u<F: Float>(grid: &ControlGrid<F>, u: F, v: F) -> Vec3<F> {
    let n = grid.degree_u();
    if n == 0 {
        return Vec3::zero();
    }
    let bu = bernstein_basis(n - 1, u);
    let bv = bernstein_basis(grid.degree_v(), v);
    let scale = F::from(n).unwrap();

    let mut acc = Vec3::zero();
    for (i, &wu) in bu.iter().enumerate() {
        for (j, &wv) in bv.iter().enumerate() {
            let delta = grid.get(i + 1, j) - grid.get(i, j);
            acc += delta * (wu * wv);
        }
    }
    acc * scale
}

/// Partial derivative of the surface with respect to `v`.
///
/// Zero when the grid has a single column.
pub fn partial_v<F: Float>(grid: &ControlGrid<F>, u: F, v: F) -> Vec3<F> {
    let n = grid.degree_v();
    if n == 0 {
        return Vec3::zero();
    }
    let bu = bernstein_basis(grid.degree_u(), u);
    let bv = bernstein_basis(n - 1, v);
    let scale = F::from(n).unwrap();

    let mut acc = Vec3::zero();
    for (i, &wu) in bu.iter().enumerate() {
        for (j, &wv) in bv.iter().enumerate() {
            let delta = grid.get(i, j + 1) - grid.get(i, j);
            acc += delta * (wu * wv);
        }
    }
    acc * scale
}

/// Unit surface normal at `(u, v)`.
///
/// Oriented as `∂v × ∂u`, which is the face normal `(b - a) × (c - a)` of
/// the triangles emitted by [`tessellate`](super::tessellate). `None` where
/// the surface is degenerate (a collapsed edge or a single row or column).
pub fn normal<F: Float>(grid: &ControlGrid<F>, u: F, v: F) -> Option<Vec3<F>> {
    partial_v(grid, u, v).cross(partial_u(grid, u, v)).normalize()
}

/// A tensor-product Bezier surface owning its control grid.
///
/// # Example
///
/// ```
/// use bezierkit::Point3;
/// use bezierkit::surfaces::{BezierSurface3, ControlGrid};
///
/// let grid = ControlGrid::from_rows(vec![
///     vec![Point3::new(0.0, 0.0, 0.0), Point3::new(0.0, 1.0, 0.0)],
///     vec![Point3::new(1.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0)],
/// ])
/// .unwrap();
/// let surface = BezierSurface3::new(grid);
///
/// assert_eq!(surface.eval(1.0, 1.0), Point3::new(1.0, 1.0, 1.0));
/// let mesh = surface.tessellate(4, 4).unwrap();
/// assert_eq!(mesh.vertices.len(), 25);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BezierSurface3<F> {
    grid: ControlGrid<F>,
}

impl<F: Float> BezierSurface3<F> {
    pub fn new(grid: ControlGrid<F>) -> Self {
        Self { grid }
    }

    /// Creates a surface from a flat row-major list of control points.
    ///
    /// # Errors
    ///
    /// See [`ControlGrid::from_flat`].
    pub fn from_flat(points: Vec<Point3<F>>, rows: usize, cols: usize) -> Result<Self, BezierError> {
        ControlGrid::from_flat(points, rows, cols).map(Self::new)
    }

    #[inline]
    pub fn grid(&self) -> &ControlGrid<F> {
        &self.grid
    }

    /// Moves one control point. Returns `false` if the index is out of range.
    pub fn set_control_point(&mut self, row: usize, col: usize, point: Point3<F>) -> bool {
        self.grid.set(row, col, point)
    }

    #[inline]
    pub fn eval(&self, u: F, v: F) -> Point3<F> {
        evaluate_surface(&self.grid, u, v)
    }

    #[inline]
    pub fn partial_u(&self, u: F, v: F) -> Vec3<F> {
        partial_u(&self.grid, u, v)
    }

    #[inline]
    pub fn partial_v(&self, u: F, v: F) -> Vec3<F> {
        partial_v(&self.grid, u, v)
    }

    #[inline]
    pub fn normal(&self, u: F, v: F) -> Option<Vec3<F>> {
        normal(&self.grid, u, v)
    }

    /// Tessellates into `resolution_u x resolution_v` quads.
    ///
    /// # Errors
    ///
    /// Returns [`BezierError::InvalidResolution`] if either resolution is 0.
    pub fn tessellate(
        &self,
        resolution_u: usize,
        resolution_v: usize,
    ) -> Result<SurfaceMesh<F>, BezierError> {
        mesh::tessellate(&self.grid, resolution_u, resolution_v)
    }

    /// Tessellates with the sampling density from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`BezierError::InvalidResolution`] if either resolution is 0.
    pub fn tessellate_with(&self, config: TessellationConfig) -> Result<SurfaceMesh<F>, BezierError> {
        self.tessellate(config.resolution_u, config.resolution_v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curves::evaluate;
    use approx::assert_relative_eq;

    /// A 4x3 grid: cubic in `u`, quadratic in `v`, with some height variation.
    fn dome() -> ControlGrid<f64> {
        let mut points = Vec::new();
        for i in 0..4 {
            for j in 0..3 {
                let height = if (i == 1 || i == 2) && j == 1 { 2.0 } else { 0.0 };
                points.push(Point3::new(i as f64, j as f64, height + 0.1 * i as f64));
            }
        }
        ControlGrid::from_flat(points, 4, 3).unwrap()
    }

    #[test]
    fn test_corner_interpolation() {
        let grid = dome();
        assert_eq!(evaluate_surface(&grid, 0.0, 0.0), grid.get(0, 0));
        assert_eq!(evaluate_surface(&grid, 1.0, 1.0), grid.get(3, 2));
        assert_eq!(evaluate_surface(&grid, 1.0, 0.0), grid.get(3, 0));
        assert_eq!(evaluate_surface(&grid, 0.0, 1.0), grid.get(0, 2));
    }

    #[test]
    fn test_boundary_is_bezier_curve() {
        // Along v = 0 the surface is the curve over the first column.
        let grid = dome();
        let column: Vec<_> = (0..grid.rows()).map(|i| grid.get(i, 0)).collect();
        for step in 0..=10 {
            let u = step as f64 / 10.0;
            let s = evaluate_surface(&grid, u, 0.0);
            let c = evaluate(&column, u).unwrap();
            assert!(s.distance(c) < 1e-12);
        }
    }

    #[test]
    fn test_bilinear_patch_center() {
        let grid = ControlGrid::from_rows(vec![
            vec![Point3::new(0.0, 0.0, 0.0), Point3::new(0.0, 2.0, 0.0)],
            vec![Point3::new(2.0, 0.0, 0.0), Point3::new(2.0, 2.0, 4.0)],
        ])
        .unwrap();
        assert_eq!(evaluate_surface(&grid, 0.5, 0.5), Point3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_single_point_grid_is_constant() {
        let p = Point3::new(1.0, 2.0, 3.0);
        let grid = ControlGrid::from_flat(vec![p], 1, 1).unwrap();
        assert_eq!(evaluate_surface(&grid, 0.3, 0.8), p);
        assert_eq!(partial_u(&grid, 0.3, 0.8), Vec3::zero());
        assert_eq!(normal(&grid, 0.3, 0.8), None);
    }

    #[test]
    fn test_high_degree_column() {
        // 65 rows: a degree-64 curve in u, beyond the u64 binomial range.
        let points: Vec<_> = (0..65).map(|i| Point3::new(i as f64, 0.0, 1.0)).collect();
        let grid = ControlGrid::from_flat(points.clone(), 65, 1).unwrap();
        assert_eq!(evaluate_surface(&grid, 0.0, 0.0), points[0]);
        for &u in &[0.25, 0.5, 0.8] {
            let s = evaluate_surface(&grid, u, 0.0);
            let c = evaluate(&points, u).unwrap();
            // Linear precision: x runs 0..=64 evenly, so x(u) = 64 u.
            assert_relative_eq!(s.x, 64.0 * u, epsilon = 1e-9);
            assert_relative_eq!(s.x, c.x, epsilon = 1e-9);
            assert_relative_eq!(s.z, 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_partials_match_finite_difference() {
        let grid = dome();
        let h = 1e-6;
        for &(u, v) in &[(0.2, 0.3), (0.5, 0.5), (0.9, 0.1)] {
            let du = (evaluate_surface(&grid, u + h, v) - evaluate_surface(&grid, u - h, v))
                / (2.0 * h);
            let dv = (evaluate_surface(&grid, u, v + h) - evaluate_surface(&grid, u, v - h))
                / (2.0 * h);
            let pu = partial_u(&grid, u, v);
            let pv = partial_v(&grid, u, v);
            assert_relative_eq!(pu.x, du.x, epsilon = 1e-3);
            assert_relative_eq!(pu.z, du.z, epsilon = 1e-3);
            assert_relative_eq!(pv.y, dv.y, epsilon = 1e-3);
            assert_relative_eq!(pv.z, dv.z, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_flat_patch_normal() {
        // u runs along +x, v along +y: ∂v × ∂u points down.
        let grid = ControlGrid::from_rows(vec![
            vec![Point3::new(0.0, 0.0, 0.0), Point3::new(0.0, 1.0, 0.0)],
            vec![Point3::new(1.0, 0.0, 0.0), Point3::new(1.0, 1.0, 0.0)],
        ])
        .unwrap();
        let n = normal(&grid, 0.5, 0.5).unwrap();
        assert_relative_eq!(n.z, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_surface_entity() {
        let mut surface = BezierSurface3::new(dome());
        assert!(surface.set_control_point(0, 0, Point3::new(-1.0, -1.0, -1.0)));
        assert_eq!(surface.eval(0.0, 0.0), Point3::new(-1.0, -1.0, -1.0));
        assert!(!surface.set_control_point(4, 0, Point3::origin()));

        let mesh = surface.tessellate_with(TessellationConfig::new(3, 2)).unwrap();
        assert_eq!(mesh.vertices.len(), 12);
        assert_eq!(mesh.triangles.len(), 36);
    }

    #[test]
    fn test_from_flat_mismatch() {
        let points = vec![Point3::new(0.0f64, 0.0, 0.0); 8];
        assert_eq!(
            BezierSurface3::from_flat(points, 3, 3),
            Err(BezierError::MismatchedGridDimensions {
                rows: 3,
                cols: 3,
                len: 8
            })
        );
    }
}
