//! Uniform tessellation of a surface into an indexed triangle mesh.

use super::bezier_surface::{evaluate_surface, normal};
use super::grid::ControlGrid;
use crate::error::BezierError;
use crate::primitives::{Point3, Vec3};
use num_traits::Float;

/// Indexed triangle mesh sampled from a surface.
///
/// Vertex `i * (resolution_v + 1) + j` is the sample at
/// `u = i / resolution_u`, `v = j / resolution_v`. `uvs` and `normals` are
/// parallel to `vertices`; `triangles` holds three vertex indices per face.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceMesh<F> {
    pub vertices: Vec<Point3<F>>,
    pub uvs: Vec<[F; 2]>,
    /// Unit normals, or the zero vector where the surface is degenerate.
    pub normals: Vec<Vec3<F>>,
    pub triangles: Vec<usize>,
}

impl<F> SurfaceMesh<F> {
    /// Number of triangles in the mesh.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }

    /// Iterates over the triangles as index triples.
    pub fn faces(&self) -> impl Iterator<Item = [usize; 3]> + '_ {
        self.triangles.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }
}

/// Samples the surface on a uniform `(resolution_u + 1) x (resolution_v + 1)`
/// parameter grid.
///
/// Each quad cell with corners `a` (at `i, j`), `b = a + 1`,
/// `c = a + resolution_v + 1` and `d = c + 1` yields the triangles
/// `(a, b, c)` and `(b, d, c)`.
///
/// # Errors
///
/// Returns [`BezierError::InvalidResolution`] if either resolution is 0.
pub fn tessellate<F: Float>(
    grid: &ControlGrid<F>,
    resolution_u: usize,
    resolution_v: usize,
) -> Result<SurfaceMesh<F>, BezierError> {
    for resolution in [resolution_u, resolution_v] {
        if resolution < 1 {
            return Err(BezierError::InvalidResolution { resolution });
        }
    }

    let count_u = resolution_u + 1;
    let count_v = resolution_v + 1;
    let steps_u = F::from(resolution_u).unwrap();
    let steps_v = F::from(resolution_v).unwrap();

    let mut vertices = Vec::with_capacity(count_u * count_v);
    let mut uvs = Vec::with_capacity(count_u * count_v);
    let mut normals = Vec::with_capacity(count_u * count_v);

    for i in 0..count_u {
        let u = F::from(i).unwrap() / steps_u;
        for j in 0..count_v {
            let v = F::from(j).unwrap() / steps_v;
            vertices.push(evaluate_surface(grid, u, v));
            uvs.push([u, v]);
            normals.push(normal(grid, u, v).unwrap_or_else(Vec3::zero));
        }
    }

    let mut triangles = Vec::with_capacity(resolution_u * resolution_v * 6);
    for i in 0..resolution_u {
        for j in 0..resolution_v {
            let a = i * count_v + j;
            let b = a + 1;
            let c = a + count_v;
            let d = c + 1;
            triangles.extend_from_slice(&[a, b, c, b, d, c]);
        }
    }

    log::debug!(
        "tessellated {}x{} grid into {} vertices, {} triangles",
        grid.rows(),
        grid.cols(),
        vertices.len(),
        triangles.len() / 3
    );

    Ok(SurfaceMesh {
        vertices,
        uvs,
        normals,
        triangles,
    })
}
