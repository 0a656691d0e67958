//! Tensor-product Bezier surfaces over a rectangular control grid.

mod bezier_surface;
mod grid;
mod mesh;

pub use bezier_surface::{evaluate_surface, normal, partial_u, partial_v, BezierSurface3};
pub use grid::ControlGrid;
pub use mesh::{tessellate, SurfaceMesh};
