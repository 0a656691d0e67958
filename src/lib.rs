//! bezierkit - Bernstein basis and Bezier geometry in 3D
//!
//! The numeric core behind interactive Bezier editing: basis functions,
//! De Casteljau evaluation and derivatives, exact degree elevation,
//! least-squares degree reduction, and tensor-product surfaces tessellated
//! into indexed meshes. Rendering and scene management are left to the
//! caller; everything here works on plain points.

pub mod basis;
pub mod config;
pub mod curves;
pub mod error;
pub mod linalg;
pub mod primitives;
pub mod surfaces;

pub use curves::BezierCurve3;
pub use error::BezierError;
pub use primitives::{Point3, Vec3};
pub use surfaces::{BezierSurface3, ControlGrid, SurfaceMesh};
