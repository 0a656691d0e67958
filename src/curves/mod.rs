//! Bezier curves of arbitrary degree.
//!
//! Evaluation is by iterative De Casteljau reduction; degree can be raised
//! exactly or lowered by least-squares fitting.

mod bezier;
mod casteljau;
mod degree;

pub use bezier::BezierCurve3;
pub use casteljau::{derivative, evaluate, hodograph, polyline, tangent, DeCasteljau};
pub use degree::{elevate, elevation_matrix, reduce, reduce_with_tolerance, reduction_matrix};
