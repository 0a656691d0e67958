//! Small dense matrices for the degree-reduction solve.
//!
//! Reduction builds a least-squares projector through an explicit
//! build, transpose, multiply, invert, multiply sequence. Each step lives
//! here so it can be checked on its own.

mod matrix;

pub use matrix::Matrix;
