//! Error types for Bezier operations.

use thiserror::Error;

/// Errors that can occur while evaluating or reshaping Bezier geometry.
///
/// Every failure is local: the operation that reports it leaves the
/// control polygon or grid it was given untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BezierError {
    /// Not enough control points for the requested operation.
    #[error("invalid degree: {points} control points is too few for this operation")]
    InvalidDegree {
        /// Number of control points supplied.
        points: usize,
    },

    /// A degree above the supported maximum was requested.
    #[error("degree {degree} exceeds the supported maximum of {max}")]
    DegreeTooHigh {
        /// The rejected degree.
        degree: usize,
        /// Largest degree accepted.
        max: usize,
    },

    /// Degree reduction was requested on a polygon of 3 or fewer points.
    #[error("cannot reduce a curve with {points} control points (need at least 4)")]
    ReductionGuard {
        /// Number of control points supplied.
        points: usize,
    },

    /// Gauss-Jordan elimination hit a pivot below the tolerance.
    #[error("singular system: pivot in column {column} is below tolerance")]
    SingularSystem {
        /// Column being eliminated when the pivot was rejected.
        column: usize,
    },

    /// A control grid does not match its declared shape.
    #[error("grid of {len} points does not match declared {rows}x{cols} shape")]
    MismatchedGridDimensions {
        /// Declared row count.
        rows: usize,
        /// Declared column count.
        cols: usize,
        /// Number of points actually supplied.
        len: usize,
    },

    /// A sampling resolution of zero was requested.
    #[error("sampling resolution must be at least 1, got {resolution}")]
    InvalidResolution {
        /// The rejected resolution.
        resolution: usize,
    },
}
