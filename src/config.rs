//! Named defaults for tolerances and sampling resolutions.
//!
//! Every operation that needs one of these values also has a variant taking
//! it explicitly. The constants only back the convenience entry points.

/// Smallest pivot magnitude accepted when inverting the reduction system.
pub const DEFAULT_PIVOT_EPSILON: f64 = 1e-6;

/// Number of line segments used when sampling a curve into a polyline.
pub const DEFAULT_CURVE_SEGMENTS: usize = 20;

/// Samples per surface direction used by [`TessellationConfig::default`].
pub const DEFAULT_SURFACE_RESOLUTION: usize = 20;

/// Samples per basis function when graphing the Bernstein basis.
pub const DEFAULT_BASIS_RESOLUTION: usize = 100;

/// Sampling density for surface tessellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TessellationConfig {
    /// Quad cells along the `u` direction.
    pub resolution_u: usize,
    /// Quad cells along the `v` direction.
    pub resolution_v: usize,
}

impl TessellationConfig {
    /// Creates a config with the given cell counts.
    pub fn new(resolution_u: usize, resolution_v: usize) -> Self {
        Self {
            resolution_u,
            resolution_v,
        }
    }
}

impl Default for TessellationConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SURFACE_RESOLUTION, DEFAULT_SURFACE_RESOLUTION)
    }
}
