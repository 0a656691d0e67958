//! 3D control point type.

use super::Vec3;
use num_traits::Float;
use std::ops::{Add, Sub};

/// A position in 3D space.
///
/// Control polygons and grids store points by value; the curve or surface
/// that owns them is the only thing that ever replaces them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point3<F> {
    pub x: F,
    pub y: F,
    pub z: F,
}

impl<F: Float> Point3<F> {
    /// Creates a new point.
    #[inline]
    pub fn new(x: F, y: F, z: F) -> Self {
        Self { x, y, z }
    }

    /// The point (0, 0, 0).
    #[inline]
    pub fn origin() -> Self {
        Self::new(F::zero(), F::zero(), F::zero())
    }

    /// Builds a point from its `[x, y, z]` coordinates.
    #[inline]
    pub fn from_array(coords: [F; 3]) -> Self {
        Self::new(coords[0], coords[1], coords[2])
    }

    /// Returns the coordinates as `[x, y, z]`.
    #[inline]
    pub fn to_array(self) -> [F; 3] {
        [self.x, self.y, self.z]
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance(self, other: Self) -> F {
        (other - self).magnitude()
    }

    /// Affine blend `(1 - t) * self + t * other`.
    ///
    /// Written in the two-weight form so that `t = 0` and `t = 1` reproduce
    /// the endpoints exactly.
    #[inline]
    pub fn lerp(self, other: Self, t: F) -> Self {
        let s = F::one() - t;
        Self::new(
            s * self.x + t * other.x,
            s * self.y + t * other.y,
            s * self.z + t * other.z,
        )
    }

    /// The vector from the origin to this point.
    #[inline]
    pub fn to_vec(self) -> Vec3<F> {
        Vec3::new(self.x, self.y, self.z)
    }
}

impl<F: Float> Sub for Point3<F> {
    type Output = Vec3<F>;

    #[inline]
    fn sub(self, other: Self) -> Vec3<F> {
        Vec3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl<F: Float> Add<Vec3<F>> for Point3<F> {
    type Output = Self;

    #[inline]
    fn add(self, v: Vec3<F>) -> Self {
        Self::new(self.x + v.x, self.y + v.y, self.z + v.z)
    }
}

impl<F: Float> Default for Point3<F> {
    fn default() -> Self {
        Self::origin()
    }
}

impl<F: Float> From<Vec3<F>> for Point3<F> {
    fn from(v: Vec3<F>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl<F: Float> From<[F; 3]> for Point3<F> {
    fn from(coords: [F; 3]) -> Self {
        Self::from_array(coords)
    }
}

impl<F: Float> From<Point3<F>> for [F; 3] {
    fn from(p: Point3<F>) -> Self {
        p.to_array()
    }
}
