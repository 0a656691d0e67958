//! Point and vector types shared by curves and surfaces.

mod point3;
mod vec3;

pub use point3::Point3;
pub use vec3::Vec3;
