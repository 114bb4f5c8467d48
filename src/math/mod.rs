//! Vector and matrix value types.
//!
//! Everything here is `Copy` and free of shared state. See [`mat4`] for the
//! single matrix convention used across the crate.

pub mod mat4;
pub mod vec3;
pub mod vec4;

pub use mat4::Mat4;
pub use vec3::Vec3;
pub use vec4::Vec4;
