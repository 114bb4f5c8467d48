//! Triangle rasterization.
//!
//! Triangles arrive here already in screen space: x and y in pixels,
//! z in [0,1] as the depth-test value. The projection stage that produces
//! them lives in [`crate::render::pipeline`].

mod edgefunction;
mod shader;

pub use edgefunction::{DepthInterpolation, EdgeFunctionRasterizer, RasterOptions};
pub use shader::{FlatShader, GouraudShader, PixelShader, ShadingMode};

use crate::math::vec3::Vec3;

/// A vertex after projection: pixel coordinates, depth and color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenVertex {
    /// x, y in pixels (top-left origin); z is depth in [0,1], smaller is nearer.
    pub position: Vec3,
    pub color: Vec3,
}

impl ScreenVertex {
    pub const fn new(position: Vec3, color: Vec3) -> Self {
        Self { position, color }
    }
}

/// A triangle ready for rasterization in screen space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenTriangle {
    pub vertices: [ScreenVertex; 3],
}

impl ScreenTriangle {
    pub const fn new(vertices: [ScreenVertex; 3]) -> Self {
        Self { vertices }
    }
}

/// What the rasterizer did with one screen-space triangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Coverage {
    /// Scanned; `pixels` passed the depth test (possibly zero).
    Drawn { pixels: usize },
    /// Back-facing and culling is enabled.
    Culled,
    /// Zero screen-space area.
    Degenerate,
}
