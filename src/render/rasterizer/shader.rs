//! Pixel shaders for triangle rasterization.
//!
//! The rasterizer owns coverage, the depth test and barycentric weights;
//! a shader only turns those weights into a packed color.

use serde::{Deserialize, Serialize};

use crate::colors::pack_color;
use crate::math::vec3::Vec3;

/// How vertex colors become pixel colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShadingMode {
    /// Barycentric blend of the three vertex colors, linear in screen space.
    #[default]
    Gouraud,
    /// One color per triangle: the average of its vertex colors.
    Flat,
}

/// Per-pixel shading computation.
///
/// The rasterizer calls `shade()` for each covered pixel with barycentric
/// weights `[λ₀, λ₁, λ₂]` that sum to 1.
pub trait PixelShader {
    fn shade(&self, lambda: [f32; 3]) -> u32;
}

/// Constant color for the whole triangle.
pub struct FlatShader {
    color: u32,
}

impl FlatShader {
    /// Packs the average of the vertex colors once up front.
    pub fn new(vertex_colors: [Vec3; 3]) -> Self {
        let [a, b, c] = vertex_colors;
        Self {
            color: pack_color((a + b + c) / 3.0),
        }
    }
}

impl PixelShader for FlatShader {
    #[inline]
    fn shade(&self, _lambda: [f32; 3]) -> u32 {
        self.color
    }
}

/// Interpolates vertex colors with the barycentric weights.
pub struct GouraudShader {
    colors: [Vec3; 3],
}

impl GouraudShader {
    pub fn new(vertex_colors: [Vec3; 3]) -> Self {
        Self {
            colors: vertex_colors,
        }
    }
}

impl PixelShader for GouraudShader {
    #[inline]
    fn shade(&self, lambda: [f32; 3]) -> u32 {
        let color = self.colors[0] * lambda[0]
            + self.colors[1] * lambda[1]
            + self.colors[2] * lambda[2];
        pack_color(color)
    }
}
