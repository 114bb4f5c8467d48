//! Vertex stage: object space to screen space.
//!
//! ```text
//! object --model--> world --view--> view --projection--> clip
//!   --divide by w--> NDC [-1,1]^3 --viewport--> screen (pixels, depth [0,1])
//! ```

use crate::math::mat4::Mat4;
use crate::math::vec3::Vec3;
use crate::math::vec4::Vec4;
use crate::mesh::{Triangle, Vertex};

use super::rasterizer::{ScreenTriangle, ScreenVertex};

/// Smallest clip-space w accepted before the perspective divide.
pub const W_EPSILON: f32 = 1e-6;

/// Maps normalized device coordinates to screen space.
///
/// Y is flipped because NDC y grows upward while screen rows grow downward.
/// Depth moves from [-1,1] to [0,1].
#[inline]
pub fn ndc_to_screen(ndc: Vec3, width: u32, height: u32) -> Vec3 {
    Vec3::new(
        (ndc.x * 0.5 + 0.5) * width as f32,
        (1.0 - (ndc.y * 0.5 + 0.5)) * height as f32,
        ndc.z * 0.5 + 0.5,
    )
}

/// Projects one vertex through `mvp`.
///
/// Clip-space w is the distance in front of the camera, so a vertex with
/// `w <= near_w` is at or behind the near plane and yields `None`. `near_w`
/// is never allowed below [`W_EPSILON`], which keeps the divide finite.
#[inline]
pub fn project_vertex(
    mvp: &Mat4,
    vertex: &Vertex,
    width: u32,
    height: u32,
    near_w: f32,
) -> Option<ScreenVertex> {
    let clip = *mvp * Vec4::point(vertex.position);
    if clip.w <= near_w.max(W_EPSILON) {
        return None;
    }
    let screen = ndc_to_screen(clip.perspective_divide(), width, height);
    Some(ScreenVertex::new(screen, vertex.color))
}

/// Projects all three vertices, or `None` if any of them fails the
/// near-plane test.
pub fn project_triangle(
    mvp: &Mat4,
    triangle: &Triangle,
    width: u32,
    height: u32,
    near_w: f32,
) -> Option<ScreenTriangle> {
    let [a, b, c] = &triangle.vertices;
    Some(ScreenTriangle::new([
        project_vertex(mvp, a, width, height, near_w)?,
        project_vertex(mvp, b, width, height, near_w)?,
        project_vertex(mvp, c, width, height, near_w)?,
    ]))
}
