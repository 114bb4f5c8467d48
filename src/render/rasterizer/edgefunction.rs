//! Edge function-based triangle rasterization.
//!
//! # Algorithm Overview
//!
//! 1. Compute the signed area of the screen-space triangle; zero area is a
//!    degenerate triangle and negative area is a back face
//! 2. Compute a bounding box around the triangle, clamped to the buffer
//! 3. For each pixel center in the box, evaluate three edge functions
//! 4. A pixel is inside when all three share the sign of the area
//! 5. Depth-test the interpolated depth and shade the pixel
//!
//! # Edge Function
//!
//! For an edge from point A to point B, the edge function at point P is:
//!
//! ```text
//! E(A, B, P) = (P.x - A.x) * (B.y - A.y) - (P.y - A.y) * (B.x - A.x)
//! ```
//!
//! Screen Y grows downward, so a triangle that is counter-clockwise as seen
//! by the viewer has a positive area.
//!
//! # Barycentric Coordinates
//!
//! ```text
//! lambda_i = E_i(P) / area
//! ```
//!
//! where E_i is the edge function for the edge opposite vertex i. Weights
//! are used as-is in screen space (no 1/w correction).
//!
//! # References
//!
//! - Juan Pineda, "A Parallel Algorithm for Polygon Rasterization" (1988)

use serde::{Deserialize, Serialize};

use super::shader::{FlatShader, GouraudShader, PixelShader, ShadingMode};
use super::{Coverage, ScreenTriangle};
use crate::math::vec3::Vec3;
use crate::render::framebuffer::FrameBuffer;

/// How the per-pixel depth is derived from the three vertex depths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepthInterpolation {
    /// Barycentric-weighted screen z.
    #[default]
    Barycentric,
    /// Unweighted average of the vertex depths, constant over the triangle.
    FaceAverage,
}

/// Rasterizer settings, fixed for a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RasterOptions {
    /// Skip triangles whose screen-space winding is clockwise.
    pub cull_backfaces: bool,
    pub depth: DepthInterpolation,
    pub shading: ShadingMode,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            cull_backfaces: true,
            depth: DepthInterpolation::default(),
            shading: ShadingMode::default(),
        }
    }
}

/// Triangle rasterizer using the edge function algorithm.
///
/// Iterates over every pixel in the triangle's bounding box. Brute force,
/// but simple, and every pixel is independent of the others.
#[derive(Debug, Clone, Default)]
pub struct EdgeFunctionRasterizer {
    options: RasterOptions,
}

impl EdgeFunctionRasterizer {
    pub fn new(options: RasterOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> RasterOptions {
        self.options
    }

    pub fn set_options(&mut self, options: RasterOptions) {
        self.options = options;
    }

    /// Computes the edge function value for point P relative to edge (A -> B).
    ///
    /// Positive when P lies on the viewer's counter-clockwise side of AB,
    /// negative on the other side, zero on the edge.
    #[inline]
    pub fn edge_function(a: Vec3, b: Vec3, p: Vec3) -> f32 {
        (p.x - a.x) * (b.y - a.y) - (p.y - a.y) * (b.x - a.x)
    }

    /// Rasterizes a screen-space triangle into `buffer`.
    pub fn fill_triangle(&self, triangle: &ScreenTriangle, buffer: &mut FrameBuffer) -> Coverage {
        let [v0, v1, v2] = triangle.vertices;

        let area = Self::edge_function(v0.position, v1.position, v2.position);
        if area.abs() < f32::EPSILON {
            return Coverage::Degenerate;
        }
        if area < 0.0 && self.options.cull_backfaces {
            return Coverage::Culled;
        }

        let colors = [v0.color, v1.color, v2.color];
        let pixels = match self.options.shading {
            ShadingMode::Gouraud => {
                self.rasterize_with_shader(triangle, area, buffer, &GouraudShader::new(colors))
            }
            ShadingMode::Flat => {
                self.rasterize_with_shader(triangle, area, buffer, &FlatShader::new(colors))
            }
        };
        Coverage::Drawn { pixels }
    }

    /// Bounding-box scan shared by every shader. Returns the number of
    /// pixels that passed the depth test.
    fn rasterize_with_shader<S: PixelShader>(
        &self,
        triangle: &ScreenTriangle,
        area: f32,
        buffer: &mut FrameBuffer,
        shader: &S,
    ) -> usize {
        let [v0, v1, v2] = triangle.vertices.map(|v| v.position);

        // ─────────────────────────────────────────────────────────────────────
        // Bounding box, clipped to framebuffer bounds
        // ─────────────────────────────────────────────────────────────────────
        let min_x = (v0.x.min(v1.x).min(v2.x).floor() as i32).max(0);
        let max_x = (v0.x.max(v1.x).max(v2.x).ceil() as i32).min(buffer.width() as i32 - 1);
        let min_y = (v0.y.min(v1.y).min(v2.y).floor() as i32).max(0);
        let max_y = (v0.y.max(v1.y).max(v2.y).ceil() as i32).min(buffer.height() as i32 - 1);

        let inv_area = 1.0 / area;
        let depths = [v0.z, v1.z, v2.z];
        let face_depth = (v0.z + v1.z + v2.z) / 3.0;

        let mut written = 0;
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                // Sample at pixel center
                let p = Vec3::new(x as f32 + 0.5, y as f32 + 0.5, 0.0);

                let w0 = Self::edge_function(v1, v2, p);
                let w1 = Self::edge_function(v2, v0, p);
                let w2 = Self::edge_function(v0, v1, p);

                let inside = if area > 0.0 {
                    w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0
                } else {
                    w0 <= 0.0 && w1 <= 0.0 && w2 <= 0.0
                };
                if !inside {
                    continue;
                }

                let lambda = [w0 * inv_area, w1 * inv_area, w2 * inv_area];
                let depth = match self.options.depth {
                    DepthInterpolation::Barycentric => {
                        lambda[0] * depths[0] + lambda[1] * depths[1] + lambda[2] * depths[2]
                    }
                    DepthInterpolation::FaceAverage => face_depth,
                };

                if buffer.set_pixel_with_depth(x, y, depth, shader.shade(lambda)) {
                    written += 1;
                }
            }
        }
        written
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors;
    use crate::render::rasterizer::ScreenVertex;

    const RED: Vec3 = Vec3::new(1.0, 0.0, 0.0);
    const BLUE: Vec3 = Vec3::new(0.0, 0.0, 1.0);

    /// Single-color triangle at a constant depth.
    fn triangle(points: [(f32, f32); 3], depth: f32, color: Vec3) -> ScreenTriangle {
        ScreenTriangle::new(points.map(|(x, y)| ScreenVertex::new(Vec3::new(x, y, depth), color)))
    }

    fn front(depth: f32, color: Vec3) -> ScreenTriangle {
        triangle([(2.0, 2.0), (2.0, 18.0), (18.0, 2.0)], depth, color)
    }

    fn fresh_buffer() -> FrameBuffer {
        let mut fb = FrameBuffer::new(20, 20);
        fb.clear(colors::BLACK);
        fb
    }

    #[test]
    fn front_facing_triangle_has_positive_area() {
        let [a, b, c] = front(0.5, RED).vertices.map(|v| v.position);
        assert!(EdgeFunctionRasterizer::edge_function(a, b, c) > 0.0);
    }

    #[test]
    fn fills_interior_pixels() {
        let mut fb = fresh_buffer();
        let coverage = EdgeFunctionRasterizer::default().fill_triangle(&front(0.5, RED), &mut fb);

        let Coverage::Drawn { pixels } = coverage else {
            panic!("expected the triangle to be drawn, got {coverage:?}");
        };
        assert!(pixels > 0);
        assert_eq!(pixels, fb.covered_pixels());
        assert_eq!(fb.get_pixel(4, 4), Some(0xFFFF0000));
        assert_eq!(fb.get_depth(4, 4), Some(0.5));
        // Beyond the hypotenuse.
        assert_eq!(fb.get_pixel(16, 16), Some(colors::BLACK));
    }

    #[test]
    fn triangle_outside_buffer_touches_nothing() {
        let mut fb = fresh_buffer();
        let before_colors = fb.pixels().to_vec();
        let before_depths = fb.depths().to_vec();

        let offscreen = triangle([(30.0, 30.0), (30.0, 50.0), (50.0, 30.0)], 0.5, RED);
        let coverage = EdgeFunctionRasterizer::default().fill_triangle(&offscreen, &mut fb);

        assert_eq!(coverage, Coverage::Drawn { pixels: 0 });
        assert_eq!(fb.pixels(), &before_colors[..]);
        assert_eq!(fb.depths(), &before_depths[..]);
    }

    #[test]
    fn degenerate_triangle_writes_nothing() {
        let mut fb = fresh_buffer();
        let collinear = triangle([(1.0, 1.0), (5.0, 5.0), (10.0, 10.0)], 0.5, RED);
        let coverage = EdgeFunctionRasterizer::default().fill_triangle(&collinear, &mut fb);

        assert_eq!(coverage, Coverage::Degenerate);
        assert_eq!(fb.covered_pixels(), 0);
    }

    #[test]
    fn back_facing_triangle_is_culled_unless_disabled() {
        let back = triangle([(2.0, 2.0), (18.0, 2.0), (2.0, 18.0)], 0.5, RED);

        let mut fb = fresh_buffer();
        let culling = EdgeFunctionRasterizer::default();
        assert_eq!(culling.fill_triangle(&back, &mut fb), Coverage::Culled);
        assert_eq!(fb.covered_pixels(), 0);

        let double_sided = EdgeFunctionRasterizer::new(RasterOptions {
            cull_backfaces: false,
            ..Default::default()
        });
        let coverage = double_sided.fill_triangle(&back, &mut fb);
        assert!(matches!(coverage, Coverage::Drawn { pixels } if pixels > 0));
        assert_eq!(fb.get_pixel(4, 4), Some(0xFFFF0000));
    }

    #[test]
    fn nearer_triangle_wins_regardless_of_order() {
        let rasterizer = EdgeFunctionRasterizer::default();
        let near = front(0.3, RED);
        let far = triangle([(0.0, 0.0), (0.0, 20.0), (20.0, 0.0)], 0.6, BLUE);

        let mut near_first = fresh_buffer();
        rasterizer.fill_triangle(&near, &mut near_first);
        rasterizer.fill_triangle(&far, &mut near_first);

        let mut far_first = fresh_buffer();
        rasterizer.fill_triangle(&far, &mut far_first);
        rasterizer.fill_triangle(&near, &mut far_first);

        assert_eq!(near_first.pixels(), far_first.pixels());
        assert_eq!(near_first.get_pixel(4, 4), Some(0xFFFF0000));
        // Only the far triangle reaches this pixel.
        assert_eq!(near_first.get_pixel(1, 1), Some(0xFF0000FF));
    }

    #[test]
    fn depth_is_interpolated_across_the_triangle() {
        let mut fb = fresh_buffer();
        let mut sloped = front(0.0, RED);
        sloped.vertices[1].position.z = 1.0;
        sloped.vertices[2].position.z = 1.0;
        EdgeFunctionRasterizer::default().fill_triangle(&sloped, &mut fb);

        let near_corner = fb.get_depth(2, 2).unwrap_or(f32::NAN);
        let far_corner = fb.get_depth(9, 9).unwrap_or(f32::NAN);
        assert!(near_corner < far_corner);
        assert!((0.0..=1.0).contains(&near_corner));
        assert!((0.0..=1.0).contains(&far_corner));
    }

    #[test]
    fn face_average_depth_is_constant() {
        let mut fb = fresh_buffer();
        let mut sloped = front(0.0, RED);
        sloped.vertices[1].position.z = 0.3;
        sloped.vertices[2].position.z = 0.6;
        let rasterizer = EdgeFunctionRasterizer::new(RasterOptions {
            depth: DepthInterpolation::FaceAverage,
            ..Default::default()
        });
        rasterizer.fill_triangle(&sloped, &mut fb);

        assert_eq!(fb.get_depth(2, 2), fb.get_depth(9, 9));
        approx::assert_relative_eq!(fb.get_depth(4, 4).unwrap_or(f32::NAN), 0.3, epsilon = 1e-6);
    }

    #[test]
    fn colors_blend_between_vertices() {
        let mut fb = fresh_buffer();
        let mut blended = front(0.5, RED);
        blended.vertices[1].color = BLUE;
        blended.vertices[2].color = BLUE;
        EdgeFunctionRasterizer::default().fill_triangle(&blended, &mut fb);

        let corner = colors::unpack_color(fb.get_pixel(2, 2).unwrap_or(0));
        let middle = colors::unpack_color(fb.get_pixel(8, 8).unwrap_or(0));
        assert!(corner.x > middle.x);
        assert!(corner.z < middle.z);
    }
}
