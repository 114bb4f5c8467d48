//! Frame-level rendering.
//!
//! The [`Renderer`] owns the frame buffer and the rasterizer, runs every
//! triangle of a mesh through projection and rasterization, and keeps
//! per-frame statistics.

use log::trace;

use super::framebuffer::FrameBuffer;
use super::pipeline;
use super::rasterizer::{Coverage, EdgeFunctionRasterizer, RasterOptions, ScreenTriangle};
use crate::math::mat4::Mat4;
use crate::mesh::{Mesh, Triangle};

/// Near-plane distance used until [`Renderer::set_near_plane`] is called.
pub const DEFAULT_NEAR_W: f32 = 0.1;

/// Outcome of submitting one triangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriangleOutcome {
    /// Rasterized; `pixels` passed the depth test.
    Drawn { pixels: usize },
    /// Back-facing.
    Culled,
    /// Zero area on screen.
    Degenerate,
    /// A vertex was at or behind the near plane.
    NearRejected,
}

impl From<Coverage> for TriangleOutcome {
    fn from(coverage: Coverage) -> Self {
        match coverage {
            Coverage::Drawn { pixels } => TriangleOutcome::Drawn { pixels },
            Coverage::Culled => TriangleOutcome::Culled,
            Coverage::Degenerate => TriangleOutcome::Degenerate,
        }
    }
}

/// Counters for the current frame, reset by [`Renderer::begin_frame`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub triangles_submitted: usize,
    pub triangles_drawn: usize,
    pub triangles_culled: usize,
    pub triangles_degenerate: usize,
    pub triangles_near_rejected: usize,
    pub pixels_written: usize,
}

impl RenderStats {
    fn record(&mut self, outcome: TriangleOutcome) {
        self.triangles_submitted += 1;
        match outcome {
            TriangleOutcome::Drawn { pixels } => {
                self.triangles_drawn += 1;
                self.pixels_written += pixels;
            }
            TriangleOutcome::Culled => self.triangles_culled += 1,
            TriangleOutcome::Degenerate => self.triangles_degenerate += 1,
            TriangleOutcome::NearRejected => self.triangles_near_rejected += 1,
        }
    }
}

pub struct Renderer {
    framebuffer: FrameBuffer,
    rasterizer: EdgeFunctionRasterizer,
    near_w: f32,
    stats: RenderStats,
}

impl Renderer {
    pub fn new(width: u32, height: u32, options: RasterOptions) -> Self {
        Self {
            framebuffer: FrameBuffer::new(width, height),
            rasterizer: EdgeFunctionRasterizer::new(options),
            near_w: DEFAULT_NEAR_W,
            stats: RenderStats::default(),
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.framebuffer.resize(width, height);
    }

    pub fn width(&self) -> u32 {
        self.framebuffer.width()
    }

    pub fn height(&self) -> u32 {
        self.framebuffer.height()
    }

    pub fn options(&self) -> RasterOptions {
        self.rasterizer.options()
    }

    pub fn set_options(&mut self, options: RasterOptions) {
        self.rasterizer.set_options(options);
    }

    /// Vertices closer to the camera than `near` are rejected. Normally the
    /// projection's near plane.
    pub fn set_near_plane(&mut self, near: f32) {
        self.near_w = near;
    }

    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.framebuffer
    }

    pub fn stats(&self) -> RenderStats {
        self.stats
    }

    /// Clears color and depth and resets the statistics.
    pub fn begin_frame(&mut self, clear_color: u32) {
        self.framebuffer.clear(clear_color);
        self.stats = RenderStats::default();
    }

    /// Logs the statistics gathered since [`Renderer::begin_frame`].
    pub fn end_frame(&self) {
        trace!("frame stats: {:?}", self.stats);
    }

    /// Draws every triangle of `mesh` with `projection * view * model`.
    pub fn draw_mesh(&mut self, mesh: &Mesh, model: &Mat4, view: &Mat4, projection: &Mat4) {
        let mvp = *projection * *view * *model;
        for triangle in mesh.triangles() {
            self.draw_triangle(triangle, &mvp);
        }
    }

    /// Projects and rasterizes one object-space triangle.
    pub fn draw_triangle(&mut self, triangle: &Triangle, mvp: &Mat4) -> TriangleOutcome {
        let width = self.framebuffer.width();
        let height = self.framebuffer.height();
        let outcome = match pipeline::project_triangle(mvp, triangle, width, height, self.near_w) {
            Some(screen) => self.rasterizer.fill_triangle(&screen, &mut self.framebuffer).into(),
            None => TriangleOutcome::NearRejected,
        };
        self.stats.record(outcome);
        outcome
    }

    /// Rasterizes a triangle that is already in screen space.
    pub fn draw_screen_triangle(&mut self, triangle: &ScreenTriangle) -> TriangleOutcome {
        let outcome = self
            .rasterizer
            .fill_triangle(triangle, &mut self.framebuffer)
            .into();
        self.stats.record(outcome);
        outcome
    }
}
