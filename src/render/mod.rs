//! The rendering pipeline: projection, rasterization and the frame buffer.

pub mod framebuffer;
pub mod pipeline;
pub mod rasterizer;
mod renderer;

pub use framebuffer::FrameBuffer;
pub use rasterizer::{
    Coverage, DepthInterpolation, EdgeFunctionRasterizer, RasterOptions, ScreenTriangle,
    ScreenVertex, ShadingMode,
};
pub use renderer::{RenderStats, Renderer, TriangleOutcome, DEFAULT_NEAR_W};
