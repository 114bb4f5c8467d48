//! A CPU-based software-rendered 3D graphics engine.
//!
//! Colored triangles go through model, view and projection matrices and are
//! rasterized with an edge-function scan into a depth-tested frame buffer.
//! SDL2 is only used to show the result and read input.
//!
//! # Quick Start
//!
//! ```ignore
//! use softrast::prelude::*;
//!
//! let settings = Settings::default();
//! let mut window = Window::new(&settings.window_title, 800, 600)?;
//! let mut engine = Engine::new(800, 600, &settings, Scene::cube());
//! engine.render();
//! window.present(engine.frame_buffer())?;
//! ```

// Public API - exposed to library consumers
pub mod camera;
pub mod colors;
pub mod config;
pub mod engine;
pub mod error;
pub mod input;
pub mod math;
pub mod mesh;
pub mod projection;
pub mod render;
pub mod scene;
pub mod transform;
pub mod window;

// Re-export commonly needed types at crate root for convenience
pub use camera::Camera;
pub use config::Settings;
pub use engine::Engine;
pub use error::{Error, Result};
pub use input::InputState;
pub use mesh::{Mesh, Triangle, Vertex};
pub use projection::Projection;
pub use render::{DepthInterpolation, RasterOptions, RenderStats, ShadingMode};
pub use scene::{Scene, SceneKind};
pub use transform::Transform;

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use softrast::prelude::*;
/// ```
pub mod prelude {
    // Camera & input
    pub use crate::camera::Camera;
    pub use crate::input::InputState;

    // Engine
    pub use crate::config::Settings;
    pub use crate::engine::Engine;
    pub use crate::scene::{Scene, SceneKind};

    // Geometry
    pub use crate::mesh::{Mesh, Triangle, Vertex};
    pub use crate::projection::Projection;
    pub use crate::transform::Transform;

    // Math
    pub use crate::math::mat4::Mat4;
    pub use crate::math::vec3::Vec3;
    pub use crate::math::vec4::Vec4;

    // Rendering
    pub use crate::render::{DepthInterpolation, RasterOptions, RenderStats, ShadingMode};

    // Window
    pub use crate::window::{FpsCounter, FrameLimiter, Window, WindowEvent};
}

/// Module exposing internals for benchmarking. Not part of the stable API.
pub mod bench {
    pub use crate::render::{
        EdgeFunctionRasterizer, FrameBuffer, Renderer, ScreenTriangle, ScreenVertex,
    };
}
