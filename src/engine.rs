//! Core rendering engine.
//!
//! The [`Engine`] struct is the main entry point for the renderer. It owns
//! the camera, the projection, the scene and the [`Renderer`], and turns one
//! input snapshot into one finished frame per tick:
//!
//! ```ignore
//! engine.update(&input, dt);
//! engine.render();
//! window.present(engine.frame_buffer())?;
//! ```

use std::path::Path;

use log::info;

use crate::camera::Camera;
use crate::config::Settings;
use crate::error::Result;
use crate::input::InputState;
use crate::projection::Projection;
use crate::render::{RasterOptions, RenderStats, Renderer};
use crate::scene::Scene;

pub struct Engine {
    renderer: Renderer,
    camera: Camera,
    projection: Projection,
    scene: Scene,
    clear_color: u32,
}

impl Engine {
    pub fn new(width: u32, height: u32, settings: &Settings, scene: Scene) -> Self {
        let mut renderer = Renderer::new(width, height, settings.raster_options());
        renderer.set_near_plane(settings.near);

        let mut camera = scene.camera_start();
        camera.speed = settings.camera_speed;
        camera.sensitivity = settings.mouse_sensitivity;
        camera.set_pitch_limit(settings.pitch_limit);

        info!(
            "loaded {} scene: {} objects, {} triangles, {}x{}",
            scene.kind(),
            scene.objects().len(),
            scene.triangle_count(),
            width,
            height
        );

        Self {
            renderer,
            camera,
            projection: settings.projection(width, height),
            scene,
            clear_color: settings.clear_color,
        }
    }

    /// Rebuilds the buffers and updates the aspect ratio.
    pub fn resize(&mut self, width: u32, height: u32) {
        info!("resize to {}x{}", width, height);
        self.renderer.resize(width, height);
        self.projection
            .set_aspect_ratio(Projection::aspect_for(width, height));
    }

    pub fn width(&self) -> u32 {
        self.renderer.width()
    }

    pub fn height(&self) -> u32 {
        self.renderer.height()
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn raster_options(&self) -> RasterOptions {
        self.renderer.options()
    }

    pub fn set_raster_options(&mut self, options: RasterOptions) {
        self.renderer.set_options(options);
    }

    pub fn set_clear_color(&mut self, color: u32) {
        self.clear_color = color;
    }

    /// Statistics of the last rendered frame.
    pub fn stats(&self) -> RenderStats {
        self.renderer.stats()
    }

    /// Applies one frame of input and advances scene animation by `dt`
    /// seconds.
    pub fn update(&mut self, input: &InputState, dt: f32) {
        self.camera.update(input, dt);
        self.scene.update(dt);
    }

    /// Render the current frame
    pub fn render(&mut self) {
        self.renderer.begin_frame(self.clear_color);

        let view = self.camera.view_matrix();
        let projection = self.projection.matrix();
        for object in self.scene.objects() {
            let model = object.transform.to_matrix();
            self.renderer
                .draw_mesh(&object.mesh, &model, &view, &projection);
        }

        self.renderer.end_frame();
    }

    /// The rendered frame, one ARGB8888 value per pixel.
    pub fn pixels(&self) -> &[u32] {
        self.renderer.framebuffer().pixels()
    }

    /// Returns the rendered frame as bytes (ARGB8888 format)
    pub fn frame_buffer(&self) -> &[u8] {
        self.renderer.framebuffer().as_bytes()
    }

    /// Writes the last rendered frame as an image; the format follows the
    /// file extension.
    pub fn save_screenshot(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.renderer.framebuffer().save(path)?;
        info!("saved screenshot to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors;
    use crate::math::vec3::Vec3;
    use crate::scene::SceneKind;
    use approx::assert_relative_eq;

    fn engine(kind: SceneKind) -> Engine {
        Engine::new(160, 120, &Settings::default(), Scene::preset(kind))
    }

    #[test]
    fn camera_takes_settings() {
        let settings = Settings {
            camera_speed: 2.0,
            mouse_sensitivity: 0.01,
            ..Settings::default()
        };
        let engine = Engine::new(64, 64, &settings, Scene::plane());
        assert_relative_eq!(engine.camera().speed, 2.0);
        assert_relative_eq!(engine.camera().sensitivity, 0.01);
    }

    #[test]
    fn render_fills_part_of_the_frame() {
        let mut engine = engine(SceneKind::Cube);
        engine.render();

        let covered = engine
            .pixels()
            .iter()
            .filter(|p| **p != colors::SKY)
            .count();
        assert!(covered > 0);
        assert!(covered < engine.pixels().len());
        assert_eq!(engine.stats().triangles_submitted, 12);
        assert_eq!(engine.frame_buffer().len(), 160 * 120 * 4);
    }

    #[test]
    fn plane_covers_lower_half_only() {
        let mut engine = engine(SceneKind::Plane);
        engine.render();

        let width = engine.width() as usize;
        let top_row = &engine.pixels()[..width];
        let bottom_row = &engine.pixels()[engine.pixels().len() - width..];
        assert!(top_row.iter().all(|p| *p == colors::SKY));
        assert!(bottom_row.iter().all(|p| *p != colors::SKY));
    }

    #[test]
    fn update_moves_camera_and_spins_scene() {
        let mut engine = engine(SceneKind::Cube);
        let start = engine.camera().position();
        let forward = engine.camera().forward();
        let input = InputState {
            forward: true,
            ..Default::default()
        };
        engine.update(&input, 0.5);

        let moved = engine.camera().position() - start;
        assert_relative_eq!(moved.x, forward.x * engine.camera().speed * 0.5, epsilon = 1e-5);
        assert!(engine.scene().objects()[0].transform.rotation().y > 0.0);
    }

    #[test]
    fn resize_rebuilds_buffers_and_aspect() {
        let mut engine = engine(SceneKind::Terrain);
        engine.resize(200, 100);
        assert_eq!(engine.pixels().len(), 200 * 100);
        assert_relative_eq!(engine.projection().aspect_ratio(), 2.0);
        engine.render();
        assert!(engine.stats().pixels_written > 0);
    }

    #[test]
    fn camera_mut_changes_the_view() {
        let mut engine = engine(SceneKind::Cube);
        engine.camera_mut().set_position(Vec3::new(0.0, 0.0, 50.0));
        engine.camera_mut().look_at(Vec3::new(0.0, 0.0, 100.0));
        engine.render();
        assert_eq!(engine.stats().pixels_written, 0);
    }
}
