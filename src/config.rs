//! Renderer settings, stored as JSON.

use std::fs;
use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::camera::{DEFAULT_PITCH_LIMIT, DEFAULT_SENSITIVITY, DEFAULT_SPEED};
use crate::colors;
use crate::error::Result;
use crate::projection::Projection;
use crate::render::{DepthInterpolation, RasterOptions, ShadingMode};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window_width: u32,
    pub window_height: u32,
    pub window_title: String,
    pub target_fps: u32,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// World units per second.
    pub camera_speed: f32,
    /// Radians per pixel of mouse motion.
    pub mouse_sensitivity: f32,
    pub pitch_limit: f32,
    pub backface_culling: bool,
    pub depth_interpolation: DepthInterpolation,
    pub shading: ShadingMode,
    /// Packed 0xAARRGGBB.
    pub clear_color: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: 1280,
            window_height: 720,
            window_title: "softrast".to_string(),
            target_fps: 60,
            fov_degrees: 60.0,
            near: 0.1,
            far: 500.0,
            camera_speed: DEFAULT_SPEED,
            mouse_sensitivity: DEFAULT_SENSITIVITY,
            pitch_limit: DEFAULT_PITCH_LIMIT,
            backface_culling: true,
            depth_interpolation: DepthInterpolation::default(),
            shading: ShadingMode::default(),
            clear_color: colors::SKY,
        }
    }
}

impl Settings {
    /// Reads settings from a JSON file. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Like [`Settings::load`], but falls back to the defaults when the file
    /// is missing or malformed.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("failed to load {}: {}. Using defaults.", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    pub fn projection(&self, width: u32, height: u32) -> Projection {
        Projection::from_degrees(
            self.fov_degrees,
            Projection::aspect_for(width, height),
            self.near,
            self.far,
        )
    }

    pub fn raster_options(&self) -> RasterOptions {
        RasterOptions {
            cull_backfaces: self.backface_culling,
            depth: self.depth_interpolation,
            shading: self.shading,
        }
    }

    /// Frame budget in milliseconds; zero means unlimited.
    pub fn frame_time_ms(&self) -> u64 {
        if self.target_fps == 0 {
            0
        } else {
            1000 / self.target_fps as u64
        }
    }
}
