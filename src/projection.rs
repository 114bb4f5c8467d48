//! Perspective projection parameters.
//!
//! The [`Projection`] struct is the single source of truth for FOV, aspect
//! ratio and near/far planes. The renderer also reads `z_near` from it to
//! reject vertices too close to (or behind) the camera.

use crate::math::mat4::Mat4;

/// Perspective projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Vertical field of view in radians.
    fov_y: f32,
    /// Aspect ratio (width / height).
    aspect_ratio: f32,
    /// Near clipping plane distance.
    z_near: f32,
    /// Far clipping plane distance.
    z_far: f32,
}

impl Projection {
    /// Creates a new projection with the given parameters.
    ///
    /// # Arguments
    /// * `fov_y` - Vertical field of view in radians
    /// * `aspect_ratio` - Width divided by height
    /// * `z_near` - Near clipping plane distance (must be > 0)
    /// * `z_far` - Far clipping plane distance (must be > z_near)
    pub fn new(fov_y: f32, aspect_ratio: f32, z_near: f32, z_far: f32) -> Self {
        Self {
            fov_y,
            aspect_ratio,
            z_near,
            z_far,
        }
    }

    /// Creates a projection from degrees instead of radians.
    pub fn from_degrees(fov_y_degrees: f32, aspect_ratio: f32, z_near: f32, z_far: f32) -> Self {
        Self::new(fov_y_degrees.to_radians(), aspect_ratio, z_near, z_far)
    }

    /// Aspect ratio for a `width` x `height` target.
    pub fn aspect_for(width: u32, height: u32) -> f32 {
        width as f32 / height.max(1) as f32
    }

    pub fn fov_y(&self) -> f32 {
        self.fov_y
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    pub fn z_near(&self) -> f32 {
        self.z_near
    }

    pub fn z_far(&self) -> f32 {
        self.z_far
    }

    /// Updates the aspect ratio (typically called on window resize).
    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.aspect_ratio = aspect_ratio;
    }

    /// Generates the right-handed perspective projection matrix.
    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective(self.fov_y, self.aspect_ratio, self.z_near, self.z_far)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_3;

    #[test]
    fn from_degrees_converts_correctly() {
        let proj = Projection::from_degrees(60.0, 1.0, 0.1, 100.0);
        assert_relative_eq!(proj.fov_y(), FRAC_PI_3, epsilon = 1e-6);
    }

    #[test]
    fn aspect_follows_resize() {
        let mut proj = Projection::from_degrees(60.0, 1.0, 0.1, 100.0);
        proj.set_aspect_ratio(Projection::aspect_for(800, 600));
        assert_relative_eq!(proj.aspect_ratio(), 4.0 / 3.0);
        assert_relative_eq!(
            proj.matrix().get(0, 0),
            proj.matrix().get(1, 1) * 0.75,
            epsilon = 1e-6
        );
    }

    #[test]
    fn aspect_for_zero_height_does_not_divide_by_zero() {
        assert!(Projection::aspect_for(800, 0).is_finite());
    }
}
