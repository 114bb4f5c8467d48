//! Model transform for scene objects.
//!
//! A [`Transform`] turns position, Euler rotation and scale into the model
//! matrix fed to the renderer.

use crate::math::{mat4::Mat4, vec3::Vec3};

/// Position, rotation (Euler angles in radians) and scale of an object.
///
/// Builder methods consume and return `Self`; mutators take `&mut self`
/// and return `&mut Self` so calls can be chained:
///
/// ```ignore
/// let mut t = Transform::new().with_position(Vec3::new(0.0, 1.0, 0.0));
/// t.rotate_y(0.1).set_scale_uniform(2.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    position: Vec3,
    rotation: Vec3, // x = pitch, y = yaw, z = roll
    scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// Identity transform (position 0, rotation 0, scale 1).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    pub fn set_position(&mut self, position: Vec3) -> &mut Self {
        self.position = position;
        self
    }

    pub fn translate(&mut self, delta: Vec3) -> &mut Self {
        self.position = self.position + delta;
        self
    }

    pub fn rotate_x(&mut self, angle: f32) -> &mut Self {
        self.rotation.x += angle;
        self
    }

    /// Spins around the vertical axis, wrapping into [0, 2π).
    pub fn rotate_y(&mut self, angle: f32) -> &mut Self {
        self.rotation.y = (self.rotation.y + angle).rem_euclid(std::f32::consts::TAU);
        self
    }

    pub fn set_scale_uniform(&mut self, s: f32) -> &mut Self {
        self.scale = Vec3::splat(s);
        self
    }

    /// Generate the model matrix.
    ///
    /// Order: Translation * RotationY * RotationX * RotationZ * Scale
    /// (scale first, then roll, pitch, yaw, then translation).
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::translation(self.position.x, self.position.y, self.position.z)
            * Mat4::rotation_y(self.rotation.y)
            * Mat4::rotation_x(self.rotation.x)
            * Mat4::rotation_z(self.rotation.z)
            * Mat4::scaling(self.scale.x, self.scale.y, self.scale.z)
    }
}
