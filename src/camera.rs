//! First-person camera
//!
//! # Coordinate System
//!
//! Uses the crate-wide **right-handed** system:
//! - X: positive right
//! - Y: positive up
//! - Z: positive toward the viewer (the camera looks down -Z at yaw 0)
//!
//! # Orientation
//!
//! Orientation is stored as yaw/pitch angles. Direction vectors and the
//! view matrix are derived on demand, never cached, so they always agree
//! with the latest orientation.
//!
//! - **Yaw**: rotation around world Y (positive = turn right)
//! - **Pitch**: elevation (positive = look up), clamped just short of
//!   vertical so `forward` never becomes parallel to world up

use crate::input::InputState;
use crate::math::mat4::Mat4;
use crate::math::vec3::Vec3;

pub const DEFAULT_SPEED: f32 = 6.0;
pub const DEFAULT_SENSITIVITY: f32 = 0.002;
pub const DEFAULT_PITCH_LIMIT: f32 = 1.55;

/// First-person camera with position, yaw/pitch orientation and the
/// movement parameters used by [`Camera::update`].
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    position: Vec3,
    yaw: f32,
    pitch: f32,
    pitch_limit: f32,
    /// Movement speed in units per second.
    pub speed: f32,
    /// Look sensitivity in radians per input unit.
    pub sensitivity: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 1.7, 5.0))
    }
}

impl Camera {
    /// Creates a camera at `position` looking down -Z.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            yaw: 0.0,
            pitch: 0.0,
            pitch_limit: DEFAULT_PITCH_LIMIT,
            speed: DEFAULT_SPEED,
            sensitivity: DEFAULT_SENSITIVITY,
        }
    }

    /// Creates a camera at `position` looking toward `target`.
    pub fn looking_at(position: Vec3, target: Vec3) -> Self {
        let mut camera = Self::new(position);
        camera.look_at(target);
        camera
    }

    /// Points the camera at a world position.
    ///
    /// Leaves yaw untouched when the target is straight above or below.
    pub fn look_at(&mut self, target: Vec3) {
        let direction = target - self.position;
        let horizontal_len = (direction.x * direction.x + direction.z * direction.z).sqrt();

        if horizontal_len > f32::EPSILON {
            self.yaw = direction.x.atan2(-direction.z);
        }
        if direction.magnitude() > f32::EPSILON {
            self.pitch = direction
                .y
                .atan2(horizontal_len)
                .clamp(-self.pitch_limit, self.pitch_limit);
        }
    }

    /// Sets the symmetric pitch limit (radians) and re-clamps the pitch.
    pub fn set_pitch_limit(&mut self, limit: f32) {
        self.pitch_limit = limit.abs();
        self.pitch = self.pitch.clamp(-self.pitch_limit, self.pitch_limit);
    }

    /// Teleports the camera without changing orientation.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn pitch_limit(&self) -> f32 {
        self.pitch_limit
    }

    /// Unit view direction derived from yaw and pitch.
    pub fn forward(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        Vec3::new(cos_pitch * sin_yaw, sin_pitch, -cos_pitch * cos_yaw).normalize()
    }

    /// Unit strafe direction, always horizontal.
    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::UP).normalize()
    }

    /// World-to-view matrix for the current position and orientation.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at(self.position, self.position + self.forward(), Vec3::UP)
    }

    /// Applies a mouse delta: moving right turns right, moving down looks
    /// down. Pitch is clamped to the limit.
    pub fn mouse_look(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * self.sensitivity;
        self.pitch -= dy * self.sensitivity;
        self.pitch = self.pitch.clamp(-self.pitch_limit, self.pitch_limit);
    }

    /// Moves along the held directions for `dt` seconds.
    ///
    /// The combined direction is normalized, so diagonal movement is not
    /// faster and the displacement is `speed * dt` regardless of frame rate.
    /// Nothing moves when no key is held or opposing keys cancel out.
    pub fn move_by(&mut self, input: &InputState, dt: f32) {
        let forward = self.forward();
        let right = self.right();

        let mut direction = Vec3::ZERO;
        if input.forward {
            direction = direction + forward;
        }
        if input.back {
            direction = direction - forward;
        }
        if input.right {
            direction = direction + right;
        }
        if input.left {
            direction = direction - right;
        }
        if input.up {
            direction.y += 1.0;
        }
        if input.down {
            direction.y -= 1.0;
        }

        if direction.magnitude_squared() > 0.0 {
            self.position = self.position + direction.normalize() * (self.speed * dt);
        }
    }

    /// Per-frame update: look first, then move along the new orientation.
    pub fn update(&mut self, input: &InputState, dt: f32) {
        let (dx, dy) = input.mouse_delta;
        if dx != 0.0 || dy != 0.0 {
            self.mouse_look(dx, dy);
        }
        self.move_by(input, dt);
    }
}
