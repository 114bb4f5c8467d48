//! Backend-independent input snapshot.
//!
//! The platform layer fills an [`InputState`] once per frame; the camera
//! reads it without knowing where the events came from.

/// Movement keys held this frame plus the mouse motion accumulated since
/// the previous frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputState {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// Accumulated (dx, dy) motion. Positive dx is rightward, positive dy is
    /// downward, matching window coordinates.
    pub mouse_delta: (f32, f32),
}

impl InputState {
    /// Resets the per-frame mouse delta. Held keys persist.
    pub fn begin_frame(&mut self) {
        self.mouse_delta = (0.0, 0.0);
    }

    /// Adds relative mouse motion reported by the platform.
    pub fn accumulate_mouse(&mut self, dx: f32, dy: f32) {
        self.mouse_delta.0 += dx;
        self.mouse_delta.1 += dy;
    }

    /// True when any movement key is held.
    pub fn is_moving(&self) -> bool {
        self.forward || self.back || self.left || self.right || self.up || self.down
    }
}
