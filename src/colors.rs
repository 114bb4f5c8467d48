//! Packed ARGB8888 color helpers and palette constants.
//!
//! Pixels are `0xAARRGGBB`: alpha in the most significant byte, always
//! opaque when produced by the rasterizer.

use crate::math::vec3::Vec3;

pub const OPAQUE: u32 = 0xFF00_0000;

/// Default clear color.
pub const SKY: u32 = 0xFF20_4857;
pub const BLACK: u32 = 0xFF00_0000;

pub const GRASS: Vec3 = Vec3::new(0.2, 0.8, 0.2);
pub const GRASS_DARK: Vec3 = Vec3::new(0.1, 0.35, 0.12);
pub const GRASS_LIGHT: Vec3 = Vec3::new(0.45, 0.75, 0.3);

/// Packs an RGB color in [0,1] into an opaque ARGB8888 pixel.
///
/// Channels are clamped to [0,1] before scaling, so out-of-range values
/// saturate instead of wrapping.
#[inline]
pub fn pack_color(color: Vec3) -> u32 {
    #[inline]
    fn channel(c: f32) -> u32 {
        (c.clamp(0.0, 1.0) * 255.0).round() as u32
    }
    OPAQUE | (channel(color.x) << 16) | (channel(color.y) << 8) | channel(color.z)
}

/// Unpacks an ARGB8888 pixel into RGB channels in [0,1]. Alpha is dropped.
#[inline]
pub fn unpack_color(pixel: u32) -> Vec3 {
    let r = ((pixel >> 16) & 0xFF) as f32 / 255.0;
    let g = ((pixel >> 8) & 0xFF) as f32 / 255.0;
    let b = (pixel & 0xFF) as f32 / 255.0;
    Vec3::new(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_places_channels_in_argb_order() {
        assert_eq!(pack_color(Vec3::new(1.0, 0.0, 0.0)), 0xFFFF_0000);
        assert_eq!(pack_color(Vec3::new(0.0, 1.0, 0.0)), 0xFF00_FF00);
        assert_eq!(pack_color(Vec3::new(0.0, 0.0, 1.0)), 0xFF00_00FF);
    }

    #[test]
    fn pack_clamps_out_of_range_channels() {
        assert_eq!(pack_color(Vec3::new(2.0, -1.0, 0.5)), 0xFFFF_0080);
    }

    #[test]
    fn unpack_inverts_pack_for_byte_values() {
        let pixel = 0xFF12_3456;
        assert_eq!(pack_color(unpack_color(pixel)), pixel);
    }
}
