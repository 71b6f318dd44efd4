//! Shared constants, system sets, and small helpers used across the orrery.

use bevy::prelude::*;

/// System sets ordering the per-frame work.
///
/// The clock must tick before anything animates, the presenter must rebuild
/// markers before the camera chases a focused marker.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum FrameSet {
    /// Frame clock advancement
    Clock,
    /// Sun spin and planet motion
    Animate,
    /// NEO feed polling, marker rebuilds, focus requests
    Present,
    /// Camera focus and orbit-control damping
    Camera,
}

/// Reference frame rate the per-frame increments were tuned for.
///
/// Angular speeds are expressed in radians per reference frame, so a planet
/// with speed 0.01 advances 0.6 rad per wall-clock second.
pub const REFERENCE_FRAME_RATE: f32 = 60.0;

/// Height in logical pixels of the bottom band reserved for the NEO table.
pub const RESERVED_BAND_HEIGHT: f32 = 150.0;

/// Convert a packed `0xRRGGBB` value into an sRGB color.
pub fn hex_color(rgb: u32) -> Color {
    Color::srgb_u8(
        ((rgb >> 16) & 0xff) as u8,
        ((rgb >> 8) & 0xff) as u8,
        (rgb & 0xff) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color_unpacks_channels() {
        assert_eq!(hex_color(0xff0000), Color::srgb_u8(255, 0, 0));
        assert_eq!(hex_color(0x0000ff), Color::srgb_u8(0, 0, 255));
        assert_eq!(hex_color(0xaaaaaa), Color::srgb_u8(170, 170, 170));
    }
}
