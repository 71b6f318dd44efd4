//! Orbit ring rendering using Bevy Gizmos.
//!
//! Ring geometry is sampled once when the planets spawn; the gizmo system
//! only replays the stored polyline each frame.

use std::f32::consts::TAU;

use bevy::prelude::*;

use crate::types::hex_color;

/// Segments per orbit ring.
pub const ORBIT_SEGMENTS: usize = 100;

/// Orbit ring color.
pub const ORBIT_COLOR: u32 = 0x888888;

/// A circular orbit path in the orbital (XZ) plane.
#[derive(Component, Clone, Debug)]
pub struct OrbitRing {
    /// Closed polyline: the last point repeats the first.
    pub points: Vec<Vec3>,
    pub color: Color,
}

impl OrbitRing {
    pub fn new(radius: f32) -> Self {
        Self {
            points: ring_points(radius, ORBIT_SEGMENTS),
            color: hex_color(ORBIT_COLOR),
        }
    }
}

/// Sample a circle of `radius` around the origin in the XZ plane.
///
/// Returns `segments + 1` points so the polyline closes on itself.
pub fn ring_points(radius: f32, segments: usize) -> Vec<Vec3> {
    let segments = segments.max(3);
    (0..=segments)
        .map(|i| {
            let angle = i as f32 / segments as f32 * TAU;
            Vec3::new(radius * angle.cos(), 0.0, radius * angle.sin())
        })
        .collect()
}

/// Plugin providing orbit path visualization.
pub struct OrbitPathPlugin;

impl Plugin for OrbitPathPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, draw_orbit_rings);
    }
}

fn draw_orbit_rings(mut gizmos: Gizmos, rings: Query<&OrbitRing>) {
    for ring in &rings {
        gizmos.linestrip(ring.points.iter().copied(), ring.color);
    }
}
