//! Highlight rings for NEO markers.
//!
//! The marker under the hovered table row gets a cyan ring; the focused
//! marker keeps a yellow one.

use bevy::prelude::*;

use crate::camera::MainCamera;
use crate::neo::presenter::{MARKER_RADIUS, MarkerIndex, NeoMarker};
use crate::neo::NeoId;

/// Plugin providing marker highlighting.
pub struct HighlightPlugin;

impl Plugin for HighlightPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HoveredNeo>()
            .init_resource::<SelectedNeo>()
            .add_systems(Update, draw_highlights);
    }
}

/// Resource tracking the NEO whose table row is under the pointer.
#[derive(Resource, Default, Debug)]
pub struct HoveredNeo(pub Option<NeoId>);

/// Resource tracking the NEO the camera last focused.
#[derive(Resource, Default, Debug)]
pub struct SelectedNeo(pub Option<NeoId>);

/// Points of a circle around `center` spanned by `right` and `up`.
pub fn ring_around(center: Vec3, right: Vec3, up: Vec3, radius: f32, segments: usize) -> Vec<Vec3> {
    (0..=segments)
        .map(|i| {
            let t = (i as f32 / segments as f32) * std::f32::consts::TAU;
            center + radius * (t.cos() * right + t.sin() * up)
        })
        .collect()
}

fn draw_highlights(
    mut gizmos: Gizmos,
    hovered: Res<HoveredNeo>,
    selected: Res<SelectedNeo>,
    index: Res<MarkerIndex>,
    markers: Query<&Transform, With<NeoMarker>>,
    camera: Query<&Transform, With<MainCamera>>,
) {
    // Rings face the camera
    let (right, up) = camera
        .single()
        .map(|t| (*t.right(), *t.up()))
        .unwrap_or((Vec3::X, Vec3::Y));

    let rings = [
        (selected.0, MARKER_RADIUS * 3.0, Color::srgba(1.0, 0.9, 0.2, 0.9)),
        (hovered.0, MARKER_RADIUS * 2.0, Color::srgba(0.0, 1.0, 1.0, 0.8)),
    ];

    for (id, radius, color) in rings {
        let Some(entity) = id.and_then(|id| index.entity(id)) else {
            continue;
        };
        let Ok(transform) = markers.get(entity) else {
            continue;
        };
        gizmos.linestrip(ring_around(transform.translation, right, up, radius, 32), color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ring_around_keeps_radius() {
        let center = Vec3::new(2.0, 0.0, 0.0);
        let points = ring_around(center, Vec3::X, Vec3::Y, 0.3, 32);
        assert_eq!(points.len(), 33);
        for p in points {
            assert_relative_eq!(p.distance(center), 0.3, epsilon = 1e-5);
            assert_eq!(p.z, 0.0);
        }
    }
}
