//! Background rendering for the orrery.
//!
//! Provides the starfield: one point-list mesh holding every star.

use bevy::{asset::RenderAssetUsages, prelude::*, render::render_resource::PrimitiveTopology};
use rand::Rng;

use crate::types::hex_color;

/// Number of stars in the starfield.
pub const STAR_COUNT: usize = 10_000;

/// Edge length of the cube the stars are scattered through.
pub const STARFIELD_EXTENT: f32 = 2000.0;

/// Star color.
pub const STAR_COLOR: u32 = 0xaaaaaa;

/// Marker component for the starfield entity.
#[derive(Component)]
pub struct Starfield;

/// Plugin providing background visual elements.
pub struct BackgroundPlugin;

impl Plugin for BackgroundPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_starfield);
    }
}

/// Scatter `count` stars through the starfield volume.
///
/// x and y are centred on the origin; z only reaches behind the scene
/// (into negative depth) so stars sit beyond the planets from the default
/// viewpoint.
pub fn star_positions(rng: &mut impl Rng, count: usize) -> Vec<[f32; 3]> {
    (0..count)
        .map(|_| {
            [
                (rng.r#gen::<f32>() - 0.5) * STARFIELD_EXTENT,
                (rng.r#gen::<f32>() - 0.5) * STARFIELD_EXTENT,
                -rng.r#gen::<f32>() * STARFIELD_EXTENT,
            ]
        })
        .collect()
}

/// Spawn the starfield background.
fn spawn_starfield(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let positions = star_positions(&mut rand::thread_rng(), STAR_COUNT);

    let mesh = Mesh::new(PrimitiveTopology::PointList, RenderAssetUsages::RENDER_WORLD)
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions);

    let material = materials.add(StandardMaterial {
        base_color: hex_color(STAR_COLOR),
        unlit: true,
        ..default()
    });

    commands.spawn((
        Mesh3d(meshes.add(mesh)),
        MeshMaterial3d(material),
        Transform::default(),
        Starfield,
    ));

    info!("Spawned {} background stars", STAR_COUNT);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_stars_stay_inside_volume() {
        let mut rng = StdRng::seed_from_u64(7);
        let stars = star_positions(&mut rng, 2_000);
        assert_eq!(stars.len(), 2_000);

        let half = STARFIELD_EXTENT / 2.0;
        for [x, y, z] in stars {
            assert!((-half..half).contains(&x));
            assert!((-half..half).contains(&y));
            assert!(z <= 0.0 && z > -STARFIELD_EXTENT);
        }
    }

    #[test]
    fn test_starfield_is_biased_to_negative_depth() {
        let mut rng = StdRng::seed_from_u64(11);
        let stars = star_positions(&mut rng, 1_000);
        let mean_z = stars.iter().map(|s| s[2]).sum::<f32>() / stars.len() as f32;
        assert!(mean_z < -STARFIELD_EXTENT / 4.0);
    }
}
