//! The Sun and its glow shell.

use bevy::prelude::*;

use crate::time::AnimationClock;
use crate::types::{FrameSet, hex_color};

/// Sun sphere radius.
pub const SUN_RADIUS: f32 = 1.0;

/// Glow shell radius.
pub const GLOW_RADIUS: f32 = 1.3;

/// Sun color.
pub const SUN_COLOR: u32 = 0xffdd00;

/// Glow color.
pub const GLOW_COLOR: u32 = 0xffaa00;

/// Glow opacity before additive blending.
pub const GLOW_OPACITY: f32 = 0.3;

/// Sun and glow spin in radians per reference frame.
pub const SUN_SPIN_RATE: f32 = 0.005;

/// Marker for the Sun body.
#[derive(Component)]
pub struct Sun;

/// Marker for the translucent glow around the Sun.
#[derive(Component)]
pub struct SunGlow;

/// Constant rotation about the Y axis.
#[derive(Component, Clone, Copy, Debug)]
pub struct Spin {
    /// Radians per reference frame.
    pub rate: f32,
}

/// Plugin spawning and animating the Sun.
pub struct SunPlugin;

impl Plugin for SunPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_sun)
            .add_systems(Update, spin_bodies.in_set(FrameSet::Animate));
    }
}

fn spawn_sun(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let color = hex_color(SUN_COLOR);
    let sun_material = materials.add(StandardMaterial {
        base_color: color,
        emissive: color.to_linear() * 2.0,
        unlit: true,
        ..default()
    });

    commands
        .spawn((
            Mesh3d(meshes.add(Sphere::new(SUN_RADIUS))),
            MeshMaterial3d(sun_material),
            Transform::default(),
            Spin {
                rate: SUN_SPIN_RATE,
            },
            Sun,
        ))
        .with_children(|sun| {
            // The Sun lights the planets
            sun.spawn(PointLight {
                intensity: 4_000_000.0,
                range: 100.0,
                shadows_enabled: false,
                ..default()
            });
        });

    let glow_material = materials.add(StandardMaterial {
        base_color: hex_color(GLOW_COLOR).with_alpha(GLOW_OPACITY),
        alpha_mode: AlphaMode::Add,
        unlit: true,
        ..default()
    });

    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(GLOW_RADIUS))),
        MeshMaterial3d(glow_material),
        Transform::default(),
        Spin {
            rate: SUN_SPIN_RATE,
        },
        SunGlow,
    ));

    info!("Sun and glow initialized");
}

/// Rotate every spinning body by its rate.
pub fn spin_bodies(clock: Res<AnimationClock>, mut bodies: Query<(&mut Transform, &Spin)>) {
    for (mut transform, spin) in &mut bodies {
        transform.rotate_y(spin.rate * clock.frames);
    }
}
