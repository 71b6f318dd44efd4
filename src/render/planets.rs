//! Planet spawning and circular orbital motion.
//!
//! Motion is uniform circular: each planet advances its angle by a fixed
//! speed per reference frame and sits at `(cos θ·d, 0, sin θ·d)`. There is
//! no eccentricity or Kepler timing here.

use bevy::prelude::*;

use crate::render::orbits::OrbitRing;
use crate::time::AnimationClock;
use crate::types::{FrameSet, hex_color};

/// Static description of a planet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlanetSpec {
    pub name: &'static str,
    /// Packed `0xRRGGBB` color.
    pub color: u32,
    /// Orbit radius in render units.
    pub distance: f32,
    /// Sphere radius in render units.
    pub size: f32,
    /// Radians per reference frame.
    pub speed: f32,
}

/// The planets shown, innermost first.
pub const PLANETS: [PlanetSpec; 5] = [
    PlanetSpec {
        name: "Mercury",
        color: 0xaaaaaa,
        distance: 1.4,
        size: 0.2,
        speed: 0.02,
    },
    PlanetSpec {
        name: "Venus",
        color: 0xffcc00,
        distance: 2.0,
        size: 0.4,
        speed: 0.015,
    },
    PlanetSpec {
        name: "Earth",
        color: 0x0000ff,
        distance: 3.0,
        size: 0.5,
        speed: 0.01,
    },
    PlanetSpec {
        name: "Mars",
        color: 0xff0000,
        distance: 4.5,
        size: 0.3,
        speed: 0.008,
    },
    PlanetSpec {
        name: "Jupiter",
        color: 0xffaa00,
        distance: 6.5,
        size: 0.9,
        speed: 0.005,
    },
];

/// Component holding a planet's orbital state.
///
/// The entity's `Transform` is derived from `angle` every frame.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct Planet {
    pub name: String,
    pub distance: f32,
    pub speed: f32,
    /// Current angle in radians.
    pub angle: f32,
}

impl Planet {
    pub fn new(name: impl Into<String>, distance: f32, speed: f32) -> Self {
        Self {
            name: name.into(),
            distance,
            speed,
            angle: 0.0,
        }
    }

    /// Advance the angle by `frames` reference frames.
    pub fn advance(&mut self, frames: f32) {
        self.angle += self.speed * frames;
    }

    /// Position on the orbit for the current angle.
    pub fn position(&self) -> Vec3 {
        Vec3::new(
            self.angle.cos() * self.distance,
            0.0,
            self.angle.sin() * self.distance,
        )
    }
}

impl From<&PlanetSpec> for Planet {
    fn from(spec: &PlanetSpec) -> Self {
        Self::new(spec.name, spec.distance, spec.speed)
    }
}

/// Plugin spawning planets and their orbit rings.
pub struct PlanetPlugin;

impl Plugin for PlanetPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_planets)
            .add_systems(Update, advance_planets.in_set(FrameSet::Animate));
    }
}

fn spawn_planets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for spec in &PLANETS {
        commands.spawn((OrbitRing::new(spec.distance), Name::new(format!("{} orbit", spec.name))));

        let planet = Planet::from(spec);
        let material = materials.add(StandardMaterial {
            base_color: hex_color(spec.color),
            perceptual_roughness: 0.9,
            ..default()
        });

        commands.spawn((
            Mesh3d(meshes.add(Sphere::new(spec.size))),
            MeshMaterial3d(material),
            Transform::from_translation(planet.position()),
            Name::new(spec.name),
            planet,
        ));
    }

    info!("Spawned {} planets", PLANETS.len());
}

/// Move every planet along its orbit.
pub fn advance_planets(
    clock: Res<AnimationClock>,
    mut planets: Query<(&mut Planet, &mut Transform)>,
) {
    for (mut planet, mut transform) in &mut planets {
        planet.advance(clock.frames);
        transform.translation = planet.position();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_planet_starts_on_positive_x() {
        let planet = Planet::from(&PLANETS[2]);
        assert_eq!(planet.name, "Earth");
        assert_eq!(planet.position(), Vec3::new(3.0, 0.0, 0.0));
    }

    #[test]
    fn test_hundred_steps_of_earth() {
        let mut planet = Planet::new("Earth", 3.0, 0.01);
        for _ in 0..100 {
            planet.advance(1.0);
        }
        let pos = planet.position();
        assert_relative_eq!(pos.x, 1.0f32.cos() * 3.0, epsilon = 1e-4);
        assert_eq!(pos.y, 0.0);
        assert_relative_eq!(pos.z, 1.0f32.sin() * 3.0, epsilon = 1e-4);
    }

    #[test]
    fn test_fractional_frames_match_whole_frames() {
        let mut a = Planet::new("Mars", 4.5, 0.008);
        let mut b = a.clone();
        a.advance(2.0);
        b.advance(0.5);
        b.advance(1.5);
        assert_relative_eq!(a.angle, b.angle, epsilon = 1e-6);
    }

    #[test]
    fn test_planet_table_is_ordered_outward() {
        assert!(PLANETS.windows(2).all(|w| w[0].distance < w[1].distance));
    }
}
