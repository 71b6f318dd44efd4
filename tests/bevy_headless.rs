//! Headless Bevy integration tests.
//!
//! These tests verify the animation clock and planet motion without a GPU.

use approx::assert_relative_eq;
use bevy::prelude::*;
use neo_orrery::config::OrreryConfig;
use neo_orrery::render::{PLANETS, Planet, advance_planets};
use neo_orrery::time::{AnimationClock, TimePlugin};
use neo_orrery::types::FrameSet;

fn create_animation_app(frame_locked: bool) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(OrreryConfig {
            frame_locked,
            ..default()
        })
        .add_plugins(TimePlugin)
        .add_systems(Update, advance_planets.in_set(FrameSet::Animate));
    app
}

fn spawn_planet(app: &mut App, planet: Planet) -> Entity {
    let position = planet.position();
    app.world_mut()
        .spawn((planet, Transform::from_translation(position)))
        .id()
}

#[test]
fn test_clock_picks_up_frame_lock_from_config() {
    let mut app = create_animation_app(true);
    app.update();

    let clock = app.world().resource::<AnimationClock>();
    assert!(clock.frame_locked);
    assert_eq!(clock.frames, 1.0);
}

#[test]
fn test_earth_after_one_hundred_frames() {
    let mut app = create_animation_app(true);
    let earth = spawn_planet(&mut app, Planet::new("Earth", 3.0, 0.01));

    for _ in 0..100 {
        app.update();
    }

    let transform = app.world().get::<Transform>(earth).unwrap();
    assert_relative_eq!(transform.translation.x, 1.0f32.cos() * 3.0, epsilon = 1e-4);
    assert_eq!(transform.translation.y, 0.0);
    assert_relative_eq!(transform.translation.z, 1.0f32.sin() * 3.0, epsilon = 1e-4);
}

#[test]
fn test_planets_keep_their_orbit_radius() {
    let mut app = create_animation_app(true);
    let entities: Vec<_> = PLANETS
        .iter()
        .map(|spec| spawn_planet(&mut app, Planet::from(spec)))
        .collect();

    for _ in 0..37 {
        app.update();
    }

    for (spec, entity) in PLANETS.iter().zip(entities) {
        let planet = app.world().get::<Planet>(entity).unwrap();
        let transform = app.world().get::<Transform>(entity).unwrap();
        assert_relative_eq!(planet.angle, spec.speed * 37.0, epsilon = 1e-5);
        assert_relative_eq!(transform.translation.length(), spec.distance, epsilon = 1e-4);
    }
}

#[test]
fn test_wall_clock_mode_tracks_elapsed_time() {
    let mut app = create_animation_app(false);
    app.update();

    std::thread::sleep(std::time::Duration::from_millis(20));
    app.update();

    let clock = app.world().resource::<AnimationClock>();
    assert!(!clock.frame_locked);
    // 20 ms is at least one reference frame at 60 Hz.
    assert!(clock.elapsed_frames >= 1.0, "elapsed {}", clock.elapsed_frames);
}
