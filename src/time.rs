//! Frame clock for the animation loop.
//!
//! Converts wall-clock frame time into reference-frame steps so planet and
//! sun motion keep the same pace regardless of display refresh rate.

use bevy::prelude::*;

use crate::config::OrreryConfig;
use crate::types::{FrameSet, REFERENCE_FRAME_RATE};

/// Plugin providing the animation clock.
pub struct TimePlugin;

impl Plugin for TimePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AnimationClock>()
            .configure_sets(
                Update,
                (
                    FrameSet::Clock,
                    FrameSet::Animate,
                    FrameSet::Present,
                    FrameSet::Camera,
                )
                    .chain(),
            )
            .add_systems(Startup, configure_clock)
            .add_systems(Update, advance_clock.in_set(FrameSet::Clock));
    }
}

/// Resource tracking animation progress in reference frames.
#[derive(Resource, Clone, Debug, Default)]
pub struct AnimationClock {
    /// Step one reference frame per update regardless of elapsed time.
    pub frame_locked: bool,
    /// Reference frames covered by the current update.
    pub frames: f32,
    /// Reference frames elapsed since startup.
    pub elapsed_frames: f64,
}

impl AnimationClock {
    /// Reference frames represented by an update lasting `delta_secs`.
    pub fn frames_for(&self, delta_secs: f32) -> f32 {
        if self.frame_locked {
            1.0
        } else {
            delta_secs * REFERENCE_FRAME_RATE
        }
    }

    /// Record an update lasting `delta_secs`.
    pub fn tick(&mut self, delta_secs: f32) {
        self.frames = self.frames_for(delta_secs);
        self.elapsed_frames += self.frames as f64;
    }
}

fn configure_clock(config: Option<Res<OrreryConfig>>, mut clock: ResMut<AnimationClock>) {
    if let Some(config) = config {
        clock.frame_locked = config.frame_locked;
    }
}

fn advance_clock(mut clock: ResMut<AnimationClock>, time: Res<Time>) {
    clock.tick(time.delta_secs());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wall_clock_steps_scale_with_delta() {
        let mut clock = AnimationClock::default();
        clock.tick(0.5);
        assert_eq!(clock.frames, 30.0);
        clock.tick(1.0 / 120.0);
        assert!((clock.frames - 0.5).abs() < 1e-6);
        assert!((clock.elapsed_frames - 30.5).abs() < 1e-4);
    }

    #[test]
    fn test_frame_locked_ignores_delta() {
        let mut clock = AnimationClock {
            frame_locked: true,
            ..default()
        };
        clock.tick(0.25);
        clock.tick(0.0);
        assert_eq!(clock.frames, 1.0);
        assert_eq!(clock.elapsed_frames, 2.0);
    }
}
