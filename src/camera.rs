//! Camera system for the orrery.
//!
//! A perspective camera driven by a damped orbit controller: left-drag
//! rotates around the look-at target, the scroll wheel zooms, and focus
//! requests glide the eye and target toward a marker.
//!
//! The 3D camera renders into a viewport above the table band. The egui
//! context lives on a separate full-window overlay camera so the table can
//! occupy the band itself.

use std::f32::consts::FRAC_PI_2;

use bevy::{
    camera::{ClearColorConfig, Viewport},
    input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll},
    prelude::*,
    window::PrimaryWindow,
};
use bevy_egui::PrimaryEguiContext;

use crate::types::{FrameSet, RESERVED_BAND_HEIGHT};

/// Vertical field of view in degrees.
pub const FIELD_OF_VIEW_DEGREES: f32 = 75.0;

/// Near clipping plane.
pub const NEAR_PLANE: f32 = 0.1;

/// Far clipping plane.
pub const FAR_PLANE: f32 = 1000.0;

/// Starting eye position, looking at the Sun.
pub const INITIAL_CAMERA_POSITION: Vec3 = Vec3::new(0.0, 0.0, 10.0);

/// Fraction of the pending rotation/zoom applied each frame.
pub const DAMPING_FACTOR: f32 = 0.25;

/// Radians of rotation per pixel of drag.
pub const ROTATE_SPEED: f32 = 0.005;

/// Zoom speed multiplier for scroll wheel.
pub const ZOOM_SPEED: f32 = 0.1;

/// Closest the eye may get to the target.
pub const MIN_DISTANCE: f32 = 0.5;

/// Furthest the eye may get from the target.
pub const MAX_DISTANCE: f32 = 500.0;

/// Eye offset from a focused marker: above and behind it.
pub const FOCUS_OFFSET: Vec3 = Vec3::new(0.0, 1.0, 5.0);

/// Exponential approach rate of a focus transition (1/s).
pub const FOCUS_SMOOTH_SPEED: f32 = 6.0;

/// Distance at which a focus transition snaps to its goal.
const FOCUS_SNAP_DISTANCE: f32 = 1e-3;

/// Deltas below this are treated as settled.
const DELTA_EPSILON: f32 = 1e-5;

/// Keep pitch away from the poles so `looking_at` stays well defined.
const MAX_PITCH: f32 = FRAC_PI_2 - 0.01;

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Marker for the full-window camera hosting the egui overlay.
#[derive(Component)]
pub struct UiCamera;

/// Orbit controls with damping.
///
/// Input accumulates into pending deltas; each frame a `damping` fraction of
/// them is applied and the remainder decays, so motion eases out instead of
/// stopping abruptly.
#[derive(Component, Clone, Debug)]
pub struct OrbitController {
    /// Point the camera orbits and looks at.
    pub target: Vec3,
    pub damping: f32,
    yaw_delta: f32,
    pitch_delta: f32,
    zoom_delta: f32,
}

impl OrbitController {
    pub fn new(target: Vec3) -> Self {
        Self {
            target,
            damping: DAMPING_FACTOR,
            yaw_delta: 0.0,
            pitch_delta: 0.0,
            zoom_delta: 0.0,
        }
    }

    /// Queue a rotation in radians.
    pub fn rotate(&mut self, yaw: f32, pitch: f32) {
        self.yaw_delta += yaw;
        self.pitch_delta += pitch;
    }

    /// Queue a zoom; positive values move the eye away from the target.
    pub fn zoom(&mut self, amount: f32) {
        self.zoom_delta += amount;
    }

    /// Whether no rotation or zoom is pending.
    pub fn is_settled(&self) -> bool {
        self.yaw_delta == 0.0 && self.pitch_delta == 0.0 && self.zoom_delta == 0.0
    }

    /// Apply one damping step to `eye` and return the new eye position.
    pub fn step(&mut self, eye: Vec3) -> Vec3 {
        if self.is_settled() {
            return eye;
        }

        let offset = eye - self.target;
        let radius = offset.length().max(MIN_DISTANCE);
        let yaw = offset.x.atan2(offset.z) + self.yaw_delta * self.damping;
        let pitch = ((offset.y / radius).clamp(-1.0, 1.0).asin() + self.pitch_delta * self.damping)
            .clamp(-MAX_PITCH, MAX_PITCH);
        let radius = (radius * (self.zoom_delta * self.damping).exp()).clamp(MIN_DISTANCE, MAX_DISTANCE);

        let decay = 1.0 - self.damping;
        self.yaw_delta = settle(self.yaw_delta * decay);
        self.pitch_delta = settle(self.pitch_delta * decay);
        self.zoom_delta = settle(self.zoom_delta * decay);

        self.target
            + radius * Vec3::new(pitch.cos() * yaw.sin(), pitch.sin(), pitch.cos() * yaw.cos())
    }
}

fn settle(delta: f32) -> f32 {
    if delta.abs() < DELTA_EPSILON { 0.0 } else { delta }
}

/// Resource for smooth camera focus animation.
#[derive(Resource, Clone, Debug)]
pub struct CameraFocus {
    /// Look-at point the controller target glides to.
    pub target: Option<Vec3>,
    /// Position the camera eye glides to.
    pub eye: Option<Vec3>,
    pub smooth_speed: f32,
}

impl Default for CameraFocus {
    fn default() -> Self {
        Self {
            target: None,
            eye: None,
            smooth_speed: FOCUS_SMOOTH_SPEED,
        }
    }
}

impl CameraFocus {
    /// Start a transition that hovers above and behind `point`.
    pub fn focus_on(&mut self, point: Vec3) {
        self.target = Some(point);
        self.eye = Some(point + FOCUS_OFFSET);
    }

    pub fn is_active(&self) -> bool {
        self.target.is_some() || self.eye.is_some()
    }
}

/// Plugin providing camera functionality.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraFocus>()
            .add_systems(Startup, setup_camera)
            .add_systems(
                Update,
                (
                    fit_viewport,
                    orbit_input,
                    apply_camera_focus,
                    update_orbit_controller,
                )
                    .chain()
                    .in_set(FrameSet::Camera),
            );
    }
}

/// Spawn the main camera with perspective projection, plus the UI overlay
/// camera that owns the primary egui context.
///
/// Requires `EguiGlobalSettings::auto_create_primary_context` to be off,
/// otherwise egui attaches to the 3D camera and inherits its viewport.
pub fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: FIELD_OF_VIEW_DEGREES.to_radians(),
            near: NEAR_PLANE,
            far: FAR_PLANE,
            ..default()
        }),
        Transform::from_translation(INITIAL_CAMERA_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
        MainCamera,
        OrbitController::new(Vec3::ZERO),
    ));

    commands.spawn((
        Camera2d,
        Camera {
            order: 1,
            clear_color: ClearColorConfig::None,
            ..default()
        },
        PrimaryEguiContext,
        UiCamera,
    ));
}

/// Physical viewport size once the table band is taken off the bottom.
pub fn viewport_size(window: UVec2, band: u32) -> UVec2 {
    UVec2::new(window.x.max(1), window.y.saturating_sub(band).max(1))
}

/// Keep the 3D viewport above the reserved table band.
///
/// Bevy derives the projection aspect ratio from the viewport, so resizing
/// the viewport is all a window resize needs. The UI camera keeps the whole
/// window.
pub fn fit_viewport(
    windows: Query<&Window, (With<PrimaryWindow>, Changed<Window>)>,
    mut cameras: Query<&mut Camera, With<MainCamera>>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let Ok(mut camera) = cameras.single_mut() else {
        return;
    };

    let band = (RESERVED_BAND_HEIGHT * window.scale_factor()).round() as u32;
    let size = viewport_size(
        UVec2::new(window.physical_width(), window.physical_height()),
        band,
    );

    camera.viewport = Some(Viewport {
        physical_position: UVec2::ZERO,
        physical_size: size,
        ..default()
    });
}

/// Left-drag rotates, scroll zooms. Input over the table band is ignored.
fn orbit_input(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    mouse_scroll: Res<AccumulatedMouseScroll>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut controllers: Query<&mut OrbitController, With<MainCamera>>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    if cursor.y > window.height() - RESERVED_BAND_HEIGHT {
        return;
    }

    let Ok(mut controller) = controllers.single_mut() else {
        return;
    };

    if mouse_buttons.pressed(MouseButton::Left) && mouse_motion.delta != Vec2::ZERO {
        controller.rotate(
            -mouse_motion.delta.x * ROTATE_SPEED,
            mouse_motion.delta.y * ROTATE_SPEED,
        );
    }

    if mouse_scroll.delta.y != 0.0 {
        controller.zoom(-mouse_scroll.delta.y * ZOOM_SPEED);
    }
}

/// Glide the eye and look-at target toward a pending focus.
pub fn apply_camera_focus(
    time: Res<Time>,
    mut focus: ResMut<CameraFocus>,
    mut cameras: Query<(&mut Transform, &mut OrbitController), With<MainCamera>>,
) {
    if !focus.is_active() {
        return;
    }
    let Ok((mut transform, mut controller)) = cameras.single_mut() else {
        return;
    };

    let t = 1.0 - (-focus.smooth_speed * time.delta_secs()).exp();

    if let Some(goal) = focus.target {
        controller.target = controller.target.lerp(goal, t);
        if controller.target.distance(goal) < FOCUS_SNAP_DISTANCE {
            controller.target = goal;
            focus.target = None;
        }
    }

    if let Some(goal) = focus.eye {
        transform.translation = transform.translation.lerp(goal, t);
        if transform.translation.distance(goal) < FOCUS_SNAP_DISTANCE {
            transform.translation = goal;
            focus.eye = None;
        }
    }

    transform.look_at(controller.target, Vec3::Y);
}

/// Advance orbit-control damping and re-aim the camera.
pub fn update_orbit_controller(
    mut cameras: Query<(&mut Transform, &mut OrbitController), With<MainCamera>>,
) {
    for (mut transform, mut controller) in &mut cameras {
        if controller.is_settled() {
            continue;
        }
        transform.translation = controller.step(transform.translation);
        transform.look_at(controller.target, Vec3::Y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_viewport_reserves_band() {
        assert_eq!(viewport_size(UVec2::new(1280, 720), 150), UVec2::new(1280, 570));
    }

    #[test]
    fn test_viewport_never_collapses() {
        assert_eq!(viewport_size(UVec2::new(0, 100), 150), UVec2::new(1, 1));
    }

    #[test]
    fn test_settled_controller_leaves_eye_alone() {
        let mut controller = OrbitController::new(Vec3::ZERO);
        let eye = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(controller.step(eye), eye);
    }

    #[test]
    fn test_rotation_preserves_radius_and_decays() {
        let mut controller = OrbitController::new(Vec3::ZERO);
        controller.rotate(0.4, 0.0);

        let mut eye = INITIAL_CAMERA_POSITION;
        eye = controller.step(eye);
        assert_relative_eq!(eye.length(), 10.0, epsilon = 1e-4);
        // A quarter of the pending yaw is applied on the first step.
        assert_relative_eq!(eye.x.atan2(eye.z), 0.1, epsilon = 1e-4);

        for _ in 0..200 {
            eye = controller.step(eye);
        }
        assert!(controller.is_settled());
        // The geometric series sums to the full requested rotation.
        assert_relative_eq!(eye.x.atan2(eye.z), 0.4, epsilon = 1e-3);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut controller = OrbitController::new(Vec3::ZERO);
        controller.zoom(-100.0);
        let mut eye = INITIAL_CAMERA_POSITION;
        for _ in 0..100 {
            eye = controller.step(eye);
        }
        assert_relative_eq!(eye.length(), MIN_DISTANCE, epsilon = 1e-4);
    }

    #[test]
    fn test_focus_offsets_eye_above_and_behind() {
        let mut focus = CameraFocus::default();
        assert!(!focus.is_active());
        focus.focus_on(Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(focus.target, Some(Vec3::new(2.0, 0.0, 0.0)));
        assert_eq!(focus.eye, Some(Vec3::new(2.0, 1.0, 5.0)));
        assert!(focus.is_active());
    }
}
