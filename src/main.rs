//! NEO Orrery
//!
//! A desktop application showing an animated solar system together with
//! the near-Earth objects NASA reports for a given day.

use bevy::prelude::*;
use bevy_egui::{EguiGlobalSettings, EguiPlugin};
use clap::Parser;

use neo_orrery::camera::CameraPlugin;
use neo_orrery::config::Cli;
use neo_orrery::neo::NeoPlugin;
use neo_orrery::render::RenderPlugin;
use neo_orrery::time::TimePlugin;
use neo_orrery::ui::UiPlugin;

fn main() {
    let config = Cli::parse().into_config().unwrap_or_else(|err| err.exit());

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "NEO Orrery".into(),
                ..default()
            }),
            ..default()
        }))
        // The UI camera spawned by CameraPlugin owns the egui context
        .insert_resource(EguiGlobalSettings {
            auto_create_primary_context: false,
            ..default()
        })
        .add_plugins(EguiPlugin::default())
        .insert_resource(ClearColor(Color::BLACK))
        // Insert resources before plugins that depend on them
        .insert_resource(config)
        .add_plugins((TimePlugin, CameraPlugin, RenderPlugin, NeoPlugin, UiPlugin))
        .run();
}
