//! UI module providing the egui overlay: the NEO table in the bottom band
//! and the feed error banner.

mod banners;
mod table;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

pub use banners::{BannerState, error_headline};
pub use table::{header_label, placeholder_text};

/// Plugin that adds all UI systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BannerState>().add_systems(
            EguiPrimaryContextPass,
            // Top banner first so the bottom table gets the remaining space
            (banners::feed_error_banner_system, table::neo_table_system).chain(),
        );
    }
}
