//! Near-Earth object data: fetching, the shared catalog, and its
//! presentation as table rows and 3D markers.

pub mod catalog;
pub mod fetch;
pub mod format;
pub mod model;
pub mod presenter;

#[cfg(test)]
mod proptest_catalog;

use bevy::prelude::*;

use crate::camera::CameraFocus;
use crate::render::{HoveredNeo, SelectedNeo};
use crate::types::FrameSet;

pub use catalog::{NeoCatalog, NeoEntry, NeoId, SortColumn, SortState};
pub use fetch::{FeedRequest, FeedStatus, FetchError};
pub use model::NeoRecord;
pub use presenter::{FocusNeo, MarkerIndex, NeoMarker, NeoMarkerAssets, TableRow, table_rows};

/// Catalog, markers, and focus handling, without fetching or asset setup.
///
/// Expects `OrreryConfig` and `NeoMarkerAssets` to be present.
pub struct NeoPresenterPlugin;

impl Plugin for NeoPresenterPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<NeoCatalog>()
            .init_resource::<MarkerIndex>()
            .init_resource::<FeedStatus>()
            .init_resource::<CameraFocus>()
            .init_resource::<HoveredNeo>()
            .init_resource::<SelectedNeo>()
            .add_message::<FocusNeo>()
            .add_systems(
                Update,
                (
                    fetch::poll_feed_fetch,
                    presenter::rebuild_markers.run_if(resource_changed::<NeoCatalog>),
                    presenter::focus_on_neo,
                )
                    .chain()
                    .in_set(FrameSet::Present),
            );
    }
}

/// Full NEO feature: marker assets, the startup fetch, and the presenter.
pub struct NeoPlugin;

impl Plugin for NeoPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(NeoPresenterPlugin).add_systems(
            Startup,
            (presenter::setup_marker_assets, fetch::start_feed_fetch),
        );
    }
}
