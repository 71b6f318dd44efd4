//! Common test utilities for integration tests.

#![allow(dead_code)]

use bevy::prelude::*;
use neo_orrery::config::OrreryConfig;
use neo_orrery::neo::{MarkerIndex, NeoCatalog, NeoId, NeoMarker, NeoMarkerAssets, NeoPresenterPlugin, NeoRecord};

/// Headless app with the NEO presenter and default configuration.
pub fn presenter_app() -> App {
    presenter_app_with(OrreryConfig::default())
}

/// Headless app with the NEO presenter and the given configuration.
pub fn presenter_app_with(config: OrreryConfig) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(config)
        .insert_resource(NeoMarkerAssets::default())
        .add_plugins(NeoPresenterPlugin);
    app
}

/// The two-record list used throughout the sorting scenarios.
pub fn two_neos() -> Vec<NeoRecord> {
    vec![
        NeoRecord::new("A", "500000", "30000.5", true),
        NeoRecord::new("B", "100000", "60000", false),
    ]
}

/// A handful of records with distinct keys in every column.
pub fn five_neos() -> Vec<NeoRecord> {
    vec![
        NeoRecord::new("(2024 TB)", "4825213.25", "40118.55", false),
        NeoRecord::new("(2019 UO13)", "46893251.39", "95771.99", true),
        NeoRecord::new("(2024 SZ5)", "2190331.8", "21034.1", false),
        NeoRecord::new("(2010 VB1)", "30120040.07", "70100.0", true),
        NeoRecord::new("(2024 TE)", "8213401.0", "12990.6", false),
    ]
}

/// Replace the catalog contents and run one frame.
pub fn load_catalog(app: &mut App, records: Vec<NeoRecord>) {
    app.world_mut().resource_mut::<NeoCatalog>().replace(records);
    app.update();
}

/// Catalog ids in display (row) order.
pub fn row_ids(app: &App) -> Vec<NeoId> {
    app.world()
        .resource::<NeoCatalog>()
        .entries()
        .iter()
        .map(|e| e.id)
        .collect()
}

/// Marker ids in build order.
pub fn marker_ids(app: &App) -> Vec<NeoId> {
    app.world().resource::<MarkerIndex>().order().to_vec()
}

/// Every live marker with its position.
pub fn live_markers(app: &mut App) -> Vec<(NeoMarker, Vec3)> {
    let mut query = app.world_mut().query::<(&NeoMarker, &Transform)>();
    query
        .iter(app.world())
        .map(|(marker, transform)| (marker.clone(), transform.translation))
        .collect()
}

/// A trimmed NeoWs feed with one populated date.
pub const SAMPLE_FEED: &str = r#"{
    "element_count": 2,
    "near_earth_objects": {
        "2024-10-06": [
            {
                "id": "54486771",
                "name": "(2024 TB)",
                "is_potentially_hazardous_asteroid": false,
                "close_approach_data": [{
                    "close_approach_date": "2024-10-06",
                    "relative_velocity": {"kilometers_per_hour": "40118.5512083567"},
                    "miss_distance": {"kilometers": "4825213.251734446"},
                    "orbiting_body": "Earth"
                }]
            },
            {
                "id": "3893836",
                "name": "(2019 UO13)",
                "is_potentially_hazardous_asteroid": true,
                "close_approach_data": [{
                    "relative_velocity": {"kilometers_per_hour": "95771.9902107832"},
                    "miss_distance": {"kilometers": "46893251.394398423"}
                }]
            }
        ]
    }
}"#;
