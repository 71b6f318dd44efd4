//! Table rows and 3D markers derived from the NEO catalog.
//!
//! Rows are rebuilt by the UI every frame straight from the catalog; markers
//! are rebuilt whenever the catalog changes. Both walk the same ordered
//! entries, and both carry the entry's [`NeoId`], so a row click always
//! finds its own marker through [`MarkerIndex`].

use std::collections::HashMap;

use bevy::prelude::*;

use crate::camera::CameraFocus;
use crate::config::OrreryConfig;
use crate::render::SelectedNeo;
use crate::types::hex_color;

use super::catalog::{NeoCatalog, NeoEntry, NeoId};
use super::format::format_measurement;
use super::model::NeoRecord;

/// Marker sphere radius.
pub const MARKER_RADIUS: f32 = 0.1;

/// Marker color.
pub const MARKER_COLOR: u32 = 0xff0000;

/// Component tagging a marker with the record it represents.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct NeoMarker {
    pub id: NeoId,
    pub name: String,
}

/// Request to move the camera to a NEO's marker.
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct FocusNeo(pub NeoId);

/// Shared mesh and material for every marker.
#[derive(Resource, Clone, Default)]
pub struct NeoMarkerAssets {
    pub mesh: Handle<Mesh>,
    pub material: Handle<StandardMaterial>,
}

/// Resource mapping NEO ids to their marker entities.
#[derive(Resource, Default, Debug)]
pub struct MarkerIndex {
    order: Vec<NeoId>,
    entities: HashMap<NeoId, Entity>,
}

impl MarkerIndex {
    pub fn entity(&self, id: NeoId) -> Option<Entity> {
        self.entities.get(&id).copied()
    }

    /// Marker ids in the order they were built.
    pub fn order(&self) -> &[NeoId] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    fn clear(&mut self) {
        self.order.clear();
        self.entities.clear();
    }

    fn insert(&mut self, id: NeoId, entity: Entity) {
        self.order.push(id);
        self.entities.insert(id, entity);
    }
}

/// One formatted table row.
#[derive(Clone, Debug, PartialEq)]
pub struct TableRow {
    pub id: NeoId,
    pub name: String,
    pub miss_distance: String,
    pub velocity: String,
    pub hazardous: &'static str,
    /// Tooltip text; empty when the record has no extra facts.
    pub details: String,
}

impl TableRow {
    pub fn from_entry(entry: &NeoEntry) -> Self {
        let record = &entry.record;
        Self {
            id: entry.id,
            name: record.name.clone(),
            miss_distance: format_measurement(record.miss_distance_km()),
            velocity: format_measurement(record.velocity_kmh()),
            hazardous: if record.is_potentially_hazardous_asteroid {
                "Yes"
            } else {
                "No"
            },
            details: record.details().join("\n"),
        }
    }
}

/// Rows for every catalog entry, in display order.
pub fn table_rows(catalog: &NeoCatalog) -> Vec<TableRow> {
    catalog.entries().iter().map(TableRow::from_entry).collect()
}

/// Marker position: along +X at the miss distance divided by `scale_km`.
///
/// Records without a usable miss distance sit at the origin.
pub fn marker_position(record: &NeoRecord, scale_km: f64) -> Vec3 {
    let distance = record.miss_distance_km().unwrap_or(0.0) / scale_km;
    Vec3::new(distance as f32, 0.0, 0.0)
}

pub(crate) fn setup_marker_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.insert_resource(NeoMarkerAssets {
        mesh: meshes.add(Sphere::new(MARKER_RADIUS)),
        material: materials.add(StandardMaterial {
            base_color: hex_color(MARKER_COLOR),
            unlit: true,
            ..default()
        }),
    });
}

/// Replace every marker with one per catalog entry, in catalog order.
pub fn rebuild_markers(
    mut commands: Commands,
    catalog: Res<NeoCatalog>,
    config: Res<OrreryConfig>,
    assets: Res<NeoMarkerAssets>,
    mut index: ResMut<MarkerIndex>,
    existing: Query<Entity, With<NeoMarker>>,
) {
    for entity in &existing {
        commands.entity(entity).despawn();
    }
    index.clear();

    for entry in catalog.entries() {
        let entity = commands
            .spawn((
                Mesh3d(assets.mesh.clone()),
                MeshMaterial3d(assets.material.clone()),
                Transform::from_translation(marker_position(&entry.record, config.marker_scale_km)),
                NeoMarker {
                    id: entry.id,
                    name: entry.record.name.clone(),
                },
            ))
            .id();
        index.insert(entry.id, entity);
    }

    debug!("Rebuilt {} NEO markers", index.len());
}

/// Start a camera transition toward each requested marker.
///
/// Ids without a marker are ignored and leave the camera where it is.
pub fn focus_on_neo(
    mut requests: MessageReader<FocusNeo>,
    index: Res<MarkerIndex>,
    markers: Query<&Transform, With<NeoMarker>>,
    mut focus: ResMut<CameraFocus>,
    mut selected: ResMut<SelectedNeo>,
) {
    for FocusNeo(id) in requests.read() {
        let Some(transform) = index.entity(*id).and_then(|e| markers.get(e).ok()) else {
            debug!("No marker for {:?}; ignoring focus request", id);
            continue;
        };
        focus.focus_on(transform.translation);
        selected.0 = Some(*id);
    }
}
