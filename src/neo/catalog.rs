//! The shared NEO list and its sort state.
//!
//! Both the table and the 3D markers are derived from [`NeoCatalog`], so any
//! reordering here is picked up by both views in the same frame.

use std::cmp::Ordering;

use bevy::prelude::*;

use super::model::NeoRecord;

/// Stable identifier for a NEO within the current catalog.
///
/// Assigned in fetch order when the catalog is loaded and carried by both
/// the table row and the marker, so sorting never breaks the pairing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NeoId(pub u32);

/// Sortable table columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortColumn {
    Name,
    MissDistance,
    Velocity,
    Hazardous,
}

impl SortColumn {
    /// Columns in table order.
    pub const ALL: [SortColumn; 4] = [
        SortColumn::Name,
        SortColumn::MissDistance,
        SortColumn::Velocity,
        SortColumn::Hazardous,
    ];

    /// Header text.
    pub fn title(self) -> &'static str {
        match self {
            SortColumn::Name => "Name",
            SortColumn::MissDistance => "Miss distance (km)",
            SortColumn::Velocity => "Velocity (km/h)",
            SortColumn::Hazardous => "Hazardous",
        }
    }

    /// Compare two records by this column, ascending.
    ///
    /// Numeric columns parse the feed's decimal strings; records without a
    /// usable value sort after every record that has one.
    pub fn compare(self, a: &NeoRecord, b: &NeoRecord) -> Ordering {
        match self {
            SortColumn::Name => a.name.cmp(&b.name),
            SortColumn::MissDistance => compare_measurement(a.miss_distance_km(), b.miss_distance_km()),
            SortColumn::Velocity => compare_measurement(a.velocity_kmh(), b.velocity_kmh()),
            SortColumn::Hazardous => a
                .is_potentially_hazardous_asteroid
                .cmp(&b.is_potentially_hazardous_asteroid),
        }
    }
}

fn compare_measurement(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Active sort column and direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortState {
    /// `None` until a header is clicked; the catalog keeps fetch order.
    pub column: Option<SortColumn>,
    pub ascending: bool,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            column: None,
            ascending: true,
        }
    }
}

impl SortState {
    /// Same column flips direction; a new column starts ascending.
    pub fn toggle(&mut self, column: SortColumn) {
        if self.column == Some(column) {
            self.ascending = !self.ascending;
        } else {
            self.column = Some(column);
            self.ascending = true;
        }
    }

    /// Direction arrow for `column`'s header, if it is the active one.
    pub fn indicator(&self, column: SortColumn) -> Option<&'static str> {
        (self.column == Some(column)).then_some(if self.ascending { "▲" } else { "▼" })
    }
}

/// A catalog entry: the record plus its stable id.
#[derive(Clone, Debug, PartialEq)]
pub struct NeoEntry {
    pub id: NeoId,
    pub record: NeoRecord,
}

/// Resource holding the NEO list in display order.
#[derive(Resource, Clone, Debug, Default)]
pub struct NeoCatalog {
    entries: Vec<NeoEntry>,
    sort: SortState,
}

impl NeoCatalog {
    pub fn from_records(records: Vec<NeoRecord>) -> Self {
        let mut catalog = Self::default();
        catalog.replace(records);
        catalog
    }

    /// Replace the contents, assigning fresh ids in the given order.
    ///
    /// An active sort is re-applied to the new records.
    pub fn replace(&mut self, records: Vec<NeoRecord>) {
        self.entries = records
            .into_iter()
            .enumerate()
            .map(|(i, record)| NeoEntry {
                id: NeoId(i as u32),
                record,
            })
            .collect();
        self.apply_sort();
    }

    /// Entries in display order.
    pub fn entries(&self) -> &[NeoEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: NeoId) -> Option<&NeoEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Id of the entry shown in `row`, if the row exists.
    pub fn id_at(&self, row: usize) -> Option<NeoId> {
        self.entries.get(row).map(|entry| entry.id)
    }

    pub fn sort_state(&self) -> SortState {
        self.sort
    }

    /// Handle a header click: update the sort state and reorder.
    pub fn sort_by_column(&mut self, column: SortColumn) {
        self.sort.toggle(column);
        self.apply_sort();
        debug!(
            "Sorted {} NEOs by {:?} ({})",
            self.entries.len(),
            column,
            if self.sort.ascending { "ascending" } else { "descending" }
        );
    }

    fn apply_sort(&mut self) {
        let Some(column) = self.sort.column else {
            return;
        };
        let ascending = self.sort.ascending;

        // `sort_by` is stable: equal keys keep their relative order.
        self.entries.sort_by(|a, b| {
            let ordering = column.compare(&a.record, &b.record);
            if ascending { ordering } else { ordering.reverse() }
        });
    }
}
