//! NEO table in the bottom band.
//!
//! Header buttons sort the catalog; clicking a row asks the camera to focus
//! that row's marker, hovering a row highlights it and shows the record's
//! details.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::config::OrreryConfig;
use crate::neo::{FeedStatus, FocusNeo, NeoCatalog, SortColumn, SortState, TableRow, table_rows};
use crate::render::{HoveredNeo, SelectedNeo};
use crate::types::RESERVED_BAND_HEIGHT;

mod colors {
    use bevy_egui::egui::Color32;

    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(14, 16, 24, 235);
    pub const ACTIVE_HEADER: Color32 = Color32::from_rgb(120, 190, 255);
    pub const HAZARD: Color32 = Color32::from_rgb(224, 85, 85);
    pub const SELECTED: Color32 = Color32::from_rgb(255, 230, 50);
}

/// Header text for `column`, with the sort arrow when it is active.
pub fn header_label(column: SortColumn, sort: SortState) -> String {
    match sort.indicator(column) {
        Some(arrow) => format!("{} {arrow}", column.title()),
        None => column.title().to_string(),
    }
}

/// Text shown in place of rows while the catalog has nothing to list.
pub fn placeholder_text(status: &FeedStatus, date: &str) -> Option<String> {
    match status {
        FeedStatus::Idle | FeedStatus::Loading => Some("Loading near-Earth objects…".to_string()),
        FeedStatus::Failed(_) => Some("Near-Earth object data unavailable.".to_string()),
        FeedStatus::Loaded { count: 0 } => Some(format!("No near-Earth objects reported for {date}.")),
        FeedStatus::Loaded { .. } => None,
    }
}

/// System that renders the NEO table.
pub fn neo_table_system(
    mut contexts: EguiContexts,
    mut catalog: ResMut<NeoCatalog>,
    status: Res<FeedStatus>,
    config: Res<OrreryConfig>,
    selected: Res<SelectedNeo>,
    mut hovered: ResMut<HoveredNeo>,
    mut focus_requests: MessageWriter<FocusNeo>,
) {
    let Some(ctx) = contexts.ctx_mut().ok() else {
        return;
    };

    let sort = catalog.sort_state();
    let rows = table_rows(&catalog);
    let placeholder = placeholder_text(&status, &config.feed_date_key());

    let mut clicked_header = None;
    let mut clicked_row = None;
    let mut hovered_row = None;

    egui::TopBottomPanel::bottom("neo_table")
        .exact_height(RESERVED_BAND_HEIGHT)
        .resizable(false)
        .frame(
            egui::Frame::NONE
                .fill(colors::PANEL_BG)
                .inner_margin(egui::Margin::symmetric(12, 6)),
        )
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    egui::Grid::new("neo_grid")
                        .num_columns(SortColumn::ALL.len())
                        .spacing([32.0, 4.0])
                        .striped(true)
                        .show(ui, |ui| {
                            for column in SortColumn::ALL {
                                let active = sort.column == Some(column);
                                let mut text = egui::RichText::new(header_label(column, sort)).strong();
                                if active {
                                    text = text.color(colors::ACTIVE_HEADER);
                                }
                                if ui
                                    .selectable_label(active, text)
                                    .on_hover_text("Sort by this column")
                                    .clicked()
                                {
                                    clicked_header = Some(column);
                                }
                            }
                            ui.end_row();

                            if let Some(text) = &placeholder {
                                ui.label(egui::RichText::new(text).weak().italics());
                                ui.end_row();
                                return;
                            }

                            for row in &rows {
                                let response = render_row(ui, row, selected.0 == Some(row.id));
                                if response.clicked() {
                                    clicked_row = Some(row.id);
                                }
                                if response.hovered() {
                                    hovered_row = Some(row.id);
                                }
                                ui.end_row();
                            }
                        });
                });
        });

    if let Some(column) = clicked_header {
        catalog.sort_by_column(column);
        info!(
            "Sorted NEO table by {} ({})",
            column.title(),
            if catalog.sort_state().ascending { "ascending" } else { "descending" }
        );
    }

    if let Some(id) = clicked_row {
        focus_requests.write(FocusNeo(id));
    }

    if hovered.0 != hovered_row {
        hovered.0 = hovered_row;
    }
}

/// Render one row's cells; the returned response covers the whole row.
fn render_row(ui: &mut egui::Ui, row: &TableRow, selected: bool) -> egui::Response {
    let mut name = egui::RichText::new(row.name.as_str());
    if selected {
        name = name.color(colors::SELECTED).strong();
    }
    let hazardous = if row.hazardous == "Yes" {
        egui::RichText::new(row.hazardous).color(colors::HAZARD)
    } else {
        egui::RichText::new(row.hazardous)
    };

    let cells = [
        ui.add(egui::Label::new(name).sense(egui::Sense::click())),
        ui.add(egui::Label::new(row.miss_distance.as_str()).sense(egui::Sense::click())),
        ui.add(egui::Label::new(row.velocity.as_str()).sense(egui::Sense::click())),
        ui.add(egui::Label::new(hazardous).sense(egui::Sense::click())),
    ];

    let [first, rest @ ..] = cells;
    let response = rest
        .into_iter()
        .fold(first, |row, cell| row | cell)
        .on_hover_cursor(egui::CursorIcon::PointingHand);

    if row.details.is_empty() {
        response
    } else {
        response.on_hover_text(row.details.as_str())
    }
}
