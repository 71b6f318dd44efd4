//! Feed error banner - a non-blocking notice that the NEO feed failed.
//!
//! The banner sits at the top of the window; the 3D view and the table stay
//! interactive underneath it.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::neo::{FeedStatus, FetchError};

/// Resource for banner state.
#[derive(Resource, Default)]
pub struct BannerState {
    /// The user closed the banner for the current failure.
    pub dismissed: bool,
}

/// Colors for banners.
mod colors {
    use bevy_egui::egui::Color32;

    pub const ERROR_BG: Color32 = Color32::from_rgba_premultiplied(80, 30, 30, 240);
    pub const ERROR_BORDER: Color32 = Color32::from_rgb(224, 85, 85);
}

/// Short headline for a fetch failure.
pub fn error_headline(err: &FetchError) -> &'static str {
    match err {
        FetchError::Network(_) => "NETWORK ERROR",
        FetchError::HttpStatus { .. } => "FEED REQUEST REJECTED",
        FetchError::Malformed(_) => "MALFORMED FEED",
        FetchError::MissingDate(_) => "NO DATA FOR DATE",
        FetchError::Io(_) => "FEED FILE UNREADABLE",
    }
}

/// System to render the feed error banner.
pub fn feed_error_banner_system(
    mut contexts: EguiContexts,
    status: Res<FeedStatus>,
    mut banner_state: ResMut<BannerState>,
) {
    let FeedStatus::Failed(err) = &*status else {
        return;
    };
    if banner_state.dismissed {
        return;
    }
    let Some(ctx) = contexts.ctx_mut().ok() else {
        return;
    };

    egui::TopBottomPanel::top("feed_error_banner")
        .frame(
            egui::Frame::NONE
                .fill(colors::ERROR_BG)
                .inner_margin(egui::Margin::symmetric(16, 8))
                .stroke(egui::Stroke::new(1.0, colors::ERROR_BORDER)),
        )
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                ui.label(
                    egui::RichText::new(error_headline(err))
                        .strong()
                        .size(16.0)
                        .color(egui::Color32::WHITE),
                );

                ui.separator();

                ui.label(egui::RichText::new(err.to_string()).size(14.0));

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Dismiss").clicked() {
                        banner_state.dismissed = true;
                    }
                });
            });
        });
}
