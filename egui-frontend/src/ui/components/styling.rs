//! # App Styling
//!
//! Global egui style setup: light visuals over the warm cream background,
//! rounded widgets, and readable default text colours.

use eframe::egui;

use crate::ui::components::theme::colors;

/// Apply the app-wide style to the egui context. Called once at startup.
pub fn setup_app_style(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    let mut visuals = egui::Visuals::light();
    visuals.panel_fill = colors::BACKGROUND;
    visuals.window_fill = colors::SURFACE;
    visuals.override_text_color = Some(colors::TEXT);
    visuals.widgets.noninteractive.rounding = egui::Rounding::same(8.0);
    visuals.widgets.inactive.rounding = egui::Rounding::same(8.0);
    visuals.widgets.hovered.rounding = egui::Rounding::same(8.0);
    visuals.widgets.active.rounding = egui::Rounding::same(8.0);
    visuals.widgets.inactive.bg_stroke = egui::Stroke::new(1.0, colors::INPUT_BORDER);

    style.visuals = visuals;
    style.spacing.item_spacing = egui::vec2(8.0, 8.0);
    style.spacing.button_padding = egui::vec2(14.0, 8.0);

    ctx.set_style(style);
}
