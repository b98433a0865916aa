//! # Stats Banner Module
//!
//! The impact statistics banner rendered on the primary colour.

use eframe::egui;

use crate::ui::app_state::HopeForOrphansApp;
use crate::ui::components::theme::colors;
use crate::ui::components::ui_components::icon_glyph;

impl HopeForOrphansApp {
    /// Render the impact stats banner
    pub fn render_stats_banner(&mut self, ui: &mut egui::Ui) {
        let frame = egui::Frame::none()
            .fill(colors::PRIMARY)
            .inner_margin(egui::Margin::symmetric(40.0, 40.0));

        frame.show(ui, |ui| {
            ui.set_width(ui.available_width());
            let stats = self.catalog.stats.clone();
            if stats.is_empty() {
                return;
            }

            ui.columns(stats.len(), |columns| {
                for (column, stat) in columns.iter_mut().zip(stats.iter()) {
                    column.vertical_centered(|ui| {
                        ui.label(
                            egui::RichText::new(icon_glyph(&stat.icon_name))
                                .font(egui::FontId::new(32.0, egui::FontFamily::Proportional))
                                .color(colors::WHITE),
                        );
                        ui.label(
                            egui::RichText::new(&stat.value)
                                .font(egui::FontId::new(30.0, egui::FontFamily::Proportional))
                                .strong()
                                .color(colors::WHITE),
                        );
                        ui.label(
                            egui::RichText::new(&stat.label)
                                .font(egui::FontId::new(14.0, egui::FontFamily::Proportional))
                                .color(colors::PAGE_HERO),
                        );
                    });
                }
            });
        });
    }
}
