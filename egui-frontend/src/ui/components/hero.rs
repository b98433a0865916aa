//! # Hero Module
//!
//! The home-page hero: badge, headline, mission line, and the two primary
//! calls to action.

use eframe::egui;

use crate::ui::app_state::{HopeForOrphansApp, MainTab};
use crate::ui::components::theme::colors;
use crate::ui::components::ui_components::{outline_button, primary_button};

impl HopeForOrphansApp {
    /// Render the home-page hero section
    pub fn render_hero(&mut self, ui: &mut egui::Ui) {
        let frame = egui::Frame::none()
            .fill(colors::PAGE_HERO)
            .inner_margin(egui::Margin::symmetric(40.0, 60.0));

        frame.show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                // Decorative heart above the badge
                ui.label(
                    egui::RichText::new("❤")
                        .font(egui::FontId::new(48.0, egui::FontFamily::Proportional))
                        .color(colors::SECONDARY),
                );
                ui.add_space(4.0);
                ui.label(
                    egui::RichText::new("Hope for Orphans")
                        .font(egui::FontId::new(14.0, egui::FontFamily::Proportional))
                        .strong()
                        .color(colors::PRIMARY),
                );

                ui.add_space(12.0);

                ui.label(
                    egui::RichText::new("Bring a Smile to Every Child's Face")
                        .font(egui::FontId::new(40.0, egui::FontFamily::Proportional))
                        .strong()
                        .color(colors::TEXT),
                );

                ui.add_space(12.0);

                ui.label(
                    egui::RichText::new(
                        "Join our mission to provide food, shelter, and education to orphans \
                         around the world. Your small contribution makes a big impact.",
                    )
                    .font(egui::FontId::new(16.0, egui::FontFamily::Proportional))
                    .color(colors::TEXT_LIGHT),
                );

                ui.add_space(24.0);

                ui.horizontal(|ui| {
                    // Center the button pair
                    let button_width = 150.0;
                    let spacing = 16.0;
                    let total = button_width * 2.0 + spacing;
                    ui.add_space((ui.available_width() - total).max(0.0) / 2.0);

                    if ui.add(primary_button("❤ Donate Now", colors::PRIMARY)).clicked() {
                        self.navigate_to(MainTab::Causes);
                    }
                    ui.add_space(spacing);
                    if ui.add(outline_button("🤝 Request Help", colors::PRIMARY)).clicked() {
                        self.navigate_to(MainTab::RequestHelp);
                    }
                });
            });
        });
    }
}
