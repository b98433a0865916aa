//! # Footer Module
//!
//! Bottom-of-page footer: mission line, quick links into the other screens,
//! and contact details.

use eframe::egui;

use crate::ui::app_state::{HopeForOrphansApp, MainTab};
use crate::ui::components::theme::colors;

impl HopeForOrphansApp {
    /// Render the footer shown at the bottom of every screen
    pub fn render_footer(&mut self, ui: &mut egui::Ui) {
        let frame = egui::Frame::none()
            .fill(colors::TEXT)
            .inner_margin(egui::Margin::symmetric(40.0, 32.0));

        frame.show(ui, |ui| {
            ui.set_width(ui.available_width());
            let mut navigate_to = None;

            ui.columns(3, |columns| {
                columns[0].vertical(|ui| {
                    ui.label(
                        egui::RichText::new("Hope for Orphans")
                            .font(egui::FontId::new(18.0, egui::FontFamily::Proportional))
                            .strong()
                            .color(colors::WHITE),
                    );
                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new(
                            "Connecting generous hearts with children in need. \
                             Together, we can build a brighter future.",
                        )
                        .color(colors::BORDER),
                    );
                });

                columns[1].vertical(|ui| {
                    ui.label(
                        egui::RichText::new("Quick Links")
                            .strong()
                            .color(colors::WHITE),
                    );
                    ui.add_space(6.0);
                    for (label, tab) in [
                        ("About Us", MainTab::About),
                        ("Our Causes", MainTab::Causes),
                        ("Volunteer", MainTab::Volunteer),
                        ("Blog", MainTab::Blog),
                        ("Request Help", MainTab::RequestHelp),
                    ] {
                        let link = egui::Label::new(
                            egui::RichText::new(label).color(colors::BORDER),
                        )
                        .sense(egui::Sense::click());
                        if ui
                            .add(link)
                            .on_hover_cursor(egui::CursorIcon::PointingHand)
                            .clicked()
                        {
                            navigate_to = Some(tab);
                        }
                    }
                });

                columns[2].vertical(|ui| {
                    ui.label(
                        egui::RichText::new("Contact")
                            .strong()
                            .color(colors::WHITE),
                    );
                    ui.add_space(6.0);
                    ui.label(egui::RichText::new("✉ hello@hopefororphans.org").color(colors::BORDER));
                    ui.label(egui::RichText::new("📞 +44 20 1234 5678").color(colors::BORDER));
                    ui.label(egui::RichText::new("📍 123 Charity Lane, London, UK").color(colors::BORDER));
                });
            });

            if let Some(tab) = navigate_to {
                self.navigate_to(tab);
            }

            ui.add_space(16.0);
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new("© 2024 Hope for Orphans. All rights reserved.")
                        .font(egui::FontId::new(12.0, egui::FontFamily::Proportional))
                        .color(colors::BORDER),
                );
            });
        });
    }
}
