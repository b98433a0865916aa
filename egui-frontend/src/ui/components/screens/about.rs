//! # About Screen
//!
//! Mission copy and the three core values.

use eframe::egui;

use crate::ui::app_state::HopeForOrphansApp;
use crate::ui::components::screens::render_page_hero;
use crate::ui::components::theme::colors;
use crate::ui::components::ui_components::render_section_title;

const VALUES: [(&str, &str, &str); 3] = [
    (
        "🎯",
        "Transparency",
        "We provide clear reports on how every pound (£) is spent.",
    ),
    (
        "👥",
        "Compassion",
        "We treat every child and partner with dignity and kindness.",
    ),
    (
        "🌍",
        "Sustainability",
        "We focus on long-term solutions, not just quick fixes.",
    ),
];

impl HopeForOrphansApp {
    /// Render the about screen
    pub fn render_about_screen(&mut self, ui: &mut egui::Ui) {
        render_page_hero(ui, "About Us", "Building bridges of hope for children worldwide.");

        egui::Frame::none()
            .inner_margin(egui::Margin::symmetric(40.0, 32.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());

                ui.label(
                    egui::RichText::new("Our Mission")
                        .font(egui::FontId::new(24.0, egui::FontFamily::Proportional))
                        .strong()
                        .color(colors::TEXT),
                );
                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new(
                        "At Hope for Orphans, we believe that every child deserves a safe home, \
                         nutritious food, and quality education. Our mission is to connect \
                         generous donors directly with verified orphanages and care centres that \
                         are doing the hard work on the ground.",
                    )
                    .color(colors::TEXT_LIGHT),
                );
                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new(
                        "Founded in 2020, we have grown from a small local initiative to a global \
                         platform supporting over 120 institutions across 15 countries. We \
                         prioritise transparency, ensuring that your contributions make a \
                         tangible difference.",
                    )
                    .color(colors::TEXT_LIGHT),
                );

                ui.add_space(32.0);
                render_section_title(
                    ui,
                    "Our Core Values",
                    Some("The principles that guide our every action."),
                );

                ui.columns(VALUES.len(), |columns| {
                    for (column, (icon, title, description)) in
                        columns.iter_mut().zip(VALUES.iter())
                    {
                        column.vertical_centered(|ui| {
                            ui.label(
                                egui::RichText::new(*icon)
                                    .font(egui::FontId::new(28.0, egui::FontFamily::Proportional)),
                            );
                            ui.label(
                                egui::RichText::new(*title)
                                    .font(egui::FontId::new(18.0, egui::FontFamily::Proportional))
                                    .strong()
                                    .color(colors::TEXT),
                            );
                            ui.label(
                                egui::RichText::new(*description)
                                    .font(egui::FontId::new(13.0, egui::FontFamily::Proportional))
                                    .color(colors::TEXT_LIGHT),
                            );
                        });
                    }
                });
            });
    }
}
