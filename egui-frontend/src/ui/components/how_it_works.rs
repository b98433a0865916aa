//! # How It Works Module
//!
//! The four-step explainer shown on the home page.

use eframe::egui;

use crate::ui::app_state::HopeForOrphansApp;
use crate::ui::components::theme::colors;
use crate::ui::components::ui_components::render_section_title;

const STEPS: [(&str, &str, &str); 4] = [
    (
        "🖱",
        "Choose a Cause",
        "Browse through our verified orphanages and specific needs.",
    ),
    (
        "💳",
        "Make a Donation",
        "Select an amount or item to donate securely online.",
    ),
    (
        "🎁",
        "We Deliver",
        "Our team ensures your donation reaches the children directly.",
    ),
    (
        "😊",
        "See the Impact",
        "Receive updates and photos of the smiles you created.",
    ),
];

impl HopeForOrphansApp {
    /// Render the how-it-works steps
    pub fn render_how_it_works(&mut self, ui: &mut egui::Ui) {
        let frame = egui::Frame::none()
            .fill(colors::SURFACE)
            .inner_margin(egui::Margin::symmetric(40.0, 40.0));

        frame.show(ui, |ui| {
            ui.set_width(ui.available_width());
            render_section_title(ui, "How It Works", None);

            ui.columns(STEPS.len(), |columns| {
                for (column, (number, (icon, title, description))) in
                    columns.iter_mut().zip(STEPS.iter().enumerate())
                {
                    column.vertical_centered(|ui| {
                        let (rect, _) =
                            ui.allocate_exact_size(egui::vec2(56.0, 56.0), egui::Sense::hover());
                        ui.painter()
                            .rect_filled(rect, egui::Rounding::same(28.0), colors::PAGE_HERO);
                        ui.painter().text(
                            rect.center(),
                            egui::Align2::CENTER_CENTER,
                            *icon,
                            egui::FontId::new(24.0, egui::FontFamily::Proportional),
                            colors::PRIMARY,
                        );

                        ui.add_space(8.0);
                        ui.label(
                            egui::RichText::new(format!("{}. {}", number + 1, title))
                                .font(egui::FontId::new(16.0, egui::FontFamily::Proportional))
                                .strong()
                                .color(colors::TEXT),
                        );
                        ui.add_space(4.0);
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
