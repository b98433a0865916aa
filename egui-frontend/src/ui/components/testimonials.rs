//! # Testimonials Module
//!
//! The "Stories of Hope" cards quoting donors and partners.

use eframe::egui;

use crate::ui::app_state::HopeForOrphansApp;
use crate::ui::components::theme::colors;
use crate::ui::components::ui_components::render_section_title;

impl HopeForOrphansApp {
    /// Render the testimonials grid
    pub fn render_testimonials(&mut self, ui: &mut egui::Ui) {
        let frame = egui::Frame::none()
            .fill(colors::BACKGROUND)
            .inner_margin(egui::Margin::symmetric(40.0, 40.0));

        frame.show(ui, |ui| {
            ui.set_width(ui.available_width());
            render_section_title(
                ui,
                "Stories of Hope",
                Some("Hear from our donors and the communities we serve."),
            );

            let testimonials = self.catalog.testimonials.clone();
            if testimonials.is_empty() {
                return;
            }

            ui.columns(testimonials.len(), |columns| {
                for (column, testimonial) in columns.iter_mut().zip(testimonials.iter()) {
                    egui::Frame::none()
                        .fill(colors::SURFACE)
                        .stroke(egui::Stroke::new(1.0, colors::INPUT_BORDER))
                        .rounding(egui::Rounding::same(12.0))
                        .inner_margin(egui::Margin::same(16.0))
                        .show(column, |ui| {
                            ui.label(
                                egui::RichText::new("❝")
                                    .font(egui::FontId::new(28.0, egui::FontFamily::Proportional))
                                    .color(colors::PRIMARY),
                            );
                            ui.label(
                                egui::RichText::new(format!("\"{}\"", testimonial.quote))
                                    .font(egui::FontId::new(14.0, egui::FontFamily::Proportional))
                                    .italics()
                                    .color(colors::TEXT),
                            );
                            ui.add_space(10.0);
                            ui.horizontal(|ui| {
                                // Initial avatar
                                let (rect, _) = ui.allocate_exact_size(
                                    egui::vec2(36.0, 36.0),
                                    egui::Sense::hover(),
                                );
                                ui.painter().rect_filled(
                                    rect,
                                    egui::Rounding::same(18.0),
                                    colors::PAGE_HERO,
                                );
                                ui.painter().text(
                                    rect.center(),
                                    egui::Align2::CENTER_CENTER,
                                    testimonial.author.chars().next().unwrap_or('?'),
                                    egui::FontId::new(16.0, egui::FontFamily::Proportional),
                                    colors::PRIMARY,
                                );

                                ui.vertical(|ui| {
                                    ui.label(
                                        egui::RichText::new(&testimonial.author)
                                            .strong()
                                            .color(colors::TEXT),
                                    );
                                    ui.label(
                                        egui::RichText::new(&testimonial.role)
                                            .font(egui::FontId::new(
                                                12.0,
                                                egui::FontFamily::Proportional,
                                            ))
                                            .color(colors::TEXT_LIGHT),
                                    );
                                });
                            });
                        });
                }
            });
        });
    }
}
