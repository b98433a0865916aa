//! # Blog Screen
//!
//! News post cards with category tags and dates.

use eframe::egui;

use crate::ui::app_state::HopeForOrphansApp;
use crate::ui::components::screens::render_page_hero;
use crate::ui::components::theme::{colors, hex_color};

impl HopeForOrphansApp {
    /// Render the blog screen
    pub fn render_blog_screen(&mut self, ui: &mut egui::Ui) {
        render_page_hero(
            ui,
            "Latest News",
            "Updates, success stories, and reports from the field.",
        );

        egui::Frame::none()
            .inner_margin(egui::Margin::symmetric(40.0, 32.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                let posts = self.catalog.blog_posts.clone();
                if posts.is_empty() {
                    return;
                }

                ui.columns(posts.len(), |columns| {
                    for (column, post) in columns.iter_mut().zip(posts.iter()) {
                        let tag_color = hex_color(&post.color);

                        egui::Frame::none()
                            .fill(colors::SURFACE)
                            .stroke(egui::Stroke::new(1.0, colors::INPUT_BORDER))
                            .rounding(egui::Rounding::same(12.0))
                            .inner_margin(egui::Margin::same(16.0))
                            .show(column, |ui| {
                                // Category tag
                                egui::Frame::none()
                                    .fill(tag_color)
                                    .rounding(egui::Rounding::same(4.0))
                                    .inner_margin(egui::Margin::symmetric(8.0, 4.0))
                                    .show(ui, |ui| {
                                        ui.label(
                                            egui::RichText::new(&post.category)
                                                .font(egui::FontId::new(
                                                    12.0,
                                                    egui::FontFamily::Proportional,
                                                ))
                                                .color(colors::WHITE),
                                        );
                                    });

                                ui.add_space(8.0);
                                ui.label(
                                    egui::RichText::new(format!("📅 {}", post.date))
                                        .font(egui::FontId::new(12.0, egui::FontFamily::Proportional))
                                        .color(colors::TEXT_LIGHT),
                                );
                                ui.label(
                                    egui::RichText::new(&post.title)
                                        .font(egui::FontId::new(17.0, egui::FontFamily::Proportional))
                                        .strong()
                                        .color(colors::TEXT),
                                );
                                ui.add_space(4.0);
                                ui.label(
                                    egui::RichText::new(&post.excerpt)
                                        .font(egui::FontId::new(13.0, egui::FontFamily::Proportional))
                                        .color(colors::TEXT_LIGHT),
                                );
                                ui.add_space(8.0);
                                ui.label(
                                    egui::RichText::new("Read Full Story →")
                                        .font(egui::FontId::new(13.0, egui::FontFamily::Proportional))
                                        .strong()
                                        .color(colors::PRIMARY),
                                );
                            });
                    }
                });
            });
    }
}
