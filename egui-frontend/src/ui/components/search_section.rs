//! # Search Section Module
//!
//! The "Find an Orphanage" section: two query fields, the search button, and
//! the results grid. Three result states are rendered: loading the catalog,
//! a populated result list, and the "no results" empty state (distinct from
//! "search not yet performed", which renders nothing).

use eframe::egui;
use shared::Orphanage;

use crate::ui::app_state::HopeForOrphansApp;
use crate::ui::components::theme::colors;
use crate::ui::components::ui_components::{outline_button, primary_button, render_section_title};

impl HopeForOrphansApp {
    /// Render the orphanage search section
    pub fn render_search_section(&mut self, ui: &mut egui::Ui) {
        let frame = egui::Frame::none()
            .fill(colors::SEARCH_TINT)
            .inner_margin(egui::Margin::symmetric(40.0, 40.0));

        frame.show(ui, |ui| {
            ui.set_width(ui.available_width());
            render_section_title(
                ui,
                "Find an Orphanage",
                Some("Locate orphanages near you to visit, volunteer, or donate items directly."),
            );

            // Query form
            egui::Frame::none()
                .fill(colors::SURFACE)
                .rounding(egui::Rounding::same(16.0))
                .inner_margin(egui::Margin::same(20.0))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new("🔍").color(colors::TEXT_LIGHT));
                        ui.add(
                            egui::TextEdit::singleline(&mut self.search.name_query)
                                .hint_text("Search by name...")
                                .desired_width(220.0),
                        );

                        ui.add_space(12.0);

                        ui.label(egui::RichText::new("📍").color(colors::TEXT_LIGHT));
                        ui.add(
                            egui::TextEdit::singleline(&mut self.search.location_query)
                                .hint_text("City or Country")
                                .desired_width(220.0),
                        );

                        ui.add_space(12.0);

                        // Search is gated until the catalog has resolved
                        let ready = !self.catalog.loading && !self.search.is_searching();
                        let label = if self.search.is_searching() {
                            "Searching..."
                        } else {
                            "Search"
                        };
                        let button = primary_button(label, colors::PRIMARY);
                        if ui.add_enabled(ready, button).clicked() {
                            self.search.begin_search();
                        }
                    });
                });

            ui.add_space(16.0);

            if self.catalog.loading && !self.search.has_searched {
                ui.vertical_centered(|ui| {
                    ui.spinner();
                    ui.label(
                        egui::RichText::new("Loading database...").color(colors::TEXT_LIGHT),
                    );
                });
                return;
            }

            if self.search.has_searched && !self.search.is_searching() {
                if self.search.results.is_empty() {
                    self.render_search_empty_state(ui);
                } else {
                    let results = self.search.results.clone();
                    for orphanage in &results {
                        render_result_card(ui, orphanage);
                        ui.add_space(8.0);
                    }
                }
            }
        });
    }

    /// The "no results" branch, with its reset-to-everything escape hatch
    fn render_search_empty_state(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(12.0);
            ui.label(
                egui::RichText::new("No orphanages found")
                    .font(egui::FontId::new(18.0, egui::FontFamily::Proportional))
                    .strong()
                    .color(colors::TEXT),
            );
            ui.label(
                egui::RichText::new(format!(
                    "We couldn't find any matches for \"{} {}\". \
                     Try adjusting your search terms or view all locations.",
                    self.search.name_query, self.search.location_query
                ))
                .color(colors::TEXT_LIGHT),
            );
            ui.add_space(8.0);
            if ui
                .add(outline_button("View All Orphanages", colors::PRIMARY))
                .clicked()
            {
                let all = self.catalog.orphanages.clone();
                self.search.view_all(all);
            }
        });
    }
}

/// Render one orphanage result card
fn render_result_card(ui: &mut egui::Ui, orphanage: &Orphanage) {
    egui::Frame::none()
        .fill(colors::SURFACE)
        .stroke(egui::Stroke::new(1.0, colors::INPUT_BORDER))
        .rounding(egui::Rounding::same(12.0))
        .inner_margin(egui::Margin::same(16.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(&orphanage.name)
                        .font(egui::FontId::new(18.0, egui::FontFamily::Proportional))
                        .strong()
                        .color(colors::TEXT),
                );
                if orphanage.verified {
                    ui.label(egui::RichText::new("✅").color(colors::SUCCESS))
                        .on_hover_text("Verified organisation");
                }
            });

            ui.label(
                egui::RichText::new(format!("📍 {}", orphanage.location))
                    .font(egui::FontId::new(14.0, egui::FontFamily::Proportional))
                    .color(colors::TEXT_LIGHT),
            );

            ui.add_space(4.0);
            ui.label(
                egui::RichText::new(&orphanage.description)
                    .font(egui::FontId::new(14.0, egui::FontFamily::Proportional))
                    .color(colors::TEXT_LIGHT),
            );

            // Up to three need badges
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                for need in orphanage.needs.iter().take(3) {
                    egui::Frame::none()
                        .fill(colors::NEED_BADGE)
                        .rounding(egui::Rounding::same(4.0))
                        .inner_margin(egui::Margin::symmetric(8.0, 4.0))
                        .show(ui, |ui| {
                            ui.label(
                                egui::RichText::new(need)
                                    .font(egui::FontId::new(12.0, egui::FontFamily::Proportional))
                                    .color(colors::PRIMARY_DARK),
                            );
                        });
                }
            });
        });
}
