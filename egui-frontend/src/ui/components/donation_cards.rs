//! # Donation Cards Module
//!
//! The "Ways to Help" grid of donation category cards. Each card's donate
//! button opens the donation wizard for that category.

use eframe::egui;
use shared::DonationCategory;

use crate::ui::app_state::HopeForOrphansApp;
use crate::ui::components::theme::{colors, hex_color};
use crate::ui::components::ui_components::{icon_glyph, outline_button, render_section_title};

impl HopeForOrphansApp {
    /// Render the donation category grid
    pub fn render_donation_cards(&mut self, ui: &mut egui::Ui) {
        let frame = egui::Frame::none()
            .fill(colors::SURFACE)
            .inner_margin(egui::Margin::symmetric(40.0, 40.0));

        frame.show(ui, |ui| {
            ui.set_width(ui.available_width());
            render_section_title(
                ui,
                "Ways to Help",
                Some("Choose a category to make a direct impact on a child's life today."),
            );

            let categories = self.catalog.categories.clone();
            let mut open_category: Option<DonationCategory> = None;

            ui.columns(categories.len().max(1), |columns| {
                for (column, category) in columns.iter_mut().zip(categories.iter()) {
                    if render_category_card(column, category) {
                        open_category = Some(category.clone());
                    }
                }
            });

            if let Some(category) = open_category {
                self.wizard.open(category);
            }
        });
    }
}

/// Render one category card; returns true when its donate button is pressed
fn render_category_card(ui: &mut egui::Ui, category: &DonationCategory) -> bool {
    let accent = hex_color(&category.color);
    let mut clicked = false;

    egui::Frame::none()
        .fill(colors::SURFACE)
        .stroke(egui::Stroke::new(1.0, colors::INPUT_BORDER))
        .rounding(egui::Rounding::same(12.0))
        .inner_margin(egui::Margin::same(16.0))
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                // Icon badge in the category colour
                let (rect, _) = ui.allocate_exact_size(egui::vec2(56.0, 56.0), egui::Sense::hover());
                ui.painter().rect_filled(rect, egui::Rounding::same(28.0), accent);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    icon_glyph(&category.icon_name),
                    egui::FontId::new(24.0, egui::FontFamily::Proportional),
                    colors::WHITE,
                );

                ui.add_space(10.0);
                ui.label(
                    egui::RichText::new(&category.title)
                        .font(egui::FontId::new(18.0, egui::FontFamily::Proportional))
                        .strong()
                        .color(colors::TEXT),
                );
                ui.add_space(4.0);
                ui.label(
                    egui::RichText::new(&category.description)
                        .font(egui::FontId::new(13.0, egui::FontFamily::Proportional))
                        .color(colors::TEXT_LIGHT),
                );
                ui.add_space(12.0);

                if ui.add(outline_button("Donate", accent)).clicked() {
                    clicked = true;
                }
            });
        });

    clicked
}
