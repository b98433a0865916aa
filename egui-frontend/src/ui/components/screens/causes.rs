//! # Causes Screen
//!
//! Reuses the donation cards grid; the card grid is where the wizard opens
//! from, so this screen is the donate entry point.

use eframe::egui;

use crate::ui::app_state::HopeForOrphansApp;
use crate::ui::components::screens::render_page_hero;
use crate::ui::components::theme::colors;

impl HopeForOrphansApp {
    /// Render the causes screen
    pub fn render_causes_screen(&mut self, ui: &mut egui::Ui) {
        render_page_hero(
            ui,
            "Our Causes",
            "Choose where you want to make an impact. 100% of your donation goes to the cause.",
        );

        self.render_donation_cards(ui);

        egui::Frame::none()
            .inner_margin(egui::Margin::symmetric(40.0, 32.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new("Why Donate?")
                            .font(egui::FontId::new(22.0, egui::FontFamily::Proportional))
                            .strong()
                            .color(colors::TEXT),
                    );
                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new(
                            "Your contributions provide essential resources to orphanages that \
                             often struggle with funding. Whether it's a hot meal, a warm coat, \
                             or a school book, every item brings hope.",
                        )
                        .color(colors::TEXT_LIGHT),
                    );
                });
            });
    }
}
