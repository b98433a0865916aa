//! # Home Screen
//!
//! Composes the landing page from the home sections in order.

use eframe::egui;

use crate::ui::app_state::HopeForOrphansApp;

impl HopeForOrphansApp {
    /// Render the home screen
    pub fn render_home_screen(&mut self, ui: &mut egui::Ui) {
        self.render_hero(ui);
        self.render_donation_cards(ui);
        self.render_search_section(ui);
        self.render_how_it_works(ui);
        self.render_stats_banner(ui);
        self.render_testimonials(ui);
    }
}
