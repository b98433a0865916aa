//! # Screens
//!
//! One module per navigable screen. Each screen renders a page hero followed
//! by its content sections; the footer is appended by the coordinator.

pub mod about;
pub mod blog;
pub mod causes;
pub mod contact;
pub mod home;
pub mod request_help;
pub mod volunteer;

use eframe::egui;

use crate::ui::components::theme::colors;

/// Render the tinted page hero used by the secondary screens
pub fn render_page_hero(ui: &mut egui::Ui, title: &str, subtitle: &str) {
    egui::Frame::none()
        .fill(colors::PAGE_HERO)
        .inner_margin(egui::Margin::symmetric(20.0, 48.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(title)
                        .font(egui::FontId::new(32.0, egui::FontFamily::Proportional))
                        .strong()
                        .color(colors::TEXT),
                );
                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new(subtitle)
                        .font(egui::FontId::new(16.0, egui::FontFamily::Proportional))
                        .color(colors::TEXT_LIGHT),
                );
            });
        });
}
