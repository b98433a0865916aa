//! # Header Module
//!
//! Top navigation bar: logo, one link per screen, and the donate
//! call-to-action. Replaces the original router with tab navigation.

use eframe::egui;

use crate::ui::app_state::{HopeForOrphansApp, MainTab};
use crate::ui::components::theme::colors;
use crate::ui::components::ui_components::primary_button;

impl HopeForOrphansApp {
    /// Render the navigation header
    pub fn render_header(&mut self, ui: &mut egui::Ui) {
        let frame = egui::Frame::none()
            .fill(colors::SURFACE)
            .inner_margin(egui::Margin::symmetric(20.0, 12.0));

        frame.show(ui, |ui| {
            ui.horizontal(|ui| {
                // Logo
                ui.label(
                    egui::RichText::new("❤ Hope for Orphans")
                        .font(egui::FontId::new(20.0, egui::FontFamily::Proportional))
                        .strong()
                        .color(colors::PRIMARY),
                );

                ui.add_space(24.0);

                // Navigation links
                let mut navigate_to = None;
                for tab in MainTab::ALL {
                    let active = self.current_tab == tab;
                    let text = if active {
                        egui::RichText::new(tab.label())
                            .strong()
                            .color(colors::PRIMARY)
                    } else {
                        egui::RichText::new(tab.label()).color(colors::TEXT_LIGHT)
                    };

                    if ui
                        .add(egui::Label::new(text).sense(egui::Sense::click()))
                        .on_hover_cursor(egui::CursorIcon::PointingHand)
                        .clicked()
                    {
                        navigate_to = Some(tab);
                    }

                    ui.add_space(8.0);
                }

                if let Some(tab) = navigate_to {
                    self.navigate_to(tab);
                }

                // Donate call-to-action on the right
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.add(primary_button("Donate", colors::PRIMARY)).clicked() {
                        self.navigate_to(MainTab::Causes);
                    }
                });
            });
        });

        // Thin divider under the header
        let rect = ui.available_rect_before_wrap();
        let line = egui::Rect::from_min_size(rect.min, egui::vec2(rect.width(), 1.0));
        ui.painter().rect_filled(line, egui::Rounding::ZERO, colors::BORDER);
    }
}
