//! # Request Help Screen
//!
//! Intake form for orphanages and care centres: organisation details, the
//! eight-way needs multi-select, and a free-text details area.

use eframe::egui;

use crate::ui::app_state::HopeForOrphansApp;
use crate::ui::components::screens::render_page_hero;
use crate::ui::components::theme::colors;
use crate::ui::components::ui_components::{outline_button, primary_button};
use crate::ui::state::NEED_OPTIONS;

impl HopeForOrphansApp {
    /// Render the request-help screen
    pub fn render_request_help_screen(&mut self, ui: &mut egui::Ui) {
        render_page_hero(
            ui,
            "Request Help",
            "Are you an orphanage or care centre in need? Register with us to receive support.",
        );

        egui::Frame::none()
            .inner_margin(egui::Margin::symmetric(40.0, 32.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                self.render_help_request_form(ui);
            });
    }

    fn render_help_request_form(&mut self, ui: &mut egui::Ui) {
        egui::Frame::none()
            .fill(colors::SURFACE)
            .stroke(egui::Stroke::new(1.0, colors::INPUT_BORDER))
            .rounding(egui::Rounding::same(12.0))
            .inner_margin(egui::Margin::same(20.0))
            .show(ui, |ui| {
                if self.help_request_form.submitted {
                    ui.vertical_centered(|ui| {
                        ui.add_space(12.0);
                        ui.label(
                            egui::RichText::new("Application Received")
                                .font(egui::FontId::new(22.0, egui::FontFamily::Proportional))
                                .strong()
                                .color(colors::TEXT),
                        );
                        let message = self
                            .help_request_form
                            .success_message
                            .clone()
                            .unwrap_or_else(|| {
                                "Your request has been submitted successfully. Our verification \
                                 team will review your details and contact you within 3-5 \
                                 business days."
                                    .to_string()
                            });
                        ui.label(egui::RichText::new(message).color(colors::TEXT_LIGHT));
                        ui.add_space(12.0);
                        if ui
                            .add(outline_button("Return Home", colors::PRIMARY))
                            .clicked()
                        {
                            self.help_request_form.reset();
                        }
                    });
                    return;
                }

                ui.label(
                    egui::RichText::new("Organisation Details")
                        .font(egui::FontId::new(20.0, egui::FontFamily::Proportional))
                        .strong()
                        .color(colors::TEXT),
                );
                ui.add_space(8.0);

                ui.columns(2, |columns| {
                    columns[0].label(
                        egui::RichText::new("Organisation Name").color(colors::TEXT_LIGHT),
                    );
                    columns[0].add(
                        egui::TextEdit::singleline(&mut self.help_request_form.organisation_name)
                            .hint_text("e.g. Sunshine Home")
                            .desired_width(f32::INFINITY),
                    );

                    columns[1].label(
                        egui::RichText::new("Registration Number").color(colors::TEXT_LIGHT),
                    );
                    columns[1].add(
                        egui::TextEdit::singleline(&mut self.help_request_form.registration_number)
                            .hint_text("Govt. Reg. No.")
                            .desired_width(f32::INFINITY),
                    );
                });

                ui.label(egui::RichText::new("Location / Address").color(colors::TEXT_LIGHT));
                ui.add(
                    egui::TextEdit::singleline(&mut self.help_request_form.location)
                        .hint_text("Full address including city and country")
                        .desired_width(f32::INFINITY),
                );

                ui.columns(2, |columns| {
                    columns[0].label(
                        egui::RichText::new("Contact Person").color(colors::TEXT_LIGHT),
                    );
                    columns[0].add(
                        egui::TextEdit::singleline(&mut self.help_request_form.contact_person)
                            .hint_text("Director Name")
                            .desired_width(f32::INFINITY),
                    );

                    columns[1].label(
                        egui::RichText::new("Contact Phone").color(colors::TEXT_LIGHT),
                    );
                    columns[1].add(
                        egui::TextEdit::singleline(&mut self.help_request_form.contact_phone)
                            .hint_text("+1 234...")
                            .desired_width(f32::INFINITY),
                    );
                });

                ui.separator();

                ui.label(
                    egui::RichText::new("Current Needs")
                        .font(egui::FontId::new(20.0, egui::FontFamily::Proportional))
                        .strong()
                        .color(colors::TEXT),
                );
                ui.label(
                    egui::RichText::new("Select all that apply to your current situation:")
                        .color(colors::TEXT_LIGHT),
                );
                ui.add_space(4.0);

                // Two columns of four checkboxes; each toggles independently
                ui.columns(2, |columns| {
                    for (index, need) in NEED_OPTIONS.iter().enumerate() {
                        let column = &mut columns[index / 4];
                        let mut checked = self.help_request_form.is_need_selected(need);
                        if column.checkbox(&mut checked, *need).changed() {
                            self.help_request_form.toggle_need(need);
                        }
                    }
                });

                ui.add_space(8.0);
                ui.label(egui::RichText::new("Additional Details").color(colors::TEXT_LIGHT));
                ui.add(
                    egui::TextEdit::multiline(&mut self.help_request_form.details)
                        .hint_text("Tell us more about your specific requirements...")
                        .desired_rows(4)
                        .desired_width(f32::INFINITY),
                );

                ui.add_space(8.0);
                let label = if self.help_request_form.is_submitting() {
                    "Submitting..."
                } else {
                    "Submit Application"
                };
                let enabled = !self.help_request_form.is_submitting();
                if ui
                    .add_enabled(enabled, primary_button(label, colors::PRIMARY))
                    .clicked()
                {
                    self.help_request_form.begin_submit();
                }
            });
    }
}
