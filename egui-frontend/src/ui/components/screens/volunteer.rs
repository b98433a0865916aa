//! # Volunteer Screen
//!
//! Opportunity cards plus the application form and its success state.

use eframe::egui;

use crate::ui::app_state::HopeForOrphansApp;
use crate::ui::components::screens::render_page_hero;
use crate::ui::components::theme::colors;
use crate::ui::components::ui_components::{outline_button, primary_button};

const OPPORTUNITIES: [(&str, &str, &str); 4] = [
    (
        "🎓",
        "Teaching & Tutoring",
        "Help children with homework, language skills, and basic education.",
    ),
    (
        "🩺",
        "Medical Support",
        "Doctors and nurses needed for periodic health check-ups.",
    ),
    (
        "🤝",
        "Care & Play",
        "Spend quality time playing games and organising activities.",
    ),
    (
        "🕐",
        "Event Support",
        "Assist with fundraising events and community awareness drives.",
    ),
];

impl HopeForOrphansApp {
    /// Render the volunteer screen
    pub fn render_volunteer_screen(&mut self, ui: &mut egui::Ui) {
        render_page_hero(
            ui,
            "Volunteer With Us",
            "Give your time and talent to make a lasting difference in a child's life.",
        );

        egui::Frame::none()
            .inner_margin(egui::Margin::symmetric(40.0, 32.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());

                ui.label(
                    egui::RichText::new("Ways to Help")
                        .font(egui::FontId::new(22.0, egui::FontFamily::Proportional))
                        .strong()
                        .color(colors::TEXT),
                );
                ui.add_space(12.0);

                ui.columns(OPPORTUNITIES.len(), |columns| {
                    for (column, (icon, title, description)) in
                        columns.iter_mut().zip(OPPORTUNITIES.iter())
                    {
                        egui::Frame::none()
                            .fill(colors::SURFACE)
                            .stroke(egui::Stroke::new(1.0, colors::INPUT_BORDER))
                            .rounding(egui::Rounding::same(12.0))
                            .inner_margin(egui::Margin::same(14.0))
                            .show(column, |ui| {
                                ui.vertical_centered(|ui| {
                                    ui.label(
                                        egui::RichText::new(*icon).font(egui::FontId::new(
                                            26.0,
                                            egui::FontFamily::Proportional,
                                        )),
                                    );
                                    ui.label(
                                        egui::RichText::new(*title)
                                            .font(egui::FontId::new(
                                                15.0,
                                                egui::FontFamily::Proportional,
                                            ))
                                            .strong()
                                            .color(colors::TEXT),
                                    );
                                    ui.label(
                                        egui::RichText::new(*description)
                                            .font(egui::FontId::new(
                                                12.0,
                                                egui::FontFamily::Proportional,
                                            ))
                                            .color(colors::TEXT_LIGHT),
                                    );
                                });
                            });
                    }
                });

                ui.add_space(24.0);
                self.render_volunteer_form(ui);
            });
    }

    fn render_volunteer_form(&mut self, ui: &mut egui::Ui) {
        egui::Frame::none()
            .fill(colors::SURFACE)
            .stroke(egui::Stroke::new(1.0, colors::INPUT_BORDER))
            .rounding(egui::Rounding::same(12.0))
            .inner_margin(egui::Margin::same(20.0))
            .show(ui, |ui| {
                if self.volunteer_form.submitted {
                    ui.vertical_centered(|ui| {
                        ui.add_space(12.0);
                        ui.label(
                            egui::RichText::new("🤝")
                                .font(egui::FontId::new(44.0, egui::FontFamily::Proportional)),
                        );
                        ui.label(
                            egui::RichText::new("Welcome Aboard!")
                                .font(egui::FontId::new(22.0, egui::FontFamily::Proportional))
                                .strong()
                                .color(colors::TEXT),
                        );
                        let message = self.volunteer_form.success_message.clone().unwrap_or_else(|| {
                            "Thank you for your interest in volunteering. Our coordinator \
                             will reach out to you shortly to schedule an orientation."
                                .to_string()
                        });
                        ui.label(egui::RichText::new(message).color(colors::TEXT_LIGHT));
                        ui.add_space(12.0);
                        if ui
                            .add(outline_button("Back to Home", colors::PRIMARY))
                            .clicked()
                        {
                            self.volunteer_form.reset();
                        }
                    });
                    return;
                }

                ui.label(
                    egui::RichText::new("Volunteer Application")
                        .font(egui::FontId::new(20.0, egui::FontFamily::Proportional))
                        .strong()
                        .color(colors::TEXT),
                );
                ui.label(
                    egui::RichText::new("Fill out the form below to join our community.")
                        .color(colors::TEXT_LIGHT),
                );
                ui.add_space(8.0);

                ui.label(egui::RichText::new("Full Name").color(colors::TEXT_LIGHT));
                ui.add(
                    egui::TextEdit::singleline(&mut self.volunteer_form.full_name)
                        .hint_text("Jane Doe")
                        .desired_width(f32::INFINITY),
                );

                ui.label(egui::RichText::new("Email Address").color(colors::TEXT_LIGHT));
                ui.add(
                    egui::TextEdit::singleline(&mut self.volunteer_form.email)
                        .hint_text("jane@example.com")
                        .desired_width(f32::INFINITY),
                );

                ui.label(egui::RichText::new("Area of Interest").color(colors::TEXT_LIGHT));
                ui.add(
                    egui::TextEdit::singleline(&mut self.volunteer_form.interest)
                        .hint_text("e.g. Teaching, Medical, General")
                        .desired_width(f32::INFINITY),
                );

                ui.label(egui::RichText::new("Availability").color(colors::TEXT_LIGHT));
                ui.add(
                    egui::TextEdit::singleline(&mut self.volunteer_form.availability)
                        .hint_text("e.g. Weekends, Summer")
                        .desired_width(f32::INFINITY),
                );

                ui.add_space(8.0);
                let label = if self.volunteer_form.is_submitting() {
                    "Submitting..."
                } else {
                    "Join the Team"
                };
                let enabled = !self.volunteer_form.is_submitting();
                if ui
                    .add_enabled(enabled, primary_button(label, colors::PRIMARY))
                    .clicked()
                {
                    self.volunteer_form.begin_submit();
                }
            });
    }
}
