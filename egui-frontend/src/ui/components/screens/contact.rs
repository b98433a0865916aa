//! # Contact Screen
//!
//! Contact details column plus the message form with its simulated send.

use eframe::egui;

use crate::ui::app_state::HopeForOrphansApp;
use crate::ui::components::screens::render_page_hero;
use crate::ui::components::theme::colors;
use crate::ui::components::ui_components::{outline_button, primary_button};

impl HopeForOrphansApp {
    /// Render the contact screen
    pub fn render_contact_screen(&mut self, ui: &mut egui::Ui) {
        render_page_hero(
            ui,
            "Contact Us",
            "We'd love to hear from you. Get in touch with our team.",
        );

        egui::Frame::none()
            .inner_margin(egui::Margin::symmetric(40.0, 32.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.columns(2, |columns| {
                    render_contact_details(&mut columns[0]);
                    self.render_contact_form(&mut columns[1]);
                });
            });
    }

    fn render_contact_form(&mut self, ui: &mut egui::Ui) {
        egui::Frame::none()
            .fill(colors::SURFACE)
            .stroke(egui::Stroke::new(1.0, colors::INPUT_BORDER))
            .rounding(egui::Rounding::same(12.0))
            .inner_margin(egui::Margin::same(20.0))
            .show(ui, |ui| {
                if self.contact_form.submitted {
                    ui.vertical_centered(|ui| {
                        ui.add_space(12.0);
                        ui.label(
                            egui::RichText::new("✅")
                                .font(egui::FontId::new(40.0, egui::FontFamily::Proportional)),
                        );
                        ui.label(
                            egui::RichText::new("Message Sent")
                                .font(egui::FontId::new(20.0, egui::FontFamily::Proportional))
                                .strong()
                                .color(colors::TEXT),
                        );
                        let message = self.contact_form.success_message.clone().unwrap_or_else(
                            || "We will get back to you within 24 hours.".to_string(),
                        );
                        ui.label(egui::RichText::new(message).color(colors::TEXT_LIGHT));
                        ui.add_space(8.0);
                        if ui
                            .add(outline_button("Send Another", colors::PRIMARY))
                            .clicked()
                        {
                            self.contact_form.reset();
                        }
                    });
                    return;
                }

                ui.label(
                    egui::RichText::new("Send a Message")
                        .font(egui::FontId::new(20.0, egui::FontFamily::Proportional))
                        .strong()
                        .color(colors::TEXT),
                );
                ui.add_space(8.0);

                ui.label(egui::RichText::new("Full Name").color(colors::TEXT_LIGHT));
                ui.add(
                    egui::TextEdit::singleline(&mut self.contact_form.full_name)
                        .hint_text("John Doe")
                        .desired_width(f32::INFINITY),
                );

                ui.label(egui::RichText::new("Email Address").color(colors::TEXT_LIGHT));
                ui.add(
                    egui::TextEdit::singleline(&mut self.contact_form.email)
                        .hint_text("john@example.com")
                        .desired_width(f32::INFINITY),
                );

                ui.label(egui::RichText::new("Message").color(colors::TEXT_LIGHT));
                ui.add(
                    egui::TextEdit::multiline(&mut self.contact_form.message)
                        .hint_text("How can we help?")
                        .desired_rows(4)
                        .desired_width(f32::INFINITY),
                );

                ui.add_space(8.0);
                let label = if self.contact_form.is_submitting() {
                    "Sending..."
                } else {
                    "Send Message"
                };
                let enabled = !self.contact_form.is_submitting();
                if ui
                    .add_enabled(enabled, primary_button(label, colors::PRIMARY))
                    .clicked()
                {
                    self.contact_form.begin_submit();
                }
            });
    }
}

fn render_contact_details(ui: &mut egui::Ui) {
    ui.label(
        egui::RichText::new("Get in Touch")
            .font(egui::FontId::new(20.0, egui::FontFamily::Proportional))
            .strong()
            .color(colors::TEXT),
    );
    ui.add_space(8.0);
    ui.label(
        egui::RichText::new(
            "Have questions about our programmes or want to partner with us? Reach out \
             using the details below or fill out the form.",
        )
        .color(colors::TEXT_LIGHT),
    );
    ui.add_space(16.0);

    for (icon, label, value) in [
        ("✉", "Email", "hello@hopefororphans.org"),
        ("📞", "Phone", "+44 20 1234 5678"),
        ("📍", "Office", "123 Charity Lane, London, UK"),
    ] {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(icon).color(colors::PRIMARY));
            ui.vertical(|ui| {
                ui.label(
                    egui::RichText::new(label)
                        .font(egui::FontId::new(12.0, egui::FontFamily::Proportional))
                        .color(colors::TEXT_LIGHT),
                );
                ui.label(egui::RichText::new(value).color(colors::TEXT));
            });
        });
        ui.add_space(8.0);
    }
}
