//! # Donation Modal
//!
//! This module renders the donation wizard over whichever screen is active.
//!
//! ## Responsibilities:
//! - Amount step: preset grid and the custom amount field
//! - Payment step: resolved amount summary, mock payment method, confirm
//! - Success step: thank-you view with the explicit close
//!
//! ## Purpose:
//! All flow decisions live in `DonationWizardState`; this module only reads
//! wizard fields and calls its named transitions, so the modal stays a thin
//! view over the state machine.

use eframe::egui;

use crate::ui::app_state::HopeForOrphansApp;
use crate::ui::components::theme::{colors, hex_color};
use crate::ui::components::ui_components::{outline_button, primary_button};
use crate::ui::state::{WizardStep, PRESET_AMOUNTS};

impl HopeForOrphansApp {
    /// Render the donation wizard modal if it is open
    pub fn render_donation_modal(&mut self, ctx: &egui::Context) {
        let Some(category) = self.wizard.category.clone() else {
            return;
        };
        let accent = hex_color(&category.color);

        egui::Area::new(egui::Id::new("donation_modal_overlay"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                // Dark semi-transparent backdrop
                let screen_rect = ctx.screen_rect();
                ui.painter().rect_filled(
                    screen_rect,
                    egui::Rounding::ZERO,
                    egui::Color32::from_rgba_unmultiplied(0, 0, 0, 128),
                );

                ui.allocate_ui_at_rect(screen_rect, |ui| {
                    ui.centered_and_justified(|ui| {
                        egui::Frame::window(&ui.style())
                            .fill(colors::SURFACE)
                            .rounding(egui::Rounding::same(16.0))
                            .inner_margin(egui::Margin::same(0.0))
                            .show(ui, |ui| {
                                ui.set_min_size(egui::vec2(460.0, 420.0));
                                ui.set_max_size(egui::vec2(460.0, 420.0));

                                ui.vertical(|ui| {
                                    // Coloured header with title and close button
                                    egui::Frame::none()
                                        .fill(accent)
                                        .inner_margin(egui::Margin::same(16.0))
                                        .show(ui, |ui| {
                                            ui.horizontal(|ui| {
                                                ui.label(
                                                    egui::RichText::new(format!(
                                                        "Donate to {}",
                                                        category.title
                                                    ))
                                                    .font(egui::FontId::new(
                                                        18.0,
                                                        egui::FontFamily::Proportional,
                                                    ))
                                                    .strong()
                                                    .color(colors::WHITE),
                                                );
                                                ui.with_layout(
                                                    egui::Layout::right_to_left(
                                                        egui::Align::Center,
                                                    ),
                                                    |ui| {
                                                        let close = egui::Label::new(
                                                            egui::RichText::new("✖")
                                                                .color(colors::WHITE),
                                                        )
                                                        .sense(egui::Sense::click());
                                                        if ui.add(close).clicked() {
                                                            self.wizard.close();
                                                        }
                                                    },
                                                );
                                            });
                                        });

                                    egui::Frame::none()
                                        .inner_margin(egui::Margin::same(20.0))
                                        .show(ui, |ui| match self.wizard.step {
                                            WizardStep::Amount => {
                                                self.render_amount_step(ui, accent)
                                            }
                                            WizardStep::Payment => {
                                                self.render_payment_step(ui, accent)
                                            }
                                            WizardStep::Success => {
                                                self.render_success_step(ui, accent, &category.title)
                                            }
                                        });
                                });
                            });
                    });
                });
            });
    }

    fn render_amount_step(&mut self, ui: &mut egui::Ui, accent: egui::Color32) {
        ui.label(
            egui::RichText::new("Select Amount (GBP)")
                .strong()
                .color(colors::TEXT_LIGHT),
        );
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            for preset in PRESET_AMOUNTS {
                let selected = self.wizard.preset == Some(preset);
                let (fill, stroke, text_color) = if selected {
                    (accent.gamma_multiply(0.1), accent, accent)
                } else {
                    (
                        egui::Color32::TRANSPARENT,
                        colors::INPUT_BORDER,
                        colors::TEXT,
                    )
                };

                let button = egui::Button::new(
                    egui::RichText::new(format!("£{}", preset))
                        .font(egui::FontId::new(16.0, egui::FontFamily::Proportional))
                        .color(text_color),
                )
                .fill(fill)
                .stroke(egui::Stroke::new(1.5, stroke))
                .rounding(egui::Rounding::same(8.0))
                .min_size(egui::vec2(90.0, 44.0));

                if ui.add(button).clicked() {
                    self.wizard.select_preset(preset);
                }
            }
        });

        ui.add_space(12.0);
        ui.label(
            egui::RichText::new("Or Enter Custom Amount")
                .strong()
                .color(colors::TEXT_LIGHT),
        );
        ui.add_space(4.0);

        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new("£")
                    .font(egui::FontId::new(18.0, egui::FontFamily::Proportional))
                    .color(colors::TEXT_LIGHT),
            );
            let mut custom = self.wizard.custom_amount.clone();
            let response = ui.add(
                egui::TextEdit::singleline(&mut custom)
                    .hint_text("0.00")
                    .desired_width(200.0),
            );
            if response.changed() {
                // Any edit routes through the transition so the preset clears
                self.wizard.edit_custom(custom);
            }
        });

        ui.add_space(20.0);
        if ui.add(primary_button("Continue", accent)).clicked() {
            self.wizard.continue_to_payment();
        }
    }

    fn render_payment_step(&mut self, ui: &mut egui::Ui, accent: egui::Color32) {
        // Amount summary
        egui::Frame::none()
            .fill(colors::BACKGROUND)
            .rounding(egui::Rounding::same(8.0))
            .inner_margin(egui::Margin::same(16.0))
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new("Total Donation").color(colors::TEXT_LIGHT),
                    );
                    ui.label(
                        egui::RichText::new(format!("£{}", self.wizard.resolved_amount_label()))
                            .font(egui::FontId::new(32.0, egui::FontFamily::Proportional))
                            .strong()
                            .color(accent),
                    );
                });
            });

        ui.add_space(12.0);
        ui.label(
            egui::RichText::new("Payment Method")
                .strong()
                .color(colors::TEXT_LIGHT),
        );
        ui.add_space(4.0);

        // Fixed mock payment method
        egui::Frame::none()
            .stroke(egui::Stroke::new(1.0, colors::INPUT_BORDER))
            .rounding(egui::Rounding::same(8.0))
            .inner_margin(egui::Margin::same(12.0))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("💳").color(colors::TEXT));
                    ui.label(
                        egui::RichText::new("Card ending in •••• 4242").color(colors::TEXT),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new("Change").strong().color(colors::PRIMARY),
                        );
                    });
                });
            });

        ui.add_space(20.0);

        let processing = self.wizard.is_processing();
        let label = if processing {
            "Processing..."
        } else {
            "❤ Confirm Donation"
        };
        if ui
            .add_enabled(!processing, primary_button(label, accent))
            .clicked()
        {
            self.wizard.begin_processing();
        }

        ui.add_space(8.0);
        let back = egui::Label::new(
            egui::RichText::new("Back to Amount")
                .underline()
                .color(colors::TEXT_LIGHT),
        )
        .sense(egui::Sense::click());
        if ui.add(back).clicked() {
            self.wizard.back_to_amount();
        }
    }

    fn render_success_step(
        &mut self,
        ui: &mut egui::Ui,
        accent: egui::Color32,
        category_title: &str,
    ) {
        ui.vertical_centered(|ui| {
            ui.add_space(12.0);
            ui.label(
                egui::RichText::new("✅")
                    .font(egui::FontId::new(52.0, egui::FontFamily::Proportional))
                    .color(colors::SUCCESS),
            );
            ui.label(
                egui::RichText::new("Thank You!")
                    .font(egui::FontId::new(24.0, egui::FontFamily::Proportional))
                    .strong()
                    .color(colors::TEXT),
            );
            ui.add_space(8.0);

            let message = self.donation_message.clone().unwrap_or_else(|| {
                format!(
                    "Your donation has been received. You are helping provide {} to children in need.",
                    category_title.to_lowercase()
                )
            });
            ui.label(egui::RichText::new(message).color(colors::TEXT_LIGHT));

            if let Some(receipt) = &self.last_donation {
                ui.add_space(6.0);
                ui.label(
                    egui::RichText::new(format!("Receipt: {}", receipt.id))
                        .font(egui::FontId::new(11.0, egui::FontFamily::Proportional))
                        .color(colors::TEXT_LIGHT),
                );
            }

            ui.add_space(16.0);
            if ui.add(outline_button("Close", accent)).clicked() {
                self.donation_message = None;
                self.wizard.close();
            }
        });
    }
}
