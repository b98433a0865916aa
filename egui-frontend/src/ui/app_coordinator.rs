//! # App Coordinator Module
//!
//! This module contains the main application coordination logic, handling the
//! primary update loop and overall application lifecycle.
//!
//! ## Application Flow:
//! 1. Resolve the catalog on the first frame (remote fetch or seed fallback)
//! 2. Complete any simulated delays that have elapsed
//! 3. Render the header, the active screen inside a scroll area, the footer
//! 4. Render the donation modal over everything else
//!
//! The simulated operations are fixed-duration timers, so while any is
//! pending the coordinator schedules a repaint rather than waiting on input.

use eframe::egui;
use std::time::Duration;

use crate::ui::app_state::{HopeForOrphansApp, MainTab};

impl eframe::App for HopeForOrphansApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // One-shot catalog resolution; gates the search section until done
        if self.catalog.loading {
            self.load_initial_data();
        }

        // ESC closes the donation modal (an explicit close, so it resets)
        if self.wizard.is_open() && ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.donation_message = None;
            self.wizard.close();
        }

        self.process_simulated_delays();

        if self.has_pending_delays() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(crate::ui::components::theme::colors::BACKGROUND))
            .show(ctx, |ui| {
                self.render_header(ui);

                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        match self.current_tab {
                            MainTab::Home => self.render_home_screen(ui),
                            MainTab::About => self.render_about_screen(ui),
                            MainTab::Causes => self.render_causes_screen(ui),
                            MainTab::Blog => self.render_blog_screen(ui),
                            MainTab::Contact => self.render_contact_screen(ui),
                            MainTab::Volunteer => self.render_volunteer_screen(ui),
                            MainTab::RequestHelp => self.render_request_help_screen(ui),
                        }

                        self.render_footer(ui);
                    });
            });

        // Modal last so it layers above the screen content
        self.render_donation_modal(ctx);
    }
}
