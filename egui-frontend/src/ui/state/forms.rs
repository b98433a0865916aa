//! # Intake Form States
//!
//! This module contains the state for the volunteer application, help-request,
//! and contact forms.
//!
//! ## Responsibilities:
//! - Flat text-field state per form
//! - The help-request needs multi-select with independent toggles
//! - Simulated fixed-delay submission flags and the submitted/success flip
//!
//! ## Purpose:
//! Each screen's form state is private to that screen instance and is reset
//! wholesale when the user returns from the success view.

use std::time::{Duration, Instant};

/// Fixed duration of the simulated submission round-trip
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1500);

/// The eight need categories offered on the help-request form
pub const NEED_OPTIONS: [&str; 8] = [
    "Food & Nutrition",
    "Clothing",
    "Education / Books",
    "Medical Supplies",
    "Infrastructure Repair",
    "Volunteer Support",
    "Financial Aid",
    "Toys & Recreation",
];

/// Volunteer application form state
#[derive(Debug, Default)]
pub struct VolunteerFormState {
    pub full_name: String,
    pub email: String,
    pub interest: String,
    pub availability: String,
    pub submit_started: Option<Instant>,
    pub submitted: bool,
    pub success_message: Option<String>,
}

impl VolunteerFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitting(&self) -> bool {
        self.submit_started.is_some()
    }

    pub fn begin_submit(&mut self) {
        if !self.is_submitting() {
            self.submit_started = Some(Instant::now());
        }
    }

    pub fn submit_elapsed(&self) -> bool {
        elapsed(self.submit_started)
    }

    pub fn complete_submit(&mut self, message: String) {
        self.submit_started = None;
        self.submitted = true;
        self.success_message = Some(message);
    }

    /// Return to a blank form from the success view
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Help-request form state
#[derive(Debug, Default)]
pub struct HelpRequestFormState {
    pub organisation_name: String,
    pub registration_number: String,
    pub location: String,
    pub contact_person: String,
    pub contact_phone: String,
    /// Selected need categories, in toggle order
    pub needs: Vec<String>,
    pub details: String,
    pub submit_started: Option<Instant>,
    pub submitted: bool,
    pub success_message: Option<String>,
}

impl HelpRequestFormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle a need on or off independently of the others
    pub fn toggle_need(&mut self, need: &str) {
        if let Some(index) = self.needs.iter().position(|n| n == need) {
            self.needs.remove(index);
        } else {
            self.needs.push(need.to_string());
        }
    }

    pub fn is_need_selected(&self, need: &str) -> bool {
        self.needs.iter().any(|n| n == need)
    }

    pub fn is_submitting(&self) -> bool {
        self.submit_started.is_some()
    }

    pub fn begin_submit(&mut self) {
        if !self.is_submitting() {
            self.submit_started = Some(Instant::now());
        }
    }

    pub fn submit_elapsed(&self) -> bool {
        elapsed(self.submit_started)
    }

    pub fn complete_submit(&mut self, message: String) {
        self.submit_started = None;
        self.submitted = true;
        self.success_message = Some(message);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Contact-us form state
#[derive(Debug, Default)]
pub struct ContactFormState {
    pub full_name: String,
    pub email: String,
    pub message: String,
    pub submit_started: Option<Instant>,
    pub submitted: bool,
    pub success_message: Option<String>,
}

impl ContactFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitting(&self) -> bool {
        self.submit_started.is_some()
    }

    pub fn begin_submit(&mut self) {
        if !self.is_submitting() {
            self.submit_started = Some(Instant::now());
        }
    }

    pub fn submit_elapsed(&self) -> bool {
        elapsed(self.submit_started)
    }

    pub fn complete_submit(&mut self, message: String) {
        self.submit_started = None;
        self.submitted = true;
        self.success_message = Some(message);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn elapsed(started: Option<Instant>) -> bool {
    started
        .map(|instant| instant.elapsed() >= SUBMIT_DELAY)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_needs_toggle_on_and_off() {
        let mut form = HelpRequestFormState::new();

        form.toggle_need("Clothing");
        form.toggle_need("Medical Supplies");
        assert!(form.is_need_selected("Clothing"));
        assert!(form.is_need_selected("Medical Supplies"));
        assert_eq!(form.needs, vec!["Clothing", "Medical Supplies"]);

        // Toggling again removes only that need
        form.toggle_need("Clothing");
        assert!(!form.is_need_selected("Clothing"));
        assert_eq!(form.needs, vec!["Medical Supplies"]);
    }

    #[test]
    fn test_submission_always_reaches_success() {
        let mut form = VolunteerFormState::new();
        form.full_name = "Jane Doe".to_string();

        form.begin_submit();
        assert!(form.is_submitting());

        form.complete_submit("Welcome aboard!".to_string());
        assert!(form.submitted);
        assert!(!form.is_submitting());
        assert_eq!(form.success_message.as_deref(), Some("Welcome aboard!"));
    }

    #[test]
    fn test_reset_returns_to_blank_form() {
        let mut form = ContactFormState::new();
        form.full_name = "John".to_string();
        form.message = "Hello".to_string();
        form.begin_submit();
        form.complete_submit("Sent".to_string());

        form.reset();
        assert!(form.full_name.is_empty());
        assert!(form.message.is_empty());
        assert!(!form.submitted);
        assert!(form.success_message.is_none());
    }

    #[test]
    fn test_begin_submit_is_not_reentrant() {
        let mut form = HelpRequestFormState::new();
        form.begin_submit();
        let first_started = form.submit_started;

        form.begin_submit();
        assert_eq!(form.submit_started, first_started);
    }
}
