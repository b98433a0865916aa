//! # Donation Wizard State
//!
//! This module contains the donation modal's three-step flow as an explicit
//! state machine, mutated only through named transition functions.
//!
//! ## Responsibilities:
//! - Step progression (Amount -> Payment -> Success)
//! - Preset/custom amount selection (mutually exclusive)
//! - Simulated processing phase with a duplicate-submit guard
//! - Close-and-reset back to defaults
//!
//! ## Purpose:
//! Keeping the flow here makes the wizard independently testable without
//! rendering anything; the modal component only reads fields and calls
//! transitions.

use shared::DonationCategory;
use std::time::{Duration, Instant};

/// Fixed preset amounts offered on the amount step (GBP)
pub const PRESET_AMOUNTS: [u32; 4] = [10, 25, 50, 100];

/// Default preset selected when the wizard opens or resets
pub const DEFAULT_PRESET: u32 = 25;

/// Fixed duration of the simulated payment confirmation
pub const PROCESSING_DELAY: Duration = Duration::from_millis(1500);

/// Steps of the donation flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Amount,
    Payment,
    Success,
}

/// State for the donation modal flow
#[derive(Debug)]
pub struct DonationWizardState {
    /// Category being donated to; None while the modal is closed
    pub category: Option<DonationCategory>,

    /// Current step of the flow
    pub step: WizardStep,

    /// Selected preset amount; cleared when the custom field is edited
    pub preset: Option<u32>,

    /// Free-text custom amount; cleared when a preset is selected
    pub custom_amount: String,

    /// When the simulated confirmation started; Some while pending
    pub processing_started: Option<Instant>,
}

impl DonationWizardState {
    /// Create a closed wizard with default selections
    pub fn new() -> Self {
        Self {
            category: None,
            step: WizardStep::Amount,
            preset: Some(DEFAULT_PRESET),
            custom_amount: String::new(),
            processing_started: None,
        }
    }

    /// Whether the modal is visible
    pub fn is_open(&self) -> bool {
        self.category.is_some()
    }

    /// Whether the simulated confirmation is pending
    pub fn is_processing(&self) -> bool {
        self.processing_started.is_some()
    }

    /// Open the wizard for a category, starting from the amount step
    pub fn open(&mut self, category: DonationCategory) {
        self.reset_fields();
        self.category = Some(category);
    }

    /// Select a preset amount, clearing any custom text
    pub fn select_preset(&mut self, value: u32) {
        self.preset = Some(value);
        self.custom_amount.clear();
    }

    /// Replace the custom amount text, clearing the preset selection.
    /// Any edit clears the preset, including clearing the field itself.
    pub fn edit_custom(&mut self, text: String) {
        self.custom_amount = text;
        self.preset = None;
    }

    /// Display label for the resolved amount: preset, else custom, else "0"
    pub fn resolved_amount_label(&self) -> String {
        if let Some(preset) = self.preset {
            preset.to_string()
        } else if !self.custom_amount.is_empty() {
            self.custom_amount.clone()
        } else {
            "0".to_string()
        }
    }

    /// Numeric resolved amount. Non-numeric custom text resolves to 0.0;
    /// nothing in the flow rejects it.
    pub fn resolved_amount(&self) -> f64 {
        if let Some(preset) = self.preset {
            preset as f64
        } else {
            self.custom_amount.trim().parse().unwrap_or(0.0)
        }
    }

    /// Advance from the amount step. Unconditional: the flow deliberately
    /// does not require a positive amount.
    pub fn continue_to_payment(&mut self) {
        if self.step == WizardStep::Amount {
            self.step = WizardStep::Payment;
        }
    }

    /// Return to the amount step, keeping the current selection.
    /// Ignored while a confirmation is pending.
    pub fn back_to_amount(&mut self) {
        if self.step == WizardStep::Payment && !self.is_processing() {
            self.step = WizardStep::Amount;
        }
    }

    /// Start the simulated confirmation. No-op while one is already pending,
    /// so a second press cannot double-submit.
    pub fn begin_processing(&mut self) {
        if self.step == WizardStep::Payment && !self.is_processing() {
            self.processing_started = Some(Instant::now());
        }
    }

    /// Finish the simulated confirmation and show the success step
    pub fn complete_processing(&mut self) {
        if self.is_processing() {
            self.processing_started = None;
            self.step = WizardStep::Success;
        }
    }

    /// Whether the pending confirmation's fixed delay has elapsed
    pub fn processing_elapsed(&self) -> bool {
        self.processing_started
            .map(|started| started.elapsed() >= PROCESSING_DELAY)
            .unwrap_or(false)
    }

    /// Close the modal and reset every field to its default
    pub fn close(&mut self) {
        self.reset_fields();
        self.category = None;
    }

    fn reset_fields(&mut self) {
        self.step = WizardStep::Amount;
        self.preset = Some(DEFAULT_PRESET);
        self.custom_amount.clear();
        self.processing_started = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_category() -> DonationCategory {
        DonationCategory {
            id: "food".to_string(),
            title: "Food & Nutrition".to_string(),
            description: "Provide healthy meals for a day, week, or month.".to_string(),
            icon_name: "Utensils".to_string(),
            color: "#EA580C".to_string(),
        }
    }

    #[test]
    fn test_opens_on_amount_step_with_default_preset() {
        let mut wizard = DonationWizardState::new();
        assert!(!wizard.is_open());

        wizard.open(test_category());
        assert!(wizard.is_open());
        assert_eq!(wizard.step, WizardStep::Amount);
        assert_eq!(wizard.preset, Some(DEFAULT_PRESET));
        assert!(wizard.custom_amount.is_empty());
    }

    #[test]
    fn test_custom_text_clears_preset() {
        let mut wizard = DonationWizardState::new();
        wizard.open(test_category());

        wizard.select_preset(50);
        assert_eq!(wizard.preset, Some(50));

        wizard.edit_custom("7".to_string());
        assert_eq!(wizard.preset, None);
        assert_eq!(wizard.custom_amount, "7");
    }

    #[test]
    fn test_preset_clears_custom_text() {
        let mut wizard = DonationWizardState::new();
        wizard.open(test_category());

        wizard.edit_custom("25".to_string());
        wizard.select_preset(25);
        assert_eq!(wizard.preset, Some(25));
        assert!(wizard.custom_amount.is_empty());
    }

    #[test]
    fn test_resolved_amount_prefers_preset_then_custom_then_zero() {
        let mut wizard = DonationWizardState::new();
        wizard.open(test_category());

        assert_eq!(wizard.resolved_amount_label(), "25");
        assert_eq!(wizard.resolved_amount(), 25.0);

        wizard.edit_custom("12.50".to_string());
        assert_eq!(wizard.resolved_amount_label(), "12.50");
        assert_eq!(wizard.resolved_amount(), 12.5);

        wizard.edit_custom(String::new());
        assert_eq!(wizard.resolved_amount_label(), "0");
        assert_eq!(wizard.resolved_amount(), 0.0);
    }

    #[test]
    fn test_non_numeric_custom_amount_resolves_to_zero() {
        let mut wizard = DonationWizardState::new();
        wizard.open(test_category());

        wizard.edit_custom("lots".to_string());
        assert_eq!(wizard.resolved_amount_label(), "lots");
        assert_eq!(wizard.resolved_amount(), 0.0);
    }

    #[test]
    fn test_continue_is_unconditional() {
        let mut wizard = DonationWizardState::new();
        wizard.open(test_category());

        // Clear everything; progression is still allowed
        wizard.edit_custom(String::new());
        wizard.continue_to_payment();
        assert_eq!(wizard.step, WizardStep::Payment);
    }

    #[test]
    fn test_back_preserves_the_selection() {
        let mut wizard = DonationWizardState::new();
        wizard.open(test_category());

        wizard.select_preset(100);
        wizard.continue_to_payment();
        wizard.back_to_amount();

        assert_eq!(wizard.step, WizardStep::Amount);
        assert_eq!(wizard.preset, Some(100));
    }

    #[test]
    fn test_processing_guards_duplicate_submission() {
        let mut wizard = DonationWizardState::new();
        wizard.open(test_category());
        wizard.continue_to_payment();

        wizard.begin_processing();
        assert!(wizard.is_processing());
        let first_started = wizard.processing_started;

        // A second press must not restart the pending confirmation
        wizard.begin_processing();
        assert_eq!(wizard.processing_started, first_started);

        // Back is ignored while pending
        wizard.back_to_amount();
        assert_eq!(wizard.step, WizardStep::Payment);

        wizard.complete_processing();
        assert_eq!(wizard.step, WizardStep::Success);
        assert!(!wizard.is_processing());
    }

    #[test]
    fn test_close_from_success_resets_defaults() {
        let mut wizard = DonationWizardState::new();
        wizard.open(test_category());

        wizard.select_preset(100);
        wizard.edit_custom("42".to_string());
        wizard.continue_to_payment();
        wizard.begin_processing();
        wizard.complete_processing();
        assert_eq!(wizard.step, WizardStep::Success);

        wizard.close();
        assert!(!wizard.is_open());

        wizard.open(test_category());
        assert_eq!(wizard.step, WizardStep::Amount);
        assert_eq!(wizard.preset, Some(25));
        assert_eq!(wizard.custom_amount, "");
    }
}
