//! # Donation Service
//!
//! Confirms donations coming out of the wizard's payment step. There is no
//! payment processor behind this: confirmation stamps a receipt and succeeds
//! deterministically. The simulated processing delay lives in the UI layer.

use anyhow::Result;
use chrono::Utc;
use log::info;

use crate::backend::domain::commands::donation::{ConfirmDonationCommand, ConfirmDonationResult};
use crate::backend::domain::models::donation::DonationReceipt;
use crate::backend::storage::seed;

/// Service recording confirmed donations
#[derive(Clone, Default)]
pub struct DonationService;

impl DonationService {
    pub fn new() -> Self {
        Self
    }

    /// Confirm a donation against a category.
    ///
    /// The amount is accepted as resolved by the wizard; no positivity check
    /// is applied, matching the flow's permissive design.
    pub fn confirm_donation(&self, command: ConfirmDonationCommand) -> Result<ConfirmDonationResult> {
        info!(
            "Confirming donation: category={}, amount={}",
            command.category_id, command.amount
        );

        let category = seed::donation_categories()
            .into_iter()
            .find(|c| c.id == command.category_id)
            .ok_or_else(|| anyhow::anyhow!("Unknown donation category: {}", command.category_id))?;

        let now = Utc::now();
        let receipt = DonationReceipt {
            id: DonationReceipt::generate_id(&category.id, now.timestamp_millis() as u64),
            category_id: category.id.clone(),
            amount: command.amount,
            created_at: now,
        };

        info!("Recorded donation receipt: {}", receipt.id);

        Ok(ConfirmDonationResult {
            receipt,
            success_message: format!(
                "Your donation has been received. You are helping provide {} to children in need.",
                category.title.to_lowercase()
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_donation_stamps_a_receipt() {
        let service = DonationService::new();

        let result = service
            .confirm_donation(ConfirmDonationCommand {
                category_id: "food".to_string(),
                amount: 25.0,
            })
            .unwrap();

        assert_eq!(result.receipt.category_id, "food");
        assert_eq!(result.receipt.amount, 25.0);
        let (category, _) = shared::DonationReceipt::parse_id(&result.receipt.id).unwrap();
        assert_eq!(category, "food");
        assert!(result.success_message.contains("food & nutrition"));
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let service = DonationService::new();

        let result = service.confirm_donation(ConfirmDonationCommand {
            category_id: "bicycles".to_string(),
            amount: 10.0,
        });

        assert!(result.is_err());
    }

    #[test]
    fn test_zero_amount_is_accepted() {
        // The flow never validates the amount; zero passes through
        let service = DonationService::new();

        let result = service
            .confirm_donation(ConfirmDonationCommand {
                category_id: "funds".to_string(),
                amount: 0.0,
            })
            .unwrap();

        assert_eq!(result.receipt.amount, 0.0);
    }
}
