use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Domain model for a confirmed donation.
/// The amount is whatever the wizard resolved; the flow deliberately applies
/// no positivity or precision checks before confirmation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonationReceipt {
    pub id: String,
    pub category_id: String,
    pub amount: f64,
    pub created_at: DateTime<Utc>,
}

impl DonationReceipt {
    /// Generate a unique receipt ID for a donation
    pub fn generate_id(category_id: &str, timestamp_millis: u64) -> String {
        shared::DonationReceipt::generate_id(category_id, timestamp_millis)
    }
}
