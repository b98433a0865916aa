use serde::{Deserialize, Serialize};
use std::fmt;

/// An orphanage or care centre shown in the directory.
///
/// Records are immutable for the lifetime of a fetch cycle: the resolved list
/// comes wholesale from either the remote table or the seed catalog, never a
/// merge of the two.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Orphanage {
    pub id: String,
    pub name: String,
    pub location: String,
    pub description: String,
    /// Current needs, most urgent first
    pub needs: Vec<String>,
    /// Optional image reference (URL or asset key)
    #[serde(default)]
    pub image: Option<String>,
    /// Whether our verification team has vetted this organisation
    pub verified: bool,
}

/// A donation category card (food, clothes, toys, funds).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonationCategory {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Icon key for rendering purposes
    pub icon_name: String,
    /// Accent colour as an RGB hex token, e.g. "#EA580C"
    pub color: String,
}

/// A donor or partner quote shown on the home page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: String,
    pub quote: String,
    pub author: String,
    pub role: String,
}

/// An impact statistic for the home-page banner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub id: String,
    pub label: String,
    pub value: String,
    pub icon_name: String,
}

/// A news post shown on the blog screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    /// Display date, e.g. "12 Oct 2024"
    pub date: String,
    pub category: String,
    pub excerpt: String,
    /// Category tag colour as an RGB hex token
    pub color: String,
}

/// Receipt ID in format: "donation::<category_id>::epoch_millis"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonationReceipt {
    pub id: String,
    /// Category the donation was made against
    pub category_id: String,
    /// Donated amount in GBP
    pub amount: f64,
    /// Human-readable timestamp with timezone (RFC 3339)
    pub created_at: String,
}

/// Request to confirm a donation from the wizard's payment step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfirmDonationRequest {
    pub category_id: String,
    /// Resolved amount (preset or custom); not validated in-flow
    pub amount: f64,
}

/// Response after confirming a donation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfirmDonationResponse {
    pub receipt: DonationReceipt,
    pub success_message: String,
}

/// Request to join the volunteer programme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolunteerApplicationRequest {
    pub full_name: String,
    pub email: String,
    pub interest: String,
    pub availability: String,
}

/// Response after submitting a volunteer application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolunteerApplicationResponse {
    pub application_id: String,
    pub success_message: String,
}

/// Request from an orphanage or care centre registering for support.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HelpRequestRequest {
    pub organisation_name: String,
    pub registration_number: String,
    pub location: String,
    pub contact_person: String,
    pub contact_phone: String,
    /// Selected need categories (independent multi-select)
    pub needs: Vec<String>,
    pub details: String,
}

/// Response after submitting a help request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HelpRequestResponse {
    pub request_id: String,
    pub success_message: String,
}

/// Request from the contact-us form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactMessageRequest {
    pub full_name: String,
    pub email: String,
    pub message: String,
}

/// Response after sending a contact message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactMessageResponse {
    pub message_id: String,
    pub success_message: String,
}

impl DonationReceipt {
    /// Generate receipt ID from category and timestamp
    pub fn generate_id(category_id: &str, epoch_millis: u64) -> String {
        format!("donation::{}::{}", category_id, epoch_millis)
    }

    /// Parse receipt ID to extract components
    pub fn parse_id(id: &str) -> Result<(String, u64), ReceiptIdError> {
        let parts: Vec<&str> = id.split("::").collect();
        if parts.len() != 3 || parts[0] != "donation" {
            return Err(ReceiptIdError::InvalidFormat);
        }

        let category_id = parts[1];
        if category_id.is_empty() {
            return Err(ReceiptIdError::InvalidCategory);
        }

        let epoch_millis = parts[2]
            .parse::<u64>()
            .map_err(|_| ReceiptIdError::InvalidTimestamp)?;

        Ok((category_id.to_string(), epoch_millis))
    }

    /// Extract epoch timestamp from receipt ID for sorting
    pub fn extract_timestamp(&self) -> Result<u64, ReceiptIdError> {
        Self::parse_id(&self.id).map(|(_, timestamp)| timestamp)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReceiptIdError {
    InvalidFormat,
    InvalidCategory,
    InvalidTimestamp,
}

impl fmt::Display for ReceiptIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReceiptIdError::InvalidFormat => write!(f, "Invalid receipt ID format"),
            ReceiptIdError::InvalidCategory => write!(f, "Invalid category in receipt ID"),
            ReceiptIdError::InvalidTimestamp => write!(f, "Invalid timestamp in receipt ID"),
        }
    }
}

impl std::error::Error for ReceiptIdError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_receipt_id() {
        let id = DonationReceipt::generate_id("food", 1702516122000);
        assert_eq!(id, "donation::food::1702516122000");

        let id = DonationReceipt::generate_id("funds", 1702516125000);
        assert_eq!(id, "donation::funds::1702516125000");
    }

    #[test]
    fn test_parse_receipt_id() {
        // Valid ID
        let (category, timestamp) = DonationReceipt::parse_id("donation::clothes::1702516122000").unwrap();
        assert_eq!(category, "clothes");
        assert_eq!(timestamp, 1702516122000);

        // Invalid format
        assert!(DonationReceipt::parse_id("invalid::format").is_err());
        assert!(DonationReceipt::parse_id("donation::food").is_err());
        assert!(DonationReceipt::parse_id("not_donation::food::123").is_err());

        // Empty category
        assert!(DonationReceipt::parse_id("donation::::123").is_err());

        // Invalid timestamp
        assert!(DonationReceipt::parse_id("donation::food::not_a_number").is_err());
    }

    #[test]
    fn test_extract_timestamp() {
        let receipt = DonationReceipt {
            id: "donation::toys::1702516122000".to_string(),
            category_id: "toys".to_string(),
            amount: 25.0,
            created_at: "2023-12-14T01:02:02.000Z".to_string(),
        };

        assert_eq!(receipt.extract_timestamp().unwrap(), 1702516122000);
    }

    #[test]
    fn test_orphanage_deserializes_without_image() {
        // Remote rows may omit the image column entirely
        let json = r#"{
            "id": "1",
            "name": "Sunshine Children's Centre",
            "location": "Nairobi, Kenya",
            "description": "Providing shelter and education to over 50 children.",
            "needs": ["Books", "School Uniforms", "Rice"],
            "verified": true
        }"#;

        let orphanage: Orphanage = serde_json::from_str(json).unwrap();
        assert_eq!(orphanage.name, "Sunshine Children's Centre");
        assert_eq!(orphanage.image, None);
        assert!(orphanage.verified);
    }
}
