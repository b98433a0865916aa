use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Domain model for a submitted volunteer application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolunteerSubmission {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub interest: String,
    pub availability: String,
    pub submitted_at: DateTime<Utc>,
}

impl VolunteerSubmission {
    /// Generate a unique ID for a volunteer application
    pub fn generate_id(timestamp_millis: u64) -> String {
        format!("volunteer::{}", timestamp_millis)
    }
}

/// Domain model for a help request from an orphanage or care centre
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HelpRequestSubmission {
    pub id: String,
    pub organisation_name: String,
    pub registration_number: String,
    pub location: String,
    pub contact_person: String,
    pub contact_phone: String,
    /// Selected need categories, in toggle order
    pub needs: Vec<String>,
    pub details: String,
    pub submitted_at: DateTime<Utc>,
}

impl HelpRequestSubmission {
    /// Generate a unique ID for a help request
    pub fn generate_id(timestamp_millis: u64) -> String {
        format!("help::{}", timestamp_millis)
    }
}

/// Domain model for a contact-us message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

impl ContactSubmission {
    /// Generate a unique ID for a contact message
    pub fn generate_id(timestamp_millis: u64) -> String {
        format!("contact::{}", timestamp_millis)
    }
}
