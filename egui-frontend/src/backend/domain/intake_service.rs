//! # Intake Service
//!
//! Receives volunteer applications, help requests, and contact messages.
//! Submissions are stamped and accepted unconditionally: the intake flows
//! model no failure path and apply no field validation, so whatever the form
//! holds is what gets recorded.

use anyhow::Result;
use chrono::Utc;
use log::info;

use crate::backend::domain::commands::intake::{
    ContactMessageCommand, ContactMessageResult, HelpRequestCommand, HelpRequestResult,
    VolunteerApplicationCommand, VolunteerApplicationResult,
};
use crate::backend::domain::models::intake::{
    ContactSubmission, HelpRequestSubmission, VolunteerSubmission,
};

/// Service accepting intake submissions
#[derive(Clone, Default)]
pub struct IntakeService;

impl IntakeService {
    pub fn new() -> Self {
        Self
    }

    /// Accept a volunteer application
    pub fn submit_volunteer_application(
        &self,
        command: VolunteerApplicationCommand,
    ) -> Result<VolunteerApplicationResult> {
        info!("Volunteer application from {:?}", command.full_name);

        let now = Utc::now();
        let submission = VolunteerSubmission {
            id: VolunteerSubmission::generate_id(now.timestamp_millis() as u64),
            full_name: command.full_name,
            email: command.email,
            interest: command.interest,
            availability: command.availability,
            submitted_at: now,
        };

        info!("Accepted volunteer application: {}", submission.id);

        Ok(VolunteerApplicationResult {
            submission,
            success_message: "Thank you for your interest in volunteering. Our coordinator will \
                reach out to you shortly to schedule an orientation."
                .to_string(),
        })
    }

    /// Accept a help request from an organisation
    pub fn submit_help_request(&self, command: HelpRequestCommand) -> Result<HelpRequestResult> {
        info!(
            "Help request from {:?} listing {} needs",
            command.organisation_name,
            command.needs.len()
        );

        let now = Utc::now();
        let submission = HelpRequestSubmission {
            id: HelpRequestSubmission::generate_id(now.timestamp_millis() as u64),
            organisation_name: command.organisation_name,
            registration_number: command.registration_number,
            location: command.location,
            contact_person: command.contact_person,
            contact_phone: command.contact_phone,
            needs: command.needs,
            details: command.details,
            submitted_at: now,
        };

        info!("Accepted help request: {}", submission.id);

        Ok(HelpRequestResult {
            submission,
            success_message: "Your request has been submitted successfully. Our verification team \
                will review your details and contact you within 3-5 business days."
                .to_string(),
        })
    }

    /// Accept a contact-us message
    pub fn submit_contact_message(
        &self,
        command: ContactMessageCommand,
    ) -> Result<ContactMessageResult> {
        info!("Contact message from {:?}", command.full_name);

        let now = Utc::now();
        let submission = ContactSubmission {
            id: ContactSubmission::generate_id(now.timestamp_millis() as u64),
            full_name: command.full_name,
            email: command.email,
            message: command.message,
            submitted_at: now,
        };

        info!("Accepted contact message: {}", submission.id);

        Ok(ContactMessageResult {
            submission,
            success_message: "Message sent! We will get back to you within 24 hours.".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volunteer_application_always_succeeds() {
        let service = IntakeService::new();

        // Empty fields are accepted as-is; intake applies no validation
        let result = service
            .submit_volunteer_application(VolunteerApplicationCommand {
                full_name: String::new(),
                email: String::new(),
                interest: String::new(),
                availability: String::new(),
            })
            .unwrap();

        assert!(result.submission.id.starts_with("volunteer::"));
        assert!(!result.success_message.is_empty());
    }

    #[test]
    fn test_help_request_preserves_selected_needs() {
        let service = IntakeService::new();

        let result = service
            .submit_help_request(HelpRequestCommand {
                organisation_name: "Sunshine Home".to_string(),
                registration_number: "REG-42".to_string(),
                location: "Nairobi, Kenya".to_string(),
                contact_person: "Jane Doe".to_string(),
                contact_phone: "+254 700 000000".to_string(),
                needs: vec!["Food & Nutrition".to_string(), "Medical Supplies".to_string()],
                details: "Roof repairs before the rainy season.".to_string(),
            })
            .unwrap();

        assert!(result.submission.id.starts_with("help::"));
        assert_eq!(result.submission.needs.len(), 2);
        assert_eq!(result.submission.needs[1], "Medical Supplies");
    }

    #[test]
    fn test_contact_message_is_stamped() {
        let service = IntakeService::new();

        let result = service
            .submit_contact_message(ContactMessageCommand {
                full_name: "John Doe".to_string(),
                email: "john@example.com".to_string(),
                message: "How can I partner with you?".to_string(),
            })
            .unwrap();

        assert!(result.submission.id.starts_with("contact::"));
        assert_eq!(result.submission.email, "john@example.com");
    }
}
