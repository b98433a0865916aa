//! # Mappers
//!
//! Conversions between the public DTOs in the `shared` crate and the domain
//! layer's internal command/result types. The UI builds request DTOs from its
//! form state, maps them to commands here, and maps service results back to
//! response DTOs (string-dated) for display.

use crate::backend::domain::commands::donation::{ConfirmDonationCommand, ConfirmDonationResult};
use crate::backend::domain::commands::intake::{
    ContactMessageCommand, ContactMessageResult, HelpRequestCommand, HelpRequestResult,
    VolunteerApplicationCommand, VolunteerApplicationResult,
};
use crate::backend::domain::models::donation::DonationReceipt as DomainReceipt;
use shared::{
    ConfirmDonationRequest, ConfirmDonationResponse, ContactMessageRequest,
    ContactMessageResponse, DonationReceipt, HelpRequestRequest, HelpRequestResponse,
    VolunteerApplicationRequest, VolunteerApplicationResponse,
};

/// Convert a domain donation receipt to its DTO form
pub fn to_dto(receipt: &DomainReceipt) -> DonationReceipt {
    DonationReceipt {
        id: receipt.id.clone(),
        category_id: receipt.category_id.clone(),
        amount: receipt.amount,
        created_at: receipt.created_at.to_rfc3339(),
    }
}

pub fn to_donation_command(request: ConfirmDonationRequest) -> ConfirmDonationCommand {
    ConfirmDonationCommand {
        category_id: request.category_id,
        amount: request.amount,
    }
}

pub fn to_donation_response(result: ConfirmDonationResult) -> ConfirmDonationResponse {
    ConfirmDonationResponse {
        receipt: to_dto(&result.receipt),
        success_message: result.success_message,
    }
}

pub fn to_volunteer_command(request: VolunteerApplicationRequest) -> VolunteerApplicationCommand {
    VolunteerApplicationCommand {
        full_name: request.full_name,
        email: request.email,
        interest: request.interest,
        availability: request.availability,
    }
}

pub fn to_volunteer_response(result: VolunteerApplicationResult) -> VolunteerApplicationResponse {
    VolunteerApplicationResponse {
        application_id: result.submission.id,
        success_message: result.success_message,
    }
}

pub fn to_help_request_command(request: HelpRequestRequest) -> HelpRequestCommand {
    HelpRequestCommand {
        organisation_name: request.organisation_name,
        registration_number: request.registration_number,
        location: request.location,
        contact_person: request.contact_person,
        contact_phone: request.contact_phone,
        needs: request.needs,
        details: request.details,
    }
}

pub fn to_help_request_response(result: HelpRequestResult) -> HelpRequestResponse {
    HelpRequestResponse {
        request_id: result.submission.id,
        success_message: result.success_message,
    }
}

pub fn to_contact_command(request: ContactMessageRequest) -> ContactMessageCommand {
    ContactMessageCommand {
        full_name: request.full_name,
        email: request.email,
        message: request.message,
    }
}

pub fn to_contact_response(result: ContactMessageResult) -> ContactMessageResponse {
    ContactMessageResponse {
        message_id: result.submission.id,
        success_message: result.success_message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_receipt_to_dto() {
        let domain = DomainReceipt {
            id: "donation::food::1702516122000".to_string(),
            category_id: "food".to_string(),
            amount: 25.0,
            created_at: Utc.timestamp_millis_opt(1702516122000).unwrap(),
        };

        let dto = to_dto(&domain);
        assert_eq!(dto.id, domain.id);
        assert_eq!(dto.amount, 25.0);
        assert!(dto.created_at.starts_with("2023-12-14T"));
    }

    #[test]
    fn test_help_request_round_trip_preserves_needs() {
        let request = HelpRequestRequest {
            organisation_name: "Sunshine Home".to_string(),
            registration_number: "REG-42".to_string(),
            location: "Nairobi, Kenya".to_string(),
            contact_person: "Jane Doe".to_string(),
            contact_phone: "+254 700 000000".to_string(),
            needs: vec!["Clothing".to_string(), "Financial Aid".to_string()],
            details: String::new(),
        };

        let command = to_help_request_command(request);
        assert_eq!(command.needs, vec!["Clothing", "Financial Aid"]);
    }
}
