//! Domain-level command and query types
//! These structs are used by services inside the domain layer and are **not**
//! exposed to the UI directly. The UI layer maps the public DTOs defined in
//! the `shared` crate to these internal types.

pub mod search {
    use shared::Orphanage;

    /// Query parameters for filtering the orphanage directory.
    #[derive(Debug, Clone, Default)]
    pub struct SearchOrphanagesQuery {
        pub name_query: String,
        pub location_query: String,
    }

    /// Result of a directory search.
    #[derive(Debug, Clone)]
    pub struct SearchOrphanagesResult {
        pub results: Vec<Orphanage>,
    }
}

pub mod donation {
    use crate::backend::domain::models::donation::DonationReceipt;

    /// Input for confirming a donation from the wizard's payment step.
    #[derive(Debug, Clone)]
    pub struct ConfirmDonationCommand {
        pub category_id: String,
        pub amount: f64,
    }

    /// Result of confirming a donation.
    #[derive(Debug, Clone)]
    pub struct ConfirmDonationResult {
        pub receipt: DonationReceipt,
        pub success_message: String,
    }
}

pub mod intake {
    use crate::backend::domain::models::intake::{
        ContactSubmission, HelpRequestSubmission, VolunteerSubmission,
    };

    /// Input for a volunteer application.
    #[derive(Debug, Clone)]
    pub struct VolunteerApplicationCommand {
        pub full_name: String,
        pub email: String,
        pub interest: String,
        pub availability: String,
    }

    /// Result of submitting a volunteer application.
    #[derive(Debug, Clone)]
    pub struct VolunteerApplicationResult {
        pub submission: VolunteerSubmission,
        pub success_message: String,
    }

    /// Input for a help request from an organisation.
    #[derive(Debug, Clone)]
    pub struct HelpRequestCommand {
        pub organisation_name: String,
        pub registration_number: String,
        pub location: String,
        pub contact_person: String,
        pub contact_phone: String,
        pub needs: Vec<String>,
        pub details: String,
    }

    /// Result of submitting a help request.
    #[derive(Debug, Clone)]
    pub struct HelpRequestResult {
        pub submission: HelpRequestSubmission,
        pub success_message: String,
    }

    /// Input for a contact-us message.
    #[derive(Debug, Clone)]
    pub struct ContactMessageCommand {
        pub full_name: String,
        pub email: String,
        pub message: String,
    }

    /// Result of sending a contact message.
    #[derive(Debug, Clone)]
    pub struct ContactMessageResult {
        pub submission: ContactSubmission,
        pub success_message: String,
    }
}
