//! # Data Loading Module
//!
//! This module handles the one-shot catalog load on first frame and drives
//! the simulated fixed-delay operations to completion.
//!
//! ## Key Functions:
//! - `load_initial_data()` - Resolve the catalog (remote or seed fallback)
//! - `process_simulated_delays()` - Complete pending search/donation/intake
//!   operations once their fixed delays elapse
//!
//! ## Purpose:
//! The fetch-or-fallback resolution runs before the search section can be
//! used; the loading flag cleared here is what un-gates the search button.
//! Completions build request DTOs from screen state, map them to domain
//! commands, and put the response messages back into screen state.

use log::{info, warn};

use crate::backend::domain::commands::search::SearchOrphanagesQuery;
use crate::ui::app_state::HopeForOrphansApp;
use crate::ui::mappers;
use shared::{
    ConfirmDonationRequest, ContactMessageRequest, HelpRequestRequest,
    VolunteerApplicationRequest,
};

impl HopeForOrphansApp {
    /// Load the catalog once, on the first frame
    pub fn load_initial_data(&mut self) {
        info!("Loading catalog data");

        self.catalog.orphanages = self.backend.catalog_service.load_orphanages();
        self.catalog.categories = self.backend.catalog_service.donation_categories();
        self.catalog.testimonials = self.backend.catalog_service.testimonials();
        self.catalog.stats = self.backend.catalog_service.stats();
        self.catalog.blog_posts = self.backend.catalog_service.blog_posts();
        self.catalog.loading = false;

        info!(
            "Catalog ready: {} orphanages, {} categories",
            self.catalog.orphanages.len(),
            self.catalog.categories.len()
        );
    }

    /// Complete whichever simulated operations have run out their delay
    pub fn process_simulated_delays(&mut self) {
        if self.search.is_searching() && self.search.search_elapsed() {
            self.complete_pending_search();
        }

        if self.wizard.is_processing() && self.wizard.processing_elapsed() {
            self.complete_pending_donation();
        }

        if self.volunteer_form.is_submitting() && self.volunteer_form.submit_elapsed() {
            self.complete_pending_volunteer_application();
        }

        if self.help_request_form.is_submitting() && self.help_request_form.submit_elapsed() {
            self.complete_pending_help_request();
        }

        if self.contact_form.is_submitting() && self.contact_form.submit_elapsed() {
            self.complete_pending_contact_message();
        }
    }

    /// Whether any simulated operation is waiting on its delay
    pub fn has_pending_delays(&self) -> bool {
        self.search.is_searching()
            || self.wizard.is_processing()
            || self.volunteer_form.is_submitting()
            || self.help_request_form.is_submitting()
            || self.contact_form.is_submitting()
    }

    fn complete_pending_search(&mut self) {
        let query = SearchOrphanagesQuery {
            name_query: self.search.name_query.clone(),
            location_query: self.search.location_query.clone(),
        };

        match self
            .backend
            .catalog_service
            .search_orphanages(query, &self.catalog.orphanages)
        {
            Ok(result) => self.search.complete_search(result.results),
            Err(e) => {
                // The filter itself cannot fail; finish with no matches
                warn!("Search failed: {}", e);
                self.search.complete_search(Vec::new());
            }
        }
    }

    fn complete_pending_donation(&mut self) {
        let Some(category) = self.wizard.category.clone() else {
            return;
        };

        let request = ConfirmDonationRequest {
            category_id: category.id,
            amount: self.wizard.resolved_amount(),
        };

        match self
            .backend
            .donation_service
            .confirm_donation(mappers::to_donation_command(request))
        {
            Ok(result) => {
                let response = mappers::to_donation_response(result);
                self.last_donation = Some(response.receipt);
                self.donation_message = Some(response.success_message);
            }
            Err(e) => {
                // Unknown category can only mean catalog drift; still show success
                warn!("Donation confirmation failed: {}", e);
            }
        }

        self.wizard.complete_processing();
    }

    fn complete_pending_volunteer_application(&mut self) {
        let request = VolunteerApplicationRequest {
            full_name: self.volunteer_form.full_name.clone(),
            email: self.volunteer_form.email.clone(),
            interest: self.volunteer_form.interest.clone(),
            availability: self.volunteer_form.availability.clone(),
        };

        match self
            .backend
            .intake_service
            .submit_volunteer_application(mappers::to_volunteer_command(request))
        {
            Ok(result) => {
                let response = mappers::to_volunteer_response(result);
                info!("Volunteer application {} accepted", response.application_id);
                self.volunteer_form.complete_submit(response.success_message);
            }
            Err(e) => {
                warn!("Volunteer application failed: {}", e);
                self.volunteer_form.reset();
            }
        }
    }

    fn complete_pending_help_request(&mut self) {
        let request = HelpRequestRequest {
            organisation_name: self.help_request_form.organisation_name.clone(),
            registration_number: self.help_request_form.registration_number.clone(),
            location: self.help_request_form.location.clone(),
            contact_person: self.help_request_form.contact_person.clone(),
            contact_phone: self.help_request_form.contact_phone.clone(),
            needs: self.help_request_form.needs.clone(),
            details: self.help_request_form.details.clone(),
        };

        match self
            .backend
            .intake_service
            .submit_help_request(mappers::to_help_request_command(request))
        {
            Ok(result) => {
                let response = mappers::to_help_request_response(result);
                info!("Help request {} accepted", response.request_id);
                self.help_request_form.complete_submit(response.success_message);
            }
            Err(e) => {
                warn!("Help request failed: {}", e);
                self.help_request_form.reset();
            }
        }
    }

    fn complete_pending_contact_message(&mut self) {
        let request = ContactMessageRequest {
            full_name: self.contact_form.full_name.clone(),
            email: self.contact_form.email.clone(),
            message: self.contact_form.message.clone(),
        };

        match self
            .backend
            .intake_service
            .submit_contact_message(mappers::to_contact_command(request))
        {
            Ok(result) => {
                let response = mappers::to_contact_response(result);
                info!("Contact message {} accepted", response.message_id);
                self.contact_form.complete_submit(response.success_message);
            }
            Err(e) => {
                warn!("Contact message failed: {}", e);
                self.contact_form.reset();
            }
        }
    }
}
