//! # App State Module
//!
//! This module defines the central application state structure and
//! initialization logic for the Hope for Orphans app.
//!
//! ## Key Types:
//! - `MainTab` - Enum defining the available screens
//! - `HopeForOrphansApp` - Main application state struct
//!
//! ## Purpose:
//! The HopeForOrphansApp struct holds all application state in a single
//! location: the backend connection, the resolved catalog, and the per-screen
//! state machines (search, donation wizard, intake forms). Each screen's
//! state is private to that screen instance; nothing here is shared across
//! asynchronous work.

use log::info;

use crate::backend::Backend;
use crate::ui::state::{
    CatalogState, ContactFormState, DonationWizardState, HelpRequestFormState,
    SearchSectionState, VolunteerFormState,
};

/// Screens available in the main interface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainTab {
    Home,
    About,
    Causes,
    Blog,
    Contact,
    Volunteer,
    RequestHelp,
}

impl MainTab {
    /// All tabs in navigation order
    pub const ALL: [MainTab; 7] = [
        MainTab::Home,
        MainTab::About,
        MainTab::Causes,
        MainTab::Blog,
        MainTab::Contact,
        MainTab::Volunteer,
        MainTab::RequestHelp,
    ];

    /// Label shown in the navigation bar
    pub fn label(&self) -> &'static str {
        match self {
            MainTab::Home => "Home",
            MainTab::About => "About",
            MainTab::Causes => "Causes",
            MainTab::Blog => "Blog",
            MainTab::Contact => "Contact",
            MainTab::Volunteer => "Volunteer",
            MainTab::RequestHelp => "Request Help",
        }
    }
}

/// Main application struct for the egui Hope for Orphans app
pub struct HopeForOrphansApp {
    pub backend: Backend,

    // Catalog state
    pub catalog: CatalogState,

    // UI state
    pub current_tab: MainTab,

    // Screen state machines
    pub search: SearchSectionState,
    pub wizard: DonationWizardState,
    pub volunteer_form: VolunteerFormState,
    pub help_request_form: HelpRequestFormState,
    pub contact_form: ContactFormState,

    /// Receipt from the most recent confirmed donation
    pub last_donation: Option<shared::DonationReceipt>,

    /// Success line shown on the wizard's success step
    pub donation_message: Option<String>,
}

impl HopeForOrphansApp {
    /// Create a new HopeForOrphansApp with default values
    pub fn new(cc: &eframe::CreationContext<'_>) -> Result<Self, anyhow::Error> {
        info!("Initializing HopeForOrphansApp");

        crate::ui::components::styling::setup_app_style(&cc.egui_ctx);

        let backend = Backend::new()?;

        Ok(Self {
            backend,
            catalog: CatalogState::new(),
            current_tab: MainTab::Home,
            search: SearchSectionState::new(),
            wizard: DonationWizardState::new(),
            volunteer_form: VolunteerFormState::new(),
            help_request_form: HelpRequestFormState::new(),
            contact_form: ContactFormState::new(),
            last_donation: None,
            donation_message: None,
        })
    }

    /// Switch to another screen
    pub fn navigate_to(&mut self, tab: MainTab) {
        if self.current_tab != tab {
            info!("Navigating to {:?}", tab);
            self.current_tab = tab;
        }
    }
}
