pub mod catalog_state;
pub mod donation_wizard;
pub mod forms;
pub mod search_section;

pub use catalog_state::CatalogState;
pub use donation_wizard::{DonationWizardState, WizardStep, DEFAULT_PRESET, PRESET_AMOUNTS, PROCESSING_DELAY};
pub use forms::{ContactFormState, HelpRequestFormState, VolunteerFormState, NEED_OPTIONS, SUBMIT_DELAY};
pub use search_section::{SearchSectionState, SEARCH_DELAY};
