pub mod catalog_service;
pub mod commands;
pub mod donation_service;
pub mod intake_service;
pub mod models;
pub mod search;

pub use catalog_service::CatalogService;
pub use donation_service::DonationService;
pub use intake_service::IntakeService;
