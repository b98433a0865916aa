pub mod data_loading;
pub mod donation_cards;
pub mod footer;
pub mod header;
pub mod hero;
pub mod how_it_works;
pub mod modals;
pub mod screens;
pub mod search_section;
pub mod stats_banner;
pub mod styling;
pub mod testimonials;
pub mod theme;
pub mod ui_components;

pub use styling::*;
pub use ui_components::*;
