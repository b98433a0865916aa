//! # Catalog State
//!
//! The resolved catalog data shared by the screens, plus the loading flag
//! that gates the search section until the fetch-or-fallback resolution has
//! completed. Catalog entities are refreshed wholesale on load; nothing
//! mutates them afterwards.

use shared::{BlogPost, DonationCategory, Orphanage, Stat, Testimonial};

/// Resolved catalog data for the current session
#[derive(Debug)]
pub struct CatalogState {
    /// The orphanage directory (remote rows or the seed fallback)
    pub orphanages: Vec<Orphanage>,

    pub categories: Vec<DonationCategory>,
    pub testimonials: Vec<Testimonial>,
    pub stats: Vec<Stat>,
    pub blog_posts: Vec<BlogPost>,

    /// True until the one-shot load on first frame has run
    pub loading: bool,
}

impl CatalogState {
    /// Create empty catalog state awaiting its initial load
    pub fn new() -> Self {
        Self {
            orphanages: Vec::new(),
            categories: Vec::new(),
            testimonials: Vec::new(),
            stats: Vec::new(),
            blog_posts: Vec::new(),
            loading: true,
        }
    }
}
