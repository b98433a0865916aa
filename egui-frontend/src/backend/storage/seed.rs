//! # Seed Catalog
//!
//! The hardcoded sample catalog substituted whenever no live data source is
//! configured or reachable. Orphanages, donation categories, testimonials,
//! impact stats, and blog posts all live here; only the orphanage list has a
//! remote counterpart.

use anyhow::Result;
use shared::{BlogPost, DonationCategory, Orphanage, Stat, Testimonial};

use super::traits::OrphanageSource;

/// In-memory catalog source backed by the seed data below
#[derive(Debug, Clone, Default)]
pub struct SeedCatalog;

impl SeedCatalog {
    pub fn new() -> Self {
        Self
    }
}

impl OrphanageSource for SeedCatalog {
    fn fetch_orphanages(&self) -> Result<Vec<Orphanage>> {
        Ok(orphanages())
    }
}

/// The four sample orphanages shown when no remote table is configured
pub fn orphanages() -> Vec<Orphanage> {
    vec![
        Orphanage {
            id: "1".to_string(),
            name: "Sunshine Children's Centre".to_string(),
            location: "Nairobi, Kenya".to_string(),
            description: "Providing shelter and education to over 50 children.".to_string(),
            needs: vec![
                "Books".to_string(),
                "School Uniforms".to_string(),
                "Rice".to_string(),
            ],
            image: None,
            verified: true,
        },
        Orphanage {
            id: "2".to_string(),
            name: "Hope Haven".to_string(),
            location: "Manila, Philippines".to_string(),
            description: "A safe space for street children to find hope and healing.".to_string(),
            needs: vec![
                "Medical Supplies".to_string(),
                "Clothing".to_string(),
                "Toys".to_string(),
            ],
            image: None,
            verified: true,
        },
        Orphanage {
            id: "3".to_string(),
            name: "St. Mary's Home".to_string(),
            location: "London, UK".to_string(),
            description: "Supporting foster care placements and emergency housing.".to_string(),
            needs: vec![
                "Winter Coats".to_string(),
                "Funds".to_string(),
                "Volunteers".to_string(),
            ],
            image: None,
            verified: true,
        },
        Orphanage {
            id: "4".to_string(),
            name: "Little Angels Organisation".to_string(),
            location: "Mumbai, India".to_string(),
            description: "Empowering orphans through vocational training.".to_string(),
            needs: vec![
                "Computers".to_string(),
                "Stationery".to_string(),
                "Food".to_string(),
            ],
            image: None,
            verified: true,
        },
    ]
}

/// The four donation category cards
pub fn donation_categories() -> Vec<DonationCategory> {
    vec![
        DonationCategory {
            id: "food".to_string(),
            title: "Food & Nutrition".to_string(),
            description: "Provide healthy meals for a day, week, or month.".to_string(),
            icon_name: "Utensils".to_string(),
            color: "#EA580C".to_string(),
        },
        DonationCategory {
            id: "clothes".to_string(),
            title: "Clothes & Warmth".to_string(),
            description: "New clothes and blankets for comfort and dignity.".to_string(),
            icon_name: "Shirt".to_string(),
            color: "#059669".to_string(),
        },
        DonationCategory {
            id: "toys".to_string(),
            title: "Toys & Education".to_string(),
            description: "Books, toys, and school supplies for growth.".to_string(),
            icon_name: "Gamepad2".to_string(),
            color: "#7C3AED".to_string(),
        },
        DonationCategory {
            id: "funds".to_string(),
            title: "General Funds".to_string(),
            description: "Support operational costs and emergency needs.".to_string(),
            icon_name: "Banknote".to_string(),
            color: "#2563EB".to_string(),
        },
    ]
}

/// Donor and partner quotes for the home page
pub fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            id: "1".to_string(),
            quote: "Seeing the joy on the children's faces when they received the new books was priceless. This platform makes it so easy to help.".to_string(),
            author: "Sarah Jenkins".to_string(),
            role: "Monthly Donor".to_string(),
        },
        Testimonial {
            id: "2".to_string(),
            quote: "Hope for Orphans helped us repair our roof before the rainy season. We are forever grateful for the support.".to_string(),
            author: "David Okonjo".to_string(),
            role: "Orphanage Director".to_string(),
        },
        Testimonial {
            id: "3".to_string(),
            quote: "I love that I can choose exactly where my money goes. Transparency is key for me, and this site delivers.".to_string(),
            author: "Michael Chen".to_string(),
            role: "Volunteer".to_string(),
        },
    ]
}

/// Impact stats for the home-page banner
pub fn stats() -> Vec<Stat> {
    vec![
        Stat {
            id: "children".to_string(),
            label: "Children Helped".to_string(),
            value: "15,000+".to_string(),
            icon_name: "Users".to_string(),
        },
        Stat {
            id: "donations".to_string(),
            label: "Donations Raised".to_string(),
            value: "$2.5M".to_string(),
            icon_name: "Heart".to_string(),
        },
        Stat {
            id: "orphanages".to_string(),
            label: "Orphanages Supported".to_string(),
            value: "120".to_string(),
            icon_name: "Home".to_string(),
        },
        Stat {
            id: "volunteers".to_string(),
            label: "Active Volunteers".to_string(),
            value: "500+".to_string(),
            icon_name: "Award".to_string(),
        },
    ]
}

/// News posts for the blog screen
pub fn blog_posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: "1".to_string(),
            title: "New Library Opened in Nairobi Centre".to_string(),
            date: "12 Oct 2024".to_string(),
            category: "Education".to_string(),
            excerpt: "Thanks to your generous book donations, we have successfully inaugurated a new learning space for 50 children.".to_string(),
            color: "#F59E0B".to_string(),
        },
        BlogPost {
            id: "2".to_string(),
            title: "Winter Warmth Drive: A Huge Success".to_string(),
            date: "05 Nov 2024".to_string(),
            category: "Events".to_string(),
            excerpt: "Over 500 coats and blankets were distributed to orphanages in colder regions this month.".to_string(),
            color: "#059669".to_string(),
        },
        BlogPost {
            id: "3".to_string(),
            title: "Meet Sarah: From Orphanage to University".to_string(),
            date: "20 Nov 2024".to_string(),
            category: "Success Stories".to_string(),
            excerpt: "Read the inspiring journey of Sarah, who just received a full scholarship for her medical studies.".to_string(),
            color: "#7C3AED".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_orphanage_ids_are_unique() {
        let ids: HashSet<String> = orphanages().into_iter().map(|o| o.id).collect();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn test_seed_catalog_source_returns_all_rows() {
        let source = SeedCatalog::new();
        let rows = source.fetch_orphanages().unwrap();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[1].name, "Hope Haven");
    }

    #[test]
    fn test_all_seed_orphanages_are_verified() {
        assert!(orphanages().iter().all(|o| o.verified));
    }
}
