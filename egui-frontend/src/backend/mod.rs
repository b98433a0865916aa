//! # Backend Module for egui Frontend
//!
//! This backend module provides direct access to domain services for the
//! egui frontend. It uses synchronous operations throughout (no async/await)
//! and is optimized for desktop-only operation. The remote catalog client is
//! constructed here, explicitly, from environment configuration and injected
//! into the catalog service; nothing in this module is process-global.

use anyhow::Result;
use log::info;
use std::sync::Arc;

pub mod domain;
pub mod storage;

use storage::{OrphanageSource, RemoteTableClient, RemoteTableConfig, SeedCatalog};

/// Main backend struct that orchestrates all services
pub struct Backend {
    pub catalog_service: domain::CatalogService,
    pub donation_service: domain::DonationService,
    pub intake_service: domain::IntakeService,
}

impl Backend {
    /// Create a new backend instance with all services, resolving the
    /// orphanage source from environment configuration
    pub fn new() -> Result<Self> {
        let config = RemoteTableConfig::from_env();

        let source: Arc<dyn OrphanageSource> = if config.is_configured() {
            info!("Using remote orphanage table");
            Arc::new(RemoteTableClient::new(config)?)
        } else {
            info!("No remote table configured, using seed catalog");
            Arc::new(SeedCatalog::new())
        };

        Ok(Self::with_source(source))
    }

    /// Create a backend over an explicit orphanage source (tests hand in
    /// substitute sources here)
    pub fn with_source(source: Arc<dyn OrphanageSource>) -> Self {
        Backend {
            catalog_service: domain::CatalogService::new(source),
            donation_service: domain::DonationService::new(),
            intake_service: domain::IntakeService::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::seed;

    #[test]
    fn test_unconfigured_backend_resolves_the_seed_catalog() {
        // Placeholder configuration never builds the remote client, so the
        // resolved list is exactly the seeded catalog
        let config = RemoteTableConfig {
            url: Some("YOUR_API_KEY".to_string()),
            anon_key: Some("YOUR_API_KEY".to_string()),
        };
        assert!(!config.is_configured());

        let backend = Backend::with_source(Arc::new(SeedCatalog::new()));
        assert_eq!(
            backend.catalog_service.load_orphanages(),
            seed::orphanages()
        );
    }
}
