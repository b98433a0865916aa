//! # Storage Module
//!
//! Catalog storage backends for the embedded backend. Two sources exist:
//! the in-memory seed catalog (always available) and the remote hosted
//! table (used only when endpoint configuration is present).

pub mod remote;
pub mod seed;
pub mod traits;

pub use remote::{RemoteTableClient, RemoteTableConfig};
pub use seed::SeedCatalog;
pub use traits::OrphanageSource;
