//! # Storage Traits
//!
//! This module defines the storage abstraction traits that allow different
//! catalog backends to be used interchangeably in the domain layer.

use anyhow::Result;
use shared::Orphanage;

/// Trait defining the interface for orphanage catalog reads
///
/// This trait abstracts away where the orphanage directory comes from,
/// allowing the domain layer to work with either the remote hosted table or
/// the in-memory seed catalog without modification. There is deliberately no
/// write path: the catalog is read-only for the process lifetime.
///
/// Note: All operations are synchronous for the desktop-only egui app
pub trait OrphanageSource: Send + Sync {
    /// Fetch all orphanage rows from this source
    fn fetch_orphanages(&self) -> Result<Vec<Orphanage>>;
}
