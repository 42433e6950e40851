//! Storage of uploaded photos behind a backend-agnostic trait.

use super::*;
use thiserror::Error;

mod memory;

pub use memory::MemoryPhotoStore;

/// Errors surfaced by photo store backends.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StoreError {
    #[error("photo not found")]
    NotFound,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("query error: {0}")]
    Query(String),

    #[error("conversion error: {0}")]
    Conversion(String),
}

/// Persistent photo storage. Photos are only ever inserted and read.
pub trait PhotoStore: Send + Sync {
    /// Persist a validated upload, assigning its id and creation time.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the row cannot be written.
    fn insert_photo(&self, photo: NewPhoto) -> Result<PhotoRecord, StoreError>;

    /// Fetch a single photo with its image bytes.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no photo has this id.
    fn get_photo(&self, photo_id: u32) -> Result<PhotoRecord, StoreError>;

    /// All photos, newest first (ties broken by id, highest first).
    fn list_photos_newest_first(&self) -> Result<Vec<PhotoSummary>, StoreError>;

    /// Draw one photo id uniformly at random among those not in `excluded`.
    /// Returns `Ok(None)` when every photo is excluded or the store is empty.
    fn random_unanswered(&self, excluded: &[u32]) -> Result<Option<u32>, StoreError>;

    /// Number of photos whose id is not in `excluded`.
    fn count_unanswered(&self, excluded: &[u32]) -> Result<u64, StoreError>;

    fn count_photos(&self) -> Result<u64, StoreError>;

    fn any_photos(&self) -> Result<bool, StoreError> {
        Ok(self.count_photos()? > 0)
    }
}
