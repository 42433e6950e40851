//! In-memory photo store for tests and database-less runs.

use super::*;
use chrono::Utc;
use rand::seq::IndexedRandom;
use std::sync::Mutex;

/// Photo store backed by a vector. Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryPhotoStore {
    photos: Mutex<Vec<PhotoRecord>>,
}

impl MemoryPhotoStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<PhotoRecord>>, StoreError> {
        self.photos
            .lock()
            .map_err(|e| StoreError::Connection(e.to_string()))
    }
}

impl PhotoStore for MemoryPhotoStore {
    fn insert_photo(&self, photo: NewPhoto) -> Result<PhotoRecord, StoreError> {
        let mut photos = self.lock()?;
        let next_id = photos.iter().map(|p| p.photo_id).max().unwrap_or(0) + 1;
        let record = PhotoRecord {
            photo_id: next_id,
            name: photo.name,
            content_type: photo.content_type,
            image: photo.image,
            created_at: Utc::now(),
        };
        photos.push(record.clone());
        log::debug!("Stored photo #{} in memory", record.photo_id);
        Ok(record)
    }

    fn get_photo(&self, photo_id: u32) -> Result<PhotoRecord, StoreError> {
        self.lock()?
            .iter()
            .find(|p| p.photo_id == photo_id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    fn list_photos_newest_first(&self) -> Result<Vec<PhotoSummary>, StoreError> {
        let mut summaries: Vec<PhotoSummary> = self.lock()?.iter().map(PhotoSummary::from).collect();
        summaries.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then(b.photo_id.cmp(&a.photo_id))
        });
        Ok(summaries)
    }

    fn random_unanswered(&self, excluded: &[u32]) -> Result<Option<u32>, StoreError> {
        let candidates: Vec<u32> = self
            .lock()?
            .iter()
            .map(|p| p.photo_id)
            .filter(|id| !excluded.contains(id))
            .collect();
        Ok(candidates.choose(&mut rand::rng()).copied())
    }

    fn count_unanswered(&self, excluded: &[u32]) -> Result<u64, StoreError> {
        Ok(self
            .lock()?
            .iter()
            .filter(|p| !excluded.contains(&p.photo_id))
            .count() as u64)
    }

    fn count_photos(&self) -> Result<u64, StoreError> {
        Ok(self.lock()?.len() as u64)
    }
}
