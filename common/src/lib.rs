//! A library with common types, quiz progress tracking and photo storage for the photo quiz.

#[cfg(feature = "database")]
pub mod db_util;
pub mod quiz;
pub mod session;
pub mod store;
pub mod upload;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Content type recorded when the browser did not send one with the upload.
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// A stored photo, including the image bytes. Never updated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoRecord {
    pub photo_id: u32,
    pub name: String,
    pub content_type: String,
    #[serde(skip)]
    pub image: Vec<u8>,
    pub created_at: DateTime<Utc>,
}

/// A stored photo without the image payload, used for listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoSummary {
    pub photo_id: u32,
    pub name: String,
    pub content_type: String,
    pub byte_size: u64,
    pub created_at: DateTime<Utc>,
}

impl From<&PhotoRecord> for PhotoSummary {
    fn from(p: &PhotoRecord) -> Self {
        PhotoSummary {
            photo_id: p.photo_id,
            name: p.name.clone(),
            content_type: p.content_type.clone(),
            byte_size: p.image.len() as u64,
            created_at: p.created_at,
        }
    }
}

/// A validated upload, ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPhoto {
    pub name: String,
    pub content_type: String,
    pub image: Vec<u8>,
}
