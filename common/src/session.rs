//! Per-browser quiz session state.
//!
//! The whole session is small enough to be serialized into a single cookie.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Authentication flags and the set of photos this browser has already answered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizSession {
    pub authenticated: bool,
    pub admin_authenticated: bool,
    pub answered_photo_ids: BTreeSet<u32>,
}

impl QuizSession {
    /// Record a photo as answered. Returns false if it was already recorded.
    pub fn mark_answered(&mut self, photo_id: u32) -> bool {
        self.answered_photo_ids.insert(photo_id)
    }

    pub fn answered_count(&self) -> usize {
        self.answered_photo_ids.len()
    }

    /// Answered ids in ascending order, for store queries.
    pub fn answered_ids(&self) -> Vec<u32> {
        self.answered_photo_ids.iter().copied().collect()
    }

    /// Forget quiz progress. Authentication is kept.
    pub fn reset(&mut self) {
        self.answered_photo_ids.clear();
    }

    pub fn login_user(&mut self) {
        self.authenticated = true;
    }

    pub fn login_admin(&mut self) {
        self.admin_authenticated = true;
    }

    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string(self).map_err(|e| e.to_string())
    }

    pub fn from_json(s: &str) -> Result<Self, String> {
        serde_json::from_str(s).map_err(|e| e.to_string())
    }
}
