//! Moodboard persistence
//!
//! Records are insert-only. Listing returns them in insertion order.

pub mod mock;
pub mod sqlite;

pub use mock::MockMoodboardStore;
pub use sqlite::SqliteMoodboardStore;

use crate::models::{MoodboardRecord, NewMoodboard};
use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait MoodboardStore: Send + Sync {
    /// Persist a moodboard, assigning its id and timestamps.
    async fn insert(&self, moodboard: NewMoodboard) -> Result<MoodboardRecord>;

    /// At most `limit` records starting at offset `skip`.
    async fn list(&self, skip: u32, limit: u32) -> Result<Vec<MoodboardRecord>>;
}
