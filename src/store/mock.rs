use super::MoodboardStore;
use crate::models::{MoodboardRecord, NewMoodboard};
use crate::{Error, Result};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, Mutex};

/// In-memory [`MoodboardStore`] with an optional injected failure.
#[derive(Clone)]
pub struct MockMoodboardStore {
    records: Arc<Mutex<Vec<MoodboardRecord>>>,
    failure: Option<String>,
}

impl MockMoodboardStore {
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
            failure: None,
        }
    }

    /// Make every operation fail with `message`.
    pub fn with_failure(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }

    pub fn get_records(&self) -> Vec<MoodboardRecord> {
        self.records.lock().unwrap().clone()
    }

    fn check(&self) -> Result<()> {
        match &self.failure {
            Some(message) => Err(Error::Generic(message.clone())),
            None => Ok(()),
        }
    }
}

impl Default for MockMoodboardStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MoodboardStore for MockMoodboardStore {
    async fn insert(&self, moodboard: NewMoodboard) -> Result<MoodboardRecord> {
        self.check()?;

        let mut records = self.records.lock().unwrap();
        let now = Utc::now();
        let record = MoodboardRecord {
            id: records.len() as i64 + 1,
            title: moodboard.title,
            description: moodboard.description,
            content: moodboard.content,
            user_id: moodboard.user_id,
            created_at: now,
            updated_at: now,
        };
        records.push(record.clone());
        Ok(record)
    }

    async fn list(&self, skip: u32, limit: u32) -> Result<Vec<MoodboardRecord>> {
        self.check()?;

        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .skip(skip as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }
}
