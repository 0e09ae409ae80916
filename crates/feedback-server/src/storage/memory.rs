//! In-memory feedback store (no database required)

use super::{FeedbackStore, StoreError, StoreResult};
use async_trait::async_trait;
use feedback_types::{Feedback, NewFeedback};
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

/// Insertion-ordered store kept in process memory
pub struct MemoryStore {
    records: RwLock<Vec<Feedback>>,
    available: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            available: AtomicBool::new(true),
        }
    }

    /// Make every subsequent call fail as if the backend were unreachable
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    fn check_available(&self) -> StoreResult<()> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(StoreError::Unavailable("memory store is offline".to_string()))
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FeedbackStore for MemoryStore {
    async fn insert(&self, feedback: &NewFeedback) -> StoreResult<()> {
        self.check_available()?;

        let mut records = self.records.write().await;
        let id = records.last().map(|fb| fb.id + 1).unwrap_or(1);
        records.push(Feedback {
            id,
            name: feedback.name.clone(),
            feedback: feedback.feedback.clone(),
        });
        Ok(())
    }

    async fn list(&self) -> StoreResult<Vec<Feedback>> {
        self.check_available()?;
        Ok(self.records.read().await.clone())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
