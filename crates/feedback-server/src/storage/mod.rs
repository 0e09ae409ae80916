//! Storage layer
//!
//! Feedback records live in PostgreSQL. An in-process store with the same
//! ordering behaviour is available for local runs and tests.

pub mod db;
pub mod memory;

pub use db::PostgresStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use feedback_types::{Feedback, NewFeedback};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence for feedback records.
///
/// Records are append-only: there is no update or delete.
#[async_trait]
pub trait FeedbackStore: Send + Sync {
    /// Insert one record exactly as submitted.
    async fn insert(&self, feedback: &NewFeedback) -> StoreResult<()>;

    /// All records in the order the backend returns them.
    async fn list(&self) -> StoreResult<Vec<Feedback>>;

    /// Release pooled resources. Called once on shutdown.
    async fn close(&self) {}

    fn backend_name(&self) -> &'static str;
}
