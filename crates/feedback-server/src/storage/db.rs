//! PostgreSQL store
//!
//! Works against any existing `feedbacks` table with an integer `id` column
//! (`SERIAL` or `BIGSERIAL`) and text `name` and `feedback` columns. The id is
//! widened to `BIGINT` on read.
//!
//! The pool is created lazily: no connection is opened until the first query,
//! so the server comes up (and answers liveness checks) while the database is
//! still unreachable.

use super::{FeedbackStore, StoreResult};
use crate::config::PgSettings;
use async_trait::async_trait;
use feedback_types::{Feedback, NewFeedback};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    pub fn connect_lazy(settings: &PgSettings) -> Self {
        tracing::info!(
            host = settings.host.as_deref().unwrap_or("<default>"),
            database = settings.database.as_deref().unwrap_or("<default>"),
            max_connections = settings.max_connections,
            "Creating PostgreSQL connection pool"
        );

        let pool = PgPoolOptions::new()
            .max_connections(settings.max_connections)
            .connect_lazy_with(connect_options(settings));

        Self { pool }
    }

    /// Create the `feedbacks` table if it does not exist yet.
    pub async fn ensure_schema(&self) -> StoreResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS feedbacks (
                id SERIAL PRIMARY KEY,
                name TEXT,
                feedback TEXT
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

/// Start from libpq-style defaults and apply whatever the environment set.
fn connect_options(settings: &PgSettings) -> PgConnectOptions {
    let mut options = PgConnectOptions::new();
    if let Some(host) = &settings.host {
        options = options.host(host);
    }
    if let Some(port) = settings.port {
        options = options.port(port);
    }
    if let Some(user) = &settings.user {
        options = options.username(user);
    }
    if let Some(password) = &settings.password {
        options = options.password(password);
    }
    if let Some(database) = &settings.database {
        options = options.database(database);
    }
    options
}

#[async_trait]
impl FeedbackStore for PostgresStore {
    async fn insert(&self, feedback: &NewFeedback) -> StoreResult<()> {
        sqlx::query("INSERT INTO feedbacks (name, feedback) VALUES ($1, $2)")
            .bind(feedback.name.as_deref())
            .bind(feedback.feedback.as_deref())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn list(&self) -> StoreResult<Vec<Feedback>> {
        // No ORDER BY: rows come back in whatever order Postgres yields.
        let rows: Vec<(i64, Option<String>, Option<String>)> =
            sqlx::query_as("SELECT id::BIGINT AS id, name, feedback FROM feedbacks")
                .fetch_all(&self.pool)
                .await?;

        Ok(rows
            .into_iter()
            .map(|(id, name, feedback)| Feedback { id, name, feedback })
            .collect())
    }

    async fn close(&self) {
        self.pool.close().await;
    }

    fn backend_name(&self) -> &'static str {
        "postgres"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_settings() -> PgSettings {
        PgSettings::from_lookup(|key| std::env::var(key).ok())
            .expect("postgres settings from environment")
    }

    // Run with `cargo test -- --ignored` against a database configured through PG* variables.
    #[tokio::test]
    #[ignore]
    async fn test_insert_then_list_against_postgres() {
        let store = PostgresStore::connect_lazy(&test_settings());
        store.ensure_schema().await.unwrap();

        let before = store.list().await.unwrap().len();
        store
            .insert(&NewFeedback::new("Alice", "Great!"))
            .await
            .unwrap();
        let after = store.list().await.unwrap();

        assert_eq!(after.len(), before + 1);
        assert!(after.iter().any(|fb| {
            fb.name.as_deref() == Some("Alice") && fb.feedback.as_deref() == Some("Great!")
        }));

        store.close().await;
    }
}
