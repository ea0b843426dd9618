//! SQLite persistence layer for the Nebula tools directory.
//!
//! This crate provides async database operations for tool submissions,
//! per-actor favorites, click tracking, and admin settings using SQLx with
//! SQLite.
//!
//! # Example
//!
//! ```no_run
//! use database::{Database, submission};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Connect and run migrations
//!     let db = Database::connect("sqlite:nebula.db?mode=rwc").await?;
//!     db.migrate().await?;
//!
//!     // Record a submission
//!     let id = submission::create_submission(
//!         db.pool(),
//!         "Foo",
//!         "https://foo.ai",
//!         None,
//!         None,
//!         None,
//!         "actor-hash",
//!         false,
//!     )
//!     .await?;
//!     println!("submission {id} created");
//!
//!     Ok(())
//! }
//! ```

pub mod admin_setting;
pub mod click;
pub mod error;
pub mod favorite;
pub mod models;
pub mod submission;
pub mod validation;

pub use error::{DatabaseError, Result};
pub use models::{Favorite, Submission, SubmissionStatus, TrendingTool};
pub use validation::ValidationError;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Database connection wrapper.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Default pool size for database connections.
    const DEFAULT_POOL_SIZE: u32 = 10;

    /// Connect to a SQLite database.
    ///
    /// The URL should be in the format `sqlite:path/to/db.sqlite?mode=rwc`.
    /// Use `?mode=rwc` to create the database file if it doesn't exist, or
    /// `sqlite::memory:` for an in-memory database (for testing).
    pub async fn connect(url: &str) -> Result<Self> {
        Self::connect_with_pool_size(url, Self::DEFAULT_POOL_SIZE).await
    }

    /// Connect to a SQLite database with a custom pool size.
    pub async fn connect_with_pool_size(url: &str, pool_size: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(pool_size)
            .acquire_timeout(std::time::Duration::from_secs(30))
            .connect_with(options)
            .await?;

        tracing::info!(
            "Connected to database: {} (pool size: {})",
            url,
            pool_size
        );

        Ok(Self { pool })
    }

    /// Run database migrations.
    ///
    /// This should be called once after connecting to ensure the schema is up to date.
    pub async fn migrate(&self) -> Result<()> {
        tracing::info!("Running database migrations...");

        sqlx::migrate!("./migrations").run(&self.pool).await?;

        tracing::info!("Migrations complete");
        Ok(())
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close the database connection pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SubmissionStatus;

    async fn test_db() -> Database {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        db.migrate().await.unwrap();
        db
    }

    #[tokio::test]
    async fn test_submission_lifecycle() {
        let db = test_db().await;
        let pool = db.pool();

        // Create
        let id = submission::create_submission(
            pool,
            "Foo",
            "https://foo.ai",
            Some("Agents"),
            Some("Agent platform"),
            Some("someone@example.com"),
            "actor-a",
            true,
        )
        .await
        .unwrap();

        // Read
        let created = submission::get_submission(pool, id).await.unwrap();
        assert_eq!(created.status, SubmissionStatus::Pending);
        assert!(created.is_hidden_gem);

        // Score, then approve
        submission::update_ai_validation(pool, id, true, Some(90), Some("fine"))
            .await
            .unwrap();
        submission::update_status(pool, id, SubmissionStatus::Approved)
            .await
            .unwrap();

        let decided = submission::get_submission(pool, id).await.unwrap();
        assert_eq!(decided.status, SubmissionStatus::Approved);
        assert_eq!(decided.ai_score, Some(90));
    }
}
