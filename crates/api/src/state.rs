//! Application state shared across handlers.

use std::sync::Arc;
use std::time::Duration;

use database::Database;
use moderator_core::Moderator;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Database connection.
    pub db: Database,
    /// Moderation oracle for submission screening.
    pub moderator: Arc<dyn Moderator>,
    /// Server secret mixed into actor identity hashes.
    pub identity_secret: String,
    /// Budget for one asynchronous moderation review.
    pub review_timeout: Duration,
}

impl AppState {
    /// Create new application state.
    pub fn new(
        db: Database,
        moderator: Arc<dyn Moderator>,
        identity_secret: String,
        review_timeout: Duration,
    ) -> Self {
        Self {
            db,
            moderator,
            identity_secret,
            review_timeout,
        }
    }
}
