//! Route handlers for the API.

pub mod admin;
pub mod clicks;
pub mod favorites;
pub mod health;
pub mod submissions;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Build the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(health::health))
        // Public endpoints
        .route("/api/submissions", post(submissions::create))
        .route("/api/favorites", get(favorites::list).post(favorites::add))
        .route("/api/favorites/remove", post(favorites::remove))
        .route("/api/clicks", post(clicks::record))
        .route("/api/clicks/trending", get(clicks::trending))
        // Admin endpoints (passkey-gated)
        .route("/api/admin/login", post(admin::login))
        .route("/api/admin/passkey", post(admin::set_passkey))
        .route("/api/admin/submissions", post(admin::get_submissions))
        .route("/api/admin/submissions/status", post(admin::update_status))
}
