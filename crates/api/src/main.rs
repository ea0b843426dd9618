//! JSON API for the Nebula tools directory.
//!
//! Exposes tool submissions with AI-assisted screening, IP-scoped favorites,
//! click-based trending, and a passkey-gated admin surface.

mod auth;
mod config;
mod error;
mod identity;
mod review;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use database::Database;
use llm_moderator::LlmModerator;
use moderator_core::Moderator;
use tracing::info;

use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::from_env()?;
    info!(addr = %config.addr, "Starting API server");

    // Connect to database
    let db = Database::connect(&config.database_url).await?;
    db.migrate().await?;

    // Build the moderation oracle
    let moderator = LlmModerator::from_env()?;
    info!(moderator = moderator.name(), "Moderation oracle ready");

    // Build application state
    let state = AppState::new(
        db,
        Arc::new(moderator),
        config.identity_secret.clone(),
        config.review_timeout,
    );

    // Build router
    let app = routes::router().with_state(state);

    // Start server
    info!(addr = %config.addr, "API server listening");
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
