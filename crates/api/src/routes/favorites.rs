//! Per-actor favorites routes.

use std::net::SocketAddr;

use axum::extract::{ConnectInfo, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::warn;

use database::models::Favorite;
use database::validation;

use crate::error::Result;
use crate::identity;
use crate::state::AppState;

/// Request to favorite a tool.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddFavoriteRequest {
    pub tool_id: String,
    pub tool_name: String,
    pub tool_url: Option<String>,
    pub category: Option<String>,
}

/// Result of an add: whether the favorite already existed.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddFavoriteResponse {
    pub already_exists: bool,
}

/// Request to unfavorite a tool.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveFavoriteRequest {
    pub tool_id: String,
}

/// Removal acknowledgement.
#[derive(Serialize)]
pub struct RemoveFavoriteResponse {
    pub success: bool,
}

/// List the caller's favorites.
///
/// A store failure degrades to an empty list; favorites are a read path
/// the page can render without.
pub async fn list(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
) -> Json<Vec<Favorite>> {
    let actor_hash = identity::actor_from_request(&headers, peer, &state.identity_secret);

    let favorites = database::favorite::list_favorites(state.db.pool(), &actor_hash)
        .await
        .unwrap_or_else(|err| {
            warn!(error = %err, "Failed to list favorites, returning empty list");
            Vec::new()
        });

    Json(favorites)
}

/// Favorite a tool for the caller. Idempotent.
pub async fn add(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    Json(req): Json<AddFavoriteRequest>,
) -> Result<Json<AddFavoriteResponse>> {
    validation::validate_tool_id(&req.tool_id)?;
    validation::validate_tool_name(&req.tool_name)?;
    if let Some(url) = &req.tool_url {
        validation::validate_url_length(url)?;
    }
    if let Some(category) = &req.category {
        validation::validate_category(category)?;
    }

    let actor_hash = identity::actor_from_request(&headers, peer, &state.identity_secret);

    let already_exists = database::favorite::add_favorite(
        state.db.pool(),
        &actor_hash,
        &req.tool_id,
        &req.tool_name,
        req.tool_url.as_deref(),
        req.category.as_deref(),
    )
    .await?;

    Ok(Json(AddFavoriteResponse { already_exists }))
}

/// Unfavorite a tool for the caller. A no-op if not favorited.
pub async fn remove(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    Json(req): Json<RemoveFavoriteRequest>,
) -> Result<Json<RemoveFavoriteResponse>> {
    validation::validate_tool_id(&req.tool_id)?;

    let actor_hash = identity::actor_from_request(&headers, peer, &state.identity_secret);

    database::favorite::remove_favorite(state.db.pool(), &actor_hash, &req.tool_id).await?;

    Ok(Json(RemoveFavoriteResponse { success: true }))
}
