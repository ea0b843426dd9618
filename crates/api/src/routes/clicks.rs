//! Click tracking and trending routes.

use std::net::SocketAddr;

use axum::extract::{ConnectInfo, Query, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::warn;

use database::click::{DEFAULT_TRENDING_LIMIT, DEFAULT_WINDOW_DAYS};
use database::models::TrendingTool;
use database::validation;

use crate::error::Result;
use crate::identity;
use crate::state::AppState;

/// Request to record one tool click.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordClickRequest {
    pub tool_id: String,
    pub tool_name: String,
    pub tool_url: Option<String>,
    pub category: Option<String>,
}

/// Click acknowledgement.
#[derive(Serialize)]
pub struct RecordClickResponse {
    pub success: bool,
}

/// Trending query parameters.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendingParams {
    pub limit: Option<i64>,
    pub days_back: Option<i64>,
}

/// Record a click on a tool.
pub async fn record(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    Json(req): Json<RecordClickRequest>,
) -> Result<Json<RecordClickResponse>> {
    validation::validate_tool_id(&req.tool_id)?;
    validation::validate_tool_name(&req.tool_name)?;
    if let Some(url) = &req.tool_url {
        validation::validate_url_length(url)?;
    }
    if let Some(category) = &req.category {
        validation::validate_category(category)?;
    }

    let actor_hash = identity::actor_from_request(&headers, peer, &state.identity_secret);

    database::click::record_click(
        state.db.pool(),
        &req.tool_id,
        &req.tool_name,
        req.tool_url.as_deref(),
        req.category.as_deref(),
        &actor_hash,
    )
    .await?;

    Ok(Json(RecordClickResponse { success: true }))
}

/// Rank tools by clicks over a rolling window.
///
/// A store failure degrades to an empty ranking.
pub async fn trending(
    State(state): State<AppState>,
    Query(params): Query<TrendingParams>,
) -> Json<Vec<TrendingTool>> {
    let limit = params.limit.unwrap_or(DEFAULT_TRENDING_LIMIT);
    let days_back = params.days_back.unwrap_or(DEFAULT_WINDOW_DAYS);

    let ranked = database::click::trending(state.db.pool(), limit, days_back)
        .await
        .unwrap_or_else(|err| {
            warn!(error = %err, "Failed to compute trending tools, returning empty list");
            Vec::new()
        });

    Json(ranked)
}
