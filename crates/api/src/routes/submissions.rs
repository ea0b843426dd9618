//! Tool submission routes.

use std::net::SocketAddr;

use axum::extract::{ConnectInfo, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use database::validation;
use moderator_core::ReviewRequest;

use crate::error::Result;
use crate::identity;
use crate::review;
use crate::state::AppState;

/// Request to submit a tool to the directory.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubmissionRequest {
    pub tool_name: String,
    pub tool_url: String,
    pub category: Option<String>,
    pub description: Option<String>,
    pub submitter_email: Option<String>,
    #[serde(default)]
    pub is_hidden_gem: bool,
}

/// Submission acknowledgement.
#[derive(Serialize)]
pub struct CreateSubmissionResponse {
    pub success: bool,
}

/// Accept a tool submission and kick off asynchronous screening.
///
/// Returns as soon as the pending row is stored; the moderation verdict
/// lands later through the spawned continuation.
pub async fn create(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    Json(req): Json<CreateSubmissionRequest>,
) -> Result<Json<CreateSubmissionResponse>> {
    validation::validate_tool_name(&req.tool_name)?;
    validation::validate_tool_url(&req.tool_url)?;
    if let Some(category) = &req.category {
        validation::validate_category(category)?;
    }
    if let Some(description) = &req.description {
        validation::validate_description(description)?;
    }
    if let Some(email) = &req.submitter_email {
        validation::validate_email(email)?;
    }

    let actor_hash = identity::actor_from_request(&headers, peer, &state.identity_secret);

    let submission_id = database::submission::create_submission(
        state.db.pool(),
        &req.tool_name,
        &req.tool_url,
        req.category.as_deref(),
        req.description.as_deref(),
        req.submitter_email.as_deref(),
        &actor_hash,
        req.is_hidden_gem,
    )
    .await?;

    info!(submission_id, tool_name = %req.tool_name, "Submission received");

    let request = ReviewRequest::new(req.tool_name, req.tool_url, req.description);
    review::spawn_review(state, submission_id, request);

    Ok(Json(CreateSubmissionResponse { success: true }))
}
