//! Admin routes, gated by the moderation passkey.
//!
//! Authorization failures come back as structured `{success: false, error}`
//! bodies so the admin page can render inline feedback. Every privileged
//! call re-verifies the raw passkey; there is no session state.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use database::models::{Submission, SubmissionStatus};

use crate::auth::{self, SetPasskeyOutcome, MAX_PASSKEY_LENGTH, MIN_PASSKEY_LENGTH};
use crate::error::Result;
use crate::state::AppState;

/// Passkey login request.
#[derive(Deserialize)]
pub struct LoginRequest {
    pub passkey: String,
}

/// Login outcome.
#[derive(Serialize)]
pub struct LoginResponse {
    pub success: bool,
}

/// Request to set or change the passkey.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetPasskeyRequest {
    pub passkey: String,
    pub current_passkey: Option<String>,
}

/// Request to list submissions.
#[derive(Deserialize)]
pub struct GetSubmissionsRequest {
    pub passkey: String,
    pub status: Option<SubmissionStatus>,
}

/// Submission listing, empty on authorization failure.
#[derive(Serialize)]
pub struct GetSubmissionsResponse {
    pub success: bool,
    pub submissions: Vec<Submission>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Request to decide a submission.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusRequest {
    pub passkey: String,
    pub submission_id: i64,
    pub status: SubmissionStatus,
}

/// Outcome of a privileged action.
#[derive(Serialize)]
pub struct ActionResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ActionResponse {
    fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    fn fail(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
        }
    }
}

/// Verify the passkey.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let success = auth::verify_passkey(&state.db, &req.passkey).await?;
    Ok(Json(LoginResponse { success }))
}

/// Set the passkey (first-run bootstrap) or change it.
pub async fn set_passkey(
    State(state): State<AppState>,
    Json(req): Json<SetPasskeyRequest>,
) -> Result<Json<ActionResponse>> {
    if req.passkey.len() < MIN_PASSKEY_LENGTH || req.passkey.len() > MAX_PASSKEY_LENGTH {
        return Ok(Json(ActionResponse::fail(format!(
            "Passkey must be between {} and {} characters",
            MIN_PASSKEY_LENGTH, MAX_PASSKEY_LENGTH
        ))));
    }

    let outcome = auth::set_passkey(&state.db, &req.passkey, req.current_passkey.as_deref()).await?;

    let response = match outcome {
        SetPasskeyOutcome::Updated => {
            info!("Admin passkey updated");
            ActionResponse::ok()
        }
        SetPasskeyOutcome::CurrentRequired => ActionResponse::fail("Current passkey required"),
        SetPasskeyOutcome::InvalidCurrent => ActionResponse::fail("Invalid current passkey"),
    };

    Ok(Json(response))
}

/// List submissions, optionally filtered by status, newest first.
pub async fn get_submissions(
    State(state): State<AppState>,
    Json(req): Json<GetSubmissionsRequest>,
) -> Result<Json<GetSubmissionsResponse>> {
    if !auth::verify_passkey(&state.db, &req.passkey).await? {
        return Ok(Json(GetSubmissionsResponse {
            success: false,
            submissions: Vec::new(),
            error: Some("Invalid passkey".to_string()),
        }));
    }

    let submissions = database::submission::list_submissions(state.db.pool(), req.status)
        .await
        .unwrap_or_else(|err| {
            warn!(error = %err, "Failed to list submissions, returning empty list");
            Vec::new()
        });

    Ok(Json(GetSubmissionsResponse {
        success: true,
        submissions,
        error: None,
    }))
}

/// Decide a submission: set its status.
pub async fn update_status(
    State(state): State<AppState>,
    Json(req): Json<UpdateStatusRequest>,
) -> Result<Json<ActionResponse>> {
    if !auth::verify_passkey(&state.db, &req.passkey).await? {
        return Ok(Json(ActionResponse::fail("Invalid passkey")));
    }

    match database::submission::update_status(state.db.pool(), req.submission_id, req.status).await
    {
        Ok(()) => {
            info!(
                submission_id = req.submission_id,
                status = %req.status,
                "Submission status updated"
            );
            Ok(Json(ActionResponse::ok()))
        }
        Err(database::DatabaseError::NotFound { .. }) => {
            Ok(Json(ActionResponse::fail("Submission not found")))
        }
        Err(err) => Err(err.into()),
    }
}
