//! Asynchronous submission screening.
//!
//! The create handler spawns [`spawn_review`] and returns immediately; the
//! oracle round-trip never sits on the caller's latency. Everything in the
//! continuation is caught and logged, so a misbehaving oracle cannot fail a
//! request or take the process down.

use moderator_core::{Moderator, ReviewRequest, Verdict};
use tracing::{info, warn};

use crate::state::AppState;

/// Submissions scoring below this are rejected without admin involvement.
pub const AUTO_REJECT_THRESHOLD: i64 = 30;

/// Launch the screening continuation for a freshly created submission.
pub fn spawn_review(state: AppState, submission_id: i64, request: ReviewRequest) {
    tokio::spawn(async move {
        run_review(&state, submission_id, request).await;
    });
}

/// Screen one submission and write the verdict back by ID.
///
/// Oracle errors, malformed output, and timeouts all collapse into the
/// manual-review fallback verdict; the submission stays pending for a human.
pub async fn run_review(state: &AppState, submission_id: i64, request: ReviewRequest) {
    let verdict = match tokio::time::timeout(
        state.review_timeout,
        state.moderator.review(request),
    )
    .await
    {
        Ok(Ok(verdict)) => verdict,
        Ok(Err(err)) => {
            warn!(
                submission_id,
                error = %err,
                "Moderation review failed, falling back to manual review"
            );
            Verdict::manual_review()
        }
        Err(_) => {
            warn!(
                submission_id,
                timeout_secs = state.review_timeout.as_secs(),
                "Moderation review timed out, falling back to manual review"
            );
            Verdict::manual_review()
        }
    };

    let pool = state.db.pool();

    if let Err(err) = database::submission::update_ai_validation(
        pool,
        submission_id,
        verdict.is_valid,
        Some(verdict.score),
        Some(verdict.notes.as_str()),
    )
    .await
    {
        warn!(submission_id, error = %err, "Failed to record moderation verdict");
        return;
    }

    info!(
        submission_id,
        score = verdict.score,
        is_valid = verdict.is_valid,
        "Moderation verdict recorded"
    );

    if verdict.score < AUTO_REJECT_THRESHOLD {
        match database::submission::auto_reject(pool, submission_id).await {
            Ok(true) => {
                info!(submission_id, score = verdict.score, "Submission auto-rejected");
            }
            Ok(false) => {}
            Err(err) => {
                warn!(submission_id, error = %err, "Failed to auto-reject submission");
            }
        }
    }
}
