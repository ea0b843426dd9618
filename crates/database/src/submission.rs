//! Tool submission persistence.

use sqlx::SqlitePool;

use crate::error::{DatabaseError, Result};
use crate::models::{Submission, SubmissionStatus};

/// Insert a new pending submission and return its generated ID.
///
/// The returned ID is what the asynchronous screening continuation uses to
/// write its verdict back, so it must be captured at creation time.
#[allow(clippy::too_many_arguments)]
pub async fn create_submission(
    pool: &SqlitePool,
    tool_name: &str,
    tool_url: &str,
    category: Option<&str>,
    description: Option<&str>,
    submitter_email: Option<&str>,
    actor_hash: &str,
    is_hidden_gem: bool,
) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO submissions
            (tool_name, tool_url, category, description, submitter_email, actor_hash, is_hidden_gem)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(tool_name)
    .bind(tool_url)
    .bind(category)
    .bind(description)
    .bind(submitter_email)
    .bind(actor_hash)
    .bind(is_hidden_gem)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Get a submission by ID.
pub async fn get_submission(pool: &SqlitePool, id: i64) -> Result<Submission> {
    sqlx::query_as::<_, Submission>(
        r#"
        SELECT id, tool_name, tool_url, category, description, submitter_email,
               actor_hash, status, is_hidden_gem, ai_validated, ai_score, ai_notes,
               created_at, updated_at
        FROM submissions
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| DatabaseError::NotFound {
        entity: "Submission",
        id: id.to_string(),
    })
}

/// List submissions, optionally filtered by status, newest first.
pub async fn list_submissions(
    pool: &SqlitePool,
    status: Option<SubmissionStatus>,
) -> Result<Vec<Submission>> {
    let rows = match status {
        Some(status) => {
            sqlx::query_as::<_, Submission>(
                r#"
                SELECT id, tool_name, tool_url, category, description, submitter_email,
                       actor_hash, status, is_hidden_gem, ai_validated, ai_score, ai_notes,
                       created_at, updated_at
                FROM submissions
                WHERE status = ?
                ORDER BY created_at DESC, id DESC
                "#,
            )
            .bind(status)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, Submission>(
                r#"
                SELECT id, tool_name, tool_url, category, description, submitter_email,
                       actor_hash, status, is_hidden_gem, ai_validated, ai_score, ai_notes,
                       created_at, updated_at
                FROM submissions
                ORDER BY created_at DESC, id DESC
                "#,
            )
            .fetch_all(pool)
            .await?
        }
    };

    Ok(rows)
}

/// Set the status of a submission.
pub async fn update_status(
    pool: &SqlitePool,
    id: i64,
    status: SubmissionStatus,
) -> Result<()> {
    let result = sqlx::query(
        r#"
        UPDATE submissions
        SET status = ?, updated_at = CURRENT_TIMESTAMP
        WHERE id = ?
        "#,
    )
    .bind(status)
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(DatabaseError::NotFound {
            entity: "Submission",
            id: id.to_string(),
        });
    }

    Ok(())
}

/// Write the AI screening verdict back onto a submission.
pub async fn update_ai_validation(
    pool: &SqlitePool,
    id: i64,
    ai_validated: bool,
    ai_score: Option<i64>,
    ai_notes: Option<&str>,
) -> Result<()> {
    let result = sqlx::query(
        r#"
        UPDATE submissions
        SET ai_validated = ?, ai_score = ?, ai_notes = ?, updated_at = CURRENT_TIMESTAMP
        WHERE id = ?
        "#,
    )
    .bind(ai_validated)
    .bind(ai_score)
    .bind(ai_notes)
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(DatabaseError::NotFound {
            entity: "Submission",
            id: id.to_string(),
        });
    }

    Ok(())
}

/// Automatically reject a submission that is still pending.
///
/// Returns whether the transition happened. A submission an admin has already
/// decided on is left untouched.
pub async fn auto_reject(pool: &SqlitePool, id: i64) -> Result<bool> {
    let result = sqlx::query(
        r#"
        UPDATE submissions
        SET status = 'rejected', updated_at = CURRENT_TIMESTAMP
        WHERE id = ? AND status = 'pending'
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Database;

    async fn test_db() -> Database {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        db.migrate().await.unwrap();
        db
    }

    #[tokio::test]
    async fn test_create_starts_pending_and_unscored() {
        let db = test_db().await;

        let id = create_submission(
            db.pool(),
            "Foo",
            "https://foo.ai",
            Some("Agents"),
            Some("An agent thing"),
            None,
            "actor-a",
            false,
        )
        .await
        .unwrap();

        let submission = get_submission(db.pool(), id).await.unwrap();
        assert_eq!(submission.tool_name, "Foo");
        assert_eq!(submission.status, SubmissionStatus::Pending);
        assert!(!submission.ai_validated);
        assert_eq!(submission.ai_score, None);
        assert_eq!(submission.ai_notes, None);
    }

    #[tokio::test]
    async fn test_list_filters_by_status() {
        let db = test_db().await;

        let first = create_submission(
            db.pool(), "One", "https://one.ai", None, None, None, "actor-a", false,
        )
        .await
        .unwrap();
        let second = create_submission(
            db.pool(), "Two", "https://two.ai", None, None, None, "actor-a", false,
        )
        .await
        .unwrap();

        update_status(db.pool(), first, SubmissionStatus::Approved)
            .await
            .unwrap();

        let pending = list_submissions(db.pool(), Some(SubmissionStatus::Pending))
            .await
            .unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, second);

        let all = list_submissions(db.pool(), None).await.unwrap();
        assert_eq!(all.len(), 2);
        // Newest first
        assert_eq!(all[0].id, second);
    }

    #[tokio::test]
    async fn test_update_ai_validation() {
        let db = test_db().await;

        let id = create_submission(
            db.pool(), "Foo", "https://foo.ai", None, None, None, "actor-a", false,
        )
        .await
        .unwrap();

        update_ai_validation(db.pool(), id, true, Some(85), Some("looks legitimate"))
            .await
            .unwrap();

        let submission = get_submission(db.pool(), id).await.unwrap();
        assert!(submission.ai_validated);
        assert_eq!(submission.ai_score, Some(85));
        assert_eq!(submission.ai_notes.as_deref(), Some("looks legitimate"));
        assert_eq!(submission.status, SubmissionStatus::Pending);
    }

    #[tokio::test]
    async fn test_auto_reject_only_when_pending() {
        let db = test_db().await;

        let id = create_submission(
            db.pool(), "Spam", "https://spam.example", None, None, None, "actor-a", false,
        )
        .await
        .unwrap();

        assert!(auto_reject(db.pool(), id).await.unwrap());
        let submission = get_submission(db.pool(), id).await.unwrap();
        assert_eq!(submission.status, SubmissionStatus::Rejected);

        // Already decided: no further transition
        assert!(!auto_reject(db.pool(), id).await.unwrap());

        let approved = create_submission(
            db.pool(), "Fine", "https://fine.ai", None, None, None, "actor-a", false,
        )
        .await
        .unwrap();
        update_status(db.pool(), approved, SubmissionStatus::Approved)
            .await
            .unwrap();
        assert!(!auto_reject(db.pool(), approved).await.unwrap());
    }

    #[tokio::test]
    async fn test_update_missing_submission() {
        let db = test_db().await;

        let result = update_status(db.pool(), 9999, SubmissionStatus::Approved).await;
        assert!(matches!(result, Err(DatabaseError::NotFound { .. })));
    }
}
