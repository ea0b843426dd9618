//! Database models.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Lifecycle status of a tool submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum SubmissionStatus {
    /// Awaiting a moderation decision.
    Pending,
    /// Accepted into the directory.
    Approved,
    /// Declined, either by an admin or by auto-rejection.
    Rejected,
}

impl SubmissionStatus {
    /// Canonical lowercase name, as stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Pending => "pending",
            SubmissionStatus::Approved => "approved",
            SubmissionStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubmissionStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "pending" => Ok(SubmissionStatus::Pending),
            "approved" => Ok(SubmissionStatus::Approved),
            "rejected" => Ok(SubmissionStatus::Rejected),
            other => Err(format!("unknown submission status: {}", other)),
        }
    }
}

/// A user-submitted tool awaiting (or past) moderation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    /// Auto-incrementing ID.
    pub id: i64,
    /// Name of the submitted tool.
    pub tool_name: String,
    /// URL of the submitted tool.
    pub tool_url: String,
    /// Suggested category, if any.
    pub category: Option<String>,
    /// Free-text description, if any.
    pub description: Option<String>,
    /// Submitter's email, if provided.
    pub submitter_email: Option<String>,
    /// Hashed network address of the submitter.
    pub actor_hash: String,
    /// Lifecycle status.
    pub status: SubmissionStatus,
    /// Submitter-asserted hidden gem flag.
    pub is_hidden_gem: bool,
    /// Whether AI screening has run for this submission.
    pub ai_validated: bool,
    /// AI screening score (0-100), if scored.
    pub ai_score: Option<i64>,
    /// AI screening notes, if scored.
    pub ai_notes: Option<String>,
    /// Creation timestamp.
    pub created_at: String,
    /// Last update timestamp.
    pub updated_at: String,
}

/// A favorited tool, scoped to an actor hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    /// Auto-incrementing ID.
    pub id: i64,
    /// Hashed network address of the actor.
    pub actor_hash: String,
    /// Tool ID from the directory data.
    pub tool_id: String,
    /// Tool name for display.
    pub tool_name: String,
    /// Tool URL, if known.
    pub tool_url: Option<String>,
    /// Category of the tool, if known.
    pub category: Option<String>,
    /// Creation timestamp.
    pub created_at: String,
}

/// Aggregated click counts for one tool over the trending window.
///
/// Click events themselves are append-only and only ever read through this
/// aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TrendingTool {
    /// Tool ID from the directory data.
    pub tool_id: String,
    /// Display name carried from the most recent click.
    pub tool_name: String,
    /// URL carried from the most recent click.
    pub tool_url: Option<String>,
    /// Category carried from the most recent click.
    pub category: Option<String>,
    /// Number of clicks inside the window.
    pub click_count: i64,
}
