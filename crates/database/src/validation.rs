//! Input validation for submission, favorite, and click fields.
//!
//! All checks run at the request boundary, before anything is persisted.

use std::fmt;

use url::Url;

/// Validation error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Invalid URL format.
    InvalidUrl(String),
    /// Invalid email format.
    InvalidEmail(String),
    /// Value too long.
    TooLong { field: String, max: usize, actual: usize },
    /// Empty value where one is required.
    Empty(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidUrl(msg) => write!(f, "Invalid URL: {}", msg),
            ValidationError::InvalidEmail(msg) => write!(f, "Invalid email: {}", msg),
            ValidationError::TooLong { field, max, actual } => {
                write!(f, "{} is too long ({} chars, max {})", field, actual, max)
            }
            ValidationError::Empty(field) => write!(f, "{} cannot be empty", field),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Maximum allowed length for tool names.
pub const MAX_TOOL_NAME_LENGTH: usize = 256;

/// Maximum allowed length for tool URLs.
pub const MAX_TOOL_URL_LENGTH: usize = 512;

/// Maximum allowed length for category names.
pub const MAX_CATEGORY_LENGTH: usize = 128;

/// Maximum allowed length for tool descriptions.
pub const MAX_DESCRIPTION_LENGTH: usize = 2000;

/// Maximum allowed length for submitter email addresses.
pub const MAX_EMAIL_LENGTH: usize = 320;

/// Maximum allowed length for tool IDs.
pub const MAX_TOOL_ID_LENGTH: usize = 128;

/// Validate a tool name: non-empty after trimming, within length bounds.
pub fn validate_tool_name(name: &str) -> Result<(), ValidationError> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Empty("tool name".to_string()));
    }

    if name.len() > MAX_TOOL_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: "tool name".to_string(),
            max: MAX_TOOL_NAME_LENGTH,
            actual: name.len(),
        });
    }

    Ok(())
}

/// Validate a tool URL: must parse as an absolute URL and fit the column.
pub fn validate_tool_url(raw: &str) -> Result<(), ValidationError> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Err(ValidationError::Empty("tool URL".to_string()));
    }

    if raw.len() > MAX_TOOL_URL_LENGTH {
        return Err(ValidationError::TooLong {
            field: "tool URL".to_string(),
            max: MAX_TOOL_URL_LENGTH,
            actual: raw.len(),
        });
    }

    Url::parse(raw).map_err(|e| ValidationError::InvalidUrl(e.to_string()))?;

    Ok(())
}

/// Validate a display URL carried by favorites and clicks.
///
/// Only the column length is enforced; display URLs are never dereferenced
/// server-side.
pub fn validate_url_length(raw: &str) -> Result<(), ValidationError> {
    if raw.len() > MAX_TOOL_URL_LENGTH {
        return Err(ValidationError::TooLong {
            field: "tool URL".to_string(),
            max: MAX_TOOL_URL_LENGTH,
            actual: raw.len(),
        });
    }

    Ok(())
}

/// Validate an optional category suggestion.
pub fn validate_category(category: &str) -> Result<(), ValidationError> {
    if category.len() > MAX_CATEGORY_LENGTH {
        return Err(ValidationError::TooLong {
            field: "category".to_string(),
            max: MAX_CATEGORY_LENGTH,
            actual: category.len(),
        });
    }

    Ok(())
}

/// Validate an optional free-text description.
pub fn validate_description(description: &str) -> Result<(), ValidationError> {
    if description.len() > MAX_DESCRIPTION_LENGTH {
        return Err(ValidationError::TooLong {
            field: "description".to_string(),
            max: MAX_DESCRIPTION_LENGTH,
            actual: description.len(),
        });
    }

    Ok(())
}

/// Validate a tool ID used by favorites and click tracking.
pub fn validate_tool_id(tool_id: &str) -> Result<(), ValidationError> {
    let tool_id = tool_id.trim();

    if tool_id.is_empty() {
        return Err(ValidationError::Empty("tool id".to_string()));
    }

    if tool_id.len() > MAX_TOOL_ID_LENGTH {
        return Err(ValidationError::TooLong {
            field: "tool id".to_string(),
            max: MAX_TOOL_ID_LENGTH,
            actual: tool_id.len(),
        });
    }

    Ok(())
}

/// Validate an email address (basic RFC 5322 format check).
///
/// This is a basic validation that checks:
/// - Contains exactly one @
/// - Has at least one character before @
/// - Has at least one character after @
/// - Has at least one dot after @
/// - Is not too long
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let email = email.trim();

    if email.is_empty() {
        return Err(ValidationError::Empty("email".to_string()));
    }

    if email.len() > MAX_EMAIL_LENGTH {
        return Err(ValidationError::TooLong {
            field: "email".to_string(),
            max: MAX_EMAIL_LENGTH,
            actual: email.len(),
        });
    }

    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return Err(ValidationError::InvalidEmail(
            "must contain exactly one @ symbol".to_string(),
        ));
    }

    let (local, domain) = (parts[0], parts[1]);

    if local.is_empty() {
        return Err(ValidationError::InvalidEmail(
            "missing local part (before @)".to_string(),
        ));
    }

    if domain.is_empty() {
        return Err(ValidationError::InvalidEmail(
            "missing domain (after @)".to_string(),
        ));
    }

    if !domain.contains('.') {
        return Err(ValidationError::InvalidEmail(
            "domain must contain at least one dot".to_string(),
        ));
    }

    if domain.starts_with('.') || domain.ends_with('.') {
        return Err(ValidationError::InvalidEmail(
            "domain cannot start or end with a dot".to_string(),
        ));
    }

    if domain.contains("..") {
        return Err(ValidationError::InvalidEmail(
            "domain cannot contain consecutive dots".to_string(),
        ));
    }

    Ok(())
}
