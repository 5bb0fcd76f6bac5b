//! Input validation helpers
//!
//! Centralized text length constants and validation functions.
//! The store itself enforces field types but not lengths, so the
//! limits live here, ahead of every create/replace.

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Item titles
pub const MAX_TITLE_LEN: usize = 200;

/// Item and comment bodies (markdown documents)
pub const MAX_BODY_LEN: usize = 65536;

/// A single tag token
pub const MAX_TAG_LEN: usize = 100;

/// Tags per item
pub const MAX_TAGS: usize = 64;

// ── Validation helpers (CRUD handlers) ──────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate an item payload. Create and replace share the same rules.
pub fn validate_item_fields(title: &str, body: &str, tags: &[String]) -> Result<(), AppError> {
    validate_required_text(title, "title", MAX_TITLE_LEN)?;

    if body.len() > MAX_BODY_LEN {
        return Err(AppError::validation(format!(
            "body is too long ({} chars, max {MAX_BODY_LEN})",
            body.len()
        )));
    }

    if tags.len() > MAX_TAGS {
        return Err(AppError::validation(format!(
            "too many tags ({}, max {MAX_TAGS})",
            tags.len()
        )));
    }
    for tag in tags {
        validate_required_text(tag, "tag", MAX_TAG_LEN)?;
    }

    Ok(())
}

/// Validate a comment payload.
pub fn validate_comment_fields(body: &str) -> Result<(), AppError> {
    validate_required_text(body, "body", MAX_BODY_LEN)
}
