//! Topic sanitization and validation.
//!
//! Runs before any upstream call: a topic that fails here is rejected with
//! a 400 and the completion API is never contacted.

use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::AppError;

pub const MIN_TOPIC_LENGTH: usize = 3;
pub const MAX_TOPIC_LENGTH: usize = 200;

// C0 controls except tab/newline/CR, plus DEL and the C1 range.
static CONTROL_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\x00-\x08\x0B\x0C\x0E-\x1F\x7F\x{80}-\x{9F}]").unwrap());

// Runs of 3 or more whitespace characters collapse to a single space.
static WHITESPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s{3,}").unwrap());

/// Strip control characters and normalize whitespace. Idempotent.
pub fn sanitize(raw: &str) -> String {
    let trimmed = raw.trim();
    let without_controls = CONTROL_CHARS.replace_all(trimmed, "");
    let collapsed = WHITESPACE_RUNS.replace_all(&without_controls, " ");
    collapsed.trim().to_string()
}

/// Sanitize the raw topic and enforce the length bounds.
///
/// Checks run in order and the first failure wins: empty, too short, too
/// long. Lengths count characters, not bytes.
pub fn sanitize_and_validate(raw: &str) -> Result<String, AppError> {
    let topic = sanitize(raw);

    if topic.is_empty() {
        warn!("Empty topic received");
        return Err(AppError::Validation("Please enter a blog topic".to_string()));
    }

    let length = topic.chars().count();
    if length < MIN_TOPIC_LENGTH {
        warn!("Topic too short: {} characters", length);
        return Err(AppError::Validation(format!(
            "Topic must be at least {MIN_TOPIC_LENGTH} characters long"
        )));
    }
    if length > MAX_TOPIC_LENGTH {
        warn!("Topic too long: {} characters", length);
        return Err(AppError::Validation(format!(
            "Topic must not exceed {MAX_TOPIC_LENGTH} characters"
        )));
    }

    Ok(topic)
}
