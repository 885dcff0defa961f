use thiserror::Error;

/// Failure categories for a single upstream completion call.
///
/// Every transport or API failure the client can observe is folded into one
/// of these variants at the call boundary, so callers match on the variant
/// instead of inspecting raw errors.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("rate limit exceeded: {0}")]
    RateLimited(String),

    #[error("request timed out: {0}")]
    Timeout(String),

    #[error("connection failed: {0}")]
    Connection(String),

    #[error("authentication failed: {0}")]
    Auth(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("upstream returned no content")]
    EmptyResponse,
}

/// Classify a generic upstream API error by its message text.
///
/// The upstream API does not always surface a structured error code, so a
/// keyword check against the message decides whether the failure is a
/// credential problem. Kept as the single place this heuristic lives so it
/// can be replaced with a structured code check later.
pub fn classify_api_error(message: &str) -> CompletionError {
    let lowered = message.to_lowercase();
    if lowered.contains("invalid api key")
        || lowered.contains("incorrect api key")
        || lowered.contains("authentication")
        || lowered.contains("unauthorized")
    {
        CompletionError::Auth(message.to_string())
    } else {
        CompletionError::Api(message.to_string())
    }
}

impl From<reqwest::Error> for CompletionError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            CompletionError::Timeout(e.to_string())
        } else if e.is_connect() {
            CompletionError::Connection(e.to_string())
        } else {
            CompletionError::Api(e.to_string())
        }
    }
}
