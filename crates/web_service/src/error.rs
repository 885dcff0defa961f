use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use completion_client::CompletionError;
use serde::Serialize;
use thiserror::Error;

pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Upstream(#[from] CompletionError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

#[derive(Serialize)]
struct JsonError {
    error: String,
}

impl AppError {
    /// Message sent to the caller. Upstream and internal details stay in
    /// the server logs.
    fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::Upstream(e) => match e {
                CompletionError::RateLimited(_) => {
                    "API rate limit exceeded. Please try again in a moment.".to_string()
                }
                CompletionError::Timeout(_) => {
                    "Request timed out. The AI service is taking too long to respond. \
                     Please try again."
                        .to_string()
                }
                CompletionError::Connection(_) => {
                    "Connection error. Please check your internet connection and try again."
                        .to_string()
                }
                CompletionError::Auth(_) => {
                    "Invalid API key. Please check your configuration.".to_string()
                }
                CompletionError::Api(_) => {
                    "Error communicating with AI service. Please try again later.".to_string()
                }
                CompletionError::EmptyResponse => {
                    "Received empty response from AI service".to_string()
                }
            },
            AppError::Internal(_) => {
                "An unexpected error occurred. Please try again later.".to_string()
            }
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream(e) => match e {
                CompletionError::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
                CompletionError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
                CompletionError::Connection(_) => StatusCode::SERVICE_UNAVAILABLE,
                CompletionError::Auth(_) => StatusCode::UNAUTHORIZED,
                CompletionError::Api(_) | CompletionError::EmptyResponse => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let AppError::Internal(e) = self {
            log::error!("Unexpected error: {:?}", e);
        }
        HttpResponse::build(self.status_code()).json(JsonError {
            error: self.user_message(),
        })
    }
}
