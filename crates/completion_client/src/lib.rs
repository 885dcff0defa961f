pub mod api;
pub mod client_trait;
pub mod error;

pub use api::client::CompletionClient;
pub use api::models::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
pub use client_trait::CompletionClientTrait;
pub use error::{classify_api_error, CompletionError};
