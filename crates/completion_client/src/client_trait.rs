use async_trait::async_trait;

use crate::api::models::{ChatCompletionRequest, ChatCompletionResponse};
use crate::error::CompletionError;

/// Seam between the HTTP layer and the upstream completion API.
///
/// The web service depends on this trait so tests can substitute a mock
/// backend without network access.
#[async_trait]
pub trait CompletionClientTrait: Send + Sync {
    /// Issue a single completion call. One attempt, no retries; failures
    /// come back already classified.
    async fn complete(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, CompletionError>;

    /// Default model identifier this client targets.
    fn default_model(&self) -> &str;
}
