use std::time::Duration;

use async_trait::async_trait;
use log::{error, info};
use reqwest::{Client, StatusCode};

use crate::api::models::{ChatCompletionRequest, ChatCompletionResponse};
use crate::client_trait::CompletionClientTrait;
use crate::error::{classify_api_error, CompletionError};

/// Upper bound on a single upstream call, connection and body included.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Reqwest-backed client for an OpenAI-compatible chat-completion API.
///
/// Immutable after construction; the inner `reqwest::Client` is safe to
/// share across concurrent requests.
pub struct CompletionClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

// Panics only if the TLS backend cannot be initialized, like
// `reqwest::Client::new`.
fn build_http_client(timeout: Duration) -> Client {
    Client::builder()
        .timeout(timeout)
        .build()
        .expect("failed to build HTTP client")
}

impl CompletionClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: build_http_client(REQUEST_TIMEOUT),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Override the per-call timeout. Mainly for tests.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.client = build_http_client(timeout);
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

#[async_trait]
impl CompletionClientTrait for CompletionClient {
    async fn complete(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, CompletionError> {
        let url = format!("{}/chat/completions", self.base_url);
        info!("Sending completion request to {} (model: {})", url, request.model);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            let text = response.text().await.unwrap_or_default();
            error!("Upstream rate limit hit: {}", text);
            return Err(CompletionError::RateLimited(text));
        }

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let detail = format!("HTTP {}: {}", status, text);
            error!("Upstream API error: {}", detail);
            // Status line is part of the classified message so a bare 401
            // still sniffs as an auth failure.
            return Err(classify_api_error(&detail));
        }

        let parsed = response.json::<ChatCompletionResponse>().await?;
        Ok(parsed)
    }

    fn default_model(&self) -> &str {
        &self.model
    }
}
