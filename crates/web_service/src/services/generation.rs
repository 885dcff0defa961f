//! Blog generation orchestrator.
//!
//! Builds the prompt pair for a validated topic, makes a single upstream
//! completion call and shapes the result. No retries; failures come back
//! from the client already classified and are surfaced immediately.

use std::sync::Arc;

use completion_client::{
    ChatCompletionRequest, ChatMessage, CompletionClientTrait, CompletionError,
};
use log::{error, info};

use crate::error::AppError;

pub const MAX_TOKENS: u32 = 800;
pub const TEMPERATURE: f32 = 0.7;

const SYSTEM_PROMPT: &str = "You are a professional blog writer who creates engaging, \
     informative, and well-structured blog posts. Your writing is clear, concise, and \
     engaging for a general audience.";

const TOPIC_PREVIEW_CHARS: usize = 50;

/// Generated post plus the metadata echoed back to the caller.
#[derive(Debug, Clone)]
pub struct BlogPost {
    pub blog: String,
    pub topic: String,
    pub word_count: usize,
}

pub struct GenerationService {
    client: Arc<dyn CompletionClientTrait>,
}

impl GenerationService {
    pub fn new(client: Arc<dyn CompletionClientTrait>) -> Self {
        Self { client }
    }

    /// Generate a blog post for an already sanitized topic.
    pub async fn generate(&self, topic: &str) -> Result<BlogPost, AppError> {
        let preview: String = topic.chars().take(TOPIC_PREVIEW_CHARS).collect();
        info!("Generating blog for topic: {}...", preview);

        let request = ChatCompletionRequest {
            model: self.client.default_model().to_string(),
            messages: vec![
                ChatMessage::system(SYSTEM_PROMPT),
                ChatMessage::user(build_user_prompt(topic)),
            ],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        let response = self.client.complete(request).await.map_err(|e| {
            error!("Completion call failed: {}", e);
            AppError::Upstream(e)
        })?;

        let content = match response.first_content() {
            Some(content) => content,
            None => {
                error!("Empty response from completion API");
                return Err(AppError::Upstream(CompletionError::EmptyResponse));
            }
        };

        let blog = content.trim().to_string();
        let word_count = blog.split_whitespace().count();
        info!(
            "Successfully generated blog post ({} characters)",
            blog.chars().count()
        );

        Ok(BlogPost {
            blog,
            topic: topic.to_string(),
            word_count,
        })
    }
}

/// User-role instruction with the topic interpolated verbatim.
pub fn build_user_prompt(topic: &str) -> String {
    format!(
        "Write a comprehensive blog post (approximately 400-500 words) about: {topic}. \
         Structure it with:\n\
         1. An engaging introduction that hooks the reader\n\
         2. Well-organized main content with clear paragraphs\n\
         3. A thoughtful conclusion that summarizes key points\n\
         Make it informative, engaging, and easy to read."
    )
}
