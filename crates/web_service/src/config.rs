//! Configuration for the blog generation service.
//!
//! Read once at process start and passed by value into the server; request
//! handling never touches the environment.

use anyhow::{anyhow, Result};

const DEFAULT_PORT: u16 = 5000;

/// Immutable service configuration.
///
/// Environment variables:
/// - `OPENAI_API_KEY`: upstream API credential (required)
/// - `PORT`: listening port (default: 5000)
/// - `DEBUG`: verbose log default (default: true)
/// - `OPENAI_BASE_URL`: upstream base URL override (optional)
/// - `OPENAI_MODEL`: model identifier override (optional)
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub api_key: String,
    pub port: u16,
    pub debug: bool,
    pub base_url: Option<String>,
    pub model: Option<String>,
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| anyhow!("OPENAI_API_KEY environment variable is required"))?;
        Ok(Self {
            api_key,
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            debug: std::env::var("DEBUG")
                .map(|v| v.to_lowercase() == "true")
                .unwrap_or(true),
            base_url: std::env::var("OPENAI_BASE_URL").ok(),
            model: std::env::var("OPENAI_MODEL").ok(),
        })
    }
}
