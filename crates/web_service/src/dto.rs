//! Request and response bodies for the HTTP surface.
use serde::{Deserialize, Serialize};

/// Form payload for `POST /generate`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GenerateForm {
    #[serde(default)]
    pub topic: String,
}

/// Successful generation response.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BlogResponse {
    pub blog: String,
    pub topic: String,
    pub word_count: usize,
}

/// Body of `GET /health`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}
