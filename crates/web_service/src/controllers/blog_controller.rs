use actix_web::{post, web, HttpResponse};

use crate::dto::{BlogResponse, GenerateForm};
use crate::error::AppError;
use crate::server::AppState;
use crate::services::topic;

/// Generate a blog post for the submitted topic.
///
/// Validation failures return 400 without contacting the upstream API.
#[post("/generate")]
pub async fn generate_blog(
    form: web::Form<GenerateForm>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let topic = topic::sanitize_and_validate(&form.topic)?;
    let post = state.generation.generate(&topic).await?;

    Ok(HttpResponse::Ok().json(BlogResponse {
        blog: post.blog,
        topic: post.topic,
        word_count: post.word_count,
    }))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(generate_blog);
}
