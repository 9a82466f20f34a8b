use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::ai;
use crate::clients::groq_client::GroqClient;
use crate::error::AppError;

pub const MAX_TITLE_CHARS: usize = 200;
pub const MAX_DESCRIPTION_CHARS: usize = 8000;

#[derive(Debug, Deserialize)]
pub struct EnrichmentRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct AutotagResponse {
    pub tags: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct DescribeResponse {
    pub improved: String,
}

/// Request shape enforcement happens here, before any core logic runs.
fn validate_request(body: &EnrichmentRequest) -> Result<(), AppError> {
    let title_len = body.title.chars().count();
    if title_len == 0 || title_len > MAX_TITLE_CHARS {
        return Err(AppError::Validation(format!(
            "title must be between 1 and {} characters",
            MAX_TITLE_CHARS
        )));
    }
    if body.description.chars().count() > MAX_DESCRIPTION_CHARS {
        return Err(AppError::Validation(format!(
            "description must be at most {} characters",
            MAX_DESCRIPTION_CHARS
        )));
    }
    Ok(())
}

/// Generate 3-6 normalized tags for a task
#[instrument(skip(generator, body))]
pub async fn autotag_handler(
    generator: web::Data<GroqClient>,
    body: web::Json<EnrichmentRequest>,
) -> Result<HttpResponse, AppError> {
    validate_request(&body)?;

    let tags = ai::autotag(generator.get_ref(), &body.title, &body.description).await;

    info!("autotag produced {} tags", tags.len());
    Ok(HttpResponse::Ok().json(AutotagResponse { tags }))
}

/// Rewrite a task description as one bounded paragraph
#[instrument(skip(generator, body))]
pub async fn describe_handler(
    generator: web::Data<GroqClient>,
    body: web::Json<EnrichmentRequest>,
) -> Result<HttpResponse, AppError> {
    validate_request(&body)?;

    let improved = ai::describe(generator.get_ref(), &body.title, &body.description).await;

    info!(
        "describe produced a {}-word description",
        improved.split_whitespace().count()
    );
    Ok(HttpResponse::Ok().json(DescribeResponse { improved }))
}
