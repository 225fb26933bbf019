//! Axum route handler for the keyword extraction API.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;
use url::Url;

use crate::errors::AppError;
use crate::keywords::categorize::KeywordResult;
use crate::keywords::pipeline;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ExtractKeywordsRequest {
    pub url: String,
}

/// POST /api/extract-keywords
///
/// Validates the URL, then runs the fetch → extract → categorize pipeline.
/// Syntactically invalid URLs are rejected before any network activity.
pub async fn handle_extract_keywords(
    State(state): State<AppState>,
    Json(request): Json<ExtractKeywordsRequest>,
) -> Result<Json<KeywordResult>, AppError> {
    let url = parse_request_url(&request.url)?;

    info!(%url, "extract-keywords request");

    let result = pipeline::run_extraction(state.fetcher.as_ref(), &url).await?;

    info!(
        technical = result.technical_skills.len(),
        soft = result.soft_skills.len(),
        tools = result.tools_and_technologies.len(),
        "extraction complete"
    );

    Ok(Json(result))
}

/// Parses and validates the user-supplied URL. Only http/https targets are
/// fetchable.
fn parse_request_url(raw: &str) -> Result<Url, AppError> {
    let url = Url::parse(raw.trim())
        .map_err(|_| AppError::InvalidInput("Please enter a valid URL".to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(AppError::InvalidInput(
            "Please enter a valid URL".to_string(),
        ));
    }

    Ok(url)
}
