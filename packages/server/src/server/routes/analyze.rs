use axum::{
    extract::{rejection::JsonRejection, Extension},
    Json,
};
use serde::Deserialize;

use crate::domains::suitability::activities::analyze::GENERIC_FAILURE_MESSAGE;
use crate::domains::suitability::{analyze_financial_text, ExtractionResult};
use crate::server::app::AppState;
use crate::server::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(rename = "userInput")]
    pub user_input: String,
}

/// `POST /api/analyze-financial`
///
/// Returns the fields the model could determine from `userInput`. Every
/// failure, including an unreadable request body, is a 500 with a fixed
/// message.
pub async fn analyze_financial_handler(
    Extension(state): Extension<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<ExtractionResult>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection, "Invalid analyze request body");
        ApiError::internal(GENERIC_FAILURE_MESSAGE)
    })?;

    let result = analyze_financial_text(&request.user_input, &state.deps).await?;

    Ok(Json(result))
}
