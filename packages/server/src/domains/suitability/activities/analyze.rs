use openai_client::strip_code_blocks;
use thiserror::Error;

use crate::domains::suitability::models::ExtractionResult;
use crate::domains::suitability::prompts::build_system_prompt;
use crate::domains::suitability::schema::{response_json_schema, RESPONSE_SCHEMA_NAME};
use crate::domains::suitability::validation::{validate, ValidationErrors, ValidationMode};
use crate::kernel::ServerDeps;

/// Message returned to clients for every failure except an empty reply.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to process financial analysis";

/// Message returned to clients when the model produced no content.
pub const EMPTY_RESPONSE_MESSAGE: &str = "No response from OpenAI";

#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("language model call failed: {0:#}")]
    Upstream(anyhow::Error),

    #[error("language model returned no content")]
    EmptyResponse,

    #[error("model reply is not valid JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),

    #[error("model reply does not match the form schema: {0}")]
    SchemaViolation(ValidationErrors),
}

impl AnalyzeError {
    /// Fixed message safe to show the caller.
    pub fn public_message(&self) -> &'static str {
        match self {
            AnalyzeError::EmptyResponse => EMPTY_RESPONSE_MESSAGE,
            _ => GENERIC_FAILURE_MESSAGE,
        }
    }
}

/// Extract form fields from a free-text description of someone's finances.
///
/// Blank input short-circuits to an empty result without calling the model.
pub async fn analyze_financial_text(
    user_input: &str,
    deps: &ServerDeps,
) -> Result<ExtractionResult, AnalyzeError> {
    if user_input.trim().is_empty() {
        tracing::debug!("Blank input, skipping extraction");
        return Ok(ExtractionResult::default());
    }

    let system_prompt = build_system_prompt();

    tracing::info!(
        model = %deps.extraction_model,
        input_length = user_input.len(),
        "Extracting form fields from free text"
    );

    let content = deps
        .ai
        .generate_structured(
            &deps.extraction_model,
            &system_prompt,
            user_input,
            RESPONSE_SCHEMA_NAME,
            response_json_schema(),
        )
        .await
        .map_err(AnalyzeError::Upstream)?
        .ok_or(AnalyzeError::EmptyResponse)?;

    let result = parse_extraction(&content)?;

    tracing::info!(
        fields = ?result.field_names(),
        "Extraction complete"
    );

    Ok(result)
}

/// Parse and validate a raw model reply.
///
/// `null` and empty-string fields are dropped; unknown keys or wrongly typed values reject
/// the whole reply.
pub fn parse_extraction(content: &str) -> Result<ExtractionResult, AnalyzeError> {
    let value: serde_json::Value = serde_json::from_str(strip_code_blocks(content)).map_err(|e| {
        tracing::warn!(
            error = %e,
            content_length = content.len(),
            "Model reply is not JSON"
        );
        AnalyzeError::MalformedJson(e)
    })?;

    let record = validate(&value, ValidationMode::Extraction).map_err(|errors| {
        tracing::warn!(violations = %errors, "Model reply violates form schema");
        AnalyzeError::SchemaViolation(errors)
    })?;

    Ok(ExtractionResult::from(record).cleaned())
}
