use axum::{extract::rejection::JsonRejection, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domains::suitability::{
    validate, ExtractionResult, FieldSpec, FieldViolation, FormRecord, ValidationMode,
    FORM_FIELDS,
};
use crate::server::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct MergeRequest {
    #[serde(default)]
    pub form: Value,
    #[serde(default)]
    pub extraction: Value,
}

/// `POST /api/forms/merge`
///
/// Applies an extraction result to a form without clearing entered values.
/// A missing `form` or `extraction` counts as empty.
pub async fn merge_form_handler(
    payload: Result<Json<MergeRequest>, JsonRejection>,
) -> Result<Json<FormRecord>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        ApiError::bad_request(format!("Invalid request body: {}", rejection.body_text()))
    })?;

    let form = validate_part(&request.form, "form")?;
    let extraction = ExtractionResult::new(validate_part(&request.extraction, "extraction")?);

    tracing::debug!(fields = ?extraction.cleaned().field_names(), "Merging extraction into form");

    Ok(Json(form.merged(&extraction)))
}

fn validate_part(value: &Value, name: &str) -> Result<FormRecord, ApiError> {
    if value.is_null() {
        return Ok(FormRecord::default());
    }
    validate(value, ValidationMode::Extraction)
        .map_err(|errors| ApiError::invalid("Invalid form data", errors.nested_under(name)))
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ValidationReport {
    Valid { valid: bool, form: FormRecord },
    Invalid { valid: bool, errors: Vec<FieldViolation> },
}

/// `POST /api/forms/validate`
///
/// Checks a form is complete and well-formed for submission. Nothing is
/// stored.
pub async fn validate_form_handler(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<ValidationReport>), ApiError> {
    let Json(value) = payload.map_err(|rejection| {
        ApiError::bad_request(format!("Invalid request body: {}", rejection.body_text()))
    })?;

    match validate(&value, ValidationMode::Submission) {
        Ok(form) => {
            tracing::info!("Form submission validated");
            Ok((
                StatusCode::OK,
                Json(ValidationReport::Valid { valid: true, form }),
            ))
        }
        Err(errors) => {
            tracing::info!(fields = ?errors.fields(), "Form submission rejected");
            Ok((
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ValidationReport::Invalid {
                    valid: false,
                    errors: errors.into_violations(),
                }),
            ))
        }
    }
}

/// `GET /api/forms/schema`
pub async fn form_schema_handler() -> Json<&'static [FieldSpec]> {
    Json(&FORM_FIELDS[..])
}
