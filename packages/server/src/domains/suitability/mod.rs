//! Financial suitability domain - the form record, its field schema and
//! AI-assisted autofill from free text.
//!
//! # Flow
//!
//! ```text
//! free text → activities::analyze_financial_text → BaseAI (json_schema) → validate → ExtractionResult
//! ExtractionResult + FormRecord → FormRecord::merge
//! ```
//!
//! `schema::FORM_FIELDS` drives the prompt, the response schema and validation.

pub mod activities;
pub mod models;
pub mod prompts;
pub mod schema;
pub mod validation;

pub use activities::{analyze_financial_text, AnalyzeError};
pub use models::{ExtractionResult, FieldValue, FormRecord};
pub use schema::{FieldKind, FieldSpec, FORM_FIELDS};
pub use validation::{validate, FieldViolation, ValidationErrors, ValidationMode};
