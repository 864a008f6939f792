//! Server dependencies (using traits for testability)
//!
//! All external services sit behind trait abstractions so tests can swap in
//! mocks from `test_dependencies`.

use std::sync::Arc;

use crate::kernel::BaseAI;

/// Default model for form extraction.
pub const DEFAULT_EXTRACTION_MODEL: &str = "gpt-4o";

/// Server dependencies shared by every request handler
#[derive(Clone)]
pub struct ServerDeps {
    /// AI client for structured extraction
    pub ai: Arc<dyn BaseAI>,
    /// Model id passed on every extraction call
    pub extraction_model: String,
}

impl ServerDeps {
    pub fn new(ai: Arc<dyn BaseAI>, extraction_model: impl Into<String>) -> Self {
        Self {
            ai,
            extraction_model: extraction_model.into(),
        }
    }
}
