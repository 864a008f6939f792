// TestDependencies - mock implementations for testing
//
// Provides mock services that can be injected into ServerDeps for tests.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::{BaseAI, ServerDeps, DEFAULT_EXTRACTION_MODEL};

// =============================================================================
// Mock AI (Generic LLM capabilities)
// =============================================================================

/// Arguments captured from a structured generation call
#[derive(Debug, Clone)]
pub struct StructuredCall {
    pub model: String,
    pub system_prompt: String,
    pub user_prompt: String,
    pub schema_name: String,
    pub schema: serde_json::Value,
}

/// A queued reply
#[derive(Debug, Clone)]
enum MockReply {
    Content(String),
    Empty,
    Failure(String),
}

pub struct MockAI {
    replies: Arc<Mutex<Vec<MockReply>>>,
    calls: Arc<Mutex<Vec<StructuredCall>>>,
}

impl MockAI {
    pub fn new() -> Self {
        Self {
            replies: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a raw text reply to the queue
    pub fn with_response(self, response: impl Into<String>) -> Self {
        self.push(MockReply::Content(response.into()))
    }

    /// Add a JSON reply to the queue (will be serialized)
    pub fn with_json_response<T: serde::Serialize>(self, data: &T) -> Self {
        let json = serde_json::to_string(data).expect("Failed to serialize mock response");
        self.push(MockReply::Content(json))
    }

    /// Queue a reply that carries no content
    pub fn with_empty_response(self) -> Self {
        self.push(MockReply::Empty)
    }

    /// Queue an upstream failure (network/auth/API error)
    pub fn with_failure(self, message: impl Into<String>) -> Self {
        self.push(MockReply::Failure(message.into()))
    }

    fn push(self, reply: MockReply) -> Self {
        self.replies.lock().unwrap().push(reply);
        self
    }

    /// Get all calls that were sent to the AI
    pub fn calls(&self) -> Vec<StructuredCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Get the last call sent to the AI
    pub fn last_call(&self) -> Option<StructuredCall> {
        self.calls.lock().unwrap().last().cloned()
    }

    /// Check if a user prompt containing the given text was sent
    pub fn was_called_with(&self, text: &str) -> bool {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .any(|c| c.user_prompt.contains(text))
    }

    /// Get the number of times the AI was called
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Default for MockAI {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseAI for MockAI {
    async fn generate_structured(
        &self,
        model: &str,
        system_prompt: &str,
        user_prompt: &str,
        schema_name: &str,
        schema: serde_json::Value,
    ) -> Result<Option<String>> {
        // Record the call
        self.calls.lock().unwrap().push(StructuredCall {
            model: model.to_string(),
            system_prompt: system_prompt.to_string(),
            user_prompt: user_prompt.to_string(),
            schema_name: schema_name.to_string(),
            schema,
        });

        let reply = {
            let mut replies = self.replies.lock().unwrap();
            if replies.is_empty() {
                // Default: model found nothing it could determine
                MockReply::Content("{}".to_string())
            } else {
                replies.remove(0)
            }
        };

        match reply {
            MockReply::Content(content) => Ok(Some(content)),
            MockReply::Empty => Ok(None),
            MockReply::Failure(message) => Err(anyhow::anyhow!(message)),
        }
    }
}

// =============================================================================
// TestDependencies
// =============================================================================

pub struct TestDependencies {
    pub ai: Arc<MockAI>,
    pub extraction_model: String,
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            ai: Arc::new(MockAI::new()),
            extraction_model: DEFAULT_EXTRACTION_MODEL.to_string(),
        }
    }

    /// Set a mock AI
    pub fn mock_ai(mut self, ai: MockAI) -> Self {
        self.ai = Arc::new(ai);
        self
    }

    /// Set the model id reported to the AI
    pub fn extraction_model(mut self, model: impl Into<String>) -> Self {
        self.extraction_model = model.into();
        self
    }

    /// Convert into ServerDeps, keeping a handle on the mock for assertions
    pub fn into_server_deps(self) -> (ServerDeps, Arc<MockAI>) {
        let ai = self.ai.clone();
        (ServerDeps::new(self.ai, self.extraction_model), ai)
    }
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}
