// AI implementation using OpenAI
//
// This is the infrastructure implementation of BaseAI.
// Business logic (what to prompt for) lives in domain layers.

use anyhow::{Context, Result};
use async_trait::async_trait;
use openai_client::{OpenAIClient, StructuredRequest};

use super::BaseAI;

/// OpenAI implementation of AI capabilities
#[derive(Clone)]
pub struct OpenAIAdapter {
    client: OpenAIClient,
}

impl OpenAIAdapter {
    pub fn new(client: OpenAIClient) -> Self {
        Self { client }
    }

    /// Build from an API key and optional base URL override.
    pub fn from_key(api_key: impl Into<String>, base_url: Option<&str>) -> Self {
        let client = OpenAIClient::new(api_key);
        let client = match base_url {
            Some(url) => client.with_base_url(url),
            None => client,
        };
        Self::new(client)
    }
}

/// Reasoning models reject an explicit temperature.
fn supports_temperature(model: &str) -> bool {
    !(model.starts_with("o1")
        || model.starts_with("o3")
        || model.starts_with("gpt-5")
        || model.contains("-o1")
        || model.contains("-o3"))
}

#[async_trait]
impl BaseAI for OpenAIAdapter {
    async fn generate_structured(
        &self,
        model: &str,
        system_prompt: &str,
        user_prompt: &str,
        schema_name: &str,
        schema: serde_json::Value,
    ) -> Result<Option<String>> {
        let mut request =
            StructuredRequest::new(model, system_prompt, user_prompt, schema_name, schema);
        if !supports_temperature(model) {
            request = request.temperature(None);
        }

        tracing::info!(model, schema = schema_name, "Calling OpenAI API");

        match self.client.structured_output(request).await {
            Ok(response) => {
                tracing::info!(
                    response_length = response.content.len(),
                    total_tokens = ?response.usage.as_ref().map(|u| u.total_tokens),
                    model,
                    "OpenAI API response received"
                );
                Ok(Some(response.content))
            }
            Err(e) if e.is_empty_response() => {
                tracing::warn!(model, "OpenAI returned no content");
                Ok(None)
            }
            Err(e) => {
                tracing::error!(error = %e, model, "OpenAI API call failed");
                Err(e).context("Failed to call OpenAI API")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temperature_support() {
        assert!(supports_temperature("gpt-4o"));
        assert!(supports_temperature("gpt-4o-mini"));
        assert!(!supports_temperature("o1-preview"));
        assert!(!supports_temperature("o3-mini"));
        assert!(!supports_temperature("gpt-5-mini"));
    }
}
