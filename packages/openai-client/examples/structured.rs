//! Structured output example with JSON schema

use openai_client::{OpenAIClient, StructuredRequest};
use serde_json::json;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = OpenAIClient::from_env()?;

    // Nullable properties let the model leave out what it can't infer
    let schema = json!({
        "type": "object",
        "properties": {
            "name": {
                "type": ["string", "null"],
                "description": "The person's name"
            },
            "age": {
                "type": ["number", "null"],
                "description": "The person's age"
            },
            "occupation": {
                "type": ["string", "null"],
                "description": "The person's job"
            }
        }
    });

    let system = "Extract person information from text. Use null for anything not stated.";
    let user = "John Smith is a 35 year old software engineer.";

    let response = client
        .structured_output(StructuredRequest::new("gpt-4o", system, user, "person", schema))
        .await?;

    println!("Structured output: {}", response.content);

    let parsed: serde_json::Value = serde_json::from_str(&response.content)?;
    println!("\nParsed:");
    println!("  Name: {}", parsed["name"]);
    println!("  Age: {}", parsed["age"]);
    println!("  Occupation: {}", parsed["occupation"]);

    Ok(())
}
