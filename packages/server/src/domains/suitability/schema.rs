//! Field definitions for the financial suitability form.
//!
//! `FORM_FIELDS` is the single source of truth for field names, types and
//! descriptions. It is read when building the extraction prompt, when
//! generating the model's response schema, and when validating records.

use serde::Serialize;
use serde_json::{json, Map, Value};

/// Name the response schema is registered under with the model.
pub const RESPONSE_SCHEMA_NAME: &str = "formData";

/// Semantic type of a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Date,
    Email,
    Phone,
    Number,
}

impl FieldKind {
    /// JSON type of a present value.
    pub fn json_type(self) -> &'static str {
        match self {
            FieldKind::Number => "number",
            _ => "string",
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, FieldKind::Number)
    }
}

/// One recognized form field.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FieldSpec {
    /// Wire name (camelCase)
    pub name: &'static str,
    /// Human-readable label
    pub label: &'static str,
    pub kind: FieldKind,
    /// What the field should contain; shown to the model
    pub description: &'static str,
}

pub const FORM_FIELDS: [FieldSpec; 14] = [
    FieldSpec {
        name: "fullName",
        label: "Full Name",
        kind: FieldKind::Text,
        description: "Full legal name of the individual",
    },
    FieldSpec {
        name: "dateOfBirth",
        label: "Date of Birth",
        kind: FieldKind::Date,
        description: "Date of birth in YYYY-MM-DD format",
    },
    FieldSpec {
        name: "email",
        label: "Email",
        kind: FieldKind::Email,
        description: "Valid email address",
    },
    FieldSpec {
        name: "phone",
        label: "Phone",
        kind: FieldKind::Phone,
        description: "Phone number with area code",
    },
    FieldSpec {
        name: "address",
        label: "Address",
        kind: FieldKind::Text,
        description: "Complete mailing address",
    },
    FieldSpec {
        name: "occupation",
        label: "Occupation",
        kind: FieldKind::Text,
        description: "Current occupation or profession",
    },
    FieldSpec {
        name: "annualIncome",
        label: "Annual Income",
        kind: FieldKind::Number,
        description: "Annual income in USD (numeric value)",
    },
    FieldSpec {
        name: "netWorth",
        label: "Net Worth",
        kind: FieldKind::Number,
        description: "Total net worth in USD (numeric value)",
    },
    FieldSpec {
        name: "investmentExperience",
        label: "Investment Experience",
        kind: FieldKind::Text,
        description: "Description of previous investment experience",
    },
    FieldSpec {
        name: "riskTolerance",
        label: "Risk Tolerance",
        kind: FieldKind::Text,
        description: "Risk tolerance level (Low/Medium/High)",
    },
    FieldSpec {
        name: "investmentGoals",
        label: "Investment Goals",
        kind: FieldKind::Text,
        description: "Primary investment objectives and goals",
    },
    FieldSpec {
        name: "timeHorizon",
        label: "Investment Time Horizon",
        kind: FieldKind::Text,
        description: "Expected investment time horizon in years",
    },
    FieldSpec {
        name: "liquidityNeeds",
        label: "Liquidity Needs",
        kind: FieldKind::Text,
        description: "Description of liquidity requirements",
    },
    FieldSpec {
        name: "taxStatus",
        label: "Tax Status",
        kind: FieldKind::Text,
        description: "Current tax situation and considerations",
    },
];

/// Look up a field by its wire name.
pub fn field(name: &str) -> Option<&'static FieldSpec> {
    FORM_FIELDS.iter().find(|f| f.name == name)
}

pub fn is_known_field(name: &str) -> bool {
    field(name).is_some()
}

/// JSON schema constraining the model's reply.
///
/// Strict structured output has no notion of an optional property, so every
/// field is required but nullable; `null` stands for "not determinable".
pub fn response_json_schema() -> Value {
    let mut properties = Map::new();
    for spec in FORM_FIELDS.iter() {
        properties.insert(
            spec.name.to_string(),
            json!({
                "type": [spec.kind.json_type(), "null"],
                "description": spec.description,
            }),
        );
    }

    let required: Vec<String> = properties.keys().cloned().collect();

    json!({
        "type": "object",
        "properties": properties,
        "required": required,
        "additionalProperties": false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn field_names_are_unique() {
        let names: HashSet<_> = FORM_FIELDS.iter().map(|f| f.name).collect();
        assert_eq!(names.len(), FORM_FIELDS.len());
    }

    #[test]
    fn exactly_two_numeric_fields() {
        let numeric: Vec<_> = FORM_FIELDS
            .iter()
            .filter(|f| f.kind.is_numeric())
            .map(|f| f.name)
            .collect();
        assert_eq!(numeric, vec!["annualIncome", "netWorth"]);
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(field("email").map(|f| f.kind), Some(FieldKind::Email));
        assert!(is_known_field("taxStatus"));
        assert!(!is_known_field("ssn"));
        assert!(!is_known_field("full_name"));
    }

    #[test]
    fn response_schema_is_closed_and_nullable() {
        let schema = response_json_schema();

        assert_eq!(schema["type"], "object");
        assert_eq!(schema["additionalProperties"], false);
        assert_eq!(schema["required"].as_array().unwrap().len(), 14);

        let properties = schema["properties"].as_object().unwrap();
        assert_eq!(properties.len(), 14);
        assert_eq!(properties["annualIncome"]["type"], json!(["number", "null"]));
        assert_eq!(properties["fullName"]["type"], json!(["string", "null"]));
        assert_eq!(
            properties["annualIncome"]["description"],
            "Annual income in USD (numeric value)"
        );
    }

    #[test]
    fn response_schema_survives_strict_normalisation() {
        let schema = response_json_schema();
        assert_eq!(openai_client::strict_schema(schema.clone()), schema);
    }
}
