//! Schema normalisation for OpenAI structured outputs.
//!
//! OpenAI strict mode requires:
//! 1. `additionalProperties: false` on all object schemas
//! 2. ALL properties listed in `required`, even nullable ones
//! 3. Fully inlined schemas (no `$ref` references)
//!
//! # Example
//!
//! ```rust,ignore
//! use openai_client::schema::strict_schema;
//!
//! let schema = strict_schema(serde_json::json!({
//!     "type": "object",
//!     "properties": { "fullName": { "type": ["string", "null"] } }
//! }));
//! assert_eq!(schema["required"][0], "fullName");
//! ```

use serde_json::Value;

/// Rewrite a JSON schema so OpenAI strict mode accepts it.
///
/// Idempotent: normalising an already-strict schema returns it unchanged
/// (apart from dropping `$schema`).
pub fn strict_schema(mut value: Value) -> Value {
    // Step 1: Fix all object schemas, including those in definitions
    fix_object_schemas(&mut value);

    // Step 2: Inline all $ref references (OpenAI doesn't follow refs properly)
    inline_refs(&mut value);

    // Step 3: Remove definitions and $schema (OpenAI doesn't need them)
    if let Value::Object(map) = &mut value {
        map.remove("definitions");
        map.remove("$defs");
        map.remove("$schema");
    }

    value
}

/// Adds `additionalProperties: false` and ensures all properties are in `required`.
fn fix_object_schemas(value: &mut Value) {
    if let Value::Object(map) = value {
        if map.get("type") == Some(&Value::String("object".to_string())) {
            map.insert("additionalProperties".to_string(), Value::Bool(false));

            let all_keys: Vec<Value> = match map.get("properties") {
                Some(Value::Object(props)) => {
                    props.keys().map(|k| Value::String(k.clone())).collect()
                }
                _ => Vec::new(),
            };
            map.insert("required".to_string(), Value::Array(all_keys));
        }

        for (_, v) in map.iter_mut() {
            fix_object_schemas(v);
        }
    } else if let Value::Array(arr) = value {
        for item in arr.iter_mut() {
            fix_object_schemas(item);
        }
    }
}

/// Inline all $ref references by replacing them with the schema they point at.
fn inline_refs(value: &mut Value) {
    let definitions = match value {
        Value::Object(map) => map
            .get("$defs")
            .or_else(|| map.get("definitions"))
            .cloned(),
        _ => None,
    };

    if let Some(defs) = definitions {
        inline_refs_recursive(value, &defs);
    }
}

fn inline_refs_recursive(value: &mut Value, definitions: &Value) {
    match value {
        Value::Object(map) => {
            if let Some(Value::String(ref_path)) = map.get("$ref").cloned() {
                // "#/definitions/ContactInfo" or "#/$defs/ContactInfo"
                let type_name = ref_path
                    .strip_prefix("#/definitions/")
                    .or_else(|| ref_path.strip_prefix("#/$defs/"));
                if let Some(def) = type_name.and_then(|name| definitions.get(name)) {
                    *value = def.clone();
                    inline_refs_recursive(value, definitions);
                    return;
                }
            }

            for (_, v) in map.iter_mut() {
                inline_refs_recursive(v, definitions);
            }
        }
        Value::Array(arr) => {
            for item in arr.iter_mut() {
                inline_refs_recursive(item, definitions);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_all_properties_required() {
        let schema = strict_schema(json!({
            "type": "object",
            "properties": {
                "phone": { "type": ["string", "null"] },
                "email": { "type": ["string", "null"] },
                "name": { "type": "string" }
            },
            "required": ["name"]
        }));

        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|v| v.as_str())
            .collect();

        assert!(required.contains(&"phone"), "phone should be required");
        assert!(required.contains(&"email"), "email should be required");
        assert!(required.contains(&"name"), "name should be required");
        assert_eq!(schema["additionalProperties"], false);
    }

    #[test]
    fn test_nested_ref_inlined() {
        let schema = strict_schema(json!({
            "$schema": "http://json-schema.org/draft-07/schema#",
            "type": "object",
            "properties": {
                "contact": { "$ref": "#/definitions/ContactInfo" },
                "urgency": { "type": "string" }
            },
            "definitions": {
                "ContactInfo": {
                    "type": "object",
                    "properties": {
                        "phone": { "type": ["string", "null"] },
                        "email": { "type": ["string", "null"] }
                    }
                }
            }
        }));

        let schema_obj = schema.as_object().unwrap();
        assert!(
            !schema_obj.contains_key("definitions"),
            "Schema should NOT have definitions section - refs should be inlined"
        );
        assert!(!schema_obj.contains_key("$schema"));

        let contact = schema["properties"]["contact"].as_object().unwrap();
        assert!(!contact.contains_key("$ref"), "contact should be inlined, not a $ref");
        assert_eq!(contact.get("type"), Some(&json!("object")));
        assert_eq!(contact.get("additionalProperties"), Some(&json!(false)));
        assert_eq!(contact["required"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_defs_style_refs_inlined() {
        let schema = strict_schema(json!({
            "type": "object",
            "properties": { "inner": { "$ref": "#/$defs/Inner" } },
            "$defs": { "Inner": { "type": "object", "properties": { "x": { "type": "number" } } } }
        }));

        assert!(schema.get("$defs").is_none());
        assert_eq!(schema["properties"]["inner"]["type"], "object");
        assert_eq!(schema["properties"]["inner"]["required"][0], "x");
    }

    #[test]
    fn test_idempotent() {
        let once = strict_schema(json!({
            "type": "object",
            "properties": { "a": { "type": ["number", "null"] } }
        }));
        let twice = strict_schema(once.clone());
        assert_eq!(once, twice);
    }
}
