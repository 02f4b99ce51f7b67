//! Reusable JSON Schema fragments shared by the section schemas.
//!
//! Each function returns a self-contained schema document for one scalar
//! or small composite shape. Fragments never validate anything on their
//! own; the section schemas in [`super::sections`] compose them.

use serde_json::{json, Value};

/// A string with at least one character.
pub fn non_empty_string() -> Value {
    json!({ "type": "string", "minLength": 1 })
}

pub fn boolean() -> Value {
    json!({ "type": "boolean" })
}

/// An integer within an inclusive range.
pub fn int_range(min: i64, max: i64) -> Value {
    json!({ "type": "integer", "minimum": min, "maximum": max })
}

/// A string drawn from an exact set of allowed values.
pub fn string_enum(values: &[&str]) -> Value {
    json!({ "type": "string", "enum": values })
}

/// An ARN-like value: a plain string or a structured reference
/// placeholder such as `{ "Ref": "MyRoleArn" }` or `{ "Fn::GetAtt": … }`.
pub fn arn_like() -> Value {
    json!({
        "oneOf": [
            { "type": "string", "minLength": 1 },
            { "type": "object" }
        ]
    })
}

/// A hostname-shaped string (letters, digits, dots, hyphens).
pub fn hostname() -> Value {
    json!({ "type": "string", "pattern": "^[a-zA-Z0-9][a-zA-Z0-9.-]*$" })
}

/// The monitoring metadata block attached to a WAF rule or to the WAF
/// section itself. When declared, all three fields are required.
pub fn visibility_config() -> Value {
    json!({
        "type": "object",
        "additionalProperties": false,
        "required": ["name", "cloudWatchMetricsEnabled", "sampledRequestsEnabled"],
        "properties": {
            "name": non_empty_string(),
            "cloudWatchMetricsEnabled": boolean(),
            "sampledRequestsEnabled": boolean()
        }
    })
}
