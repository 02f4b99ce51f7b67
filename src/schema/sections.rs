//! Section schema documents.
//!
//! One strict schema per configuration section. Every section object
//! rejects unknown keys (`additionalProperties: false`) so that typos in
//! field names surface as errors instead of being silently ignored, and
//! the root document does the same for misspelled section names.
//!
//! The `waf` section's `rules` entries are deliberately left loose here;
//! their polymorphic forms are resolved and validated entry by entry in
//! `validation::waf_rules`, which consumes the per-kind rule schemas at
//! the bottom of this file.

use serde_json::{json, Value};

use super::primitives::{
    arn_like, boolean, hostname, int_range, non_empty_string, string_enum, visibility_config,
};

/// Authentication modes supported by AppSync.
pub const AUTHENTICATION_TYPES: &[&str] = &[
    "API_KEY",
    "AWS_IAM",
    "AMAZON_COGNITO_USER_POOLS",
    "OPENID_CONNECT",
    "AWS_LAMBDA",
];

/// Cache instance classes accepted by the `caching.type` field.
pub const CACHING_INSTANCE_TYPES: &[&str] = &[
    "SMALL",
    "MEDIUM",
    "LARGE",
    "XLARGE",
    "LARGE_2X",
    "LARGE_4X",
    "LARGE_8X",
    "LARGE_12X",
    "T2_SMALL",
    "T2_MEDIUM",
    "R4_LARGE",
    "R4_XLARGE",
    "R4_2XLARGE",
    "R4_4XLARGE",
    "R4_8XLARGE",
];

/// The root configuration document.
///
/// Base fields are presence/type checked here; the four detailed sections
/// (`logging`, `waf`, `domain`, `caching`) and `authentication` are only
/// required to be objects at this level; their own schemas take over
/// when the section is present.
pub fn api() -> Value {
    json!({
        "type": "object",
        "additionalProperties": false,
        "required": ["name", "schema", "authentication", "dataSources", "resolvers"],
        "properties": {
            "name": non_empty_string(),
            "schema": {
                "oneOf": [
                    non_empty_string(),
                    { "type": "array", "items": non_empty_string(), "minItems": 1 }
                ]
            },
            "authentication": { "type": "object" },
            "additionalAuthentications": { "type": "array", "items": { "type": "object" } },
            "apiKeys": { "type": "array" },
            "dataSources": { "type": "object" },
            "resolvers": { "type": "object" },
            "pipelineFunctions": { "type": "object" },
            "substitutions": { "type": "object" },
            "tags": { "type": "object", "additionalProperties": { "type": "string" } },
            "xrayEnabled": boolean(),
            "introspection": boolean(),
            "queryDepthLimit": int_range(1, 75),
            "resolverCountLimit": int_range(1, 10_000),
            "visibility": string_enum(&["GLOBAL", "PRIVATE"]),
            "esbuild": { "oneOf": [{ "type": "object" }, { "const": false }] },
            "logging": { "type": "object" },
            "waf": { "type": "object" },
            "domain": { "type": "object" },
            "caching": { "type": "object" }
        }
    })
}

/// One authentication provider entry (`authentication` or one element of
/// `additionalAuthentications`). Mode-specific `config` requirements are
/// cross-field rules, enforced in `validation::business_rules`.
pub fn authentication() -> Value {
    json!({
        "type": "object",
        "additionalProperties": false,
        "required": ["type"],
        "properties": {
            "type": string_enum(AUTHENTICATION_TYPES),
            "config": { "type": "object" }
        }
    })
}

pub fn logging() -> Value {
    json!({
        "type": "object",
        "additionalProperties": false,
        "required": ["level"],
        "properties": {
            "level": string_enum(&["ALL", "ERROR", "NONE"]),
            "retentionInDays": int_range(1, 3653),
            "excludeVerboseContent": boolean(),
            "loggingRoleArn": arn_like()
        }
    })
}

/// The WAF section has two activation modes: attach an existing web ACL
/// by `arn`, or declare `rules` to be synthesized. The modes are
/// alternative shapes, never merged: each branch rejects the other
/// branch's keys.
pub fn waf() -> Value {
    json!({
        "oneOf": [
            {
                "type": "object",
                "additionalProperties": false,
                "required": ["arn"],
                "properties": {
                    "enabled": boolean(),
                    "name": non_empty_string(),
                    "arn": arn_like()
                }
            },
            {
                "type": "object",
                "additionalProperties": false,
                "required": ["rules"],
                "properties": {
                    "enabled": boolean(),
                    "name": non_empty_string(),
                    "defaultAction": string_enum(&["Allow", "Block"]),
                    "description": { "type": "string" },
                    "visibilityConfig": visibility_config(),
                    "rules": { "type": "array" }
                }
            }
        ]
    })
}

pub fn domain() -> Value {
    json!({
        "type": "object",
        "additionalProperties": false,
        "required": ["name"],
        "properties": {
            "enabled": boolean(),
            "name": hostname(),
            "certificateArn": arn_like(),
            "hostedZoneId": non_empty_string(),
            "hostedZoneName": non_empty_string(),
            "route53": {
                "oneOf": [
                    boolean(),
                    {
                        "type": "object",
                        "additionalProperties": false,
                        "properties": {
                            "hostedZoneId": non_empty_string(),
                            "hostedZoneName": non_empty_string()
                        }
                    }
                ]
            },
            "useCloudFormation": boolean()
        }
    })
}

pub fn caching() -> Value {
    json!({
        "type": "object",
        "additionalProperties": false,
        "required": ["behavior"],
        "properties": {
            "enabled": boolean(),
            "behavior": string_enum(&["FULL_REQUEST_CACHING", "PER_RESOLVER_CACHING"]),
            "type": string_enum(CACHING_INSTANCE_TYPES),
            "ttl": int_range(1, 3600),
            "atRestEncryption": boolean(),
            "transitEncryption": boolean()
        }
    })
}

// Per-kind WAF rule option schemas, applied by the rule resolver after a
// rule entry has been canonicalized.

/// Options for a throttle rule. The rate `limit` floor is imposed by the
/// WAF service itself.
pub fn throttle_rule() -> Value {
    json!({
        "type": "object",
        "additionalProperties": false,
        "properties": {
            "name": non_empty_string(),
            "action": string_enum(&["Allow", "Block"]),
            "priority": { "type": "integer", "minimum": 0 },
            "limit": { "type": "integer", "minimum": 100 },
            "aggregateKeyType": string_enum(&["IP", "FORWARDED_IP"]),
            "forwardedIPConfig": {
                "type": "object",
                "additionalProperties": false,
                "required": ["headerName", "fallbackBehavior"],
                "properties": {
                    "headerName": non_empty_string(),
                    "fallbackBehavior": string_enum(&["MATCH", "NO_MATCH"])
                }
            },
            "visibilityConfig": visibility_config()
        }
    })
}

pub fn disable_introspection_rule() -> Value {
    json!({
        "type": "object",
        "additionalProperties": false,
        "properties": {
            "name": non_empty_string(),
            "priority": { "type": "integer", "minimum": 0 },
            "visibilityConfig": visibility_config()
        }
    })
}

/// The fully qualified custom-rule form: no kind inference, the entry
/// carries its statement and visibility config directly.
pub fn custom_rule() -> Value {
    json!({
        "type": "object",
        "additionalProperties": false,
        "required": ["name", "action", "priority", "statement", "visibilityConfig"],
        "properties": {
            "name": non_empty_string(),
            "action": string_enum(&["Allow", "Block", "Count", "Captcha"]),
            "priority": { "type": "integer", "minimum": 0 },
            "statement": { "type": "object" },
            "visibilityConfig": visibility_config()
        }
    })
}
