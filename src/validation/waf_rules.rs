//! Polymorphic WAF rule resolution.
//!
//! A rule entry in `waf.rules` is accepted in three surface forms:
//! a bare string naming a built-in rule kind, a single-key shorthand
//! object (`{ "throttle": 500 }`, `{ "disableIntrospection": { ... } }`),
//! or a fully qualified rule object carrying its own statement. Form
//! detection is tried in that fixed order and the first match wins.
//!
//! Every form funnels into one canonical [`WafRule`] variant: the entry
//! is normalized first, validated against the kind's schema second, and
//! materialized into its typed shape last. Resolution is pure; the same
//! entry always resolves to the same rule.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::errors::{Error, Result};

use super::{check, CUSTOM_RULE, DISABLE_INTROSPECTION_RULE, THROTTLE_RULE};

/// Built-in rule kinds accepted as a bare string or a shorthand key.
pub const BUILT_IN_RULE_KINDS: &[&str] = &["throttle", "disableIntrospection"];

/// Monitoring metadata attached to a rule or to the WAF section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibilityConfig {
    pub name: String,
    pub cloud_watch_metrics_enabled: bool,
    pub sampled_requests_enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WafRuleAction {
    Allow,
    Block,
    Count,
    Captcha,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AggregateKeyType {
    Ip,
    ForwardedIp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FallbackBehavior {
    Match,
    NoMatch,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForwardedIpConfig {
    pub header_name: String,
    pub fallback_behavior: FallbackBehavior,
}

/// Canonical throttle rule options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThrottleRule {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub action: Option<WafRuleAction>,
    #[serde(default)]
    pub priority: Option<u32>,
    /// Requests per five-minute window; the WAF service floor is 100.
    #[serde(default = "default_throttle_limit")]
    pub limit: u32,
    #[serde(default)]
    pub aggregate_key_type: Option<AggregateKeyType>,
    #[serde(default, rename = "forwardedIPConfig")]
    pub forwarded_ip_config: Option<ForwardedIpConfig>,
    #[serde(default)]
    pub visibility_config: Option<VisibilityConfig>,
}

fn default_throttle_limit() -> u32 {
    100
}

impl Default for ThrottleRule {
    fn default() -> Self {
        Self {
            name: None,
            action: None,
            priority: None,
            limit: default_throttle_limit(),
            aggregate_key_type: None,
            forwarded_ip_config: None,
            visibility_config: None,
        }
    }
}

/// Canonical disableIntrospection rule options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisableIntrospectionRule {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub priority: Option<u32>,
    #[serde(default)]
    pub visibility_config: Option<VisibilityConfig>,
}

/// A fully qualified custom rule: no kind inference, the entry carries
/// its own statement, action, priority and visibility config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomWafRule {
    pub name: String,
    pub action: WafRuleAction,
    pub priority: u32,
    pub statement: Value,
    pub visibility_config: VisibilityConfig,
}

/// The canonical form every accepted rule entry resolves to.
#[derive(Debug, Clone, PartialEq)]
pub enum WafRule {
    Throttle(ThrottleRule),
    DisableIntrospection(DisableIntrospectionRule),
    Custom(CustomWafRule),
}

impl WafRule {
    /// Resolve one raw rule entry into its canonical validated form.
    ///
    /// `location` is the JSON-pointer path of the entry within the root
    /// configuration (e.g. `/waf/rules/0`), used to address violations.
    pub fn resolve(entry: &Value, location: &str) -> Result<Self> {
        match entry {
            Value::String(kind) => Self::from_kind(kind, json!({}), location),
            Value::Object(map) => match shorthand_kind(map) {
                Some(kind) => {
                    let nested = format!("{}/{}", location, kind);
                    let options = canonical_options(&kind, &map[kind.as_str()], &nested)?;
                    Self::from_kind(&kind, options, &nested)
                }
                None => Self::custom(entry, location),
            },
            _ => Err(Error::validation_field(
                "rule entry matches no accepted form: expected a built-in rule name, \
                 a shorthand object keyed by 'throttle' or 'disableIntrospection', \
                 or a fully qualified rule object",
                location,
            )),
        }
    }

    /// The kind tag of the resolved rule.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Throttle(_) => "throttle",
            Self::DisableIntrospection(_) => "disableIntrospection",
            Self::Custom(_) => "custom",
        }
    }

    /// The visibility config carried by the rule, when one was declared.
    pub fn visibility_config(&self) -> Option<&VisibilityConfig> {
        match self {
            Self::Throttle(rule) => rule.visibility_config.as_ref(),
            Self::DisableIntrospection(rule) => rule.visibility_config.as_ref(),
            Self::Custom(rule) => Some(&rule.visibility_config),
        }
    }

    fn from_kind(kind: &str, options: Value, location: &str) -> Result<Self> {
        match kind {
            "throttle" => {
                check(&THROTTLE_RULE, &options, location)?;
                let rule = serde_json::from_value(options).map_err(|e| {
                    Error::validation_field(format!("invalid throttle rule: {}", e), location)
                })?;
                Ok(Self::Throttle(rule))
            }
            "disableIntrospection" => {
                check(&DISABLE_INTROSPECTION_RULE, &options, location)?;
                let rule = serde_json::from_value(options).map_err(|e| {
                    Error::validation_field(
                        format!("invalid disableIntrospection rule: {}", e),
                        location,
                    )
                })?;
                Ok(Self::DisableIntrospection(rule))
            }
            other => Err(Error::validation_field(
                format!(
                    "unknown rule kind '{}', expected one of: {}",
                    other,
                    BUILT_IN_RULE_KINDS.join(", ")
                ),
                location,
            )),
        }
    }

    fn custom(entry: &Value, location: &str) -> Result<Self> {
        check(&CUSTOM_RULE, entry, location)?;
        let rule = serde_json::from_value(entry.clone()).map_err(|e| {
            Error::validation_field(format!("invalid custom rule: {}", e), location)
        })?;
        Ok(Self::Custom(rule))
    }
}

/// Shorthand detection: an object with exactly one key naming a built-in
/// rule kind. Multi-key objects and unknown single keys fall through to
/// the fully qualified form.
fn shorthand_kind(map: &Map<String, Value>) -> Option<String> {
    if map.len() != 1 {
        return None;
    }
    let key = map.keys().next()?;
    if BUILT_IN_RULE_KINDS.contains(&key.as_str()) {
        Some(key.clone())
    } else {
        None
    }
}

/// Normalize a shorthand value into the kind's options object. A bare
/// number is a throttle rate limit; anything else must already be an
/// options object.
fn canonical_options(kind: &str, value: &Value, location: &str) -> Result<Value> {
    match (kind, value) {
        ("throttle", Value::Number(_)) => Ok(json!({ "limit": value })),
        (_, Value::Object(_)) => Ok(value.clone()),
        ("throttle", _) => Err(Error::validation_field(
            "throttle shorthand takes a rate limit number or an options object",
            location,
        )),
        (_, _) => Err(Error::validation_field(
            format!("'{}' shorthand takes an options object", kind),
            location,
        )),
    }
}
