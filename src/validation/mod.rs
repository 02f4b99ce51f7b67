//! # Validation Engine
//!
//! Top-level validation for AppSync deployment configuration. The engine
//! runs in three layers:
//! 1. Shape validation of the root document and of each present section
//!    against its compiled JSON Schema (types, required fields, enums,
//!    numeric ranges, unknown-key rejection)
//! 2. Cross-field business rules for constraints a single field cannot
//!    express (see `business_rules`)
//! 3. Per-entry resolution of polymorphic WAF rules into their canonical
//!    form (see `waf_rules`)
//!
//! Validation is a pure, synchronous computation: the schema set is
//! compiled once into process-wide statics and never mutated, the input
//! is only read, and the first violation anywhere aborts the call with a
//! single field-addressed error.

use jsonschema::{Draft, Validator};
use once_cell::sync::Lazy;
use serde_json::Value;
use tracing::debug;

use crate::errors::{Error, Result};
use crate::schema::sections;

pub mod business_rules;
pub mod waf_rules;

static API: Lazy<Validator> = Lazy::new(|| compile(sections::api()));
static AUTHENTICATION: Lazy<Validator> = Lazy::new(|| compile(sections::authentication()));
static LOGGING: Lazy<Validator> = Lazy::new(|| compile(sections::logging()));
static WAF: Lazy<Validator> = Lazy::new(|| compile(sections::waf()));
static DOMAIN: Lazy<Validator> = Lazy::new(|| compile(sections::domain()));
static CACHING: Lazy<Validator> = Lazy::new(|| compile(sections::caching()));
pub(crate) static THROTTLE_RULE: Lazy<Validator> =
    Lazy::new(|| compile(sections::throttle_rule()));
pub(crate) static DISABLE_INTROSPECTION_RULE: Lazy<Validator> =
    Lazy::new(|| compile(sections::disable_introspection_rule()));
pub(crate) static CUSTOM_RULE: Lazy<Validator> = Lazy::new(|| compile(sections::custom_rule()));

fn compile(schema: Value) -> Validator {
    // The documents are embedded and exercised by tests; a compile
    // failure here is a programming error, not a runtime condition.
    Validator::options()
        .with_draft(Draft::Draft7)
        .build(&schema)
        .expect("embedded configuration schema must compile")
}

/// Run one compiled validator against `value`, folding every violation
/// into a single error whose message lines are prefixed with the
/// absolute instance path (e.g. `/waf/rules/0/limit`). `location` is the
/// JSON-pointer prefix of `value` within the root document.
pub(crate) fn check(validator: &Validator, value: &Value, location: &str) -> Result<()> {
    let mut violations: Vec<(String, String)> = validator
        .iter_errors(value)
        .map(|error| (format!("{}{}", location, error.instance_path), error.to_string()))
        .collect();

    if violations.is_empty() {
        return Ok(());
    }

    // Deepest paths first, so the most specific violation leads the
    // message and becomes the reported field.
    violations.sort_by_key(|(path, _)| std::cmp::Reverse(path.matches('/').count()));

    let lines: Vec<String> = violations
        .iter()
        .map(|(path, message)| {
            if path.is_empty() {
                message.clone()
            } else {
                format!("{}: {}", path, message)
            }
        })
        .collect();

    let message = match lines.len() {
        1 => lines.join(""),
        n => format!("{} violations:\n  - {}", n, lines.join("\n  - ")),
    };

    let field = violations[0].0.clone();
    if field.is_empty() {
        Err(Error::validation(message))
    } else {
        Err(Error::validation_field(message, field))
    }
}

/// Validate a raw AppSync deployment configuration.
///
/// Returns `Ok(true)` when the configuration is valid. The first
/// violation aborts the call with an [`Error::Validation`] whose message
/// names the offending field and the broken constraint. The input is
/// never mutated or defaulted; normalization is the synthesis stage's
/// job.
///
/// Sections are validated only when present: a configuration without a
/// `waf` section is a configuration that does not deploy a web ACL, not
/// an invalid one.
pub fn validate_config(config: &Value) -> Result<bool> {
    debug!("Validating AppSync deployment configuration");

    check(&API, config, "")?;

    if let Some(authentication) = config.get("authentication") {
        check(&AUTHENTICATION, authentication, "/authentication")?;
        business_rules::validate_authentication_mode(authentication, "/authentication")?;
    }

    if let Some(entries) = config.get("additionalAuthentications").and_then(Value::as_array) {
        for (index, entry) in entries.iter().enumerate() {
            let location = format!("/additionalAuthentications/{}", index);
            check(&AUTHENTICATION, entry, &location)?;
            business_rules::validate_authentication_mode(entry, &location)?;
        }
    }

    if let Some(logging) = config.get("logging") {
        check(&LOGGING, logging, "/logging")?;
    }

    if let Some(waf) = config.get("waf") {
        check(&WAF, waf, "/waf")?;
        if let Some(rules) = waf.get("rules").and_then(Value::as_array) {
            for (index, rule) in rules.iter().enumerate() {
                waf_rules::WafRule::resolve(rule, &format!("/waf/rules/{}", index))?;
            }
        }
    }

    if let Some(domain) = config.get("domain") {
        check(&DOMAIN, domain, "/domain")?;
        business_rules::validate_domain_certificate(domain)?;
    }

    if let Some(caching) = config.get("caching") {
        check(&CACHING, caching, "/caching")?;
    }

    debug!("AppSync deployment configuration is valid");
    Ok(true)
}
