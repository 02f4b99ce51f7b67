//! Cross-field validation rules.
//!
//! Constraints that span several fields of a section cannot be expressed
//! by the section's shape schema alone. They live here as standalone
//! predicate functions, evaluated only after the shape check has passed,
//! so a "missing combination" failure is never conflated with a "wrong
//! type" failure.

use serde_json::Value;

use crate::errors::{Error, Result};

/// A custom domain managed through CloudFormation needs something to
/// anchor its resources to: a certificate to attach or a hosted zone to
/// create records in. Opting out with `useCloudFormation: false` waives
/// the requirement; the caller then manages those resources elsewhere.
pub fn validate_domain_certificate(domain: &Value) -> Result<()> {
    let use_cloud_formation =
        domain.get("useCloudFormation").and_then(Value::as_bool).unwrap_or(true);
    if !use_cloud_formation {
        return Ok(());
    }

    if domain.get("certificateArn").is_none() && domain.get("hostedZoneId").is_none() {
        return Err(Error::validation_field(
            "when useCloudFormation is not false, either certificateArn or hostedZoneId \
             is required",
            "/domain",
        ));
    }

    Ok(())
}

/// Mode-specific requirements on an authentication provider's `config`.
/// `location` is the JSON-pointer path of the provider entry.
pub fn validate_authentication_mode(authentication: &Value, location: &str) -> Result<()> {
    let mode = authentication.get("type").and_then(Value::as_str).unwrap_or_default();
    let config = authentication.get("config");
    let has = |key: &str| config.and_then(|c| c.get(key)).is_some();

    match mode {
        "AMAZON_COGNITO_USER_POOLS" if !has("userPoolId") => Err(Error::validation_field(
            "AMAZON_COGNITO_USER_POOLS authentication requires config.userPoolId",
            format!("{}/config/userPoolId", location),
        )),
        "OPENID_CONNECT" if !has("issuer") => Err(Error::validation_field(
            "OPENID_CONNECT authentication requires config.issuer",
            format!("{}/config/issuer", location),
        )),
        "AWS_LAMBDA" if !has("authorizerArn") && !has("authorizerFunctionName") => {
            Err(Error::validation_field(
                "AWS_LAMBDA authentication requires config.authorizerArn or \
                 config.authorizerFunctionName",
                format!("{}/config", location),
            ))
        }
        _ => Ok(()),
    }
}
