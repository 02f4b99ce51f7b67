//! # Graphplane
//!
//! Graphplane validates an AppSync API deployment configuration before it
//! is handed to infrastructure-template synthesis. Malformed or
//! semantically inconsistent configuration is caught early, with
//! field-addressed error messages, instead of propagating silently into
//! generated infrastructure.
//!
//! ## Architecture
//!
//! ```text
//! raw configuration value
//!     → root document schema (base fields, unknown-key rejection)
//!     → per-section schemas (logging, waf, domain, caching, auth)
//!     → cross-field business rules
//!     → polymorphic WAF rule resolver (canonical rule forms)
//!     → Ok(true) | first violation as one descriptive error
//! ```
//!
//! The engine is a pure synchronous computation: no I/O, no shared
//! mutable state, and the only thing shared between calls is the
//! immutable set of compiled schemas.
//!
//! ## Example Usage
//!
//! ```rust
//! use graphplane::validate_config;
//! use serde_json::json;
//!
//! let config = json!({
//!     "name": "my-api",
//!     "schema": "schema.graphql",
//!     "authentication": { "type": "API_KEY" },
//!     "dataSources": {},
//!     "resolvers": {},
//!     "logging": { "level": "ALL" }
//! });
//!
//! assert_eq!(validate_config(&config).unwrap(), true);
//! ```

pub mod errors;
pub mod schema;
pub mod validation;

// Re-export commonly used types and the validation entry point
pub use errors::{Error, Result};
pub use validation::validate_config;
pub use validation::waf_rules::{
    CustomWafRule, DisableIntrospectionRule, ThrottleRule, VisibilityConfig, WafRule,
    WafRuleAction,
};

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name from Cargo.toml
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
