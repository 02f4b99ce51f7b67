//! # Configuration Schemas
//!
//! JSON Schema documents for every section of an AppSync deployment
//! configuration, composed from a small set of reusable primitive
//! fragments. The documents are plain `serde_json::Value`s; compilation
//! into validators happens once, in the `validation` module.

pub mod primitives;
pub mod sections;
