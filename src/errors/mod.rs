//! # Error Handling
//!
//! This module provides error handling for the graphplane validation
//! engine. It defines custom error types using `thiserror`.

pub mod types;

pub use types::{Error, Result};
