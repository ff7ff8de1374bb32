//! json-shape-util - support functions for json-shape
//!
//! This crate provides the low-level collaborators of the decoder core:
//! value-kind guards (predicates classifying a raw `serde_json::Value`) and
//! stringification helpers used when formatting diagnostics.

pub mod guard;
pub mod stringify;

// Re-exports for convenience
pub use guard::{is_array, is_boolean, is_literal_of, is_never, is_number, is_record, is_string};
pub use stringify::{quote, stringify};
