//! json-shape — decoder combinators for JSON values.
//!
//! # Overview
//!
//! A [`Decoder<A>`] validates and converts an untyped `serde_json::Value`
//! into a typed value. Shapes are composed from small primitives
//! ([`string`], [`number`], [`literal`], …) and structural combinators
//! ([`object`], [`partial`], [`array`], [`record`], [`tuple`]). Decoding
//! never stops at the first problem: every sub-decoder runs, and all
//! failures are accumulated into one [`DecodeError`], renderable as an
//! indented diagnostic forest with [`draw`].
//!
//! # Example
//!
//! ```
//! use json_shape::{draw, number, object, string};
//! use serde_json::json;
//!
//! let person = object([("name", string()), ("age", number())]);
//!
//! assert!(person.decode_value(&json!({"name": "Ann", "age": 36})).is_ok());
//!
//! let err = person.decode_value(&json!({"name": 1})).unwrap_err();
//! assert_eq!(
//!     draw(&err),
//!     "required property \"name\"\n\
//!      └─ cannot decode 1, should be string\n\
//!      required property \"age\"\n\
//!      └─ cannot decode undefined, should be number"
//! );
//! ```

pub mod decoder;
pub mod error;
pub mod render;
pub mod shape;

// Re-export the core public API
pub use decoder::{
    boolean, from_predicate, lazy, literal, never, number, string, unknown_array, unknown_record,
    Decoder,
};
pub use error::{DecodeError, Error, ErrorNode, Kind};
pub use render::{draw, forest, to_tree, Tree};
pub use shape::engine::{collect_indexed, collect_keyed, Accumulate, ErrorPolicy};
pub use shape::{array, object, partial, record, tuple};
