//! The decode contract and primitive decoder constructors.

use serde_json::Value;
use std::sync::Arc;

use json_shape_util::guard;

use crate::error::{DecodeError, Error};

/// Label of the generic-record check, shared by every combinator that
/// rejects non-object input.
pub(crate) const EXPECTED_RECORD: &str = "object";
/// Label of the generic-array check.
pub(crate) const EXPECTED_ARRAY: &str = "array";

type DecodeFn<A> = dyn Fn(Option<&Value>) -> Result<A, DecodeError> + Send + Sync;

/// A decoding capability: interprets an untyped value as an `A`.
///
/// Decoders are immutable, cheaply clonable values; combinators build new
/// decoders out of existing ones without mutating either. Input is
/// `Option<&Value>`: `None` models an absent value (a missing object
/// property or an out-of-range tuple position).
///
/// # Examples
///
/// ```
/// use json_shape::string;
/// use serde_json::json;
///
/// let decoder = string();
/// assert_eq!(decoder.decode_value(&json!("hi")).unwrap(), json!("hi"));
/// assert!(decoder.decode_value(&json!(42)).is_err());
/// ```
pub struct Decoder<A> {
    run: Arc<DecodeFn<A>>,
}

impl<A> Clone for Decoder<A> {
    fn clone(&self) -> Self {
        Decoder {
            run: Arc::clone(&self.run),
        }
    }
}

impl<A: 'static> Decoder<A> {
    /// Wrap a decode function.
    pub fn new<F>(run: F) -> Self
    where
        F: Fn(Option<&Value>) -> Result<A, DecodeError> + Send + Sync + 'static,
    {
        Decoder { run: Arc::new(run) }
    }

    /// Decode a possibly-absent value.
    pub fn decode(&self, input: Option<&Value>) -> Result<A, DecodeError> {
        (self.run)(input)
    }

    /// Decode a present value.
    pub fn decode_value(&self, input: &Value) -> Result<A, DecodeError> {
        self.decode(Some(input))
    }

    /// Parse JSON text and decode the resulting value.
    pub fn decode_str(&self, json: &str) -> Result<A, Error> {
        let value: Value = serde_json::from_str(json)?;
        self.decode(Some(&value)).map_err(Error::from)
    }

    /// Project a successful decode into another type. Failures pass through
    /// untouched.
    pub fn map<B, F>(self, f: F) -> Decoder<B>
    where
        B: 'static,
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        Decoder::new(move |input| self.decode(input).map(&f))
    }

    /// Tolerate absence: absent input succeeds with `None`, present input
    /// runs the inner decoder.
    ///
    /// Pairs with [`crate::partial`], whose property decoders still run when
    /// a property is missing.
    pub fn optional(self) -> Decoder<Option<A>> {
        Decoder::new(move |input| match input {
            None => Ok(None),
            present => self.decode(present).map(Some),
        })
    }

    /// Tolerate JSON `null`: null input succeeds with `None`, anything else
    /// runs the inner decoder.
    pub fn nullable(self) -> Decoder<Option<A>> {
        Decoder::new(move |input| match input {
            Some(Value::Null) => Ok(None),
            other => self.decode(other).map(Some),
        })
    }
}

impl Decoder<Value> {
    /// Narrow a succeeded value with an extra predicate.
    ///
    /// # Examples
    ///
    /// ```
    /// use json_shape::number;
    /// use serde_json::json;
    ///
    /// let integer = number().refine(|v| v.is_i64() || v.is_u64(), "integer");
    /// assert!(integer.decode_value(&json!(3)).is_ok());
    /// assert!(integer.decode_value(&json!(3.5)).is_err());
    /// ```
    pub fn refine<F>(self, predicate: F, expected: impl Into<String>) -> Decoder<Value>
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        let expected = expected.into();
        Decoder::new(move |input| {
            let value = self.decode(input)?;
            if predicate(&value) {
                Ok(value)
            } else {
                Err(DecodeError::leaf(Some(&value), expected.clone()))
            }
        })
    }
}

/// Build a decoder from a value-kind predicate.
///
/// Succeeds returning the input unchanged when it is present and the
/// predicate holds; otherwise fails with a leaf error carrying the rejected
/// value and the expected-shape label. Absent input always fails.
pub fn from_predicate<F>(predicate: F, expected: impl Into<String>) -> Decoder<Value>
where
    F: Fn(&Value) -> bool + Send + Sync + 'static,
{
    let expected = expected.into();
    Decoder::new(move |input| match input {
        Some(value) if predicate(value) => Ok(value.clone()),
        other => Err(DecodeError::leaf(other, expected.clone())),
    })
}

/// Decoder accepting any JSON string.
pub fn string() -> Decoder<Value> {
    from_predicate(guard::is_string, "string")
}

/// Decoder accepting any JSON number.
pub fn number() -> Decoder<Value> {
    from_predicate(guard::is_number, "number")
}

/// Decoder accepting any JSON boolean.
pub fn boolean() -> Decoder<Value> {
    from_predicate(guard::is_boolean, "boolean")
}

/// Decoder accepting any JSON array, with no element requirements.
pub fn unknown_array() -> Decoder<Value> {
    from_predicate(guard::is_array, EXPECTED_ARRAY)
}

/// Decoder accepting any JSON object, with no member requirements.
pub fn unknown_record() -> Decoder<Value> {
    from_predicate(guard::is_record, EXPECTED_RECORD)
}

/// Decoder rejecting every input. Placeholder for impossible shapes.
pub fn never() -> Decoder<Value> {
    from_predicate(guard::is_never, "never")
}

/// Decoder accepting exactly the enumerated values.
///
/// The expected label is the values' quoted forms joined by `" | "`.
///
/// # Examples
///
/// ```
/// use json_shape::literal;
/// use serde_json::json;
///
/// let level = literal([json!("debug"), json!("info")]);
/// assert!(level.decode_value(&json!("info")).is_ok());
///
/// let err = level.decode_value(&json!("warn")).unwrap_err();
/// assert_eq!(
///     json_shape::draw(&err),
///     "cannot decode \"warn\", should be \"debug\" | \"info\""
/// );
/// ```
pub fn literal(values: impl IntoIterator<Item = Value>) -> Decoder<Value> {
    let values: Vec<Value> = values.into_iter().collect();
    let expected = values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<String>>()
        .join(" | ");
    Decoder::new(move |input| match input {
        Some(value) if guard::is_literal_of(value, &values) => Ok(value.clone()),
        other => Err(DecodeError::leaf(other, expected.clone())),
    })
}

/// Defer construction of a decoder, allowing recursive shapes.
pub fn lazy<A, F>(make: F) -> Decoder<A>
where
    A: 'static,
    F: Fn() -> Decoder<A> + Send + Sync + 'static,
{
    Decoder::new(move |input| make().decode(input))
}
