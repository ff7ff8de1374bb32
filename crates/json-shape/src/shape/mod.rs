//! Structural combinators: composite shapes built over the decoder core.
//!
//! Every combinator here follows the same discipline: run every sub-decoder
//! regardless of sibling outcomes, merge all discovered failures in
//! declaration order, never stop early. One decode call surfaces every
//! problem in a shape.

pub mod engine;

use serde_json::Value;
use std::collections::BTreeMap;

use crate::decoder::{Decoder, EXPECTED_ARRAY, EXPECTED_RECORD};
use crate::error::{DecodeError, Kind};

use engine::{collect_indexed, collect_keyed, Accumulate};

/// Exact-shape object: every declared property must decode.
///
/// Failures are reported as `required property`; unknown extra properties
/// in the input are ignored. A missing property is decoded as an absent
/// input, so its decoder decides whether absence is acceptable.
///
/// # Examples
///
/// ```
/// use json_shape::{draw, number, object, string};
/// use serde_json::json;
///
/// let person = object([("name", string()), ("age", number())]);
///
/// let out = person.decode_value(&json!({"name": "Ann", "age": 36})).unwrap();
/// assert_eq!(out["name"], json!("Ann"));
///
/// let err = person.decode_value(&json!({"name": "Ann"})).unwrap_err();
/// assert_eq!(
///     draw(&err),
///     "required property \"age\"\n└─ cannot decode undefined, should be number"
/// );
/// ```
pub fn object<K, A>(
    properties: impl IntoIterator<Item = (K, Decoder<A>)>,
) -> Decoder<BTreeMap<String, A>>
where
    K: Into<String>,
    A: 'static,
{
    keyed_shape(properties, Kind::Required)
}

/// Elective-shape object: failures are reported as `optional property`.
///
/// Traversal is identical to [`object`], including for missing properties:
/// each property decoder still runs against the absent input and may fail.
/// Wrap a property decoder with [`Decoder::optional`] to tolerate absence.
pub fn partial<K, A>(
    properties: impl IntoIterator<Item = (K, Decoder<A>)>,
) -> Decoder<BTreeMap<String, A>>
where
    K: Into<String>,
    A: 'static,
{
    keyed_shape(properties, Kind::Optional)
}

fn keyed_shape<K, A>(
    properties: impl IntoIterator<Item = (K, Decoder<A>)>,
    kind: Kind,
) -> Decoder<BTreeMap<String, A>>
where
    K: Into<String>,
    A: 'static,
{
    let properties: Vec<(String, Decoder<A>)> = properties
        .into_iter()
        .map(|(key, decoder)| (key.into(), decoder))
        .collect();
    Decoder::new(move |input| {
        let members = match input {
            Some(Value::Object(members)) => members,
            other => return Err(DecodeError::leaf(other, EXPECTED_RECORD)),
        };
        collect_keyed::<A, Accumulate>(
            kind,
            properties
                .iter()
                .map(|(key, decoder)| (key.clone(), decoder.decode(members.get(key.as_str())))),
        )
    })
}

/// Homogeneous array: every element must decode with the same decoder.
///
/// Element failures are reported as `optional index`, the elective wording
/// `record` uses for its keys, even though every position must decode.
/// Downstream diagnostics match on this exact wording, so it is kept as is.
pub fn array<A: 'static>(element: Decoder<A>) -> Decoder<Vec<A>> {
    Decoder::new(move |input| {
        let items = match input {
            Some(Value::Array(items)) => items,
            other => return Err(DecodeError::leaf(other, EXPECTED_ARRAY)),
        };
        collect_indexed::<A, Accumulate>(
            Kind::Optional,
            items.iter().map(|item| element.decode(Some(item))),
        )
    })
}

/// Homogeneous dictionary: every member value must decode with the same
/// decoder. Failures are reported as `optional property`, keyed as in the
/// input; member order follows the input.
pub fn record<A: 'static>(codomain: Decoder<A>) -> Decoder<BTreeMap<String, A>> {
    Decoder::new(move |input| {
        let members = match input {
            Some(Value::Object(members)) => members,
            other => return Err(DecodeError::leaf(other, EXPECTED_RECORD)),
        };
        collect_keyed::<A, Accumulate>(
            Kind::Optional,
            members
                .iter()
                .map(|(key, value)| (key.clone(), codomain.decode(Some(value)))),
        )
    })
}

/// Fixed-length heterogeneous sequence: the i-th component decoder runs
/// against the i-th input element, or against an absent input when the
/// input is shorter. Failures are reported as `required index`; input
/// elements beyond the declared arity are ignored.
pub fn tuple<A: 'static>(components: impl IntoIterator<Item = Decoder<A>>) -> Decoder<Vec<A>> {
    let components: Vec<Decoder<A>> = components.into_iter().collect();
    Decoder::new(move |input| {
        let items = match input {
            Some(Value::Array(items)) => items,
            other => return Err(DecodeError::leaf(other, EXPECTED_ARRAY)),
        };
        collect_indexed::<A, Accumulate>(
            Kind::Required,
            components
                .iter()
                .enumerate()
                .map(|(position, component)| component.decode(items.get(position))),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::{boolean, number, string};
    use crate::error::ErrorNode;
    use serde_json::json;

    fn top_level_keys(error: &DecodeError) -> Vec<(String, Kind)> {
        error
            .nodes()
            .map(|node| match node {
                ErrorNode::Key { key, kind, .. } => (key.clone(), *kind),
                other => panic!("expected key nodes, got {other:?}"),
            })
            .collect()
    }

    #[test]
    fn test_object_collects_declared_properties() {
        let decoder = object([("name", string()), ("age", number())]);
        let out = decoder
            .decode_value(&json!({"name": "x", "age": 3, "extra": true}))
            .unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(out["name"], json!("x"));
        assert_eq!(out["age"], json!(3));
    }

    #[test]
    fn test_object_rejects_non_record_input() {
        let decoder = object([("a", string())]);
        match decoder.decode_value(&json!([1])).unwrap_err() {
            DecodeError::Single(ErrorNode::Leaf { actual, expected }) => {
                assert_eq!(actual, Some(json!([1])));
                assert_eq!(expected, "object");
            }
            other => panic!("expected a single leaf, got {other:?}"),
        }
    }

    #[test]
    fn test_object_runs_every_property_decoder() {
        let decoder = object([("a", string()), ("b", number()), ("c", boolean())]);
        let error = decoder
            .decode_value(&json!({"a": 1, "b": "x", "c": "y"}))
            .unwrap_err();
        let keys = top_level_keys(&error);
        assert_eq!(
            keys,
            [
                ("a".to_string(), Kind::Required),
                ("b".to_string(), Kind::Required),
                ("c".to_string(), Kind::Required),
            ]
        );
    }

    #[test]
    fn test_partial_wraps_failures_as_optional() {
        let decoder = partial([("age", number())]);
        let error = decoder.decode_value(&json!({"age": "x"})).unwrap_err();
        assert_eq!(top_level_keys(&error), [("age".to_string(), Kind::Optional)]);
    }

    #[test]
    fn test_partial_still_decodes_missing_properties() {
        // a plain decoder fails on absence; an optional one tolerates it
        let strict = partial([("age", number())]);
        assert!(strict.decode_value(&json!({})).is_err());

        let tolerant = partial([("age", number().optional())]);
        let out = tolerant.decode_value(&json!({})).unwrap();
        assert_eq!(out["age"], None);
    }

    #[test]
    fn test_array_decodes_every_element_in_order() {
        let decoder = array(number());
        assert_eq!(
            decoder.decode_value(&json!([1, 2, 3])).unwrap(),
            vec![json!(1), json!(2), json!(3)]
        );
    }

    #[test]
    fn test_array_failures_are_optional_indices() {
        let decoder = array(number());
        let error = decoder.decode_value(&json!(["a", 2, "b"])).unwrap_err();
        let tags: Vec<(usize, Kind)> = error
            .nodes()
            .map(|node| match node {
                ErrorNode::Index { index, kind, .. } => (*index, *kind),
                other => panic!("expected index nodes, got {other:?}"),
            })
            .collect();
        assert_eq!(tags, [(0, Kind::Optional), (2, Kind::Optional)]);
    }

    #[test]
    fn test_array_rejects_non_array_input() {
        let error = array(number()).decode_value(&json!({})).unwrap_err();
        match error {
            DecodeError::Single(ErrorNode::Leaf { expected, .. }) => {
                assert_eq!(expected, "array");
            }
            other => panic!("expected a single leaf, got {other:?}"),
        }
    }

    #[test]
    fn test_record_decodes_every_member() {
        let decoder = record(number());
        let out = decoder.decode_value(&json!({"a": 1, "b": 2})).unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(out["a"], json!(1));
        assert_eq!(out["b"], json!(2));
    }

    #[test]
    fn test_record_failures_follow_input_order() {
        let decoder = record(number());
        let error = decoder
            .decode_value(&json!({"z": "x", "a": 1, "m": true}))
            .unwrap_err();
        assert_eq!(
            top_level_keys(&error),
            [("z".to_string(), Kind::Optional), ("m".to_string(), Kind::Optional)]
        );
    }

    #[test]
    fn test_tuple_decodes_components_by_position() {
        let decoder = tuple([string(), number()]);
        assert_eq!(
            decoder.decode_value(&json!(["a", 1])).unwrap(),
            vec![json!("a"), json!(1)]
        );
    }

    #[test]
    fn test_tuple_short_input_decodes_as_absent() {
        let decoder = tuple([string(), number()]);
        let error = decoder.decode_value(&json!(["a"])).unwrap_err();
        match error {
            DecodeError::Single(ErrorNode::Index { index, kind, .. }) => {
                assert_eq!(index, 1);
                assert_eq!(kind, Kind::Required);
            }
            other => panic!("expected a single index node, got {other:?}"),
        }
    }

    #[test]
    fn test_tuple_ignores_extra_elements() {
        let decoder = tuple([string()]);
        assert_eq!(
            decoder.decode_value(&json!(["a", 1, true])).unwrap(),
            vec![json!("a")]
        );
    }
}
