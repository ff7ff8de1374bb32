//! Generic accumulating traversals shared by the structural combinators.
//!
//! The traversal logic is decoupled from the concrete error type: an
//! [`ErrorPolicy`] supplies the merge and path-labeling operations, so an
//! alternate error representation (first-error-only, a flat list, …) can be
//! bound without touching combinator logic.

use std::collections::BTreeMap;

use crate::error::{DecodeError, Kind};

/// Merge and path-labeling operations a structural combinator needs from an
/// error representation.
pub trait ErrorPolicy {
    type Error;

    /// Associative merge of two independently discovered failures.
    fn combine(left: Self::Error, right: Self::Error) -> Self::Error;

    /// Attach a property-name context to a nested failure.
    fn wrap_key(key: &str, kind: Kind, cause: Self::Error) -> Self::Error;

    /// Attach a positional context to a nested failure.
    fn wrap_index(index: usize, kind: Kind, cause: Self::Error) -> Self::Error;
}

/// The default policy: free-merge accumulation into [`DecodeError`].
pub struct Accumulate;

impl ErrorPolicy for Accumulate {
    type Error = DecodeError;

    fn combine(left: DecodeError, right: DecodeError) -> DecodeError {
        left.merge(right)
    }

    fn wrap_key(key: &str, kind: Kind, cause: DecodeError) -> DecodeError {
        DecodeError::key(key, kind, cause)
    }

    fn wrap_index(index: usize, kind: Kind, cause: DecodeError) -> DecodeError {
        DecodeError::index(index, kind, cause)
    }
}

/// Drain keyed sub-results, collecting successes into a map and folding
/// every failure into one combined error.
///
/// Every entry is consumed before returning, so later sub-decoders run even
/// after earlier ones have failed.
pub fn collect_keyed<A, P>(
    kind: Kind,
    entries: impl IntoIterator<Item = (String, Result<A, P::Error>)>,
) -> Result<BTreeMap<String, A>, P::Error>
where
    P: ErrorPolicy,
{
    let mut out = BTreeMap::new();
    let mut failure: Option<P::Error> = None;
    for (key, result) in entries {
        match result {
            Ok(value) => {
                out.insert(key, value);
            }
            Err(cause) => {
                let wrapped = P::wrap_key(&key, kind, cause);
                failure = Some(match failure.take() {
                    None => wrapped,
                    Some(previous) => P::combine(previous, wrapped),
                });
            }
        }
    }
    match failure {
        None => Ok(out),
        Some(error) => Err(error),
    }
}

/// Positional counterpart of [`collect_keyed`]: drain indexed sub-results,
/// collecting successes in order and folding every failure into one
/// combined error.
pub fn collect_indexed<A, P>(
    kind: Kind,
    results: impl IntoIterator<Item = Result<A, P::Error>>,
) -> Result<Vec<A>, P::Error>
where
    P: ErrorPolicy,
{
    let mut out = Vec::new();
    let mut failure: Option<P::Error> = None;
    for (index, result) in results.into_iter().enumerate() {
        match result {
            Ok(value) => out.push(value),
            Err(cause) => {
                let wrapped = P::wrap_index(index, kind, cause);
                failure = Some(match failure.take() {
                    None => wrapped,
                    Some(previous) => P::combine(previous, wrapped),
                });
            }
        }
    }
    match failure {
        None => Ok(out),
        Some(error) => Err(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorNode;
    use serde_json::json;

    #[test]
    fn test_collect_indexed_accumulates_in_order() {
        let results: Vec<Result<i32, DecodeError>> = vec![
            Ok(1),
            Err(DecodeError::leaf(Some(&json!("a")), "number")),
            Ok(3),
            Err(DecodeError::leaf(None, "number")),
        ];
        let error = collect_indexed::<i32, Accumulate>(Kind::Optional, results).unwrap_err();
        let indices: Vec<usize> = error
            .nodes()
            .map(|node| match node {
                ErrorNode::Index { index, .. } => *index,
                other => panic!("expected index nodes, got {other:?}"),
            })
            .collect();
        assert_eq!(indices, [1, 3]);
    }

    #[test]
    fn test_collect_keyed_success_keeps_every_entry() {
        let results: Vec<(String, Result<i32, DecodeError>)> =
            vec![("a".into(), Ok(1)), ("b".into(), Ok(2))];
        let out = collect_keyed::<i32, Accumulate>(Kind::Required, results).unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(out["a"], 1);
        assert_eq!(out["b"], 2);
    }

    /// A substitute error representation: keep only the first failure, as a
    /// plain path string.
    struct FirstError;

    impl ErrorPolicy for FirstError {
        type Error = String;

        fn combine(left: String, _right: String) -> String {
            left
        }

        fn wrap_key(key: &str, _kind: Kind, cause: String) -> String {
            format!("{key}: {cause}")
        }

        fn wrap_index(index: usize, _kind: Kind, cause: String) -> String {
            format!("[{index}]: {cause}")
        }
    }

    #[test]
    fn test_alternate_policy_substitutes_cleanly() {
        let results: Vec<Result<i32, String>> = vec![
            Err("not a number".into()),
            Ok(2),
            Err("not a number".into()),
        ];
        let error = collect_indexed::<i32, FirstError>(Kind::Required, results).unwrap_err();
        assert_eq!(error, "[0]: not a number");
    }
}
