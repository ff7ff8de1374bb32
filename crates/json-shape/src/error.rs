//! Decode failures as values.
//!
//! A failed decode never unwinds: every mismatch becomes part of one
//! [`DecodeError`], a non-empty merge structure over [`ErrorNode`]. Merging
//! two errors is O(1) and restructures neither side; only the left-to-right
//! order of the nodes is observable (see [`crate::render`]).

use serde_json::Value;
use std::fmt;
use thiserror::Error as ThisError;

/// Diagnostic tag on [`ErrorNode::Key`] and [`ErrorNode::Index`].
///
/// `Required` marks exact-shape combinators (`object`, `tuple`); `Optional`
/// marks elective-shape combinators (`partial`, `record`, and `array`
/// elements). The tag only affects rendered wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Required,
    Optional,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Required => f.write_str("required"),
            Kind::Optional => f.write_str("optional"),
        }
    }
}

/// One discovered failure.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorNode {
    /// A raw value was rejected by a primitive or predicate check.
    /// `actual` is the rejected value, `None` when the input was absent.
    Leaf {
        actual: Option<Value>,
        expected: String,
    },
    /// A named property failed to decode.
    Key {
        key: String,
        kind: Kind,
        cause: Box<DecodeError>,
    },
    /// A positional element failed to decode.
    Index {
        index: usize,
        kind: Kind,
        cause: Box<DecodeError>,
    },
}

/// The accumulated failures of one decode call.
///
/// A free merge structure: either a single node, or two errors combined.
/// `Merge` keeps both sides untouched, so combining is O(1) and no failure
/// is ever discarded.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodeError {
    Single(ErrorNode),
    Merge(Box<DecodeError>, Box<DecodeError>),
}

impl DecodeError {
    /// A single leaf failure. The rejected value is cloned so the error owns
    /// its diagnostics.
    pub fn leaf(actual: Option<&Value>, expected: impl Into<String>) -> Self {
        DecodeError::Single(ErrorNode::Leaf {
            actual: actual.cloned(),
            expected: expected.into(),
        })
    }

    /// A nested failure wrapped with a property-name context.
    pub fn key(key: impl Into<String>, kind: Kind, cause: DecodeError) -> Self {
        DecodeError::Single(ErrorNode::Key {
            key: key.into(),
            kind,
            cause: Box::new(cause),
        })
    }

    /// A nested failure wrapped with a positional context.
    pub fn index(index: usize, kind: Kind, cause: DecodeError) -> Self {
        DecodeError::Single(ErrorNode::Index {
            index,
            kind,
            cause: Box::new(cause),
        })
    }

    /// Combine two independently discovered errors, `self` first.
    pub fn merge(self, other: DecodeError) -> Self {
        DecodeError::Merge(Box::new(self), Box::new(other))
    }

    /// Iterate the failure nodes in left-to-right discovery order,
    /// regardless of how merges were nested.
    pub fn nodes(&self) -> Nodes<'_> {
        Nodes { stack: vec![self] }
    }

    /// Number of independently discovered failures at this level.
    pub fn count(&self) -> usize {
        self.nodes().count()
    }
}

/// In-order iterator over the nodes of a [`DecodeError`].
pub struct Nodes<'a> {
    stack: Vec<&'a DecodeError>,
}

impl<'a> Iterator for Nodes<'a> {
    type Item = &'a ErrorNode;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(error) = self.stack.pop() {
            match error {
                DecodeError::Single(node) => return Some(node),
                DecodeError::Merge(left, right) => {
                    // Right is pushed first so left is visited first.
                    self.stack.push(right);
                    self.stack.push(left);
                }
            }
        }
        None
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::render::draw(self))
    }
}

impl std::error::Error for DecodeError {}

/// Error produced when decoding JSON text via [`crate::Decoder::decode_str`].
#[derive(Debug, ThisError)]
pub enum Error {
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{0}")]
    Decode(#[from] DecodeError),
}
