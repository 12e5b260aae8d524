//! The single error type for every failure the framework reports.
//!
//! Structural mismatches, extraction failures, and validator violations are
//! all the same kind of thing to a caller: a human-readable message plus the
//! node at fault. The node's span lets the caller print
//! `line:column: message` against the original document. Propagation is
//! strictly fail-fast: the first error aborts the whole `produce` call and is
//! passed through outer producers unchanged.

use thiserror::Error;

use crate::node::{Node, NodeKind, Span};

/// A validation or structural failure, located at the offending node.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
    node: Node,
}

impl ValidationError {
    /// Creates an error with an arbitrary message, located at `node`.
    ///
    /// Custom extractors and validators use this directly; the built-in
    /// rules go through the canonical constructors below.
    pub fn new(message: impl Into<String>, node: &Node) -> Self {
        Self {
            message: message.into(),
            node: node.clone(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The node at fault.
    pub fn node(&self) -> &Node {
        &self.node
    }

    /// The span of the node at fault.
    pub fn span(&self) -> Span {
        self.node.span()
    }

    /// Renders `line:column: message` for the start of the offending span.
    pub fn located(&self) -> String {
        format!("{}: {}", self.span().start, self.message)
    }
}

/// Build a kind-mismatch error: `<expected> expected, got <actual>`.
pub fn expected_kind(expected: NodeKind, node: &Node) -> ValidationError {
    ValidationError::new(format!("{} expected, got {}", expected, node.kind()), node)
}

/// Build a missing-required-field error, located on the mapping node itself
/// since no specific entry exists to blame.
pub fn required_missing(name: &str, mapping: &Node) -> ValidationError {
    ValidationError::new(format!("Required item '{}' is not specified", name), mapping)
}

/// Build an unexpected-key error, located on the offending key node.
pub fn unexpected_item(name: &str, key_node: &Node) -> ValidationError {
    ValidationError::new(format!("Unexpected item '{}'", name), key_node)
}

/// Build a key-alphabet violation naming the first offending character.
pub fn invalid_key_character(character: char, key: &str, node: &Node) -> ValidationError {
    ValidationError::new(
        format!("Invalid character '{}' in key '{}'", character, key),
        node,
    )
}

/// Build an out-of-interval error for an inclusive range check.
pub fn out_of_interval(value: f64, min: f64, max: f64, node: &Node) -> ValidationError {
    ValidationError::new(
        format!("{} expected to be in interval [{}, {}]", value, min, max),
        node,
    )
}

pub fn invalid_float(text: &str, node: &Node) -> ValidationError {
    ValidationError::new(format!("'{}' is not a valid float number", text), node)
}

pub fn invalid_bool(text: &str, node: &Node) -> ValidationError {
    ValidationError::new(format!("'{}' is not a valid boolean value", text), node)
}

pub fn invalid_time(text: &str, node: &Node) -> ValidationError {
    ValidationError::new(format!("'{}' is not a valid time", text), node)
}
