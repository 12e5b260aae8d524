//! Document tree nodes.
//!
//! This is the shape of the input the framework consumes: an immutable tree
//! of scalars, sequences, and mappings produced by an external structured-text
//! parser, with every node carrying the source span it was read from. The
//! framework never mutates a node and never reads raw text itself; whatever
//! parsing library a caller uses only has to surface start/end line-column
//! marks when building this tree.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single line/column coordinate in the source document.
///
/// Both components are zero-indexed, matching the mark convention of the
/// external parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The start/end source positions a node (or a value produced from it)
/// derives from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}

/// The structural kind of a node, used in kind-mismatch error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    Scalar,
    Sequence,
    Mapping,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Scalar => "Scalar",
            NodeKind::Sequence => "Sequence",
            NodeKind::Mapping => "Mapping",
        };
        write!(f, "{}", name)
    }
}

/// One structural unit of a parsed document.
///
/// A node is either a raw-text scalar, an ordered sequence of child nodes, or
/// an ordered mapping of key/value node pairs. Every variant carries the span
/// of the whole construct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    Scalar { text: String, span: Span },
    Sequence { children: Vec<Node>, span: Span },
    Mapping { entries: Vec<(Node, Node)>, span: Span },
}

impl Node {
    pub fn scalar(text: impl Into<String>, span: Span) -> Self {
        Node::Scalar {
            text: text.into(),
            span,
        }
    }

    pub fn sequence(children: Vec<Node>, span: Span) -> Self {
        Node::Sequence { children, span }
    }

    pub fn mapping(entries: Vec<(Node, Node)>, span: Span) -> Self {
        Node::Mapping { entries, span }
    }

    /// Returns the source span this node covers.
    pub fn span(&self) -> Span {
        match self {
            Node::Scalar { span, .. } => *span,
            Node::Sequence { span, .. } => *span,
            Node::Mapping { span, .. } => *span,
        }
    }

    /// Returns the structural kind of this node.
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Scalar { .. } => NodeKind::Scalar,
            Node::Sequence { .. } => NodeKind::Sequence,
            Node::Mapping { .. } => NodeKind::Mapping,
        }
    }

    /// Returns the raw text of a scalar node, or `None` for the other kinds.
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Node::Scalar { text, .. } => Some(text),
            _ => None,
        }
    }
}
