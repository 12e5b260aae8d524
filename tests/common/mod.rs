//! Shared fixture helpers for building node trees the way an external parser
//! would: one construct per line, with spans derived from the text layout.

#![allow(dead_code)]

use trellis::{Node, Position, Span};

pub fn pos(line: usize, column: usize) -> Position {
    Position::new(line, column)
}

pub fn span(start_line: usize, start_col: usize, end_line: usize, end_col: usize) -> Span {
    Span::new(pos(start_line, start_col), pos(end_line, end_col))
}

/// A scalar whose span covers its own text on a single line.
pub fn scalar_at(line: usize, column: usize, text: &str) -> Node {
    Node::scalar(text, span(line, column, line, column + text.len()))
}

/// A `key: value` mapping entry with the key at column 0 of `line`.
pub fn entry(line: usize, key: &str, value: Node) -> (Node, Node) {
    (scalar_at(line, 0, key), value)
}

/// A mapping spanning from its first key to its last value.
pub fn mapping(entries: Vec<(Node, Node)>) -> Node {
    let node_span = match (entries.first(), entries.last()) {
        (Some((first_key, _)), Some((_, last_value))) => {
            Span::new(first_key.span().start, last_value.span().end)
        }
        _ => Span::default(),
    };
    Node::mapping(entries, node_span)
}

/// A sequence spanning from its first child to its last.
pub fn sequence(children: Vec<Node>) -> Node {
    let node_span = match (children.first(), children.last()) {
        (Some(first), Some(last)) => Span::new(first.span().start, last.span().end),
        _ => Span::default(),
    };
    Node::sequence(children, node_span)
}
