//! The canonical `Item` type: a produced value paired with its source span.
//! By carrying the span with the value, any later diagnostics about the value
//! can point at the exact source construct it came from.

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::node::Span;

/// A value produced from a node, wrapped with the span of that node.
///
/// For composite items (lists, records) the span covers the entire source
/// construct, not a sub-part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item<T> {
    pub value: T,
    pub span: Span,
}

impl<T> Item<T> {
    pub fn new(value: T, span: Span) -> Self {
        Self { value, span }
    }
}

/// The canonical result type for any producer.
pub type ProduceResult<T> = Result<Item<T>, ValidationError>;
