//! Trellis — a span-preserving schema validation and production framework.
//!
//! Trellis walks a parsed document tree (scalars, sequences, mappings, each
//! carrying its source span) against a caller-composed schema of producers,
//! extractors, and validators, and returns strongly-typed values wrapped with
//! the exact source position they came from. The first violation aborts the
//! whole production with a located, human-readable error; no partial result
//! is ever returned.

pub use crate::errors::ValidationError;
pub use crate::item::{Item, ProduceResult};
pub use crate::node::{Node, NodeKind, Position, Span};
pub use crate::produce::Producer;

pub mod errors;
pub mod extract;
pub mod item;
pub mod node;
pub mod produce;
pub mod validate;
