//! Producers: the composable engine that maps a node to an `Item`.
//!
//! A producer combines structural kind checking, scalar extraction, semantic
//! validation, and span wrapping behind one `produce` call. The three
//! building blocks — `ScalarProducer` for leaves, `ListProducer` for
//! homogeneous sequences, `RecordProducer` for fixed-field mappings — nest
//! arbitrarily, so a schema is just a producer graph mirrored over the node
//! tree by recursive descent. Every call either returns a fully formed `Item`
//! or fails with the first error encountered; nested errors propagate
//! unchanged.

use crate::errors::{self, ValidationError};
use crate::extract::ValueExtractor;
use crate::item::{Item, ProduceResult};
use crate::node::{Node, NodeKind};
use crate::validate::{StringKeyValidator, Validator};

/// Maps a node to an `Item`, failing fast with a located error.
pub trait Producer {
    type Output;

    fn produce(&self, node: &Node) -> ProduceResult<Self::Output>;
}

// ============================================================================
// SCALAR
// ============================================================================

/// Leaf producer: requires a scalar node, extracts a primitive value, then
/// runs its validators in declared order.
pub struct ScalarProducer<E: ValueExtractor> {
    extractor: E,
    validators: Vec<Box<dyn Validator<E::Output>>>,
}

impl<E: ValueExtractor> ScalarProducer<E> {
    pub fn new(extractor: E) -> Self {
        Self {
            extractor,
            validators: Vec::new(),
        }
    }

    /// Appends a validator; validators run in the order they were added.
    pub fn with_validator(mut self, validator: impl Validator<E::Output> + 'static) -> Self {
        self.validators.push(Box::new(validator));
        self
    }
}

impl<E: ValueExtractor> Producer for ScalarProducer<E> {
    type Output = E::Output;

    fn produce(&self, node: &Node) -> ProduceResult<E::Output> {
        let Node::Scalar { text, span } = node else {
            return Err(errors::expected_kind(NodeKind::Scalar, node));
        };
        let value = self.extractor.extract(text, node)?;
        for validator in &self.validators {
            validator.validate(&value, node)?;
        }
        Ok(Item::new(value, *span))
    }
}

// ============================================================================
// LIST
// ============================================================================

/// Homogeneous sequence producer: applies the item producer to each child in
/// order, aborting at the first child failure.
pub struct ListProducer<P> {
    item: P,
}

impl<P: Producer> ListProducer<P> {
    pub fn new(item: P) -> Self {
        Self { item }
    }
}

impl<P: Producer> Producer for ListProducer<P> {
    type Output = Vec<Item<P::Output>>;

    fn produce(&self, node: &Node) -> ProduceResult<Self::Output> {
        let Node::Sequence { children, span } = node else {
            return Err(errors::expected_kind(NodeKind::Sequence, node));
        };
        let items = children
            .iter()
            .map(|child| self.item.produce(child))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Item::new(items, *span))
    }
}

// ============================================================================
// RECORD
// ============================================================================

/// One scanned mapping entry: key text, the key node for error locations,
/// the value node, and whether the schema has claimed it.
struct FieldEntry<'a> {
    key: &'a str,
    key_node: &'a Node,
    value: &'a Node,
    claimed: bool,
}

/// The scanned entries of a mapping node, handed to a record's assembly
/// closure so it can claim fields by name.
///
/// All entries are scanned up front: every key must be a scalar whose text
/// satisfies the string-key alphabet, and any entry the schema never claims
/// is rejected after assembly.
pub struct MappingFields<'a> {
    node: &'a Node,
    entries: Vec<FieldEntry<'a>>,
}

impl<'a> MappingFields<'a> {
    fn scan(node: &'a Node) -> Result<Self, ValidationError> {
        let Node::Mapping { entries, .. } = node else {
            return Err(errors::expected_kind(NodeKind::Mapping, node));
        };
        let key_rule = StringKeyValidator;
        let mut scanned = Vec::with_capacity(entries.len());
        for (key_node, value) in entries {
            let Node::Scalar { text, .. } = key_node else {
                return Err(errors::expected_kind(NodeKind::Scalar, key_node));
            };
            key_rule.validate(text, key_node)?;
            scanned.push(FieldEntry {
                key: text,
                key_node,
                value,
                claimed: false,
            });
        }
        Ok(Self {
            node,
            entries: scanned,
        })
    }

    /// Produces a required field; absence is an error located on the mapping.
    pub fn required<P: Producer>(&mut self, name: &str, producer: &P) -> ProduceResult<P::Output> {
        match self.claim(name) {
            Some(value) => producer.produce(value),
            None => Err(errors::required_missing(name, self.node)),
        }
    }

    /// Produces an optional field; absence yields `None`, never an error.
    pub fn optional<P: Producer>(
        &mut self,
        name: &str,
        producer: &P,
    ) -> Result<Option<Item<P::Output>>, ValidationError> {
        self.claim(name)
            .map(|value| producer.produce(value))
            .transpose()
    }

    fn claim(&mut self, name: &str) -> Option<&'a Node> {
        let entry = self.entries.iter_mut().find(|entry| entry.key == name)?;
        entry.claimed = true;
        Some(entry.value)
    }

    fn finish(&self) -> Result<(), ValidationError> {
        match self.entries.iter().find(|entry| !entry.claimed) {
            Some(entry) => Err(errors::unexpected_item(entry.key, entry.key_node)),
            None => Ok(()),
        }
    }
}

/// Fixed-field record producer: requires a mapping node and assembles a
/// statically declared record through a closure that claims each field from
/// the scanned entries.
///
/// ```rust
/// use trellis::extract::StringValueExtractor;
/// use trellis::produce::{Producer, RecordProducer, ScalarProducer};
/// use trellis::validate::NonEmptyStringValidator;
/// use trellis::{Item, Node, Span};
///
/// struct Greeting {
///     text: Item<String>,
/// }
///
/// let text = ScalarProducer::new(StringValueExtractor).with_validator(NonEmptyStringValidator);
/// let producer = RecordProducer::new(move |fields| {
///     Ok(Greeting {
///         text: fields.required("text", &text)?,
///     })
/// });
///
/// let node = Node::mapping(
///     vec![(
///         Node::scalar("text", Span::default()),
///         Node::scalar("hello", Span::default()),
///     )],
///     Span::default(),
/// );
/// let greeting = producer.produce(&node).unwrap().value;
/// assert_eq!(greeting.text.value, "hello");
/// ```
pub struct RecordProducer<T, F>
where
    F: Fn(&mut MappingFields<'_>) -> Result<T, ValidationError>,
{
    assemble: F,
}

impl<T, F> RecordProducer<T, F>
where
    F: Fn(&mut MappingFields<'_>) -> Result<T, ValidationError>,
{
    pub fn new(assemble: F) -> Self {
        Self { assemble }
    }
}

impl<T, F> Producer for RecordProducer<T, F>
where
    F: Fn(&mut MappingFields<'_>) -> Result<T, ValidationError>,
{
    type Output = T;

    fn produce(&self, node: &Node) -> ProduceResult<T> {
        let mut fields = MappingFields::scan(node)?;
        let value = (self.assemble)(&mut fields)?;
        fields.finish()?;
        Ok(Item::new(value, node.span()))
    }
}
