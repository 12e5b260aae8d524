//! Value extractors: raw scalar text into one primitive semantic type.
//!
//! An extractor only runs after a `ScalarProducer` has established the node
//! is a scalar; it receives the raw text plus the node itself so failures can
//! be located precisely.

use crate::errors::{self, ValidationError};
use crate::node::Node;

/// Converts a scalar node's raw text into one primitive semantic type.
pub trait ValueExtractor {
    type Output;

    fn extract(&self, text: &str, node: &Node) -> Result<Self::Output, ValidationError>;
}

/// Returns the raw scalar text unchanged; never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringValueExtractor;

impl ValueExtractor for StringValueExtractor {
    type Output = String;

    fn extract(&self, text: &str, _node: &Node) -> Result<String, ValidationError> {
        Ok(text.to_string())
    }
}

/// Parses integer or decimal numeric syntax, optional leading `-`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FloatValueExtractor;

impl ValueExtractor for FloatValueExtractor {
    type Output = f64;

    fn extract(&self, text: &str, node: &Node) -> Result<f64, ValidationError> {
        text.parse::<f64>()
            .map_err(|_| errors::invalid_float(text, node))
    }
}

/// Accepts a fixed table of truthy/falsy literal spellings, per the YAML 1.1
/// convention of the documents this framework was built for.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoolValueExtractor;

impl ValueExtractor for BoolValueExtractor {
    type Output = bool;

    fn extract(&self, text: &str, node: &Node) -> Result<bool, ValidationError> {
        match text.to_ascii_lowercase().as_str() {
            "true" | "yes" | "on" => Ok(true),
            "false" | "no" | "off" => Ok(false),
            _ => Err(errors::invalid_bool(text, node)),
        }
    }
}
