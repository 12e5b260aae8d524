//! Semantic validators: one rule per struct, applied to already-extracted
//! values. Each validator reports against the node the value came from, so a
//! violation points at the exact source construct.

use lazy_static::lazy_static;
use regex::Regex;

use crate::errors::{self, ValidationError};
use crate::node::Node;

lazy_static! {
    // Two-digit hour, minute strictly below 60. The hour's upper bound is
    // deliberately open: shifts past 23 express cumulative/overnight offsets.
    static ref TIME_SHIFT: Regex = Regex::new(r"^[0-9]{2}:[0-5][0-9]$").unwrap();
}

/// Checks an already-extracted value against one semantic rule.
///
/// Side-effect-free; a producer may apply any number of validators in
/// declared order, stopping at the first violation.
pub trait Validator<T> {
    fn validate(&self, value: &T, node: &Node) -> Result<(), ValidationError>;
}

/// Rejects the empty string.
#[derive(Debug, Clone, Copy, Default)]
pub struct NonEmptyStringValidator;

impl Validator<String> for NonEmptyStringValidator {
    fn validate(&self, value: &String, node: &Node) -> Result<(), ValidationError> {
        if value.is_empty() {
            return Err(ValidationError::new("Empty string is not allowed", node));
        }
        Ok(())
    }
}

/// Restricts a string to lowercase ASCII letters, digits, and hyphens,
/// naming the first offending character.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringKeyValidator;

impl Validator<String> for StringKeyValidator {
    fn validate(&self, value: &String, node: &Node) -> Result<(), ValidationError> {
        let offending = value
            .chars()
            .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-'));
        match offending {
            Some(character) => Err(errors::invalid_key_character(character, value, node)),
            None => Ok(()),
        }
    }
}

/// Inclusive `[min, max]` bounds check on a float.
#[derive(Debug, Clone, Copy)]
pub struct FloatRangeValidator {
    min: f64,
    max: f64,
}

impl FloatRangeValidator {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

impl Validator<f64> for FloatRangeValidator {
    fn validate(&self, value: &f64, node: &Node) -> Result<(), ValidationError> {
        if *value < self.min || *value > self.max {
            return Err(errors::out_of_interval(*value, self.min, self.max, node));
        }
        Ok(())
    }
}

/// `HH:MM` time-shift check; any other shape is rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringTimeShiftValidator;

impl Validator<String> for StringTimeShiftValidator {
    fn validate(&self, value: &String, node: &Node) -> Result<(), ValidationError> {
        if !TIME_SHIFT.is_match(value) {
            return Err(errors::invalid_time(value, node));
        }
        Ok(())
    }
}
