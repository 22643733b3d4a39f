//! Strings that are non-empty once surrounding whitespace is removed
//!
//! Values are stored trimmed and ordered lexicographically by their
//! Unicode scalar values.

use std::borrow::Cow;

use validated_string::{policy, Comparator, Validator};

/// Policy for non-empty, trimmed strings
#[policy(alias = "NonEmptyTrimmedString")]
#[derive(Debug)]
pub enum NonEmptyTrimmed {}

impl Validator for NonEmptyTrimmed {
    fn validate(raw: &str) -> Option<Cow<'_, str>> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Cow::Borrowed(trimmed))
        }
    }
}

impl Comparator for NonEmptyTrimmed {
    #[inline]
    fn are_in_increasing_order(lhs: &str, rhs: &str) -> bool {
        lhs < rhs
    }
}
