//! Email addresses
//!
//! Addresses are stored as written (less surrounding whitespace), but compare
//! and hash case-insensitively.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use validated_string::{policy, Normalizer, Validator};

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z0-9a-z._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,64}$")
        .expect("email pattern is a valid regex")
});

/// Policy for email addresses
///
/// The check is a shape check only: a local part, an `@`, and a domain ending in
/// an alphabetic top-level label.
#[policy(normalizer, name = "Email", alias = "EmailAddress")]
#[derive(Debug)]
pub enum EmailPolicy {}

impl Validator for EmailPolicy {
    fn validate(raw: &str) -> Option<Cow<'_, str>> {
        let email = raw.trim();
        if EMAIL.is_match(email) {
            Some(Cow::Borrowed(email))
        } else {
            None
        }
    }
}

impl Normalizer for EmailPolicy {
    fn normalize(raw: &str) -> Cow<'_, str> {
        if raw.bytes().any(|b| b.is_ascii_uppercase()) {
            Cow::Owned(raw.to_ascii_lowercase())
        } else {
            Cow::Borrowed(raw)
        }
    }
}
