//! Brazilian vehicle license plates in the `ABC-1234` layout
//!
//! Three letters and four digits, optionally separated by a hyphen or a space.
//! The stored form drops the separator and is upper-cased, so `abc-1234`,
//! `ABC 1234` and `ABC1234` are all stored as `ABC1234`.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use validated_string::{policy, Validator};

static PLATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z]{3}[- ]?[0-9]{4}$").expect("plate pattern is a valid regex")
});

/// Policy for Brazilian license plates
#[policy(name = "BrLicensePlate", alias = "BrLicensePlate")]
#[derive(Debug)]
pub enum BrLicensePlatePolicy {}

impl Validator for BrLicensePlatePolicy {
    fn validate(raw: &str) -> Option<Cow<'_, str>> {
        let plate = raw.trim();
        if !PLATE.is_match(plate) {
            return None;
        }

        if plate.len() == 7 && !plate.bytes().any(|b| b.is_ascii_lowercase()) {
            Some(Cow::Borrowed(plate))
        } else {
            Some(Cow::Owned(
                plate
                    .chars()
                    .filter(|c| !matches!(c, '-' | ' '))
                    .map(|c| c.to_ascii_uppercase())
                    .collect(),
            ))
        }
    }
}
