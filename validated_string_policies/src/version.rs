//! Application version strings such as `1.4.10`
//!
//! Versions are ordered component by component, comparing each component
//! numerically, so `1.10` sorts after `1.9`. When every shared component is
//! equal, the version with fewer components sorts first (`1.0` < `1.0.0`).

use std::{borrow::Cow, cmp::Ordering};

use validated_string::{policy, Comparator, Validator};

/// Policy for dot-separated numeric version strings
#[policy(name = "AppVersion", alias = "AppVersion")]
#[derive(Debug)]
pub enum AppVersionPolicy {}

impl Validator for AppVersionPolicy {
    fn validate(raw: &str) -> Option<Cow<'_, str>> {
        let version = raw.trim();
        let well_formed = version.split('.').all(|component| {
            !component.is_empty() && component.bytes().all(|b| b.is_ascii_digit())
        });

        if well_formed {
            Some(Cow::Borrowed(version))
        } else {
            None
        }
    }
}

impl Comparator for AppVersionPolicy {
    fn are_in_increasing_order(lhs: &str, rhs: &str) -> bool {
        compare_versions(lhs, rhs) == Ordering::Less
    }
}

/// Total order over canonical version strings
///
/// Versions that are numerically identical but spelled differently
/// (`1.02` and `1.2`) fall back to comparing their text so that only
/// identical strings compare equal.
fn compare_versions(lhs: &str, rhs: &str) -> Ordering {
    let mut left = lhs.split('.');
    let mut right = rhs.split('.');

    loop {
        match (left.next(), right.next()) {
            (Some(l), Some(r)) => match compare_numeric(l, r) {
                Ordering::Equal => continue,
                unequal => return unequal,
            },
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (None, None) => return lhs.cmp(rhs),
        }
    }
}

// Components may exceed any integer width, so compare digit strings directly.
fn compare_numeric(lhs: &str, rhs: &str) -> Ordering {
    let lhs = lhs.trim_start_matches('0');
    let rhs = rhs.trim_start_matches('0');
    lhs.len().cmp(&rhs.len()).then_with(|| lhs.cmp(rhs))
}
