//! Strings that carry proof of their validation
//!
//! Passing around un-typed strings means every consumer has to remember to check them.
//! A [`ValidatedString<P>`] can only be obtained by running its input through the
//! validation rules of the policy `P`, so holding one is proof that the check happened.
//!
//! Examples of concrete policies are available in the [`validated_string_policies`]
//! crate.
//!
//! [`validated_string_policies`]: https://docs.rs/validated_string_policies/
//!
//! # Policies
//!
//! A policy is a zero-sized marker type that bundles up to three capabilities:
//!
//! * a [`Validator`] (required), which accepts or rejects an input and produces its
//!   canonical form;
//! * a [`Normalizer`] (optional), which derives the key used for equality and hashing;
//! * a [`Comparator`] (optional), which orders canonical values.
//!
//! The [`Policy`] trait ties the bundle together and names the policy for diagnostics.
//!
//! ```
//! use std::borrow::Cow;
//! use validated_string::{Comparator, Identity, Policy, ValidatedString, Validator};
//!
//! pub enum NonEmptyTrimmed {}
//!
//! impl Validator for NonEmptyTrimmed {
//!     fn validate(raw: &str) -> Option<Cow<'_, str>> {
//!         let trimmed = raw.trim();
//!         if trimmed.is_empty() {
//!             None
//!         } else {
//!             Some(Cow::Borrowed(trimmed))
//!         }
//!     }
//! }
//!
//! impl Comparator for NonEmptyTrimmed {
//!     fn are_in_increasing_order(lhs: &str, rhs: &str) -> bool {
//!         lhs < rhs
//!     }
//! }
//!
//! impl Policy for NonEmptyTrimmed {
//!     const NAME: &'static str = "NonEmptyTrimmed";
//!     type Normalizer = Identity;
//! }
//!
//! type Trimmed = ValidatedString<NonEmptyTrimmed>;
//!
//! let hello = Trimmed::new("  hello  ").unwrap();
//! assert_eq!("hello", hello.as_str());
//! assert!(Trimmed::new("   ").is_none());
//! assert!(Trimmed::from_static("apple") < Trimmed::from_static("banana"));
//! ```
//!
//! The [`policy`] attribute writes the [`Policy`] impl, and optionally a type alias,
//! so the example above can be shortened:
//!
//! ```
//!# use std::borrow::Cow;
//! use validated_string::{policy, Comparator, Validator};
//!
//! #[policy(alias = "Trimmed")]
//! pub enum NonEmptyTrimmed {}
//!
//!# impl Validator for NonEmptyTrimmed {
//!#     fn validate(raw: &str) -> Option<Cow<'_, str>> {
//!#         Some(raw.trim()).filter(|s| !s.is_empty()).map(Cow::Borrowed)
//!#     }
//!# }
//!#
//!# impl Comparator for NonEmptyTrimmed {
//!#     fn are_in_increasing_order(lhs: &str, rhs: &str) -> bool {
//!#         lhs < rhs
//!#     }
//!# }
//!#
//! let hello: Trimmed = "  hello  ".parse().unwrap();
//! assert_eq!("hello", hello.as_str());
//! ```
//!
//! # Validation
//!
//! [`ValidatedString::new`] is the way to build a value from runtime input. It returns
//! `None` when the policy rejects the input; no partially valid value is ever produced.
//! [`FromStr`][core::str::FromStr] and [`TryFrom`][core::convert::TryFrom] are also
//! provided and report a [`ValidationFailure`] instead.
//!
//! The canonical form returned by the validator is what gets stored, so it may differ
//! from the input (trimmed, separators removed, upper-cased, ...). A validator must
//! accept its own canonical output unchanged: if `validate(s)` returns `Some(c)`, then
//! `validate(c)` must return `Some(c)`. Debug builds check this on every construction.
//!
//! ## Literals
//!
//! [`ValidatedString::from_static`] is reserved for values hard-coded in the program. It
//! runs the same validation, but an invalid literal is a programming error, so the
//! function panics with a message naming the literal and the policy.
//!
//! ```should_panic
//!# use std::borrow::Cow;
//!# use validated_string::{policy, Validator};
//!#
//!# #[policy(alias = "Trimmed")]
//!# pub enum NonEmptyTrimmed {}
//!#
//!# impl Validator for NonEmptyTrimmed {
//!#     fn validate(raw: &str) -> Option<Cow<'_, str>> {
//!#         Some(raw.trim()).filter(|s| !s.is_empty()).map(Cow::Borrowed)
//!#     }
//!# }
//!#
//! // panics: invalid literal "   " for policy NonEmptyTrimmed
//! let _ = Trimmed::from_static("   ");
//! ```
//!
//! # Normalization
//!
//! Equality and hashing are computed over a _comparison key_ produced by the policy's
//! [`Normalizer`]. The stored raw value is never rewritten by the normalizer, so a
//! case-insensitive policy keeps the caller's casing while treating `"ABC"` and `"abc"`
//! as the same value. Policies without normalization use [`Identity`], where the key is
//! the raw value itself.
//!
//! ```
//!# use std::borrow::Cow;
//! use validated_string::{policy, Normalizer, Validator};
//!
//! #[policy(normalizer, alias = "Token")]
//! pub enum CaseInsensitiveToken {}
//!
//! impl Validator for CaseInsensitiveToken {
//!     fn validate(raw: &str) -> Option<Cow<'_, str>> {
//!         if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_alphanumeric()) {
//!             Some(Cow::Borrowed(raw))
//!         } else {
//!             None
//!         }
//!     }
//! }
//!
//! impl Normalizer for CaseInsensitiveToken {
//!     fn normalize(raw: &str) -> Cow<'_, str> {
//!         if raw.bytes().any(|b| b.is_ascii_uppercase()) {
//!             Cow::Owned(raw.to_ascii_lowercase())
//!         } else {
//!             Cow::Borrowed(raw)
//!         }
//!     }
//! }
//!
//! let upper = Token::from_static("ABC");
//! assert_eq!(upper, Token::from_static("abc"));
//! assert_eq!("ABC", upper.as_str());
//! ```
//!
//! Because the comparison key can differ from the raw value, [`ValidatedString`] does
//! not implement [`Borrow<str>`][core::borrow::Borrow]: looking up a `str` in a hash
//! set of validated values would hash the raw text instead of the key.
//!
//! # Ordering
//!
//! [`PartialOrd`] and [`Ord`] are only implemented when the policy implements
//! [`Comparator`]. Ordering a policy without one is a compile error, not a runtime
//! failure.
//!
//! ```compile_fail
//!# use std::borrow::Cow;
//!# use validated_string::{policy, Validator};
//!#
//! #[policy(alias = "Unordered")]
//! pub enum AnyText {}
//!
//! impl Validator for AnyText {
//!     fn validate(raw: &str) -> Option<Cow<'_, str>> {
//!         Some(Cow::Borrowed(raw))
//!     }
//! }
//!
//! let _ = Unordered::from_static("a") < Unordered::from_static("b");
//! ```
//!
//! Ordering is computed over the raw values, not over the comparison key. A policy that
//! both normalizes and compares can therefore report two values as equal while also
//! ordering one before the other. Debug builds emit a `tracing` warning when that
//! happens.
//!
//! # Serde
//!
//! With the `serde` feature, a validated string serializes as its raw value and
//! deserializes through the same validation as [`ValidatedString::new`]. Rejected
//! input produces a deserialization error reporting a [`ValidationFailure`].
//!
//! ```
//!# #[cfg(feature = "serde")]
//!# fn main() {
//!# use std::borrow::Cow;
//!# use validated_string::{policy, Validator};
//!#
//!# #[policy(alias = "Trimmed")]
//!# pub enum NonEmptyTrimmed {}
//!#
//!# impl Validator for NonEmptyTrimmed {
//!#     fn validate(raw: &str) -> Option<Cow<'_, str>> {
//!#         Some(raw.trim()).filter(|s| !s.is_empty()).map(Cow::Borrowed)
//!#     }
//!# }
//!#
//! let value: Trimmed = serde_json::from_str("\" padded \"").unwrap();
//! assert_eq!("\"padded\"", serde_json::to_string(&value).unwrap());
//!
//! let err = serde_json::from_str::<Trimmed>("\"  \"").unwrap_err();
//! assert!(err.to_string().starts_with("validation failure"));
//!# }
//!# #[cfg(not(feature = "serde"))]
//!# fn main() {}
//! ```
//!
//! # `no_std` support
//!
//! The crate only needs `alloc`. Disable the default `std` feature to use it without
//! the standard library; the `std` feature only adds the
//! [`std::error::Error`] impl for [`ValidationFailure`].

#![warn(
    missing_docs,
    unused_import_braces,
    unused_imports,
    unused_qualifications
)]
#![deny(
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_must_use
)]
#![forbid(unsafe_code)]
#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod error;
#[cfg(feature = "serde")]
mod serde_impl;
mod value;

use alloc::borrow::Cow;

pub use error::ValidationFailure;
pub use validated_string_impl::policy;
pub use value::ValidatedString;

/// A validator that decides whether an input is acceptable
///
/// On acceptance, the validator returns the canonical form of the input. This is the
/// value that a [`ValidatedString`] stores.
pub trait Validator {
    /// Validates an input and returns its canonical form
    ///
    /// Returns `None` if the input is rejected. The canonical form must itself be
    /// accepted unchanged by this function.
    fn validate(raw: &str) -> Option<Cow<'_, str>>;
}

/// A normalizer that derives the comparison key of a canonical value
///
/// The key is used for equality and hashing only. It is never stored.
pub trait Normalizer {
    /// Returns the comparison key for a canonical value
    fn normalize(raw: &str) -> Cow<'_, str>;
}

/// A comparator defining a strict total order over canonical values
pub trait Comparator {
    /// Returns `true` if `lhs` is ordered strictly before `rhs`
    fn are_in_increasing_order(lhs: &str, rhs: &str) -> bool;
}

/// The bundle of capabilities governing one kind of validated string
///
/// This is usually implemented with the [`policy`] attribute.
pub trait Policy: Validator {
    /// Name of the policy, used in diagnostics
    const NAME: &'static str;

    /// The normalizer producing comparison keys
    ///
    /// Use [`Identity`] when values compare by their raw form.
    type Normalizer: Normalizer;
}

/// The normalizer for policies that compare values by their raw form
#[derive(Debug)]
pub enum Identity {}

impl Normalizer for Identity {
    #[inline]
    fn normalize(raw: &str) -> Cow<'_, str> {
        Cow::Borrowed(raw)
    }
}

#[doc(hidden)]
pub mod __private {
    pub use alloc::borrow::Cow;
}
