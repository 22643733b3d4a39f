use alloc::{borrow::Cow, string::String};
use core::{
    cmp::Ordering,
    convert::TryFrom,
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
    str::FromStr,
};

use crate::{Comparator, Normalizer, Policy, ValidationFailure};

/// A string that has been accepted by the policy `P`
///
/// The stored value is the canonical form produced by the policy's [`Validator`].
/// Values are immutable once constructed.
///
/// [`Validator`]: crate::Validator
pub struct ValidatedString<P: Policy> {
    raw: String,
    policy: PhantomData<fn() -> P>,
}

impl<P: Policy> ValidatedString<P> {
    /// Constructs a new value if the input is accepted by `P`
    ///
    /// Returns `None` if the input is rejected.
    #[inline]
    pub fn new(input: &str) -> Option<Self> {
        match P::validate(input) {
            Some(canonical) => Some(Self::from_canonical(canonical.into_owned())),
            None => {
                tracing::debug!(policy = P::NAME, "input rejected by validator");
                None
            }
        }
    }

    /// Constructs a new value from a string literal known to be valid
    ///
    /// This is intended for constants written into the program. Use [`new`][Self::new]
    /// for anything derived from runtime input.
    ///
    /// # Panics
    ///
    /// This function will panic if the literal is rejected by `P`.
    #[track_caller]
    pub fn from_static(literal: &'static str) -> Self {
        match Self::new(literal) {
            Some(value) => value,
            None => panic!("invalid literal {:?} for policy {}", literal, P::NAME),
        }
    }

    fn from_string(input: String) -> Option<Self> {
        let rewritten = match P::validate(&input) {
            None => {
                tracing::debug!(policy = P::NAME, "input rejected by validator");
                return None;
            }
            Some(Cow::Borrowed(canonical)) if canonical == input => None,
            Some(canonical) => Some(canonical.into_owned()),
        };

        Some(Self::from_canonical(rewritten.unwrap_or(input)))
    }

    fn from_canonical(raw: String) -> Self {
        debug_assert!(
            P::validate(&raw).map_or(false, |again| again == raw.as_str()),
            "policy {} does not accept its canonical form {:?} unchanged",
            P::NAME,
            raw,
        );

        Self {
            raw,
            policy: PhantomData,
        }
    }

    /// Provides access to the canonical raw value
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Computes the key used for equality and hashing
    ///
    /// This is the raw value unless the policy normalizes.
    #[inline]
    pub fn comparison_key(&self) -> Cow<'_, str> {
        <P::Normalizer as Normalizer>::normalize(&self.raw)
    }

    /// Unwraps the underlying [`String`] value
    #[inline]
    pub fn take(self) -> String {
        self.raw
    }
}

impl<P: Policy> Clone for ValidatedString<P> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            raw: self.raw.clone(),
            policy: PhantomData,
        }
    }
}

impl<P: Policy> fmt::Debug for ValidatedString<P> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ValidatedString<{}>(", P::NAME)?;
        <str as fmt::Debug>::fmt(&self.raw, f)?;
        f.write_str(")")
    }
}

impl<P: Policy> fmt::Display for ValidatedString<P> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        <str as fmt::Display>::fmt(&self.raw, f)
    }
}

impl<P: Policy> PartialEq for ValidatedString<P> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw || self.comparison_key() == other.comparison_key()
    }
}

impl<P: Policy> Eq for ValidatedString<P> {}

impl<P: Policy> Hash for ValidatedString<P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        <str as Hash>::hash(&self.comparison_key(), state)
    }
}

impl<P: Policy + Comparator> Ord for ValidatedString<P> {
    fn cmp(&self, other: &Self) -> Ordering {
        let ordering = if P::are_in_increasing_order(&self.raw, &other.raw) {
            Ordering::Less
        } else if P::are_in_increasing_order(&other.raw, &self.raw) {
            Ordering::Greater
        } else {
            Ordering::Equal
        };

        if cfg!(debug_assertions) && ordering != Ordering::Equal && self == other {
            tracing::warn!(
                policy = P::NAME,
                "ordering of raw values disagrees with normalized equality"
            );
        }

        ordering
    }
}

impl<P: Policy + Comparator> PartialOrd for ValidatedString<P> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P: Policy> AsRef<str> for ValidatedString<P> {
    #[inline]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl<P: Policy> From<ValidatedString<P>> for String {
    #[inline]
    fn from(value: ValidatedString<P>) -> Self {
        value.take()
    }
}

impl<P: Policy> FromStr for ValidatedString<P> {
    type Err = ValidationFailure;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or_else(ValidationFailure::of::<P>)
    }
}

impl<P: Policy> TryFrom<&'_ str> for ValidatedString<P> {
    type Error = ValidationFailure;

    #[inline]
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s).ok_or_else(ValidationFailure::of::<P>)
    }
}

impl<P: Policy> TryFrom<String> for ValidatedString<P> {
    type Error = ValidationFailure;

    #[inline]
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_string(s).ok_or_else(ValidationFailure::of::<P>)
    }
}
