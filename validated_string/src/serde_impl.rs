use alloc::string::String;
use core::convert::TryFrom;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::{Policy, ValidatedString};

impl<P: Policy> Serialize for ValidatedString<P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Deserializes a string and validates it against `P`
///
/// A rejected value is reported as a [`ValidationFailure`][crate::ValidationFailure]
/// through [`de::Error::custom`].
impl<'de, P: Policy> Deserialize<'de> for ValidatedString<P> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::try_from(raw).map_err(<D::Error as de::Error>::custom)
    }
}
