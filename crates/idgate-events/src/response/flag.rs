//! Literal-boolean markers for the `is_allowed` discriminator.
//!
//! A response is tagged by `is_allowed` rather than a string tag, so the
//! allow/deny branches are discriminated by the boolean *value*. These
//! markers only deserialize from their own literal, which lets
//! `serde(untagged)` pick the right branch structurally.

use serde::de::{Error as DeError, Unexpected};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Serializes as the JSON literal `true`; refuses anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AllowedFlag;

impl Serialize for AllowedFlag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(true)
    }
}

impl<'de> Deserialize<'de> for AllowedFlag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if bool::deserialize(deserializer)? {
            Ok(Self)
        } else {
            Err(DeError::invalid_value(
                Unexpected::Bool(false),
                &"the literal true",
            ))
        }
    }
}

/// Serializes as the JSON literal `false`; refuses anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeniedFlag;

impl Serialize for DeniedFlag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(false)
    }
}

impl<'de> Deserialize<'de> for DeniedFlag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if bool::deserialize(deserializer)? {
            Err(DeError::invalid_value(
                Unexpected::Bool(true),
                &"the literal false",
            ))
        } else {
            Ok(Self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_flag_only_accepts_true() {
        assert!(serde_json::from_str::<AllowedFlag>("true").is_ok());
        assert!(serde_json::from_str::<AllowedFlag>("false").is_err());
        assert!(serde_json::from_str::<AllowedFlag>("\"true\"").is_err());
        assert_eq!(serde_json::to_string(&AllowedFlag).unwrap(), "true");
    }

    #[test]
    fn test_denied_flag_only_accepts_false() {
        assert!(serde_json::from_str::<DeniedFlag>("false").is_ok());
        assert!(serde_json::from_str::<DeniedFlag>("true").is_err());
        assert_eq!(serde_json::to_string(&DeniedFlag).unwrap(), "false");
    }
}
