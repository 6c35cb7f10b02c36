//! Caller-side validation of raw hook responses.
//!
//! The typed aliases in [`crate::response`] already make illegal field
//! combinations undecodable. Callers that handle responses as raw JSON
//! (e.g. before choosing a typed decode, or when logging rejects) use the
//! table here instead: for each blocking tag, the exact set of fields an
//! allow response may carry.
//!
//! A malformed allow response is rejected wholesale; it is never
//! partially applied.

use serde_json::Value;
use std::fmt;
use tracing::debug;

use idgate_core::{AppError, AppResult};

use crate::event::kind::BlockingKind;
use crate::response::{
    BotProtectionRequirements, Constraints, MutationsOnIdToken, MutationsOnJwt, MutationsOnUser,
    RateLimits,
};

/// Optional fields an allow response can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseField {
    /// The `mutations` field.
    Mutations,
    /// The `bot_protection` field.
    BotProtection,
    /// The `constraints` field.
    Constraints,
    /// The `rate_limits` field.
    RateLimits,
}

impl ResponseField {
    /// Return the field as its wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mutations => "mutations",
            Self::BotProtection => "bot_protection",
            Self::Constraints => "constraints",
            Self::RateLimits => "rate_limits",
        }
    }
}

impl fmt::Display for ResponseField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl BlockingKind {
    /// The allow-response fields this tag permits. The authoritative
    /// whitelist: everything else must be absent.
    pub fn permitted_fields(&self) -> &'static [ResponseField] {
        match self {
            Self::UserPreCreate
            | Self::UserProfilePreUpdate
            | Self::UserPreScheduleDeletion
            | Self::UserPreScheduleAnonymization
            | Self::OidcJwtPreCreate
            | Self::OidcIdTokenPreCreate => &[ResponseField::Mutations],
            Self::AuthenticationPreInitialize | Self::AuthenticationPostIdentified => &[
                ResponseField::BotProtection,
                ResponseField::Constraints,
                ResponseField::RateLimits,
            ],
            Self::AuthenticationPreAuthenticated => {
                &[ResponseField::Constraints, ResponseField::RateLimits]
            }
        }
    }
}

/// The outcome of validating a raw response.
#[derive(Debug, Clone, PartialEq)]
pub enum Decision {
    /// The hook allowed the operation; the response conforms to the
    /// tag's permitted-field set.
    Allowed,
    /// The hook refused the operation.
    Denied {
        /// Reason to surface, if the hook provided one.
        reason: Option<String>,
        /// Title to surface, if the hook provided one.
        title: Option<String>,
    },
}

/// Validates a raw JSON response against the permitted shape for the
/// given blocking tag.
///
/// Rejects non-objects, a missing or non-boolean `is_allowed`, unknown
/// fields on a disallow response, and any allow-response field outside
/// the tag's permitted set. Permitted fields must also decode into their
/// schema types, so e.g. `mutations.jwt` on a user-mutating tag fails.
pub fn validate_response(kind: BlockingKind, response: &Value) -> AppResult<Decision> {
    let object = response.as_object().ok_or_else(|| {
        debug!(event = %kind, "rejected response: not a JSON object");
        AppError::schema_violation("Response must be a JSON object")
    })?;

    let is_allowed = object
        .get("is_allowed")
        .ok_or_else(|| {
            debug!(event = %kind, "rejected response: missing is_allowed");
            AppError::schema_violation("Response is missing the mandatory 'is_allowed' field")
        })?
        .as_bool()
        .ok_or_else(|| {
            debug!(event = %kind, "rejected response: is_allowed is not a boolean");
            AppError::schema_violation("'is_allowed' must be a boolean")
        })?;

    if !is_allowed {
        return validate_disallow(kind, object);
    }

    for (key, value) in object {
        if key == "is_allowed" {
            continue;
        }
        let field = kind
            .permitted_fields()
            .iter()
            .find(|field| field.as_str() == key)
            .ok_or_else(|| {
                debug!(event = %kind, field = %key, "rejected allow response: field not permitted");
                AppError::schema_violation(format!(
                    "Field '{key}' is not permitted in an allow response to '{kind}'"
                ))
            })?;
        validate_field(kind, *field, value)?;
    }

    Ok(Decision::Allowed)
}

fn validate_disallow(
    kind: BlockingKind,
    object: &serde_json::Map<String, Value>,
) -> AppResult<Decision> {
    let mut reason = None;
    let mut title = None;
    for (key, value) in object {
        match key.as_str() {
            "is_allowed" => {}
            "reason" => reason = Some(expect_string(key, value)?),
            "title" => title = Some(expect_string(key, value)?),
            _ => {
                debug!(event = %kind, field = %key, "rejected disallow response: unknown field");
                return Err(AppError::schema_violation(format!(
                    "Field '{key}' is not permitted in a disallow response"
                )));
            }
        }
    }
    Ok(Decision::Denied { reason, title })
}

fn expect_string(key: &str, value: &Value) -> AppResult<String> {
    value
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| AppError::schema_violation(format!("'{key}' must be a string")))
}

fn validate_field(kind: BlockingKind, field: ResponseField, value: &Value) -> AppResult<()> {
    let result = match field {
        ResponseField::Mutations => match kind {
            BlockingKind::OidcJwtPreCreate => {
                serde_json::from_value::<MutationsOnJwt>(value.clone()).map(drop)
            }
            BlockingKind::OidcIdTokenPreCreate => {
                serde_json::from_value::<MutationsOnIdToken>(value.clone()).map(drop)
            }
            _ => serde_json::from_value::<MutationsOnUser>(value.clone()).map(drop),
        },
        ResponseField::BotProtection => {
            serde_json::from_value::<BotProtectionRequirements>(value.clone()).map(drop)
        }
        ResponseField::Constraints => serde_json::from_value::<Constraints>(value.clone()).map(drop),
        ResponseField::RateLimits => serde_json::from_value::<RateLimits>(value.clone()).map(drop),
    };
    result.map_err(|err| {
        debug!(event = %kind, field = %field, %err, "rejected allow response: malformed field");
        AppError::schema_violation(format!("Field '{field}' is malformed for '{kind}': {err}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_permitted_fields_table() {
        assert_eq!(
            BlockingKind::UserPreCreate.permitted_fields(),
            &[ResponseField::Mutations]
        );
        assert_eq!(
            BlockingKind::AuthenticationPreInitialize.permitted_fields(),
            &[
                ResponseField::BotProtection,
                ResponseField::Constraints,
                ResponseField::RateLimits,
            ]
        );
        assert!(!BlockingKind::AuthenticationPreAuthenticated
            .permitted_fields()
            .contains(&ResponseField::BotProtection));
    }

    #[test]
    fn test_disallow_is_uniform_across_tags() {
        let disallow = json!({"is_allowed": false, "reason": "blocked", "title": "Blocked"});
        for kind in BlockingKind::ALL {
            let decision = validate_response(kind, &disallow).unwrap();
            assert_eq!(
                decision,
                Decision::Denied {
                    reason: Some("blocked".to_string()),
                    title: Some("Blocked".to_string()),
                }
            );
        }
    }

    #[test]
    fn test_allow_with_field_outside_whitelist_is_rejected() {
        let response = json!({"is_allowed": true, "bot_protection": {"mode": "always"}});
        let err = validate_response(BlockingKind::UserPreCreate, &response).unwrap_err();
        assert_eq!(err.kind, idgate_core::ErrorKind::SchemaViolation);
    }

    #[test]
    fn test_allow_with_wrong_mutation_target_is_rejected() {
        let response = json!({"is_allowed": true, "mutations": {"jwt": {"payload": {}}}});
        assert!(validate_response(BlockingKind::UserPreCreate, &response).is_err());

        let response = json!({"is_allowed": true, "mutations": {"user": {"groups": ["users"]}}});
        assert!(validate_response(BlockingKind::OidcJwtPreCreate, &response).is_err());
    }

    #[test]
    fn test_missing_is_allowed_is_rejected() {
        let err = validate_response(BlockingKind::UserPreCreate, &json!({})).unwrap_err();
        assert_eq!(err.kind, idgate_core::ErrorKind::SchemaViolation);
        assert!(validate_response(BlockingKind::UserPreCreate, &json!("yes")).is_err());
        assert!(
            validate_response(BlockingKind::UserPreCreate, &json!({"is_allowed": "yes"})).is_err()
        );
    }

    #[test]
    fn test_full_authentication_allow_passes() {
        let response = json!({
            "is_allowed": true,
            "bot_protection": {"mode": "always"},
            "constraints": {"amr": ["mfa", "pwd", "sms"]},
            "rate_limits": {
                "authentication.account_enumeration": {"weight": 1},
                "authentication.general": {"weight": 1},
            },
        });
        assert_eq!(
            validate_response(BlockingKind::AuthenticationPreInitialize, &response).unwrap(),
            Decision::Allowed
        );
        // Same payload is illegal once an authenticator was accepted.
        assert!(
            validate_response(BlockingKind::AuthenticationPreAuthenticated, &response).is_err()
        );
    }
}
