//! Mutations a hook may request through an allow response.
//!
//! A response carries at most one mutation kind: user attributes, JWT
//! claims, or ID-token claims, depending on the event tag. The wrapper
//! structs reject unknown keys, so a payload trying to combine kinds
//! fails to decode.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::entity::user::StandardAttributesAddress;

/// Requested changes to a user.
///
/// Lists replace the whole existing list; they are never merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct UserMutations {
    /// Standard attributes to set. Only whitelisted OIDC claims are
    /// accepted; unknown keys are rejected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standard_attributes: Option<StandardAttributes>,
    /// Custom attributes to set. Open mapping, any JSON value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_attributes: Option<Map<String, Value>>,
    /// Group keys to assign, replacing the current list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<String>>,
    /// Role keys to assign, replacing the current list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
}

/// The whitelisted subset of OIDC standard claims a mutation may set.
///
/// <https://openid.net/specs/openid-connect-core-1_0.html#StandardClaims>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct StandardAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zoneinfo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<StandardAttributesAddress>,
}

/// Requested changes to JWT claims. The payload is merged into the token
/// claims by the platform; claim names are not constrained here beyond
/// being a string-keyed mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct JwtMutations {
    /// Claims to merge into the token payload.
    pub payload: Map<String, Value>,
}

/// Requested changes to ID-token claims.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct IdTokenMutations {
    /// Claims to merge into the ID-token payload.
    pub payload: Map<String, Value>,
}

/// A mutation targeting the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct MutationsOnUser {
    /// The requested user changes.
    pub user: UserMutations,
}

/// A mutation targeting the JWT being issued.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct MutationsOnJwt {
    /// The requested claim changes.
    pub jwt: JwtMutations,
}

/// A mutation targeting the ID token being issued.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct MutationsOnIdToken {
    /// The requested claim changes.
    pub id_token: IdTokenMutations,
}

/// Any mutation a response can carry. Exactly one kind; the wrappers
/// reject unknown keys so combined payloads fail to decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Mutations {
    /// A user mutation.
    User(MutationsOnUser),
    /// A JWT mutation.
    Jwt(MutationsOnJwt),
    /// An ID-token mutation.
    IdToken(MutationsOnIdToken),
}
