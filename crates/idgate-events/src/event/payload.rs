//! Payload shapes shared by event variants.

use serde::{Deserialize, Serialize};

use crate::entity::authentication::{AuthenticationContext, Identification};
use crate::entity::identity::Identity;
use crate::entity::jwt::Jwt;
use crate::entity::session::Session;
use crate::entity::user::User;

/// A bare user snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPayload {
    /// The affected user.
    pub user: User,
}

/// A user together with all of their identities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserIdentitiesPayload {
    /// The affected user.
    pub user: User,
    /// The user's identities.
    pub identities: Vec<Identity>,
}

/// A user together with one affected identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserIdentityPayload {
    /// The affected user.
    pub user: User,
    /// The affected identity.
    pub identity: Identity,
}

/// A user together with the before/after states of an updated identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentityUpdatedPayload {
    /// The affected user.
    pub user: User,
    /// The identity before the update.
    pub old_identity: Identity,
    /// The identity after the update.
    pub new_identity: Identity,
}

/// A user together with the session involved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSessionPayload {
    /// The affected user.
    pub user: User,
    /// The session involved.
    pub session: Session,
}

/// The two sides of an anonymous-user promotion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnonymousPromotedPayload {
    /// The anonymous user before promotion.
    pub anonymous_user: User,
    /// The promoted user.
    pub user: User,
    /// The promoted user's identities.
    pub identities: Vec<Identity>,
}

/// A token about to be issued, with the subject and their identities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenPreCreatePayload {
    /// The token subject.
    pub user: User,
    /// The subject's identities.
    pub identities: Vec<Identity>,
    /// The token under construction.
    pub jwt: Jwt,
}

/// The in-flight authentication state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticationContextPayload {
    /// The in-flight authentication state.
    pub authentication_context: AuthenticationContext,
}

/// The in-flight authentication state plus the identification that just
/// resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostIdentifiedPayload {
    /// The in-flight authentication state.
    pub authentication_context: AuthenticationContext,
    /// The identification that was just asserted.
    pub identification: Identification,
}

/// A failed authentication attempt. The user is absent when the failure
/// happened before any user was resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticationFailedPayload {
    /// The user the attempt was against, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}
