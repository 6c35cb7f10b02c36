//! Blocking events: the platform suspends the triggering operation until
//! the hook responds with an allow/deny decision.

use serde::{Deserialize, Serialize};

use super::kind::BlockingKind;
use super::payload::{
    AuthenticationContextPayload, PostIdentifiedPayload, TokenPreCreatePayload,
    UserIdentitiesPayload, UserPayload,
};

/// A blocking event, tagged by `type` with a tag-specific `payload`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum BlockingEvent {
    /// A user is about to be created.
    #[serde(rename = "user.pre_create")]
    UserPreCreate(UserIdentitiesPayload),
    /// A user's profile is about to be updated.
    #[serde(rename = "user.profile.pre_update")]
    UserProfilePreUpdate(UserPayload),
    /// A user's deletion is about to be scheduled.
    #[serde(rename = "user.pre_schedule_deletion")]
    UserPreScheduleDeletion(UserPayload),
    /// A user's anonymization is about to be scheduled.
    #[serde(rename = "user.pre_schedule_anonymization")]
    UserPreScheduleAnonymization(UserPayload),
    /// An access-token JWT is about to be issued.
    #[serde(rename = "oidc.jwt.pre_create")]
    OidcJwtPreCreate(TokenPreCreatePayload),
    /// An ID token is about to be issued.
    #[serde(rename = "oidc.id_token.pre_create")]
    OidcIdTokenPreCreate(TokenPreCreatePayload),
    /// An authentication flow is about to start.
    #[serde(rename = "authentication.pre_initialize")]
    AuthenticationPreInitialize(AuthenticationContextPayload),
    /// An identification was just asserted in an authentication flow.
    #[serde(rename = "authentication.post_identified")]
    AuthenticationPostIdentified(PostIdentifiedPayload),
    /// An authentication flow is about to conclude successfully.
    #[serde(rename = "authentication.pre_authenticated")]
    AuthenticationPreAuthenticated(AuthenticationContextPayload),
}

impl BlockingEvent {
    /// The tag of this event.
    pub fn kind(&self) -> BlockingKind {
        match self {
            Self::UserPreCreate(_) => BlockingKind::UserPreCreate,
            Self::UserProfilePreUpdate(_) => BlockingKind::UserProfilePreUpdate,
            Self::UserPreScheduleDeletion(_) => BlockingKind::UserPreScheduleDeletion,
            Self::UserPreScheduleAnonymization(_) => BlockingKind::UserPreScheduleAnonymization,
            Self::OidcJwtPreCreate(_) => BlockingKind::OidcJwtPreCreate,
            Self::OidcIdTokenPreCreate(_) => BlockingKind::OidcIdTokenPreCreate,
            Self::AuthenticationPreInitialize(_) => BlockingKind::AuthenticationPreInitialize,
            Self::AuthenticationPostIdentified(_) => BlockingKind::AuthenticationPostIdentified,
            Self::AuthenticationPreAuthenticated(_) => BlockingKind::AuthenticationPreAuthenticated,
        }
    }
}
