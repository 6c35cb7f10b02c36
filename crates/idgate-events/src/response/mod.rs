//! The response algebra for blocking events.
//!
//! Every blocking event is answered with either a uniform disallow
//! response or an allow response whose extra fields depend on the event
//! tag. The per-tag aliases at the bottom are the authoritative mapping
//! from tag to permitted fields; decoding a response against the wrong
//! alias fails.

pub mod allow;
pub mod constraints;
pub mod flag;
pub mod mutations;

use serde::{Deserialize, Serialize};

use flag::DeniedFlag;

pub use allow::{
    AuthenticationGateAllow, AuthenticationProceedAllow, IdTokenMutationAllow, JwtMutationAllow,
    UserMutationAllow,
};
pub use constraints::{
    BotProtectionMode, BotProtectionRequirements, Constraints, RateLimitName, RateLimitWeight,
    RateLimits,
};
pub use mutations::{
    IdTokenMutations, JwtMutations, Mutations, MutationsOnIdToken, MutationsOnJwt, MutationsOnUser,
    StandardAttributes, UserMutations,
};

/// A refusal. Structurally identical for every blocking tag; only the
/// optional operator-facing texts vary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct DisallowResponse {
    #[serde(rename = "is_allowed")]
    denied: DeniedFlag,
    /// Reason surfaced to the end user or operator. Absent means a
    /// generic denial message is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Title accompanying the reason.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl DisallowResponse {
    /// Deny with the generic message.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a user-facing reason.
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Attach a user-facing title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// A hook's decision for a blocking event: deny uniformly, or allow with
/// the extras the event tag permits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HookResponse<A> {
    /// The operation is refused.
    Disallowed(DisallowResponse),
    /// The operation may proceed, optionally with tag-specific extras.
    Allowed(A),
}

impl<A> HookResponse<A> {
    /// Allow with the given body.
    pub fn allow(body: A) -> Self {
        Self::Allowed(body)
    }

    /// Deny with the generic message.
    pub fn deny() -> Self {
        Self::Disallowed(DisallowResponse::new())
    }

    /// Whether this is an allow response.
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed(_))
    }
}

impl<A> From<DisallowResponse> for HookResponse<A> {
    fn from(disallow: DisallowResponse) -> Self {
        Self::Disallowed(disallow)
    }
}

/// Response to `user.pre_create`.
pub type UserPreCreateResponse = HookResponse<UserMutationAllow>;
/// Response to `user.profile.pre_update`.
pub type UserProfilePreUpdateResponse = HookResponse<UserMutationAllow>;
/// Response to `user.pre_schedule_deletion`.
pub type UserPreScheduleDeletionResponse = HookResponse<UserMutationAllow>;
/// Response to `user.pre_schedule_anonymization`.
pub type UserPreScheduleAnonymizationResponse = HookResponse<UserMutationAllow>;
/// Response to `oidc.jwt.pre_create`.
pub type OidcJwtPreCreateResponse = HookResponse<JwtMutationAllow>;
/// Response to `oidc.id_token.pre_create`.
pub type OidcIdTokenPreCreateResponse = HookResponse<IdTokenMutationAllow>;
/// Response to `authentication.pre_initialize`.
pub type AuthenticationPreInitializeResponse = HookResponse<AuthenticationGateAllow>;
/// Response to `authentication.post_identified`.
pub type AuthenticationPostIdentifiedResponse = HookResponse<AuthenticationGateAllow>;
/// Response to `authentication.pre_authenticated`.
pub type AuthenticationPreAuthenticatedResponse = HookResponse<AuthenticationProceedAllow>;
