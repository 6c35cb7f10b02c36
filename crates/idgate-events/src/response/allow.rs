//! Allow-response bodies, one per capability set.
//!
//! Each blocking tag permits a strict subset of the general allow-response
//! fields. Instead of one struct with every optional field, each subset is
//! its own struct with `deny_unknown_fields`, so a response carrying a
//! field its event tag does not permit fails to decode.

use serde::{Deserialize, Serialize};

use super::constraints::{BotProtectionRequirements, Constraints, RateLimits};
use super::flag::AllowedFlag;
use super::mutations::{
    IdTokenMutations, JwtMutations, MutationsOnIdToken, MutationsOnJwt, MutationsOnUser,
    UserMutations,
};

/// Allow body for user lifecycle pre-hooks: may only mutate the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct UserMutationAllow {
    #[serde(rename = "is_allowed")]
    allowed: AllowedFlag,
    /// Requested user changes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mutations: Option<MutationsOnUser>,
}

impl UserMutationAllow {
    /// Allow without requesting any change.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach user mutations.
    pub fn with_mutations(mut self, user: UserMutations) -> Self {
        self.mutations = Some(MutationsOnUser { user });
        self
    }
}

/// Allow body for `oidc.jwt.pre_create`: may only mutate the JWT payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct JwtMutationAllow {
    #[serde(rename = "is_allowed")]
    allowed: AllowedFlag,
    /// Requested claim changes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mutations: Option<MutationsOnJwt>,
}

impl JwtMutationAllow {
    /// Allow without requesting any change.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach JWT payload mutations.
    pub fn with_mutations(mut self, jwt: JwtMutations) -> Self {
        self.mutations = Some(MutationsOnJwt { jwt });
        self
    }
}

/// Allow body for `oidc.id_token.pre_create`: may only mutate the
/// ID-token payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct IdTokenMutationAllow {
    #[serde(rename = "is_allowed")]
    allowed: AllowedFlag,
    /// Requested claim changes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mutations: Option<MutationsOnIdToken>,
}

impl IdTokenMutationAllow {
    /// Allow without requesting any change.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach ID-token payload mutations.
    pub fn with_mutations(mut self, id_token: IdTokenMutations) -> Self {
        self.mutations = Some(MutationsOnIdToken { id_token });
        self
    }
}

/// Allow body for `authentication.pre_initialize` and
/// `authentication.post_identified`: may direct bot protection, constrain
/// methods, and weight rate limits. Bot protection is only meaningful
/// before an authenticator is accepted, so later stages do not get it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct AuthenticationGateAllow {
    #[serde(rename = "is_allowed")]
    allowed: AllowedFlag,
    /// Bot-protection directive. Absent means platform default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bot_protection: Option<BotProtectionRequirements>,
    /// Additional method requirements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraints: Option<Constraints>,
    /// Requested rate-limit weights.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_limits: Option<RateLimits>,
}

impl AuthenticationGateAllow {
    /// Allow without attaching any signal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a bot-protection directive.
    pub fn with_bot_protection(mut self, bot_protection: BotProtectionRequirements) -> Self {
        self.bot_protection = Some(bot_protection);
        self
    }

    /// Attach method requirements.
    pub fn with_constraints(mut self, constraints: Constraints) -> Self {
        self.constraints = Some(constraints);
        self
    }

    /// Attach rate-limit weights.
    pub fn with_rate_limits(mut self, rate_limits: RateLimits) -> Self {
        self.rate_limits = Some(rate_limits);
        self
    }
}

/// Allow body for `authentication.pre_authenticated`: may constrain
/// methods and weight rate limits, but not direct bot protection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct AuthenticationProceedAllow {
    #[serde(rename = "is_allowed")]
    allowed: AllowedFlag,
    /// Additional method requirements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraints: Option<Constraints>,
    /// Requested rate-limit weights.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_limits: Option<RateLimits>,
}

impl AuthenticationProceedAllow {
    /// Allow without attaching any signal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach method requirements.
    pub fn with_constraints(mut self, constraints: Constraints) -> Self {
        self.constraints = Some(constraints);
        self
    }

    /// Attach rate-limit weights.
    pub fn with_rate_limits(mut self, rate_limits: RateLimits) -> Self {
        self.rate_limits = Some(rate_limits);
        self
    }
}
