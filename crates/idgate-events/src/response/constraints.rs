//! Constraint, bot-protection, and rate-limit signals a hook may attach
//! to an allow response at authentication-stage events.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::amr::AmrConstraint;

/// Additional requirements the platform must satisfy before the flow may
/// proceed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct Constraints {
    /// Method references the platform must additionally satisfy: at
    /// least one of the listed references. The exact combination policy
    /// across entries (and whether ordering matters) is defined by the
    /// caller, not by this contract.
    pub amr: Vec<AmrConstraint>,
}

impl Constraints {
    /// Require the given method references.
    pub fn amr(amr: Vec<AmrConstraint>) -> Self {
        Self { amr }
    }
}

/// Bot-protection directive for the current pipeline stage.
///
/// This is a tri-state signal: `always` forces a challenge, `never`
/// suppresses it, and *omitting the whole struct* means "use the platform
/// default". Implementers must preserve the distinction between an
/// absent field and either explicit mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BotProtectionRequirements {
    /// The requested mode.
    pub mode: BotProtectionMode,
}

impl BotProtectionRequirements {
    /// Force a bot-protection challenge.
    pub fn always() -> Self {
        Self {
            mode: BotProtectionMode::Always,
        }
    }

    /// Suppress the bot-protection challenge.
    pub fn never() -> Self {
        Self {
            mode: BotProtectionMode::Never,
        }
    }
}

/// Explicit bot-protection modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BotProtectionMode {
    /// Force a challenge.
    Always,
    /// Suppress the challenge.
    Never,
}

impl BotProtectionMode {
    /// Return the mode as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Never => "never",
        }
    }
}

impl fmt::Display for BotProtectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Rate-limit buckets a hook may add weight to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RateLimitName {
    /// The general authentication bucket.
    #[serde(rename = "authentication.general")]
    AuthenticationGeneral,
    /// The account-enumeration bucket.
    #[serde(rename = "authentication.account_enumeration")]
    AuthenticationAccountEnumeration,
}

impl RateLimitName {
    /// Return the bucket name as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AuthenticationGeneral => "authentication.general",
            Self::AuthenticationAccountEnumeration => "authentication.account_enumeration",
        }
    }
}

impl fmt::Display for RateLimitName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The weight to add to a bucket for this request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RateLimitWeight {
    /// Weight contributed by this request.
    pub weight: u32,
}

impl RateLimitWeight {
    /// A weight of the given size.
    pub fn of(weight: u32) -> Self {
        Self { weight }
    }
}

/// Per-bucket weights requested by a hook.
pub type RateLimits = BTreeMap<RateLimitName, RateLimitWeight>;
