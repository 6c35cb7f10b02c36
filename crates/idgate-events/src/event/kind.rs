//! The closed tag enumerations of the event catalogue.
//!
//! Every tag maps to exactly one payload shape; there is no catch-all.
//! An unrecognized tag parses to an `UnknownEventType` error so callers
//! can apply their fail-safe policy (disallow for blocking dispatch,
//! silent drop for notifications).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use idgate_core::AppError;

/// Tags of events that suspend the triggering operation until the hook
/// answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockingKind {
    /// A user is about to be created.
    #[serde(rename = "user.pre_create")]
    UserPreCreate,
    /// A user's profile is about to be updated.
    #[serde(rename = "user.profile.pre_update")]
    UserProfilePreUpdate,
    /// A user's deletion is about to be scheduled.
    #[serde(rename = "user.pre_schedule_deletion")]
    UserPreScheduleDeletion,
    /// A user's anonymization is about to be scheduled.
    #[serde(rename = "user.pre_schedule_anonymization")]
    UserPreScheduleAnonymization,
    /// An access-token JWT is about to be issued.
    #[serde(rename = "oidc.jwt.pre_create")]
    OidcJwtPreCreate,
    /// An ID token is about to be issued.
    #[serde(rename = "oidc.id_token.pre_create")]
    OidcIdTokenPreCreate,
    /// An authentication flow is about to start.
    #[serde(rename = "authentication.pre_initialize")]
    AuthenticationPreInitialize,
    /// An identification was just asserted in an authentication flow.
    #[serde(rename = "authentication.post_identified")]
    AuthenticationPostIdentified,
    /// An authentication flow is about to conclude successfully.
    #[serde(rename = "authentication.pre_authenticated")]
    AuthenticationPreAuthenticated,
}

impl BlockingKind {
    /// All blocking tags, for exhaustive table-driven checks.
    pub const ALL: [BlockingKind; 9] = [
        Self::UserPreCreate,
        Self::UserProfilePreUpdate,
        Self::UserPreScheduleDeletion,
        Self::UserPreScheduleAnonymization,
        Self::OidcJwtPreCreate,
        Self::OidcIdTokenPreCreate,
        Self::AuthenticationPreInitialize,
        Self::AuthenticationPostIdentified,
        Self::AuthenticationPreAuthenticated,
    ];

    /// Return the tag as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UserPreCreate => "user.pre_create",
            Self::UserProfilePreUpdate => "user.profile.pre_update",
            Self::UserPreScheduleDeletion => "user.pre_schedule_deletion",
            Self::UserPreScheduleAnonymization => "user.pre_schedule_anonymization",
            Self::OidcJwtPreCreate => "oidc.jwt.pre_create",
            Self::OidcIdTokenPreCreate => "oidc.id_token.pre_create",
            Self::AuthenticationPreInitialize => "authentication.pre_initialize",
            Self::AuthenticationPostIdentified => "authentication.post_identified",
            Self::AuthenticationPreAuthenticated => "authentication.pre_authenticated",
        }
    }
}

impl fmt::Display for BlockingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BlockingKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| AppError::unknown_event_type(format!("Unknown blocking event tag: '{s}'")))
    }
}

/// Tags of fire-and-forget notification events. Any value returned by a
/// hook for these is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NonblockingKind {
    #[serde(rename = "user.created")]
    UserCreated,
    #[serde(rename = "user.profile.updated")]
    UserProfileUpdated,
    #[serde(rename = "user.authenticated")]
    UserAuthenticated,
    #[serde(rename = "user.signed_out")]
    UserSignedOut,
    #[serde(rename = "user.anonymous.promoted")]
    UserAnonymousPromoted,
    #[serde(rename = "user.disabled")]
    UserDisabled,
    #[serde(rename = "user.reenabled")]
    UserReenabled,
    #[serde(rename = "user.deletion_scheduled")]
    UserDeletionScheduled,
    #[serde(rename = "user.deletion_unscheduled")]
    UserDeletionUnscheduled,
    #[serde(rename = "user.deleted")]
    UserDeleted,
    #[serde(rename = "user.anonymization_scheduled")]
    UserAnonymizationScheduled,
    #[serde(rename = "user.anonymization_unscheduled")]
    UserAnonymizationUnscheduled,
    #[serde(rename = "user.anonymized")]
    UserAnonymized,
    #[serde(rename = "identity.email.added")]
    IdentityEmailAdded,
    #[serde(rename = "identity.email.removed")]
    IdentityEmailRemoved,
    #[serde(rename = "identity.email.updated")]
    IdentityEmailUpdated,
    #[serde(rename = "identity.email.verified")]
    IdentityEmailVerified,
    #[serde(rename = "identity.email.unverified")]
    IdentityEmailUnverified,
    #[serde(rename = "identity.phone.added")]
    IdentityPhoneAdded,
    #[serde(rename = "identity.phone.removed")]
    IdentityPhoneRemoved,
    #[serde(rename = "identity.phone.updated")]
    IdentityPhoneUpdated,
    #[serde(rename = "identity.phone.verified")]
    IdentityPhoneVerified,
    #[serde(rename = "identity.phone.unverified")]
    IdentityPhoneUnverified,
    #[serde(rename = "identity.username.added")]
    IdentityUsernameAdded,
    #[serde(rename = "identity.username.removed")]
    IdentityUsernameRemoved,
    #[serde(rename = "identity.username.updated")]
    IdentityUsernameUpdated,
    #[serde(rename = "identity.oauth.connected")]
    IdentityOauthConnected,
    #[serde(rename = "identity.oauth.disconnected")]
    IdentityOauthDisconnected,
    #[serde(rename = "authentication.identity.login_id.failed")]
    AuthenticationIdentityLoginIdFailed,
    #[serde(rename = "authentication.identity.anonymous.failed")]
    AuthenticationIdentityAnonymousFailed,
    #[serde(rename = "authentication.identity.biometric.failed")]
    AuthenticationIdentityBiometricFailed,
    #[serde(rename = "authentication.primary.password.failed")]
    AuthenticationPrimaryPasswordFailed,
    #[serde(rename = "authentication.primary.oob_otp_email.failed")]
    AuthenticationPrimaryOobOtpEmailFailed,
    #[serde(rename = "authentication.primary.oob_otp_sms.failed")]
    AuthenticationPrimaryOobOtpSmsFailed,
    #[serde(rename = "authentication.secondary.password.failed")]
    AuthenticationSecondaryPasswordFailed,
    #[serde(rename = "authentication.secondary.totp.failed")]
    AuthenticationSecondaryTotpFailed,
    #[serde(rename = "authentication.secondary.oob_otp_email.failed")]
    AuthenticationSecondaryOobOtpEmailFailed,
    #[serde(rename = "authentication.secondary.oob_otp_sms.failed")]
    AuthenticationSecondaryOobOtpSmsFailed,
    #[serde(rename = "authentication.secondary.recovery_code.failed")]
    AuthenticationSecondaryRecoveryCodeFailed,
}

impl NonblockingKind {
    /// All non-blocking tags, for exhaustive table-driven checks.
    pub const ALL: [NonblockingKind; 39] = [
        Self::UserCreated,
        Self::UserProfileUpdated,
        Self::UserAuthenticated,
        Self::UserSignedOut,
        Self::UserAnonymousPromoted,
        Self::UserDisabled,
        Self::UserReenabled,
        Self::UserDeletionScheduled,
        Self::UserDeletionUnscheduled,
        Self::UserDeleted,
        Self::UserAnonymizationScheduled,
        Self::UserAnonymizationUnscheduled,
        Self::UserAnonymized,
        Self::IdentityEmailAdded,
        Self::IdentityEmailRemoved,
        Self::IdentityEmailUpdated,
        Self::IdentityEmailVerified,
        Self::IdentityEmailUnverified,
        Self::IdentityPhoneAdded,
        Self::IdentityPhoneRemoved,
        Self::IdentityPhoneUpdated,
        Self::IdentityPhoneVerified,
        Self::IdentityPhoneUnverified,
        Self::IdentityUsernameAdded,
        Self::IdentityUsernameRemoved,
        Self::IdentityUsernameUpdated,
        Self::IdentityOauthConnected,
        Self::IdentityOauthDisconnected,
        Self::AuthenticationIdentityLoginIdFailed,
        Self::AuthenticationIdentityAnonymousFailed,
        Self::AuthenticationIdentityBiometricFailed,
        Self::AuthenticationPrimaryPasswordFailed,
        Self::AuthenticationPrimaryOobOtpEmailFailed,
        Self::AuthenticationPrimaryOobOtpSmsFailed,
        Self::AuthenticationSecondaryPasswordFailed,
        Self::AuthenticationSecondaryTotpFailed,
        Self::AuthenticationSecondaryOobOtpEmailFailed,
        Self::AuthenticationSecondaryOobOtpSmsFailed,
        Self::AuthenticationSecondaryRecoveryCodeFailed,
    ];

    /// Return the tag as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UserCreated => "user.created",
            Self::UserProfileUpdated => "user.profile.updated",
            Self::UserAuthenticated => "user.authenticated",
            Self::UserSignedOut => "user.signed_out",
            Self::UserAnonymousPromoted => "user.anonymous.promoted",
            Self::UserDisabled => "user.disabled",
            Self::UserReenabled => "user.reenabled",
            Self::UserDeletionScheduled => "user.deletion_scheduled",
            Self::UserDeletionUnscheduled => "user.deletion_unscheduled",
            Self::UserDeleted => "user.deleted",
            Self::UserAnonymizationScheduled => "user.anonymization_scheduled",
            Self::UserAnonymizationUnscheduled => "user.anonymization_unscheduled",
            Self::UserAnonymized => "user.anonymized",
            Self::IdentityEmailAdded => "identity.email.added",
            Self::IdentityEmailRemoved => "identity.email.removed",
            Self::IdentityEmailUpdated => "identity.email.updated",
            Self::IdentityEmailVerified => "identity.email.verified",
            Self::IdentityEmailUnverified => "identity.email.unverified",
            Self::IdentityPhoneAdded => "identity.phone.added",
            Self::IdentityPhoneRemoved => "identity.phone.removed",
            Self::IdentityPhoneUpdated => "identity.phone.updated",
            Self::IdentityPhoneVerified => "identity.phone.verified",
            Self::IdentityPhoneUnverified => "identity.phone.unverified",
            Self::IdentityUsernameAdded => "identity.username.added",
            Self::IdentityUsernameRemoved => "identity.username.removed",
            Self::IdentityUsernameUpdated => "identity.username.updated",
            Self::IdentityOauthConnected => "identity.oauth.connected",
            Self::IdentityOauthDisconnected => "identity.oauth.disconnected",
            Self::AuthenticationIdentityLoginIdFailed => "authentication.identity.login_id.failed",
            Self::AuthenticationIdentityAnonymousFailed => {
                "authentication.identity.anonymous.failed"
            }
            Self::AuthenticationIdentityBiometricFailed => {
                "authentication.identity.biometric.failed"
            }
            Self::AuthenticationPrimaryPasswordFailed => "authentication.primary.password.failed",
            Self::AuthenticationPrimaryOobOtpEmailFailed => {
                "authentication.primary.oob_otp_email.failed"
            }
            Self::AuthenticationPrimaryOobOtpSmsFailed => {
                "authentication.primary.oob_otp_sms.failed"
            }
            Self::AuthenticationSecondaryPasswordFailed => {
                "authentication.secondary.password.failed"
            }
            Self::AuthenticationSecondaryTotpFailed => "authentication.secondary.totp.failed",
            Self::AuthenticationSecondaryOobOtpEmailFailed => {
                "authentication.secondary.oob_otp_email.failed"
            }
            Self::AuthenticationSecondaryOobOtpSmsFailed => {
                "authentication.secondary.oob_otp_sms.failed"
            }
            Self::AuthenticationSecondaryRecoveryCodeFailed => {
                "authentication.secondary.recovery_code.failed"
            }
        }
    }
}

impl fmt::Display for NonblockingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NonblockingKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| {
                AppError::unknown_event_type(format!("Unknown non-blocking event tag: '{s}'"))
            })
    }
}

/// Any tag in the catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// A blocking tag.
    Blocking(BlockingKind),
    /// A non-blocking tag.
    Nonblocking(NonblockingKind),
}

impl EventKind {
    /// Whether the tag requires a synchronous response.
    pub fn is_blocking(&self) -> bool {
        matches!(self, Self::Blocking(_))
    }

    /// Return the tag as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Blocking(kind) => kind.as_str(),
            Self::Nonblocking(kind) => kind.as_str(),
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(kind) = s.parse::<BlockingKind>() {
            return Ok(Self::Blocking(kind));
        }
        if let Ok(kind) = s.parse::<NonblockingKind>() {
            return Ok(Self::Nonblocking(kind));
        }
        Err(AppError::unknown_event_type(format!(
            "Unknown event tag: '{s}'"
        )))
    }
}
