//! Non-blocking events: fire-and-forget notifications dispatched after
//! the fact. The caller ignores anything a hook returns for these.
//!
//! Delivery is at-least-once; hooks deduplicate using the envelope
//! `id`/`seq`.

use serde::{Deserialize, Serialize};

use super::kind::NonblockingKind;
use super::payload::{
    AnonymousPromotedPayload, AuthenticationFailedPayload, IdentityUpdatedPayload,
    UserIdentitiesPayload, UserIdentityPayload, UserPayload, UserSessionPayload,
};

/// A non-blocking event, tagged by `type` with a tag-specific `payload`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum NonblockingEvent {
    /// A user was created.
    #[serde(rename = "user.created")]
    UserCreated(UserIdentitiesPayload),
    /// A user's profile was updated.
    #[serde(rename = "user.profile.updated")]
    UserProfileUpdated(UserPayload),
    /// A user authenticated and a session was established.
    #[serde(rename = "user.authenticated")]
    UserAuthenticated(UserSessionPayload),
    /// A user signed out of a session.
    #[serde(rename = "user.signed_out")]
    UserSignedOut(UserSessionPayload),
    /// An anonymous user was promoted to a full user.
    #[serde(rename = "user.anonymous.promoted")]
    UserAnonymousPromoted(AnonymousPromotedPayload),
    /// A user was disabled.
    #[serde(rename = "user.disabled")]
    UserDisabled(UserPayload),
    /// A disabled user was re-enabled.
    #[serde(rename = "user.reenabled")]
    UserReenabled(UserPayload),
    /// A user's deletion was scheduled.
    #[serde(rename = "user.deletion_scheduled")]
    UserDeletionScheduled(UserPayload),
    /// A scheduled deletion was cancelled.
    #[serde(rename = "user.deletion_unscheduled")]
    UserDeletionUnscheduled(UserPayload),
    /// A user was deleted.
    #[serde(rename = "user.deleted")]
    UserDeleted(UserPayload),
    /// A user's anonymization was scheduled.
    #[serde(rename = "user.anonymization_scheduled")]
    UserAnonymizationScheduled(UserPayload),
    /// A scheduled anonymization was cancelled.
    #[serde(rename = "user.anonymization_unscheduled")]
    UserAnonymizationUnscheduled(UserPayload),
    /// A user was anonymized.
    #[serde(rename = "user.anonymized")]
    UserAnonymized(UserPayload),
    /// An email identity was added.
    #[serde(rename = "identity.email.added")]
    IdentityEmailAdded(UserIdentityPayload),
    /// An email identity was removed.
    #[serde(rename = "identity.email.removed")]
    IdentityEmailRemoved(UserIdentityPayload),
    /// An email identity was updated.
    #[serde(rename = "identity.email.updated")]
    IdentityEmailUpdated(IdentityUpdatedPayload),
    /// An email identity was verified.
    #[serde(rename = "identity.email.verified")]
    IdentityEmailVerified(UserIdentityPayload),
    /// An email identity lost its verified status.
    #[serde(rename = "identity.email.unverified")]
    IdentityEmailUnverified(UserIdentityPayload),
    /// A phone identity was added.
    #[serde(rename = "identity.phone.added")]
    IdentityPhoneAdded(UserIdentityPayload),
    /// A phone identity was removed.
    #[serde(rename = "identity.phone.removed")]
    IdentityPhoneRemoved(UserIdentityPayload),
    /// A phone identity was updated.
    #[serde(rename = "identity.phone.updated")]
    IdentityPhoneUpdated(IdentityUpdatedPayload),
    /// A phone identity was verified.
    #[serde(rename = "identity.phone.verified")]
    IdentityPhoneVerified(UserIdentityPayload),
    /// A phone identity lost its verified status.
    #[serde(rename = "identity.phone.unverified")]
    IdentityPhoneUnverified(UserIdentityPayload),
    /// A username identity was added.
    #[serde(rename = "identity.username.added")]
    IdentityUsernameAdded(UserIdentityPayload),
    /// A username identity was removed.
    #[serde(rename = "identity.username.removed")]
    IdentityUsernameRemoved(UserIdentityPayload),
    /// A username identity was updated.
    #[serde(rename = "identity.username.updated")]
    IdentityUsernameUpdated(IdentityUpdatedPayload),
    /// An OAuth provider account was connected.
    #[serde(rename = "identity.oauth.connected")]
    IdentityOauthConnected(UserIdentityPayload),
    /// An OAuth provider account was disconnected.
    #[serde(rename = "identity.oauth.disconnected")]
    IdentityOauthDisconnected(UserIdentityPayload),
    /// Identification by login ID failed.
    #[serde(rename = "authentication.identity.login_id.failed")]
    AuthenticationIdentityLoginIdFailed(AuthenticationFailedPayload),
    /// Identification of an anonymous user failed.
    #[serde(rename = "authentication.identity.anonymous.failed")]
    AuthenticationIdentityAnonymousFailed(AuthenticationFailedPayload),
    /// Biometric identification failed.
    #[serde(rename = "authentication.identity.biometric.failed")]
    AuthenticationIdentityBiometricFailed(AuthenticationFailedPayload),
    /// Primary password verification failed.
    #[serde(rename = "authentication.primary.password.failed")]
    AuthenticationPrimaryPasswordFailed(AuthenticationFailedPayload),
    /// Primary email OTP verification failed.
    #[serde(rename = "authentication.primary.oob_otp_email.failed")]
    AuthenticationPrimaryOobOtpEmailFailed(AuthenticationFailedPayload),
    /// Primary SMS OTP verification failed.
    #[serde(rename = "authentication.primary.oob_otp_sms.failed")]
    AuthenticationPrimaryOobOtpSmsFailed(AuthenticationFailedPayload),
    /// Secondary password verification failed.
    #[serde(rename = "authentication.secondary.password.failed")]
    AuthenticationSecondaryPasswordFailed(AuthenticationFailedPayload),
    /// Secondary TOTP verification failed.
    #[serde(rename = "authentication.secondary.totp.failed")]
    AuthenticationSecondaryTotpFailed(AuthenticationFailedPayload),
    /// Secondary email OTP verification failed.
    #[serde(rename = "authentication.secondary.oob_otp_email.failed")]
    AuthenticationSecondaryOobOtpEmailFailed(AuthenticationFailedPayload),
    /// Secondary SMS OTP verification failed.
    #[serde(rename = "authentication.secondary.oob_otp_sms.failed")]
    AuthenticationSecondaryOobOtpSmsFailed(AuthenticationFailedPayload),
    /// Recovery code verification failed.
    #[serde(rename = "authentication.secondary.recovery_code.failed")]
    AuthenticationSecondaryRecoveryCodeFailed(AuthenticationFailedPayload),
}

impl NonblockingEvent {
    /// The tag of this event.
    pub fn kind(&self) -> NonblockingKind {
        match self {
            Self::UserCreated(_) => NonblockingKind::UserCreated,
            Self::UserProfileUpdated(_) => NonblockingKind::UserProfileUpdated,
            Self::UserAuthenticated(_) => NonblockingKind::UserAuthenticated,
            Self::UserSignedOut(_) => NonblockingKind::UserSignedOut,
            Self::UserAnonymousPromoted(_) => NonblockingKind::UserAnonymousPromoted,
            Self::UserDisabled(_) => NonblockingKind::UserDisabled,
            Self::UserReenabled(_) => NonblockingKind::UserReenabled,
            Self::UserDeletionScheduled(_) => NonblockingKind::UserDeletionScheduled,
            Self::UserDeletionUnscheduled(_) => NonblockingKind::UserDeletionUnscheduled,
            Self::UserDeleted(_) => NonblockingKind::UserDeleted,
            Self::UserAnonymizationScheduled(_) => NonblockingKind::UserAnonymizationScheduled,
            Self::UserAnonymizationUnscheduled(_) => NonblockingKind::UserAnonymizationUnscheduled,
            Self::UserAnonymized(_) => NonblockingKind::UserAnonymized,
            Self::IdentityEmailAdded(_) => NonblockingKind::IdentityEmailAdded,
            Self::IdentityEmailRemoved(_) => NonblockingKind::IdentityEmailRemoved,
            Self::IdentityEmailUpdated(_) => NonblockingKind::IdentityEmailUpdated,
            Self::IdentityEmailVerified(_) => NonblockingKind::IdentityEmailVerified,
            Self::IdentityEmailUnverified(_) => NonblockingKind::IdentityEmailUnverified,
            Self::IdentityPhoneAdded(_) => NonblockingKind::IdentityPhoneAdded,
            Self::IdentityPhoneRemoved(_) => NonblockingKind::IdentityPhoneRemoved,
            Self::IdentityPhoneUpdated(_) => NonblockingKind::IdentityPhoneUpdated,
            Self::IdentityPhoneVerified(_) => NonblockingKind::IdentityPhoneVerified,
            Self::IdentityPhoneUnverified(_) => NonblockingKind::IdentityPhoneUnverified,
            Self::IdentityUsernameAdded(_) => NonblockingKind::IdentityUsernameAdded,
            Self::IdentityUsernameRemoved(_) => NonblockingKind::IdentityUsernameRemoved,
            Self::IdentityUsernameUpdated(_) => NonblockingKind::IdentityUsernameUpdated,
            Self::IdentityOauthConnected(_) => NonblockingKind::IdentityOauthConnected,
            Self::IdentityOauthDisconnected(_) => NonblockingKind::IdentityOauthDisconnected,
            Self::AuthenticationIdentityLoginIdFailed(_) => {
                NonblockingKind::AuthenticationIdentityLoginIdFailed
            }
            Self::AuthenticationIdentityAnonymousFailed(_) => {
                NonblockingKind::AuthenticationIdentityAnonymousFailed
            }
            Self::AuthenticationIdentityBiometricFailed(_) => {
                NonblockingKind::AuthenticationIdentityBiometricFailed
            }
            Self::AuthenticationPrimaryPasswordFailed(_) => {
                NonblockingKind::AuthenticationPrimaryPasswordFailed
            }
            Self::AuthenticationPrimaryOobOtpEmailFailed(_) => {
                NonblockingKind::AuthenticationPrimaryOobOtpEmailFailed
            }
            Self::AuthenticationPrimaryOobOtpSmsFailed(_) => {
                NonblockingKind::AuthenticationPrimaryOobOtpSmsFailed
            }
            Self::AuthenticationSecondaryPasswordFailed(_) => {
                NonblockingKind::AuthenticationSecondaryPasswordFailed
            }
            Self::AuthenticationSecondaryTotpFailed(_) => {
                NonblockingKind::AuthenticationSecondaryTotpFailed
            }
            Self::AuthenticationSecondaryOobOtpEmailFailed(_) => {
                NonblockingKind::AuthenticationSecondaryOobOtpEmailFailed
            }
            Self::AuthenticationSecondaryOobOtpSmsFailed(_) => {
                NonblockingKind::AuthenticationSecondaryOobOtpSmsFailed
            }
            Self::AuthenticationSecondaryRecoveryCodeFailed(_) => {
                NonblockingKind::AuthenticationSecondaryRecoveryCodeFailed
            }
        }
    }
}
