//! Authenticator entity snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An authenticator enrolled by a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Authenticator {
    /// Opaque unique authenticator identifier.
    pub id: String,
    /// When the authenticator was created (RFC3339).
    pub created_at: DateTime<Utc>,
    /// When the authenticator was last updated (RFC3339).
    pub updated_at: DateTime<Utc>,
    /// The owning user's ID.
    pub user_id: String,
    /// The authenticator kind.
    #[serde(rename = "type")]
    pub kind: AuthenticatorType,
    /// Whether this is the user's default authenticator of its kind.
    pub is_default: bool,
    /// Whether the authenticator is a primary or secondary factor.
    #[serde(rename = "kind")]
    pub factor: AuthenticatorKind,
}

/// Kinds of authenticator the platform supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthenticatorType {
    /// A memorized password.
    Password,
    /// A passkey.
    Passkey,
    /// A time-based OTP authenticator.
    Totp,
    /// Out-of-band OTP delivered over email.
    OobOtpEmail,
    /// Out-of-band OTP delivered over SMS.
    OobOtpSms,
}

impl AuthenticatorType {
    /// Return the authenticator kind as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Password => "password",
            Self::Passkey => "passkey",
            Self::Totp => "totp",
            Self::OobOtpEmail => "oob_otp_email",
            Self::OobOtpSms => "oob_otp_sms",
        }
    }
}

impl fmt::Display for AuthenticatorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether an authenticator acts as a first or second factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthenticatorKind {
    /// First-factor authenticator.
    Primary,
    /// Second-factor authenticator.
    Secondary,
}

impl AuthenticatorKind {
    /// Return the factor kind as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
        }
    }
}

impl fmt::Display for AuthenticatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
