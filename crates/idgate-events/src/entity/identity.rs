//! Identity entity snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

use idgate_core::AppError;

/// An identity attached to a user (a way the user can be identified).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    /// Opaque unique identity identifier.
    pub id: String,
    /// When the identity was created (RFC3339).
    pub created_at: DateTime<Utc>,
    /// When the identity was last updated (RFC3339).
    pub updated_at: DateTime<Utc>,
    /// The identity kind.
    #[serde(rename = "type")]
    pub kind: IdentityType,
    /// Claims carried by the identity (e.g. `email`, `oauth` profile).
    pub claims: Map<String, Value>,
}

/// Kinds of identity the platform supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentityType {
    /// A login ID (email, phone number, or username).
    LoginId,
    /// A connected OAuth provider account.
    Oauth,
    /// An anonymous identity.
    Anonymous,
    /// A biometric enrollment.
    Biometric,
    /// A passkey.
    Passkey,
    /// Sign-in with Ethereum.
    Siwe,
}

impl IdentityType {
    /// Return the identity kind as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LoginId => "login_id",
            Self::Oauth => "oauth",
            Self::Anonymous => "anonymous",
            Self::Biometric => "biometric",
            Self::Passkey => "passkey",
            Self::Siwe => "siwe",
        }
    }
}

impl fmt::Display for IdentityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The shape of a login ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoginIdType {
    /// An email address.
    Email,
    /// A phone number in E.164 format.
    Phone,
    /// A username.
    Username,
}

impl LoginIdType {
    /// Return the login ID kind as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Username => "username",
        }
    }
}

impl fmt::Display for LoginIdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LoginIdType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "email" => Ok(Self::Email),
            "phone" => Ok(Self::Phone),
            "username" => Ok(Self::Username),
            _ => Err(AppError::validation(format!(
                "Invalid login ID type: '{s}'. Expected one of: email, phone, username"
            ))),
        }
    }
}
