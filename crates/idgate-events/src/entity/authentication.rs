//! Authentication flow context handed to authentication-stage hooks.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::authenticator::Authenticator;
use super::identity::Identity;
use super::user::User;
use crate::amr::Amr;

/// The flow a user is going through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticationFlow {
    /// The flow kind.
    #[serde(rename = "type")]
    pub kind: AuthenticationFlowType,
    /// The configured flow name.
    pub name: String,
}

/// Kinds of authentication flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthenticationFlowType {
    /// Account creation.
    Signup,
    /// Promotion of an anonymous user.
    Promote,
    /// Login with an existing account.
    Login,
    /// Combined signup-or-login.
    SignupLogin,
    /// Reauthentication of the current user.
    Reauth,
    /// Account recovery.
    AccountRecovery,
}

impl AuthenticationFlowType {
    /// Return the flow kind as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Signup => "signup",
            Self::Promote => "promote",
            Self::Login => "login",
            Self::SignupLogin => "signup_login",
            Self::Reauth => "reauth",
            Self::AccountRecovery => "account_recovery",
        }
    }
}

impl fmt::Display for AuthenticationFlowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An authentication step already asserted in the current flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Authentication {
    /// The method that was satisfied.
    pub authentication: AuthenticationMethod,
    /// The authenticator that satisfied it. `null` for recovery codes and
    /// device tokens, which are not backed by an authenticator entity.
    pub authenticator: Option<Authenticator>,
}

/// Methods an authentication step can assert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthenticationMethod {
    PrimaryPassword,
    PrimaryPasskey,
    PrimaryOobOtpEmail,
    PrimaryOobOtpSms,
    SecondaryPassword,
    SecondaryTotp,
    SecondaryOobOtpEmail,
    SecondaryOobOtpSms,
    RecoveryCode,
    DeviceToken,
}

impl AuthenticationMethod {
    /// Return the method as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PrimaryPassword => "primary_password",
            Self::PrimaryPasskey => "primary_passkey",
            Self::PrimaryOobOtpEmail => "primary_oob_otp_email",
            Self::PrimaryOobOtpSms => "primary_oob_otp_sms",
            Self::SecondaryPassword => "secondary_password",
            Self::SecondaryTotp => "secondary_totp",
            Self::SecondaryOobOtpEmail => "secondary_oob_otp_email",
            Self::SecondaryOobOtpSms => "secondary_oob_otp_sms",
            Self::RecoveryCode => "recovery_code",
            Self::DeviceToken => "device_token",
        }
    }
}

impl fmt::Display for AuthenticationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An identification step already asserted in the current flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identification {
    /// How the user was identified.
    pub identification: IdentificationMethod,
    /// The matched identity. `null` when identification was by ID token.
    pub identity: Option<Identity>,
    /// The presented ID token. Non-null only for `id_token`.
    pub id_token: Option<String>,
}

/// Ways a user can be identified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentificationMethod {
    Email,
    Phone,
    Username,
    Oauth,
    Passkey,
    IdToken,
    Ldap,
}

impl IdentificationMethod {
    /// Return the method as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Username => "username",
            Self::Oauth => "oauth",
            Self::Passkey => "passkey",
            Self::IdToken => "id_token",
            Self::Ldap => "ldap",
        }
    }
}

impl fmt::Display for IdentificationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Everything the platform knows about the in-flight authentication at
/// the moment an authentication-stage event fires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticationContext {
    /// The user, once known. `null` before identification resolves one.
    pub user: Option<User>,
    /// Authentication steps asserted so far.
    pub asserted_authentications: Vec<Authentication>,
    /// Identification steps asserted so far.
    pub asserted_identifications: Vec<Identification>,
    /// Method references satisfied so far.
    pub amr: Vec<Amr>,
    /// The flow in progress. `null` when the event was not triggered from
    /// an authentication flow.
    pub authentication_flow: Option<AuthenticationFlow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_context_round_trip() {
        let json = serde_json::json!({
            "user": null,
            "asserted_authentications": [],
            "asserted_identifications": [],
            "amr": [],
            "authentication_flow": null,
        });
        let ctx: AuthenticationContext = serde_json::from_value(json.clone()).unwrap();
        assert!(ctx.user.is_none());
        assert_eq!(serde_json::to_value(&ctx).unwrap(), json);
    }

    #[test]
    fn test_identification_nullable_fields_always_present() {
        let identification = Identification {
            identification: IdentificationMethod::IdToken,
            identity: None,
            id_token: Some("eyJ...".to_string()),
        };
        let value = serde_json::to_value(&identification).unwrap();
        assert!(value["identity"].is_null());
        assert_eq!(value["id_token"], "eyJ...");
    }
}
