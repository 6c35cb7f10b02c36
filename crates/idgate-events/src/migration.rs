//! Account-migration side-channel.
//!
//! A separate request/response pair, not part of the event union: during
//! account import the platform presents a migration token and the hook
//! answers with the identities and authenticators to declare in bulk.

use serde::{Deserialize, Serialize};

use crate::entity::identity::LoginIdType;

/// Request presented to the migration hook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountMigrationRequest {
    /// Opaque token identifying the account being migrated.
    pub migration_token: String,
}

/// The hook's declaration of the migrated account's credentials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AccountMigrationResponse {
    /// Identities to create. Only `login_id` is currently supported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identities: Option<Vec<IdentityMigrateSpec>>,
    /// Authenticators to create. Only out-of-band OTP over email or SMS
    /// is currently supported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authenticators: Option<Vec<AuthenticatorMigrateSpec>>,
}

/// An identity to create during migration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum IdentityMigrateSpec {
    /// A login-ID identity.
    #[serde(rename = "login_id")]
    LoginId {
        /// The login ID to declare.
        login_id: LoginIdSpec,
    },
}

/// A login ID declared during migration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginIdSpec {
    /// The login-ID key (e.g. "email").
    pub key: String,
    /// The login-ID shape.
    #[serde(rename = "type")]
    pub kind: LoginIdType,
    /// The login-ID value.
    pub value: String,
}

/// An authenticator to create during migration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AuthenticatorMigrateSpec {
    /// Out-of-band OTP delivered over email.
    #[serde(rename = "oob_otp_email")]
    OobOtpEmail {
        /// The delivery target.
        oobotp: OobOtpEmailSpec,
    },
    /// Out-of-band OTP delivered over SMS.
    #[serde(rename = "oob_otp_sms")]
    OobOtpSms {
        /// The delivery target.
        oobotp: OobOtpSmsSpec,
    },
}

/// Email target for an out-of-band OTP authenticator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OobOtpEmailSpec {
    /// The email address to deliver codes to.
    pub email: String,
}

/// Phone target for an out-of-band OTP authenticator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OobOtpSmsSpec {
    /// The phone number to deliver codes to, in E.164 format.
    pub phone: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_migration_response_wire_shape() {
        let json = json!({
            "identities": [
                {"type": "login_id", "login_id": {"key": "email", "type": "email", "value": "user@example.com"}},
            ],
            "authenticators": [
                {"type": "oob_otp_email", "oobotp": {"email": "user@example.com"}},
                {"type": "oob_otp_sms", "oobotp": {"phone": "+85212345678"}},
            ],
        });
        let response: AccountMigrationResponse = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(response.identities.as_ref().unwrap().len(), 1);
        assert_eq!(response.authenticators.as_ref().unwrap().len(), 2);
        assert_eq!(serde_json::to_value(&response).unwrap(), json);
    }

    #[test]
    fn test_unsupported_identity_type_is_rejected() {
        let result = serde_json::from_value::<IdentityMigrateSpec>(json!({
            "type": "oauth",
            "oauth": {"provider": "example"},
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_response_omits_both_lists() {
        let value = serde_json::to_value(AccountMigrationResponse::default()).unwrap();
        assert_eq!(value, json!({}));
    }
}
