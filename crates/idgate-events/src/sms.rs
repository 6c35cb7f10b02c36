//! Custom SMS gateway contract.
//!
//! Deployments can route SMS delivery through their own gateway webhook.
//! The result code decides retry behavior: invalid numbers and rejected
//! deliveries are terminal, rate limits are retryable, authentication
//! failures need an operator to fix the gateway configuration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The message the platform asks the gateway to deliver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomSmsGatewayPayload {
    /// Recipient phone number, in E.164 format.
    pub to: String,
    /// Message body.
    pub body: String,
}

/// The gateway's delivery result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomSmsGatewayResponse {
    /// The result code.
    pub code: SmsGatewayResultCode,
    /// Provider-specific error code surfaced on the portal to assist
    /// debugging (e.g. the code returned by Twilio).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_error_code: Option<String>,
}

/// Closed result-code enumeration for SMS delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SmsGatewayResultCode {
    /// The SMS was delivered successfully.
    Ok,
    /// The phone number is invalid.
    InvalidPhoneNumber,
    /// A rate limit was reached; the user should retry.
    RateLimited,
    /// Gateway authentication failed; the operator should check the
    /// current configuration.
    AuthenticationFailed,
    /// The delivery service rejected the request for a reason retrying
    /// cannot fix.
    DeliveryRejected,
}

impl SmsGatewayResultCode {
    /// Return the code as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::InvalidPhoneNumber => "invalid_phone_number",
            Self::RateLimited => "rate_limited",
            Self::AuthenticationFailed => "authentication_failed",
            Self::DeliveryRejected => "delivery_rejected",
        }
    }

    /// Whether the caller may retry the delivery.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimited)
    }

    /// Whether the failure is permanent for this message.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::InvalidPhoneNumber | Self::DeliveryRejected)
    }

    /// Whether an operator has to intervene before delivery can work.
    pub fn needs_operator_attention(&self) -> bool {
        matches!(self, Self::AuthenticationFailed)
    }
}

impl fmt::Display for SmsGatewayResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
