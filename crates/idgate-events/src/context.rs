//! Common context metadata carried by every event envelope.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use idgate_core::AppError;

/// Metadata describing the request that generated an event.
///
/// Absence of an optional field means "not applicable to this trigger",
/// never "unknown".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HookEventContext {
    /// Unix timestamp of when the event was generated.
    pub timestamp: i64,
    /// The ID of the user associated with the event. It may be absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Who triggered the event.
    pub triggered_by: TriggeredBy,
    /// The user preferred languages as seen by the platform.
    pub preferred_languages: Vec<String>,
    /// The language negotiated by the platform.
    pub language: String,
    /// The client ID associated with the event. It may be absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    /// The IP address of the request that generated the event. It may be
    /// absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    /// The ISO 3166-1 alpha-2 code of the location derived from the IP
    /// address. `null` if the location cannot be determined.
    pub geo_location_code: Option<String>,
    /// The HTTP User-Agent header of the request that generated the
    /// event. It may be absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    /// OAuth parameters of the authorization request, if the event was
    /// triggered inside an OAuth flow.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oauth: Option<OAuthContext>,
}

/// The kind of actor that triggered an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggeredBy {
    /// The end user themself.
    User,
    /// A call through the Admin API.
    AdminApi,
    /// The platform itself (e.g. a scheduled job).
    System,
    /// An operator acting through the portal.
    Portal,
}

impl TriggeredBy {
    /// Return the actor kind as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::AdminApi => "admin_api",
            Self::System => "system",
            Self::Portal => "portal",
        }
    }
}

impl fmt::Display for TriggeredBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TriggeredBy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Self::User),
            "admin_api" => Ok(Self::AdminApi),
            "system" => Ok(Self::System),
            "portal" => Ok(Self::Portal),
            _ => Err(AppError::validation(format!(
                "Invalid actor kind: '{s}'. Expected one of: user, admin_api, system, portal"
            ))),
        }
    }
}

/// OAuth parameters propagated from the authorization request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OAuthContext {
    /// The "state" parameter from the authentication request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}
