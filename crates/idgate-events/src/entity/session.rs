//! Session entity snapshot.
//!
//! Session fields use the platform's historical camelCase wire names;
//! they are renamed explicitly rather than re-cased.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A user session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque unique session identifier.
    pub id: String,
    /// When the session was created (RFC3339).
    pub created_at: DateTime<Utc>,
    /// When the session was last updated (RFC3339).
    pub updated_at: DateTime<Utc>,
    /// The session kind.
    #[serde(rename = "type")]
    pub kind: SessionType,
    /// AMR values asserted when the session was established.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amr: Option<Vec<String>>,
    /// When the session was last accessed (RFC3339).
    #[serde(rename = "lastAccessedAt")]
    pub last_accessed_at: DateTime<Utc>,
    /// IP address that created the session.
    #[serde(rename = "createdByIP")]
    pub created_by_ip: String,
    /// IP address that last accessed the session.
    #[serde(rename = "lastAccessedByIP")]
    pub last_accessed_by_ip: String,
    /// ISO 3166-1 alpha-2 code of the last-access location.
    #[serde(rename = "lastAccessedByIPCountryCode")]
    pub last_accessed_by_ip_country_code: String,
    /// English country name of the last-access location.
    #[serde(rename = "lastAccessedByIPEnglishCountryName")]
    pub last_accessed_by_ip_english_country_name: String,
    /// Human-readable device/browser description.
    #[serde(rename = "displayName")]
    pub display_name: String,
    /// Name of the application the session belongs to.
    #[serde(rename = "applicationName")]
    pub application_name: String,
}

/// Kinds of session the platform issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionType {
    /// An IdP (web) session.
    Idp,
    /// An OAuth offline grant (refresh-token backed) session.
    OfflineGrant,
}

impl SessionType {
    /// Return the session kind as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idp => "idp",
            Self::OfflineGrant => "offline_grant",
        }
    }
}

impl fmt::Display for SessionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_wire_names() {
        let session: Session = serde_json::from_value(serde_json::json!({
            "id": "session_1",
            "created_at": "2025-06-23T10:30:00Z",
            "updated_at": "2025-06-23T10:30:00Z",
            "type": "idp",
            "lastAccessedAt": "2025-06-23T10:31:00Z",
            "createdByIP": "203.0.113.7",
            "lastAccessedByIP": "203.0.113.7",
            "lastAccessedByIPCountryCode": "US",
            "lastAccessedByIPEnglishCountryName": "United States",
            "displayName": "Firefox on macOS",
            "applicationName": "Example App",
        }))
        .unwrap();
        assert_eq!(session.kind, SessionType::Idp);

        let value = serde_json::to_value(&session).unwrap();
        assert!(value.get("lastAccessedByIPEnglishCountryName").is_some());
        assert!(value.get("last_accessed_at").is_none());
    }
}
