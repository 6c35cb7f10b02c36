//! Shared JSON fixtures for contract tests.

use serde_json::{json, Value};

/// A minimal valid user snapshot.
pub fn user_json() -> Value {
    json!({
        "id": "user_01",
        "created_at": "2025-06-23T10:30:00Z",
        "updated_at": "2025-06-23T10:30:00Z",
        "is_anonymous": false,
        "is_verified": true,
        "is_disabled": false,
        "is_deactivated": false,
        "can_reauthenticate": true,
        "standard_attributes": {"sub": "user_01", "email": "user@example.com"},
    })
}

/// A minimal valid identity snapshot.
pub fn identity_json() -> Value {
    json!({
        "id": "identity_01",
        "created_at": "2025-06-23T10:30:00Z",
        "updated_at": "2025-06-23T10:30:00Z",
        "type": "login_id",
        "claims": {"email": "user@example.com"},
    })
}

/// A minimal valid session snapshot.
pub fn session_json() -> Value {
    json!({
        "id": "session_01",
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
    })
}

/// An empty authentication context.
pub fn authentication_context_json() -> Value {
    json!({
        "user": null,
        "asserted_authentications": [],
        "asserted_identifications": [],
        "amr": [],
        "authentication_flow": null,
    })
}

/// An identification asserted by email.
pub fn identification_json() -> Value {
    json!({
        "identification": "email",
        "identity": identity_json(),
        "id_token": null,
    })
}

/// A minimal event context.
pub fn context_json() -> Value {
    json!({
        "timestamp": 1750674600,
        "triggered_by": "user",
        "preferred_languages": ["en"],
        "language": "en",
        "geo_location_code": null,
    })
}

/// Wraps a tagged body into a full envelope.
pub fn envelope_json(tag: &str, payload: Value) -> Value {
    json!({
        "id": "event_0001",
        "seq": 1,
        "context": context_json(),
        "type": tag,
        "payload": payload,
    })
}
