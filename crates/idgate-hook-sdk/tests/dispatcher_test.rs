//! End-to-end dispatch tests: raw request body in, serialized decision
//! out, with the fail-safe rules applied to malformed input.

use serde_json::{json, Value};

use idgate_hook_sdk::prelude::*;

fn envelope(tag: &str, payload: Value) -> String {
    json!({
        "id": "event_0001",
        "seq": 42,
        "context": {
            "timestamp": 1750674600,
            "triggered_by": "user",
            "preferred_languages": ["en"],
            "language": "en",
            "geo_location_code": null,
        },
        "type": tag,
        "payload": payload,
    })
    .to_string()
}

fn user_payload() -> Value {
    json!({
        "user": {
            "id": "user_01",
            "created_at": "2025-06-23T10:30:00Z",
            "updated_at": "2025-06-23T10:30:00Z",
            "is_anonymous": false,
            "is_verified": true,
            "is_disabled": false,
            "is_deactivated": false,
            "can_reauthenticate": true,
        },
        "identities": [],
    })
}

/// Provisions new users into a default group and stamps their email.
struct ProvisioningHook;

#[async_trait]
impl BlockingHook for ProvisioningHook {
    async fn on_user_pre_create(
        &self,
        _event: &HookEvent,
        _payload: &UserIdentitiesPayload,
    ) -> AppResult<UserPreCreateResponse> {
        Ok(HookResponse::allow(
            UserMutationAllow::new().with_mutations(UserMutations {
                standard_attributes: Some(StandardAttributes {
                    email: Some("test@example.com".to_string()),
                    ..StandardAttributes::default()
                }),
                groups: Some(vec!["users".to_string()]),
                ..UserMutations::default()
            }),
        ))
    }

    async fn on_user_pre_schedule_deletion(
        &self,
        _event: &HookEvent,
        _payload: &UserPayload,
    ) -> AppResult<UserPreScheduleDeletionResponse> {
        Ok(HookResponse::Disallowed(
            DisallowResponse::new().with_reason("retention policy"),
        ))
    }
}

#[tokio::test]
async fn test_blocking_event_returns_the_hook_decision() {
    let raw = envelope("user.pre_create", user_payload());
    let response = dispatch_raw(&ProvisioningHook, &raw).await.unwrap().unwrap();
    assert_eq!(
        response,
        json!({
            "is_allowed": true,
            "mutations": {
                "user": {
                    "standard_attributes": {"email": "test@example.com"},
                    "groups": ["users"],
                },
            },
        })
    );
}

#[tokio::test]
async fn test_blocking_event_can_be_denied() {
    let raw = envelope("user.pre_schedule_deletion", json!({"user": user_payload()["user"]}));
    let response = dispatch_raw(&ProvisioningHook, &raw).await.unwrap().unwrap();
    assert_eq!(
        response,
        json!({"is_allowed": false, "reason": "retention policy"})
    );
}

#[tokio::test]
async fn test_unhandled_blocking_event_defaults_to_plain_allow() {
    let raw = envelope("user.profile.pre_update", json!({"user": user_payload()["user"]}));
    let response = dispatch_raw(&ProvisioningHook, &raw).await.unwrap().unwrap();
    assert_eq!(response, json!({"is_allowed": true}));
}

#[tokio::test]
async fn test_nonblocking_event_yields_no_response() {
    let raw = envelope("user.created", user_payload());
    let response = dispatch_raw(&ProvisioningHook, &raw).await.unwrap();
    assert_eq!(response, None);
}

#[tokio::test]
async fn test_unknown_tag_fails_safe_with_disallow() {
    let raw = envelope("user.pre_explode", json!({"user": user_payload()["user"]}));
    let response = dispatch_raw(&ProvisioningHook, &raw).await.unwrap().unwrap();
    assert_eq!(response, json!({"is_allowed": false}));
}

#[tokio::test]
async fn test_malformed_blocking_payload_fails_safe_with_disallow() {
    // user.pre_create without identities does not decode.
    let raw = envelope("user.pre_create", json!({"user": user_payload()["user"]}));
    let response = dispatch_raw(&ProvisioningHook, &raw).await.unwrap().unwrap();
    assert_eq!(response, json!({"is_allowed": false}));
}

#[tokio::test]
async fn test_malformed_nonblocking_payload_is_dropped() {
    // user.created without identities does not decode; a notification is
    // dropped instead of answered.
    let raw = envelope("user.created", json!({"user": user_payload()["user"]}));
    let response = dispatch_raw(&ProvisioningHook, &raw).await.unwrap();
    assert_eq!(response, None);
}
