//! Contract tests for the event catalogue: every tag decodes with its
//! documented payload shape and nothing else.

mod common;

use serde_json::{json, Value};

use idgate_events::event::{BlockingKind, HookEvent, NonblockingKind};

use common::{
    authentication_context_json, envelope_json, identification_json, identity_json, session_json,
    user_json,
};

fn blocking_payload_json(kind: BlockingKind) -> Value {
    match kind {
        BlockingKind::UserPreCreate => json!({
            "user": user_json(),
            "identities": [identity_json()],
        }),
        BlockingKind::UserProfilePreUpdate
        | BlockingKind::UserPreScheduleDeletion
        | BlockingKind::UserPreScheduleAnonymization => json!({"user": user_json()}),
        BlockingKind::OidcJwtPreCreate | BlockingKind::OidcIdTokenPreCreate => json!({
            "user": user_json(),
            "identities": [identity_json()],
            "jwt": {"payload": {"sub": "user_01"}},
        }),
        BlockingKind::AuthenticationPreInitialize
        | BlockingKind::AuthenticationPreAuthenticated => json!({
            "authentication_context": authentication_context_json(),
        }),
        BlockingKind::AuthenticationPostIdentified => json!({
            "authentication_context": authentication_context_json(),
            "identification": identification_json(),
        }),
    }
}

fn nonblocking_payload_json(kind: NonblockingKind) -> Value {
    use NonblockingKind::*;
    match kind {
        UserCreated => json!({"user": user_json(), "identities": [identity_json()]}),
        UserAuthenticated | UserSignedOut => {
            json!({"user": user_json(), "session": session_json()})
        }
        UserAnonymousPromoted => json!({
            "anonymous_user": user_json(),
            "user": user_json(),
            "identities": [identity_json()],
        }),
        UserProfileUpdated | UserDisabled | UserReenabled | UserDeletionScheduled
        | UserDeletionUnscheduled | UserDeleted | UserAnonymizationScheduled
        | UserAnonymizationUnscheduled | UserAnonymized => json!({"user": user_json()}),
        IdentityEmailUpdated | IdentityPhoneUpdated | IdentityUsernameUpdated => json!({
            "user": user_json(),
            "old_identity": identity_json(),
            "new_identity": identity_json(),
        }),
        IdentityEmailAdded | IdentityEmailRemoved | IdentityEmailVerified
        | IdentityEmailUnverified | IdentityPhoneAdded | IdentityPhoneRemoved
        | IdentityPhoneVerified | IdentityPhoneUnverified | IdentityUsernameAdded
        | IdentityUsernameRemoved | IdentityOauthConnected | IdentityOauthDisconnected => {
            json!({"user": user_json(), "identity": identity_json()})
        }
        AuthenticationIdentityLoginIdFailed
        | AuthenticationIdentityAnonymousFailed
        | AuthenticationIdentityBiometricFailed
        | AuthenticationPrimaryPasswordFailed
        | AuthenticationPrimaryOobOtpEmailFailed
        | AuthenticationPrimaryOobOtpSmsFailed
        | AuthenticationSecondaryPasswordFailed
        | AuthenticationSecondaryTotpFailed
        | AuthenticationSecondaryOobOtpEmailFailed
        | AuthenticationSecondaryOobOtpSmsFailed
        | AuthenticationSecondaryRecoveryCodeFailed => json!({"user": user_json()}),
    }
}

#[test]
fn test_every_blocking_tag_decodes_with_its_payload() {
    for kind in BlockingKind::ALL {
        let raw = envelope_json(kind.as_str(), blocking_payload_json(kind));
        let event: HookEvent = serde_json::from_value(raw).unwrap();
        assert!(event.is_blocking(), "{kind} should be blocking");
        assert_eq!(event.kind().as_str(), kind.as_str());
        assert_eq!(event.seq, 1);
        assert_eq!(event.context.language, "en");
    }
}

#[test]
fn test_every_nonblocking_tag_decodes_with_its_payload() {
    for kind in NonblockingKind::ALL {
        let raw = envelope_json(kind.as_str(), nonblocking_payload_json(kind));
        let event: HookEvent = serde_json::from_value(raw).unwrap();
        assert!(!event.is_blocking(), "{kind} should be non-blocking");
        assert_eq!(event.kind().as_str(), kind.as_str());
    }
}

#[test]
fn test_envelope_round_trips() {
    for kind in BlockingKind::ALL {
        let raw = envelope_json(kind.as_str(), blocking_payload_json(kind));
        let event: HookEvent = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(serde_json::to_value(&event).unwrap(), raw);
    }
    // Session keys are camelCase on the wire; make sure they survive.
    let raw = envelope_json(
        NonblockingKind::UserAuthenticated.as_str(),
        nonblocking_payload_json(NonblockingKind::UserAuthenticated),
    );
    let event: HookEvent = serde_json::from_value(raw.clone()).unwrap();
    let round_tripped = serde_json::to_value(&event).unwrap();
    assert_eq!(round_tripped, raw);
    assert!(round_tripped["payload"]["session"]
        .as_object()
        .unwrap()
        .contains_key("lastAccessedAt"));
}

#[test]
fn test_unknown_tag_is_rejected() {
    let raw = envelope_json("user.pre_explode", json!({"user": user_json()}));
    assert!(serde_json::from_value::<HookEvent>(raw).is_err());
}

#[test]
fn test_missing_required_payload_field_is_rejected() {
    // user.pre_create requires identities alongside the user.
    let raw = envelope_json("user.pre_create", json!({"user": user_json()}));
    assert!(serde_json::from_value::<HookEvent>(raw).is_err());

    // oidc.jwt.pre_create requires the jwt under construction.
    let raw = envelope_json(
        "oidc.jwt.pre_create",
        json!({"user": user_json(), "identities": []}),
    );
    assert!(serde_json::from_value::<HookEvent>(raw).is_err());
}

#[test]
fn test_failed_authentication_payload_user_is_optional() {
    let raw = envelope_json("authentication.primary.password.failed", json!({}));
    let event: HookEvent = serde_json::from_value(raw.clone()).unwrap();
    assert_eq!(
        event.kind().as_str(),
        "authentication.primary.password.failed"
    );
    assert_eq!(serde_json::to_value(&event).unwrap(), raw);
}
