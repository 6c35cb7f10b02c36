//! Contract tests for the response algebra: each blocking tag accepts
//! exactly its permitted allow fields, and disallow is uniform.

use serde_json::{json, Value};

use idgate_events::event::BlockingKind;
use idgate_events::response::{
    AuthenticationGateAllow, AuthenticationPostIdentifiedResponse,
    AuthenticationPreAuthenticatedResponse, AuthenticationPreInitializeResponse,
    BotProtectionRequirements, Constraints, DisallowResponse, HookResponse, JwtMutationAllow,
    JwtMutations, OidcIdTokenPreCreateResponse, OidcJwtPreCreateResponse, RateLimitName,
    RateLimitWeight, RateLimits,
    StandardAttributes, UserMutationAllow, UserMutations, UserPreCreateResponse,
};
use idgate_events::validate::{validate_response, Decision, ResponseField};
use idgate_events::AmrConstraint;

/// A well-formed sample value for each optional allow field.
fn sample_field_value(kind: BlockingKind, field: ResponseField) -> Value {
    match field {
        ResponseField::Mutations => match kind {
            BlockingKind::OidcJwtPreCreate => json!({"jwt": {"payload": {"https://example.com/claim": 1}}}),
            BlockingKind::OidcIdTokenPreCreate => json!({"id_token": {"payload": {"https://example.com/claim": 1}}}),
            _ => json!({"user": {"groups": ["users"]}}),
        },
        ResponseField::BotProtection => json!({"mode": "always"}),
        ResponseField::Constraints => json!({"amr": ["mfa"]}),
        ResponseField::RateLimits => json!({"authentication.general": {"weight": 1}}),
    }
}

const ALL_FIELDS: [ResponseField; 4] = [
    ResponseField::Mutations,
    ResponseField::BotProtection,
    ResponseField::Constraints,
    ResponseField::RateLimits,
];

#[test]
fn test_permitted_fields_are_accepted_per_tag() {
    for kind in BlockingKind::ALL {
        let mut response = json!({"is_allowed": true});
        for field in kind.permitted_fields() {
            response[field.as_str()] = sample_field_value(kind, *field);
        }
        assert_eq!(
            validate_response(kind, &response).unwrap(),
            Decision::Allowed,
            "full legal allow for {kind} should pass"
        );
    }
}

#[test]
fn test_fields_outside_the_whitelist_are_rejected_per_tag() {
    for kind in BlockingKind::ALL {
        for field in ALL_FIELDS {
            if kind.permitted_fields().contains(&field) {
                continue;
            }
            let mut response = json!({"is_allowed": true});
            response[field.as_str()] = sample_field_value(kind, field);
            let err = validate_response(kind, &response).unwrap_err();
            assert_eq!(
                err.kind,
                idgate_core::ErrorKind::SchemaViolation,
                "{field} must be rejected for {kind}"
            );
        }
    }
}

#[test]
fn test_disallow_decodes_identically_under_every_alias() {
    let disallow = json!({"is_allowed": false, "reason": "policy", "title": "Denied"});
    let expected = DisallowResponse::new()
        .with_reason("policy")
        .with_title("Denied");

    let response: UserPreCreateResponse = serde_json::from_value(disallow.clone()).unwrap();
    assert_eq!(response, HookResponse::Disallowed(expected.clone()));

    let response: OidcJwtPreCreateResponse = serde_json::from_value(disallow.clone()).unwrap();
    assert_eq!(response, HookResponse::Disallowed(expected.clone()));

    let response: OidcIdTokenPreCreateResponse = serde_json::from_value(disallow.clone()).unwrap();
    assert_eq!(response, HookResponse::Disallowed(expected.clone()));

    let response: AuthenticationPreInitializeResponse =
        serde_json::from_value(disallow.clone()).unwrap();
    assert_eq!(response, HookResponse::Disallowed(expected.clone()));

    let response: AuthenticationPreAuthenticatedResponse =
        serde_json::from_value(disallow.clone()).unwrap();
    assert_eq!(response, HookResponse::Disallowed(expected.clone()));

    assert_eq!(serde_json::to_value(&response).unwrap(), disallow);
}

#[test]
fn test_user_mutation_allow_round_trips() {
    let response = HookResponse::allow(UserMutationAllow::new().with_mutations(UserMutations {
        standard_attributes: Some(StandardAttributes {
            email: Some("test@example.com".to_string()),
            ..StandardAttributes::default()
        }),
        groups: Some(vec!["users".to_string()]),
        ..UserMutations::default()
    }));
    let expected = json!({
        "is_allowed": true,
        "mutations": {
            "user": {
                "standard_attributes": {"email": "test@example.com"},
                "groups": ["users"],
            },
        },
    });
    assert_eq!(serde_json::to_value(&response).unwrap(), expected);
    let decoded: UserPreCreateResponse = serde_json::from_value(expected).unwrap();
    assert_eq!(decoded, response);
}

#[test]
fn test_jwt_mutation_allow_round_trips() {
    let mut payload = serde_json::Map::new();
    payload.insert("https://example.com/tier".to_string(), json!("gold"));
    let response =
        HookResponse::allow(JwtMutationAllow::new().with_mutations(JwtMutations { payload }));
    let expected = json!({
        "is_allowed": true,
        "mutations": {"jwt": {"payload": {"https://example.com/tier": "gold"}}},
    });
    assert_eq!(serde_json::to_value(&response).unwrap(), expected);
    let decoded: OidcJwtPreCreateResponse = serde_json::from_value(expected).unwrap();
    assert_eq!(decoded, response);
}

#[test]
fn test_authentication_gate_allow_round_trips() {
    let mut limits = RateLimits::new();
    limits.insert(RateLimitName::AuthenticationGeneral, RateLimitWeight::of(1));
    limits.insert(
        RateLimitName::AuthenticationAccountEnumeration,
        RateLimitWeight::of(1),
    );
    let response = HookResponse::allow(
        AuthenticationGateAllow::new()
            .with_bot_protection(BotProtectionRequirements::always())
            .with_constraints(Constraints::amr(vec![
                AmrConstraint::Mfa,
                AmrConstraint::Pwd,
                AmrConstraint::Sms,
            ]))
            .with_rate_limits(limits),
    );
    let expected = json!({
        "is_allowed": true,
        "bot_protection": {"mode": "always"},
        "constraints": {"amr": ["mfa", "pwd", "sms"]},
        "rate_limits": {
            "authentication.account_enumeration": {"weight": 1},
            "authentication.general": {"weight": 1},
        },
    });
    assert_eq!(serde_json::to_value(&response).unwrap(), expected);
    let decoded: AuthenticationPreInitializeResponse =
        serde_json::from_value(expected.clone()).unwrap();
    assert_eq!(decoded, response);

    // The same body is fine at post_identified but illegal once the
    // flow reaches pre_authenticated, which does not take bot_protection.
    assert!(serde_json::from_value::<AuthenticationPostIdentifiedResponse>(expected.clone()).is_ok());
    assert!(
        serde_json::from_value::<AuthenticationPreAuthenticatedResponse>(expected).is_err()
    );
}

#[test]
fn test_allow_rejects_extra_literal_noise() {
    // A stray field outside any whitelist fails the typed decode too.
    let result = serde_json::from_value::<UserPreCreateResponse>(json!({
        "is_allowed": true,
        "note": "handled upstream",
    }));
    assert!(result.is_err());
}
