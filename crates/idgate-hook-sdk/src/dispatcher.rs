//! Routes incoming events to the right [`BlockingHook`] method and
//! serializes the typed response.

use serde_json::Value;
use tracing::{debug, warn};

use idgate_core::AppResult;
use idgate_events::event::{BlockingEvent, EventBody, HookEvent, NonblockingKind};
use idgate_events::response::DisallowResponse;

use crate::traits::BlockingHook;

/// Dispatch a decoded event.
///
/// Blocking events return the serialized response of the matching hook
/// method. Non-blocking events return `None`: they are notifications and
/// anything a hook would say is ignored by the platform.
pub async fn dispatch<H: BlockingHook + ?Sized>(
    hook: &H,
    event: &HookEvent,
) -> AppResult<Option<Value>> {
    match &event.body {
        EventBody::Blocking(blocking) => Ok(Some(dispatch_blocking(hook, event, blocking).await?)),
        EventBody::Nonblocking(nonblocking) => {
            debug!(event = %nonblocking.kind(), id = %event.id, "notification received");
            Ok(None)
        }
    }
}

async fn dispatch_blocking<H: BlockingHook + ?Sized>(
    hook: &H,
    event: &HookEvent,
    blocking: &BlockingEvent,
) -> AppResult<Value> {
    let response = match blocking {
        BlockingEvent::UserPreCreate(payload) => {
            serde_json::to_value(hook.on_user_pre_create(event, payload).await?)?
        }
        BlockingEvent::UserProfilePreUpdate(payload) => {
            serde_json::to_value(hook.on_user_profile_pre_update(event, payload).await?)?
        }
        BlockingEvent::UserPreScheduleDeletion(payload) => {
            serde_json::to_value(hook.on_user_pre_schedule_deletion(event, payload).await?)?
        }
        BlockingEvent::UserPreScheduleAnonymization(payload) => {
            serde_json::to_value(hook.on_user_pre_schedule_anonymization(event, payload).await?)?
        }
        BlockingEvent::OidcJwtPreCreate(payload) => {
            serde_json::to_value(hook.on_oidc_jwt_pre_create(event, payload).await?)?
        }
        BlockingEvent::OidcIdTokenPreCreate(payload) => {
            serde_json::to_value(hook.on_oidc_id_token_pre_create(event, payload).await?)?
        }
        BlockingEvent::AuthenticationPreInitialize(payload) => {
            serde_json::to_value(hook.on_authentication_pre_initialize(event, payload).await?)?
        }
        BlockingEvent::AuthenticationPostIdentified(payload) => {
            serde_json::to_value(hook.on_authentication_post_identified(event, payload).await?)?
        }
        BlockingEvent::AuthenticationPreAuthenticated(payload) => {
            serde_json::to_value(hook.on_authentication_pre_authenticated(event, payload).await?)?
        }
    };
    Ok(response)
}

/// Dispatch a raw JSON request body, applying the fail-safe rules.
///
/// An event that decodes cleanly is dispatched normally. Otherwise: a
/// recognizable non-blocking tag is dropped with a warning (the platform
/// ignores notification responses anyway), and everything else — unknown
/// tags, missing tags, malformed blocking payloads — is answered with a
/// disallow response, never an allow.
pub async fn dispatch_raw<H: BlockingHook + ?Sized>(
    hook: &H,
    raw: &str,
) -> AppResult<Option<Value>> {
    match serde_json::from_str::<HookEvent>(raw) {
        Ok(event) => dispatch(hook, &event).await,
        Err(decode_err) => {
            let value: Value = serde_json::from_str(raw)?;
            let tag = value.get("type").and_then(Value::as_str).unwrap_or("");
            if tag.parse::<NonblockingKind>().is_ok() {
                warn!(%tag, %decode_err, "dropping malformed notification");
                return Ok(None);
            }
            warn!(%tag, %decode_err, "failing safe with a disallow response");
            Ok(Some(serde_json::to_value(DisallowResponse::new())?))
        }
    }
}
