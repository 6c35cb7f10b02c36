//! The hook trait implemented by endpoint authors.

use async_trait::async_trait;

use idgate_core::AppResult;
use idgate_events::event::payload::{
    AuthenticationContextPayload, PostIdentifiedPayload, TokenPreCreatePayload,
    UserIdentitiesPayload, UserPayload,
};
use idgate_events::event::HookEvent;
use idgate_events::response::{
    AuthenticationGateAllow, AuthenticationPostIdentifiedResponse,
    AuthenticationPreAuthenticatedResponse, AuthenticationPreInitializeResponse,
    AuthenticationProceedAllow, HookResponse, IdTokenMutationAllow, JwtMutationAllow,
    OidcIdTokenPreCreateResponse, OidcJwtPreCreateResponse, UserMutationAllow,
    UserPreCreateResponse, UserPreScheduleAnonymizationResponse, UserPreScheduleDeletionResponse,
    UserProfilePreUpdateResponse,
};

/// Per-event decision points of a hook endpoint.
///
/// Every method defaults to a plain allow, so an implementation only
/// overrides the events it wants to decide on. Each method returns the
/// response type its event permits; returning anything else is a type
/// error, which is the point.
#[async_trait]
pub trait BlockingHook: Send + Sync {
    /// A user is about to be created.
    async fn on_user_pre_create(
        &self,
        _event: &HookEvent,
        _payload: &UserIdentitiesPayload,
    ) -> AppResult<UserPreCreateResponse> {
        Ok(HookResponse::allow(UserMutationAllow::new()))
    }

    /// A user's profile is about to be updated.
    async fn on_user_profile_pre_update(
        &self,
        _event: &HookEvent,
        _payload: &UserPayload,
    ) -> AppResult<UserProfilePreUpdateResponse> {
        Ok(HookResponse::allow(UserMutationAllow::new()))
    }

    /// A user's deletion is about to be scheduled.
    async fn on_user_pre_schedule_deletion(
        &self,
        _event: &HookEvent,
        _payload: &UserPayload,
    ) -> AppResult<UserPreScheduleDeletionResponse> {
        Ok(HookResponse::allow(UserMutationAllow::new()))
    }

    /// A user's anonymization is about to be scheduled.
    async fn on_user_pre_schedule_anonymization(
        &self,
        _event: &HookEvent,
        _payload: &UserPayload,
    ) -> AppResult<UserPreScheduleAnonymizationResponse> {
        Ok(HookResponse::allow(UserMutationAllow::new()))
    }

    /// An access-token JWT is about to be issued.
    async fn on_oidc_jwt_pre_create(
        &self,
        _event: &HookEvent,
        _payload: &TokenPreCreatePayload,
    ) -> AppResult<OidcJwtPreCreateResponse> {
        Ok(HookResponse::allow(JwtMutationAllow::new()))
    }

    /// An ID token is about to be issued.
    async fn on_oidc_id_token_pre_create(
        &self,
        _event: &HookEvent,
        _payload: &TokenPreCreatePayload,
    ) -> AppResult<OidcIdTokenPreCreateResponse> {
        Ok(HookResponse::allow(IdTokenMutationAllow::new()))
    }

    /// An authentication flow is about to start.
    async fn on_authentication_pre_initialize(
        &self,
        _event: &HookEvent,
        _payload: &AuthenticationContextPayload,
    ) -> AppResult<AuthenticationPreInitializeResponse> {
        Ok(HookResponse::allow(AuthenticationGateAllow::new()))
    }

    /// An identification was just asserted in an authentication flow.
    async fn on_authentication_post_identified(
        &self,
        _event: &HookEvent,
        _payload: &PostIdentifiedPayload,
    ) -> AppResult<AuthenticationPostIdentifiedResponse> {
        Ok(HookResponse::allow(AuthenticationGateAllow::new()))
    }

    /// An authentication flow is about to conclude successfully.
    async fn on_authentication_pre_authenticated(
        &self,
        _event: &HookEvent,
        _payload: &AuthenticationContextPayload,
    ) -> AppResult<AuthenticationPreAuthenticatedResponse> {
        Ok(HookResponse::allow(AuthenticationProceedAllow::new()))
    }
}
