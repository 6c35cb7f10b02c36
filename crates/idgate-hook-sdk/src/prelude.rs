//! Prelude for convenient imports in hook implementations.

pub use async_trait::async_trait;

pub use idgate_core::{AppError, AppResult};
pub use idgate_events::event::payload::{
    AnonymousPromotedPayload, AuthenticationContextPayload, AuthenticationFailedPayload,
    IdentityUpdatedPayload, PostIdentifiedPayload, TokenPreCreatePayload, UserIdentitiesPayload,
    UserIdentityPayload, UserPayload, UserSessionPayload,
};
pub use idgate_events::event::{
    BlockingEvent, BlockingKind, EventBody, EventKind, HookEvent, NonblockingEvent, NonblockingKind,
};
pub use idgate_events::response::{
    AuthenticationGateAllow, AuthenticationPostIdentifiedResponse,
    AuthenticationPreAuthenticatedResponse, AuthenticationPreInitializeResponse,
    AuthenticationProceedAllow, BotProtectionRequirements, Constraints, DisallowResponse,
    HookResponse, IdTokenMutationAllow, IdTokenMutations, JwtMutationAllow, JwtMutations,
    OidcIdTokenPreCreateResponse, OidcJwtPreCreateResponse, RateLimitName, RateLimitWeight,
    RateLimits, StandardAttributes, UserMutationAllow, UserMutations, UserPreCreateResponse,
    UserPreScheduleAnonymizationResponse, UserPreScheduleDeletionResponse,
    UserProfilePreUpdateResponse,
};
pub use idgate_events::{Amr, AmrConstraint};

pub use crate::dispatcher::{dispatch, dispatch_raw};
pub use crate::traits::BlockingHook;
