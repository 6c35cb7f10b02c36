//! # idgate-hook-sdk
//!
//! SDK for implementing Idgate webhook endpoints.
//!
//! Implement [`BlockingHook`], overriding only the events you care
//! about; every method defaults to a plain allow. Then feed incoming
//! request bodies to [`dispatcher::dispatch_raw`]:
//!
//! ```rust,ignore
//! use idgate_hook_sdk::prelude::*;
//!
//! struct MyHook;
//!
//! #[async_trait]
//! impl BlockingHook for MyHook {
//!     async fn on_user_pre_create(
//!         &self,
//!         _event: &HookEvent,
//!         _payload: &UserIdentitiesPayload,
//!     ) -> AppResult<UserPreCreateResponse> {
//!         Ok(UserPreCreateResponse::allow(
//!             UserMutationAllow::new().with_mutations(UserMutations {
//!                 groups: Some(vec!["users".to_string()]),
//!                 ..Default::default()
//!             }),
//!         ))
//!     }
//! }
//! ```

pub mod dispatcher;
pub mod prelude;
pub mod traits;

pub use dispatcher::{dispatch, dispatch_raw};
pub use traits::BlockingHook;
