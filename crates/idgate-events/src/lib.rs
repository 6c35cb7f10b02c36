//! # idgate-events
//!
//! The webhook contract between the Idgate identity platform and external
//! hook endpoints. This crate is a schema: an exhaustive catalogue of
//! event shapes, the response shapes a hook may answer with, and the
//! per-event-type rules saying which response fields are legal.
//!
//! Events come in two disjoint universes:
//!
//! - **Blocking** events ([`event::BlockingEvent`]) suspend the
//!   triggering operation until the hook answers with an allow/deny
//!   decision. The allow response for each tag may only carry the fields
//!   that tag permits; the per-tag [`response`] aliases make illegal
//!   combinations a decode error.
//! - **Non-blocking** events ([`event::NonblockingEvent`]) are
//!   fire-and-forget notifications. Any returned value is ignored.
//!
//! Entity structs in [`entity`] are read-only snapshots handed to hooks.
//! A hook never mutates the entity it received; it expresses desired
//! changes through [`response::Mutations`] in an allow response.

pub mod amr;
pub mod context;
pub mod entity;
pub mod event;
pub mod migration;
pub mod response;
pub mod sms;
pub mod validate;

pub use amr::{Amr, AmrConstraint};
pub use context::{HookEventContext, OAuthContext, TriggeredBy};
pub use event::{BlockingEvent, BlockingKind, EventKind, HookEvent, NonblockingEvent, NonblockingKind};
pub use response::{DisallowResponse, HookResponse};
