//! The event catalogue: envelope, blocking and non-blocking unions, and
//! the closed tag enumerations.

pub mod blocking;
pub mod kind;
pub mod nonblocking;
pub mod payload;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::context::HookEventContext;

pub use blocking::BlockingEvent;
pub use kind::{BlockingKind, EventKind, NonblockingKind};
pub use nonblocking::NonblockingEvent;

/// Envelope wrapping every event occurrence with delivery metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HookEvent {
    /// Opaque unique identifier of this event occurrence.
    pub id: String,
    /// Monotonically increasing sequence number. Orders causally related
    /// events for one platform instance; consumers use it for
    /// ordering/dedup, this crate never generates or checks it.
    pub seq: u64,
    /// Metadata about the request that generated the event.
    pub context: HookEventContext,
    /// The tagged event body (`type` + `payload` on the wire).
    #[serde(flatten)]
    pub body: EventBody,
}

/// Union of the two disjoint event universes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventBody {
    /// A blocking event; a response is mandatory.
    Blocking(BlockingEvent),
    /// A notification; any response is ignored.
    Nonblocking(NonblockingEvent),
}

impl EventBody {
    /// The tag of this event body.
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Blocking(event) => EventKind::Blocking(event.kind()),
            Self::Nonblocking(event) => EventKind::Nonblocking(event.kind()),
        }
    }
}

impl HookEvent {
    /// Create a new envelope with a fresh event ID.
    pub fn new(seq: u64, context: HookEventContext, body: EventBody) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            seq,
            context,
            body,
        }
    }

    /// Create an envelope for a blocking event.
    pub fn blocking(seq: u64, context: HookEventContext, event: BlockingEvent) -> Self {
        Self::new(seq, context, EventBody::Blocking(event))
    }

    /// Create an envelope for a non-blocking event.
    pub fn nonblocking(seq: u64, context: HookEventContext, event: NonblockingEvent) -> Self {
        Self::new(seq, context, EventBody::Nonblocking(event))
    }

    /// The tag of the wrapped event.
    pub fn kind(&self) -> EventKind {
        self.body.kind()
    }

    /// Whether the wrapped event requires a synchronous response.
    pub fn is_blocking(&self) -> bool {
        self.kind().is_blocking()
    }
}
