//! Allagro staleness signaling.
//!
//! After every successful mutation the API publishes a [`StaleEvent`]
//! naming the entity list that must be refetched before the next
//! render. Connected dashboard clients receive the events over a
//! WebSocket and refresh the affected list.

pub mod bus;

pub use bus::{ChangeAction, EntityKind, EventBus, StaleEvent};
