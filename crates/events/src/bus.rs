//! In-process event bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`EventBus`] is the publish/subscribe hub for [`StaleEvent`]s. It is
//! shared via `Arc<EventBus>` across the application; mutation handlers
//! publish, the WebSocket endpoint subscribes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use allagro_core::types::DbId;

// ---------------------------------------------------------------------------
// StaleEvent
// ---------------------------------------------------------------------------

/// The entity list a mutation invalidated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Client,
    Project,
    Order,
}

/// What happened to the entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeAction {
    Created,
    Updated,
    Deleted,
}

/// A confirmed mutation, published after the store write succeeds.
///
/// Receivers treat this as "the `entity` list is stale — refetch it";
/// the event intentionally carries no row data, so a client can never
/// patch its snapshot instead of refetching.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaleEvent {
    pub entity: EntityKind,
    pub action: ChangeAction,
    /// Id of the affected row.
    pub id: DbId,
    /// When the mutation was confirmed (UTC).
    pub timestamp: DateTime<Utc>,
}

impl StaleEvent {
    /// Create an event stamped with the current time.
    pub fn new(entity: EntityKind, action: ChangeAction, id: DbId) -> Self {
        Self {
            entity,
            action,
            id,
            timestamp: Utc::now(),
        }
    }
}

// ---------------------------------------------------------------------------
// EventBus
// ---------------------------------------------------------------------------

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 1024;

/// In-process fan-out bus for staleness events.
///
/// Wraps a [`broadcast::Sender`] so any number of subscribers can
/// independently receive every published event.
pub struct EventBus {
    sender: broadcast::Sender<StaleEvent>,
}

impl EventBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full, the oldest un-consumed messages are
    /// dropped and slow receivers observe a `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers.
    ///
    /// With zero subscribers the event is silently dropped; staleness
    /// only matters to clients that are currently watching.
    pub fn publish(&self, event: StaleEvent) {
        tracing::debug!(
            entity = ?event.entity,
            action = ?event.action,
            id = event.id,
            "Publishing staleness event"
        );
        // Ignore the SendError — it only means there are zero receivers.
        let _ = self.sender.send(event);
    }

    /// Subscribe to all events published after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<StaleEvent> {
        self.sender.subscribe()
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
