//! Subscription types for store change notifications.

use crate::storage::StorageKey;
use serde::{Deserialize, Serialize};

/// Configuration for a subscription.
#[derive(Clone, Debug)]
pub struct SubscriptionConfig {
    /// Max buffered events before dropping subscriber.
    /// Default: 256
    pub buffer_size: usize,

    /// Filter criteria.
    pub filter: SubscriptionFilter,
}

impl Default for SubscriptionConfig {
    fn default() -> Self {
        Self {
            buffer_size: 256,
            filter: SubscriptionFilter::all(),
        }
    }
}

/// Filter criteria for subscriptions.
#[derive(Clone, Debug, Default)]
pub struct SubscriptionFilter {
    /// Only these collections (None = every collection).
    pub keys: Option<Vec<StorageKey>>,

    /// Include collection change events.
    pub include_collections: bool,

    /// Include admin login/logout events.
    pub include_session: bool,
}

impl SubscriptionFilter {
    /// Changes to any collection.
    pub fn collections() -> Self {
        Self {
            include_collections: true,
            ..Default::default()
        }
    }

    /// Changes to specific collections.
    pub fn keys(keys: Vec<StorageKey>) -> Self {
        Self {
            keys: Some(keys),
            include_collections: true,
            ..Default::default()
        }
    }

    /// Admin session changes only.
    pub fn session() -> Self {
        Self {
            include_session: true,
            ..Default::default()
        }
    }

    /// Everything.
    pub fn all() -> Self {
        Self {
            keys: None,
            include_collections: true,
            include_session: true,
        }
    }

    pub(crate) fn matches_key(&self, key: StorageKey) -> bool {
        if !self.include_collections {
            return false;
        }
        match self.keys {
            Some(ref keys) => keys.contains(&key),
            None => true,
        }
    }
}

/// Events delivered to subscribers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StoreEvent {
    /// A collection was replaced in memory (and a write was attempted).
    CollectionChanged {
        key: StorageKey,
        /// Number of records after the change.
        len: usize,
    },

    /// The admin logged in or out.
    SessionChanged { authenticated: bool },

    /// Subscription was dropped. A subscriber dropped for a full buffer
    /// gets no such event; its channel disconnects once drained.
    Dropped { reason: DropReason },
}

/// Why a subscription was dropped.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropReason {
    /// Explicitly unsubscribed.
    Unsubscribed,
}

/// Unique identifier for a subscription.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

/// Handle to manage a subscription.
pub struct SubscriptionHandle {
    pub id: SubscriptionId,
    /// Channel to receive events.
    pub receiver: crossbeam_channel::Receiver<StoreEvent>,
}

impl SubscriptionHandle {
    /// Receive the next event (blocking).
    pub fn recv(&self) -> Result<StoreEvent, crossbeam_channel::RecvError> {
        self.receiver.recv()
    }

    /// Try to receive an event (non-blocking).
    pub fn try_recv(&self) -> Result<StoreEvent, crossbeam_channel::TryRecvError> {
        self.receiver.try_recv()
    }

    /// Receive with timeout.
    pub fn recv_timeout(
        &self,
        timeout: std::time::Duration,
    ) -> Result<StoreEvent, crossbeam_channel::RecvTimeoutError> {
        self.receiver.recv_timeout(timeout)
    }

    /// Drain everything currently buffered.
    pub fn drain(&self) -> Vec<StoreEvent> {
        self.receiver.try_iter().collect()
    }
}
