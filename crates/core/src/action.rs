// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pending offline actions.
//!
//! A pending action is one mutation captured while offline (or
//! speculatively) that has not yet been confirmed by the remote store. Each
//! action carries retry metadata so a failed sync attempt leaves a trail.
//!
//! Invariant: once `synced` flips true the action is frozen - retry
//! metadata stops changing and the only remaining transition is removal
//! from the queue.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::{EntityKind, Mutation};
use crate::stamp::Stamp;

/// Unique identifier for an offline action.
///
/// ActionId is a session-monotonic stamp, so ids double as enqueue order.
pub type ActionId = Stamp;

/// A mutation captured for later application against the remote store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PendingAction {
    /// Unique identifier, minted at enqueue time.
    pub id: ActionId,
    /// The entity class this action targets.
    pub entity: EntityKind,
    /// The mutation kind applied to the entity.
    pub mutation: Mutation,
    /// Opaque domain data for the mutation. Never validated here.
    pub payload: serde_json::Value,
    /// When the action was enqueued. Set once, immutable.
    pub enqueued_at: DateTime<Utc>,
    /// True once the remote store confirmed persistence.
    pub synced: bool,
    /// Number of failed sync attempts so far.
    pub retry_count: u32,
    /// Failure messages, oldest first. Append-only.
    pub errors: Vec<String>,
}

impl PendingAction {
    /// Creates a new unsynced action with zeroed retry metadata.
    pub fn new(
        id: ActionId,
        entity: EntityKind,
        mutation: Mutation,
        payload: serde_json::Value,
        enqueued_at: DateTime<Utc>,
    ) -> Self {
        PendingAction {
            id,
            entity,
            mutation,
            payload,
            enqueued_at,
            synced: false,
            retry_count: 0,
            errors: Vec::new(),
        }
    }

    /// Marks the action as confirmed by the remote store. Idempotent.
    pub fn mark_synced(&mut self) {
        self.synced = true;
    }

    /// Records a failed sync attempt.
    ///
    /// Appends the message and bumps the retry count. No-op once the
    /// action is synced.
    pub fn record_failure(&mut self, message: impl Into<String>) {
        if self.synced {
            return;
        }
        self.retry_count = self.retry_count.saturating_add(1);
        self.errors.push(message.into());
    }
}

impl PartialOrd for PendingAction {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.id.cmp(&other.id))
    }
}

#[cfg(test)]
#[path = "action_tests.rs"]
mod tests;
