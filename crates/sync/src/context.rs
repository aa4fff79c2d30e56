// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-session sync context.
//!
//! The context replaces a global reactive store with an explicit object:
//! one instance per client session owns the action queue, the sync status,
//! and the stamp clock behind a single mutex. Clones share the same
//! session, so any number of producers can enqueue concurrently while a
//! drain is in flight.
//!
//! UI collaborators interact only through these entry points and through
//! `status()` snapshots - there is no field-level mutation from outside
//! and no assumed reactivity model.

use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use ebb_core::{ActionId, ClockSource, EntityKind, Mutation, PendingAction, StampClock, SystemClock};

use crate::coordinator::SkipReason;
use crate::queue::{ActionQueue, QueueResult};
use crate::remote::RemoteFailure;
use crate::status::SyncStatus;

/// Configuration for a sync session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Cap on the recorded fault log; oldest entries are pruned past it.
    pub max_recorded_faults: usize,
    /// Initial connectivity assumption before the first signal arrives.
    pub start_online: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig { max_recorded_faults: 100, start_online: true }
    }
}

/// Mutable session state guarded by one mutex.
struct SessionState {
    queue: ActionQueue,
    status: SyncStatus,
}

struct ContextInner {
    state: Mutex<SessionState>,
    clock: StampClock<Box<dyn ClockSource>>,
}

/// Shared handle to one session's sync state.
///
/// Cheap to clone; all clones observe and mutate the same session.
#[derive(Clone)]
pub struct SyncContext {
    inner: Arc<ContextInner>,
}

impl SyncContext {
    /// Creates an in-memory session with default configuration.
    pub fn new() -> Self {
        Self::with_queue(ActionQueue::in_memory(), Box::new(SystemClock), SessionConfig::default())
    }

    /// Creates a session whose queue persists to the given JSONL path.
    ///
    /// Pending actions from a previous session at the same path are
    /// reloaded and counted.
    pub fn open(path: &Path) -> QueueResult<Self> {
        Ok(Self::with_queue(
            ActionQueue::open(path)?,
            Box::new(SystemClock),
            SessionConfig::default(),
        ))
    }

    /// Creates a session from explicit parts (custom clock for testing).
    pub fn with_queue(
        queue: ActionQueue,
        clock: Box<dyn ClockSource>,
        config: SessionConfig,
    ) -> Self {
        let mut status = SyncStatus::new(config.start_online, config.max_recorded_faults);
        status.pending_changes = queue.unsynced_count();

        SyncContext {
            inner: Arc::new(ContextInner {
                state: Mutex::new(SessionState { queue, status }),
                clock: StampClock::with_clock(clock),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.inner.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn now(&self) -> DateTime<Utc> {
        // Out-of-range millis fall back to the epoch rather than panicking
        DateTime::from_timestamp_millis(self.inner.clock.wall_ms() as i64).unwrap_or_default()
    }

    /// Captures a mutation for later application against the remote store.
    ///
    /// The new action starts unsynced with zeroed retry metadata and is
    /// appended in enqueue order. Payload shape is not validated here.
    /// Fails only on exceptional conditions (durable-queue I/O).
    pub fn enqueue(
        &self,
        entity: EntityKind,
        mutation: Mutation,
        payload: serde_json::Value,
    ) -> QueueResult<PendingAction> {
        let mut state = self.lock();
        // Minted under the lock so id order matches queue order even with
        // concurrent producers
        let stamp = self.inner.clock.now();
        let enqueued_at = DateTime::from_timestamp_millis(stamp.wall_ms as i64).unwrap_or_default();
        let action = PendingAction::new(stamp, entity, mutation, payload, enqueued_at);

        state.queue.push(action.clone())?;
        state.status.pending_changes = state.queue.unsynced_count();
        Ok(action)
    }

    /// Removes the action with the given id.
    ///
    /// Returns false (not an error) if it is absent; safe to call twice.
    pub fn remove(&self, id: &ActionId) -> QueueResult<bool> {
        let mut state = self.lock();
        let removed = state.queue.remove(id)?.is_some();
        state.status.pending_changes = state.queue.unsynced_count();
        Ok(removed)
    }

    /// Returns a read-only snapshot of unsynced actions in enqueue order.
    pub fn pending(&self) -> Vec<PendingAction> {
        self.lock().queue.pending()
    }

    /// Returns the live count of unsynced actions.
    pub fn pending_count(&self) -> usize {
        self.lock().queue.unsynced_count()
    }

    /// Removes all synced actions. Idempotent.
    pub fn purge_synced(&self) -> QueueResult<usize> {
        let mut state = self.lock();
        let purged = state.queue.purge_synced()?;
        state.status.pending_changes = state.queue.unsynced_count();
        Ok(purged)
    }

    /// Returns a detached snapshot of the session status.
    ///
    /// This is the polling accessor for UI collaborators; later session
    /// activity does not mutate a snapshot already taken.
    pub fn status(&self) -> SyncStatus {
        self.lock().status.clone()
    }

    /// Records a connectivity transition from the environment observer.
    pub fn set_online(&self, online: bool) {
        self.lock().status.is_online = online;
    }

    /// Returns the last known connectivity signal.
    pub fn is_online(&self) -> bool {
        self.lock().status.is_online
    }

    /// Marks a recorded fault as resolved (external resolution action).
    ///
    /// Returns false if no fault with that id is recorded.
    pub fn resolve_fault(&self, id: u64) -> bool {
        self.lock().status.resolve(id)
    }

    /// Gates a drain: checks the guard, connectivity, and pending work,
    /// and snapshots the pending list, all under one lock acquisition.
    pub(crate) fn begin_drain(&self) -> Result<Vec<PendingAction>, SkipReason> {
        let mut state = self.lock();
        if state.status.sync_in_progress {
            return Err(SkipReason::AlreadyDraining);
        }
        if !state.status.is_online {
            return Err(SkipReason::Offline);
        }
        let snapshot = state.queue.pending();
        if snapshot.is_empty() {
            return Err(SkipReason::NothingPending);
        }
        state.status.sync_in_progress = true;
        Ok(snapshot)
    }

    /// Marks one drained action as confirmed, looked up by id in the live
    /// queue (it may have grown, or the action may have been removed).
    pub(crate) fn complete_success(&self, id: &ActionId) -> QueueResult<()> {
        let mut state = self.lock();
        state.queue.mark_synced(id)?;
        Ok(())
    }

    /// Records one drained action's failure on the action and the status.
    pub(crate) fn complete_failure(&self, id: &ActionId, failure: &RemoteFailure) -> QueueResult<()> {
        let at = self.now();
        let mut state = self.lock();
        state.queue.record_failure(id, &failure.message)?;
        state.status.push_fault(failure.kind, failure.message.clone(), Some(*id), at);
        Ok(())
    }

    /// Closes out a drain: clears the guard, stamps `last_sync`, recomputes
    /// the pending count, and purges synced entries on a clean round.
    pub(crate) fn finish_drain(&self, clean: bool) -> QueueResult<()> {
        let at = self.now();
        let mut state = self.lock();
        state.status.sync_in_progress = false;
        state.status.last_sync = Some(at);
        if clean {
            state.queue.purge_synced()?;
        }
        state.status.pending_changes = state.queue.unsynced_count();
        Ok(())
    }

    /// Clears the drain guard after a persistence error mid-drain.
    pub(crate) fn abort_drain(&self) {
        let mut state = self.lock();
        state.status.sync_in_progress = false;
        state.status.pending_changes = state.queue.unsynced_count();
    }
}

impl Default for SyncContext {
    fn default() -> Self {
        Self::new()
    }
}
