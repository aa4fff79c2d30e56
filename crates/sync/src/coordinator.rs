// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Drain coordination for one session.
//!
//! A drain is one complete pass attempting to sync every action that was
//! pending when the drain started. Actions are applied strictly
//! sequentially in enqueue order - later mutations on the same entity may
//! depend on earlier ones having applied, so the coordinator never fans
//! out remote calls. Actions enqueued while a drain is running are
//! deferred to the next drain.
//!
//! There is no mid-drain cancellation and no retry timer: failed actions
//! simply stay unsynced and ride along on the next externally triggered
//! drain (reconnect or manual).

use crate::context::SyncContext;
use crate::queue::QueueResult;
use crate::remote::RemoteStore;

/// Why a drain returned without doing anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Another drain is already in flight.
    AlreadyDraining,
    /// The session is offline.
    Offline,
    /// Nothing is pending.
    NothingPending,
}

/// Result of one drain pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrainOutcome {
    /// The drain was a safe no-op.
    Skipped(SkipReason),
    /// The drain ran over its snapshot.
    Completed {
        /// Actions confirmed by the remote store this round.
        synced: usize,
        /// Actions that failed and remain queued for a future drain.
        failed: usize,
    },
}

impl DrainOutcome {
    /// Returns true if the drain made no state changes.
    pub fn is_noop(&self) -> bool {
        matches!(self, DrainOutcome::Skipped(_))
    }
}

/// Drains a session's pending actions against a remote store.
pub struct SyncCoordinator {
    ctx: SyncContext,
}

impl SyncCoordinator {
    /// Creates a coordinator for the given session.
    pub fn new(ctx: SyncContext) -> Self {
        SyncCoordinator { ctx }
    }

    /// Returns the session this coordinator drains.
    pub fn context(&self) -> &SyncContext {
        &self.ctx
    }

    /// Attempts to sync all currently-pending actions.
    ///
    /// A safe no-op when a drain is already in flight, the session is
    /// offline, or nothing is pending. Otherwise the pending list is
    /// snapshotted and applied in order; one failure does not abort the
    /// batch. Successes are marked in the live queue by id. After the
    /// pass, `last_sync` is stamped and the pending count recomputed;
    /// synced entries are purged only when the round had zero failures.
    pub async fn drain<R: RemoteStore + ?Sized>(&self, remote: &mut R) -> QueueResult<DrainOutcome> {
        let snapshot = match self.ctx.begin_drain() {
            Ok(snapshot) => snapshot,
            Err(reason) => {
                tracing::debug!("drain skipped: {:?}", reason);
                return Ok(DrainOutcome::Skipped(reason));
            }
        };

        let mut synced = 0usize;
        let mut failed = 0usize;

        for action in &snapshot {
            // The session lock is not held across this await; producers
            // may enqueue freely while the remote call is in flight.
            match remote.apply(action).await {
                Ok(()) => {
                    if let Err(e) = self.ctx.complete_success(&action.id) {
                        self.ctx.abort_drain();
                        return Err(e);
                    }
                    synced += 1;
                }
                Err(failure) => {
                    tracing::warn!(
                        "sync failed for {} {} {}: {}",
                        action.mutation,
                        action.entity,
                        action.id,
                        failure
                    );
                    if let Err(e) = self.ctx.complete_failure(&action.id, &failure) {
                        self.ctx.abort_drain();
                        return Err(e);
                    }
                    failed += 1;
                }
            }
        }

        if let Err(e) = self.ctx.finish_drain(failed == 0) {
            self.ctx.abort_drain();
            return Err(e);
        }

        tracing::info!("drained {} actions: {} synced, {} failed", snapshot.len(), synced, failed);
        Ok(DrainOutcome::Completed { synced, failed })
    }

    /// Marks the session online, then drains.
    ///
    /// Convenience for the environment observer's offline-to-online
    /// transition.
    pub async fn drain_on_reconnect<R: RemoteStore + ?Sized>(
        &self,
        remote: &mut R,
    ) -> QueueResult<DrainOutcome> {
        self.ctx.set_online(true);
        self.drain(remote).await
    }
}
