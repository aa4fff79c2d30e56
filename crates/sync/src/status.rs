// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Observable sync state for one session.
//!
//! One `SyncStatus` lives for the whole session; fields are reset, never
//! the instance. `pending_changes` is always recomputed from the live
//! queue, never tracked independently, so it cannot drift.

use chrono::{DateTime, Utc};
use ebb_core::ActionId;
use serde::Serialize;

use crate::remote::FailureKind;

/// A recorded sync failure, surfaced for external display and resolution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SyncFault {
    /// Session-unique fault id.
    pub id: u64,
    /// Classification reported by the remote store.
    pub kind: FailureKind,
    /// Human-readable description.
    pub message: String,
    /// The action that failed, if the fault is tied to one.
    pub action: Option<ActionId>,
    /// Opaque data attached by the reporter.
    pub data: Option<serde_json::Value>,
    /// When the fault was recorded.
    pub at: DateTime<Utc>,
    /// Set only by an external resolution call, never by the coordinator.
    pub resolved: bool,
}

/// Aggregate sync state for one client session.
#[derive(Debug, Clone, Serialize)]
pub struct SyncStatus {
    /// Last known connectivity signal.
    pub is_online: bool,
    /// Completion time of the last drain attempt, success or partial.
    pub last_sync: Option<DateTime<Utc>>,
    /// Count of queue entries with `synced == false`.
    pub pending_changes: usize,
    /// Guard against concurrent drains.
    pub sync_in_progress: bool,
    /// Recorded faults, oldest first, capped.
    pub faults: Vec<SyncFault>,
    #[serde(skip)]
    next_fault_id: u64,
    #[serde(skip)]
    max_faults: usize,
}

impl SyncStatus {
    /// Creates a fresh status for a new session.
    pub fn new(start_online: bool, max_faults: usize) -> Self {
        SyncStatus {
            is_online: start_online,
            last_sync: None,
            pending_changes: 0,
            sync_in_progress: false,
            faults: Vec::new(),
            next_fault_id: 0,
            max_faults,
        }
    }

    /// Records a fault, pruning the oldest entries past the cap.
    ///
    /// Returns the id of the new fault.
    pub(crate) fn push_fault(
        &mut self,
        kind: FailureKind,
        message: String,
        action: Option<ActionId>,
        at: DateTime<Utc>,
    ) -> u64 {
        let id = self.next_fault_id;
        self.next_fault_id = self.next_fault_id.saturating_add(1);

        while self.faults.len() >= self.max_faults && !self.faults.is_empty() {
            self.faults.remove(0);
        }

        self.faults.push(SyncFault {
            id,
            kind,
            message,
            action,
            data: None,
            at,
            resolved: false,
        });
        id
    }

    /// Marks the fault with the given id as resolved.
    ///
    /// Returns false if no such fault is recorded.
    pub(crate) fn resolve(&mut self, id: u64) -> bool {
        match self.faults.iter_mut().find(|f| f.id == id) {
            Some(fault) => {
                fault.resolved = true;
                true
            }
            None => false,
        }
    }

    /// Returns the recorded faults that are still unresolved.
    pub fn unresolved_faults(&self) -> Vec<&SyncFault> {
        self.faults.iter().filter(|f| !f.resolved).collect()
    }
}
