// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ebb-sync: Offline action queue and sync coordination for ebb clients.
//!
//! Provides the per-session state that captures entity mutations while
//! offline and replays them against a remote store when connectivity
//! returns.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │ Coordinator │────►│ RemoteStore  │────►│   Remote    │
//! │  (drain)    │◄────│   (trait)    │◄────│   System    │
//! └─────────────┘     └──────────────┘     └─────────────┘
//!        │
//!        ▼
//! ┌─────────────┐     ┌──────────────┐
//! │ SyncContext │────►│ ActionQueue  │  (pending mutations)
//! │ (session)   │────►│ SyncStatus   │  (observable state)
//! └─────────────┘     └──────────────┘
//! ```
//!
//! # Features
//!
//! - Ordered offline queue with per-action retry metadata
//! - Optional JSONL persistence so a restarted session keeps its queue
//! - Guarded, strictly sequential drain with partial-failure semantics
//! - Injectable remote-store trait for testing
//! - Poll-based status snapshots (no UI framework assumptions)

mod context;
mod coordinator;
mod queue;
mod remote;
mod status;

pub use context::{SessionConfig, SyncContext};
pub use coordinator::{DrainOutcome, SkipReason, SyncCoordinator};
pub use queue::{ActionQueue, QueueError, QueueResult};
pub use remote::{FailureKind, RemoteFailure, RemoteStore};
pub use status::{SyncFault, SyncStatus};

#[cfg(test)]
mod test_helpers;
