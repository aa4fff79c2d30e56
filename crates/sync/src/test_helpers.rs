// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for sync module tests.

#![allow(clippy::unwrap_used)]

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::{Arc, Mutex};

use ebb_core::{ClockSource, EntityKind, Mutation, PendingAction};
use serde_json::json;

use crate::context::{SessionConfig, SyncContext};
use crate::queue::ActionQueue;
use crate::remote::{RemoteFailure, RemoteStore};

/// Mock clock for testing with controllable time.
pub struct MockClock {
    time_ms: AtomicU64,
}

impl MockClock {
    pub fn new(initial_ms: u64) -> Self {
        MockClock { time_ms: AtomicU64::new(initial_ms) }
    }

    pub fn set(&self, ms: u64) {
        self.time_ms.store(ms, AtomicOrdering::SeqCst);
    }
}

impl ClockSource for MockClock {
    fn now_ms(&self) -> u64 {
        self.time_ms.load(AtomicOrdering::SeqCst)
    }
}

impl ClockSource for Arc<MockClock> {
    fn now_ms(&self) -> u64 {
        self.as_ref().now_ms()
    }
}

/// Create an in-memory session driven by a mock clock.
pub fn make_context(initial_ms: u64) -> (SyncContext, Arc<MockClock>) {
    let clock = Arc::new(MockClock::new(initial_ms));
    let ctx = SyncContext::with_queue(
        ActionQueue::in_memory(),
        Box::new(Arc::clone(&clock)),
        SessionConfig::default(),
    );
    (ctx, clock)
}

/// Enqueue a contact-create action with a recognizable payload.
pub fn enqueue_contact(ctx: &SyncContext, name: &str) -> PendingAction {
    ctx.enqueue(EntityKind::Contact, Mutation::Create, json!({ "name": name })).unwrap()
}

/// Mock remote store with scripted outcomes and a recorded call log.
///
/// Outcomes are consumed in order; once the script runs dry every apply
/// succeeds.
pub struct MockRemote {
    outcomes: Arc<Mutex<VecDeque<Result<(), RemoteFailure>>>>,
    applied: Arc<Mutex<Vec<PendingAction>>>,
}

impl MockRemote {
    pub fn new() -> Self {
        MockRemote {
            outcomes: Arc::new(Mutex::new(VecDeque::new())),
            applied: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Script the outcome for the next unscripted apply call.
    pub fn push_outcome(&self, outcome: Result<(), RemoteFailure>) {
        self.outcomes.lock().unwrap().push_back(outcome);
    }

    /// All actions the coordinator handed to this remote, in order.
    pub fn applied(&self) -> Vec<PendingAction> {
        self.applied.lock().unwrap().clone()
    }
}

impl RemoteStore for MockRemote {
    fn apply<'a>(
        &'a mut self,
        action: &'a PendingAction,
    ) -> Pin<Box<dyn Future<Output = Result<(), RemoteFailure>> + Send + 'a>> {
        let outcomes = Arc::clone(&self.outcomes);
        let applied = Arc::clone(&self.applied);
        Box::pin(async move {
            applied.lock().unwrap().push(action.clone());
            outcomes.lock().unwrap().pop_front().unwrap_or(Ok(()))
        })
    }
}
