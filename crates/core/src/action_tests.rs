// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::entity::{EntityKind, Mutation};
use crate::stamp::Stamp;
use chrono::{TimeZone, Utc};
use serde_json::json;

fn make_action(wall_ms: u64) -> PendingAction {
    let at = Utc.timestamp_millis_opt(wall_ms as i64).single().unwrap();
    PendingAction::new(
        Stamp::new(wall_ms, 0),
        EntityKind::Contact,
        Mutation::Create,
        json!({"name": "Ada"}),
        at,
    )
}

#[test]
fn new_action_starts_unsynced() {
    let action = make_action(1000);
    assert!(!action.synced);
    assert_eq!(action.retry_count, 0);
    assert!(action.errors.is_empty());
}

#[test]
fn record_failure_appends_and_bumps() {
    let mut action = make_action(1000);

    action.record_failure("connection refused");
    action.record_failure("timeout");

    assert_eq!(action.retry_count, 2);
    assert_eq!(action.errors, vec!["connection refused", "timeout"]);
}

#[test]
fn mark_synced_is_idempotent() {
    let mut action = make_action(1000);
    action.mark_synced();
    action.mark_synced();
    assert!(action.synced);
}

#[test]
fn synced_action_is_frozen() {
    let mut action = make_action(1000);
    action.record_failure("first");
    action.mark_synced();

    // Retry metadata must not change once synced
    action.record_failure("late failure");
    assert_eq!(action.retry_count, 1);
    assert_eq!(action.errors.len(), 1);
}

#[test]
fn actions_order_by_id() {
    let a = make_action(1000);
    let b = make_action(2000);
    assert!(a < b);
}

#[test]
fn action_serde_roundtrip() {
    let action = make_action(1234);
    let json = serde_json::to_string(&action).unwrap();
    let back: PendingAction = serde_json::from_str(&json).unwrap();
    assert_eq!(action, back);
}
