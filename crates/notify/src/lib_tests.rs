// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

#[tokio::test]
async fn transient_notification_expires() {
    let hub = NotificationHub::new();
    let id = hub.add(Notification::info("saved").with_duration(Duration::from_millis(50)));

    // Present immediately after add
    assert_eq!(hub.len(), 1);
    assert_eq!(hub.active()[0].id, id);

    tokio::time::sleep(Duration::from_millis(150)).await;
    assert!(hub.is_empty());
}

#[tokio::test]
async fn persistent_notification_survives() {
    let hub = NotificationHub::new();
    hub.add(
        Notification::error("sync failed")
            .persistent()
            .with_duration(Duration::from_millis(10)),
    );

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(hub.len(), 1);
}

#[tokio::test]
async fn zero_duration_disables_expiry() {
    let hub = NotificationHub::new();
    hub.add(Notification::info("sticky").with_duration(Duration::ZERO));

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(hub.len(), 1);
}

#[tokio::test]
async fn remove_cancels_pending_expiry() {
    let hub = NotificationHub::new();
    let keep = hub.add(Notification::info("keep me").persistent());
    let id = hub.add(Notification::info("going").with_duration(Duration::from_millis(50)));

    assert!(hub.remove(id));
    assert_eq!(hub.len(), 1);

    // The cancelled timer must not act on anything after its deadline
    tokio::time::sleep(Duration::from_millis(150)).await;
    assert_eq!(hub.len(), 1);
    assert_eq!(hub.active()[0].id, keep);
}

#[tokio::test]
async fn remove_unknown_returns_false() {
    let hub = NotificationHub::new();
    assert!(!hub.remove(NotificationId(42)));
}

#[tokio::test]
async fn remove_twice_is_noop() {
    let hub = NotificationHub::new();
    let id = hub.add(Notification::warning("low battery").persistent());

    assert!(hub.remove(id));
    assert!(!hub.remove(id));
}

#[tokio::test]
async fn active_preserves_insertion_order() {
    let hub = NotificationHub::new();
    hub.add(Notification::info("first").persistent());
    hub.add(Notification::success("second").persistent());
    hub.add(Notification::warning("third").persistent());

    let messages: Vec<_> =
        hub.active().iter().map(|p| p.notification.message.clone()).collect();
    assert_eq!(messages, vec!["first", "second", "third"]);
}

#[tokio::test]
async fn ids_are_unique() {
    let hub = NotificationHub::new();
    let a = hub.add(Notification::info("a").persistent());
    let b = hub.add(Notification::info("b").persistent());
    assert_ne!(a, b);
}

#[tokio::test]
async fn clones_share_one_registry() {
    let hub = NotificationHub::new();
    let other = hub.clone();

    let id = hub.add(Notification::info("shared").persistent());
    assert_eq!(other.len(), 1);
    assert!(other.remove(id));
    assert!(hub.is_empty());
}

#[test]
fn level_display() {
    assert_eq!(Level::Info.to_string(), "info");
    assert_eq!(Level::Error.as_str(), "error");
}
