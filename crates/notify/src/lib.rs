// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ebb-notify: Transient and persistent notifications for ebb clients.
//!
//! The hub stores notifications in insertion order for display. A
//! non-persistent notification with a positive duration gets a deferred
//! removal task; removing it early cancels the task so no stale callback
//! acts on an id that is already gone.
//!
//! The hub must be created inside a Tokio runtime - expiry timers are
//! spawned tasks.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;

/// Default lifetime for non-persistent notifications.
pub const DEFAULT_DURATION: Duration = Duration::from_secs(5);

/// Severity of a notification, for display styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Info => "info",
            Level::Success => "success",
            Level::Warning => "warning",
            Level::Error => "error",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A notification to surface to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Display text.
    pub message: String,
    /// Display severity.
    pub level: Level,
    /// Persistent notifications never expire on their own.
    pub persistent: bool,
    /// Lifetime for non-persistent notifications; `None` uses the default.
    pub duration: Option<Duration>,
}

impl Notification {
    /// Creates a non-persistent notification with the default duration.
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Notification { message: message.into(), level, persistent: false, duration: None }
    }

    /// Creates an info notification.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Level::Info, message)
    }

    /// Creates a success notification.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Level::Success, message)
    }

    /// Creates a warning notification.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    /// Creates an error notification.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Makes the notification persistent (never auto-removed).
    pub fn persistent(mut self) -> Self {
        self.persistent = true;
        self
    }

    /// Overrides the auto-removal delay.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }
}

/// Hub-assigned identifier for a stored notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NotificationId(pub u64);

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A notification as stored by the hub.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Posted {
    pub id: NotificationId,
    pub notification: Notification,
}

struct HubState {
    next_id: u64,
    entries: Vec<Posted>,
    timers: HashMap<u64, JoinHandle<()>>,
}

/// Registry of active notifications for one session.
///
/// Cheap to clone; all clones share the same registry.
#[derive(Clone)]
pub struct NotificationHub {
    state: Arc<Mutex<HubState>>,
}

impl NotificationHub {
    /// Creates an empty hub.
    pub fn new() -> Self {
        NotificationHub {
            state: Arc::new(Mutex::new(HubState {
                next_id: 0,
                entries: Vec::new(),
                timers: HashMap::new(),
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, HubState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Stores a notification and schedules its expiry if applicable.
    pub fn add(&self, notification: Notification) -> NotificationId {
        let expiry = if notification.persistent {
            None
        } else {
            match notification.duration {
                Some(d) if d.is_zero() => None,
                Some(d) => Some(d),
                None => Some(DEFAULT_DURATION),
            }
        };

        // The lock is held across the spawn so the timer task cannot
        // observe the entry before its handle is registered.
        let mut state = self.lock();
        let id = NotificationId(state.next_id);
        state.next_id = state.next_id.saturating_add(1);
        state.entries.push(Posted { id, notification });

        if let Some(delay) = expiry {
            let hub = self.clone();
            let handle = tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                tracing::debug!("notification {} expired", id);
                hub.expire(id);
            });
            state.timers.insert(id.0, handle);
        }

        id
    }

    /// Removes a notification immediately.
    ///
    /// Cancels any pending expiry task for the id, so a timer can never
    /// fire against a removed (or reused) slot. Returns false if the id
    /// is not active.
    pub fn remove(&self, id: NotificationId) -> bool {
        let mut state = self.lock();
        if let Some(handle) = state.timers.remove(&id.0) {
            handle.abort();
        }
        let before = state.entries.len();
        state.entries.retain(|p| p.id != id);
        state.entries.len() != before
    }

    /// Removal path for expiry tasks; drops the timer bookkeeping only.
    fn expire(&self, id: NotificationId) {
        let mut state = self.lock();
        state.timers.remove(&id.0);
        state.entries.retain(|p| p.id != id);
    }

    /// Returns active notifications in insertion order.
    pub fn active(&self) -> Vec<Posted> {
        self.lock().entries.clone()
    }

    /// Returns the number of active notifications.
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    /// Returns true if nothing is active.
    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }
}

impl Default for NotificationHub {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
