// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Remote-store contract for applying offline actions.
//!
//! The remote store is the only boundary of this crate: given one pending
//! action, attempt to persist it against the remote system and report
//! success or a classified failure. The transport behind it (HTTP, RPC,
//! ...) is the caller's concern, as is any timeout policy.

use std::fmt;
use std::future::Future;
use std::pin::Pin;

use ebb_core::PendingAction;
use serde::{Deserialize, Serialize};

/// Classification of a failed remote application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Transport-level failure; the default when unclassified.
    #[default]
    Network,
    /// The remote rejected with a server-side error.
    Server,
    /// Remote state diverged (e.g. a concurrent edit).
    Conflict,
    /// The payload was rejected as malformed.
    Validation,
}

impl FailureKind {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Network => "network",
            FailureKind::Server => "server",
            FailureKind::Conflict => "conflict",
            FailureKind::Validation => "validation",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A classified failure returned by the remote store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[error("{kind}: {message}")]
pub struct RemoteFailure {
    /// How the remote store classified the failure.
    pub kind: FailureKind,
    /// Human-readable description.
    pub message: String,
}

impl RemoteFailure {
    /// Creates a failure with an explicit classification.
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        RemoteFailure { kind, message: message.into() }
    }

    /// Creates a network (transport) failure.
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Network, message)
    }

    /// Creates a server-side failure.
    pub fn server(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Server, message)
    }

    /// Creates a conflict failure.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Conflict, message)
    }

    /// Creates a validation failure.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Validation, message)
    }
}

/// Trait for persisting one action against the remote system.
///
/// This is the only suspending operation in the sync core. The coordinator
/// awaits each call sequentially within a drain; implementations do not
/// need to handle concurrent calls from one session.
pub trait RemoteStore: Send {
    /// Attempts to persist the action remotely.
    fn apply<'a>(
        &'a mut self,
        action: &'a PendingAction,
    ) -> Pin<Box<dyn Future<Output = Result<(), RemoteFailure>> + Send + 'a>>;
}
