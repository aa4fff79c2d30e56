// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ordered queue of pending offline actions.
//!
//! Insertion order is sync attempt order. The queue optionally persists to
//! a JSONL file - each push is appended and fsynced immediately; mutations
//! (marking synced, recording failures, removal, purging) rewrite the file
//! so a reopened queue sees the surviving state.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use ebb_core::{ActionId, PendingAction};

/// Error type for queue operations.
#[derive(Debug, thiserror::Error)]
pub enum QueueError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for queue operations.
pub type QueueResult<T> = Result<T, QueueError>;

/// Ordered log of pending mutations for one session.
pub struct ActionQueue {
    /// Backing file, if the queue is durable.
    path: Option<PathBuf>,
    /// Live actions in enqueue order.
    actions: Vec<PendingAction>,
}

impl ActionQueue {
    /// Creates a queue with no backing file.
    pub fn in_memory() -> Self {
        ActionQueue { path: None, actions: Vec::new() }
    }

    /// Opens or creates a durable queue at the given path.
    ///
    /// Existing entries are reloaded in file order.
    pub fn open(path: &Path) -> QueueResult<Self> {
        let mut actions = Vec::new();

        match File::open(path) {
            Ok(file) => {
                let reader = BufReader::new(file);
                for line in reader.lines() {
                    let line = line?;
                    if line.trim().is_empty() {
                        continue;
                    }
                    let action: PendingAction = serde_json::from_str(&line)?;
                    actions.push(action);
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }

        // Ensure the file exists for subsequent appends
        OpenOptions::new().create(true).append(true).open(path)?;

        Ok(ActionQueue { path: Some(path.to_path_buf()), actions })
    }

    /// Appends an action to the queue.
    ///
    /// Durable queues persist the entry before it becomes visible.
    pub fn push(&mut self, action: PendingAction) -> QueueResult<()> {
        if let Some(path) = &self.path {
            let mut file = OpenOptions::new().create(true).append(true).open(path)?;
            let json = serde_json::to_string(&action)?;
            writeln!(file, "{json}")?;
            file.sync_all()?;
        }
        self.actions.push(action);
        Ok(())
    }

    /// Returns the action with the given id, if present.
    pub fn get(&self, id: &ActionId) -> Option<&PendingAction> {
        self.actions.iter().find(|a| a.id == *id)
    }

    /// Removes the action with the given id.
    ///
    /// Returns the removed action, or `None` if absent (not an error).
    pub fn remove(&mut self, id: &ActionId) -> QueueResult<Option<PendingAction>> {
        match self.actions.iter().position(|a| a.id == *id) {
            Some(index) => {
                let action = self.actions.remove(index);
                self.rewrite()?;
                Ok(Some(action))
            }
            None => Ok(None),
        }
    }

    /// Marks the action with the given id as confirmed by the remote store.
    ///
    /// Returns false if the action is no longer in the queue.
    pub fn mark_synced(&mut self, id: &ActionId) -> QueueResult<bool> {
        match self.actions.iter_mut().find(|a| a.id == *id) {
            Some(action) => {
                action.mark_synced();
                self.rewrite()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Records a failed sync attempt against the action with the given id.
    ///
    /// Returns false if the action is no longer in the queue.
    pub fn record_failure(&mut self, id: &ActionId, message: &str) -> QueueResult<bool> {
        match self.actions.iter_mut().find(|a| a.id == *id) {
            Some(action) => {
                action.record_failure(message);
                self.rewrite()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Returns a snapshot of all unsynced actions in enqueue order.
    pub fn pending(&self) -> Vec<PendingAction> {
        self.actions.iter().filter(|a| !a.synced).cloned().collect()
    }

    /// Removes all synced actions. Idempotent.
    ///
    /// Returns the number of actions purged.
    pub fn purge_synced(&mut self) -> QueueResult<usize> {
        let before = self.actions.len();
        self.actions.retain(|a| !a.synced);
        let purged = before - self.actions.len();
        if purged > 0 {
            self.rewrite()?;
        }
        Ok(purged)
    }

    /// Returns the number of unsynced actions.
    pub fn unsynced_count(&self) -> usize {
        self.actions.iter().filter(|a| !a.synced).count()
    }

    /// Returns the total number of actions (synced and unsynced).
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Returns true if the queue holds no actions at all.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Rewrites the backing file from the live actions.
    fn rewrite(&self) -> QueueResult<()> {
        if let Some(path) = &self.path {
            let mut file = File::create(path)?;
            for action in &self.actions {
                let json = serde_json::to_string(action)?;
                writeln!(file, "{json}")?;
            }
            file.sync_all()?;
        }
        Ok(())
    }
}
