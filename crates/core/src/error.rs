// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for ebb-core operations.

use thiserror::Error;

/// All possible errors that can occur in ebb-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid entity kind: '{0}'\n  hint: valid kinds are: contact, deal, task, email, note")]
    InvalidEntityKind(String),

    #[error("invalid mutation: '{0}'\n  hint: valid mutations are: create, update, delete")]
    InvalidMutation(String),

    #[error("invalid stamp: {0}")]
    InvalidStamp(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for ebb-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
