// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Entity and mutation kinds for offline actions.
//!
//! Every offline action targets one domain entity kind with one mutation
//! kind. Payload shapes are opaque to this crate.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Domain entity classes an offline action can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// A person or organization record.
    Contact,
    /// A sales opportunity.
    Deal,
    /// A unit of follow-up work.
    Task,
    /// A logged or outgoing email.
    Email,
    /// A free-form note attached to another record.
    Note,
}

impl EntityKind {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Contact => "contact",
            EntityKind::Deal => "deal",
            EntityKind::Task => "task",
            EntityKind::Email => "email",
            EntityKind::Note => "note",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "contact" => Ok(EntityKind::Contact),
            "deal" => Ok(EntityKind::Deal),
            "task" => Ok(EntityKind::Task),
            "email" => Ok(EntityKind::Email),
            "note" => Ok(EntityKind::Note),
            _ => Err(Error::InvalidEntityKind(s.to_string())),
        }
    }
}

/// The kind of mutation an offline action applies to its entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mutation {
    /// Create a new entity from the payload.
    Create,
    /// Update an existing entity with the payload.
    Update,
    /// Delete the entity identified by the payload.
    Delete,
}

impl Mutation {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mutation::Create => "create",
            Mutation::Update => "update",
            Mutation::Delete => "delete",
        }
    }
}

impl fmt::Display for Mutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Mutation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "create" => Ok(Mutation::Create),
            "update" => Ok(Mutation::Update),
            "delete" => Ok(Mutation::Delete),
            _ => Err(Error::InvalidMutation(s.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "entity_tests.rs"]
mod tests;
