// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ebb-core: Shared library for the ebb offline sync engine
//!
//! This crate provides the core data structures and primitives used by the
//! ebb-sync session layer: entity and mutation kinds, pending offline
//! actions, the monotonic stamp clock that mints action ids, and viewport
//! classification helpers.

pub mod action;
pub mod entity;
pub mod error;
pub mod stamp;
pub mod viewport;

pub use action::{ActionId, PendingAction};
pub use entity::{EntityKind, Mutation};
pub use error::{Error, Result};
pub use stamp::{ClockSource, Stamp, StampClock, SystemClock};
pub use viewport::{breakpoint, classify, Breakpoint, DeviceClass, Orientation, ViewportClass};
