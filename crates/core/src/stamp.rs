// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Monotonic stamps for ordering offline actions within a session.
//!
//! A stamp combines wall clock time with a sequence counter so that ids
//! minted in the same millisecond (or while the wall clock stalls or goes
//! backwards) still order by enqueue time.
//!
//! Format: `{wall_ms}-{seq}`
//!
//! Ordering rules:
//! 1. Higher wall_ms wins
//! 2. If wall_ms equal, higher seq wins

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{Error, Result};

/// A session-local monotonic timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stamp {
    /// Wall clock time in milliseconds since Unix epoch.
    pub wall_ms: u64,
    /// Sequence counter for ordering stamps minted at the same wall time.
    pub seq: u32,
}

impl Stamp {
    /// Creates a new stamp with the given components.
    pub fn new(wall_ms: u64, seq: u32) -> Self {
        Stamp { wall_ms, seq }
    }

    /// Creates a stamp representing the earliest possible time (for queries).
    pub fn min() -> Self {
        Stamp { wall_ms: 0, seq: 0 }
    }

    /// Parses a stamp from its string representation.
    pub fn parse(s: &str) -> Result<Self> {
        s.parse()
    }
}

impl Ord for Stamp {
    fn cmp(&self, other: &Self) -> Ordering {
        self.wall_ms.cmp(&other.wall_ms).then_with(|| self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for Stamp {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Stamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.wall_ms, self.seq)
    }
}

impl FromStr for Stamp {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split('-').collect();
        if parts.len() != 2 {
            return Err(Error::InvalidStamp(format!(
                "expected format 'wall_ms-seq', got '{s}'"
            )));
        }

        let wall_ms = parts[0]
            .parse::<u64>()
            .map_err(|_| Error::InvalidStamp(format!("invalid wall_ms '{}' in '{s}'", parts[0])))?;

        let seq = parts[1]
            .parse::<u32>()
            .map_err(|_| Error::InvalidStamp(format!("invalid seq '{}' in '{s}'", parts[1])))?;

        Ok(Stamp::new(wall_ms, seq))
    }
}

/// Trait for getting the current wall clock time.
///
/// This allows injecting a mock clock for testing.
pub trait ClockSource: Send + Sync {
    /// Returns the current time in milliseconds since Unix epoch.
    fn now_ms(&self) -> u64;
}

/// System clock implementation using `std::time::SystemTime`.
#[derive(Debug, Default)]
pub struct SystemClock;

impl ClockSource for SystemClock {
    fn now_ms(&self) -> u64 {
        SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_millis() as u64).unwrap_or(0)
    }
}

impl<C: ClockSource> ClockSource for &C {
    fn now_ms(&self) -> u64 {
        (*self).now_ms()
    }
}

impl ClockSource for Box<dyn ClockSource> {
    fn now_ms(&self) -> u64 {
        self.as_ref().now_ms()
    }
}

/// A clock generator that produces strictly increasing stamps.
///
/// Thread-safe; advances the sequence counter whenever the wall clock
/// stalls or goes backwards.
pub struct StampClock<C: ClockSource = SystemClock> {
    clock: C,
    last: Mutex<(u64, u32)>,
}

impl StampClock<SystemClock> {
    /// Creates a new stamp clock backed by the system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for StampClock<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ClockSource> StampClock<C> {
    /// Creates a new stamp clock with a custom clock source.
    pub fn with_clock(clock: C) -> Self {
        StampClock { clock, last: Mutex::new((0, 0)) }
    }

    /// Mints a new stamp.
    ///
    /// Guarantees strictly increasing stamps even if the wall clock goes
    /// backwards.
    pub fn now(&self) -> Stamp {
        let physical = self.clock.now_ms();
        let mut last = self.last.lock().unwrap_or_else(|e| e.into_inner());

        if physical > last.0 {
            *last = (physical, 0);
        } else {
            last.1 = last.1.saturating_add(1);
        }

        Stamp::new(last.0, last.1)
    }

    /// Returns the current wall time as reported by the underlying source.
    pub fn wall_ms(&self) -> u64 {
        self.clock.now_ms()
    }
}

#[cfg(test)]
#[path = "stamp_tests.rs"]
mod tests;
