// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use yare::parameterized;

/// Mock clock for testing with controllable time.
struct MockClock {
    time_ms: AtomicU64,
}

impl MockClock {
    fn new(initial_ms: u64) -> Self {
        MockClock { time_ms: AtomicU64::new(initial_ms) }
    }

    fn set(&self, ms: u64) {
        self.time_ms.store(ms, AtomicOrdering::SeqCst);
    }

    fn advance(&self, ms: u64) {
        self.time_ms.fetch_add(ms, AtomicOrdering::SeqCst);
    }
}

impl ClockSource for MockClock {
    fn now_ms(&self) -> u64 {
        self.time_ms.load(AtomicOrdering::SeqCst)
    }
}

#[test]
fn stamp_ordering() {
    // Higher wall_ms wins
    let a = Stamp::new(100, 5);
    let b = Stamp::new(200, 0);
    assert!(b > a);

    // Same wall_ms, higher seq wins
    let a = Stamp::new(100, 1);
    let b = Stamp::new(100, 2);
    assert!(b > a);
}

#[test]
fn stamp_parse_roundtrip() {
    let original = Stamp::new(1234567890, 42);
    let s = original.to_string();
    let parsed: Stamp = s.parse().unwrap();
    assert_eq!(original, parsed);
}

#[parameterized(
    invalid_word = { "invalid" },
    one_part = { "1" },
    three_parts = { "1-2-3" },
    bad_wall = { "abc-2" },
    bad_seq = { "1-abc" },
)]
fn stamp_parse_errors(input: &str) {
    assert!(input.parse::<Stamp>().is_err());
}

#[test]
fn stamp_min() {
    let min = Stamp::min();
    assert_eq!(min.wall_ms, 0);
    assert_eq!(min.seq, 0);

    let any = Stamp::new(1, 0);
    assert!(any > min);
}

#[test]
fn clock_monotonic_same_millisecond() {
    let clock = MockClock::new(1000);
    let stamps = StampClock::with_clock(&clock);

    let t1 = stamps.now();
    let t2 = stamps.now();
    let t3 = stamps.now();

    assert!(t2 > t1);
    assert!(t3 > t2);
    assert_eq!(t3.wall_ms, 1000);
}

#[test]
fn clock_time_advances() {
    let clock = MockClock::new(1000);
    let stamps = StampClock::with_clock(&clock);

    let t1 = stamps.now();
    assert_eq!(t1.wall_ms, 1000);
    assert_eq!(t1.seq, 0);

    clock.advance(100);
    let t2 = stamps.now();
    assert_eq!(t2.wall_ms, 1100);
    assert_eq!(t2.seq, 0);
    assert!(t2 > t1);
}

#[test]
fn clock_time_goes_backwards() {
    let clock = MockClock::new(2000);
    let stamps = StampClock::with_clock(&clock);

    let t1 = stamps.now();
    assert_eq!(t1.wall_ms, 2000);

    // Time goes backwards
    clock.set(1000);
    let t2 = stamps.now();
    // Should maintain wall_ms and bump seq
    assert_eq!(t2.wall_ms, 2000);
    assert_eq!(t2.seq, 1);
    assert!(t2 > t1);
}

#[test]
fn clock_boxed_source_delegation() {
    let boxed: Box<dyn ClockSource> = Box::new(MockClock::new(42000));
    assert_eq!(boxed.now_ms(), 42000);

    let stamps = StampClock::with_clock(boxed);
    assert_eq!(stamps.now().wall_ms, 42000);
    assert_eq!(stamps.wall_ms(), 42000);
}

#[test]
fn stamp_serialization() {
    let stamp = Stamp::new(12345, 67);
    let json = serde_json::to_string(&stamp).unwrap();
    let parsed: Stamp = serde_json::from_str(&json).unwrap();
    assert_eq!(stamp, parsed);
}

#[test]
fn system_clock_returns_reasonable_time() {
    let clock = SystemClock;
    let now = clock.now_ms();
    // Should be after Jan 1, 2020 (1577836800000 ms)
    assert!(now > 1_577_836_800_000);
}

#[test]
fn stamp_parse_convenience_method() {
    let stamp = Stamp::parse("12345-67").unwrap();
    assert_eq!(stamp.wall_ms, 12345);
    assert_eq!(stamp.seq, 67);

    assert!(Stamp::parse("invalid").is_err());
}
