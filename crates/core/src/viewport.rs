// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Viewport classification for responsive clients.
//!
//! Pure functions over a viewport width/height pair in CSS pixels. No
//! state, no side effects.
//!
//! Thresholds:
//! - device: width <= 768 phone, <= 1024 tablet, else desktop
//! - breakpoint: sm < 640, md < 768, lg < 1024, xl >= 1024

use serde::{Deserialize, Serialize};
use std::fmt;

/// Device class derived from viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceClass {
    Phone,
    Tablet,
    Desktop,
}

impl DeviceClass {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceClass::Phone => "phone",
            DeviceClass::Tablet => "tablet",
            DeviceClass::Desktop => "desktop",
        }
    }
}

impl fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Viewport orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Portrait => "portrait",
            Orientation::Landscape => "landscape",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Width breakpoint buckets for layout decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Breakpoint {
    Sm,
    Md,
    Lg,
    Xl,
}

impl Breakpoint {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Device class and orientation for one viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewportClass {
    pub device: DeviceClass,
    pub orientation: Orientation,
}

/// Classifies a viewport by fixed width thresholds.
pub fn classify(width: u32, height: u32) -> ViewportClass {
    let device = if width <= 768 {
        DeviceClass::Phone
    } else if width <= 1024 {
        DeviceClass::Tablet
    } else {
        DeviceClass::Desktop
    };

    let orientation = if width > height { Orientation::Landscape } else { Orientation::Portrait };

    ViewportClass { device, orientation }
}

/// Maps a viewport width to its breakpoint bucket.
pub fn breakpoint(width: u32) -> Breakpoint {
    if width < 640 {
        Breakpoint::Sm
    } else if width < 768 {
        Breakpoint::Md
    } else if width < 1024 {
        Breakpoint::Lg
    } else {
        Breakpoint::Xl
    }
}

#[cfg(test)]
#[path = "viewport_tests.rs"]
mod tests;
