// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt;

/// One sampled temperature with the wall-clock time it was taken.
///
/// Readings are never mutated after creation; the history buffer drops them
/// when they fall out of its window.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    value: f64,
    timestamp: String,
}

impl Reading {
    pub fn new(value: f64, timestamp: impl Into<String>) -> Self {
        Self {
            value,
            timestamp: timestamp.into(),
        }
    }

    /// Temperature in degrees Celsius.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Fixed-width formatted time of generation.
    #[must_use]
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} C @ {}", self.value, self.timestamp)
    }
}
