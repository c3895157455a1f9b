// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Fixed-capacity, insertion-ordered history of readings.
//!
//! The [`HistoryBuffer`] is owned by whoever drives the refresh pipeline.
//! Everyone else observes it through [`Snapshot`]s, which are immutable and
//! cheap to clone.
//!
//! ```
//! use core::num::NonZeroUsize;
//! use frostwatch_core::{HistoryBuffer, Reading};
//!
//! let capacity = NonZeroUsize::new(2).unwrap();
//! let mut history = HistoryBuffer::new(capacity);
//!
//! history.append(Reading::new(-17.1, "2025-01-01 00:00:01"));
//! history.append(Reading::new(-17.2, "2025-01-01 00:00:02"));
//! let evicted = history.append(Reading::new(-17.3, "2025-01-01 00:00:03"));
//!
//! assert_eq!(evicted.map(|r| r.value()), Some(-17.1));
//! let snapshot = history.snapshot();
//! assert_eq!(snapshot.len(), 2);
//! assert_eq!(snapshot.first_sequence(), 2);
//! ```

use crate::Reading;
use core::num::NonZeroUsize;
use std::collections::VecDeque;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct HistoryBuffer {
    readings: VecDeque<Reading>,
    capacity: NonZeroUsize,
    total_appended: u64,
}

impl HistoryBuffer {
    #[must_use]
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            readings: VecDeque::with_capacity(capacity.get()),
            capacity,
            total_appended: 0,
        }
    }

    /// Append a reading, evicting and returning the oldest one once the buffer is full.
    pub fn append(&mut self, reading: Reading) -> Option<Reading> {
        let evicted = if self.readings.len() == self.capacity.get() {
            self.readings.pop_front()
        } else {
            None
        };

        self.readings.push_back(reading);
        self.total_appended += 1;
        evicted
    }

    /// Copy of the current contents, oldest first.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            readings: self.readings.iter().cloned().collect(),
            first_sequence: self.first_sequence(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    #[must_use]
    pub const fn capacity(&self) -> NonZeroUsize {
        self.capacity
    }

    /// Number of readings appended since construction, evicted ones included.
    #[must_use]
    pub const fn total_appended(&self) -> u64 {
        self.total_appended
    }

    fn first_sequence(&self) -> u64 {
        self.total_appended - self.readings.len() as u64 + 1
    }
}

/// Immutable view of a [`HistoryBuffer`] at one point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    readings: Arc<[Reading]>,
    first_sequence: u64,
}

impl Snapshot {
    #[must_use]
    pub fn readings(&self) -> &[Reading] {
        &self.readings
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Reading> {
        self.readings.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Reading> {
        self.readings.iter()
    }

    /// 1-based sequence number of the oldest reading in the snapshot.
    #[must_use]
    pub const fn first_sequence(&self) -> u64 {
        self.first_sequence
    }

    /// `(index, value)` pairs with the index counted from the oldest reading.
    #[must_use]
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.readings
            .iter()
            .enumerate()
            .map(|(index, reading)| (index as f64, reading.value()))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Snapshot {
    type Item = &'a Reading;
    type IntoIter = core::slice::Iter<'a, Reading>;

    fn into_iter(self) -> Self::IntoIter {
        self.readings.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capacity(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).expect("non-zero capacity")
    }

    #[test]
    fn test_first_sequence_of_empty_buffer_points_past_the_end() {
        let history = HistoryBuffer::new(capacity(3));
        assert_eq!(history.first_sequence(), 1);
    }

    #[test]
    fn test_first_sequence_tracks_evictions() {
        let mut history = HistoryBuffer::new(capacity(2));
        for i in 0..5 {
            history.append(Reading::new(f64::from(i), format!("t{i}")));
        }
        assert_eq!(history.first_sequence(), 4);
    }
}
