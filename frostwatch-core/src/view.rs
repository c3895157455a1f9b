// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Views derived from a history snapshot.
//!
//! A [`DerivedView`] is rebuilt in full on every tick and has no identity
//! across ticks. Consumers decide whether to redraw by comparing the slices
//! they depend on, named by [`ViewKind`].

use crate::{Reading, Snapshot, Trend};
use core::fmt;

/// One row of the tabular view.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    /// 1-based position of the reading since the dashboard started.
    pub sequence: u64,
    pub value: f64,
    pub timestamp: String,
}

/// Latest reading, table and trend computed from one snapshot.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DerivedView {
    pub latest: Option<Reading>,
    pub table: Vec<TableRow>,
    pub trend: Option<Trend>,
}

impl DerivedView {
    #[must_use]
    pub fn build(snapshot: &Snapshot) -> Self {
        let table = snapshot
            .iter()
            .zip(snapshot.first_sequence()..)
            .map(|(reading, sequence)| TableRow {
                sequence,
                value: reading.value(),
                timestamp: reading.timestamp().to_owned(),
            })
            .collect();

        Self {
            latest: snapshot.last().cloned(),
            table,
            trend: Trend::fit(&snapshot.points()),
        }
    }

    /// `true` until the first reading exists; such a view is never rendered.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.latest.is_none()
    }

    /// Slices that differ from `previous`. Everything differs from nothing.
    #[must_use]
    pub fn changed_since(&self, previous: Option<&DerivedView>) -> ViewSet {
        let Some(previous) = previous else {
            return ViewSet::ALL;
        };

        let mut changed = ViewSet::EMPTY;
        if self.latest != previous.latest {
            changed.insert(ViewKind::Latest);
        }
        if self.table != previous.table {
            changed.insert(ViewKind::Table);
        }
        if self.trend != previous.trend {
            changed.insert(ViewKind::Trend);
        }
        changed
    }
}

/// A slice of the [`DerivedView`] a widget can depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    Latest,
    Table,
    Trend,
}

impl ViewKind {
    pub const ALL: [ViewKind; 3] = [ViewKind::Latest, ViewKind::Table, ViewKind::Trend];

    const fn bit(self) -> u8 {
        match self {
            Self::Latest => 0b001,
            Self::Table => 0b010,
            Self::Trend => 0b100,
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Latest => write!(f, "latest"),
            Self::Table => write!(f, "table"),
            Self::Trend => write!(f, "trend"),
        }
    }
}

/// Small copyable set of [`ViewKind`]s.
///
/// ```
/// use frostwatch_core::{ViewKind, ViewSet};
///
/// let chart = ViewSet::of(&[ViewKind::Table, ViewKind::Trend]);
/// assert!(chart.intersects(ViewSet::of(&[ViewKind::Trend])));
/// assert!(!chart.contains(ViewKind::Latest));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ViewSet(u8);

impl ViewSet {
    pub const EMPTY: ViewSet = ViewSet(0);
    pub const ALL: ViewSet = ViewSet(0b111);

    #[must_use]
    pub fn of(kinds: &[ViewKind]) -> Self {
        kinds.iter().fold(Self::EMPTY, |mut set, kind| {
            set.insert(*kind);
            set
        })
    }

    pub fn insert(&mut self, kind: ViewKind) {
        self.0 |= kind.bit();
    }

    #[must_use]
    pub const fn contains(self, kind: ViewKind) -> bool {
        self.0 & kind.bit() != 0
    }

    #[must_use]
    pub const fn intersects(self, other: ViewSet) -> bool {
        self.0 & other.0 != 0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = ViewKind> {
        ViewKind::ALL.into_iter().filter(move |kind| self.contains(*kind))
    }
}

impl From<ViewKind> for ViewSet {
    fn from(kind: ViewKind) -> Self {
        Self(kind.bit())
    }
}

impl fmt::Debug for ViewSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for ViewSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.iter().map(|kind| kind.to_string()).collect();
        write!(f, "[{}]", names.join(", "))
    }
}
