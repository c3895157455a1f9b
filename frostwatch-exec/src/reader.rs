// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use frostwatch_core::{DerivedView, Reading, TableRow, Trend};
use parking_lot::RwLock;
use std::sync::Arc;

/// Cheap, cloneable read access to the most recently published view.
///
/// The scheduler swaps the whole view at the end of a tick, so pollers see
/// either the previous tick or the current one, never a mix of both.
#[derive(Clone, Debug, Default)]
pub struct ViewReader {
    current: Arc<RwLock<Option<Arc<DerivedView>>>>,
}

impl ViewReader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn replace(&self, view: Arc<DerivedView>) {
        *self.current.write() = Some(view);
    }

    /// Whole view, or `None` before the first reading.
    #[must_use]
    pub fn view(&self) -> Option<Arc<DerivedView>> {
        self.current.read().clone()
    }

    #[must_use]
    pub fn latest(&self) -> Option<Reading> {
        self.current.read().as_ref().and_then(|view| view.latest.clone())
    }

    /// Rows oldest first; empty before the first reading.
    #[must_use]
    pub fn table(&self) -> Vec<TableRow> {
        self.current
            .read()
            .as_ref()
            .map(|view| view.table.clone())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn trend(&self) -> Option<Trend> {
        self.current.read().as_ref().and_then(|view| view.trend)
    }
}
