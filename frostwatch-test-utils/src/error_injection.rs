// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities for failure injection.
//!
//! Wrappers that make a source or a widget fail at chosen calls, for testing
//! that a failure stays local to the tick that hit it.
//!
//! ```rust
//! use frostwatch_core::ReadingSource;
//! use frostwatch_test_utils::{FailingSource, ScriptedSource};
//! use frostwatch_test_utils::test_data::warming_trend;
//!
//! let mut source = FailingSource::new(ScriptedSource::new(warming_trend()), [1]);
//!
//! assert!(source.next_reading().is_ok());
//! assert!(source.next_reading().is_err());
//! // The scripted reading skipped by the failure is still delivered next
//! assert_eq!(source.next_reading().unwrap().value(), -17.0);
//! ```

use frostwatch_core::{DerivedView, FrostwatchError, Reading, ReadingSource, Result, ViewSet};
use frostwatch_exec::Widget;
use std::collections::BTreeSet;

/// Source wrapper that fails on the given 0-based call numbers.
pub struct FailingSource<S> {
    inner: S,
    fail_at: BTreeSet<usize>,
    calls: usize,
}

impl<S> FailingSource<S> {
    pub fn new(inner: S, fail_at: impl IntoIterator<Item = usize>) -> Self {
        Self {
            inner,
            fail_at: fail_at.into_iter().collect(),
            calls: 0,
        }
    }
}

impl<S: ReadingSource> ReadingSource for FailingSource<S> {
    fn next_reading(&mut self) -> Result<Reading> {
        let call = self.calls;
        self.calls += 1;

        if self.fail_at.contains(&call) {
            return Err(FrostwatchError::source_error(format!(
                "injected failure on call {call}"
            )));
        }
        self.inner.next_reading()
    }
}

/// Widget that fails every render.
pub struct FailingWidget {
    name: String,
    dependencies: ViewSet,
}

impl FailingWidget {
    pub fn new(name: impl Into<String>, dependencies: ViewSet) -> Self {
        Self {
            name: name.into(),
            dependencies,
        }
    }
}

impl Widget for FailingWidget {
    fn name(&self) -> &str {
        &self.name
    }

    fn dependencies(&self) -> ViewSet {
        self.dependencies
    }

    fn render(&mut self, _view: &DerivedView) -> Result<()> {
        Err(FrostwatchError::render_error(&self.name, "injected render failure"))
    }
}
