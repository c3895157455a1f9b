// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use frostwatch_core::{DerivedView, Result, ViewSet};
use frostwatch_exec::Widget;
use parking_lot::Mutex;
use std::sync::Arc;

/// Widget that keeps a copy of every view it renders.
pub struct RecordingWidget {
    name: String,
    dependencies: ViewSet,
    log: RenderLog,
}

impl RecordingWidget {
    /// Returns the widget together with a handle to inspect its renders
    /// after it has been moved into a hub.
    pub fn new(name: impl Into<String>, dependencies: ViewSet) -> (Self, RenderLog) {
        let log = RenderLog::default();
        let widget = Self {
            name: name.into(),
            dependencies,
            log: log.clone(),
        };
        (widget, log)
    }
}

impl Widget for RecordingWidget {
    fn name(&self) -> &str {
        &self.name
    }

    fn dependencies(&self) -> ViewSet {
        self.dependencies
    }

    fn render(&mut self, view: &DerivedView) -> Result<()> {
        self.log.views.lock().push(view.clone());
        Ok(())
    }
}

/// Shared record of the views a [`RecordingWidget`] rendered.
#[derive(Clone, Default)]
pub struct RenderLog {
    views: Arc<Mutex<Vec<DerivedView>>>,
}

impl RenderLog {
    #[must_use]
    pub fn count(&self) -> usize {
        self.views.lock().len()
    }

    #[must_use]
    pub fn views(&self) -> Vec<DerivedView> {
        self.views.lock().clone()
    }

    #[must_use]
    pub fn last(&self) -> Option<DerivedView> {
        self.views.lock().last().cloned()
    }

    pub fn clear(&self) {
        self.views.lock().clear();
    }
}
