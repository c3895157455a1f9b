// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use super::Surface;
use frostwatch_core::{DerivedView, Result, ViewKind, ViewSet};
use frostwatch_exec::Widget;

/// Value box with the latest temperature
pub struct TemperatureReadout {
    surface: Surface,
    precision: usize,
}

impl TemperatureReadout {
    pub fn new(surface: Surface, precision: usize) -> Self {
        Self { surface, precision }
    }

    #[must_use]
    pub fn frame(&self, view: &DerivedView) -> Option<String> {
        let latest = view.latest.as_ref()?;
        Some(format!(
            "  {:.*} C\n  warmer than usual",
            self.precision,
            latest.value()
        ))
    }
}

impl Widget for TemperatureReadout {
    fn name(&self) -> &str {
        "temperature"
    }

    fn dependencies(&self) -> ViewSet {
        ViewKind::Latest.into()
    }

    fn render(&mut self, view: &DerivedView) -> Result<()> {
        match self.frame(view) {
            Some(frame) => self.surface.draw(self.name(), "Current Temperature", &frame),
            None => Ok(()),
        }
    }
}

/// Value box with the time of the latest reading
pub struct TimestampReadout {
    surface: Surface,
}

impl TimestampReadout {
    pub fn new(surface: Surface) -> Self {
        Self { surface }
    }

    #[must_use]
    pub fn frame(view: &DerivedView) -> Option<String> {
        let latest = view.latest.as_ref()?;
        Some(format!("  {}", latest.timestamp()))
    }
}

impl Widget for TimestampReadout {
    fn name(&self) -> &str {
        "timestamp"
    }

    fn dependencies(&self) -> ViewSet {
        ViewKind::Latest.into()
    }

    fn render(&mut self, view: &DerivedView) -> Result<()> {
        match Self::frame(view) {
            Some(frame) => self
                .surface
                .draw(self.name(), "Current Date and Time", &frame),
            None => Ok(()),
        }
    }
}
