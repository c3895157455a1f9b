// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use super::Surface;
use core::fmt::Write as _;
use frostwatch_core::{DerivedView, Result, ViewKind, ViewSet};
use frostwatch_exec::Widget;

/// Grid of the buffered readings, oldest first
pub struct ReadingTable {
    surface: Surface,
    precision: usize,
}

impl ReadingTable {
    pub fn new(surface: Surface, precision: usize) -> Self {
        Self { surface, precision }
    }

    #[must_use]
    pub fn frame(&self, view: &DerivedView) -> String {
        let timestamp_width = view
            .table
            .iter()
            .map(|row| row.timestamp.len())
            .max()
            .unwrap_or(0)
            .max("Timestamp".len());

        let mut frame = format!("  {:>4}  {:<timestamp_width$}  {:>8}", "#", "Timestamp", "Temp (C)");
        for row in &view.table {
            // Writing to a String cannot fail
            let _ = write!(
                frame,
                "\n  {:>4}  {:<timestamp_width$}  {:>8.*}",
                row.sequence, row.timestamp, self.precision, row.value
            );
        }
        frame
    }
}

impl Widget for ReadingTable {
    fn name(&self) -> &str {
        "table"
    }

    fn dependencies(&self) -> ViewSet {
        ViewKind::Table.into()
    }

    fn render(&mut self, view: &DerivedView) -> Result<()> {
        let frame = self.frame(view);
        self.surface.draw(self.name(), "Current Data", &frame)
    }
}
