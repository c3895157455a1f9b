// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use super::Surface;
use frostwatch_core::{DerivedView, Result, Trend, ViewKind, ViewSet};
use frostwatch_exec::Widget;

const POINT: char = '*';
const LINE: char = '-';
const COLUMN_WIDTH: usize = 3;

/// Scatter plot of the buffered readings with the fitted trend overlaid.
///
/// Rows run from the warmest value at the top to the coldest at the bottom;
/// a reading hides the trend where both land on the same cell.
pub struct TrendChart {
    surface: Surface,
    height: usize,
}

impl TrendChart {
    /// `height` is clamped to at least two rows.
    pub fn new(surface: Surface, height: usize) -> Self {
        Self {
            surface,
            height: height.max(2),
        }
    }

    #[must_use]
    pub fn frame(&self, view: &DerivedView) -> String {
        let values: Vec<f64> = view.table.iter().map(|row| row.value).collect();
        let line: Vec<f64> = view
            .trend
            .map(|trend| {
                trend
                    .fitted(values.len())
                    .into_iter()
                    .map(|(_, y)| y)
                    .collect()
            })
            .unwrap_or_default();

        let (low, high) = bounds(values.iter().chain(&line).copied());
        let row_of = |y: f64| -> usize {
            let scaled = (high - y) / (high - low) * (self.height - 1) as f64;
            (scaled.round().max(0.0) as usize).min(self.height - 1)
        };

        let mut grid = vec![vec![' '; values.len() * COLUMN_WIDTH]; self.height];
        for (x, y) in line.iter().enumerate() {
            grid[row_of(*y)][x * COLUMN_WIDTH + 1] = LINE;
        }
        for (x, y) in values.iter().enumerate() {
            grid[row_of(*y)][x * COLUMN_WIDTH + 1] = POINT;
        }

        let mut rows = Vec::with_capacity(self.height + 1);
        for (index, cells) in grid.into_iter().enumerate() {
            let label = if index == 0 {
                format!("{high:>7.2}")
            } else if index == self.height - 1 {
                format!("{low:>7.2}")
            } else {
                " ".repeat(7)
            };
            let cells: String = cells.into_iter().collect();
            rows.push(format!("{label} |{}", cells.trim_end()));
        }
        rows.push(legend(view.trend));
        rows.join("\n")
    }
}

fn bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (low, high) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(low, high), v| {
        (low.min(v), high.max(v))
    });

    if !low.is_finite() || !high.is_finite() {
        (0.0, 1.0)
    } else if high - low < f64::EPSILON {
        (low - 0.5, high + 0.5)
    } else {
        (low, high)
    }
}

fn legend(trend: Option<Trend>) -> String {
    match trend {
        Some(trend) => format!(
            "        trend: y = {:.3}x {} {:.3}",
            trend.slope,
            if trend.intercept < 0.0 { '-' } else { '+' },
            trend.intercept.abs()
        ),
        None => "        trend: needs at least 2 readings".to_owned(),
    }
}

impl Widget for TrendChart {
    fn name(&self) -> &str {
        "chart"
    }

    fn dependencies(&self) -> ViewSet {
        ViewSet::of(&[ViewKind::Table, ViewKind::Trend])
    }

    fn render(&mut self, view: &DerivedView) -> Result<()> {
        let frame = self.frame(view);
        self.surface.draw(self.name(), "Current Chart", &frame)
    }
}
