// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::num::NonZeroUsize;
use frostwatch::widgets::{ReadingTable, Surface, TemperatureReadout, TimestampReadout, TrendChart};
use frostwatch::{DerivedView, FrostwatchError, HistoryBuffer, Reading, ViewKind, ViewSet, Widget};
use frostwatch_test_utils::test_data::{reading, reading_t1, reading_t2, reading_t3};
use std::io;

fn view_of(readings: impl IntoIterator<Item = Reading>) -> DerivedView {
    let mut history = HistoryBuffer::new(NonZeroUsize::new(5).expect("non-zero"));
    for reading in readings {
        history.append(reading);
    }
    DerivedView::build(&history.snapshot())
}

struct BrokenPipe;

impl io::Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "terminal closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_temperature_readout_draws_latest_value() -> anyhow::Result<()> {
    // Arrange
    let (surface, buffer) = Surface::in_memory();
    let mut widget = TemperatureReadout::new(surface, 1);

    // Act
    widget.render(&view_of([reading_t1(), reading_t2()]))?;

    // Assert
    assert_eq!(
        buffer.contents(),
        "== Current Temperature ==\n  -17.0 C\n  warmer than usual\n"
    );
    Ok(())
}

#[test]
fn test_temperature_readout_respects_precision() {
    let (surface, _buffer) = Surface::in_memory();
    let widget = TemperatureReadout::new(surface, 2);

    let frame = widget.frame(&view_of([reading(-16.5, "t")]));

    assert_eq!(frame.as_deref(), Some("  -16.50 C\n  warmer than usual"));
}

#[test]
fn test_timestamp_readout_draws_latest_timestamp() -> anyhow::Result<()> {
    let (surface, buffer) = Surface::in_memory();
    let mut widget = TimestampReadout::new(surface);

    widget.render(&view_of([reading_t1(), reading_t3()]))?;

    assert_eq!(
        buffer.contents(),
        "== Current Date and Time ==\n  2025-01-01 12:00:03\n"
    );
    Ok(())
}

#[test]
fn test_readouts_draw_nothing_for_empty_view() -> anyhow::Result<()> {
    let (surface, buffer) = Surface::in_memory();
    let mut temperature = TemperatureReadout::new(surface.clone(), 1);
    let mut timestamp = TimestampReadout::new(surface);

    temperature.render(&DerivedView::default())?;
    timestamp.render(&DerivedView::default())?;

    assert!(buffer.contents().is_empty());
    Ok(())
}

#[test]
fn test_table_lists_rows_oldest_first() {
    // Arrange
    let (surface, _buffer) = Surface::in_memory();
    let table = ReadingTable::new(surface, 1);

    // Act
    let frame = table.frame(&view_of([reading_t1(), reading_t2(), reading_t3()]));
    let lines: Vec<&str> = frame.lines().collect();

    // Assert
    assert_eq!(lines.len(), 4);
    assert!(lines[0].contains("Timestamp"));
    assert!(lines[0].ends_with("Temp (C)"));
    assert_eq!(lines[1], "     1  2025-01-01 12:00:01     -18.0");
    assert_eq!(lines[2], "     2  2025-01-01 12:00:02     -17.0");
    assert_eq!(lines[3], "     3  2025-01-01 12:00:03     -16.0");
}

#[test]
fn test_table_keeps_sequence_numbers_after_eviction() {
    let (surface, _buffer) = Surface::in_memory();
    let table = ReadingTable::new(surface, 1);
    let mut history = HistoryBuffer::new(NonZeroUsize::new(2).expect("non-zero"));
    for reading in [reading_t1(), reading_t2(), reading_t3()] {
        history.append(reading);
    }

    let frame = table.frame(&DerivedView::build(&history.snapshot()));

    let sequences: Vec<&str> = frame
        .lines()
        .skip(1)
        .filter_map(|line| line.split_whitespace().next())
        .collect();
    assert_eq!(sequences, ["2", "3"]);
}

#[test]
fn test_chart_plots_points_and_equation() {
    // Arrange
    let (surface, _buffer) = Surface::in_memory();
    let chart = TrendChart::new(surface, 3);

    // Act
    let frame = chart.frame(&view_of([reading_t1(), reading_t2(), reading_t3()]));
    let lines: Vec<&str> = frame.lines().collect();

    // Assert
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], " -16.00 |       *");
    assert_eq!(lines[1], "        |    *");
    assert_eq!(lines[2], " -18.00 | *");
    assert_eq!(lines[3], "        trend: y = 1.000x - 18.000");
}

#[test]
fn test_chart_draws_trend_line_between_scattered_points() {
    let (surface, _buffer) = Surface::in_memory();
    let chart = TrendChart::new(surface, 9);

    let frame = chart.frame(&view_of([
        reading(-18.0, "a"),
        reading(-16.0, "b"),
        reading(-18.0, "c"),
        reading(-16.0, "d"),
    ]));

    let plotted: Vec<&str> = frame
        .lines()
        .filter_map(|line| line.split_once('|').map(|(_, cells)| cells))
        .collect();
    assert_eq!(plotted.iter().map(|cells| cells.matches('*').count()).sum::<usize>(), 4);
    assert_eq!(plotted.iter().map(|cells| cells.matches('-').count()).sum::<usize>(), 4);
    assert!(frame.ends_with("trend: y = 0.400x - 17.600"));
}

#[test]
fn test_chart_equation_signs_follow_coefficients() {
    let (surface, _buffer) = Surface::in_memory();
    let chart = TrendChart::new(surface, 4);

    let frame = chart.frame(&view_of([reading(5.0, "a"), reading(4.0, "b")]));

    assert!(frame.ends_with("trend: y = -1.000x + 5.000"), "{frame}");
}

#[test]
fn test_chart_with_single_reading_has_no_trend() {
    let (surface, _buffer) = Surface::in_memory();
    let chart = TrendChart::new(surface, 4);

    let frame = chart.frame(&view_of([reading_t1()]));

    assert_eq!(frame.matches('*').count(), 1);
    assert!(frame.ends_with("trend: needs at least 2 readings"));
}

#[test]
fn test_chart_height_is_clamped() {
    let (surface, _buffer) = Surface::in_memory();
    let chart = TrendChart::new(surface, 0);

    let frame = chart.frame(&view_of([reading_t1(), reading_t2()]));

    assert_eq!(frame.lines().count(), 3);
}

#[test]
fn test_widget_dependencies() {
    let (surface, _buffer) = Surface::in_memory();

    assert_eq!(
        TemperatureReadout::new(surface.clone(), 1).dependencies(),
        ViewSet::from(ViewKind::Latest)
    );
    assert_eq!(
        TimestampReadout::new(surface.clone()).dependencies(),
        ViewSet::from(ViewKind::Latest)
    );
    assert_eq!(
        ReadingTable::new(surface.clone(), 1).dependencies(),
        ViewSet::from(ViewKind::Table)
    );
    assert_eq!(
        TrendChart::new(surface, 8).dependencies(),
        ViewSet::of(&[ViewKind::Table, ViewKind::Trend])
    );
}

#[test]
fn test_write_failure_is_a_render_error() {
    // Arrange
    let mut widget = ReadingTable::new(Surface::new(BrokenPipe), 1);

    // Act
    let result = widget.render(&view_of([reading_t1()]));

    // Assert
    match result {
        Err(FrostwatchError::Render { widget, .. }) => assert_eq!(widget, "table"),
        other => panic!("expected a render error, got {other:?}"),
    }
}
