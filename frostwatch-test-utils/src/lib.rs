// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the frostwatch workspace.
//!
//! This crate is for tests only. It replaces the random thermometer with
//! scripted sources and the terminal widgets with widgets that record what
//! they were asked to draw.
//!
//! # Key Types
//!
//! ## `ScriptedSource`
//!
//! Yields a fixed list of readings, one per tick:
//!
//! ```rust
//! use frostwatch_core::ReadingSource;
//! use frostwatch_test_utils::ScriptedSource;
//! use frostwatch_test_utils::test_data::warming_trend;
//!
//! let mut source = ScriptedSource::new(warming_trend());
//! assert_eq!(source.next_reading().unwrap().value(), -18.0);
//! assert_eq!(source.remaining(), 3);
//! ```
//!
//! ## `RecordingWidget`
//!
//! Counts renders and keeps every view it was handed:
//!
//! ```rust
//! use frostwatch_core::{ViewKind, ViewSet};
//! use frostwatch_test_utils::RecordingWidget;
//!
//! let (widget, log) = RecordingWidget::new("readout", ViewSet::from(ViewKind::Latest));
//! assert_eq!(log.count(), 0);
//! # drop(widget);
//! ```
//!
//! # Module Organization
//!
//! - `scripted_source` - deterministic reading sources
//! - `recording` - widgets that record renders
//! - `error_injection` - sources and widgets that fail on demand
//! - `test_data` - fixture readings
//! - `helpers` - scheduler construction shortcuts

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod error_injection;
pub mod helpers;
pub mod recording;
pub mod scripted_source;
pub mod test_data;

// Re-export commonly used test utilities
pub use error_injection::{FailingSource, FailingWidget};
pub use helpers::{capacity, scheduler_with};
pub use recording::{RecordingWidget, RenderLog};
pub use scripted_source::ScriptedSource;
