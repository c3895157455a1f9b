// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod error;
pub mod history;
pub mod reading;
pub mod source;
pub mod thermometer;
pub mod trend;
pub mod view;

pub use self::error::{FrostwatchError, IntoFrostwatchError, Result, ResultExt};
pub use self::history::{HistoryBuffer, Snapshot};
pub use self::reading::Reading;
pub use self::source::ReadingSource;
pub use self::thermometer::{SamplingRange, SimulatedThermometer, ThermometerSettings};
pub use self::trend::Trend;
pub use self::view::{DerivedView, TableRow, ViewKind, ViewSet};
