// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Terminal widgets drawing the derived views as plain-text frames.

mod chart;
mod readout;
mod surface;
mod table;

pub use chart::TrendChart;
pub use readout::{TemperatureReadout, TimestampReadout};
pub use surface::{SharedBuffer, Surface};
pub use table::ReadingTable;
