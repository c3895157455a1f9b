// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{Reading, Result};

/// Produces one reading per refresh tick.
///
/// Implementations may read the clock and a random source; a failure is
/// reported as an error and only affects the tick that asked for the reading.
pub trait ReadingSource: Send {
    /// Produce the next reading.
    ///
    /// # Errors
    /// Returns `FrostwatchError::Source` when the clock or the random source fails.
    fn next_reading(&mut self) -> Result<Reading>;
}

impl<S: ReadingSource + ?Sized> ReadingSource for Box<S> {
    fn next_reading(&mut self) -> Result<Reading> {
        (**self).next_reading()
    }
}
