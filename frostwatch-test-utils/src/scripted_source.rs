// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use frostwatch_core::{FrostwatchError, Reading, ReadingSource, Result};
use std::collections::VecDeque;

/// Source that replays a fixed list of readings.
///
/// Once the script runs out every call fails with a source error, which a
/// scheduler treats like any other failed tick.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    script: VecDeque<Reading>,
    repeat_last: bool,
    last: Option<Reading>,
}

impl ScriptedSource {
    pub fn new(readings: impl IntoIterator<Item = Reading>) -> Self {
        Self {
            script: readings.into_iter().collect(),
            repeat_last: false,
            last: None,
        }
    }

    /// Keep returning the final reading after the script ran out.
    #[must_use]
    pub fn repeating_last(mut self) -> Self {
        self.repeat_last = true;
        self
    }

    /// Always return the same reading.
    pub fn constant(reading: Reading) -> Self {
        Self::new([reading]).repeating_last()
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl ReadingSource for ScriptedSource {
    fn next_reading(&mut self) -> Result<Reading> {
        if let Some(reading) = self.script.pop_front() {
            self.last = Some(reading.clone());
            return Ok(reading);
        }

        match (&self.last, self.repeat_last) {
            (Some(last), true) => Ok(last.clone()),
            _ => Err(FrostwatchError::source_error("script exhausted")),
        }
    }
}
