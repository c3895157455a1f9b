// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Simulated temperature sensor.
//!
//! Each call samples a value uniformly from a fixed range, rounds it to a
//! fixed number of decimals and stamps it with the local wall-clock time.
//!
//! ```
//! use frostwatch_core::{ReadingSource, SamplingRange, SimulatedThermometer, ThermometerSettings};
//!
//! let range = SamplingRange::new(-18.0, -16.0).unwrap();
//! let settings = ThermometerSettings::new(range, 1, "%Y-%m-%d %H:%M:%S").unwrap();
//! let mut thermometer = SimulatedThermometer::seeded(settings, 7);
//!
//! let reading = thermometer.next_reading().unwrap();
//! assert!((-18.0..=-16.0).contains(&reading.value()));
//! assert_eq!(reading.timestamp().len(), 19);
//! ```

use crate::{FrostwatchError, IntoFrostwatchError, Reading, ReadingSource, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::Local;
use core::fmt::Write as _;
use rand::distr::Uniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const MAX_PRECISION: u32 = 9;

/// Closed interval values are sampled from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingRange {
    min: f64,
    max: f64,
}

impl SamplingRange {
    /// # Errors
    /// Returns `FrostwatchError::Config` for non-finite bounds, `min > max`
    /// or a span too wide to represent.
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(FrostwatchError::config_error(format!(
                "sampling bounds must be finite, got [{min}, {max}]"
            )));
        }
        if min > max {
            return Err(FrostwatchError::config_error(format!(
                "sampling minimum {min} exceeds maximum {max}"
            )));
        }
        if !(max - min).is_finite() {
            return Err(FrostwatchError::config_error(format!(
                "sampling range [{min}, {max}] is too wide"
            )));
        }
        Ok(Self { min, max })
    }

    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Validated parameters of a [`SimulatedThermometer`].
#[derive(Debug, Clone, PartialEq)]
pub struct ThermometerSettings {
    range: SamplingRange,
    precision: u32,
    timestamp_format: String,
}

impl ThermometerSettings {
    /// # Errors
    /// Returns `FrostwatchError::Config` when the precision is above nine
    /// decimals or the timestamp format is not a valid strftime pattern.
    pub fn new(
        range: SamplingRange,
        precision: u32,
        timestamp_format: impl Into<String>,
    ) -> Result<Self> {
        let timestamp_format = timestamp_format.into();

        if precision > MAX_PRECISION {
            return Err(FrostwatchError::config_error(format!(
                "precision {precision} exceeds {MAX_PRECISION} decimal places"
            )));
        }
        if StrftimeItems::new(&timestamp_format).any(|item| matches!(item, Item::Error)) {
            return Err(FrostwatchError::config_error(format!(
                "invalid timestamp format '{timestamp_format}'"
            )));
        }

        Ok(Self {
            range,
            precision,
            timestamp_format,
        })
    }

    #[must_use]
    pub const fn range(&self) -> SamplingRange {
        self.range
    }

    #[must_use]
    pub const fn precision(&self) -> u32 {
        self.precision
    }

    #[must_use]
    pub fn timestamp_format(&self) -> &str {
        &self.timestamp_format
    }

    /// Round half away from zero to the configured number of decimals.
    #[must_use]
    pub fn round(&self, value: f64) -> f64 {
        let scale = 10f64.powi(self.precision as i32);
        (value * scale).round() / scale
    }
}

/// Reading source backed by a random number generator and the local clock.
#[derive(Debug)]
pub struct SimulatedThermometer<R = StdRng> {
    settings: ThermometerSettings,
    rng: R,
}

impl SimulatedThermometer<StdRng> {
    /// Thermometer seeded from the operating system.
    ///
    /// # Errors
    /// Returns `FrostwatchError::Source` if the OS entropy source is unavailable.
    pub fn new(settings: ThermometerSettings) -> Result<Self> {
        let rng = StdRng::try_from_os_rng()
            .map_err(|e| e.into_frostwatch_error("cannot seed generator"))?;
        Ok(Self { settings, rng })
    }

    /// Deterministic thermometer, used for reproducible runs.
    #[must_use]
    pub fn seeded(settings: ThermometerSettings, seed: u64) -> Self {
        Self {
            settings,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> SimulatedThermometer<R> {
    /// Thermometer drawing from a caller-supplied generator.
    pub fn with_rng(settings: ThermometerSettings, rng: R) -> Self {
        Self { settings, rng }
    }

    #[must_use]
    pub const fn settings(&self) -> &ThermometerSettings {
        &self.settings
    }

    fn sample(&mut self) -> Result<f64> {
        let range = self.settings.range;
        let uniform = Uniform::new_inclusive(range.min, range.max)
            .map_err(|e| e.into_frostwatch_error("cannot sample range"))?;
        let raw = self.rng.sample(uniform);
        let value = self.settings.round(raw);

        if value.is_finite() {
            Ok(value)
        } else {
            Err(FrostwatchError::source_error(format!(
                "generator produced non-finite value {raw}"
            )))
        }
    }

    fn timestamp(&self) -> Result<String> {
        let mut timestamp = String::with_capacity(self.settings.timestamp_format.len() + 8);
        write!(
            timestamp,
            "{}",
            Local::now().format(&self.settings.timestamp_format)
        )
        .map_err(|_| FrostwatchError::source_error("cannot format clock reading"))?;
        Ok(timestamp)
    }
}

impl<R: Rng + Send> ReadingSource for SimulatedThermometer<R> {
    fn next_reading(&mut self) -> Result<Reading> {
        let value = self.sample()?;
        let timestamp = self.timestamp()?;
        Ok(Reading::new(value, timestamp))
    }
}
