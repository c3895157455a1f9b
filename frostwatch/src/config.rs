// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::num::NonZeroUsize;
use core::time::Duration;
use frostwatch_core::{FrostwatchError, Result, ResultExt, SamplingRange, ThermometerSettings};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const EMBEDDED: &str = include_str!("../frostwatch.toml");

/// Complete dashboard configuration, fixed for the lifetime of the process
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    pub title: String,
    pub refresh_interval_ms: u64,
    pub history_capacity: usize,
    pub value_min: f64,
    pub value_max: f64,
    pub precision: u32,
    pub timestamp_format: String,
    pub chart_height: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: "Antarctic Explorer".to_owned(),
            refresh_interval_ms: 1000,
            history_capacity: 5,
            value_min: -18.0,
            value_max: -16.0,
            precision: 1,
            timestamp_format: "%Y-%m-%d %H:%M:%S".to_owned(),
            chart_height: 8,
        }
    }
}

impl DashboardConfig {
    /// Load configuration from a TOML file. A missing file yields the
    /// defaults so the dashboard always starts.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::warn!(
                "config file not found at '{}'; using defaults",
                path.display()
            );
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path).map_err(|e| {
            FrostwatchError::config_error(format!("cannot read '{}': {e}", path.display()))
        })?;
        Self::from_toml_str(&raw).with_context(|| format!("'{}'", path.display()))
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw)
            .map_err(|e| FrostwatchError::config_error(format!("TOML parse error: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// The commented configuration shipped with the crate
    pub fn embedded() -> Result<Self> {
        Self::from_toml_str(EMBEDDED)
    }

    /// Check every value can be turned into its runtime type
    pub fn validate(&self) -> Result<()> {
        self.interval()?;
        self.capacity()?;
        self.thermometer_settings()?;
        if self.chart_height < 2 {
            return Err(FrostwatchError::config_error(format!(
                "chart_height must be at least 2, got {}",
                self.chart_height
            )));
        }
        Ok(())
    }

    pub fn interval(&self) -> Result<Duration> {
        if self.refresh_interval_ms == 0 {
            return Err(FrostwatchError::config_error(
                "refresh_interval_ms must be greater than 0",
            ));
        }
        Ok(Duration::from_millis(self.refresh_interval_ms))
    }

    pub fn capacity(&self) -> Result<NonZeroUsize> {
        NonZeroUsize::new(self.history_capacity)
            .ok_or_else(|| FrostwatchError::config_error("history_capacity must be at least 1"))
    }

    pub fn thermometer_settings(&self) -> Result<ThermometerSettings> {
        let range = SamplingRange::new(self.value_min, self.value_max)?;
        ThermometerSettings::new(range, self.precision, self.timestamp_format.clone())
    }

    /// `FROSTWATCH_CONFIG`, else `$XDG_CONFIG_HOME/frostwatch/frostwatch.toml`,
    /// else `$HOME/.config/frostwatch/frostwatch.toml`.
    pub fn default_path() -> PathBuf {
        if let Ok(explicit) = std::env::var("FROSTWATCH_CONFIG") {
            return PathBuf::from(explicit);
        }

        let base = std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
                PathBuf::from(home).join(".config")
            });
        base.join("frostwatch").join("frostwatch.toml")
    }
}
