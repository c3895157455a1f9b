// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Live Antarctic temperature dashboard.
//!
//! A simulated thermometer feeds a bounded history once per interval; the
//! latest reading, the rolling table and the least-squares trend derived from
//! it are pushed to terminal widgets, each redrawn only when a view it
//! depends on changed.
//!
//! ```
//! use frostwatch::{Dashboard, DashboardConfig};
//! use frostwatch::widgets::Surface;
//!
//! let (surface, buffer) = Surface::in_memory();
//! let mut dashboard = Dashboard::build(&DashboardConfig::default(), surface).unwrap();
//!
//! dashboard.scheduler_mut().tick().unwrap();
//! assert!(buffer.contents().contains("== Current Temperature =="));
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod widgets;

pub use config::DashboardConfig;
pub use frostwatch_core::{
    DerivedView, FrostwatchError, HistoryBuffer, Reading, ReadingSource, Result, SamplingRange,
    SimulatedThermometer, Snapshot, TableRow, ThermometerSettings, Trend, ViewKind, ViewSet,
};
pub use frostwatch_exec::{
    FnWidget, PublishReport, RefreshScheduler, RunSummary, SchedulerState, SubscriptionId,
    TickReport, Timer, TokioTimer, ViewHub, ViewReader, Widget,
};

use tokio_util::sync::CancellationToken;
use widgets::{ReadingTable, Surface, TemperatureReadout, TimestampReadout, TrendChart};

/// Caption shown under the dashboard title.
pub const DESCRIPTION: &str = "A demonstration of real-time temperature readings in Antarctica.";

/// The thermometer, the scheduler and the four standard widgets wired together.
pub struct Dashboard {
    title: String,
    scheduler: RefreshScheduler<SimulatedThermometer, TokioTimer>,
}

impl Dashboard {
    /// Wire a dashboard drawing on `surface`.
    ///
    /// # Errors
    /// Returns `FrostwatchError::Config` for an invalid configuration and
    /// `FrostwatchError::Source` if the thermometer cannot be seeded.
    pub fn build(config: &DashboardConfig, surface: Surface) -> Result<Self> {
        config.validate()?;
        let settings = config.thermometer_settings()?;
        let precision = settings.precision() as usize;

        let mut hub = ViewHub::new();
        hub.subscribe(TemperatureReadout::new(surface.clone(), precision));
        hub.subscribe(TimestampReadout::new(surface.clone()));
        hub.subscribe(ReadingTable::new(surface.clone(), precision));
        hub.subscribe(TrendChart::new(surface, config.chart_height));

        let scheduler = RefreshScheduler::new(
            SimulatedThermometer::new(settings)?,
            config.capacity()?,
            config.interval()?,
            hub,
            TokioTimer,
        );

        Ok(Self {
            title: config.title.clone(),
            scheduler,
        })
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Heading printed once before the first frame.
    #[must_use]
    pub fn banner(&self) -> String {
        format!("##### {} #####\n{DESCRIPTION}\n", self.title)
    }

    #[must_use]
    pub fn scheduler(&self) -> &RefreshScheduler<SimulatedThermometer, TokioTimer> {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut RefreshScheduler<SimulatedThermometer, TokioTimer> {
        &mut self.scheduler
    }

    /// Refresh until `shutdown` is cancelled.
    pub async fn run(&mut self, shutdown: &CancellationToken) -> RunSummary {
        tracing::info!("{} dashboard running", self.title);
        self.scheduler.run(shutdown).await
    }
}
