// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Timer-driven refresh pipeline.
//!
//! Each tick runs `source -> history -> derived view -> widgets` to completion
//! before the next sleep is scheduled, so two ticks never overlap and nobody
//! can observe the history mid-mutation.
//!
//! ```
//! use core::num::NonZeroUsize;
//! use core::time::Duration;
//! use frostwatch_core::{SamplingRange, SimulatedThermometer, ThermometerSettings};
//! use frostwatch_exec::{RefreshScheduler, SchedulerState, TokioTimer, ViewHub};
//! use tokio_util::sync::CancellationToken;
//!
//! # #[tokio::main(flavor = "current_thread", start_paused = true)]
//! # async fn main() {
//! let range = SamplingRange::new(-18.0, -16.0).unwrap();
//! let settings = ThermometerSettings::new(range, 1, "%H:%M:%S").unwrap();
//! let mut scheduler = RefreshScheduler::new(
//!     SimulatedThermometer::seeded(settings, 3),
//!     NonZeroUsize::new(5).unwrap(),
//!     Duration::from_secs(1),
//!     ViewHub::new(),
//!     TokioTimer,
//! );
//!
//! let shutdown = CancellationToken::new();
//! let stopper = shutdown.clone();
//! tokio::spawn(async move {
//!     tokio::time::sleep(Duration::from_millis(3500)).await;
//!     stopper.cancel();
//! });
//!
//! let summary = scheduler.run(&shutdown).await;
//! assert_eq!(summary.ticks, 3);
//! assert_eq!(scheduler.state(), SchedulerState::Stopped);
//! assert_eq!(scheduler.table().len(), 3);
//! # }
//! ```

use crate::logging::{debug, info, warn};
use crate::{Timer, ViewHub, ViewReader};
use core::fmt;
use core::num::NonZeroUsize;
use core::time::Duration;
use frostwatch_core::{
    DerivedView, HistoryBuffer, Reading, ReadingSource, Result, Snapshot,
    TableRow, Trend, ViewSet,
};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Lifecycle of a [`RefreshScheduler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    /// Constructed, never started.
    Idle,
    /// Waiting for the next wakeup.
    Armed,
    /// Running a tick.
    Firing,
    /// Shut down; terminal.
    Stopped,
}

impl fmt::Display for SchedulerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Armed => write!(f, "armed"),
            Self::Firing => write!(f, "firing"),
            Self::Stopped => write!(f, "stopped"),
        }
    }
}

/// What a successful tick did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickReport {
    /// 1-based number of the tick.
    pub tick: u64,
    pub changed: ViewSet,
    pub rendered: usize,
    pub failed_renders: usize,
    /// Whether the append pushed the oldest reading out of the window.
    pub evicted: bool,
}

/// Totals of a [`RefreshScheduler::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub ticks: u64,
    pub failed_ticks: u64,
}

pub struct RefreshScheduler<S, T> {
    source: S,
    history: HistoryBuffer,
    hub: ViewHub,
    reader: ViewReader,
    timer: T,
    interval: Duration,
    state: SchedulerState,
    ticks: u64,
}

impl<S, T> RefreshScheduler<S, T>
where
    S: ReadingSource,
    T: Timer,
{
    pub fn new(
        source: S,
        capacity: NonZeroUsize,
        interval: Duration,
        hub: ViewHub,
        timer: T,
    ) -> Self {
        Self {
            source,
            history: HistoryBuffer::new(capacity),
            hub,
            reader: ViewReader::new(),
            timer,
            interval,
            state: SchedulerState::Idle,
            ticks: 0,
        }
    }

    /// Run one refresh pipeline.
    ///
    /// # Errors
    /// Returns the source error when no reading could be produced; history,
    /// views and widgets are left as they were.
    pub fn tick(&mut self) -> Result<TickReport> {
        let reading = self.source.next_reading()?;
        self.ticks += 1;

        let evicted = self.history.append(reading).is_some();
        let view = Arc::new(DerivedView::build(&self.history.snapshot()));
        let publish = self.hub.publish(Arc::clone(&view));
        self.reader.replace(view);

        debug!(
            "tick {} changed {} rendered {} widget(s)",
            self.ticks, publish.changed, publish.rendered
        );

        Ok(TickReport {
            tick: self.ticks,
            changed: publish.changed,
            rendered: publish.rendered,
            failed_renders: publish.failures.len(),
            evicted,
        })
    }

    /// Tick every interval until `shutdown` is cancelled.
    ///
    /// The next wakeup is scheduled only after the current tick finished. A
    /// failed tick is logged and the scheduler re-arms, unless the error is
    /// permanent. A stopped scheduler never runs again.
    pub async fn run(&mut self, shutdown: &CancellationToken) -> RunSummary {
        let mut summary = RunSummary::default();
        if self.state == SchedulerState::Stopped {
            warn!("refresh scheduler already stopped");
            return summary;
        }
        info!(
            "refresh scheduler started, interval {:?}, capacity {}",
            self.interval,
            self.history.capacity()
        );

        loop {
            self.state = SchedulerState::Armed;
            let sleep = self.timer.sleep_future(self.interval);

            tokio::select! {
                biased;
                () = shutdown.cancelled() => break,
                () = sleep => {}
            }

            self.state = SchedulerState::Firing;
            let started = self.timer.now();
            match self.tick() {
                Ok(_) => summary.ticks += 1,
                Err(error) if error.is_permanent() => {
                    summary.failed_ticks += 1;
                    warn!("refresh stopped: {}", error);
                    break;
                }
                Err(error) => {
                    summary.failed_ticks += 1;
                    warn!("tick skipped: {}", error);
                }
            }
            debug!("tick took {:?}", self.timer.now() - started);
        }

        self.state = SchedulerState::Stopped;
        info!(
            "refresh scheduler stopped after {} tick(s), {} failed",
            summary.ticks, summary.failed_ticks
        );
        summary
    }

    #[must_use]
    pub const fn state(&self) -> SchedulerState {
        self.state
    }

    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Shared handle for polling the views from elsewhere.
    #[must_use]
    pub fn views(&self) -> ViewReader {
        self.reader.clone()
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.history.snapshot()
    }

    #[must_use]
    pub fn latest(&self) -> Option<Reading> {
        self.reader.latest()
    }

    #[must_use]
    pub fn table(&self) -> Vec<TableRow> {
        self.reader.table()
    }

    #[must_use]
    pub fn trend(&self) -> Option<Trend> {
        self.reader.trend()
    }

    pub fn hub_mut(&mut self) -> &mut ViewHub {
        &mut self.hub
    }
}

impl<S, T> fmt::Debug for RefreshScheduler<S, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RefreshScheduler")
            .field("state", &self.state)
            .field("interval", &self.interval)
            .field("ticks", &self.ticks)
            .field("history_len", &self.history.len())
            .field("widgets", &self.hub.len())
            .field("timer", &self.timer)
            .finish()
    }
}
