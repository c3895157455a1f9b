// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::num::NonZeroUsize;
use core::time::Duration;
use frostwatch_core::ReadingSource;
use frostwatch_exec::{RefreshScheduler, TokioTimer, ViewHub};

pub const TEST_INTERVAL: Duration = Duration::from_secs(1);

/// # Panics
/// Panics when `n` is zero.
pub fn capacity(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).expect("history capacity must be non-zero")
}

/// Scheduler ticking every [`TEST_INTERVAL`] on the tokio timer.
pub fn scheduler_with<S: ReadingSource>(
    source: S,
    history_capacity: usize,
    hub: ViewHub,
) -> RefreshScheduler<S, TokioTimer> {
    RefreshScheduler::new(
        source,
        capacity(history_capacity),
        TEST_INTERVAL,
        hub,
        TokioTimer,
    )
}
