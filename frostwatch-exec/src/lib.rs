// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

pub mod hub;
mod logging;
pub mod reader;
pub mod scheduler;
pub mod timer;
pub mod widget;

// Re-export commonly used types
pub use hub::{PublishReport, SubscriptionId, ViewHub};
pub use reader::ViewReader;
pub use scheduler::{RefreshScheduler, RunSummary, SchedulerState, TickReport};
pub use timer::{Timer, TokioTimer};
pub use widget::{FnWidget, Widget};
