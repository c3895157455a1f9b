// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Fan-out of derived views to widgets.
//!
//! A [`ViewHub`] remembers the last view it published. On every publish it
//! works out which [`ViewKind`](frostwatch_core::ViewKind)s changed and
//! re-renders only the widgets that depend on one of them.
//!
//! ## Characteristics
//!
//! - **Fine-grained**: a widget that only depends on `latest` is left alone
//!   when only the table or the trend moved.
//! - **At most once**: a widget is rendered at most once per publish, however
//!   many of its dependencies changed.
//! - **Deferred until data**: an empty view is never rendered.
//! - **Late subscribers**: a widget subscribed after a publish is rendered on
//!   the next publish even if its dependencies did not change.
//!
//! ## Example
//!
//! ```
//! use frostwatch_core::{DerivedView, Reading, ViewKind, ViewSet};
//! use frostwatch_exec::{FnWidget, ViewHub};
//! use std::sync::Arc;
//!
//! let mut hub = ViewHub::new();
//! hub.subscribe(FnWidget::new("readout", ViewSet::from(ViewKind::Latest), |_| Ok(())));
//!
//! let view = DerivedView {
//!     latest: Some(Reading::new(-17.0, "2025-01-01 00:00:00")),
//!     ..DerivedView::default()
//! };
//!
//! assert_eq!(hub.publish(Arc::new(view.clone())).rendered, 1);
//! assert_eq!(hub.publish(Arc::new(view)).rendered, 0);
//! ```

use crate::logging::{debug, warn};
use crate::Widget;
use frostwatch_core::{DerivedView, FrostwatchError, Result, ViewSet};
use std::sync::Arc;

/// Handle returned by [`ViewHub::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Subscription {
    id: SubscriptionId,
    widget: Box<dyn Widget>,
    primed: bool,
}

/// Outcome of one [`ViewHub::publish`].
#[derive(Debug, Default)]
pub struct PublishReport {
    /// Slices that differ from the previous publish.
    pub changed: ViewSet,
    /// Widgets rendered successfully.
    pub rendered: usize,
    /// Errors from widgets that failed to render.
    pub failures: Vec<FrostwatchError>,
    deferred: bool,
}

impl PublishReport {
    fn deferred() -> Self {
        Self {
            deferred: true,
            ..Self::default()
        }
    }

    /// `true` when the view was empty and nothing was rendered.
    #[must_use]
    pub const fn is_deferred(&self) -> bool {
        self.deferred
    }

    /// # Errors
    /// Returns the render failures, aggregated, if any widget failed.
    pub fn into_result(self) -> Result<usize> {
        if self.failures.is_empty() {
            Ok(self.rendered)
        } else {
            Err(FrostwatchError::from_errors(self.failures))
        }
    }
}

#[derive(Default)]
pub struct ViewHub {
    subscriptions: Vec<Subscription>,
    previous: Option<Arc<DerivedView>>,
    next_id: u64,
}

impl ViewHub {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, widget: impl Widget + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;

        debug!(
            "widget '{}' subscribed to {}",
            widget.name(),
            widget.dependencies()
        );
        self.subscriptions.push(Subscription {
            id,
            widget: Box::new(widget),
            primed: false,
        });
        id
    }

    /// Remove a widget. Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|subscription| subscription.id != id);
        self.subscriptions.len() != before
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    /// The last view that was actually published.
    #[must_use]
    pub fn current(&self) -> Option<&Arc<DerivedView>> {
        self.previous.as_ref()
    }

    /// Re-render the widgets whose dependencies changed since the last publish.
    pub fn publish(&mut self, view: Arc<DerivedView>) -> PublishReport {
        if view.is_empty() {
            debug!("deferring publish of an empty view");
            return PublishReport::deferred();
        }

        let changed = view.changed_since(self.previous.as_deref());
        let mut report = PublishReport {
            changed,
            ..PublishReport::default()
        };

        for subscription in &mut self.subscriptions {
            let dependencies = subscription.widget.dependencies();
            if subscription.primed && !dependencies.intersects(changed) {
                continue;
            }

            match subscription.widget.render(&view) {
                Ok(()) => report.rendered += 1,
                Err(error) => {
                    warn!(
                        "widget '{}' failed to render: {}",
                        subscription.widget.name(),
                        error
                    );
                    report.failures.push(error);
                }
            }
            subscription.primed = true;
        }

        self.previous = Some(view);
        report
    }
}
