// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use frostwatch_core::{DerivedView, Result, ViewSet};

/// A display surface that redraws from the derived view.
///
/// The hub only calls [`Widget::render`] on publishes where at least one of
/// the widget's [`dependencies`](Widget::dependencies) changed.
pub trait Widget: Send {
    fn name(&self) -> &str;

    fn dependencies(&self) -> ViewSet;

    /// Redraw from `view`, which is never empty.
    ///
    /// # Errors
    /// Returns an error if the widget cannot draw; the hub logs it and carries on.
    fn render(&mut self, view: &DerivedView) -> Result<()>;
}

impl<W: Widget + ?Sized> Widget for Box<W> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn dependencies(&self) -> ViewSet {
        (**self).dependencies()
    }

    fn render(&mut self, view: &DerivedView) -> Result<()> {
        (**self).render(view)
    }
}

/// Widget backed by a closure.
///
/// ```
/// use frostwatch_core::{ViewKind, ViewSet};
/// use frostwatch_exec::{FnWidget, Widget};
///
/// let widget = FnWidget::new("readout", ViewSet::from(ViewKind::Latest), |view| {
///     if let Some(latest) = &view.latest {
///         println!("{} C", latest.value());
///     }
///     Ok(())
/// });
/// assert_eq!(widget.name(), "readout");
/// ```
pub struct FnWidget<F> {
    name: String,
    dependencies: ViewSet,
    render: F,
}

impl<F> FnWidget<F>
where
    F: FnMut(&DerivedView) -> Result<()> + Send,
{
    pub fn new(name: impl Into<String>, dependencies: ViewSet, render: F) -> Self {
        Self {
            name: name.into(),
            dependencies,
            render,
        }
    }
}

impl<F> Widget for FnWidget<F>
where
    F: FnMut(&DerivedView) -> Result<()> + Send,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn dependencies(&self) -> ViewSet {
        self.dependencies
    }

    fn render(&mut self, view: &DerivedView) -> Result<()> {
        (self.render)(view)
    }
}
