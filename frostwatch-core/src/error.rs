// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the frostwatch dashboard
//!
//! A single root [`FrostwatchError`] covers every failure the refresh pipeline
//! can observe. Most of them are local to one tick: a failed reading or a
//! failed render never stops the scheduler.
//!
//! # Examples
//!
//! ```
//! use frostwatch_core::{FrostwatchError, Result};
//!
//! fn sample() -> Result<f64> {
//!     Err(FrostwatchError::source_error("entropy source exhausted"))
//! }
//!
//! assert!(!sample().unwrap_err().is_permanent());
//! ```

/// Root error type for all frostwatch operations
#[derive(Debug, thiserror::Error)]
pub enum FrostwatchError {
    /// The reading source (random generator or clock) failed
    ///
    /// Fatal to the current tick only.
    #[error("Reading source error: {context}")]
    Source {
        /// Description of what went wrong while sampling
        context: String,
    },

    /// A presentation widget failed to render a view
    #[error("Render error in widget '{widget}': {context}")]
    Render {
        /// Name of the failing widget
        widget: String,
        /// Description of the failure
        context: String,
    },

    /// Configuration was missing a value, unreadable or inconsistent
    #[error("Configuration error: {context}")]
    Config {
        /// What was wrong with the configuration
        context: String,
    },

    /// Custom error from user code
    ///
    /// Wraps errors produced by user supplied sources and widgets.
    #[error("User error: {0}")]
    UserError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Multiple errors occurred
    ///
    /// Produced when several widgets fail during the same publish.
    #[error("Multiple errors occurred: {count} errors")]
    MultipleErrors {
        /// Number of errors that occurred
        count: usize,
        /// The individual errors
        errors: Vec<FrostwatchError>,
    },
}

impl FrostwatchError {
    /// Create a reading source error with the given context
    pub fn source_error(context: impl Into<String>) -> Self {
        Self::Source {
            context: context.into(),
        }
    }

    /// Create a render error for the named widget
    pub fn render_error(widget: impl Into<String>, context: impl Into<String>) -> Self {
        Self::Render {
            widget: widget.into(),
            context: context.into(),
        }
    }

    /// Create a configuration error with the given context
    pub fn config_error(context: impl Into<String>) -> Self {
        Self::Config {
            context: context.into(),
        }
    }

    /// Wrap a user error
    pub fn user_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::UserError(Box::new(error))
    }

    /// Aggregate a list of errors.
    ///
    /// A single error is returned as is rather than wrapped.
    ///
    /// # Examples
    ///
    /// ```
    /// use frostwatch_core::FrostwatchError;
    ///
    /// let errors = vec![
    ///     FrostwatchError::render_error("table", "closed pipe"),
    ///     FrostwatchError::render_error("chart", "closed pipe"),
    /// ];
    ///
    /// let result = FrostwatchError::from_errors(errors);
    /// assert!(matches!(result, FrostwatchError::MultipleErrors { count: 2, .. }));
    /// ```
    #[must_use]
    pub fn from_errors(mut errors: Vec<FrostwatchError>) -> Self {
        if errors.len() == 1 {
            if let Some(error) = errors.pop() {
                return error;
            }
        }

        Self::MultipleErrors {
            count: errors.len(),
            errors,
        }
    }

    /// Check if this error indicates a permanent failure
    ///
    /// Waiting for the next interval cannot fix these, so the scheduler stops
    /// instead of re-arming. Source and render failures are not permanent.
    #[must_use]
    pub const fn is_permanent(&self) -> bool {
        matches!(self, Self::Config { .. } | Self::UserError(_))
    }
}

/// Specialized Result type for frostwatch operations
pub type Result<T> = std::result::Result<T, FrostwatchError>;

/// Extension trait for converting foreign errors into `FrostwatchError`
pub trait IntoFrostwatchError {
    /// Convert this error into a `FrostwatchError` with additional context
    fn into_frostwatch_error(self, context: &str) -> FrostwatchError;

    /// Convert this error into a `FrostwatchError` without additional context
    fn into_frostwatch(self) -> FrostwatchError
    where
        Self: Sized,
    {
        self.into_frostwatch_error("")
    }
}

impl<E: std::error::Error + Send + Sync + 'static> IntoFrostwatchError for E {
    fn into_frostwatch_error(self, context: &str) -> FrostwatchError {
        if context.is_empty() {
            FrostwatchError::user_error(self)
        } else {
            FrostwatchError::Source {
                context: format!("{context}: {self}"),
            }
        }
    }
}

/// Helper trait for adding context to `Result`s
pub trait ResultExt<T> {
    /// Add context to an error
    ///
    /// # Errors
    /// Returns `Err(FrostwatchError)` if the underlying result is `Err`.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context to an error using a closure (lazy evaluation)
    ///
    /// # Errors
    /// Returns `Err(FrostwatchError)` if the underlying result is `Err`.
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<FrostwatchError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.with_context(|| context.into())
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| match e.into() {
            FrostwatchError::UserError(inner) => FrostwatchError::Source {
                context: format!("{}: {inner}", f()),
            },
            FrostwatchError::Config { context } => FrostwatchError::Config {
                context: format!("{}: {context}", f()),
            },
            other => other,
        })
    }
}

impl Clone for FrostwatchError {
    fn clone(&self) -> Self {
        match self {
            Self::Source { context } => Self::Source {
                context: context.clone(),
            },
            Self::Render { widget, context } => Self::Render {
                widget: widget.clone(),
                context: context.clone(),
            },
            Self::Config { context } => Self::Config {
                context: context.clone(),
            },
            // The boxed error can't be cloned, keep its message
            Self::UserError(e) => Self::Source {
                context: format!("User error: {e}"),
            },
            Self::MultipleErrors { count, errors } => Self::MultipleErrors {
                count: *count,
                errors: errors.clone(),
            },
        }
    }
}
