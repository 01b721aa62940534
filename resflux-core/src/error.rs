// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the resflux infrastructure.
//!
//! The combinators themselves never produce errors of their own: a failure is
//! always the `Err` value a source emitted. [`ResfluxError`] only covers what can
//! go wrong around a stream, such as a stream that ended before it produced a
//! result or a subscription task that did not finish.
//!
//! # Examples
//!
//! ```
//! use resflux_core::{ResfluxError, Result};
//!
//! fn first_value(values: &[i32]) -> Result<i32> {
//!     values.first().copied().ok_or(ResfluxError::EmptyStream)
//! }
//!
//! assert!(first_value(&[]).is_err());
//! ```

/// Root error type for resflux infrastructure failures.
#[derive(Debug, thiserror::Error)]
pub enum ResfluxError {
    /// The stream ended without emitting a single item.
    #[error("Stream ended without emitting a result")]
    EmptyStream,

    /// The subscription was cancelled before the stream completed.
    #[error("Subscription cancelled before completion")]
    SubscriptionCancelled,

    /// The task driving a subscription panicked or was aborted.
    #[error("Subscription task failed: {context}")]
    TaskJoin {
        /// What the runtime reported about the task
        context: String,
    },

    /// A failure emitted by a source, lifted out of its `Result` channel.
    #[error("User error: {0}")]
    UserError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ResfluxError {
    /// Create a task join error with the given context
    pub fn task_join(context: impl Into<String>) -> Self {
        Self::TaskJoin {
            context: context.into(),
        }
    }

    /// Wrap a source failure
    pub fn user_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::UserError(Box::new(error))
    }

    /// Returns `true` if the error reports a cancelled subscription.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::SubscriptionCancelled)
    }
}

/// Specialized Result type for resflux infrastructure operations.
pub type Result<T> = std::result::Result<T, ResfluxError>;
