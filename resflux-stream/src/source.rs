// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Constructors for single-result sources.
//!
//! Each source yields exactly one `Result` and then ends. Nothing is evaluated
//! until the source is first polled.
//!
//! ```
//! use resflux_stream::source;
//! use futures::StreamExt;
//!
//! # futures::executor::block_on(async {
//! let mut one = source::ok::<_, &str>(1);
//! assert_eq!(one.next().await, Some(Ok(1)));
//! assert_eq!(one.next().await, None);
//! # });
//! ```

use futures::future::{self, Ready};
use futures::stream::{self, Once, Stream};

/// A source that yields one precomputed `Result`.
pub type Just<T, E> = Once<Ready<Result<T, E>>>;

/// Creates a source that succeeds once with `value`.
pub fn ok<T, E>(value: T) -> Just<T, E> {
    from_result(Ok(value))
}

/// Creates a source that fails once with `error`.
pub fn err<T, E>(error: E) -> Just<T, E> {
    from_result(Err(error))
}

/// Creates a source that yields `result` once.
pub fn from_result<T, E>(result: Result<T, E>) -> Just<T, E> {
    stream::once(future::ready(result))
}

/// Creates a source whose `Result` is produced by `f` when the source is first polled.
///
/// Each call to `deferred` gets its own evaluation: building the source does not run `f`.
///
/// ```
/// use resflux_stream::source;
/// use futures::StreamExt;
/// use std::cell::Cell;
///
/// # futures::executor::block_on(async {
/// let calls = Cell::new(0);
/// let mut lazy = source::deferred(|| {
///     calls.set(calls.get() + 1);
///     Ok::<_, ()>("computed")
/// });
/// assert_eq!(calls.get(), 0);
///
/// assert_eq!(lazy.next().await, Some(Ok("computed")));
/// assert_eq!(calls.get(), 1);
/// # });
/// ```
pub fn deferred<T, E, F>(f: F) -> impl Stream<Item = Result<T, E>> + Unpin
where
    F: FnOnce() -> Result<T, E>,
{
    stream::once(future::lazy(move |_| f()))
}
