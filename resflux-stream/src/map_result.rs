// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Transformations over one channel of a result-carrying stream.

use futures::stream::{FusedStream, Stream};
use pin_project::pin_project;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Extension trait providing `map_result` and `map_err_result` for streams of `Result`.
pub trait MapResultExt<T, E>: Stream<Item = Result<T, E>> + Sized {
    /// Transforms the success value of every item; failures pass through unchanged.
    ///
    /// The transform is only ever called with success values, so an `Err` item
    /// reaches the output exactly as the source emitted it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resflux_stream::{source, MapResultExt};
    /// use futures::StreamExt;
    ///
    /// # futures::executor::block_on(async {
    /// let mut doubled = source::ok::<_, &str>("one").map_result(|v| format!("{v} + {v}"));
    /// assert_eq!(doubled.next().await, Some(Ok("one + one".to_string())));
    ///
    /// let mut failed = source::err::<&str, _>("one").map_result(|v| format!("{v} + {v}"));
    /// assert_eq!(failed.next().await, Some(Err("one")));
    /// # });
    /// ```
    ///
    /// # See Also
    ///
    /// - [`SwitchMapResultExt::switch_map_result`](crate::SwitchMapResultExt::switch_map_result) - Chain a dependent source
    fn map_result<U, F>(self, f: F) -> MapResult<Self, F>
    where
        F: FnMut(T) -> U;

    /// Transforms the failure value of every item; successes pass through unchanged.
    ///
    /// Used to bring sources with different failure types onto one shared failure
    /// type before they are joined.
    fn map_err_result<E2, F>(self, f: F) -> MapErrResult<Self, F>
    where
        F: FnMut(E) -> E2;
}

impl<S, T, E> MapResultExt<T, E> for S
where
    S: Stream<Item = Result<T, E>>,
{
    fn map_result<U, F>(self, f: F) -> MapResult<Self, F>
    where
        F: FnMut(T) -> U,
    {
        MapResult { stream: self, f }
    }

    fn map_err_result<E2, F>(self, f: F) -> MapErrResult<Self, F>
    where
        F: FnMut(E) -> E2,
    {
        MapErrResult { stream: self, f }
    }
}

/// Stream returned by [`MapResultExt::map_result`].
#[pin_project]
#[must_use = "streams do nothing unless polled"]
pub struct MapResult<S, F> {
    #[pin]
    stream: S,
    f: F,
}

impl<S, F, T, E, U> Stream for MapResult<S, F>
where
    S: Stream<Item = Result<T, E>>,
    F: FnMut(T) -> U,
{
    type Item = Result<U, E>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();
        let f = this.f;
        this.stream
            .poll_next(cx)
            .map(|item| item.map(|result| result.map(f)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.stream.size_hint()
    }
}

impl<S, F, T, E, U> FusedStream for MapResult<S, F>
where
    S: FusedStream<Item = Result<T, E>>,
    F: FnMut(T) -> U,
{
    fn is_terminated(&self) -> bool {
        self.stream.is_terminated()
    }
}

/// Stream returned by [`MapResultExt::map_err_result`].
#[pin_project]
#[must_use = "streams do nothing unless polled"]
pub struct MapErrResult<S, F> {
    #[pin]
    stream: S,
    f: F,
}

impl<S, F, T, E, E2> Stream for MapErrResult<S, F>
where
    S: Stream<Item = Result<T, E>>,
    F: FnMut(E) -> E2,
{
    type Item = Result<T, E2>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();
        let f = this.f;
        this.stream
            .poll_next(cx)
            .map(|item| item.map(|result| result.map_err(f)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.stream.size_hint()
    }
}
