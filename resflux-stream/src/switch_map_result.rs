// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Switch operator for result-carrying streams.

use futures::stream::{Fuse, FusedStream, Stream, StreamExt, TryStream};
use pin_project::pin_project;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Extension trait providing the `switch_map_result` operator.
pub trait SwitchMapResultExt<T, E>: Stream<Item = Result<T, E>> + Sized {
    /// Chains a dependent source onto every success of this stream.
    ///
    /// # Behavior
    ///
    /// - `Ok(v)`: any active inner source is dropped and every item of `project(v)`
    ///   is forwarded until the next outer item arrives; items the active inner
    ///   source already has ready are forwarded before the next outer item is taken
    /// - `Err(e)`: any active inner source is dropped and `Err(e.into())` is emitted;
    ///   `project` is not called
    /// - The output ends once the outer stream has ended and no inner source is active
    ///
    /// The output failure type is the inner source's failure type; the outer failure
    /// type converts into it through `Into`, so a shared error enum with `From`
    /// impls for each failure kind covers both.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resflux_stream::{source, SwitchMapResultExt};
    /// use futures::StreamExt;
    ///
    /// # futures::executor::block_on(async {
    /// let mut lookup = source::ok::<_, String>(21)
    ///     .switch_map_result(|id| source::ok::<_, String>(id * 2));
    /// assert_eq!(lookup.next().await, Some(Ok(42)));
    /// assert_eq!(lookup.next().await, None);
    /// # });
    /// ```
    fn switch_map_result<Inner, F>(self, project: F) -> SwitchMapResult<Self, Inner, F>
    where
        F: FnMut(T) -> Inner,
        Inner: TryStream,
        E: Into<Inner::Error>;
}

impl<S, T, E> SwitchMapResultExt<T, E> for S
where
    S: Stream<Item = Result<T, E>>,
{
    fn switch_map_result<Inner, F>(self, project: F) -> SwitchMapResult<Self, Inner, F>
    where
        F: FnMut(T) -> Inner,
        Inner: TryStream,
        E: Into<Inner::Error>,
    {
        SwitchMapResult {
            outer: self.fuse(),
            inner: None,
            project,
        }
    }
}

/// Stream returned by [`SwitchMapResultExt::switch_map_result`].
#[pin_project]
#[must_use = "streams do nothing unless polled"]
pub struct SwitchMapResult<S, Inner, F> {
    #[pin]
    outer: Fuse<S>,
    #[pin]
    inner: Option<Inner>,
    project: F,
}

impl<S, Inner, F, T, E> Stream for SwitchMapResult<S, Inner, F>
where
    S: Stream<Item = Result<T, E>>,
    Inner: TryStream,
    E: Into<Inner::Error>,
    F: FnMut(T) -> Inner,
{
    type Item = Result<Inner::Ok, Inner::Error>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        // Ready inner items go out before the next outer item is taken
        loop {
            if let Some(inner) = this.inner.as_mut().as_pin_mut() {
                match inner.try_poll_next(cx) {
                    Poll::Ready(Some(item)) => return Poll::Ready(Some(item)),
                    Poll::Ready(None) => this.inner.set(None),
                    Poll::Pending => {}
                }
            }

            match this.outer.as_mut().poll_next(cx) {
                Poll::Ready(Some(Ok(value))) => this.inner.set(Some((this.project)(value))),
                Poll::Ready(Some(Err(error))) => {
                    this.inner.set(None);
                    return Poll::Ready(Some(Err(error.into())));
                }
                Poll::Ready(None) if this.inner.is_none() => return Poll::Ready(None),
                Poll::Ready(None) | Poll::Pending => return Poll::Pending,
            }
        }
    }
}

impl<S, Inner, F, T, E> FusedStream for SwitchMapResult<S, Inner, F>
where
    S: Stream<Item = Result<T, E>>,
    Inner: TryStream,
    E: Into<Inner::Error>,
    F: FnMut(T) -> Inner,
{
    fn is_terminated(&self) -> bool {
        self.outer.is_done() && self.inner.is_none()
    }
}
