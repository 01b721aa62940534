// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Slot-based join over a homogeneous list of sources.
//!
//! Every wake polls each still-pending source once, so N sources that resolve one
//! at a time cost O(N²) polls in total.

use futures::stream::{FusedStream, Stream, TryStream};
use std::pin::Pin;
use std::task::{Context, Poll};

/// Describes how the joined values are assembled into the output aggregate.
///
/// Values are handed over in declaration order, one per source, regardless of
/// the order in which the sources resolved.
pub trait JoinShape<T> {
    /// The aggregate emitted on success.
    type Output;

    /// Builds the aggregate from the per-source values.
    fn assemble(self, values: Vec<T>) -> Self::Output;
}

/// Joins every source of a homogeneous collection into one aggregate result.
///
/// Created by [`ForkJoinResultExt::fork_join_result`](crate::ForkJoinResultExt::fork_join_result)
/// for `Vec`, `IndexMap`, `BTreeMap` and [`SourceCollection`](crate::SourceCollection) inputs.
///
/// The join emits exactly one item, either the aggregate of every source's first
/// success or the first failure it observes, and then ends. All of its state lives
/// in this value, so every join is independent of every other.
#[must_use = "streams do nothing unless polled"]
pub struct ForkJoin<S: TryStream, Sh> {
    sources: Vec<Option<Pin<Box<S>>>>,
    slots: Vec<Option<S::Ok>>,
    pending: usize,
    shape: Option<Sh>,
}

// Sources are boxed and slots are never pinned.
impl<S: TryStream, Sh> Unpin for ForkJoin<S, Sh> {}

impl<S: TryStream, Sh> ForkJoin<S, Sh> {
    pub(crate) fn new<I>(sources: I, shape: Sh) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        let sources: Vec<_> = sources.into_iter().map(|s| Some(Box::pin(s))).collect();
        let slots = sources.iter().map(|_| None).collect();
        let pending = sources.len();

        Self {
            sources,
            slots,
            pending,
            shape: Some(shape),
        }
    }

    /// Number of sources that have not resolved yet.
    pub fn pending(&self) -> usize {
        self.pending
    }

    fn terminate(&mut self) {
        self.sources.clear();
        self.slots.clear();
        self.shape = None;
    }
}

impl<S, Sh> Stream for ForkJoin<S, Sh>
where
    S: TryStream,
    Sh: JoinShape<S::Ok>,
{
    type Item = Result<Sh::Output, S::Error>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();

        if this.shape.is_none() {
            return Poll::Ready(None);
        }

        // An empty collection falls straight through to assembly with pending == 0
        for index in 0..this.sources.len() {
            let Some(polled) = this.sources[index]
                .as_mut()
                .map(|source| source.as_mut().try_poll_next(cx))
            else {
                continue;
            };

            match polled {
                Poll::Ready(Some(Ok(value))) => {
                    this.slots[index] = Some(value);
                    this.sources[index] = None;
                    this.pending -= 1;
                }
                Poll::Ready(Some(Err(error))) => {
                    debug!(
                        "fork_join: source {} failed, dropping {} pending sources",
                        index,
                        this.pending - 1
                    );
                    this.terminate();
                    return Poll::Ready(Some(Err(error)));
                }
                Poll::Ready(None) => {
                    warn!(
                        "fork_join: source {} ended without a result, join cannot complete",
                        index
                    );
                    this.terminate();
                    return Poll::Ready(None);
                }
                Poll::Pending => {}
            }
        }

        if this.pending > 0 {
            return Poll::Pending;
        }

        let values: Option<Vec<_>> = this.slots.drain(..).collect();
        let shape = this.shape.take();
        this.terminate();

        match (values, shape) {
            (Some(values), Some(shape)) => Poll::Ready(Some(Ok(shape.assemble(values)))),
            _ => Poll::Ready(None),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.shape.is_some() {
            (0, Some(1))
        } else {
            (0, Some(0))
        }
    }
}

impl<S, Sh> FusedStream for ForkJoin<S, Sh>
where
    S: TryStream,
    Sh: JoinShape<S::Ok>,
{
    fn is_terminated(&self) -> bool {
        self.shape.is_none()
    }
}
