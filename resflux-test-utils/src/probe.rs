// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Instrumented sources for observing how an operator subscribes to, polls and
//! releases its inputs.

use futures::stream::Stream;
use pin_project::{pin_project, pinned_drop};
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::task::{Context, Poll};

/// Shared record of what happened to a [`ProbeSource`].
///
/// Clone the probe before handing the wrapped source to an operator; the clone
/// keeps reporting after the source has been moved or dropped.
///
/// ```rust
/// use resflux_test_utils::Probe;
/// use futures::stream;
///
/// let probe = Probe::new();
/// let source = probe.wrap(stream::empty::<Result<i32, ()>>());
/// assert!(!probe.was_polled());
///
/// drop(source);
/// assert!(probe.is_dropped());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Probe {
    state: Arc<ProbeState>,
}

#[derive(Debug, Default)]
struct ProbeState {
    polls: AtomicUsize,
    items: AtomicUsize,
    dropped: AtomicBool,
}

impl Probe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps `stream` so that its polls, items and drop are recorded on this probe.
    pub fn wrap<S: Stream>(&self, stream: S) -> ProbeSource<S> {
        ProbeSource {
            inner: stream,
            probe: self.clone(),
        }
    }

    /// Number of times the wrapped source was polled.
    pub fn polls(&self) -> usize {
        self.state.polls.load(Ordering::SeqCst)
    }

    /// Number of items the wrapped source yielded.
    pub fn items(&self) -> usize {
        self.state.items.load(Ordering::SeqCst)
    }

    /// Whether the wrapped source has been polled at least once.
    pub fn was_polled(&self) -> bool {
        self.polls() > 0
    }

    /// Whether the wrapped source has been dropped.
    pub fn is_dropped(&self) -> bool {
        self.state.dropped.load(Ordering::SeqCst)
    }
}

/// A stream that reports its activity to a [`Probe`].
#[pin_project(PinnedDrop)]
pub struct ProbeSource<S> {
    #[pin]
    inner: S,
    probe: Probe,
}

impl<S: Stream> Stream for ProbeSource<S> {
    type Item = S::Item;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();
        this.probe.state.polls.fetch_add(1, Ordering::SeqCst);

        let polled = this.inner.poll_next(cx);
        if let Poll::Ready(Some(_)) = &polled {
            this.probe.state.items.fetch_add(1, Ordering::SeqCst);
        }
        polled
    }
}

#[pinned_drop]
impl<S> PinnedDrop for ProbeSource<S> {
    fn drop(self: Pin<&mut Self>) {
        self.probe.state.dropped.store(true, Ordering::SeqCst);
    }
}
