// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities for the resflux workspace.
//!
//! Production code composes sources with the operators from `resflux-stream`;
//! tests need to push results into a source imperatively, delay a result to
//! control arrival order, or watch whether an operator polled and released a
//! source. This crate provides those pieces:
//!
//! - [`test_channel`]: an unbounded channel whose receiver is a result-carrying stream
//! - [`delayed_ok`] / [`delayed_err`]: single-result sources that resolve after a sleep
//! - [`Probe`] / [`ProbeSource`]: instrumentation for subscription and cancellation
//! - [`helpers`]: timed assertions over streams

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod helpers;
pub mod probe;

use futures::stream::{self, Stream, StreamExt};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

pub use helpers::{assert_no_element_emitted, assert_stream_ended, unwrap_stream};
pub use probe::{Probe, ProbeSource};

/// Creates a channel whose receiving half is a stream of `Result<T, E>`.
///
/// The stream stays open until the sender is dropped.
///
/// # Example
///
/// ```rust
/// use resflux_test_utils::test_channel;
/// use futures::StreamExt;
///
/// # #[tokio::main]
/// # async fn main() {
/// let (tx, mut stream) = test_channel::<i32, String>();
///
/// tx.send(Ok(1)).unwrap();
/// tx.send(Err("boom".to_string())).unwrap();
///
/// assert_eq!(stream.next().await, Some(Ok(1)));
/// assert_eq!(stream.next().await, Some(Err("boom".to_string())));
/// # }
/// ```
pub fn test_channel<T, E>() -> (
    mpsc::UnboundedSender<Result<T, E>>,
    UnboundedReceiverStream<Result<T, E>>,
)
where
    T: Send + 'static,
    E: Send + 'static,
{
    let (tx, rx) = mpsc::unbounded_channel();
    (tx, UnboundedReceiverStream::new(rx))
}

/// A source that succeeds with `value` after `delay_ms` milliseconds.
pub fn delayed_ok<T, E>(value: T, delay_ms: u64) -> impl Stream<Item = Result<T, E>> + Send + Unpin
where
    T: Send + 'static,
    E: Send + 'static,
{
    delayed(Ok(value), delay_ms)
}

/// A source that fails with `error` after `delay_ms` milliseconds.
pub fn delayed_err<T, E>(error: E, delay_ms: u64) -> impl Stream<Item = Result<T, E>> + Send + Unpin
where
    T: Send + 'static,
    E: Send + 'static,
{
    delayed(Err(error), delay_ms)
}

fn delayed<T, E>(result: Result<T, E>, delay_ms: u64) -> impl Stream<Item = Result<T, E>> + Send + Unpin
where
    T: Send + 'static,
    E: Send + 'static,
{
    stream::once(async move {
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        result
    })
    .boxed()
}
