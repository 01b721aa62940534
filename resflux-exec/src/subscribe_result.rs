// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::stream::{Stream, StreamExt};
use resflux_core::{CancellationToken, ResfluxError};
use std::pin::pin;
use tokio::task::JoinHandle;

/// How the driving task stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Completed,
    Cancelled,
}

/// Extension trait providing push-style consumption of result-carrying streams.
pub trait SubscribeResultExt<T, E>: Stream<Item = Result<T, E>> + Sized {
    /// Drives the stream on a spawned tokio task and dispatches every item.
    ///
    /// # Behavior
    ///
    /// - `Ok(v)` calls `on_ok(v)`, `Err(e)` calls `on_err(e)`; neither ends the
    ///   subscription, the stream decides when it is done
    /// - `on_complete()` is called once when the stream ends on its own
    /// - After [`Subscription::unsubscribe`] the task stops at its next scheduling
    ///   point, drops the stream (and every source it still holds) and calls no
    ///   further callback, `on_complete` included
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resflux_exec::SubscribeResultExt;
    /// use resflux_stream::{source, ForkJoinResultExt};
    /// use std::sync::{Arc, Mutex};
    ///
    /// # #[tokio::main]
    /// # async fn main() {
    /// let seen = Arc::new(Mutex::new(Vec::new()));
    /// let sink = Arc::clone(&seen);
    ///
    /// let subscription = vec![source::ok::<_, String>(1), source::ok(2)]
    ///     .fork_join_result()
    ///     .subscribe_result(
    ///         move |values| sink.lock().unwrap().push(values),
    ///         |error| eprintln!("join failed: {error}"),
    ///         || {},
    ///     );
    ///
    /// subscription.join().await.unwrap();
    /// assert_eq!(*seen.lock().unwrap(), vec![vec![1, 2]]);
    /// # }
    /// ```
    fn subscribe_result<OnOk, OnErr, OnComplete>(
        self,
        on_ok: OnOk,
        on_err: OnErr,
        on_complete: OnComplete,
    ) -> Subscription
    where
        OnOk: FnMut(T) + Send + 'static,
        OnErr: FnMut(E) + Send + 'static,
        OnComplete: FnOnce() + Send + 'static;
}

impl<S, T, E> SubscribeResultExt<T, E> for S
where
    S: Stream<Item = Result<T, E>> + Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    fn subscribe_result<OnOk, OnErr, OnComplete>(
        self,
        mut on_ok: OnOk,
        mut on_err: OnErr,
        on_complete: OnComplete,
    ) -> Subscription
    where
        OnOk: FnMut(T) + Send + 'static,
        OnErr: FnMut(E) + Send + 'static,
        OnComplete: FnOnce() + Send + 'static,
    {
        let token = CancellationToken::new();
        let task_token = token.clone();

        let handle = tokio::spawn(async move {
            let mut stream = pin!(self);

            loop {
                tokio::select! {
                    biased;

                    () = task_token.cancelled() => {
                        debug!("subscribe_result: cancelled, dropping stream");
                        return Outcome::Cancelled;
                    }
                    item = stream.next() => match item {
                        Some(Ok(value)) => on_ok(value),
                        Some(Err(error)) => on_err(error),
                        None => break,
                    }
                }
            }

            // Cancelled between the last item and completion
            if task_token.is_cancelled() {
                return Outcome::Cancelled;
            }

            on_complete();
            Outcome::Completed
        });

        Subscription {
            token,
            handle: Some(handle),
        }
    }
}

/// Handle to a running [`subscribe_result`](SubscribeResultExt::subscribe_result) task.
///
/// Dropping the handle unsubscribes.
#[derive(Debug)]
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    token: CancellationToken,
    handle: Option<JoinHandle<Outcome>>,
}

impl Subscription {
    /// Stops the subscription. Idempotent.
    pub fn unsubscribe(&self) {
        self.token.cancel();
    }

    /// Returns `true` once the subscription has been cancelled or its stream has ended.
    pub fn is_closed(&self) -> bool {
        self.token.is_cancelled() || self.handle.as_ref().map_or(true, JoinHandle::is_finished)
    }

    /// Waits for the driving task to stop.
    ///
    /// # Errors
    ///
    /// - [`ResfluxError::SubscriptionCancelled`] if the subscription was cancelled
    ///   before the stream ended
    /// - [`ResfluxError::TaskJoin`] if the task panicked or was aborted
    pub async fn join(mut self) -> resflux_core::Result<()> {
        let Some(handle) = self.handle.take() else {
            return Err(ResfluxError::SubscriptionCancelled);
        };

        match handle.await {
            Ok(Outcome::Completed) => Ok(()),
            Ok(Outcome::Cancelled) => Err(ResfluxError::SubscriptionCancelled),
            Err(join_error) => {
                error!("subscribe_result: task failed: {}", join_error);
                Err(ResfluxError::task_join(join_error.to_string()))
            }
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
