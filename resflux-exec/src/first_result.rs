// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use async_trait::async_trait;
use futures::stream::{Stream, StreamExt};
use resflux_core::ResfluxError;

/// Extension trait for awaiting the first item of a result-carrying stream.
///
/// The stream is dropped as soon as the first item arrives, which releases any
/// sources it still holds.
#[async_trait]
pub trait FirstResultExt<T, E>: Stream<Item = Result<T, E>> + Sized {
    /// Resolves with the first item, success or failure.
    ///
    /// # Errors
    ///
    /// Returns [`ResfluxError::EmptyStream`] if the stream ends without an item.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resflux_exec::FirstResultExt;
    /// use resflux_stream::{source, ForkJoinResultExt};
    ///
    /// # #[tokio::main]
    /// # async fn main() {
    /// let joined = vec![source::ok::<_, &str>(1), source::err("bar_err")].fork_join_result();
    /// assert_eq!(joined.first_result().await.unwrap(), Err("bar_err"));
    /// # }
    /// ```
    async fn first_result(self) -> resflux_core::Result<Result<T, E>>;

    /// Resolves with the first success, lifting a failure into [`ResfluxError::UserError`].
    ///
    /// # Errors
    ///
    /// - [`ResfluxError::UserError`] wrapping the source failure if the first item is `Err`
    /// - [`ResfluxError::EmptyStream`] if the stream ends without an item
    async fn first_ok(self) -> resflux_core::Result<T>
    where
        E: std::error::Error + Send + Sync + 'static;
}

#[async_trait]
impl<S, T, E> FirstResultExt<T, E> for S
where
    S: Stream<Item = Result<T, E>> + Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    async fn first_result(self) -> resflux_core::Result<Result<T, E>> {
        let mut stream = Box::pin(self);
        stream.next().await.ok_or(ResfluxError::EmptyStream)
    }

    async fn first_ok(self) -> resflux_core::Result<T>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        self.first_result().await?.map_err(ResfluxError::user_error)
    }
}
