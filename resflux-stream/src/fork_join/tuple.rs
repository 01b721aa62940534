// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Joins over tuples of sources with distinct success types.
//!
//! Every source keeps its own success type, so `(S1, S2)` joins into
//! `Result<(S1::Ok, S2::Ok), E>`. The failure type is shared by all sources.

use super::ForkJoinResultExt;
use futures::stream::{FusedStream, Stream, TryStream};
use std::pin::Pin;
use std::task::{Context, Poll};

macro_rules! impl_fork_join_tuple {
    ($name:ident, $count:expr; $($S:ident $value:ident $idx:tt),+) => {
        /// Join over a tuple of sources, created by
        /// [`ForkJoinResultExt::fork_join_result`].
        #[must_use = "streams do nothing unless polled"]
        pub struct $name<$($S: TryStream),+> {
            sources: ($(Option<Pin<Box<$S>>>,)+),
            slots: ($(Option<$S::Ok>,)+),
            pending: usize,
            terminated: bool,
        }

        // Sources are boxed and slots are never pinned.
        impl<$($S: TryStream),+> Unpin for $name<$($S),+> {}

        impl<$($S: TryStream),+> $name<$($S),+> {
            /// Number of sources that have not resolved yet.
            pub fn pending(&self) -> usize {
                self.pending
            }

            fn terminate(&mut self) {
                self.sources = ($(Option::<Pin<Box<$S>>>::None,)+);
                self.slots = ($(Option::<$S::Ok>::None,)+);
                self.terminated = true;
            }
        }

        impl<E, $($S),+> Stream for $name<$($S),+>
        where
            $($S: TryStream<Error = E>,)+
        {
            type Item = Result<($($S::Ok,)+), E>;

            fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
                let this = self.get_mut();

                if this.terminated {
                    return Poll::Ready(None);
                }

                $(
                    if let Some(polled) = this.sources.$idx
                        .as_mut()
                        .map(|source| source.as_mut().try_poll_next(cx))
                    {
                        match polled {
                            Poll::Ready(Some(Ok(value))) => {
                                this.slots.$idx = Some(value);
                                this.sources.$idx = None;
                                this.pending -= 1;
                            }
                            Poll::Ready(Some(Err(error))) => {
                                debug!("fork_join: tuple source {} failed", $idx);
                                this.terminate();
                                return Poll::Ready(Some(Err(error)));
                            }
                            Poll::Ready(None) => {
                                warn!(
                                    "fork_join: tuple source {} ended without a result, join cannot complete",
                                    $idx
                                );
                                this.terminate();
                                return Poll::Ready(None);
                            }
                            Poll::Pending => {}
                        }
                    }
                )+

                if this.pending > 0 {
                    return Poll::Pending;
                }

                let slots = ($(this.slots.$idx.take(),)+);
                this.terminate();

                match slots {
                    ($(Some($value),)+) => Poll::Ready(Some(Ok(($($value,)+)))),
                    _ => Poll::Ready(None),
                }
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                if self.terminated {
                    (0, Some(0))
                } else {
                    (0, Some(1))
                }
            }
        }

        impl<E, $($S),+> FusedStream for $name<$($S),+>
        where
            $($S: TryStream<Error = E>,)+
        {
            fn is_terminated(&self) -> bool {
                self.terminated
            }
        }

        impl<E, $($S),+> ForkJoinResultExt for ($($S,)+)
        where
            $($S: TryStream<Error = E>,)+
        {
            type Joined = $name<$($S),+>;

            fn fork_join_result(self) -> Self::Joined {
                $name {
                    sources: ($(Some(Box::pin(self.$idx)),)+),
                    slots: ($(Option::<$S::Ok>::None,)+),
                    pending: $count,
                    terminated: false,
                }
            }
        }
    };
}

impl_fork_join_tuple!(ForkJoin1, 1; S1 v1 0);
impl_fork_join_tuple!(ForkJoin2, 2; S1 v1 0, S2 v2 1);
impl_fork_join_tuple!(ForkJoin3, 3; S1 v1 0, S2 v2 1, S3 v3 2);
impl_fork_join_tuple!(ForkJoin4, 4; S1 v1 0, S2 v2 1, S3 v3 2, S4 v4 3);
impl_fork_join_tuple!(ForkJoin5, 5; S1 v1 0, S2 v2 1, S3 v3 2, S4 v4 3, S5 v5 4);
impl_fork_join_tuple!(ForkJoin6, 6; S1 v1 0, S2 v2 1, S3 v3 2, S4 v4 3, S5 v5 4, S6 v6 5);
impl_fork_join_tuple!(ForkJoin7, 7; S1 v1 0, S2 v2 1, S3 v3 2, S4 v4 3, S5 v5 4, S6 v6 5, S7 v7 6);
impl_fork_join_tuple!(ForkJoin8, 8; S1 v1 0, S2 v2 1, S3 v3 2, S4 v4 3, S5 v5 4, S6 v6 5, S7 v7 6, S8 v8 7);
