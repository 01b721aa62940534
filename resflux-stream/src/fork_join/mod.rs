// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Fork-join over independent result-carrying sources.
//!
//! A join polls every source concurrently (interleaved on the task that polls the
//! join) and emits a single `Result`:
//!
//! - `Ok(aggregate)` once every source has produced its first success, with the
//!   aggregate shaped like the input: `Vec` → `Vec`, `IndexMap` → `IndexMap`,
//!   `BTreeMap` → `BTreeMap`, tuple → tuple
//! - `Err(e)` as soon as any source fails; every other source is dropped at that
//!   point and nothing it produces afterwards is observed
//!
//! Values are stored by key or position, so the aggregate never depends on the
//! order in which sources resolve. When several sources fail within the same
//! poll, the first one in declaration order wins.
//!
//! An empty input joins to `Ok` of an empty aggregate. A source that ends without
//! producing anything makes the join end without emitting, since it can neither
//! succeed nor name a failure.
//!
//! # Examples
//!
//! ```
//! use resflux_stream::{source, ForkJoinResultExt};
//! use futures::StreamExt;
//! use indexmap::IndexMap;
//!
//! # futures::executor::block_on(async {
//! let mut sources = IndexMap::new();
//! sources.insert("foo", source::ok::<_, &str>(1));
//! sources.insert("bar", source::ok::<_, &str>(2));
//!
//! let mut joined = sources.fork_join_result();
//! let values = joined.next().await.unwrap().unwrap();
//! assert_eq!(values["foo"], 1);
//! assert_eq!(values["bar"], 2);
//! assert!(joined.next().await.is_none());
//! # });
//! ```
//!
//! Sources with different success types join as a tuple, or into a named record
//! with [`fork_join_into!`](crate::fork_join_into):
//!
//! ```
//! use resflux_stream::{fork_join_into, source};
//! use futures::StreamExt;
//!
//! #[derive(Debug, PartialEq)]
//! struct Profile {
//!     id: u32,
//!     name: String,
//! }
//!
//! # futures::executor::block_on(async {
//! let mut profile = fork_join_into!(Profile {
//!     id: source::ok::<_, &str>(7),
//!     name: source::ok::<_, &str>("ada".to_string()),
//! });
//!
//! assert_eq!(
//!     profile.next().await,
//!     Some(Ok(Profile { id: 7, name: "ada".to_string() }))
//! );
//! # });
//! ```

mod collection;
mod implementation;
mod tuple;

pub use collection::{Aggregate, Keyed, Sequence, SortedKeyed, SourceCollection, Tagged};
pub use implementation::{ForkJoin, JoinShape};
pub use tuple::{ForkJoin1, ForkJoin2, ForkJoin3, ForkJoin4, ForkJoin5, ForkJoin6, ForkJoin7, ForkJoin8};

use futures::stream::TryStream;
use indexmap::IndexMap;
use std::collections::BTreeMap;
use std::hash::Hash;

/// Joins a collection of result-carrying sources into a single result.
///
/// Implemented for `Vec<S>`, `IndexMap<K, S>`, `BTreeMap<K, S>`,
/// [`SourceCollection<K, S>`] and tuples of up to eight sources. Every source must
/// share one failure type; use
/// [`MapResultExt::map_err_result`](crate::MapResultExt::map_err_result) to
/// convert failures first when they differ.
///
/// See the [module documentation](crate::fork_join) for the exact semantics.
pub trait ForkJoinResultExt {
    /// The joined stream.
    type Joined;

    /// Starts a join over every source in `self`.
    ///
    /// Nothing is polled until the returned stream is.
    fn fork_join_result(self) -> Self::Joined;
}

impl<S> ForkJoinResultExt for Vec<S>
where
    S: TryStream,
{
    type Joined = ForkJoin<S, Sequence>;

    fn fork_join_result(self) -> Self::Joined {
        ForkJoin::new(self, Sequence)
    }
}

impl<K, S> ForkJoinResultExt for IndexMap<K, S>
where
    K: Hash + Eq,
    S: TryStream,
{
    type Joined = ForkJoin<S, Keyed<K>>;

    fn fork_join_result(self) -> Self::Joined {
        let (keys, sources): (Vec<_>, Vec<_>) = self.into_iter().unzip();
        ForkJoin::new(sources, Keyed(keys))
    }
}

impl<K, S> ForkJoinResultExt for BTreeMap<K, S>
where
    K: Ord,
    S: TryStream,
{
    type Joined = ForkJoin<S, SortedKeyed<K>>;

    fn fork_join_result(self) -> Self::Joined {
        let (keys, sources): (Vec<_>, Vec<_>) = self.into_iter().unzip();
        ForkJoin::new(sources, SortedKeyed(keys))
    }
}

impl<K, S> ForkJoinResultExt for SourceCollection<K, S>
where
    K: Hash + Eq,
    S: TryStream,
{
    type Joined = ForkJoin<S, Tagged<K>>;

    fn fork_join_result(self) -> Self::Joined {
        match self {
            Self::Keyed(sources) => {
                let (keys, sources): (Vec<_>, Vec<_>) = sources.into_iter().unzip();
                ForkJoin::new(sources, Tagged::Keyed(keys))
            }
            Self::Indexed(sources) => ForkJoin::new(sources, Tagged::Indexed),
        }
    }
}

/// Free-function form of [`ForkJoinResultExt::fork_join_result`].
///
/// ```
/// use resflux_stream::{fork_join_result, source};
/// use futures::StreamExt;
///
/// # futures::executor::block_on(async {
/// let mut joined = fork_join_result(vec![source::ok::<_, &str>(1), source::ok(1)]);
/// assert_eq!(joined.next().await, Some(Ok(vec![1, 1])));
/// # });
/// ```
pub fn fork_join_result<C>(sources: C) -> C::Joined
where
    C: ForkJoinResultExt,
{
    sources.fork_join_result()
}

/// Joins sources with distinct success types into a named record.
///
/// `fork_join_into!(Record { a: source_a, b: source_b })` joins the sources as a
/// tuple and builds `Record { a, b }` from the values on success. The failure type
/// is shared by all sources.
#[macro_export]
macro_rules! fork_join_into {
    ($record:ident { $($field:ident : $source:expr),+ $(,)? }) => {
        $crate::MapResultExt::map_result(
            $crate::ForkJoinResultExt::fork_join_result(($($source,)+)),
            |($($field,)+)| $record { $($field),+ },
        )
    };
}
