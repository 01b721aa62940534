// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Resflux
//!
//! Combinators for async streams whose items are `Result<T, E>`, keeping the
//! success and failure types statically known through every step.
//!
//! ## Overview
//!
//! A *result-carrying source* is any `futures::Stream` of `Result<T, E>`.
//! Resflux composes such sources without losing track of either channel:
//!
//! - [`map_result`](MapResultExt::map_result) transforms successes and passes failures through
//! - [`switch_map_result`](SwitchMapResultExt::switch_map_result) chains a dependent source on
//!   every success, converting the outer failure into the inner one
//! - [`fork_join_result`](ForkJoinResultExt::fork_join_result) runs independent sources
//!   concurrently and yields all successes in the input's shape, or the first failure
//!
//! Sources are lazy: nothing runs until the stream is polled, and dropping a stream
//! releases everything it holds. [`subscribe_result`](SubscribeResultExt::subscribe_result)
//! and [`first_result`](FirstResultExt::first_result) consume the composed stream.
//!
//! ## Quick Start
//!
//! ```rust
//! use resflux::prelude::*;
//! use indexmap::IndexMap;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut sources = IndexMap::new();
//!     sources.insert("foo", source::ok::<_, &str>(1));
//!     sources.insert("bar", source::ok(2));
//!
//!     let totals = sources
//!         .fork_join_result()
//!         .map_result(|values| values.values().sum::<i32>())
//!         .first_result()
//!         .await
//!         .unwrap();
//!
//!     assert_eq!(totals, Ok(3));
//! }
//! ```

// Re-export core types
pub use resflux_core::{CancellationToken, ResfluxError};

// Re-export operators and sources
pub use resflux_stream::fork_join::{Aggregate, SourceCollection};
pub use resflux_stream::{
    fork_join_into, fork_join_result, source, ForkJoinResultExt, MapResultExt, SwitchMapResultExt,
};

// Re-export consumers
pub use resflux_exec::FirstResultExt;
#[cfg(feature = "runtime-tokio")]
pub use resflux_exec::{SubscribeResultExt, Subscription};

/// Prelude module for convenient imports
pub mod prelude {
    pub use resflux_core::ResfluxError;
    pub use resflux_exec::FirstResultExt;
    #[cfg(feature = "runtime-tokio")]
    pub use resflux_exec::SubscribeResultExt;
    pub use resflux_stream::{
        fork_join_into, source, ForkJoinResultExt, MapResultExt, SwitchMapResultExt,
    };
}
