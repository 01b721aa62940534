// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Combinators for streams of `Result` that keep the success and failure types
//! statically known.
//!
//! A *result-carrying source* is any [`Stream`](futures::Stream) whose items are
//! `Result<T, E>`. Sources are lazy: nothing runs until the stream is polled, and
//! dropping a stream releases everything it holds.
//!
//! # Operators
//!
//! | Operator | Input | Output | Behavior |
//! |----------|-------|--------|----------|
//! | [`map_result`](MapResultExt::map_result) | `Result<T, E>` | `Result<U, E>` | Transforms successes, passes failures through |
//! | [`map_err_result`](MapResultExt::map_err_result) | `Result<T, E>` | `Result<T, E2>` | Transforms failures, passes successes through |
//! | [`switch_map_result`](SwitchMapResultExt::switch_map_result) | `Result<T, E1>` | `Result<U, E2>` | Switches to a dependent source on success |
//! | [`fork_join_result`](ForkJoinResultExt::fork_join_result) | collection of sources | `Result<aggregate, E>` | Waits for all successes or the first failure |
//!
//! # Example
//!
//! ```
//! use resflux_stream::{source, ForkJoinResultExt, MapResultExt, SwitchMapResultExt};
//! use futures::StreamExt;
//!
//! # futures::executor::block_on(async {
//! let user = source::ok::<_, String>(42u32);
//!
//! let mut dashboard = user.switch_map_result(|id| {
//!     (
//!         source::ok::<_, String>(format!("user-{id}")),
//!         source::ok::<_, String>(vec![1, 2, 3]),
//!     )
//!         .fork_join_result()
//!         .map_result(|(name, orders)| format!("{name}: {} orders", orders.len()))
//! });
//!
//! assert_eq!(dashboard.next().await, Some(Ok("user-42: 3 orders".to_string())));
//! # });
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
#[macro_use]
mod logging;
pub mod fork_join;
pub mod map_result;
pub mod source;
pub mod switch_map_result;

pub use fork_join::{fork_join_result, Aggregate, ForkJoin, ForkJoinResultExt, SourceCollection};
pub use map_result::{MapErrResult, MapResult, MapResultExt};
pub use switch_map_result::{SwitchMapResult, SwitchMapResultExt};
