// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Consumers for result-carrying streams.
//!
//! - [`SubscribeResultExt::subscribe_result`] drives a stream on a spawned task and
//!   dispatches successes, failures and completion to callbacks
//! - [`FirstResultExt::first_result`] and [`FirstResultExt::first_ok`] await the
//!   first item of a stream

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
#[macro_use]
mod logging;
pub mod first_result;
#[cfg(feature = "runtime-tokio")]
pub mod subscribe_result;

pub use first_result::FirstResultExt;
#[cfg(feature = "runtime-tokio")]
pub use subscribe_result::{SubscribeResultExt, Subscription};
