// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Shared building blocks for the resflux crates: the infrastructure error type
//! and the cancellation token used by subscriptions.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
#[macro_use]
mod logging;
pub mod cancellation_token;
pub mod error;

pub use self::cancellation_token::{CancellationToken, Cancelled};
pub use self::error::{ResfluxError, Result};
