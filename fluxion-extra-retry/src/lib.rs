// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Retry on error and repeat on completion, with a backoff between
//! subscriptions.
//!
//! Both operators wrap a sequence *factory* (any `FnMut() -> S`) because
//! every retry or repetition subscribes to a fresh upstream. The wait between
//! subscriptions is computed by a [`BackoffPolicy`] and slept on a
//! [`Timer`](fluxion_extra_runtime::Timer), [`TokioTimer`] by default.
//!
//! ```rust
//! use fluxion_extra_core::{FluxionError, StreamItem};
//! use fluxion_extra_retry::prelude::*;
//! use futures::{stream, StreamExt};
//! use std::time::Duration;
//!
//! # #[tokio::main(flavor = "current_thread", start_paused = true)]
//! # async fn main() -> fluxion_extra_core::Result<()> {
//! let policy = BackoffPolicy::exponential(2, Duration::from_millis(100), None)?;
//!
//! let items: Vec<_> = (|| {
//!     stream::iter([
//!         StreamItem::Value(1),
//!         StreamItem::Error(FluxionError::stream_error("flaky")),
//!     ])
//! })
//! .retry_backoff(policy)
//! .collect()
//! .await;
//!
//! // The first subscription plus two retries, then exhaustion.
//! assert_eq!(items.len(), 4);
//! assert!(matches!(
//!     items[3],
//!     StreamItem::Error(FluxionError::RetryExhausted { attempts: 2, .. })
//! ));
//! # Ok(())
//! # }
//! ```

mod backoff;
mod logging;
pub mod prelude;
mod repeat;
mod resubscribe;
mod retry;
mod schedule;

pub use backoff::{AttemptHook, BackoffConfig, BackoffPolicy, BackoffShape, RetryPredicate};
pub use repeat::{RepeatExt, RepeatStream};
pub use retry::{RetryExt, RetryStream};
pub use schedule::{BackoffSchedule, RetryContext};

#[cfg(feature = "runtime-tokio")]
pub use fluxion_extra_runtime::TokioTimer;
