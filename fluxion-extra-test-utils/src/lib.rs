// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for fluxion-extra.
//!
//! Designed for development and testing only.
//!
//! - [`StepVerifier`] scripts expectations against a sequence: the values it
//!   emits, quiet periods, virtual time advances and how it ends.
//! - [`test_channel`] / [`test_channel_with_errors`] give imperative control
//!   over a sequence from the test body.
//! - [`ErrorInjectingStream`] and [`SubscriptionCounter`] support
//!   resubscription tests.
//! - [`person`] holds the `Person` fixture used by mapper and comparator tests.
//!
//! ```rust
//! use fluxion_extra_test_utils::{test_channel, StepVerifierExt};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let (tx, stream) = test_channel();
//! tx.send(1).unwrap();
//! tx.send(2).unwrap();
//! drop(tx);
//!
//! stream.test().expect_next(1).expect_next(2).verify_complete().await;
//! # }
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod error_injection;
pub mod helpers;
pub mod person;
pub mod step_verifier;
pub mod test_error;

use fluxion_extra_core::StreamItem;
use futures::{stream, Stream, StreamExt};
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

pub use error_injection::{ErrorInjectingStream, SubscriptionCounter};
pub use helpers::{assert_no_element_emitted, assert_no_recv, recv_timeout};
pub use person::Person;
pub use step_verifier::{StepVerifier, StepVerifierExt};
pub use test_error::{upstream_failure, TestError};

/// Creates a test channel that wraps sent values in `StreamItem::Value`.
///
/// Dropping the sender completes the stream.
pub fn test_channel<T: Send + 'static>() -> (
    mpsc::UnboundedSender<T>,
    impl Stream<Item = StreamItem<T>> + Send,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    let stream = UnboundedReceiverStream::new(rx).map(StreamItem::Value);
    (tx, stream)
}

/// Creates a test channel that accepts `StreamItem<T>` for testing error propagation.
pub fn test_channel_with_errors<T: Send + 'static>() -> (
    mpsc::UnboundedSender<StreamItem<T>>,
    impl Stream<Item = StreamItem<T>> + Send,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    let stream = UnboundedReceiverStream::new(rx);
    (tx, stream)
}

/// A finite sequence of `values` that completes after the last one.
pub fn sequence_of<I>(values: I) -> impl Stream<Item = StreamItem<I::Item>>
where
    I: IntoIterator,
{
    stream::iter(values.into_iter().map(StreamItem::Value))
}
