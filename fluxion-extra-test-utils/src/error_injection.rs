// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities for error injection and resubscription counting.

use crate::TestError;
use fluxion_extra_core::{FluxionError, StreamItem};
use futures::Stream;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::task::{Context, Poll};

/// A stream wrapper that emits the inner values as `StreamItem::Value` and
/// fails with [`TestError::Injected`] at a given position.
///
/// The error terminates the stream; later inner values are never polled.
///
/// ```rust
/// use fluxion_extra_test_utils::{ErrorInjectingStream, StepVerifierExt};
/// use futures::stream;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// ErrorInjectingStream::new(stream::iter([1, 2, 3]), 2)
///     .test()
///     .expect_next(1)
///     .expect_next(2)
///     .verify_error()
///     .await;
/// # }
/// ```
pub struct ErrorInjectingStream<S> {
    inner: S,
    inject_error_at: usize,
    count: usize,
    done: bool,
}

impl<S> ErrorInjectingStream<S> {
    /// Wraps `inner`, failing once `inject_error_at` values (0-indexed position) were emitted.
    pub fn new(inner: S, inject_error_at: usize) -> Self {
        Self {
            inner,
            inject_error_at,
            count: 0,
            done: false,
        }
    }
}

impl<S> Stream for ErrorInjectingStream<S>
where
    S: Stream + Unpin,
{
    type Item = StreamItem<S::Item>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        if self.done {
            return Poll::Ready(None);
        }

        if self.count == self.inject_error_at {
            self.done = true;
            return Poll::Ready(Some(StreamItem::Error(FluxionError::user_error(
                TestError::Injected,
            ))));
        }

        match Pin::new(&mut self.inner).poll_next(cx) {
            Poll::Ready(Some(item)) => {
                self.count += 1;
                Poll::Ready(Some(StreamItem::Value(item)))
            }
            Poll::Ready(None) => {
                self.done = true;
                Poll::Ready(None)
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

/// Shared counter of how many times a sequence factory was invoked.
#[derive(Debug, Clone, Default)]
pub struct SubscriptionCounter {
    count: Arc<AtomicUsize>,
}

impl SubscriptionCounter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one subscription and returns its 0-based index.
    pub fn subscribe(&self) -> usize {
        self.count.fetch_add(1, Ordering::SeqCst)
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}
