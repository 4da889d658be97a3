// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::logging::{debug, warn};
use crate::resubscribe::Resubscribe;
use crate::BackoffPolicy;
use core::pin::Pin;
use core::task::{ready, Context, Poll};
use fluxion_extra_core::{FluxionError, StreamItem};
use fluxion_extra_runtime::Timer;
use futures::Stream;
use pin_project::pin_project;

#[cfg(feature = "runtime-tokio")]
use fluxion_extra_runtime::TokioTimer;

/// Extension trait providing `retry_backoff` for sequence factories.
///
/// The factory is called once per subscription: first when the returned
/// stream is polled, then again after each backoff wait.
pub trait RetryExt<S, T>: FnMut() -> S + Sized
where
    S: Stream<Item = StreamItem<T>>,
{
    /// Resubscribes after each error, waiting as `policy` dictates.
    ///
    /// - Values are forwarded from every subscription, so elements emitted
    ///   before a failure are seen again after the retry.
    /// - An error rejected by the policy's predicate is forwarded as is and
    ///   ends the stream.
    /// - Once `max_attempts` retries are spent, the next error is emitted as
    ///   [`FluxionError::RetryExhausted`] wrapping it, and the stream ends.
    /// - Dropping the stream during a wait cancels it; no resubscription
    ///   happens afterwards.
    #[cfg(feature = "runtime-tokio")]
    fn retry_backoff(self, policy: BackoffPolicy) -> RetryStream<Self, S, TokioTimer> {
        self.retry_backoff_with_timer(policy, TokioTimer)
    }

    /// [`retry_backoff`](RetryExt::retry_backoff) sleeping on `timer`.
    fn retry_backoff_with_timer<TM: Timer>(
        self,
        policy: BackoffPolicy,
        timer: TM,
    ) -> RetryStream<Self, S, TM> {
        RetryStream::new(self, policy, timer)
    }
}

impl<F, S, T> RetryExt<S, T> for F
where
    F: FnMut() -> S,
    S: Stream<Item = StreamItem<T>>,
{
}

#[pin_project]
#[must_use = "streams do nothing unless polled"]
pub struct RetryStream<F, S, TM: Timer> {
    #[pin]
    inner: Resubscribe<F, S, TM>,
    is_done: bool,
}

impl<F, S, TM: Timer> RetryStream<F, S, TM> {
    fn new(factory: F, policy: BackoffPolicy, timer: TM) -> Self {
        Self {
            inner: Resubscribe::new(factory, policy, timer),
            is_done: false,
        }
    }
}

impl<F, S, T, TM> Stream for RetryStream<F, S, TM>
where
    F: FnMut() -> S,
    S: Stream<Item = StreamItem<T>>,
    TM: Timer,
{
    type Item = StreamItem<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        loop {
            if *this.is_done {
                return Poll::Ready(None);
            }

            let error = match ready!(this.inner.as_mut().poll_current(cx)) {
                Some(StreamItem::Value(value)) => {
                    return Poll::Ready(Some(StreamItem::Value(value)));
                }
                Some(StreamItem::Error(error)) if this.inner.accepts(&error) => error,
                Some(StreamItem::Error(error)) => {
                    *this.is_done = true;
                    return Poll::Ready(Some(StreamItem::Error(error)));
                }
                None => {
                    *this.is_done = true;
                    return Poll::Ready(None);
                }
            };

            let Some(delay) = this.inner.as_mut().schedule_next(Some(&error)) else {
                *this.is_done = true;
                let attempts = this.inner.attempts();
                warn!("retry exhausted after {} attempts: {}", attempts, error);
                let exhausted = FluxionError::retry_exhausted(attempts, error);
                return Poll::Ready(Some(StreamItem::Error(exhausted)));
            };

            debug!(
                "retry attempt {} in {:?} after: {}",
                this.inner.attempts(),
                delay,
                error
            );
        }
    }
}
