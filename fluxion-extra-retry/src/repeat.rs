// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::logging::debug;
use crate::resubscribe::Resubscribe;
use crate::BackoffPolicy;
use core::pin::Pin;
use core::task::{ready, Context, Poll};
use fluxion_extra_core::StreamItem;
use fluxion_extra_runtime::Timer;
use futures::Stream;
use pin_project::pin_project;

#[cfg(feature = "runtime-tokio")]
use fluxion_extra_runtime::TokioTimer;

/// Extension trait providing `repeat_backoff` for sequence factories.
pub trait RepeatExt<S, T>: FnMut() -> S + Sized
where
    S: Stream<Item = StreamItem<T>>,
{
    /// Resubscribes after each completion, up to `max_attempts` times, then
    /// completes. An error is forwarded and ends the stream without a
    /// repetition.
    #[cfg(feature = "runtime-tokio")]
    fn repeat_backoff(self, policy: BackoffPolicy) -> RepeatStream<Self, S, TokioTimer> {
        self.repeat_backoff_with_timer(policy, TokioTimer)
    }

    fn repeat_backoff_with_timer<TM: Timer>(
        self,
        policy: BackoffPolicy,
        timer: TM,
    ) -> RepeatStream<Self, S, TM> {
        RepeatStream {
            inner: Resubscribe::new(self, policy, timer),
            is_done: false,
        }
    }
}

impl<F, S, T> RepeatExt<S, T> for F
where
    F: FnMut() -> S,
    S: Stream<Item = StreamItem<T>>,
{
}

#[pin_project]
#[must_use = "streams do nothing unless polled"]
pub struct RepeatStream<F, S, TM: Timer> {
    #[pin]
    inner: Resubscribe<F, S, TM>,
    is_done: bool,
}

impl<F, S, T, TM> Stream for RepeatStream<F, S, TM>
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

            match ready!(this.inner.as_mut().poll_current(cx)) {
                Some(StreamItem::Value(value)) => {
                    return Poll::Ready(Some(StreamItem::Value(value)));
                }
                Some(StreamItem::Error(error)) => {
                    *this.is_done = true;
                    return Poll::Ready(Some(StreamItem::Error(error)));
                }
                None => {}
            }

            let Some(delay) = this.inner.as_mut().schedule_next(None) else {
                *this.is_done = true;
                let repetitions = this.inner.attempts();
                debug!("repeat finished after {} repetitions", repetitions);
                return Poll::Ready(None);
            };

            debug!("repetition {} in {:?}", this.inner.attempts(), delay);
        }
    }
}
