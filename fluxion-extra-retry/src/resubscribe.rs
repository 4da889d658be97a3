// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{BackoffPolicy, BackoffSchedule, RetryContext};
use core::future::Future;
use core::pin::Pin;
use core::task::{ready, Context, Poll};
use core::time::Duration;
use fluxion_extra_core::{FluxionError, StreamItem};
use fluxion_extra_runtime::Timer;
use futures::Stream;
use pin_project::pin_project;

/// Subscription state shared by retry and repeat.
///
/// Holds at most one live subscription or one pending wait, never both.
#[pin_project]
pub(crate) struct Resubscribe<F, S, TM: Timer> {
    factory: F,
    policy: BackoffPolicy,
    schedule: BackoffSchedule,
    timer: TM,
    attempts: u64,
    #[pin]
    current: Option<S>,
    #[pin]
    sleep: Option<TM::Sleep>,
}

impl<F, S, TM: Timer> Resubscribe<F, S, TM> {
    pub(crate) fn new(factory: F, policy: BackoffPolicy, timer: TM) -> Self {
        Self {
            factory,
            schedule: policy.schedule(),
            policy,
            timer,
            attempts: 0,
            current: None,
            sleep: None,
        }
    }

    /// Resubscriptions scheduled so far.
    pub(crate) fn attempts(&self) -> u64 {
        self.attempts
    }

    pub(crate) fn accepts(&self, error: &FluxionError) -> bool {
        self.policy.accepts(error)
    }

    /// Waits out a pending delay, subscribes if needed, then polls the
    /// subscription. The subscription is dropped when it yields anything
    /// other than a value.
    pub(crate) fn poll_current<T>(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
    ) -> Poll<Option<StreamItem<T>>>
    where
        F: FnMut() -> S,
        S: Stream<Item = StreamItem<T>>,
    {
        let mut this = self.project();

        if let Some(sleep) = this.sleep.as_mut().as_pin_mut() {
            ready!(sleep.poll(cx));
            this.sleep.set(None);
        }

        loop {
            if let Some(current) = this.current.as_mut().as_pin_mut() {
                let item = ready!(current.poll_next(cx));
                if !matches!(item, Some(StreamItem::Value(_))) {
                    this.current.set(None);
                }
                return Poll::Ready(item);
            }
            this.current.set(Some((this.factory)()));
        }
    }

    /// Takes the next delay from the schedule, reports it to the attempt
    /// hook and starts the wait. `None` once the schedule is spent.
    pub(crate) fn schedule_next(
        self: Pin<&mut Self>,
        error: Option<&FluxionError>,
    ) -> Option<Duration> {
        let mut this = self.project();
        let delay = this.schedule.next()?;

        *this.attempts += 1;
        this.policy.notify(&RetryContext {
            attempt: *this.attempts,
            delay,
            error,
        });
        this.sleep.set(Some(this.timer.sleep_future(delay)));
        Some(delay)
    }
}
