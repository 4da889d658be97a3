// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::logging::debug;
use core::pin::Pin;
use core::task::{Context, Poll};
use fluxion_extra_core::{Result, StreamItem};
use futures::Stream;
use pin_project::pin_project;

/// Per-subscription reduction state driven by [`Aggregate`].
pub trait Accumulator<T> {
    type Output;

    /// Called once, on the first poll and before the upstream is polled.
    ///
    /// An error here fails the reduction without consuming any element.
    fn start(&mut self) -> Result<()> {
        Ok(())
    }

    fn accumulate(&mut self, item: T) -> Result<()>;

    /// Produces the result on upstream completion. `None` completes empty.
    fn finish(self) -> Result<Option<Self::Output>>;
}

/// Drains an upstream sequence into an [`Accumulator`] and emits at most one item.
///
/// The accumulator is dropped as soon as the reduction ends, whether by
/// completion, upstream error or accumulation error. No partial result is
/// emitted after an error.
#[pin_project]
#[must_use = "streams do nothing unless polled"]
pub struct Aggregate<S, A> {
    #[pin]
    upstream: S,
    accumulator: Option<A>,
    started: bool,
}

impl<S, A> Aggregate<S, A> {
    pub fn new(upstream: S, accumulator: A) -> Self {
        Self {
            upstream,
            accumulator: Some(accumulator),
            started: false,
        }
    }
}

impl<S, T, A> Stream for Aggregate<S, A>
where
    S: Stream<Item = StreamItem<T>>,
    A: Accumulator<T>,
{
    type Item = StreamItem<A::Output>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        if !*this.started {
            *this.started = true;
            if let Some(accumulator) = this.accumulator.as_mut() {
                if let Err(error) = accumulator.start() {
                    debug!("aggregation rejected before subscription: {}", error);
                    *this.accumulator = None;
                    return Poll::Ready(Some(StreamItem::Error(error)));
                }
            }
        }

        loop {
            let Some(accumulator) = this.accumulator.as_mut() else {
                return Poll::Ready(None);
            };

            match this.upstream.as_mut().poll_next(cx) {
                Poll::Ready(Some(StreamItem::Value(value))) => {
                    if let Err(error) = accumulator.accumulate(value) {
                        debug!("aggregation failed: {}", error);
                        *this.accumulator = None;
                        return Poll::Ready(Some(StreamItem::Error(error)));
                    }
                }
                Poll::Ready(Some(StreamItem::Error(error))) => {
                    *this.accumulator = None;
                    return Poll::Ready(Some(StreamItem::Error(error)));
                }
                Poll::Ready(None) => {
                    let finished = this.accumulator.take().map(|acc| acc.finish());
                    return match finished {
                        Some(Ok(Some(output))) => Poll::Ready(Some(StreamItem::Value(output))),
                        Some(Ok(None)) | None => Poll::Ready(None),
                        Some(Err(error)) => {
                            debug!("aggregation failed on completion: {}", error);
                            Poll::Ready(Some(StreamItem::Error(error)))
                        }
                    };
                }
                Poll::Pending => return Poll::Pending,
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.accumulator.is_some() {
            (0, Some(1))
        } else {
            (0, Some(0))
        }
    }
}
