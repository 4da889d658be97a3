// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! At-most-one-item sequences.
//!
//! A [`Single`] forwards the first item of its inner sequence and then
//! completes, whether that item is a value or an error. It is still a
//! [`Stream`], so every stream operator applies, and it can be awaited
//! directly to obtain `Result<Option<T>>`.
//!
//! ```
//! use fluxion_extra_core::single;
//!
//! # #[tokio::main]
//! # async fn main() -> fluxion_extra_core::Result<()> {
//! assert_eq!(single::just(7).await?, Some(7));
//! assert_eq!(single::empty::<i32>().await?, None);
//! # Ok(())
//! # }
//! ```

use crate::{Result, StreamItem};
use core::future::{Future, IntoFuture};
use core::pin::Pin;
use core::task::{Context, Poll};
use futures::{future, ready, stream, FutureExt, Stream, StreamExt};
use pin_project::pin_project;

/// A sequence that delivers at most one item and then completes.
#[pin_project]
#[must_use = "singles do nothing unless polled or awaited"]
#[derive(Debug)]
pub struct Single<S> {
    #[pin]
    inner: S,
    done: bool,
}

impl<S> Single<S> {
    /// Restricts `inner` to its first item.
    pub fn new(inner: S) -> Self {
        Self { inner, done: false }
    }

    /// Returns the wrapped sequence.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S, T> Single<S>
where
    S: Stream<Item = StreamItem<T>>,
{
    /// Transforms the value, if any. Errors and empty completion pass through.
    pub fn map<U, F>(self, mut f: F) -> Single<impl Stream<Item = StreamItem<U>>>
    where
        F: FnMut(T) -> U,
    {
        Single::new(StreamExt::map(self.inner, move |item| item.map(&mut f)))
    }
}

impl<S, T> Stream for Single<S>
where
    S: Stream<Item = StreamItem<T>>,
{
    type Item = StreamItem<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();

        if *this.done {
            return Poll::Ready(None);
        }

        let item = ready!(this.inner.poll_next(cx));
        *this.done = true;
        Poll::Ready(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            (0, Some(1))
        }
    }
}

impl<S, T> IntoFuture for Single<S>
where
    S: Stream<Item = StreamItem<T>>,
{
    type Output = Result<Option<T>>;
    type IntoFuture = SingleValue<S>;

    fn into_future(self) -> Self::IntoFuture {
        SingleValue { single: self }
    }
}

/// Future returned by awaiting a [`Single`].
///
/// Resolves to `Ok(Some(value))`, `Ok(None)` on empty completion, or the error.
#[pin_project]
#[must_use = "futures do nothing unless polled"]
#[derive(Debug)]
pub struct SingleValue<S> {
    #[pin]
    single: Single<S>,
}

impl<S, T> Future for SingleValue<S>
where
    S: Stream<Item = StreamItem<T>>,
{
    type Output = Result<Option<T>>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Poll::Ready(match ready!(self.project().single.poll_next(cx)) {
            Some(StreamItem::Value(value)) => Ok(Some(value)),
            Some(StreamItem::Error(error)) => Err(error),
            None => Ok(None),
        })
    }
}

/// A single holding `value`.
pub fn just<T>(value: T) -> Single<impl Stream<Item = StreamItem<T>>> {
    Single::new(stream::once(future::ready(StreamItem::Value(value))))
}

/// A single that completes without a value.
pub fn empty<T>() -> Single<impl Stream<Item = StreamItem<T>>> {
    Single::new(stream::empty())
}

/// A single that fails with `error`.
pub fn error<T>(error: crate::FluxionError) -> Single<impl Stream<Item = StreamItem<T>>> {
    Single::new(stream::once(future::ready(StreamItem::Error(error))))
}

/// Adapts a fallible future into a single. The future runs when the single is first polled.
pub fn from_future<F, T>(fut: F) -> Single<impl Stream<Item = StreamItem<T>>>
where
    F: Future<Output = Result<T>>,
{
    Single::new(stream::once(fut.map(StreamItem::from)))
}
