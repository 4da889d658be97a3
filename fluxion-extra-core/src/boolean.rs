// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Boolean combinators for singles of `bool`.
//!
//! Binary combinators await both operands concurrently. The first error
//! fails the result; an empty operand makes the result empty.

use crate::{Single, StreamItem};
use core::future::IntoFuture;
use core::ops::Not;
use futures::future::{self, try_join};
use futures::stream::{self, Map};
use futures::{Stream, StreamExt};

impl<S> Single<S>
where
    S: Stream<Item = StreamItem<bool>>,
{
    /// `self && other`
    pub fn logical_and<O>(self, other: Single<O>) -> Single<impl Stream<Item = StreamItem<bool>>>
    where
        O: Stream<Item = StreamItem<bool>>,
    {
        self.combine(other, |a, b| a && b)
    }

    /// `self || other`
    pub fn logical_or<O>(self, other: Single<O>) -> Single<impl Stream<Item = StreamItem<bool>>>
    where
        O: Stream<Item = StreamItem<bool>>,
    {
        self.combine(other, |a, b| a || b)
    }

    /// `!(self && other)`
    pub fn logical_nand<O>(self, other: Single<O>) -> Single<impl Stream<Item = StreamItem<bool>>>
    where
        O: Stream<Item = StreamItem<bool>>,
    {
        self.combine(other, |a, b| !(a && b))
    }

    /// `!(self || other)`
    pub fn logical_nor<O>(self, other: Single<O>) -> Single<impl Stream<Item = StreamItem<bool>>>
    where
        O: Stream<Item = StreamItem<bool>>,
    {
        self.combine(other, |a, b| !(a || b))
    }

    /// `self ^ other`
    pub fn logical_xor<O>(self, other: Single<O>) -> Single<impl Stream<Item = StreamItem<bool>>>
    where
        O: Stream<Item = StreamItem<bool>>,
    {
        self.combine(other, |a, b| a ^ b)
    }

    /// Negates the value. Same as the `!` operator.
    pub fn logical_not(self) -> <Self as Not>::Output {
        !self
    }

    fn combine<O>(
        self,
        other: Single<O>,
        op: fn(bool, bool) -> bool,
    ) -> Single<impl Stream<Item = StreamItem<bool>>>
    where
        O: Stream<Item = StreamItem<bool>>,
    {
        let both = async move {
            let (left, right) = (IntoFuture::into_future(self), IntoFuture::into_future(other));
            match try_join(left, right).await {
                Ok((Some(a), Some(b))) => Some(StreamItem::Value(op(a, b))),
                Ok(_) => None,
                Err(error) => Some(StreamItem::Error(error)),
            }
        };
        Single::new(stream::once(both).filter_map(future::ready))
    }
}

fn negate(item: StreamItem<bool>) -> StreamItem<bool> {
    item.map(|value| !value)
}

impl<S> Not for Single<S>
where
    S: Stream<Item = StreamItem<bool>>,
{
    type Output = Single<Map<Self, fn(StreamItem<bool>) -> StreamItem<bool>>>;

    fn not(self) -> Self::Output {
        Single::new(StreamExt::map(self, negate as fn(_) -> _))
    }
}
