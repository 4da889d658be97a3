// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::by_kind::Reduction;
use crate::{
    Aggregate, Average, ByKind, Comparator, Extremum, IntoNumber, Natural, NumericKind,
    NumericValue, Sum,
};
use bigdecimal::BigDecimal;
use core::cmp::Ordering;
use core::convert::identity;
use fluxion_extra_core::{Single, StreamItem};
use futures::Stream;
use num_bigint::BigInt;

/// Mapper used when elements are reduced as they are.
pub type Identity<T> = fn(T) -> T;

/// Reductions to one value for any sequence.
///
/// Every method returns a [`Single`] that emits its result once the upstream
/// completes, or the first upstream or conversion error. State is created per
/// reduction and never shared.
///
/// # Example
///
/// ```
/// use fluxion_extra_core::StreamItem;
/// use fluxion_extra_math::{MathExt, NumericKind, Number};
/// use futures::stream;
///
/// # #[tokio::main]
/// # async fn main() -> fluxion_extra_core::Result<()> {
/// let ages = || stream::iter([18_u32, 80, 1].map(StreamItem::Value));
///
/// assert_eq!(ages().average_as_i32().await?, Some(33));
/// assert_eq!(ages().sum_all::<i64>().await?, Some(99));
/// assert_eq!(ages().sum_as(NumericKind::Float32).await?, Some(Number::F32(99.0)));
/// assert_eq!(ages().max().await?, Some(80));
/// # Ok(())
/// # }
/// ```
pub trait MathExt<T>: Stream<Item = StreamItem<T>> + Sized {
    /// Sums in the element's own kind.
    fn sum(self) -> Single<Aggregate<Self, Sum<T, Identity<T>>>>
    where
        T: NumericValue,
    {
        self.sum_all()
    }

    /// Sums in kind `R`, usually inferred from the awaited type.
    fn sum_all<R>(self) -> Single<Aggregate<Self, Sum<R, Identity<T>>>>
    where
        R: NumericValue,
        T: IntoNumber,
    {
        self.sum_by(identity as Identity<T>)
    }

    fn sum_as_i32(self) -> Single<Aggregate<Self, Sum<i32, Identity<T>>>>
    where
        T: IntoNumber,
    {
        self.sum_all()
    }

    fn sum_as_i64(self) -> Single<Aggregate<Self, Sum<i64, Identity<T>>>>
    where
        T: IntoNumber,
    {
        self.sum_all()
    }

    fn sum_as_f32(self) -> Single<Aggregate<Self, Sum<f32, Identity<T>>>>
    where
        T: IntoNumber,
    {
        self.sum_all()
    }

    fn sum_as_f64(self) -> Single<Aggregate<Self, Sum<f64, Identity<T>>>>
    where
        T: IntoNumber,
    {
        self.sum_all()
    }

    fn sum_as_big_int(self) -> Single<Aggregate<Self, Sum<BigInt, Identity<T>>>>
    where
        T: IntoNumber,
    {
        self.sum_all()
    }

    fn sum_as_big_decimal(self) -> Single<Aggregate<Self, Sum<BigDecimal, Identity<T>>>>
    where
        T: IntoNumber,
    {
        self.sum_all()
    }

    /// Sums the values produced by `mapper`, in the mapper's result kind.
    fn sum_of<N, F>(self, mapper: F) -> Single<Aggregate<Self, Sum<N, F>>>
    where
        F: FnMut(T) -> N,
        N: NumericValue,
    {
        self.sum_by(mapper)
    }

    /// Sums the values produced by `mapper`, converted to kind `R`.
    fn sum_by<R, N, F>(self, mapper: F) -> Single<Aggregate<Self, Sum<R, F>>>
    where
        R: NumericValue,
        F: FnMut(T) -> N,
        N: IntoNumber,
    {
        Single::new(Aggregate::new(self, Sum::new(mapper)))
    }

    /// Sums in a kind chosen at runtime. The result is a dynamically typed
    /// [`Number`](crate::Number) of that kind.
    fn sum_as(self, kind: NumericKind) -> Single<Aggregate<Self, ByKind<Identity<T>>>>
    where
        T: IntoNumber,
    {
        Single::new(Aggregate::new(
            self,
            ByKind::new(Ok(kind), Reduction::Sum, identity as Identity<T>),
        ))
    }

    /// Like [`sum_as`](MathExt::sum_as) with the kind given by name.
    ///
    /// An unknown name fails with `ConversionUnsupported` carrying the name,
    /// without polling the upstream.
    fn sum_as_named(self, name: &str) -> Single<Aggregate<Self, ByKind<Identity<T>>>>
    where
        T: IntoNumber,
    {
        Single::new(Aggregate::new(
            self,
            ByKind::new(name.parse(), Reduction::Sum, identity as Identity<T>),
        ))
    }

    /// Averages in the element's own kind.
    fn average(self) -> Single<Aggregate<Self, Average<T, Identity<T>>>>
    where
        T: NumericValue,
    {
        self.average_all()
    }

    /// Averages in kind `R`, usually inferred from the awaited type.
    fn average_all<R>(self) -> Single<Aggregate<Self, Average<R, Identity<T>>>>
    where
        R: NumericValue,
        T: IntoNumber,
    {
        self.average_by(identity as Identity<T>)
    }

    fn average_as_i32(self) -> Single<Aggregate<Self, Average<i32, Identity<T>>>>
    where
        T: IntoNumber,
    {
        self.average_all()
    }

    fn average_as_i64(self) -> Single<Aggregate<Self, Average<i64, Identity<T>>>>
    where
        T: IntoNumber,
    {
        self.average_all()
    }

    fn average_as_f32(self) -> Single<Aggregate<Self, Average<f32, Identity<T>>>>
    where
        T: IntoNumber,
    {
        self.average_all()
    }

    fn average_as_f64(self) -> Single<Aggregate<Self, Average<f64, Identity<T>>>>
    where
        T: IntoNumber,
    {
        self.average_all()
    }

    fn average_as_big_int(self) -> Single<Aggregate<Self, Average<BigInt, Identity<T>>>>
    where
        T: IntoNumber,
    {
        self.average_all()
    }

    fn average_as_big_decimal(self) -> Single<Aggregate<Self, Average<BigDecimal, Identity<T>>>>
    where
        T: IntoNumber,
    {
        self.average_all()
    }

    /// Averages the values produced by `mapper`, in the mapper's result kind.
    fn average_of<N, F>(self, mapper: F) -> Single<Aggregate<Self, Average<N, F>>>
    where
        F: FnMut(T) -> N,
        N: NumericValue,
    {
        self.average_by(mapper)
    }

    /// Averages the values produced by `mapper`, converted to kind `R`.
    fn average_by<R, N, F>(self, mapper: F) -> Single<Aggregate<Self, Average<R, F>>>
    where
        R: NumericValue,
        F: FnMut(T) -> N,
        N: IntoNumber,
    {
        Single::new(Aggregate::new(self, Average::new(mapper)))
    }

    /// Averages in a kind chosen at runtime.
    fn average_as(self, kind: NumericKind) -> Single<Aggregate<Self, ByKind<Identity<T>>>>
    where
        T: IntoNumber,
    {
        Single::new(Aggregate::new(
            self,
            ByKind::new(Ok(kind), Reduction::Average, identity as Identity<T>),
        ))
    }

    /// Like [`average_as`](MathExt::average_as) with the kind given by name.
    fn average_as_named(self, name: &str) -> Single<Aggregate<Self, ByKind<Identity<T>>>>
    where
        T: IntoNumber,
    {
        Single::new(Aggregate::new(
            self,
            ByKind::new(name.parse(), Reduction::Average, identity as Identity<T>),
        ))
    }

    /// Least element by `PartialOrd`. Empty input completes without a value.
    fn min(self) -> Single<Aggregate<Self, Extremum<T, Natural>>>
    where
        T: PartialOrd,
    {
        self.min_by(Natural)
    }

    /// Greatest element by `PartialOrd`. Empty input completes without a value.
    fn max(self) -> Single<Aggregate<Self, Extremum<T, Natural>>>
    where
        T: PartialOrd,
    {
        self.max_by(Natural)
    }

    fn min_by<C>(self, comparator: C) -> Single<Aggregate<Self, Extremum<T, C>>>
    where
        C: Comparator<T>,
    {
        Single::new(Aggregate::new(self, Extremum::min(comparator)))
    }

    fn max_by<C>(self, comparator: C) -> Single<Aggregate<Self, Extremum<T, C>>>
    where
        C: Comparator<T>,
    {
        Single::new(Aggregate::new(self, Extremum::max(comparator)))
    }

    /// [`min_by`](MathExt::min_by) taking the comparison closure directly.
    fn min_with<F>(self, compare: F) -> Single<Aggregate<Self, Extremum<T, F>>>
    where
        F: Fn(&T, &T) -> Ordering,
    {
        self.min_by(compare)
    }

    /// [`max_by`](MathExt::max_by) taking the comparison closure directly.
    fn max_with<F>(self, compare: F) -> Single<Aggregate<Self, Extremum<T, F>>>
    where
        F: Fn(&T, &T) -> Ordering,
    {
        self.max_by(compare)
    }
}

impl<S, T> MathExt<T> for S where S: Stream<Item = StreamItem<T>> + Sized {}
