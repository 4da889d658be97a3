// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{Accumulator, IntoNumber, Number, NumericKind, NumericValue};
use bigdecimal::BigDecimal;
use fluxion_extra_core::Result;
use num_bigint::BigInt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Reduction {
    Sum,
    Average,
}

#[derive(Debug)]
enum Total {
    Int32(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
    BigInteger(BigInt),
    BigDecimal(BigDecimal),
}

macro_rules! each_total {
    ($total:expr, $value:ident => $body:expr) => {
        match $total {
            Total::Int32($value) => $body,
            Total::Int64($value) => $body,
            Total::Float32($value) => $body,
            Total::Float64($value) => $body,
            Total::BigInteger($value) => $body,
            Total::BigDecimal($value) => $body,
        }
    };
}

impl Total {
    fn zero(kind: NumericKind) -> Self {
        match kind {
            NumericKind::Int32 => Self::Int32(NumericValue::zero()),
            NumericKind::Int64 => Self::Int64(NumericValue::zero()),
            NumericKind::Float32 => Self::Float32(NumericValue::zero()),
            NumericKind::Float64 => Self::Float64(NumericValue::zero()),
            NumericKind::BigInteger => Self::BigInteger(NumericValue::zero()),
            NumericKind::BigDecimal => Self::BigDecimal(NumericValue::zero()),
        }
    }
}

/// Sum or average whose result kind is chosen at runtime.
///
/// The kind is resolved when the reduction is built. An unresolvable kind
/// fails the reduction on its first poll, before any element is requested.
#[derive(Debug)]
pub struct ByKind<F> {
    state: Result<Total>,
    reduction: Reduction,
    count: u64,
    mapper: F,
}

impl<F> ByKind<F> {
    pub(crate) fn new(kind: Result<NumericKind>, reduction: Reduction, mapper: F) -> Self {
        Self {
            state: kind.map(Total::zero),
            reduction,
            count: 0,
            mapper,
        }
    }
}

impl<T, F, N> Accumulator<T> for ByKind<F>
where
    F: FnMut(T) -> N,
    N: IntoNumber,
{
    type Output = Number;

    fn start(&mut self) -> Result<()> {
        match &self.state {
            Ok(_) => Ok(()),
            Err(error) => Err(error.clone()),
        }
    }

    fn accumulate(&mut self, item: T) -> Result<()> {
        let total = match &mut self.state {
            Ok(total) => total,
            Err(error) => return Err(error.clone()),
        };
        let number = (self.mapper)(item).into_number();
        each_total!(total, t => t.add_in_place(NumericValue::from_number(number)?));
        self.count += 1;
        Ok(())
    }

    fn finish(self) -> Result<Option<Number>> {
        let total = self.state?;
        let number = match self.reduction {
            Reduction::Sum => each_total!(total, t => t.into_number()),
            Reduction::Average => each_total!(total, t => t.divide(self.count)?.into_number()),
        };
        Ok(Some(number))
    }
}
