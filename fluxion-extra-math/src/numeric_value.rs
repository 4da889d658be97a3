// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss
)]

use crate::{IntoNumber, Number, NumericKind};
use bigdecimal::BigDecimal;
use core::fmt::{Debug, Display};
use core::str::FromStr;
use fluxion_extra_core::{FluxionError, Result};
use num_bigint::{BigInt, Sign};
use num_traits::{FromPrimitive, ToPrimitive, Zero};

/// A reduction result representation.
///
/// Implemented by exactly one type per [`NumericKind`]: `i32`, `i64`, `f32`,
/// `f64`, [`BigInt`] and [`BigDecimal`].
pub trait NumericValue: IntoNumber + Clone + Debug + Sized {
    const KIND: NumericKind;

    /// The additive identity, emitted by sums over empty sequences.
    fn zero() -> Self;

    /// Converts one element into this kind.
    ///
    /// # Errors
    ///
    /// [`FluxionError::InvalidNumber`] when the value has no representation,
    /// such as a non-finite float converted to an arbitrary precision kind.
    fn from_number(number: Number) -> Result<Self>;

    /// Adds `other`. Fixed-width integers wrap on overflow.
    fn add_in_place(&mut self, other: Self);

    /// Divides a total by an element count. Integer kinds truncate.
    ///
    /// # Errors
    ///
    /// [`FluxionError::DivisionByZero`] when `count` is zero.
    fn divide(self, count: u64) -> Result<Self>;
}

fn ensure_count(count: u64) -> Result<i64> {
    if count == 0 {
        return Err(FluxionError::division_by_zero(
            "average of an empty sequence",
        ));
    }
    Ok(i64::try_from(count).unwrap_or(i64::MAX))
}

fn invalid(value: impl Display, kind: NumericKind) -> FluxionError {
    FluxionError::invalid_number(value, kind.name())
}

/// Two's complement low 64 bits, the same bits a narrowing integer cast keeps.
fn low_64_bits(value: &BigInt) -> u64 {
    let fill = if value.sign() == Sign::Minus { 0xff } else { 0 };
    let mut bytes = [fill; 8];
    for (slot, byte) in bytes.iter_mut().zip(value.to_signed_bytes_le()) {
        *slot = byte;
    }
    u64::from_le_bytes(bytes)
}

fn truncate(value: &BigDecimal) -> BigInt {
    value.with_scale(0).into_bigint_and_exponent().0
}

fn float_to_big_int(value: f64) -> Result<BigInt> {
    if !value.is_finite() {
        return Err(invalid(value, NumericKind::BigInteger));
    }
    BigInt::from_f64(value.trunc()).ok_or_else(|| invalid(value, NumericKind::BigInteger))
}

fn float_to_big_decimal(value: impl Display, finite: bool) -> Result<BigDecimal> {
    let text = value.to_string();
    if !finite {
        return Err(invalid(text, NumericKind::BigDecimal));
    }
    BigDecimal::from_str(&text).map_err(|_| invalid(&text, NumericKind::BigDecimal))
}

impl NumericValue for i32 {
    const KIND: NumericKind = NumericKind::Int32;

    fn zero() -> Self {
        0
    }

    fn from_number(number: Number) -> Result<Self> {
        Ok(match number {
            Number::I8(v) => Self::from(v),
            Number::I16(v) => Self::from(v),
            Number::I32(v) => v,
            Number::I64(v) => v as Self,
            Number::U8(v) => Self::from(v),
            Number::U16(v) => Self::from(v),
            Number::U32(v) => v as Self,
            Number::U64(v) => v as Self,
            Number::F32(v) => v as Self,
            Number::F64(v) => v as Self,
            Number::BigInt(v) => low_64_bits(&v) as Self,
            Number::BigDecimal(v) => low_64_bits(&truncate(&v)) as Self,
        })
    }

    fn add_in_place(&mut self, other: Self) {
        *self = self.wrapping_add(other);
    }

    fn divide(self, count: u64) -> Result<Self> {
        let divisor = ensure_count(count)?;
        Ok((i64::from(self) / divisor) as Self)
    }
}

impl NumericValue for i64 {
    const KIND: NumericKind = NumericKind::Int64;

    fn zero() -> Self {
        0
    }

    fn from_number(number: Number) -> Result<Self> {
        Ok(match number {
            Number::I8(v) => Self::from(v),
            Number::I16(v) => Self::from(v),
            Number::I32(v) => Self::from(v),
            Number::I64(v) => v,
            Number::U8(v) => Self::from(v),
            Number::U16(v) => Self::from(v),
            Number::U32(v) => Self::from(v),
            Number::U64(v) => v as Self,
            Number::F32(v) => v as Self,
            Number::F64(v) => v as Self,
            Number::BigInt(v) => low_64_bits(&v) as Self,
            Number::BigDecimal(v) => low_64_bits(&truncate(&v)) as Self,
        })
    }

    fn add_in_place(&mut self, other: Self) {
        *self = self.wrapping_add(other);
    }

    fn divide(self, count: u64) -> Result<Self> {
        let divisor = ensure_count(count)?;
        Ok(self / divisor)
    }
}

impl NumericValue for f32 {
    const KIND: NumericKind = NumericKind::Float32;

    fn zero() -> Self {
        0.0
    }

    fn from_number(number: Number) -> Result<Self> {
        Ok(match number {
            Number::I8(v) => Self::from(v),
            Number::I16(v) => Self::from(v),
            Number::I32(v) => v as Self,
            Number::I64(v) => v as Self,
            Number::U8(v) => Self::from(v),
            Number::U16(v) => Self::from(v),
            Number::U32(v) => v as Self,
            Number::U64(v) => v as Self,
            Number::F32(v) => v,
            Number::F64(v) => v as Self,
            Number::BigInt(v) => v.to_f32().ok_or_else(|| invalid(&v, Self::KIND))?,
            Number::BigDecimal(v) => v.to_f32().ok_or_else(|| invalid(&v, Self::KIND))?,
        })
    }

    fn add_in_place(&mut self, other: Self) {
        *self += other;
    }

    fn divide(self, count: u64) -> Result<Self> {
        ensure_count(count)?;
        Ok(self / count as Self)
    }
}

impl NumericValue for f64 {
    const KIND: NumericKind = NumericKind::Float64;

    fn zero() -> Self {
        0.0
    }

    fn from_number(number: Number) -> Result<Self> {
        Ok(match number {
            Number::I8(v) => Self::from(v),
            Number::I16(v) => Self::from(v),
            Number::I32(v) => Self::from(v),
            Number::I64(v) => v as Self,
            Number::U8(v) => Self::from(v),
            Number::U16(v) => Self::from(v),
            Number::U32(v) => Self::from(v),
            Number::U64(v) => v as Self,
            Number::F32(v) => Self::from(v),
            Number::F64(v) => v,
            Number::BigInt(v) => v.to_f64().ok_or_else(|| invalid(&v, Self::KIND))?,
            Number::BigDecimal(v) => v.to_f64().ok_or_else(|| invalid(&v, Self::KIND))?,
        })
    }

    fn add_in_place(&mut self, other: Self) {
        *self += other;
    }

    fn divide(self, count: u64) -> Result<Self> {
        ensure_count(count)?;
        Ok(self / count as Self)
    }
}

impl NumericValue for BigInt {
    const KIND: NumericKind = NumericKind::BigInteger;

    fn zero() -> Self {
        Zero::zero()
    }

    fn from_number(number: Number) -> Result<Self> {
        Ok(match number {
            Number::I8(v) => Self::from(v),
            Number::I16(v) => Self::from(v),
            Number::I32(v) => Self::from(v),
            Number::I64(v) => Self::from(v),
            Number::U8(v) => Self::from(v),
            Number::U16(v) => Self::from(v),
            Number::U32(v) => Self::from(v),
            Number::U64(v) => Self::from(v),
            Number::F32(v) => float_to_big_int(f64::from(v))?,
            Number::F64(v) => float_to_big_int(v)?,
            Number::BigInt(v) => v,
            Number::BigDecimal(v) => truncate(&v),
        })
    }

    fn add_in_place(&mut self, other: Self) {
        *self += other;
    }

    fn divide(self, count: u64) -> Result<Self> {
        ensure_count(count)?;
        Ok(self / Self::from(count))
    }
}

impl NumericValue for BigDecimal {
    const KIND: NumericKind = NumericKind::BigDecimal;

    fn zero() -> Self {
        Zero::zero()
    }

    fn from_number(number: Number) -> Result<Self> {
        match number {
            Number::I8(v) => Ok(Self::from(i64::from(v))),
            Number::I16(v) => Ok(Self::from(i64::from(v))),
            Number::I32(v) => Ok(Self::from(i64::from(v))),
            Number::I64(v) => Ok(Self::from(v)),
            Number::U8(v) => Ok(Self::from(u64::from(v))),
            Number::U16(v) => Ok(Self::from(u64::from(v))),
            Number::U32(v) => Ok(Self::from(u64::from(v))),
            Number::U64(v) => Ok(Self::from(v)),
            Number::F32(v) => float_to_big_decimal(v, v.is_finite()),
            Number::F64(v) => float_to_big_decimal(v, v.is_finite()),
            Number::BigInt(v) => Ok(Self::new(v, 0)),
            Number::BigDecimal(v) => Ok(v),
        }
    }

    fn add_in_place(&mut self, other: Self) {
        *self += other;
    }

    fn divide(self, count: u64) -> Result<Self> {
        ensure_count(count)?;
        Ok(self / Self::from(count))
    }
}
