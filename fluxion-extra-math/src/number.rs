// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use bigdecimal::BigDecimal;
use core::fmt;
use num_bigint::BigInt;

/// A dynamically typed numeric element.
///
/// Every element entering a reduction is first turned into a `Number`, then
/// converted to the result kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    BigInt(BigInt),
    BigDecimal(BigDecimal),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::I8(v) => fmt::Display::fmt(v, f),
            Self::I16(v) => fmt::Display::fmt(v, f),
            Self::I32(v) => fmt::Display::fmt(v, f),
            Self::I64(v) => fmt::Display::fmt(v, f),
            Self::U8(v) => fmt::Display::fmt(v, f),
            Self::U16(v) => fmt::Display::fmt(v, f),
            Self::U32(v) => fmt::Display::fmt(v, f),
            Self::U64(v) => fmt::Display::fmt(v, f),
            Self::F32(v) => fmt::Display::fmt(v, f),
            Self::F64(v) => fmt::Display::fmt(v, f),
            Self::BigInt(v) => fmt::Display::fmt(v, f),
            Self::BigDecimal(v) => fmt::Display::fmt(v, f),
        }
    }
}

/// Conversion of an element into a [`Number`].
pub trait IntoNumber {
    fn into_number(self) -> Number;
}

impl IntoNumber for Number {
    fn into_number(self) -> Number {
        self
    }
}

macro_rules! impl_into_number {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl IntoNumber for $ty {
                fn into_number(self) -> Number {
                    Number::$variant(self)
                }
            }

            impl From<$ty> for Number {
                fn from(value: $ty) -> Self {
                    Number::$variant(value)
                }
            }
        )*
    };
}

impl_into_number! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    BigInt => BigInt,
    BigDecimal => BigDecimal,
}

// Pointer-sized integers are at most 64 bits on supported targets.
#[allow(clippy::cast_possible_truncation)]
impl IntoNumber for isize {
    fn into_number(self) -> Number {
        Number::I64(self as i64)
    }
}

#[allow(clippy::cast_possible_truncation)]
impl IntoNumber for usize {
    fn into_number(self) -> Number {
        Number::U64(self as u64)
    }
}

impl<T: IntoNumber + Clone> IntoNumber for &T {
    fn into_number(self) -> Number {
        self.clone().into_number()
    }
}
