// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt;
use core::str::FromStr;
use fluxion_extra_core::FluxionError;

/// The closed set of reduction result kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericKind {
    Int32,
    Int64,
    Float32,
    Float64,
    /// Arbitrary precision integer ([`num_bigint::BigInt`])
    BigInteger,
    /// Arbitrary precision decimal ([`bigdecimal::BigDecimal`])
    BigDecimal,
}

impl NumericKind {
    pub const ALL: [Self; 6] = [
        Self::Int32,
        Self::Int64,
        Self::Float32,
        Self::Float64,
        Self::BigInteger,
        Self::BigDecimal,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Int32 => "Int32",
            Self::Int64 => "Int64",
            Self::Float32 => "Float32",
            Self::Float64 => "Float64",
            Self::BigInteger => "BigInteger",
            Self::BigDecimal => "BigDecimal",
        }
    }
}

impl fmt::Display for NumericKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses a kind name: `Int32` or `i32`, `Int64` or `i64`, `Float32` or `f32`,
/// `Float64` or `f64`, `BigInteger` or `BigInt`, and `BigDecimal`.
///
/// Any other name fails with [`FluxionError::ConversionUnsupported`].
impl FromStr for NumericKind {
    type Err = FluxionError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "Int32" | "i32" => Ok(Self::Int32),
            "Int64" | "i64" => Ok(Self::Int64),
            "Float32" | "f32" => Ok(Self::Float32),
            "Float64" | "f64" => Ok(Self::Float64),
            "BigInteger" | "BigInt" => Ok(Self::BigInteger),
            "BigDecimal" => Ok(Self::BigDecimal),
            other => Err(FluxionError::conversion_unsupported(other)),
        }
    }
}
