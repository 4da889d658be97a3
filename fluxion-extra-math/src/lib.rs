// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Numeric reductions over fluxion-extra sequences.
//!
//! Every reduction turns a sequence into a [`Single`](fluxion_extra_core::Single)
//! that emits one result when the upstream completes:
//!
//! - **sum / average** with an explicit result kind (`sum_as_i64`,
//!   `average_as_big_decimal`, ...), a kind inferred from the requested type
//!   (`sum_all::<f64>()`), a kind inferred from a mapper (`sum_of(|p| p.age)`),
//!   or a kind chosen at runtime (`sum_as(NumericKind::Float32)`).
//! - **min / max** by natural order, by a [`Comparator`], or by a closure.
//!
//! Elements are converted to the result kind one at a time, then added:
//!
//! | to | from floats | from wider integers |
//! |----|-------------|---------------------|
//! | `Int32`, `Int64` | truncated toward zero, saturating | wrapped |
//! | `Float32`, `Float64` | rounded to nearest | rounded to nearest |
//! | `BigInteger` | truncated, non-finite rejected | exact |
//! | `BigDecimal` | shortest decimal text, non-finite rejected | exact |
//!
//! Fixed-width integer sums wrap on overflow. An average over an empty
//! sequence fails with [`FluxionError::DivisionByZero`](fluxion_extra_core::FluxionError).
//!
//! # Example
//!
//! ```
//! use fluxion_extra_core::StreamItem;
//! use fluxion_extra_math::prelude::*;
//! use futures::stream;
//!
//! # #[tokio::main]
//! # async fn main() -> fluxion_extra_core::Result<()> {
//! let values = || stream::iter([3.5_f64, 1.5].map(StreamItem::Value));
//!
//! assert_eq!(values().sum_as_i32().await?, Some(4));
//! assert_eq!(values().sum().await?, Some(5.0));
//! # Ok(())
//! # }
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

mod aggregate;
mod average;
mod by_kind;
pub mod comparator;
mod extremum;
mod logging;
mod math_ext;
mod number;
mod numeric_kind;
mod numeric_value;
pub mod prelude;
mod sum;

pub use self::aggregate::{Accumulator, Aggregate};
pub use self::average::Average;
pub use self::by_kind::ByKind;
pub use self::comparator::{comparing, ByKey, Comparator, Natural, Reversed};
pub use self::extremum::Extremum;
pub use self::math_ext::{Identity, MathExt};
pub use self::number::{IntoNumber, Number};
pub use self::numeric_kind::NumericKind;
pub use self::numeric_value::NumericValue;
pub use self::sum::Sum;

pub use bigdecimal::BigDecimal;
pub use num_bigint::BigInt;
