// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude re-exporting the reduction trait and the types its results use.
//!
//! ```ignore
//! use fluxion_extra_math::prelude::*;
//!
//! let total = sequence.sum_as_big_decimal().await?;
//! ```

pub use crate::comparator::{comparing, Comparator};
pub use crate::{BigDecimal, BigInt, IntoNumber, MathExt, Number, NumericKind, NumericValue};
