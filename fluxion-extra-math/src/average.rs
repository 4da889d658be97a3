// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{Accumulator, IntoNumber, NumericValue};
use fluxion_extra_core::Result;

/// Running total and element count, divided in kind `R` on completion.
#[derive(Debug)]
pub struct Average<R, F> {
    total: R,
    count: u64,
    mapper: F,
}

impl<R: NumericValue, F> Average<R, F> {
    pub fn new(mapper: F) -> Self {
        Self {
            total: R::zero(),
            count: 0,
            mapper,
        }
    }
}

impl<T, R, F, N> Accumulator<T> for Average<R, F>
where
    R: NumericValue,
    F: FnMut(T) -> N,
    N: IntoNumber,
{
    type Output = R;

    fn accumulate(&mut self, item: T) -> Result<()> {
        let value = R::from_number((self.mapper)(item).into_number())?;
        self.total.add_in_place(value);
        self.count += 1;
        Ok(())
    }

    fn finish(self) -> Result<Option<R>> {
        self.total.divide(self.count).map(Some)
    }
}
