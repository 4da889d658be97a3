// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{Accumulator, IntoNumber, NumericValue};
use fluxion_extra_core::Result;

/// Running total in kind `R` of the values produced by `mapper`.
#[derive(Debug)]
pub struct Sum<R, F> {
    total: R,
    mapper: F,
}

impl<R: NumericValue, F> Sum<R, F> {
    pub fn new(mapper: F) -> Self {
        Self {
            total: R::zero(),
            mapper,
        }
    }
}

impl<T, R, F, N> Accumulator<T> for Sum<R, F>
where
    R: NumericValue,
    F: FnMut(T) -> N,
    N: IntoNumber,
{
    type Output = R;

    fn accumulate(&mut self, item: T) -> Result<()> {
        let value = R::from_number((self.mapper)(item).into_number())?;
        self.total.add_in_place(value);
        Ok(())
    }

    fn finish(self) -> Result<Option<R>> {
        Ok(Some(self.total))
    }
}
