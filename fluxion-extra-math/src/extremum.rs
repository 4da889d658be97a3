// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{Accumulator, Comparator};
use core::cmp::Ordering;
use fluxion_extra_core::Result;

/// Keeps the least (or greatest) element seen under a [`Comparator`].
///
/// The best element is replaced only on strict improvement, so ties keep
/// the earliest one.
#[derive(Debug)]
pub struct Extremum<T, C> {
    best: Option<T>,
    comparator: C,
    wins_on: Ordering,
}

impl<T, C> Extremum<T, C> {
    pub fn min(comparator: C) -> Self {
        Self {
            best: None,
            comparator,
            wins_on: Ordering::Less,
        }
    }

    pub fn max(comparator: C) -> Self {
        Self {
            best: None,
            comparator,
            wins_on: Ordering::Greater,
        }
    }
}

impl<T, C: Comparator<T>> Accumulator<T> for Extremum<T, C> {
    type Output = T;

    fn accumulate(&mut self, item: T) -> Result<()> {
        let replace = match &self.best {
            Some(best) => self.comparator.compare(&item, best) == self.wins_on,
            None => true,
        };
        if replace {
            self.best = Some(item);
        }
        Ok(())
    }

    fn finish(self) -> Result<Option<T>> {
        Ok(self.best)
    }
}
