// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Orderings for `min_by` / `max_by`.
//!
//! Any `Fn(&T, &T) -> Ordering` is a [`Comparator`], so a comparator type and
//! a closure select the same element:
//!
//! ```
//! use fluxion_extra_math::{comparing, Comparator};
//! use std::cmp::Ordering;
//!
//! struct ByLength;
//!
//! impl Comparator<str> for ByLength {
//!     fn compare(&self, left: &str, right: &str) -> Ordering {
//!         left.len().cmp(&right.len())
//!     }
//! }
//!
//! let closure = |left: &str, right: &str| left.len().cmp(&right.len());
//! assert_eq!(ByLength.compare("a", "bb"), closure.compare("a", "bb"));
//! assert_eq!(comparing(|s: &str| s.len()).reversed().compare("a", "bb"), Ordering::Greater);
//! ```

use core::cmp::Ordering;

pub trait Comparator<T: ?Sized> {
    fn compare(&self, left: &T, right: &T) -> Ordering;

    /// The same comparator with its arguments swapped.
    fn reversed(self) -> Reversed<Self>
    where
        Self: Sized,
    {
        Reversed(self)
    }
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self(left, right)
    }
}

/// `PartialOrd` order, made total for floats.
///
/// A value that is not comparable with itself (NaN) sorts above every other
/// value and equal to another such value, so `min` skips NaN and `max` picks it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Natural;

impl<T: PartialOrd + ?Sized> Comparator<T> for Natural {
    fn compare(&self, left: &T, right: &T) -> Ordering {
        if let Some(ordering) = left.partial_cmp(right) {
            return ordering;
        }
        match (is_unordered(left), is_unordered(right)) {
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            _ => Ordering::Equal,
        }
    }
}

fn is_unordered<T: PartialOrd + ?Sized>(value: &T) -> bool {
    value.partial_cmp(value).is_none()
}

#[derive(Debug, Clone, Copy)]
pub struct Reversed<C>(C);

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Reversed<C> {
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self.0.compare(right, left)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ByKey<F>(F);

/// Orders elements by the `Ord` key extracted by `key`.
pub fn comparing<F>(key: F) -> ByKey<F> {
    ByKey(key)
}

impl<T: ?Sized, K: Ord, F> Comparator<T> for ByKey<F>
where
    F: Fn(&T) -> K,
{
    fn compare(&self, left: &T, right: &T) -> Ordering {
        (self.0)(left).cmp(&(self.0)(right))
    }
}
