// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::StreamItem;
use futures::Stream;

/// A stream of [`StreamItem`]s: zero or more values followed by completion or one error.
///
/// Blanket-implemented for every matching stream; used as a bound shorthand.
pub trait Sequence<T>: Stream<Item = StreamItem<T>> {}

impl<S, T> Sequence<T> for S where S: Stream<Item = StreamItem<T>> {}
