// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core types shared by every fluxion-extra operator.
//!
//! - [`StreamItem`] carries either a value or a terminal [`FluxionError`].
//! - [`Sequence`] names any stream of `StreamItem<T>`.
//! - [`Single`] restricts a sequence to at most one item and can be awaited.
//!
//! Boolean combinators for `Single<bool>` sequences live on [`Single`] itself.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

mod boolean;
pub mod error;
mod sequence;
pub mod single;
mod stream_item;

pub use self::error::{FluxionError, IntoFluxionError, Result};
pub use self::sequence::Sequence;
pub use self::single::{Single, SingleValue};
pub use self::stream_item::StreamItem;
