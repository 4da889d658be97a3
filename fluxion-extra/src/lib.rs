// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Extras for `StreamItem` sequences: numeric reductions, boolean
//! combinators on singles, and retry or repeat with backoff.
//!
//! ```rust
//! use fluxion_extra::prelude::*;
//! use std::time::Duration;
//! use tokio::sync::mpsc;
//!
//! # #[tokio::main(flavor = "current_thread", start_paused = true)]
//! # async fn main() -> fluxion_extra::Result<()> {
//! let (tx, rx) = mpsc::unbounded_channel();
//! for reading in [21.5_f64, 22.0, 23.5] {
//!     tx.send(reading).ok();
//! }
//! drop(tx);
//!
//! let average = rx.into_sequence().average().await?;
//! assert_eq!(average, Some(67.0 / 3.0));
//!
//! let policy = BackoffPolicy::fixed(2, Duration::from_millis(50))?;
//! let repeated = (|| futures::stream::iter([StreamItem::Value(1_u8)]))
//!     .repeat_backoff(policy)
//!     .sum_as_i32()
//!     .await?;
//! assert_eq!(repeated, Some(3));
//! # Ok(())
//! # }
//! ```

mod mpsc_ext;
mod oneshot_ext;

pub use fluxion_extra_core::{
    single, FluxionError, IntoFluxionError, Result, Sequence, Single, StreamItem,
};
pub use fluxion_extra_math as math;
pub use fluxion_extra_retry as retry;
pub use fluxion_extra_runtime::Timer;

pub use mpsc_ext::{SequenceFromReceiver, UnboundedReceiverExt};
pub use oneshot_ext::OneshotReceiverExt;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{OneshotReceiverExt, UnboundedReceiverExt};
    pub use fluxion_extra_core::{FluxionError, Result, Single, StreamItem};
    pub use fluxion_extra_math::prelude::*;
    pub use fluxion_extra_retry::prelude::*;
}
