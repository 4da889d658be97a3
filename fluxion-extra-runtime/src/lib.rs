// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Runtime abstraction for the time-driven operators of fluxion-extra.
//!
//! Operators never call a runtime directly; they ask a [`Timer`](timer::Timer)
//! for sleep futures. Enable `runtime-tokio` (default) for [`TokioTimer`].

pub mod impls;
pub mod timer;

#[cfg(feature = "runtime-tokio")]
pub use impls::tokio::TokioTimer;
pub use timer::Timer;
