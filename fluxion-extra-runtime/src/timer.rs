// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt::Debug;
use core::future::Future;
use core::time::Duration;

/// Source of sleep futures for backoff waits.
///
/// The sleep future is owned by the operator that requested it; dropping it
/// cancels the wait.
pub trait Timer: Clone + Send + Sync + Debug + 'static {
    type Sleep: Future<Output = ()>;

    fn sleep_future(&self, duration: Duration) -> Self::Sleep;
}
