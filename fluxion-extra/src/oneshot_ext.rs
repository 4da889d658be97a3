// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use fluxion_extra_core::{single, FluxionError, Single, StreamItem};
use futures::{FutureExt, Stream};
use tokio::sync::oneshot;

/// Extension trait turning a tokio `oneshot::Receiver` into a [`Single`].
pub trait OneshotReceiverExt<T> {
    /// Emits the sent value. A sender dropped without sending surfaces as a
    /// `StreamProcessingError`.
    fn into_single(self) -> Single<impl Stream<Item = StreamItem<T>>>;
}

impl<T> OneshotReceiverExt<T> for oneshot::Receiver<T> {
    fn into_single(self) -> Single<impl Stream<Item = StreamItem<T>>> {
        single::from_future(self.map(|received| {
            received.map_err(|_| {
                FluxionError::stream_error("oneshot sender dropped before sending")
            })
        }))
    }
}
