// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Extension methods for tokio `UnboundedReceiver` to create sequences.

use fluxion_extra_core::StreamItem;
use futures::stream::{Map, StreamExt};
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

/// Type alias for the sequence returned by `into_sequence`
pub type SequenceFromReceiver<T> = Map<UnboundedReceiverStream<T>, fn(T) -> StreamItem<T>>;

pub trait UnboundedReceiverExt<T> {
    /// Every received value becomes a `StreamItem::Value`. The sequence
    /// completes once all senders are dropped.
    fn into_sequence(self) -> SequenceFromReceiver<T>;
}

impl<T> UnboundedReceiverExt<T> for mpsc::UnboundedReceiver<T> {
    fn into_sequence(self) -> SequenceFromReceiver<T> {
        UnboundedReceiverStream::new(self).map(StreamItem::Value as fn(T) -> StreamItem<T>)
    }
}
