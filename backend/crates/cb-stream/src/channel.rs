use crate::{ChannelId, ChannelRegistry};

use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::Bytes;
use futures::Stream;
use tokio::sync::mpsc;

/// Receiving end of one open stream.
///
/// Yields encoded frames until the registry drops the write handle. Dropping
/// the channel removes it from the registry.
pub struct Channel {
    id: ChannelId,
    receiver: mpsc::UnboundedReceiver<Bytes>,
    registry: ChannelRegistry,
}

impl Channel {
    pub(crate) fn new(
        id: ChannelId,
        receiver: mpsc::UnboundedReceiver<Bytes>,
        registry: ChannelRegistry,
    ) -> Self {
        Self {
            id,
            receiver,
            registry,
        }
    }

    pub fn id(&self) -> ChannelId {
        self.id
    }

    /// Next frame, or None once the stream has been closed
    pub async fn recv(&mut self) -> Option<Bytes> {
        self.receiver.recv().await
    }

    /// Next already-queued frame, without waiting
    pub fn try_recv(&mut self) -> Option<Bytes> {
        self.receiver.try_recv().ok()
    }
}

impl Stream for Channel {
    type Item = Bytes;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.get_mut().receiver.poll_recv(cx)
    }
}

impl Drop for Channel {
    fn drop(&mut self) {
        // Outside a runtime the next publish evicts the closed queue instead
        if let Ok(handle) = tokio::runtime::Handle::try_current() {
            let registry = self.registry.clone();
            let channel_id = self.id;
            handle.spawn(async move {
                registry.unsubscribe(channel_id).await;
            });
        }
    }
}
