use crate::{
    Channel, ChannelId, ChannelLimits, Metrics, Result as StreamErrorResult, StreamError,
    encode_frame,
};

use cb_core::Event;

use std::collections::HashMap;
use std::panic::Location;
use std::sync::Arc;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use log::{debug, info, warn};
use tokio::sync::{RwLock, mpsc};

/// Process-wide set of open streams.
///
/// A stream is present iff it is still writable: any failed write removes it
/// under the same lock that performed the fan-out.
pub struct ChannelRegistry {
    inner: Arc<RwLock<RegistryInner>>,
    limits: ChannelLimits,
    metrics: Metrics,
}

struct RegistryInner {
    channels: HashMap<ChannelId, ChannelInfo>,
}

struct ChannelInfo {
    sender: mpsc::UnboundedSender<Bytes>,
    opened_at: DateTime<Utc>,
}

impl ChannelRegistry {
    pub fn new(limits: ChannelLimits) -> Self {
        Self {
            inner: Arc::new(RwLock::new(RegistryInner {
                channels: HashMap::new(),
            })),
            limits,
            metrics: Metrics::new(),
        }
    }

    /// Open a new stream.
    pub async fn subscribe(&self) -> StreamErrorResult<Channel> {
        self.open(None::<fn(usize) -> Event>).await
    }

    /// Open a new stream whose first frame is `greeting(count)`, where
    /// `count` includes the new stream.
    ///
    /// The greeting is queued before the stream is visible to `publish`.
    pub async fn subscribe_with<F>(&self, greeting: F) -> StreamErrorResult<Channel>
    where
        F: FnOnce(usize) -> Event,
    {
        self.open(Some(greeting)).await
    }

    async fn open<F>(&self, greeting: Option<F>) -> StreamErrorResult<Channel>
    where
        F: FnOnce(usize) -> Event,
    {
        let mut inner = self.inner.write().await;

        if inner.channels.len() >= self.limits.max_channels {
            warn!(
                "Stream limit reached: {}/{}",
                inner.channels.len(),
                self.limits.max_channels
            );
            self.metrics.channel_rejected();
            return Err(StreamError::ChannelLimitExceeded {
                current: inner.channels.len(),
                max: self.limits.max_channels,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let (sender, receiver) = mpsc::unbounded_channel();

        if let Some(greeting) = greeting {
            let frame = encode_frame(&greeting(inner.channels.len() + 1))?;
            // The receiver is still held locally, so this cannot fail
            let _ = sender.send(frame);
        }

        let channel_id = ChannelId::new();
        inner.channels.insert(
            channel_id,
            ChannelInfo {
                sender,
                opened_at: Utc::now(),
            },
        );
        self.metrics.channel_opened();
        info!(
            "Opened stream {channel_id} ({} total)",
            inner.channels.len()
        );

        Ok(Channel::new(channel_id, receiver, self.clone()))
    }

    /// Write `event` to every open stream.
    ///
    /// Writes never wait on a reader. A stream whose reader is gone is
    /// removed; a reader that is merely behind keeps every frame. Returns
    /// the number of streams open when the publish started.
    pub async fn publish(&self, event: &Event) -> StreamErrorResult<usize> {
        let frame = encode_frame(event)?;
        let mut inner = self.inner.write().await;
        let recipients = inner.channels.len();

        let mut dead = Vec::new();
        for (channel_id, info) in inner.channels.iter() {
            if info.sender.send(frame.clone()).is_err() {
                dead.push(*channel_id);
            }
        }

        for channel_id in dead {
            if let Some(info) = inner.channels.remove(&channel_id) {
                debug!(
                    "Evicted stream {channel_id} (disconnected, open for {}s)",
                    (Utc::now() - info.opened_at).num_seconds()
                );
                self.metrics.channel_closed("disconnected");
            }
        }

        self.metrics.event_published(recipients);
        Ok(recipients)
    }

    /// Remove a stream. Removing an unknown id is a no-op.
    pub async fn unsubscribe(&self, channel_id: ChannelId) -> bool {
        let mut inner = self.inner.write().await;

        if inner.channels.remove(&channel_id).is_some() {
            self.metrics.channel_closed("unsubscribed");
            info!(
                "Closed stream {channel_id} ({} total remaining)",
                inner.channels.len()
            );
            true
        } else {
            false
        }
    }

    /// Number of open streams
    pub async fn count(&self) -> usize {
        let inner = self.inner.read().await;
        inner.channels.len()
    }

    pub async fn contains(&self, channel_id: ChannelId) -> bool {
        let inner = self.inner.read().await;
        inner.channels.contains_key(&channel_id)
    }

    /// Drop every write handle so all open streams end.
    pub async fn close_all(&self) -> usize {
        let mut inner = self.inner.write().await;
        let closed = inner.channels.len();

        for _ in inner.channels.drain() {
            self.metrics.channel_closed("shutdown");
        }

        if closed > 0 {
            info!("Closed {closed} open streams");
        }
        closed
    }
}

impl Clone for ChannelRegistry {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            limits: self.limits.clone(),
            metrics: self.metrics.clone(),
        }
    }
}

impl Default for ChannelRegistry {
    fn default() -> Self {
        Self::new(ChannelLimits::default())
    }
}
