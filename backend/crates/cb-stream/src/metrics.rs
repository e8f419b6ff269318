use metrics::{counter, gauge};

/// Metrics collector for stream fan-out
#[derive(Clone)]
pub struct Metrics {
    prefix: &'static str,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            prefix: "cb_stream",
        }
    }

    /// Record a new stream opened
    pub fn channel_opened(&self) {
        counter!(format!("{}.channels.opened", self.prefix)).increment(1);
        gauge!(format!("{}.channels.active", self.prefix)).increment(1.0);
    }

    /// Record a stream leaving the registry
    pub fn channel_closed(&self, reason: &str) {
        counter!(format!("{}.channels.closed", self.prefix)).increment(1);
        counter!(format!("{}.channels.closed.{}", self.prefix, reason)).increment(1);
        gauge!(format!("{}.channels.active", self.prefix)).decrement(1.0);
    }

    /// Record a stream refused because the registry is full
    pub fn channel_rejected(&self) {
        counter!(format!("{}.channels.rejected", self.prefix)).increment(1);
    }

    /// Record one event fanned out
    pub fn event_published(&self, subscriber_count: usize) {
        counter!(format!("{}.events.published", self.prefix)).increment(1);
        gauge!(format!("{}.events.subscribers", self.prefix)).set(subscriber_count as f64);
    }

    /// Record one event appended to the polling history
    pub fn event_buffered(&self) {
        counter!(format!("{}.history.appended", self.prefix)).increment(1);
    }

    pub fn history_cleared(&self, cleared: usize) {
        counter!(format!("{}.history.cleared", self.prefix)).increment(cleared as u64);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
