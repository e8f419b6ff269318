use crate::Metrics;

use cb_core::Event;

use std::collections::VecDeque;

/// Bounded, newest-first record of recent events for polling viewers.
pub struct HistoryBuffer {
    events: VecDeque<Event>,
    capacity: usize,
    metrics: Metrics,
}

impl HistoryBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            events: VecDeque::with_capacity(capacity),
            capacity,
            metrics: Metrics::new(),
        }
    }

    /// Insert at the front, evicting the oldest event when full.
    pub fn push(&mut self, event: Event) {
        self.events.push_front(event);
        self.events.truncate(self.capacity);
        self.metrics.event_buffered();
    }

    /// Copy of the buffered events, newest first
    pub fn snapshot(&self) -> Vec<Event> {
        self.events.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Remove every event, returning how many were dropped
    pub fn clear(&mut self) -> usize {
        let cleared = self.events.len();
        self.events.clear();
        self.metrics.history_cleared(cleared);
        cleared
    }
}
