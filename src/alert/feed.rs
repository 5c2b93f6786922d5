//! Bounded newest-first alert history

use super::AlertRecord;
use std::collections::VecDeque;

/// Default number of retained alerts
pub const DEFAULT_FEED_CAPACITY: usize = 20;

/// Most-recent-first list of fired alerts, capped at `capacity`
#[derive(Debug, Clone)]
pub struct AlertFeed {
    records: VecDeque<AlertRecord>,
    capacity: usize,
}

impl AlertFeed {
    /// Create an empty feed; a zero capacity is raised to 1
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            records: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Insert at the head, dropping the oldest entries beyond capacity
    pub fn push(&mut self, record: AlertRecord) {
        self.records.push_front(record);
        self.records.truncate(self.capacity);
    }

    /// First `limit` entries, newest first
    pub fn snapshot(&self, limit: usize) -> Vec<AlertRecord> {
        self.records.iter().take(limit).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for AlertFeed {
    fn default() -> Self {
        Self::new(DEFAULT_FEED_CAPACITY)
    }
}
