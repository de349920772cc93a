//! The action log and the prioritized notification queue.
//!
//! Neither has any effect on outcomes; they only record what happened.

use alloc::collections::BinaryHeap;
use alloc::string::String;
use alloc::vec::Vec;
use core::cmp::Ordering;

/// Append-only record of table actions, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionLog {
    entries: Vec<String>,
}

impl ActionLog {
    /// Creates an empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends an entry.
    pub fn push(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
    }

    /// Returns every entry, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the log is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A queued notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueuedEvent {
    /// Higher drains first.
    pub priority: i32,
    /// What happened.
    pub description: String,
    seq: u64,
}

impl Ord for QueuedEvent {
    fn cmp(&self, other: &Self) -> Ordering {
        // Equal priorities drain in insertion order.
        self.priority
            .cmp(&other.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for QueuedEvent {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Max-priority queue of notifications.
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    heap: BinaryHeap<QueuedEvent>,
    next_seq: u64,
}

impl EventQueue {
    /// Creates an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Queues `description` at `priority`.
    pub fn push(&mut self, description: impl Into<String>, priority: i32) {
        self.heap.push(QueuedEvent {
            priority,
            description: description.into(),
            seq: self.next_seq,
        });
        self.next_seq += 1;
    }

    /// Removes and returns the highest-priority event.
    pub fn pop(&mut self) -> Option<QueuedEvent> {
        self.heap.pop()
    }

    /// Removes every event, highest priority first.
    pub fn drain(&mut self) -> Vec<QueuedEvent> {
        let mut events = Vec::with_capacity(self.heap.len());
        while let Some(event) = self.heap.pop() {
            events.push(event);
        }
        events
    }

    /// Discards every queued event.
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Returns the number of queued events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns whether the queue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
