//! Bounded waiting area with packet-wise dequeue and priority eviction.
//!
//! Requests are kept in arrival order. Dequeue drains one source at a
//! time (a "packet"): as long as the source currently being served still
//! has waiting requests, its earliest one is picked; otherwise the
//! highest-priority source (lowest id) takes over. When the buffer is
//! full, the lowest-priority request (highest source id) is evicted.

use std::collections::VecDeque;

use crate::queues::request::{RequestId, SourceId};

#[derive(Clone, Copy, Debug, PartialEq)]
struct Entry {
    id: RequestId,
    source: SourceId,
}

#[derive(Debug)]
pub struct PacketBuffer {
    entries: VecDeque<Entry>,
    capacity: usize,
    serving: Option<SourceId>,
}

impl PacketBuffer {
    pub fn new(capacity: usize) -> Self {
        PacketBuffer {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
            serving: None,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    /// Source whose packet is being drained, if any.
    pub fn current_serving_source(&self) -> Option<SourceId> {
        self.serving
    }

    pub fn contains(&self, id: RequestId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Waiting requests, earliest arrival first.
    pub fn iter(&self) -> impl Iterator<Item = (RequestId, SourceId)> + '_ {
        self.entries.iter().map(|e| (e.id, e.source))
    }

    /// Appends `id` as the most recent arrival. Capacity is the caller's
    /// concern: check `is_full` first.
    pub fn add(&mut self, id: RequestId, source: SourceId) {
        debug_assert!(!self.contains(id), "request added to the buffer twice");
        self.entries.push_back(Entry { id, source });
    }

    /// Picks the next request to serve without removing it.
    pub fn select_next(&mut self) -> Option<RequestId> {
        if let Some(source) = self.serving {
            if let Some(entry) = self.entries.iter().find(|e| e.source == source) {
                return Some(entry.id);
            }
        }

        // min_by_key keeps the first minimum, i.e. the earliest arrival.
        match self.entries.iter().min_by_key(|e| e.source) {
            Some(entry) => {
                self.serving = Some(entry.source);
                Some(entry.id)
            }
            None => {
                self.serving = None;
                None
            }
        }
    }

    /// Picks the request to evict: highest source id, earliest arrival
    /// among those.
    pub fn select_victim(&self) -> Option<RequestId> {
        let mut victim: Option<&Entry> = None;
        for entry in &self.entries {
            match victim {
                Some(v) if v.source >= entry.source => {}
                _ => victim = Some(entry),
            }
        }
        victim.map(|e| e.id)
    }

    /// Panics if `id` is not waiting here.
    pub fn remove(&mut self, id: RequestId) {
        match self.entries.iter().position(|e| e.id == id) {
            Some(index) => {
                self.entries.remove(index);
            }
            None => panic!("{:?} is not in the buffer", id),
        }
    }
}
