use crate::helpers::float_binaryheap::FloatBinaryHeap;
use crate::sim::event::{Event, EventKind};

/// Pending events, earliest first. Events scheduled for the same instant
/// come out in the order they were pushed.
#[derive(Default)]
pub struct Calendar {
    heap: FloatBinaryHeap<EventKind>,
}

impl Calendar {
    pub fn new() -> Self {
        Calendar::default()
    }

    pub fn push(&mut self, event: Event) {
        self.heap.push(event.time, event.kind)
    }

    pub fn pop_min(&mut self) -> Option<Event> {
        self.heap.pop().map(|(time, kind)| Event { time, kind })
    }

    pub fn peek_time(&self) -> Option<f64> {
        self.heap.peek().map(|(time, _)| time)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queues::request::SourceId;

    #[test]
    fn ties_resolve_in_push_order() {
        let mut calendar = Calendar::new();
        calendar.push(Event::arrival(5.0, SourceId(2)));
        calendar.push(Event::arrival(5.0, SourceId(0)));
        calendar.push(Event::arrival(1.0, SourceId(1)));

        assert_eq!(calendar.peek_time(), Some(1.0));
        assert_eq!(calendar.pop_min(), Some(Event::arrival(1.0, SourceId(1))));
        assert_eq!(calendar.pop_min(), Some(Event::arrival(5.0, SourceId(2))));
        assert_eq!(calendar.pop_min(), Some(Event::arrival(5.0, SourceId(0))));
        assert!(calendar.is_empty());
        assert_eq!(calendar.pop_min(), None);
    }
}
