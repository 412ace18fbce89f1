extern crate ordered_float;

use self::ordered_float::NotNan;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

// Entries with equal keys pop in insertion order: `seq` grows with every push.
struct HeapEntry<T> {
    key: NotNan<f64>,
    seq: u64,
    value: T,
}

impl<T> PartialEq for HeapEntry<T> {
    fn eq(&self, other: &HeapEntry<T>) -> bool {
        self.key == other.key && self.seq == other.seq
    }
}

impl<T> Eq for HeapEntry<T> {}

impl<T> PartialOrd for HeapEntry<T> {
    fn partial_cmp(&self, other: &HeapEntry<T>) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for HeapEntry<T> {
    fn cmp(&self, other: &HeapEntry<T>) -> Ordering {
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<T> HeapEntry<T> {
    fn from_tuple(key: f64, seq: u64, value: T) -> Self {
        let key = match NotNan::new(key) {
            Ok(num) => num,
            Err(_) => panic!("Float is NaN in heap"),
        };
        HeapEntry { key, seq, value }
    }
}

/// Min-heap keyed by `f64`, stable among equal keys.
pub struct FloatBinaryHeap<T> {
    heap: BinaryHeap<HeapEntry<T>>,
    next_seq: u64,
}

impl<T> Default for FloatBinaryHeap<T> {
    fn default() -> Self {
        FloatBinaryHeap::new()
    }
}

impl<T> FloatBinaryHeap<T> {
    pub fn new() -> FloatBinaryHeap<T> {
        FloatBinaryHeap {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Panics if `key` is NaN.
    pub fn push(&mut self, key: f64, value: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(HeapEntry::from_tuple(key, seq, value))
    }

    pub fn peek(&self) -> Option<(f64, &T)> {
        self.heap.peek().map(|r| (r.key.into_inner(), &r.value))
    }

    pub fn pop(&mut self) -> Option<(f64, T)> {
        self.heap.pop().map(|r| (r.key.into_inner(), r.value))
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
    use super::FloatBinaryHeap;

    #[test]
    fn pops_smallest_key_first() {
        let mut heap = FloatBinaryHeap::new();
        heap.push(3.5, 'c');
        heap.push(0.25, 'a');
        heap.push(1.0, 'b');

        assert_eq!(heap.peek(), Some((0.25, &'a')));
        assert_eq!(heap.pop(), Some((0.25, 'a')));
        assert_eq!(heap.pop(), Some((1.0, 'b')));
        assert_eq!(heap.pop(), Some((3.5, 'c')));
        assert_eq!(heap.pop(), None);
        assert!(heap.is_empty());
    }

    #[test]
    fn equal_keys_pop_in_insertion_order() {
        let mut heap = FloatBinaryHeap::new();
        for i in 0..16 {
            heap.push(2.0, i);
        }
        heap.push(1.0, 100);

        assert_eq!(heap.len(), 17);
        assert_eq!(heap.pop(), Some((1.0, 100)));
        let order: Vec<i32> = std::iter::from_fn(|| heap.pop().map(|(_, v)| v)).collect();
        assert_eq!(order, (0..16).collect::<Vec<_>>());
    }

    #[test]
    #[should_panic(expected = "NaN")]
    fn nan_key_is_rejected() {
        let mut heap = FloatBinaryHeap::new();
        heap.push(std::f64::NAN, ());
    }
}
