//! Frontiers: the pending-exploration containers whose pop order gives each
//! search its character.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

/// A pending-exploration container.
pub trait Frontier<T> {
    /// Add one item.
    fn push(&mut self, item: T);

    /// Remove the next item to explore.
    fn pop(&mut self) -> Option<T>;

    /// Number of pending items.
    fn len(&self) -> usize;

    /// Whether nothing is pending.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Push one expansion's worth of items, given in canonical neighbor
    /// order. Implementations choose the push order so that pops visit
    /// the items in canonical order.
    fn push_expansion<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: DoubleEndedIterator,
    {
        for item in items {
            self.push(item);
        }
    }
}

/// First-in first-out queue.
#[derive(Debug, Clone)]
pub struct Fifo<T> {
    queue: VecDeque<T>,
}

impl<T> Fifo<T> {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }
}

impl<T> Default for Fifo<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for Fifo<T> {
    fn push(&mut self, item: T) {
        self.queue.push_back(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Last-in first-out stack.
///
/// An expansion is pushed in reverse so the first canonical neighbour is
/// on top and is explored first.
#[derive(Debug, Clone)]
pub struct Lifo<T> {
    stack: Vec<T>,
}

impl<T> Lifo<T> {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }
}

impl<T> Default for Lifo<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for Lifo<T> {
    fn push(&mut self, item: T) {
        self.stack.push(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.stack.pop()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }

    fn push_expansion<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: DoubleEndedIterator,
    {
        for item in items.into_iter().rev() {
            self.stack.push(item);
        }
    }
}

/// An item tagged with its queue priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prioritized<T> {
    pub priority: u64,
    pub item: T,
}

impl<T> Prioritized<T> {
    #[inline]
    pub fn new(priority: u64, item: T) -> Self {
        Self { priority, item }
    }
}

/// An entry in the min-queue.
#[derive(Debug)]
struct Entry<T> {
    item: T,
    priority: u64,
    /// Monotonically increasing counter used to break ties.
    /// Lower = pushed earlier = popped first.
    seq: u64,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Wrapped in Reverse for the BinaryHeap, so this is the natural
        // order: smaller priority first, then smaller seq.
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// A stable min-priority queue.
///
/// Items with lower priority pop first. Among equal priorities, those
/// pushed earlier pop first (FIFO), which keeps exploration order identical
/// to a stable re-sort of the pending set on every pop.
pub struct MinQueue<T> {
    heap: BinaryHeap<Reverse<Entry<T>>>,
    seq: u64,
}

impl<T> MinQueue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    /// Priority of the next item, without removing it.
    pub fn peek_priority(&self) -> Option<u64> {
        self.heap.peek().map(|Reverse(entry)| entry.priority)
    }
}

impl<T> Default for MinQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<Prioritized<T>> for MinQueue<T> {
    fn push(&mut self, p: Prioritized<T>) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Reverse(Entry {
            item: p.item,
            priority: p.priority,
            seq,
        }));
    }

    fn pop(&mut self) -> Option<Prioritized<T>> {
        self.heap
            .pop()
            .map(|Reverse(entry)| Prioritized::new(entry.priority, entry.item))
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain<T, F: Frontier<T>>(mut f: F) -> Vec<T> {
        let mut out = Vec::new();
        while let Some(x) = f.pop() {
            out.push(x);
        }
        out
    }

    #[test]
    fn fifo_pops_oldest() {
        let mut q = Fifo::new();
        q.push_expansion(["up", "down", "left"]);
        q.push("right");
        assert_eq!(q.len(), 4);
        assert_eq!(drain(q), vec!["up", "down", "left", "right"]);
    }

    #[test]
    fn lifo_pops_newest() {
        let mut s = Lifo::new();
        s.push(1);
        s.push(2);
        s.push(3);
        assert_eq!(drain(s), vec![3, 2, 1]);
    }

    #[test]
    fn lifo_expansion_pops_in_canonical_order() {
        let mut s = Lifo::new();
        s.push("older");
        s.push_expansion(["up", "down", "left", "right"]);
        assert_eq!(drain(s), vec!["up", "down", "left", "right", "older"]);
    }

    #[test]
    fn min_queue_lowest_priority_first() {
        let mut q = MinQueue::new();
        q.push(Prioritized::new(3, "a"));
        q.push(Prioritized::new(1, "b"));
        q.push(Prioritized::new(2, "c"));
        assert_eq!(q.peek_priority(), Some(1));
        let order: Vec<_> = drain(q).into_iter().map(|p| p.item).collect();
        assert_eq!(order, vec!["b", "c", "a"]);
    }

    #[test]
    fn min_queue_orders_priorities_above_u32() {
        let big = u64::from(u32::MAX);
        let mut q = MinQueue::new();
        q.push(Prioritized::new(big + 7, "late"));
        q.push(Prioritized::new(big + 1, "soon"));
        q.push(Prioritized::new(big, "now"));
        assert_eq!(q.peek_priority(), Some(big));
        let order: Vec<_> = drain(q).into_iter().map(|p| p.item).collect();
        assert_eq!(order, vec!["now", "soon", "late"]);
    }

    #[test]
    fn min_queue_ties_pop_in_push_order() {
        let mut q = MinQueue::new();
        q.push(Prioritized::new(1, "first"));
        q.push(Prioritized::new(0, "zero"));
        q.push(Prioritized::new(1, "second"));
        q.push(Prioritized::new(1, "third"));
        let order: Vec<_> = drain(q).into_iter().map(|p| p.item).collect();
        assert_eq!(order, vec!["zero", "first", "second", "third"]);
    }

    #[test]
    fn ties_stay_stable_across_interleaved_pops() {
        let mut q = MinQueue::new();
        q.push(Prioritized::new(2, 'a'));
        q.push(Prioritized::new(2, 'b'));
        assert_eq!(q.pop().map(|p| p.item), Some('a'));
        q.push(Prioritized::new(2, 'c'));
        q.push(Prioritized::new(1, 'd'));
        let order: Vec<_> = drain(q).into_iter().map(|p| p.item).collect();
        assert_eq!(order, vec!['d', 'b', 'c']);
    }

    #[test]
    fn is_empty_and_len() {
        let mut q = MinQueue::<i32>::new();
        assert!(q.is_empty());
        q.push(Prioritized::new(0, 7));
        assert_eq!(q.len(), 1);
        q.pop();
        assert!(q.is_empty());
        assert_eq!(q.peek_priority(), None);
    }
}
