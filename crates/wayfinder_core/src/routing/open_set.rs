use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::weight::Weight;

/// Insertion order of a node into the open set. Smaller means earlier.
pub(crate) type Sequence = u64;

#[derive(Copy, Clone, Debug)]
pub(crate) struct HeapItem {
    pub(crate) node: usize,

    /// total = cost + heuristic, at the time the entry was pushed
    pub(crate) total: Weight,

    pub(crate) sequence: Sequence,
}

impl PartialEq for HeapItem {
    fn eq(&self, other: &HeapItem) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapItem {}

impl PartialOrd for HeapItem {
    fn partial_cmp(&self, other: &HeapItem) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapItem {
    fn cmp(&self, other: &Self) -> Ordering {
        // Flip both keys to make this a min-heap: lowest total first, then the
        // node that entered the open set first
        other
            .total
            .total_cmp(&self.total)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// Open set of an A* search.
///
/// Selecting the minimum total with ties going to the earliest inserted node
/// is the same order a linear scan over an insertion-ordered list gives. A
/// node relaxed while open keeps its sequence number, so it keeps its place;
/// a node re-opened after being visited gets a fresh one.
///
/// Entries are never removed in place. The caller decides whether a popped
/// entry is still current (see `PathFinder`).
#[derive(Default)]
pub(crate) struct OpenSet {
    heap: BinaryHeap<HeapItem>,
    next_sequence: Sequence,
}

impl OpenSet {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        OpenSet {
            heap: BinaryHeap::with_capacity(capacity),
            next_sequence: 0,
        }
    }

    pub(crate) fn clear(&mut self) {
        self.heap.clear();
        self.next_sequence = 0;
    }

    pub(crate) fn next_sequence(&mut self) -> Sequence {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        sequence
    }

    pub(crate) fn push(&mut self, node: usize, total: Weight, sequence: Sequence) {
        self.heap.push(HeapItem {
            node,
            total,
            sequence,
        });
    }

    pub(crate) fn pop(&mut self) -> Option<HeapItem> {
        self.heap.pop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pops_lowest_total_first() {
        let mut open = OpenSet::default();
        for (node, total) in [(0, 7.0), (1, 3.5), (2, 9.0)] {
            let sequence = open.next_sequence();
            open.push(node, total, sequence);
        }

        let order: Vec<usize> = std::iter::from_fn(|| open.pop()).map(|item| item.node).collect();
        assert_eq!(order, vec![1, 0, 2]);
    }

    #[test]
    fn test_ties_go_to_earliest_sequence() {
        let mut open = OpenSet::with_capacity(4);
        let first = open.next_sequence();
        let second = open.next_sequence();
        let third = open.next_sequence();

        open.push(8, 7.0, third);
        open.push(4, 7.0, first);
        open.push(6, 7.0, second);

        let order: Vec<usize> = std::iter::from_fn(|| open.pop()).map(|item| item.node).collect();
        assert_eq!(order, vec![4, 6, 8]);
    }

    #[test]
    fn test_clear_restarts_sequence() {
        let mut open = OpenSet::default();
        open.next_sequence();
        open.push(1, 1.0, 0);
        open.clear();

        assert!(open.pop().is_none());
        assert_eq!(open.next_sequence(), 0);
    }
}
