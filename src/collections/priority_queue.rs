use std::cmp::Ordering;

use super::heap::{Heap, NaturalOrder};

/// Queue that always dequeues its highest-priority element.
///
/// A thin adapter over [`Heap`]: `enqueue` inserts, `dequeue` removes the
/// root. Use [`PriorityQueue::new`] for naturally ordered elements or
/// [`PriorityQueue::with_comparator`] to supply the priority explicitly.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T, F = NaturalOrder<T>> {
    heap: Heap<T, F>,
}

impl<T: Ord> PriorityQueue<T> {
    /// Creates an empty max-priority queue over the natural order of `T`.
    #[must_use]
    pub fn new() -> Self {
        Self { heap: Heap::new() }
    }
}

impl<T: Ord> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, F> PriorityQueue<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    /// Creates an empty queue prioritised by `compare`.
    #[must_use]
    pub fn with_comparator(compare: F) -> Self {
        Self {
            heap: Heap::with_comparator(compare),
        }
    }

    /// Adds an element to the queue.
    pub fn enqueue(&mut self, element: T) {
        self.heap.insert(element);
    }

    /// Removes and returns the highest-priority element.
    pub fn dequeue(&mut self) -> Option<T> {
        self.heap.remove()
    }

    /// Returns the highest-priority element without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.heap.peek()
    }

    /// Number of queued elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// The queued elements in heap order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.heap.as_slice()
    }
}
