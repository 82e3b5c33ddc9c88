use std::cmp::Ordering;

/// Comparator used by naturally ordered heaps.
pub type NaturalOrder<T> = fn(&T, &T) -> Ordering;

/// Array-backed binary heap ordered by an injected comparator.
///
/// `compare(a, b) == Ordering::Greater` means `a` has the higher priority and
/// sits closer to the root. [`Heap::new`] therefore builds a max-heap; passing
/// a reversed comparator builds a min-heap.
///
/// Children of slot `i` live at `2i + 1` and `2i + 2`; its parent at
/// `(i - 1) / 2`.
#[derive(Clone)]
pub struct Heap<T, F = NaturalOrder<T>> {
    elements: Vec<T>,
    compare: F,
}

impl<T: Ord> Heap<T> {
    /// Creates an empty max-heap over the natural order of `T`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_comparator(T::cmp)
    }

    /// Builds a max-heap from `values` in O(n).
    #[must_use]
    pub fn from_vec(values: Vec<T>) -> Self {
        Self::from_vec_with_comparator(values, T::cmp)
    }
}

impl<T: Ord> Default for Heap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, F> Heap<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    /// Creates an empty heap ordered by `compare`.
    #[must_use]
    pub fn with_comparator(compare: F) -> Self {
        Self {
            elements: Vec::new(),
            compare,
        }
    }

    /// Builds a heap from `values` ordered by `compare` in O(n).
    #[must_use]
    pub fn from_vec_with_comparator(values: Vec<T>, compare: F) -> Self {
        let mut heap = Self {
            elements: values,
            compare,
        };
        heap.build();
        heap
    }

    /// Number of elements in the heap.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the heap holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The backing array in heap order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Consumes the heap, returning the backing array in heap order.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    /// Returns the highest-priority element without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Inserts an element. O(log n).
    pub fn insert(&mut self, element: T) {
        self.elements.push(element);
        self.sift_up(self.elements.len() - 1);
    }

    /// Removes and returns the highest-priority element. O(log n).
    pub fn remove(&mut self) -> Option<T> {
        if self.elements.is_empty() {
            return None;
        }
        let item = self.elements.swap_remove(0);
        self.sift_down(0);
        Some(item)
    }

    /// Removes the element stored at `index`, or `None` past the end. O(log n).
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        let last = self.elements.len().checked_sub(1)?;
        if index > last {
            return None;
        }
        if index == last {
            return self.elements.pop();
        }
        let item = self.elements.swap_remove(index);
        // Only one of the two sifts moves the element.
        self.sift_down(index);
        self.sift_up(index);
        Some(item)
    }

    /// Moves every element of `other` into this heap and restores order. O(n).
    pub fn merge<G>(&mut self, other: Heap<T, G>) {
        self.elements.extend(other.elements);
        self.build();
    }

    /// Finds the index of `element`, pruning subtrees whose root it outranks.
    #[must_use]
    pub fn position(&self, element: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.position_from(element, 0)
    }

    fn position_from(&self, element: &T, index: usize) -> Option<usize>
    where
        T: PartialEq,
    {
        let candidate = self.elements.get(index)?;
        if (self.compare)(element, candidate) == Ordering::Greater {
            return None;
        }
        if element == candidate {
            return Some(index);
        }
        self.position_from(element, left_child(index))
            .or_else(|| self.position_from(element, right_child(index)))
    }

    fn outranks(&self, a: usize, b: usize) -> bool {
        (self.compare)(&self.elements[a], &self.elements[b]) == Ordering::Greater
    }

    fn sift_up(&mut self, index: usize) {
        let mut child = index;
        while child > 0 {
            let parent = parent(child);
            if !self.outranks(child, parent) {
                break;
            }
            self.elements.swap(child, parent);
            child = parent;
        }
    }

    fn sift_down(&mut self, index: usize) {
        let count = self.elements.len();
        let mut parent = index;
        loop {
            let left = left_child(parent);
            let right = right_child(parent);
            let mut candidate = parent;
            if left < count && self.outranks(left, candidate) {
                candidate = left;
            }
            if right < count && self.outranks(right, candidate) {
                candidate = right;
            }
            if candidate == parent {
                return;
            }
            self.elements.swap(parent, candidate);
            parent = candidate;
        }
    }

    fn build(&mut self) {
        if self.elements.is_empty() {
            return;
        }
        for index in (0..=self.elements.len() / 2).rev() {
            self.sift_down(index);
        }
    }
}

impl<T: std::fmt::Debug, F> std::fmt::Debug for Heap<T, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Heap")
            .field("elements", &self.elements)
            .finish_non_exhaustive()
    }
}

fn left_child(index: usize) -> usize {
    2 * index + 1
}

fn right_child(index: usize) -> usize {
    2 * index + 2
}

fn parent(index: usize) -> usize {
    (index - 1) / 2
}

/// Returns `true` if `values` already satisfies the min-heap property.
#[must_use]
pub fn is_min_heap<T: PartialOrd>(values: &[T]) -> bool {
    (0..values.len() / 2 + 1).all(|index| {
        [left_child(index), right_child(index)]
            .into_iter()
            .filter_map(|child| values.get(child))
            .all(|child| values[index] <= *child)
    })
}

/// Returns the `n`th smallest value (1-based), or `None` when `values` has
/// fewer than `n` elements.
///
/// Keeps a max-heap of the `n` smallest values seen so far; its root ends up
/// being the answer.
#[must_use]
pub fn nth_smallest<T: Ord + Clone>(values: &[T], n: usize) -> Option<T> {
    if n == 0 || values.len() < n {
        return None;
    }
    let mut heap = Heap::new();
    for value in values {
        if heap.len() < n {
            heap.insert(value.clone());
        } else if heap.peek().is_some_and(|top| top > value) {
            heap.remove();
            heap.insert(value.clone());
        }
    }
    heap.peek().cloned()
}
