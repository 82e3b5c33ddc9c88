pub mod heap;
pub mod priority_queue;

pub use heap::{is_min_heap, nth_smallest, Heap, NaturalOrder};
pub use priority_queue::PriorityQueue;
