use std::cmp::Ordering;
use std::collections::HashSet;

use tracing::debug;

use super::{AdjacencyList, Edge, Graph, VertexId};
use crate::collections::PriorityQueue;
use crate::error::Result;

/// Output of [`Prim::execute`].
#[derive(Debug, Clone)]
pub struct SpanningTree<T> {
    /// Sum of the weights of the tree's edges.
    pub cost: f64,
    /// Undirected tree over the same vertex set as the input graph.
    pub tree: AdjacencyList<T>,
}

/// Minimum spanning tree by Prim's algorithm. O(E log E).
///
/// Grows the tree from the first vertex of the graph, always taking the
/// lightest edge that leaves it. Only the start vertex's connected component
/// is spanned.
pub struct Prim<'a, T> {
    graph: &'a AdjacencyList<T>,
}

impl<'a, T: Clone> Prim<'a, T> {
    /// Creates a new `Prim` operation over `graph`.
    #[must_use]
    pub fn new(graph: &'a AdjacencyList<T>) -> Self {
        Self { graph }
    }

    /// Executes the search, returning the total cost and the tree.
    ///
    /// An empty graph yields a zero-cost, empty tree.
    ///
    /// # Errors
    ///
    /// Only propagates [`GraphError::VertexNotFound`] from inserting a tree
    /// edge. The tree is built from the input's own vertex set, so this does
    /// not happen for any input graph.
    ///
    /// [`GraphError::VertexNotFound`]: crate::error::GraphError::VertexNotFound
    pub fn execute(&self) -> Result<SpanningTree<T>> {
        let mut tree = AdjacencyList::copy_vertices(self.graph);
        let mut cost = 0.0;

        let Some(&start) = self.graph.vertices().first() else {
            return Ok(SpanningTree { cost, tree });
        };

        let mut visited = HashSet::from([start]);
        let mut queue = PriorityQueue::with_comparator(lighter_first);
        self.add_available_edges(start, &visited, &mut queue);

        while let Some(edge) = queue.dequeue() {
            if !visited.insert(edge.destination) {
                continue;
            }
            cost += edge.weight.unwrap_or(0.0);
            tree.add_undirected_edge(edge.source, edge.destination, edge.weight)?;
            self.add_available_edges(edge.destination, &visited, &mut queue);
        }

        debug!(cost, vertices = visited.len(), "built minimum spanning tree");
        Ok(SpanningTree { cost, tree })
    }

    fn add_available_edges<F>(
        &self,
        vertex: VertexId,
        visited: &HashSet<VertexId>,
        queue: &mut PriorityQueue<Edge, F>,
    ) where
        F: Fn(&Edge, &Edge) -> Ordering,
    {
        for edge in self.graph.edges(vertex) {
            if !visited.contains(&edge.destination) {
                queue.enqueue(*edge);
            }
        }
    }
}

fn lighter_first(a: &Edge, b: &Edge) -> Ordering {
    b.weight.unwrap_or(0.0).total_cmp(&a.weight.unwrap_or(0.0))
}
