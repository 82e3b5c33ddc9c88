use std::cell::RefCell;
use std::collections::HashMap;
use std::marker::PhantomData;

use tracing::debug;

use super::{AdjacencyList, Edge, Graph, VertexId};
use crate::collections::PriorityQueue;

/// How the shortest-path tree reached a vertex.
///
/// Following `Edge(e)` to `e.source` repeatedly always ends at the single
/// `Start` record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Visit {
    /// The vertex the search started from.
    Start,
    /// The vertex was reached through this edge.
    Edge(Edge),
}

/// Single-source shortest paths over non-negative weights.
///
/// Distances are not cached: the distance to a vertex is recomputed by
/// walking its [`Visit`] chain back to the start each time it is needed.
/// Edges without a weight, or with a negative one, are never relaxed.
pub struct Dijkstra<'a, T, G: ?Sized = AdjacencyList<T>> {
    graph: &'a G,
    _data: PhantomData<fn() -> T>,
}

impl<'a, T, G> Dijkstra<'a, T, G>
where
    G: Graph<T> + ?Sized,
{
    /// Creates a solver over `graph`.
    #[must_use]
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            _data: PhantomData,
        }
    }

    /// Builds the shortest-path tree rooted at `start`.
    ///
    /// Every vertex reachable from `start` over weighted edges gets an entry.
    /// Edges with a negative weight are skipped like unweighted ones.
    #[must_use]
    pub fn shortest_paths(&self, start: VertexId) -> HashMap<VertexId, Visit> {
        let paths = RefCell::new(HashMap::from([(start, Visit::Start)]));

        {
            // Closest vertex first.
            let mut queue = PriorityQueue::with_comparator(|a: &VertexId, b: &VertexId| {
                let paths = paths.borrow();
                distance(*b, &paths).total_cmp(&distance(*a, &paths))
            });
            queue.enqueue(start);

            while let Some(vertex) = queue.dequeue() {
                for edge in self.graph.edges(vertex) {
                    let Some(weight) = edge.weight.filter(|weight| *weight >= 0.0) else {
                        continue;
                    };
                    let shorter = {
                        let paths = paths.borrow();
                        !paths.contains_key(&edge.destination)
                            || distance(vertex, &paths) + weight
                                < distance(edge.destination, &paths)
                    };
                    if shorter {
                        paths
                            .borrow_mut()
                            .insert(edge.destination, Visit::Edge(*edge));
                        queue.enqueue(edge.destination);
                    }
                }
            }
        }

        let paths = paths.into_inner();
        debug!(start = %start, reached = paths.len(), "built shortest-path tree");
        paths
    }

    /// Edges of the shortest path to `destination`, ordered from
    /// `destination` back to the start. Empty if it was not reached.
    #[must_use]
    pub fn shortest_path(
        &self,
        destination: VertexId,
        paths: &HashMap<VertexId, Visit>,
    ) -> Vec<Edge> {
        route(destination, paths)
    }

    /// Shortest path from `source` to every other reachable vertex.
    #[must_use]
    pub fn all_shortest_paths(&self, source: VertexId) -> HashMap<VertexId, Vec<Edge>> {
        let from_source = self.shortest_paths(source);

        self.graph
            .vertices()
            .into_iter()
            .filter(|&vertex| vertex != source)
            .filter_map(|vertex| {
                let path = route(vertex, &from_source);
                (!path.is_empty()).then_some((vertex, path))
            })
            .collect()
    }

    /// Summed weight of the recorded path to `destination`.
    #[must_use]
    pub fn distance(&self, destination: VertexId, paths: &HashMap<VertexId, Visit>) -> f64 {
        distance(destination, paths)
    }
}

fn route(destination: VertexId, paths: &HashMap<VertexId, Visit>) -> Vec<Edge> {
    let mut vertex = destination;
    let mut path = Vec::new();

    while let Some(Visit::Edge(edge)) = paths.get(&vertex) {
        path.push(*edge);
        vertex = edge.source;
    }

    path
}

fn distance(destination: VertexId, paths: &HashMap<VertexId, Visit>) -> f64 {
    route(destination, paths)
        .iter()
        .map(|edge| edge.weight.unwrap_or(0.0))
        .sum()
}
