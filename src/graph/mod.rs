//! Directed graphs and the algorithms that run over them.
//!
//! Storage backends implement the small [`Graph`] capability trait. Every
//! traversal in [`Traversal`] is written once against that trait and comes
//! for free with any backend, as do [`Dijkstra`] and [`Prim`].

pub mod adjacency_list;
pub mod dijkstra;
pub mod prim;
pub mod traversal;

pub use adjacency_list::AdjacencyList;
pub use dijkstra::{Dijkstra, Visit};
pub use prim::{Prim, SpanningTree};
pub use traversal::Traversal;

use std::fmt;

use crate::error::GraphError;

/// Creation-order index of a vertex within its graph.
///
/// The first vertex of a graph is `VertexId(0)`, the next `VertexId(1)` and so
/// on. Indices are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub usize);

impl VertexId {
    /// The raw index.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A node of a graph: its creation index plus a data payload.
///
/// Two vertices are equal when both index and data are equal.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex<T> {
    id: VertexId,
    data: T,
}

impl<T> Vertex<T> {
    /// Creates a vertex. Graphs assign `id`; callers normally go through
    /// [`Graph::create_vertex`].
    #[must_use]
    pub fn new(id: VertexId, data: T) -> Self {
        Self { id, data }
    }

    /// The vertex's creation index.
    #[must_use]
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// The vertex payload.
    #[must_use]
    pub fn data(&self) -> &T {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }
}

/// A directed connection with an optional weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// Vertex the edge leaves.
    pub source: VertexId,
    /// Vertex the edge enters.
    pub destination: VertexId,
    /// Optional cost of following the edge.
    pub weight: Option<f64>,
}

impl Edge {
    /// Creates a new edge.
    #[must_use]
    pub fn new(source: VertexId, destination: VertexId, weight: Option<f64>) -> Self {
        Self {
            source,
            destination,
            weight,
        }
    }
}

/// Whether [`Graph::add`] inserts one edge or a pair of opposing edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeType {
    /// A single `source -> destination` edge.
    Directed,
    /// Edges in both directions with the same weight.
    Undirected,
}

/// Minimal capability set a graph backend must provide.
pub trait Graph<T> {
    /// Creates a vertex holding `data` and returns its id.
    fn create_vertex(&mut self, data: T) -> VertexId;

    /// Adds a `source -> destination` edge.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if either endpoint was not
    /// created by this graph. Nothing is added in that case.
    fn add_directed_edge(
        &mut self,
        source: VertexId,
        destination: VertexId,
        weight: Option<f64>,
    ) -> Result<(), GraphError>;

    /// Outgoing edges of `source` in insertion order. Unknown vertices have
    /// no edges.
    fn edges(&self, source: VertexId) -> &[Edge];

    /// Every vertex id in creation order.
    fn vertices(&self) -> Vec<VertexId>;

    /// Looks up a vertex.
    fn vertex(&self, id: VertexId) -> Option<&Vertex<T>>;

    /// Mutable access to a vertex payload. The vertex id never changes.
    fn data_mut(&mut self, id: VertexId) -> Option<&mut T>;

    /// Payload of a vertex.
    fn data(&self, id: VertexId) -> Option<&T> {
        self.vertex(id).map(Vertex::data)
    }

    /// Number of vertices.
    fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    /// Returns `true` if `id` names a vertex of this graph.
    fn contains(&self, id: VertexId) -> bool {
        self.vertex(id).is_some()
    }

    /// Adds edges in both directions.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if either endpoint is unknown.
    fn add_undirected_edge(
        &mut self,
        source: VertexId,
        destination: VertexId,
        weight: Option<f64>,
    ) -> Result<(), GraphError> {
        self.add_directed_edge(source, destination, weight)?;
        self.add_directed_edge(destination, source, weight)
    }

    /// Adds a directed or undirected edge depending on `edge_type`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if either endpoint is unknown.
    fn add(
        &mut self,
        edge_type: EdgeType,
        source: VertexId,
        destination: VertexId,
        weight: Option<f64>,
    ) -> Result<(), GraphError> {
        match edge_type {
            EdgeType::Directed => self.add_directed_edge(source, destination, weight),
            EdgeType::Undirected => self.add_undirected_edge(source, destination, weight),
        }
    }

    /// Weight of the first `source -> destination` edge, if any.
    fn weight(&self, source: VertexId, destination: VertexId) -> Option<f64> {
        self.edges(source)
            .iter()
            .find(|edge| edge.destination == destination)
            .and_then(|edge| edge.weight)
    }
}
