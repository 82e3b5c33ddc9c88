use std::fmt;

use super::{Edge, Graph, Vertex, VertexId};
use crate::error::GraphError;

/// Graph that stores a list of outgoing edges per vertex.
///
/// Vertex ids are indices into both the vertex and the adjacency arrays, so
/// every created vertex always has an (possibly empty) edge list.
#[derive(Debug, Clone)]
pub struct AdjacencyList<T> {
    vertices: Vec<Vertex<T>>,
    adjacencies: Vec<Vec<Edge>>,
}

impl<T> AdjacencyList<T> {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            adjacencies: Vec::new(),
        }
    }

    /// Creates a graph with room for `vertex_capacity` vertices.
    #[must_use]
    pub fn with_capacity(vertex_capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_capacity),
            adjacencies: Vec::with_capacity(vertex_capacity),
        }
    }

    /// Creates a graph holding copies of `other`'s vertices, under the same
    /// ids, and no edges.
    #[must_use]
    pub fn copy_vertices(other: &Self) -> Self
    where
        T: Clone,
    {
        Self {
            vertices: other.vertices.clone(),
            adjacencies: vec![Vec::new(); other.vertices.len()],
        }
    }

    /// Iterates over the vertices in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Vertex<T>> {
        self.vertices.iter()
    }

    /// Total number of directed edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacencies.iter().map(Vec::len).sum()
    }

    fn check(&self, id: VertexId) -> Result<(), GraphError> {
        if id.0 < self.vertices.len() {
            Ok(())
        } else {
            Err(GraphError::VertexNotFound(id))
        }
    }
}

impl<T> Default for AdjacencyList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Graph<T> for AdjacencyList<T> {
    fn create_vertex(&mut self, data: T) -> VertexId {
        let id = VertexId(self.vertices.len());
        self.vertices.push(Vertex::new(id, data));
        self.adjacencies.push(Vec::new());
        id
    }

    fn add_directed_edge(
        &mut self,
        source: VertexId,
        destination: VertexId,
        weight: Option<f64>,
    ) -> Result<(), GraphError> {
        self.check(source)?;
        self.check(destination)?;
        self.adjacencies[source.0].push(Edge::new(source, destination, weight));
        Ok(())
    }

    fn edges(&self, source: VertexId) -> &[Edge] {
        self.adjacencies
            .get(source.0)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn vertices(&self) -> Vec<VertexId> {
        self.vertices.iter().map(Vertex::id).collect()
    }

    fn vertex(&self, id: VertexId) -> Option<&Vertex<T>> {
        self.vertices.get(id.0)
    }

    fn data_mut(&mut self, id: VertexId) -> Option<&mut T> {
        self.vertices.get_mut(id.0).map(Vertex::data_mut)
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}

impl<T: fmt::Display> fmt::Display for AdjacencyList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (vertex, edges) in self.vertices.iter().zip(&self.adjacencies) {
            write!(f, "{} ---> [ ", vertex.data())?;
            for (i, edge) in edges.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}", self.vertices[edge.destination.0].data())?;
            }
            writeln!(f, " ]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::graph::EdgeType;

    #[test]
    fn airport_example() {
        let mut graph = AdjacencyList::new();
        let singapore = graph.create_vertex("Singapore");
        let tokyo = graph.create_vertex("Tokyo");
        let hong_kong = graph.create_vertex("Hong Kong");
        let detroit = graph.create_vertex("Detroit");
        let san_francisco = graph.create_vertex("San Francisco");
        let washington_dc = graph.create_vertex("Washington DC");
        let austin = graph.create_vertex("Austin");
        let seattle = graph.create_vertex("Seattle");

        for (a, b, w) in [
            (singapore, hong_kong, 300.0),
            (singapore, tokyo, 500.0),
            (hong_kong, tokyo, 250.0),
            (tokyo, detroit, 450.0),
            (tokyo, washington_dc, 300.0),
            (hong_kong, san_francisco, 600.0),
            (detroit, austin, 50.0),
            (austin, washington_dc, 292.0),
            (san_francisco, washington_dc, 337.0),
            (washington_dc, seattle, 277.0),
            (san_francisco, seattle, 218.0),
            (austin, san_francisco, 297.0),
        ] {
            graph.add(EdgeType::Undirected, a, b, Some(w)).unwrap();
        }

        assert_eq!(graph.weight(hong_kong, san_francisco), Some(600.0));
        assert_eq!(graph.weight(san_francisco, hong_kong), Some(600.0));
        assert_eq!(graph.weight(singapore, seattle), None);
        assert_eq!(graph.edges(san_francisco).len(), 4);
        assert_eq!(graph.edge_count(), 24);
        assert!(graph
            .edges(san_francisco)
            .iter()
            .all(|edge| edge.source == san_francisco));
    }

    #[test]
    fn ids_follow_creation_order() {
        let mut graph = AdjacencyList::new();
        let a = graph.create_vertex('a');
        let b = graph.create_vertex('b');
        assert_eq!(a, VertexId(0));
        assert_eq!(b, VertexId(1));
        assert_eq!(graph.vertices(), vec![a, b]);
        assert_eq!(graph.data(b), Some(&'b'));
        assert_eq!(graph.vertex(a).unwrap(), &Vertex::new(a, 'a'));
    }

    #[test]
    fn unknown_vertex_has_no_edges() {
        let graph: AdjacencyList<u8> = AdjacencyList::new();
        assert!(graph.edges(VertexId(7)).is_empty());
        assert!(graph.weight(VertexId(0), VertexId(1)).is_none());
        assert!(!graph.contains(VertexId(0)));
    }

    #[test]
    fn edge_to_unknown_vertex_is_rejected() {
        let mut graph = AdjacencyList::new();
        let a = graph.create_vertex(1);
        let err = graph.add_undirected_edge(a, VertexId(3), None).unwrap_err();
        assert_eq!(err, GraphError::VertexNotFound(VertexId(3)));
        assert!(graph.edges(a).is_empty());
    }

    #[test]
    fn unweighted_edge_has_no_weight() {
        let mut graph = AdjacencyList::new();
        let a = graph.create_vertex(1);
        let b = graph.create_vertex(2);
        graph.add_directed_edge(a, b, None).unwrap();
        assert_eq!(graph.edges(a).len(), 1);
        assert!(graph.weight(a, b).is_none());
        assert!(graph.edges(b).is_empty());
    }

    #[test]
    fn first_matching_edge_wins() {
        let mut graph = AdjacencyList::new();
        let a = graph.create_vertex(1);
        let b = graph.create_vertex(2);
        graph.add_directed_edge(a, b, Some(4.0)).unwrap();
        graph.add_directed_edge(a, b, Some(1.0)).unwrap();
        assert_eq!(graph.weight(a, b), Some(4.0));
    }

    #[test]
    fn small_world() {
        let mut graph = AdjacencyList::new();
        let vincent = graph.create_vertex("Vincent");
        let chelsey = graph.create_vertex("Chelsey");
        let ruiz = graph.create_vertex("Ruiz");
        let patrick = graph.create_vertex("Patrick");
        let ray = graph.create_vertex("Ray");
        let sun = graph.create_vertex("Sun");
        let cole = graph.create_vertex("Cole");
        let kerry = graph.create_vertex("Kerry");

        for (a, b) in [
            (vincent, chelsey),
            (vincent, ruiz),
            (vincent, patrick),
            (ruiz, ray),
            (ruiz, sun),
            (ruiz, vincent),
            (patrick, cole),
            (patrick, kerry),
            (cole, ruiz),
            (cole, vincent),
        ] {
            graph.add_undirected_edge(a, b, Some(1.0)).unwrap();
        }

        assert_eq!(graph.weight(vincent, cole), Some(1.0));
        assert_eq!(graph.weight(chelsey, kerry), None);
    }

    #[test]
    fn copy_vertices_keeps_ids_and_drops_edges() {
        let mut graph = AdjacencyList::new();
        let a = graph.create_vertex("a");
        let b = graph.create_vertex("b");
        graph.add_directed_edge(a, b, Some(1.0)).unwrap();

        let copy = AdjacencyList::copy_vertices(&graph);
        assert_eq!(copy.vertices(), vec![a, b]);
        assert_eq!(copy.data(b), Some(&"b"));
        assert_eq!(copy.edge_count(), 0);
    }

    #[test]
    fn display_lists_destinations() {
        let mut graph = AdjacencyList::new();
        let a = graph.create_vertex("a");
        let b = graph.create_vertex("b");
        let c = graph.create_vertex("c");
        graph.add_directed_edge(a, b, None).unwrap();
        graph.add_directed_edge(a, c, None).unwrap();

        assert_eq!(
            graph.to_string(),
            "a ---> [ b, c ]\nb ---> [  ]\nc ---> [  ]\n"
        );
    }

    #[test]
    fn data_can_change_in_place() {
        let mut graph = AdjacencyList::new();
        let a = graph.create_vertex(1);
        *graph.data_mut(a).unwrap() = 5;
        assert_eq!(graph.data(a), Some(&5));
        assert_eq!(graph.vertex(a).unwrap().id(), a);
        assert!(graph.data_mut(VertexId(9)).is_none());
    }
}
