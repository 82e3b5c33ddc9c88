//! Scene graph: a tree of positioned nodes whose world transforms are
//! composed from the root down.

mod node;

pub use node::SceneNode;

use std::collections::{HashMap, HashSet};

use tracing::trace;

use crate::error::{GraphError, Result, SceneError};
use crate::graph::{AdjacencyList, Graph, Traversal, Vertex, VertexId};
use crate::math::Matrix3;
use crate::pool::EntitySlug;

/// Tree of [`SceneNode`]s stored in any [`Graph`] backend.
///
/// The first vertex created becomes the root. Every other vertex has at most
/// one parent and the parent links never form a cycle.
#[derive(Debug, Clone)]
pub struct SceneGraph<G = AdjacencyList<SceneNode>> {
    graph: G,
    root: Option<VertexId>,
    parents: HashMap<VertexId, VertexId>,
}

impl SceneGraph {
    /// Creates an empty scene backed by an adjacency list.
    #[must_use]
    pub fn new() -> Self {
        Self::with_graph(AdjacencyList::new())
    }
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: Graph<SceneNode>> SceneGraph<G> {
    /// Creates a scene over an empty `graph`.
    #[must_use]
    pub fn with_graph(graph: G) -> Self {
        Self {
            graph,
            root: None,
            parents: HashMap::new(),
        }
    }

    /// The backing graph.
    #[must_use]
    pub fn graph(&self) -> &G {
        &self.graph
    }

    /// The root vertex, if any vertex was created.
    #[must_use]
    pub fn root(&self) -> Option<VertexId> {
        self.root
    }

    /// Adds a detached vertex. The first one becomes the root.
    pub fn create_vertex(&mut self, node: SceneNode) -> VertexId {
        let id = self.graph.create_vertex(node);
        self.root.get_or_insert(id);
        id
    }

    /// Creates a vertex for `node` and attaches it to the root. On an empty
    /// scene the node becomes the root instead.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`SceneGraph::attach`]. The scene is left
    /// unchanged on error.
    pub fn add_child(&mut self, node: SceneNode) -> Result<VertexId> {
        match self.root {
            Some(root) => self.add_child_to(root, node),
            None => Ok(self.create_vertex(node)),
        }
    }

    /// Creates a vertex for `node` under `parent`.
    ///
    /// # Errors
    ///
    /// [`GraphError::VertexNotFound`] if `parent` is unknown, otherwise
    /// errors from [`SceneGraph::attach`]. No vertex is created on error.
    pub fn add_child_to(&mut self, parent: VertexId, node: SceneNode) -> Result<VertexId> {
        if !self.graph.contains(parent) {
            return Err(GraphError::VertexNotFound(parent).into());
        }
        let id = self.create_vertex(node);
        self.attach(Some(parent), id)?;
        Ok(id)
    }

    /// Makes `child` a child of `parent`, or of the root when `parent` is
    /// `None`.
    ///
    /// # Errors
    ///
    /// - [`SceneError::NoRoot`] if `parent` is `None` on an empty scene.
    /// - [`GraphError::VertexNotFound`] if either vertex is unknown.
    /// - [`SceneError::RootAsChild`] if `child` is the root.
    /// - [`SceneError::AlreadyParented`] if `child` already has a parent.
    /// - [`SceneError::WouldCycle`] if `child` is `parent` or one of its
    ///   ancestors.
    pub fn attach(&mut self, parent: Option<VertexId>, child: VertexId) -> Result<()> {
        let parent = match parent {
            Some(parent) => parent,
            None => self.root.ok_or(SceneError::NoRoot)?,
        };
        for id in [parent, child] {
            if !self.graph.contains(id) {
                return Err(GraphError::VertexNotFound(id).into());
            }
        }
        if self.root == Some(child) {
            return Err(SceneError::RootAsChild(child).into());
        }
        if self.parents.contains_key(&child) {
            return Err(SceneError::AlreadyParented(child).into());
        }
        if self.ancestors(parent).any(|ancestor| ancestor == child) {
            return Err(SceneError::WouldCycle { parent, child }.into());
        }

        self.graph.add_directed_edge(parent, child, None)?;
        self.parents.insert(child, parent);
        Ok(())
    }

    /// Parent of `id` in the scene tree.
    #[must_use]
    pub fn parent_of(&self, id: VertexId) -> Option<VertexId> {
        self.parents.get(&id).copied()
    }

    /// Node payload of `id`.
    #[must_use]
    pub fn node(&self, id: VertexId) -> Option<&SceneNode> {
        self.graph.data(id)
    }

    /// Mutable node payload of `id`, e.g. to move it between frames.
    pub fn node_mut(&mut self, id: VertexId) -> Option<&mut SceneNode> {
        self.graph.data_mut(id)
    }

    /// Vertex drawing the entity `slug`.
    #[must_use]
    pub fn find(&self, slug: &EntitySlug) -> Option<VertexId> {
        self.graph
            .vertices()
            .into_iter()
            .find(|&id| self.node(id).is_some_and(|node| &node.slug == slug))
    }

    /// Vertices reachable from the root, in breadth-first order.
    #[must_use]
    pub fn nodes(&self) -> Vec<VertexId> {
        self.root
            .map(|root| self.graph.breadth_first_sort(root))
            .unwrap_or_default()
    }

    /// Composes every world transform, then visits each vertex in
    /// breadth-first order.
    ///
    /// Only the composition pass recurses, to the height of the tree.
    ///
    /// Composition is a depth-first walk from the root that sets each node's
    /// world transform to its parent's world transform times its own local
    /// translation. It runs to completion before the first visit, so the
    /// visitor always sees final transforms. Nothing is cached between calls.
    pub fn render<V>(&mut self, mut visit: V)
    where
        V: FnMut(&Vertex<SceneNode>),
    {
        let Some(root) = self.root else {
            return;
        };

        let mut pushed = HashSet::new();
        compose(&mut self.graph, root, &Matrix3::identity(), &mut pushed);
        trace!(composed = pushed.len(), "composed scene transforms");

        let graph = &self.graph;
        graph.breadth_first_traversal(root, |id| {
            if let Some(vertex) = graph.vertex(id) {
                visit(vertex);
            }
        });
    }

    fn ancestors(&self, id: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        std::iter::successors(Some(id), |current| self.parents.get(current).copied())
    }
}

fn compose<G: Graph<SceneNode>>(
    graph: &mut G,
    vertex: VertexId,
    parent_world: &Matrix3,
    pushed: &mut HashSet<VertexId>,
) {
    pushed.insert(vertex);

    let Some(node) = graph.data_mut(vertex) else {
        return;
    };
    let world = parent_world * node.local();
    node.set_world(world);

    let children: Vec<VertexId> = graph.edges(vertex).iter().map(|edge| edge.destination).collect();
    for child in children {
        if !pushed.contains(&child) {
            compose(graph, child, &world, pushed);
        }
    }
}
