use std::collections::{HashSet, VecDeque};

use super::{Graph, VertexId};

/// Traversal and search algorithms available on every [`Graph`].
///
/// All operations assume the graph is not mutated while they run.
pub trait Traversal<T>: Graph<T> {
    /// Counts the simple paths from `source` to `destination`.
    ///
    /// Backtracking depth-first search: a vertex is on the visited set only
    /// while it is on the current path, so it can be reached again through a
    /// different path. O(V + E) per path explored.
    fn number_of_paths(&self, source: VertexId, destination: VertexId) -> usize {
        let mut visited = HashSet::new();
        count_paths(self, source, destination, &mut visited)
    }

    /// Visits every vertex reachable from `source` in breadth-first order.
    fn breadth_first_traversal<V>(&self, source: VertexId, mut visit: V)
    where
        V: FnMut(VertexId),
    {
        let mut queue = VecDeque::from([source]);
        let mut enqueued = HashSet::from([source]);

        while let Some(vertex) = queue.pop_front() {
            visit(vertex);
            for edge in self.edges(vertex) {
                if enqueued.insert(edge.destination) {
                    queue.push_back(edge.destination);
                }
            }
        }
    }

    /// Same visiting order as [`Traversal::breadth_first_traversal`], with
    /// the dequeue loop expressed as recursion.
    ///
    /// Recurses once per visited vertex, so stack depth grows with the number
    /// of reachable vertices rather than the graph's depth. Prefer the
    /// iterative form on large graphs.
    fn breadth_first_traversal_recursive<V>(&self, source: VertexId, mut visit: V)
    where
        V: FnMut(VertexId),
    {
        let mut queue = VecDeque::from([source]);
        let mut enqueued = HashSet::from([source]);
        bfs_step(self, &mut queue, &mut enqueued, &mut visit);
    }

    /// Vertices reachable from `source` in breadth-first order.
    fn breadth_first_sort(&self, source: VertexId) -> Vec<VertexId> {
        let mut visited = Vec::new();
        self.breadth_first_traversal(source, |vertex| visited.push(vertex));
        visited
    }

    /// Returns `true` if a breadth-first sort from the first vertex misses any
    /// vertex of the graph. An empty graph is connected.
    fn is_disconnected(&self) -> bool {
        let vertices = self.vertices();
        let Some(&first) = vertices.first() else {
            return false;
        };
        let reached: HashSet<VertexId> = self.breadth_first_sort(first).into_iter().collect();
        vertices.iter().any(|vertex| !reached.contains(vertex))
    }

    /// Depth-first pre-order from `source`, using an explicit stack.
    ///
    /// The stack holds the path from `source` to the frontier. The top is
    /// only popped once every one of its neighbours has been pushed.
    fn depth_first_search(&self, source: VertexId) -> Vec<VertexId> {
        let mut stack = vec![source];
        let mut pushed = HashSet::from([source]);
        let mut visited = vec![source];

        while let Some(&vertex) = stack.last() {
            let next = self
                .edges(vertex)
                .iter()
                .map(|edge| edge.destination)
                .find(|destination| !pushed.contains(destination));

            match next {
                Some(destination) => {
                    stack.push(destination);
                    pushed.insert(destination);
                    visited.push(destination);
                }
                None => {
                    stack.pop();
                }
            }
        }

        visited
    }

    /// Depth-first pre-order from `source`, backtracking through the call
    /// stack.
    fn depth_first_search_recursive<V>(&self, source: VertexId, mut visit: V)
    where
        V: FnMut(VertexId),
    {
        let mut pushed = HashSet::new();
        dfs_pre_order(self, source, &mut pushed, &mut visit);
    }

    /// Orders vertices so every edge points from an earlier to a later one.
    ///
    /// Runs a post-order depth-first search from every unvisited vertex in
    /// creation order, then reverses the result. Only meaningful on acyclic
    /// graphs; no cycle check is made.
    fn top_sort(&self) -> Vec<VertexId> {
        let mut ordered = Vec::new();
        let mut pushed = HashSet::new();

        for source in self.vertices() {
            if !pushed.contains(&source) {
                dfs_post_order(self, source, &mut pushed, &mut |vertex| ordered.push(vertex));
            }
        }

        ordered.reverse();
        ordered
    }

    /// Returns `true` if a cycle is reachable from `source`.
    ///
    /// Vertices stay marked once entered, so any edge back into an already
    /// entered vertex counts as a cycle. Cycles that `source` cannot reach are
    /// not reported.
    fn has_cycle(&self, source: VertexId) -> bool {
        let mut pushed = HashSet::new();
        check_for_cycle(self, source, &mut pushed)
    }
}

impl<T, G: Graph<T> + ?Sized> Traversal<T> for G {}

fn count_paths<T, G: Graph<T> + ?Sized>(
    graph: &G,
    source: VertexId,
    destination: VertexId,
    visited: &mut HashSet<VertexId>,
) -> usize {
    visited.insert(source);
    let count = if source == destination {
        1
    } else {
        let mut count = 0;
        for edge in graph.edges(source) {
            if !visited.contains(&edge.destination) {
                count += count_paths(graph, edge.destination, destination, visited);
            }
        }
        count
    };
    visited.remove(&source);
    count
}

fn bfs_step<T, G, V>(
    graph: &G,
    queue: &mut VecDeque<VertexId>,
    enqueued: &mut HashSet<VertexId>,
    visit: &mut V,
) where
    G: Graph<T> + ?Sized,
    V: FnMut(VertexId),
{
    let Some(vertex) = queue.pop_front() else {
        return;
    };
    visit(vertex);
    for edge in graph.edges(vertex) {
        if enqueued.insert(edge.destination) {
            queue.push_back(edge.destination);
        }
    }
    bfs_step(graph, queue, enqueued, visit);
}

fn dfs_pre_order<T, G, V>(graph: &G, source: VertexId, pushed: &mut HashSet<VertexId>, visit: &mut V)
where
    G: Graph<T> + ?Sized,
    V: FnMut(VertexId),
{
    pushed.insert(source);
    visit(source);
    for edge in graph.edges(source) {
        if !pushed.contains(&edge.destination) {
            dfs_pre_order(graph, edge.destination, pushed, visit);
        }
    }
}

pub(crate) fn dfs_post_order<T, G, V>(
    graph: &G,
    source: VertexId,
    pushed: &mut HashSet<VertexId>,
    visit: &mut V,
) where
    G: Graph<T> + ?Sized,
    V: FnMut(VertexId),
{
    pushed.insert(source);
    for edge in graph.edges(source) {
        if !pushed.contains(&edge.destination) {
            dfs_post_order(graph, edge.destination, pushed, visit);
        }
    }
    visit(source);
}

fn check_for_cycle<T, G: Graph<T> + ?Sized>(
    graph: &G,
    source: VertexId,
    pushed: &mut HashSet<VertexId>,
) -> bool {
    pushed.insert(source);
    // Marks are never cleared: re-entering any vertex means a cycle.
    graph.edges(source).iter().any(|edge| {
        pushed.contains(&edge.destination) || check_for_cycle(graph, edge.destination, pushed)
    })
}
