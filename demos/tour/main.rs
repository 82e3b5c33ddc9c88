//! Walks a small map through every part of the crate.
//!
//! ```text
//! cargo run --example tour
//! RUST_LOG=graphmapnav=debug cargo run --example tour
//! ```

use graphmapnav::graph::{AdjacencyList, Dijkstra, Graph, Prim, Traversal};
use graphmapnav::math::Vector2;
use graphmapnav::pool::EntityTable;
use graphmapnav::scene::{SceneGraph, SceneNode};
use graphmapnav::GraphMapError;

fn main() -> Result<(), GraphMapError> {
    // Default: WARN for everything, INFO for the library and this demo.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("tour=info".parse().unwrap_or_default())
        .add_directive("graphmapnav=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut map = AdjacencyList::new();
    let harbor = map.create_vertex("harbor");
    let market = map.create_vertex("market");
    let castle = map.create_vertex("castle");
    let forest = map.create_vertex("forest");
    map.add_undirected_edge(harbor, market, Some(2.0))?;
    map.add_undirected_edge(market, castle, Some(3.0))?;
    map.add_undirected_edge(harbor, forest, Some(4.0))?;
    map.add_undirected_edge(forest, castle, Some(1.0))?;
    print!("{map}");

    let dijkstra = Dijkstra::new(&map);
    let paths = dijkstra.shortest_paths(harbor);
    let route: Vec<_> = dijkstra
        .shortest_path(castle, &paths)
        .iter()
        .rev()
        .map(|edge| format!("{} -> {}", edge.source, edge.destination))
        .collect();
    println!(
        "harbor to castle: {} (cost {})",
        route.join(", "),
        dijkstra.distance(castle, &paths)
    );

    let spanning = Prim::new(&map).execute()?;
    println!("road network cost: {}", spanning.cost);
    println!("depth first: {:?}", map.depth_first_search(harbor));

    let mut entities = EntityTable::default();
    let mut scene = SceneGraph::new();
    let board = scene.create_vertex(SceneNode::new("board"));
    for (slug, x) in [("knight", 1.0), ("bishop", 3.0)] {
        entities.create(slug);
        let piece = SceneNode::new(slug)
            .with_position(Vector2::new(x, 0.0))
            .with_parent("board");
        scene.add_child_to(board, piece)?;
    }
    if let Some(node) = scene.node_mut(board) {
        node.position = Vector2::new(10.0, 5.0);
    }
    scene.render(|vertex| {
        let node = vertex.data();
        println!("{} at {:?}", node.slug, node.render_model());
    });

    if let Some(knight) = entities.find(&"knight".into()).map(|e| e.id()) {
        entities.delete(knight)?;
    }
    for entity in entities.active_entities() {
        println!("entity {} is {}", entity.id(), entity.slug());
    }

    Ok(())
}
