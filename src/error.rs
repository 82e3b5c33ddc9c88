use thiserror::Error;

use crate::graph::VertexId;
use crate::pool::EntityId;

/// Top-level error type for the graphmapnav core.
#[derive(Debug, Error)]
pub enum GraphMapError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Scene(#[from] SceneError),

    #[error(transparent)]
    Pool(#[from] PoolError),
}

/// Errors related to graph construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("vertex {0} does not belong to this graph")]
    VertexNotFound(VertexId),
}

/// Errors related to the scene tree invariant.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SceneError {
    #[error("scene has no root vertex")]
    NoRoot,

    #[error("vertex {0} already has a parent")]
    AlreadyParented(VertexId),

    #[error("attaching {child} under {parent} would create a cycle")]
    WouldCycle { parent: VertexId, child: VertexId },

    #[error("the root vertex {0} cannot become a child")]
    RootAsChild(VertexId),
}

/// Errors related to entity pool bookkeeping.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PoolError {
    #[error("entity id {id} is out of range [0, {capacity})")]
    OutOfRange { id: EntityId, capacity: usize },

    #[error("entity {0} is not active")]
    Inactive(EntityId),
}

/// Convenience type alias for results using [`GraphMapError`].
pub type Result<T> = std::result::Result<T, GraphMapError>;
