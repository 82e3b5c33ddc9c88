pub mod collections;
pub mod error;
pub mod graph;
pub mod math;
pub mod pool;
pub mod scene;

pub use error::{GraphMapError, Result};
