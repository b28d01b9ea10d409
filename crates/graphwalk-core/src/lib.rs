//! Graphwalk Core Library
//!
//! Weighted undirected graphs with depth-first and breadth-first traversal,
//! Prim minimum spanning trees and Dijkstra shortest path trees, the latter
//! two driven by an indexed binary min-heap with decrease-key.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod heap;
pub mod logging;

pub use error::{GraphError, Result};
pub use graph::{Graph, TraversalResult, TreeResult, Vertex, INFINITY};
pub use heap::IndexedMinHeap;
