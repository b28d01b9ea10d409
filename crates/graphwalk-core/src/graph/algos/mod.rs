//! Graph algorithm implementations
//!
//! Contains concrete implementations of graph algorithms:
//! - `dfs`: Depth-first forest with discovery/finish timestamps
//! - `bfs`: Breadth-first tree with edge distances
//! - `prim`: Minimum spanning tree over the indexed min-heap
//! - `dijkstra`: Shortest path tree over the indexed min-heap
//! - `shared`: State used by more than one algorithm

pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod prim;
pub mod shared;

pub use bfs::bfs_traverse;
pub use dfs::dfs_traverse;
pub use dijkstra::dijkstra_spt;
pub use prim::prim_mst;
