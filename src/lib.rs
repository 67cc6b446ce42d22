//! routegraph - a directed, weighted route graph.
//!
//! The graph store keeps vertices in a fixed number of slots and edges in an
//! adjacency matrix. On top of it sit simple-path enumeration, elementary
//! cycle search, bounded cycle composition and Dijkstra shortest paths.

pub mod cli;
pub mod error;
pub mod graph;
pub mod routes;

pub use error::{Error, Result};
pub use graph::{Graph, Path, Paths, RouteDistance, Vertex};
pub use routes::Route;
