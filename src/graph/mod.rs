//! Directed weighted route graph and the queries over it.

pub mod combine;
pub mod cycle;
pub mod enumerate;
pub mod path;
pub mod shortest;
pub mod store;

use std::fmt::Debug;
use std::hash::Hash;

pub use combine::limited_cyclic_paths;
pub use cycle::all_cyclic_paths;
pub use enumerate::{all_paths, all_simple_paths};
pub use path::{NO_SUCH_ROUTE, Path, Paths, RouteDistance};
pub use shortest::{
    Distances, all_pairs_shortest, path_distance, shortest_cyclic_distance, shortest_path,
    single_source_shortest,
};
pub use store::{Edge, Edges, Graph, MAX_CAPACITY, NO_EDGE};

/// Anything usable as a vertex identifier.
pub trait Vertex: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> Vertex for T {}

/// The five-site network used across the module tests.
#[cfg(test)]
pub(crate) fn sample_graph() -> Graph<char> {
    let mut graph = Graph::with_capacity(5).unwrap();
    graph.add_vertices(['A', 'B', 'C', 'D', 'E']).unwrap();
    for (s, d, w) in [
        ('A', 'B', 5),
        ('B', 'C', 4),
        ('C', 'D', 8),
        ('D', 'C', 8),
        ('D', 'E', 6),
        ('A', 'D', 5),
        ('C', 'E', 2),
        ('E', 'B', 3),
        ('A', 'E', 7),
    ] {
        graph.add_edge(&s, &d, w).unwrap();
    }
    graph
}
