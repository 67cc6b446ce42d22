//! Elementary cycles through a vertex.

use super::Vertex;
use super::enumerate::simple_paths_between;
use super::path::Paths;
use super::store::Graph;
use crate::Result;
use tracing::debug;

/// Every elementary cycle that leaves `source` and returns to it.
///
/// For each neighbour `n` of `source`, each simple path `n -> ... -> source`
/// becomes one cycle weighing `weight(source -> n) + weight(path)`. The stored
/// sequence is the path itself, so it ends at `source`; with `include_source`
/// the departure is prepended as well (`[source, n, ..., source]`).
pub fn all_cyclic_paths<V: Vertex>(
    graph: &Graph<V>,
    source: &V,
    include_source: bool,
) -> Result<Paths<V>> {
    let root = graph.require(source)?;

    let mut cycles = Paths::new();
    for (next, departure) in graph.successors(root) {
        for (mut slots, weight) in simple_paths_between(graph, next, root) {
            if include_source {
                slots.insert(0, root);
            }
            cycles.insert(graph.resolve(&slots), weight + u64::from(departure));
        }
    }

    debug!(?source, count = cycles.len(), "found elementary cycles");
    Ok(cycles)
}
