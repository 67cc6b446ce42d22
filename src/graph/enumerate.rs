//! Depth-first enumeration of simple paths.

use super::Vertex;
use super::cycle::all_cyclic_paths;
use super::path::Paths;
use super::store::Graph;
use crate::Result;
use tracing::debug;

/// Every simple path from `source` to `destination`.
///
/// A branch ends as soon as it reaches `destination`, so the destination only
/// ever appears as the last vertex. When `source == destination` the single
/// path `[source]` with weight 0 is returned.
pub fn all_simple_paths<V: Vertex>(
    graph: &Graph<V>,
    source: &V,
    destination: &V,
) -> Result<Paths<V>> {
    let from = graph.require(source)?;
    let to = graph.require(destination)?;

    let paths: Paths<V> = simple_paths_between(graph, from, to)
        .into_iter()
        .map(|(slots, weight)| (graph.resolve(&slots), weight))
        .collect();

    debug!(?source, ?destination, count = paths.len(), "enumerated simple paths");
    Ok(paths)
}

/// Simple paths from `source` to `destination`, optionally followed by one
/// loop around the destination.
///
/// With `splice_cycles` set, every simple path `P` is also emitted as
/// `P ++ C` for each elementary cycle `C` through `destination`, weighted
/// `weight(P) + weight(C)`. Splicing happens once; spliced paths are not
/// spliced again.
pub fn all_paths<V: Vertex>(
    graph: &Graph<V>,
    source: &V,
    destination: &V,
    splice_cycles: bool,
) -> Result<Paths<V>> {
    let simple = all_simple_paths(graph, source, destination)?;
    if !splice_cycles {
        return Ok(simple);
    }

    let cycles = all_cyclic_paths(graph, destination, false)?;
    let mut paths = simple.clone();
    for (path, weight) in simple.iter() {
        for (cycle, cycle_weight) in cycles.iter() {
            paths.insert([path, cycle].concat(), weight + cycle_weight);
        }
    }

    debug!(
        ?source,
        ?destination,
        simple = simple.len(),
        total = paths.len(),
        "spliced destination cycles"
    );
    Ok(paths)
}

/// Slot-level simple path search shared with the cycle finder.
pub(crate) fn simple_paths_between<V: Vertex>(
    graph: &Graph<V>,
    from: usize,
    to: usize,
) -> Vec<(Vec<usize>, u64)> {
    let mut visited = vec![false; graph.slot_count()];
    let mut buffer = vec![from];
    explore(graph, from, to, &mut visited, &mut buffer, 0)
}

/// Returns the paths found below `current`; the caller merges them.
fn explore<V: Vertex>(
    graph: &Graph<V>,
    current: usize,
    destination: usize,
    visited: &mut [bool],
    buffer: &mut Vec<usize>,
    weight: u64,
) -> Vec<(Vec<usize>, u64)> {
    if current == destination {
        return vec![(buffer.clone(), weight)];
    }

    visited[current] = true;
    let mut found = Vec::new();
    for (next, edge_weight) in graph.successors(current) {
        if visited[next] {
            continue;
        }
        buffer.push(next);
        found.extend(explore(
            graph,
            next,
            destination,
            visited,
            buffer,
            weight + u64::from(edge_weight),
        ));
        buffer.pop();
    }
    visited[current] = false;
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::graph::sample_graph;
    use std::collections::HashSet;

    #[test]
    fn test_simple_paths_a_to_c() {
        let graph = sample_graph();
        let paths = all_simple_paths(&graph, &'A', &'C').unwrap();

        assert_eq!(paths.len(), 4);
        assert_eq!(paths.weight_of(&['A', 'B', 'C']), Some(9));
        assert_eq!(paths.weight_of(&['A', 'D', 'C']), Some(13));
        assert_eq!(paths.weight_of(&['A', 'E', 'B', 'C']), Some(14));
        assert_eq!(paths.weight_of(&['A', 'D', 'E', 'B', 'C']), Some(18));
    }

    #[test]
    fn test_simple_paths_never_repeat() {
        let graph = sample_graph();
        for (path, _) in all_simple_paths(&graph, &'A', &'B').unwrap().iter() {
            let distinct: HashSet<_> = path.iter().collect();
            assert_eq!(distinct.len(), path.len(), "repeated vertex in {path:?}");
        }
    }

    #[test]
    fn test_simple_paths_same_endpoint() {
        let graph = sample_graph();
        let paths = all_simple_paths(&graph, &'C', &'C').unwrap();
        assert_eq!(paths.len(), 1);
        assert_eq!(paths.weight_of(&['C']), Some(0));
    }

    #[test]
    fn test_simple_paths_unreachable() {
        let mut graph = sample_graph();
        // capacity is 5, so F is rejected
        assert!(graph.add_vertex('F').is_err());
        assert!(matches!(
            all_simple_paths(&graph, &'A', &'F'),
            Err(Error::VertexNotFound { .. })
        ));

        // nothing leads back into A
        assert!(all_simple_paths(&graph, &'C', &'A').unwrap().is_empty());
    }

    #[test]
    fn test_all_paths_without_splicing_matches_simple() {
        let graph = sample_graph();
        assert_eq!(
            all_paths(&graph, &'A', &'C', false).unwrap(),
            all_simple_paths(&graph, &'A', &'C').unwrap()
        );
    }

    #[test]
    fn test_all_paths_with_splicing() {
        let graph = sample_graph();
        let paths = all_paths(&graph, &'A', &'C', true).unwrap();

        // 4 simple paths, each combined with the 3 cycles through C
        assert_eq!(paths.len(), 4 + 4 * 3);
        assert_eq!(paths.weight_of(&['A', 'B', 'C', 'D', 'C']), Some(9 + 16));
        assert_eq!(paths.weight_of(&['A', 'B', 'C', 'E', 'B', 'C']), Some(9 + 9));

        let four_stops = paths.filter_len(|n| n == 5);
        assert_eq!(four_stops.len(), 3);
        assert!(four_stops.contains(&['A', 'B', 'C', 'D', 'C']));
        assert!(four_stops.contains(&['A', 'D', 'C', 'D', 'C']));
        assert!(four_stops.contains(&['A', 'D', 'E', 'B', 'C']));
    }

    #[test]
    fn test_splicing_only_changes_counts_with_cycles() {
        let mut graph = Graph::with_capacity(3).unwrap();
        graph.add_vertices(["X", "Y", "Z"]).unwrap();
        graph.add_edge(&"X", &"Y", 1).unwrap();
        graph.add_edge(&"Y", &"Z", 1).unwrap();

        let plain = all_paths(&graph, &"X", &"Z", false).unwrap();
        let spliced = all_paths(&graph, &"X", &"Z", true).unwrap();
        assert_eq!(plain, spliced);
        assert_eq!(plain.weight_of(&["X", "Y", "Z"]), Some(2));
    }
}
