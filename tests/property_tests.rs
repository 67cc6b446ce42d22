use proptest::prelude::*;
use routegraph::Graph;
use routegraph::graph::{
    all_cyclic_paths, all_simple_paths, limited_cyclic_paths, single_source_shortest,
};
use std::collections::HashSet;

const SITES: usize = 6;

/// Random edge lists over `SITES` vertices, with positive weights.
fn edges() -> impl Strategy<Value = Vec<(usize, usize, u32)>> {
    proptest::collection::vec((0..SITES, 0..SITES, 1u32..20), 0..20)
}

/// Sparser, heavier edge lists, so cycle composition stays small.
fn sparse_edges() -> impl Strategy<Value = Vec<(usize, usize, u32)>> {
    proptest::collection::vec((0..SITES, 0..SITES, 5u32..20), 0..10)
}

fn build(edges: &[(usize, usize, u32)]) -> Graph<usize> {
    let mut graph = Graph::with_capacity(SITES).unwrap();
    graph.add_vertices(0..SITES).unwrap();
    for &(s, d, w) in edges {
        // repeated pairs keep their first weight
        let _ = graph.add_edge(&s, &d, w);
    }
    graph
}

fn weight_along(graph: &Graph<usize>, path: &[usize]) -> u64 {
    path.windows(2)
        .map(|pair| u64::from(graph.edge_weight(&pair[0], &pair[1]).unwrap()))
        .sum()
}

proptest! {
    #[test]
    fn simple_paths_are_simple_and_weighted(edges in edges(), s in 0..SITES, d in 0..SITES) {
        let graph = build(&edges);
        for (path, weight) in all_simple_paths(&graph, &s, &d).unwrap().iter() {
            let distinct: HashSet<_> = path.iter().collect();
            prop_assert_eq!(distinct.len(), path.len());
            prop_assert_eq!(path.first(), Some(&s));
            prop_assert_eq!(path.last(), Some(&d));
            prop_assert_eq!(weight_along(&graph, path), weight);
        }
    }

    #[test]
    fn cycle_weights_include_the_closing_edge(edges in edges(), v in 0..SITES) {
        let graph = build(&edges);
        for (cycle, weight) in all_cyclic_paths(&graph, &v, true).unwrap().iter() {
            prop_assert_eq!(cycle.first(), Some(&v));
            prop_assert_eq!(cycle.last(), Some(&v));
            prop_assert_eq!(weight_along(&graph, cycle), weight);
        }
    }

    #[test]
    fn shortest_distance_never_beats_a_simple_path(edges in edges(), s in 0..SITES, d in 0..SITES) {
        let graph = build(&edges);
        let distances = single_source_shortest(&graph, &s).unwrap();
        let simple = all_simple_paths(&graph, &s, &d).unwrap();

        match distances.get(&d) {
            Some(&best) => {
                let lightest = simple.iter().map(|(_, w)| w).min();
                prop_assert_eq!(lightest, Some(best));
            }
            None => prop_assert!(simple.is_empty()),
        }
    }

    #[test]
    fn limited_cycles_stay_under_the_limit(edges in sparse_edges(), v in 0..SITES, limit in 1u64..30) {
        let graph = build(&edges);
        for (walk, weight) in limited_cyclic_paths(&graph, &v, limit).unwrap().iter() {
            prop_assert!(weight < limit);
            prop_assert_eq!(walk.last(), Some(&v));
        }
    }

    #[test]
    fn removing_a_vertex_drops_its_edges(edges in edges(), v in 0..SITES) {
        let mut graph = build(&edges);
        let incident = graph.outgoing_edges(&v).unwrap().count()
            + graph.incoming_edges(&v).unwrap().filter(|e| *e.source != v).count();
        let before = graph.edge_count();

        graph.remove_vertex(&v).unwrap();
        prop_assert_eq!(graph.edge_count(), before - incident);
        prop_assert!(graph.edges().all(|e| *e.source != v && *e.destination != v));
    }
}
