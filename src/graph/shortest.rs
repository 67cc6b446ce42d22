//! Shortest paths over non-negative weights.
//!
//! The matrix is dense, so Dijkstra runs in O(V²) by scanning for the closest
//! unsettled vertex instead of keeping a heap.

use super::Vertex;
use super::path::Path;
use super::store::Graph;
use crate::error::{Error, Result};
use rayon::prelude::*;
use std::collections::HashMap;
use tracing::debug;

/// Distance from one source to every vertex it reaches.
pub type Distances<V> = HashMap<V, u64>;

/// Per-slot Dijkstra output: tentative distances and predecessor slots.
struct ShortestTree {
    distance: Vec<Option<u64>>,
    previous: Vec<Option<usize>>,
}

impl ShortestTree {
    fn build<V: Vertex>(graph: &Graph<V>, root: usize) -> Self {
        let n = graph.slot_count();
        let mut distance: Vec<Option<u64>> = vec![None; n];
        let mut previous = vec![None; n];
        let mut settled = vec![false; n];
        distance[root] = Some(0);

        while let Some((current, base)) = closest_unsettled(&distance, &settled) {
            settled[current] = true;
            for (next, weight) in graph.successors(current) {
                let candidate = base + u64::from(weight);
                if distance[next].is_none_or(|d| candidate < d) {
                    distance[next] = Some(candidate);
                    previous[next] = Some(current);
                }
            }
        }

        Self { distance, previous }
    }

    /// Slots along the shortest path from the root to `target`.
    fn route_to(&self, target: usize) -> Option<Vec<usize>> {
        self.distance[target]?;
        let mut slots = vec![target];
        let mut current = target;
        while let Some(prev) = self.previous[current] {
            slots.push(prev);
            current = prev;
        }
        slots.reverse();
        Some(slots)
    }

    fn resolve<V: Vertex>(&self, graph: &Graph<V>) -> Distances<V> {
        self.distance
            .iter()
            .enumerate()
            .filter_map(|(slot, d)| Some((graph.vertex_at(slot)?.clone(), (*d)?)))
            .collect()
    }
}

/// Ties go to the lowest slot.
fn closest_unsettled(distance: &[Option<u64>], settled: &[bool]) -> Option<(usize, u64)> {
    distance
        .iter()
        .zip(settled)
        .enumerate()
        .filter(|(_, (_, done))| !**done)
        .filter_map(|(slot, (d, _))| d.map(|d| (slot, d)))
        .min_by_key(|&(_, d)| d)
}

/// Shortest distance from `source` to every reachable vertex, `source`
/// included at 0. Unreachable vertices are absent.
pub fn single_source_shortest<V: Vertex>(graph: &Graph<V>, source: &V) -> Result<Distances<V>> {
    let root = graph.require(source)?;
    Ok(ShortestTree::build(graph, root).resolve(graph))
}

/// Shortest distance from `source` to `destination`.
pub fn path_distance<V: Vertex>(graph: &Graph<V>, source: &V, destination: &V) -> Result<u64> {
    let from = graph.require(source)?;
    let to = graph.require(destination)?;
    ShortestTree::build(graph, from).distance[to].ok_or_else(|| Error::no_route(source, destination))
}

/// The shortest route itself, with its weight.
pub fn shortest_path<V: Vertex>(graph: &Graph<V>, source: &V, destination: &V) -> Result<Path<V>> {
    let from = graph.require(source)?;
    let to = graph.require(destination)?;

    let tree = ShortestTree::build(graph, from);
    match (tree.route_to(to), tree.distance[to]) {
        (Some(slots), Some(weight)) => Ok(Path {
            vertices: graph.resolve(&slots),
            weight,
        }),
        _ => Err(Error::no_route(source, destination)),
    }
}

/// Weight of the shortest walk that leaves `vertex` and comes back to it.
///
/// Takes the minimum of `weight(vertex -> n) + distance(n -> vertex)` over
/// every neighbour `n`.
pub fn shortest_cyclic_distance<V: Vertex>(graph: &Graph<V>, vertex: &V) -> Result<u64> {
    let root = graph.require(vertex)?;

    let best = graph
        .successors(root)
        .filter_map(|(next, weight)| {
            ShortestTree::build(graph, next).distance[root].map(|back| u64::from(weight) + back)
        })
        .min();

    debug!(?vertex, ?best, "shortest cycle");
    best.ok_or_else(|| Error::no_route(vertex, vertex))
}

/// Single-source distances from every vertex, computed in parallel.
pub fn all_pairs_shortest<V>(graph: &Graph<V>) -> HashMap<V, Distances<V>>
where
    V: Vertex + Send + Sync,
{
    let sources: Vec<(usize, &V)> = (0..graph.slot_count())
        .filter_map(|slot| graph.vertex_at(slot).map(|v| (slot, v)))
        .collect();

    sources
        .par_iter()
        .map(|&(root, vertex)| {
            (
                vertex.clone(),
                ShortestTree::build(graph, root).resolve(graph),
            )
        })
        .collect()
}
