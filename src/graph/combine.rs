//! Compositions of elementary cycles under a weight bound.
//!
//! The number of compositions grows exponentially with `limit` divided by the
//! lightest cycle weight. `limit` is the only bound on the work done here;
//! graphs with many light cycles produce very large result sets.

use super::Vertex;
use super::cycle::all_cyclic_paths;
use super::path::Paths;
use super::store::Graph;
use crate::Result;
use tracing::{debug, trace};

type Cycle<V> = (Vec<V>, u64);

/// Every walk from `source` back to `source` made of one or more elementary
/// cycles, in any order and with repetition, whose total weight is strictly
/// below `limit`.
///
/// Sequences follow the `all_cyclic_paths(source, false)` convention: each
/// elementary cycle contributes its vertices up to and including `source`.
pub fn limited_cyclic_paths<V: Vertex>(
    graph: &Graph<V>,
    source: &V,
    limit: u64,
) -> Result<Paths<V>> {
    let elementary: Vec<Cycle<V>> = all_cyclic_paths(graph, source, false)?
        .into_iter()
        .filter(|(_, weight)| *weight < limit)
        .collect();

    let mut combined: Paths<V> = elementary.iter().cloned().collect();
    combined.extend(expand(&elementary, &elementary, limit, 1));

    debug!(
        ?source,
        limit,
        elementary = elementary.len(),
        count = combined.len(),
        "combined cycles"
    );
    Ok(combined)
}

/// One round: append each elementary cycle to each walk found last round.
/// Returns this round's walks plus everything later rounds find.
fn expand<V: Vertex>(
    frontier: &[Cycle<V>],
    elementary: &[Cycle<V>],
    limit: u64,
    round: usize,
) -> Paths<V> {
    let next: Vec<Cycle<V>> = frontier
        .iter()
        .flat_map(|(walk, weight)| {
            elementary.iter().filter_map(move |(cycle, cycle_weight)| {
                let total = weight + cycle_weight;
                (total < limit).then(|| ([walk.as_slice(), cycle.as_slice()].concat(), total))
            })
        })
        .collect();

    trace!(round, found = next.len(), "cycle combination round");
    if next.is_empty() {
        return Paths::new();
    }

    let mut found: Paths<V> = next.iter().cloned().collect();
    found.extend(expand(&next, elementary, limit, round + 1));
    found
}
