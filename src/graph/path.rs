//! Path results returned by the enumeration and weight queries.

use serde::Serialize;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::hash::Hash;

/// Text reported when a requested stop sequence is not fully connected.
pub const NO_SUCH_ROUTE: &str = "NO SUCH ROUTE";

/// A single path: its vertex sequence and total weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Path<V> {
    pub vertices: Vec<V>,
    pub weight: u64,
}

impl<V> Path<V> {
    /// Number of hops along the path.
    pub fn stops(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }
}

/// Distinct vertex sequences mapped to their total weight.
///
/// Every enumeration query returns one of these. Insertion keeps the first
/// weight seen for a sequence, since equal sequences over the same graph
/// always carry equal weights.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths<V: Eq + Hash> {
    inner: HashMap<Vec<V>, u64>,
}

impl<V: Eq + Hash> Default for Paths<V> {
    fn default() -> Self {
        Self {
            inner: HashMap::new(),
        }
    }
}

impl<V: Clone + Eq + Hash> Paths<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a sequence, returning false if it was already present.
    pub fn insert(&mut self, vertices: Vec<V>, weight: u64) -> bool {
        match self.inner.entry(vertices) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(weight);
                true
            }
        }
    }

    /// Merge another result set into this one.
    pub fn extend(&mut self, other: Paths<V>) {
        for (vertices, weight) in other.inner {
            self.insert(vertices, weight);
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn contains(&self, vertices: &[V]) -> bool {
        self.inner.contains_key(vertices)
    }

    pub fn weight_of(&self, vertices: &[V]) -> Option<u64> {
        self.inner.get(vertices).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[V], u64)> + '_ {
        self.inner.iter().map(|(v, w)| (v.as_slice(), *w))
    }

    /// Keep only sequences satisfying the predicate on their length.
    pub fn filter_len(&self, keep: impl Fn(usize) -> bool) -> Paths<V> {
        Paths {
            inner: self
                .inner
                .iter()
                .filter(|(v, _)| keep(v.len()))
                .map(|(v, w)| (v.clone(), *w))
                .collect(),
        }
    }

    /// Sequences ordered by weight, then by sequence, for stable output.
    pub fn to_sorted_vec(&self) -> Vec<Path<V>>
    where
        V: Ord,
    {
        let mut paths: Vec<Path<V>> = self
            .inner
            .iter()
            .map(|(v, w)| Path {
                vertices: v.clone(),
                weight: *w,
            })
            .collect();
        paths.sort_by(|a, b| a.weight.cmp(&b.weight).then_with(|| a.vertices.cmp(&b.vertices)));
        paths
    }
}

impl<V: Eq + Hash> IntoIterator for Paths<V> {
    type Item = (Vec<V>, u64);
    type IntoIter = std::collections::hash_map::IntoIter<Vec<V>, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<V: Clone + Eq + Hash> FromIterator<(Vec<V>, u64)> for Paths<V> {
    fn from_iter<I: IntoIterator<Item = (Vec<V>, u64)>>(iter: I) -> Self {
        let mut paths = Paths::new();
        for (vertices, weight) in iter {
            paths.insert(vertices, weight);
        }
        paths
    }
}

/// Outcome of summing weights along a fixed stop sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDistance {
    Distance(u64),
    NoSuchRoute,
}

impl RouteDistance {
    pub fn distance(&self) -> Option<u64> {
        match self {
            RouteDistance::Distance(d) => Some(*d),
            RouteDistance::NoSuchRoute => None,
        }
    }
}

impl fmt::Display for RouteDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteDistance::Distance(d) => write!(f, "{d}"),
            RouteDistance::NoSuchRoute => f.write_str(NO_SUCH_ROUTE),
        }
    }
}

impl Serialize for RouteDistance {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RouteDistance::Distance(d) => serializer.serialize_u64(*d),
            RouteDistance::NoSuchRoute => serializer.serialize_str(NO_SUCH_ROUTE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_first() {
        let mut paths = Paths::new();
        assert!(paths.insert(vec!['A', 'B'], 5));
        assert!(!paths.insert(vec!['A', 'B'], 7));
        assert_eq!(paths.weight_of(&['A', 'B']), Some(5));
        assert_eq!(paths.len(), 1);
    }

    #[test]
    fn test_filter_len() {
        let paths: Paths<char> = vec![
            (vec!['A', 'B'], 5),
            (vec!['A', 'B', 'C'], 9),
            (vec!['A', 'D', 'C'], 13),
        ]
        .into_iter()
        .collect();

        assert_eq!(paths.filter_len(|n| n == 3).len(), 2);
        assert_eq!(paths.filter_len(|n| n < 3).len(), 1);
    }

    #[test]
    fn test_sorted_vec_orders_by_weight() {
        let paths: Paths<char> = vec![(vec!['A', 'D', 'C'], 13), (vec!['A', 'B', 'C'], 9)]
            .into_iter()
            .collect();

        let sorted = paths.to_sorted_vec();
        assert_eq!(sorted[0].vertices, vec!['A', 'B', 'C']);
        assert_eq!(sorted[0].stops(), 2);
        assert_eq!(sorted[1].weight, 13);
    }

    #[test]
    fn test_route_distance_value() {
        assert_eq!(RouteDistance::Distance(9).distance(), Some(9));
        assert_eq!(RouteDistance::NoSuchRoute.distance(), None);
    }

    #[test]
    fn test_route_distance_display() {
        assert_eq!(RouteDistance::Distance(22).to_string(), "22");
        assert_eq!(RouteDistance::NoSuchRoute.to_string(), "NO SUCH ROUTE");
        assert_eq!(
            serde_json::to_string(&RouteDistance::NoSuchRoute).unwrap(),
            "\"NO SUCH ROUTE\""
        );
    }
}
