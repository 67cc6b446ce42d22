//! Fixed-capacity adjacency-matrix graph store.
//!
//! Vertices live in a slot arena: removing a vertex leaves its slot empty and
//! the next insertion reuses the lowest empty slot. Edge weights live in a
//! `capacity x capacity` matrix indexed by slot, where `NO_EDGE` marks a
//! missing edge.

use super::Vertex;
use super::path::RouteDistance;
use crate::error::{Error, Result};
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

/// Matrix sentinel for "no edge". Never a valid edge weight.
pub const NO_EDGE: u32 = 0;

/// Largest vertex capacity a graph accepts. The matrix holds
/// `capacity * capacity` weights, so this caps it at 64 MiB.
pub const MAX_CAPACITY: usize = 4096;

/// A borrowed view of one directed edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge<'a, V> {
    pub source: &'a V,
    pub destination: &'a V,
    pub weight: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Outgoing,
    Incoming,
}

/// Lazy iterator over the edges leaving or entering one vertex, in slot order.
///
/// Clones carry their own cursor, so cloning before consuming lets the same
/// edges be walked again.
#[derive(Debug, Clone)]
pub struct Edges<'a, V> {
    graph: &'a Graph<V>,
    fixed: usize,
    cursor: usize,
    direction: Direction,
}

impl<'a, V: Vertex> Iterator for Edges<'a, V> {
    type Item = Edge<'a, V>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.cursor < self.graph.slots.len() {
            let other = self.cursor;
            self.cursor += 1;

            let (from, to) = match self.direction {
                Direction::Outgoing => (self.fixed, other),
                Direction::Incoming => (other, self.fixed),
            };
            let weight = self.graph.weight_at(from, to);
            if weight == NO_EDGE {
                continue;
            }
            if let (Some(source), Some(destination)) =
                (self.graph.vertex_at(from), self.graph.vertex_at(to))
            {
                return Some(Edge {
                    source,
                    destination,
                    weight,
                });
            }
        }
        None
    }
}

/// Directed weighted graph over a fixed number of vertex slots.
#[derive(Debug, Clone)]
pub struct Graph<V> {
    capacity: usize,
    slots: Vec<Option<V>>,
    index: HashMap<V, usize>,
    weights: Vec<u32>,
    edge_count: usize,
    first: Option<V>,
}

impl<V: Vertex> Graph<V> {
    /// Create an empty graph that can hold at most `capacity` vertices.
    ///
    /// Fails with `CapacityTooLarge` above `MAX_CAPACITY`, before anything
    /// is allocated.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let cells = capacity
            .checked_mul(capacity)
            .filter(|_| capacity <= MAX_CAPACITY)
            .ok_or(Error::CapacityTooLarge {
                capacity,
                max: MAX_CAPACITY,
            })?;

        Ok(Self {
            capacity,
            slots: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
            weights: vec![NO_EDGE; cells],
            edge_count: 0,
            first: None,
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn vertex_count(&self) -> usize {
        self.index.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// The vertex inserted into the graph while it was empty.
    pub fn first_vertex(&self) -> Option<&V> {
        self.first.as_ref()
    }

    /// Insert a vertex into the lowest empty slot.
    pub fn add_vertex(&mut self, vertex: V) -> Result<()> {
        if self.index.contains_key(&vertex) {
            return Err(Error::duplicate_vertex(&vertex));
        }
        if self.vertex_count() >= self.capacity {
            return Err(Error::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        let slot = match self.slots.iter().position(Option::is_none) {
            Some(free) => free,
            None => {
                self.slots.push(None);
                self.slots.len() - 1
            }
        };

        if self.is_empty() {
            self.first = Some(vertex.clone());
        }
        self.index.insert(vertex.clone(), slot);
        self.slots[slot] = Some(vertex);
        Ok(())
    }

    /// Insert every vertex of `vertices`, skipping duplicates and overflow.
    ///
    /// Returns the number of vertices actually inserted.
    pub fn add_vertices<I>(&mut self, vertices: I) -> Result<usize>
    where
        I: IntoIterator<Item = V>,
    {
        let mut vertices = vertices.into_iter().peekable();
        if vertices.peek().is_none() {
            return Err(Error::NullInput {
                operation: "add_vertices",
            });
        }

        let mut inserted = 0;
        for vertex in vertices {
            match self.add_vertex(vertex) {
                Ok(()) => inserted += 1,
                Err(e) => debug!("skipping vertex: {e}"),
            }
        }
        Ok(inserted)
    }

    /// Remove a vertex and every edge touching it.
    pub fn remove_vertex(&mut self, vertex: &V) -> Result<()> {
        let slot = self.require(vertex)?;

        let mut removed = 0;
        for other in 0..self.slots.len() {
            for cell in [self.cell(slot, other), self.cell(other, slot)] {
                if self.weights[cell] != NO_EDGE {
                    self.weights[cell] = NO_EDGE;
                    removed += 1;
                }
            }
        }
        self.edge_count -= removed;

        self.index.remove(vertex);
        self.slots[slot] = None;

        if self.first.as_ref() == Some(vertex) {
            self.first = self.slots.iter().flatten().next().cloned();
        }
        debug!(?vertex, removed_edges = removed, "removed vertex");
        Ok(())
    }

    pub fn has_vertex(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }

    /// Add an edge. Existing edges are never overwritten.
    pub fn add_edge(&mut self, source: &V, destination: &V, weight: u32) -> Result<()> {
        if weight == NO_EDGE {
            return Err(Error::invalid_weight(source, destination, weight));
        }
        let from = self.require(source)?;
        let to = self.require(destination)?;

        let cell = self.cell(from, to);
        if self.weights[cell] != NO_EDGE {
            return Err(Error::duplicate_edge(source, destination));
        }
        self.weights[cell] = weight;
        self.edge_count += 1;
        Ok(())
    }

    pub fn remove_edge(&mut self, source: &V, destination: &V) -> Result<()> {
        let from = self.require(source)?;
        let to = self.require(destination)?;

        let cell = self.cell(from, to);
        if self.weights[cell] == NO_EDGE {
            return Err(Error::edge_not_found(source, destination));
        }
        self.weights[cell] = NO_EDGE;
        self.edge_count -= 1;
        Ok(())
    }

    pub fn has_edge(&self, source: &V, destination: &V) -> bool {
        match (self.slot_of(source), self.slot_of(destination)) {
            (Some(from), Some(to)) => self.weight_at(from, to) != NO_EDGE,
            _ => false,
        }
    }

    pub fn edge_weight(&self, source: &V, destination: &V) -> Result<u32> {
        let (Some(from), Some(to)) = (self.slot_of(source), self.slot_of(destination)) else {
            return Err(Error::edge_not_found(source, destination));
        };
        match self.weight_at(from, to) {
            NO_EDGE => Err(Error::edge_not_found(source, destination)),
            weight => Ok(weight),
        }
    }

    pub fn outgoing_edges(&self, vertex: &V) -> Result<Edges<'_, V>> {
        Ok(Edges {
            graph: self,
            fixed: self.require(vertex)?,
            cursor: 0,
            direction: Direction::Outgoing,
        })
    }

    pub fn incoming_edges(&self, vertex: &V) -> Result<Edges<'_, V>> {
        Ok(Edges {
            graph: self,
            fixed: self.require(vertex)?,
            cursor: 0,
            direction: Direction::Incoming,
        })
    }

    /// Directly reachable vertices, in slot order.
    pub fn neighbours(&self, vertex: &V) -> Result<Vec<&V>> {
        Ok(self
            .outgoing_edges(vertex)?
            .map(|edge| edge.destination)
            .collect())
    }

    /// Neighbour to edge weight, or `None` when `vertex` is not in the graph.
    pub fn neighbours_map(&self, vertex: &V) -> Option<HashMap<V, u32>> {
        let edges = self.outgoing_edges(vertex).ok()?;
        Some(
            edges
                .map(|edge| (edge.destination.clone(), edge.weight))
                .collect(),
        )
    }

    /// Vertices in slot order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.slots.iter().flatten()
    }

    /// Every edge, ordered by source slot then destination slot.
    pub fn edges(&self) -> impl Iterator<Item = Edge<'_, V>> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_some())
            .flat_map(move |(fixed, _)| Edges {
                graph: self,
                fixed,
                cursor: 0,
                direction: Direction::Outgoing,
            })
    }

    /// Total weight along `stops`, or `NoSuchRoute` at the first missing hop.
    ///
    /// All stops are checked for presence before any hop is looked at.
    pub fn sum_consecutive_weights(&self, stops: &[V]) -> Result<RouteDistance> {
        if stops.len() < 2 {
            return Err(Error::RouteTooShort { stops: stops.len() });
        }
        let slots = stops
            .iter()
            .map(|stop| self.require(stop))
            .collect::<Result<Vec<_>>>()?;

        let mut total = 0u64;
        for pair in slots.windows(2) {
            match self.weight_at(pair[0], pair[1]) {
                NO_EDGE => return Ok(RouteDistance::NoSuchRoute),
                weight => total += u64::from(weight),
            }
        }
        Ok(RouteDistance::Distance(total))
    }

    /// Reset to an empty graph, keeping the capacity.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.index.clear();
        self.weights.fill(NO_EDGE);
        self.edge_count = 0;
        self.first = None;
    }

    // Slot-level access for the algorithms in sibling modules.

    pub(crate) fn slot_of(&self, vertex: &V) -> Option<usize> {
        self.index.get(vertex).copied()
    }

    pub(crate) fn require(&self, vertex: &V) -> Result<usize> {
        self.slot_of(vertex)
            .ok_or_else(|| Error::vertex_not_found(vertex))
    }

    pub(crate) fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn vertex_at(&self, slot: usize) -> Option<&V> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    pub(crate) fn weight_at(&self, from: usize, to: usize) -> u32 {
        self.weights[self.cell(from, to)]
    }

    /// Outgoing `(slot, weight)` pairs of a slot, in slot order.
    pub(crate) fn successors(&self, from: usize) -> impl Iterator<Item = (usize, u32)> + '_ {
        (0..self.slots.len())
            .map(move |to| (to, self.weight_at(from, to)))
            .filter(|&(_, weight)| weight != NO_EDGE)
    }

    /// Clone the vertices at the given slots.
    pub(crate) fn resolve(&self, slots: &[usize]) -> Vec<V> {
        slots
            .iter()
            .filter_map(|&slot| self.vertex_at(slot).cloned())
            .collect()
    }

    fn cell(&self, from: usize, to: usize) -> usize {
        from * self.capacity + to
    }
}
