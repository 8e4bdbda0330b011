//! Road adjacency graph over grid coordinates.
//!
//! An edge `(u, v)` exists iff the road block connecting `u` and `v` is
//! active. The graph is rebuilt fresh from activation state each time an
//! analysis needs it; the one exception is the nearest-edge repairer,
//! which inserts edges it discovers directly and mirrors each insert with
//! the matching block activation.
//!
//! Ordered maps throughout: traversal order feeds tie-breaking during
//! repair, so iteration has to be reproducible under a fixed seed.

use std::collections::{BTreeMap, BTreeSet};

use crate::addressing::{segment_between, Coord};
use crate::blocks::BlockArena;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoadGraph {
    edges: BTreeMap<Coord, BTreeSet<Coord>>,
}

impl RoadGraph {
    /// Derives the graph from current activation state: for every grid
    /// coordinate and each of its in-bounds cardinal neighbors, the edge is
    /// present iff the connecting road block is active.
    pub fn from_blocks(arena: &BlockArena) -> Self {
        let bounds = arena.bounds();
        let mut graph = Self::default();
        for c in bounds.coords_row_major() {
            let (neighbors, count) = bounds.neighbors4(c);
            for &n in &neighbors[..count] {
                if let Ok(id) = segment_between(c, n, bounds.cols) {
                    if arena.is_active(id) {
                        graph.add_edge(c, n);
                    }
                }
            }
        }
        graph
    }

    /// Inserts an undirected edge.
    pub fn add_edge(&mut self, a: Coord, b: Coord) {
        self.edges.entry(a).or_default().insert(b);
        self.edges.entry(b).or_default().insert(a);
    }

    pub fn contains_edge(&self, a: Coord, b: Coord) -> bool {
        self.edges.get(&a).is_some_and(|s| s.contains(&b))
    }

    /// Neighbors of `c` in `(x, y)` lexicographic order.
    pub fn neighbors(&self, c: Coord) -> Vec<Coord> {
        self.edges
            .get(&c)
            .map(|s| s.iter().copied().collect())
            .unwrap_or_default()
    }

    pub fn degree(&self, c: Coord) -> usize {
        self.edges.get(&c).map_or(0, |s| s.len())
    }

    /// Nodes with at least one incident edge, in lexicographic order.
    pub fn nodes_with_edges(&self) -> Vec<Coord> {
        self.edges
            .iter()
            .filter(|(_, s)| !s.is_empty())
            .map(|(&c, _)| c)
            .collect()
    }

    /// Undirected edge count.
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(|s| s.len()).sum::<usize>() / 2
    }
}
