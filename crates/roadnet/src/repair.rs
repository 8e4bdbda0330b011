//! Connectivity repair.
//!
//! After the random pass the network is usually split into pieces. Two
//! repair policies, selected per deployment:
//!
//! - **Force-activate**: BFS from the first active intersection found in
//!   row-major scan order, then switch every unreached coordinate's own
//!   intersection back on. Fixes node activation only; an intersection
//!   revived this way may still have no active incident road, which is the
//!   accepted behavior of this policy.
//! - **Nearest-edge**: DFS from every node that already has an edge, then
//!   link each unvisited node to its nearest visited node by activating
//!   the connecting road block. Only immediate cardinal neighbors can
//!   actually be linked; a node whose nearest visited node is farther away
//!   is skipped for that pass and retried once other links have grown the
//!   visited set. Whatever remains after a pass links nothing is reported
//!   as unlinked.
//!
//! With no active seed at all, both policies do nothing, and the outcome
//! records that distinctly from a successful repair.

use std::collections::BTreeSet;

use crate::addressing::{segment_between, BlockId, Coord};
use crate::blocks::BlockArena;
use crate::graph::RoadGraph;
use crate::reachability::{bfs_reachable, dfs_reachable};

/// What a repair pass did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepairOutcome {
    /// Nothing was active to grow from; the network was left untouched.
    NoActiveSeed,
    Repaired {
        /// Blocks switched on, in the order the repair activated them.
        activated: Vec<BlockId>,
        /// Coordinates the policy could not connect.
        unlinked: Vec<Coord>,
    },
}

impl RepairOutcome {
    pub fn is_repaired(&self) -> bool {
        matches!(self, RepairOutcome::Repaired { .. })
    }

    pub fn activated(&self) -> &[BlockId] {
        match self {
            RepairOutcome::NoActiveSeed => &[],
            RepairOutcome::Repaired { activated, .. } => activated,
        }
    }
}

/// Force-activate policy.
pub fn force_activate(arena: &mut BlockArena) -> RepairOutcome {
    let bounds = arena.bounds();
    let graph = RoadGraph::from_blocks(arena);

    let seed = bounds.coords_row_major().find(|&c| {
        arena
            .intersection_at(c)
            .is_some_and(|id| arena.is_active(id))
    });
    let Some(seed) = seed else {
        return RepairOutcome::NoActiveSeed;
    };

    let visited = bfs_reachable([seed], |c| graph.neighbors(c));

    let mut activated = Vec::new();
    let mut unlinked = Vec::new();
    for c in bounds.coords_row_major() {
        if visited.contains(&c) {
            continue;
        }
        match arena.intersection_at(c) {
            Some(id) => {
                if !arena.is_active(id) {
                    arena.set_active(id, true);
                    activated.push(id);
                }
            }
            // No intersection declared here: skip, and report the hole.
            None => unlinked.push(c),
        }
    }
    RepairOutcome::Repaired { activated, unlinked }
}

/// Nearest-edge policy.
pub fn nearest_edge(arena: &mut BlockArena) -> RepairOutcome {
    let bounds = arena.bounds();
    let mut graph = RoadGraph::from_blocks(arena);

    let seeds = graph.nodes_with_edges();
    if seeds.is_empty() {
        return RepairOutcome::NoActiveSeed;
    }
    let mut visited = dfs_reachable(seeds, |c| graph.neighbors(c));

    let mut activated = Vec::new();
    loop {
        let mut progressed = false;
        for c in bounds.coords_row_major() {
            if visited.contains(&c) {
                continue;
            }
            let Some(target) = nearest_visited(c, &visited) else {
                continue;
            };
            if !is_unit_neighbor(c, target) {
                // Nearest node exists but no single segment reaches it;
                // leave this node for a later pass.
                continue;
            }
            if let Ok(id) = segment_between(c, target, bounds.cols) {
                if arena.set_active(id, true) {
                    graph.add_edge(c, target);
                    visited.insert(c);
                    activated.push(id);
                    progressed = true;
                }
            }
        }
        if !progressed {
            break;
        }
    }

    let unlinked: Vec<Coord> = bounds
        .coords_row_major()
        .filter(|c| !visited.contains(c))
        .collect();
    RepairOutcome::Repaired { activated, unlinked }
}

/// Minimum-Euclidean-distance visited node; ties resolve to the first in
/// `(x, y)` lexicographic order, which is the set's iteration order.
/// Squared distances preserve the ordering.
fn nearest_visited(c: Coord, visited: &BTreeSet<Coord>) -> Option<Coord> {
    let mut best: Option<(usize, Coord)> = None;
    for &v in visited {
        let d = dist_sq(c, v);
        if best.is_none_or(|(bd, _)| d < bd) {
            best = Some((d, v));
        }
    }
    best.map(|(_, v)| v)
}

fn dist_sq(a: Coord, b: Coord) -> usize {
    let dx = a.x.abs_diff(b.x);
    let dy = a.y.abs_diff(b.y);
    dx * dx + dy * dy
}

fn is_unit_neighbor(a: Coord, b: Coord) -> bool {
    dist_sq(a, b) == 1
}
