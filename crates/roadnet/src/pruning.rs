//! Isolated-block pruning.
//!
//! Road blocks that survived the random pass but connect a boundary exit
//! to nothing useful get switched off. Three phases over the current
//! activation state:
//!
//! 1. BFS from every boundary-connected block over occupancy adjacency
//!    (active blocks on cardinally adjacent coordinates touch, whatever
//!    their kind).
//! 2. BFS again from the intersections inside that set, restricted to it.
//!    The result is the live set.
//! 3. Deactivate active road blocks outside the live set, then restore the
//!    ones that were boundary-reachable and have no intersection on an
//!    adjacent coordinate: those are genuine dead-end stubs, not roads
//!    that failed to reach an intersection.
//!
//! Intersections are never deactivated here; the pass is a pure function
//! of activation state and is idempotent.

use std::collections::BTreeSet;

use crate::addressing::{BlockId, BlockKind, Coord};
use crate::blocks::BlockArena;
use crate::config::{BoundaryRule, NetworkConfig};
use crate::reachability::bfs_reachable;

/// What one pruning pass did, for logging and tests.
#[derive(Debug, Clone, Default)]
pub struct PruneReport {
    /// Coordinates reachable from a boundary exit (phase 1).
    pub boundary_reachable: BTreeSet<Coord>,
    /// Coordinates on a boundary-to-intersection path (phase 2).
    pub live: BTreeSet<Coord>,
    /// Road blocks switched off, in `(kind, index)` order.
    pub deactivated: Vec<BlockId>,
    /// Dead-end stubs switched back on.
    pub restored: Vec<BlockId>,
}

/// True if an active block at `coord` counts as boundary-connected under
/// the configured rule.
fn is_boundary_connected(coord: Coord, cfg: &NetworkConfig) -> bool {
    match cfg.boundary_rule {
        BoundaryRule::Positional => cfg.boundary_anchors.contains(&coord),
        // Parity mode: one anchor anywhere makes every block count.
        BoundaryRule::GlobalAnchor => !cfg.boundary_anchors.is_empty(),
    }
}

/// Runs the three pruning phases against current activation state.
pub fn prune_isolated(arena: &mut BlockArena, cfg: &NetworkConfig) -> PruneReport {
    let bounds = arena.bounds();
    let occupied = arena.active_coords();
    let intersections = arena.active_intersection_coords();

    let occupancy_neighbors = |c: Coord| {
        let (neighbors, count) = bounds.neighbors4(c);
        neighbors[..count]
            .iter()
            .copied()
            .filter(|n| occupied.contains(n))
            .collect::<Vec<_>>()
    };

    // Phase 1: everything connected to a boundary exit.
    let seeds: Vec<Coord> = occupied
        .iter()
        .copied()
        .filter(|&c| is_boundary_connected(c, cfg))
        .collect();
    let boundary_reachable = bfs_reachable(seeds, occupancy_neighbors);

    // Phase 2: the subset that also reaches an intersection, walking only
    // inside the boundary-reachable set.
    let live = bfs_reachable(
        intersections
            .iter()
            .copied()
            .filter(|c| boundary_reachable.contains(c)),
        |c| {
            let (neighbors, count) = bounds.neighbors4(c);
            neighbors[..count]
                .iter()
                .copied()
                .filter(|n| boundary_reachable.contains(n))
                .collect()
        },
    );

    // Phase 3: switch off road blocks outside the live set.
    let mut deactivated = Vec::new();
    for kind in [BlockKind::HorizontalRoad, BlockKind::VerticalRoad] {
        let doomed: Vec<(BlockId, Coord)> = arena
            .blocks_of(kind)
            .filter(|b| b.active && !live.contains(&b.coord))
            .map(|b| (b.id, b.coord))
            .collect();
        for (id, _) in &doomed {
            arena.set_active(*id, false);
        }
        deactivated.extend(doomed);
    }

    // Dead-end restoration: boundary-reachable casualties with no
    // intersection next door get switched back on.
    let mut restored = Vec::new();
    for &(id, coord) in &deactivated {
        if !boundary_reachable.contains(&coord) {
            continue;
        }
        let (neighbors, count) = bounds.neighbors4(coord);
        let near_intersection = neighbors[..count]
            .iter()
            .any(|n| intersections.contains(n));
        if !near_intersection {
            arena.set_active(id, true);
            restored.push(id);
        }
    }

    PruneReport {
        boundary_reachable,
        live,
        deactivated: deactivated.into_iter().map(|(id, _)| id).collect(),
        restored,
    }
}
