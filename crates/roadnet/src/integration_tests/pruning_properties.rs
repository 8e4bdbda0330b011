//! Pruning safety and idempotence over randomized layouts.
//!
//! These run the pruner against many seeded random layouts and check the
//! structural guarantee directly, recomputing reachability from scratch
//! on the final state rather than trusting the pruner's own report.

use std::collections::BTreeSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::addressing::{BlockKind, Coord};
use crate::blocks::BlockArena;
use crate::config::{BoundaryRule, NetworkConfig};
use crate::pruning::prune_isolated;
use crate::randomize::randomize_blocks;
use crate::reachability::bfs_reachable;

fn randomized_arena(cfg: &NetworkConfig, seed: u64) -> BlockArena {
    let mut arena = BlockArena::from_config(cfg);
    randomize_blocks(&mut arena, &mut ChaCha8Rng::seed_from_u64(seed));
    arena
}

fn snapshot(arena: &BlockArena) -> Vec<bool> {
    BlockKind::all()
        .iter()
        .flat_map(|&k| arena.blocks_of(k).map(|b| b.active).collect::<Vec<_>>())
        .collect()
}

/// Independent recomputation of the boundary-reachable and live coordinate
/// sets from an arena's current activation state.
fn reachable_sets(
    arena: &BlockArena,
    cfg: &NetworkConfig,
) -> (BTreeSet<Coord>, BTreeSet<Coord>) {
    let bounds = arena.bounds();
    let occupied = arena.active_coords();
    let seeds: Vec<Coord> = occupied
        .iter()
        .copied()
        .filter(|c| match cfg.boundary_rule {
            BoundaryRule::Positional => cfg.boundary_anchors.contains(c),
            BoundaryRule::GlobalAnchor => !cfg.boundary_anchors.is_empty(),
        })
        .collect();
    let boundary = bfs_reachable(seeds, |c| {
        let (neighbors, count) = bounds.neighbors4(c);
        neighbors[..count]
            .iter()
            .copied()
            .filter(|n| occupied.contains(n))
            .collect()
    });
    let live = bfs_reachable(
        arena
            .active_intersection_coords()
            .into_iter()
            .filter(|c| boundary.contains(c)),
        |c| {
            let (neighbors, count) = bounds.neighbors4(c);
            neighbors[..count]
                .iter()
                .copied()
                .filter(|n| boundary.contains(n))
                .collect()
        },
    );
    (boundary, live)
}

#[test]
fn test_every_surviving_road_is_anchored_or_a_stub() {
    let cfg = NetworkConfig::default();
    for seed in 0..24 {
        let mut arena = randomized_arena(&cfg, seed);
        prune_isolated(&mut arena, &cfg);

        let (boundary, live) = reachable_sets(&arena, &cfg);
        let intersections = arena.active_intersection_coords();
        let bounds = arena.bounds();
        for kind in [BlockKind::HorizontalRoad, BlockKind::VerticalRoad] {
            for block in arena.blocks_of(kind).filter(|b| b.active) {
                let on_chain = live.contains(&block.coord);
                let (neighbors, count) = bounds.neighbors4(block.coord);
                let is_stub = boundary.contains(&block.coord)
                    && !neighbors[..count]
                        .iter()
                        .any(|n| intersections.contains(n));
                assert!(
                    on_chain || is_stub,
                    "seed {seed}: {} survived without an anchor chain",
                    block.id
                );
            }
        }
    }
}

#[test]
fn test_pruning_twice_equals_pruning_once() {
    for rule in [BoundaryRule::Positional, BoundaryRule::GlobalAnchor] {
        let mut cfg = NetworkConfig::default();
        cfg.boundary_rule = rule;
        for seed in 0..24 {
            let mut arena = randomized_arena(&cfg, seed);
            prune_isolated(&mut arena, &cfg);
            let once = snapshot(&arena);
            prune_isolated(&mut arena, &cfg);
            assert_eq!(once, snapshot(&arena), "seed {seed} under {rule:?}");
        }
    }
}

#[test]
fn test_pruning_never_touches_intersections() {
    let cfg = NetworkConfig::default();
    for seed in 0..24 {
        let mut arena = randomized_arena(&cfg, seed);
        let before: Vec<bool> = arena
            .blocks_of(BlockKind::Intersection)
            .map(|b| b.active)
            .collect();
        prune_isolated(&mut arena, &cfg);
        let after: Vec<bool> = arena
            .blocks_of(BlockKind::Intersection)
            .map(|b| b.active)
            .collect();
        assert_eq!(before, after, "seed {seed}");
    }
}
