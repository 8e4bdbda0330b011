//! End-to-end scenarios for the repair strategies.

use crate::addressing::{coord_index, BlockId, BlockKind, Coord};
use crate::config::{NetworkConfig, RepairStrategy};
use crate::reachability::bfs_reachable;
use crate::test_harness::TestNetwork;

fn all_off(arena: &mut crate::blocks::BlockArena, kinds: &[BlockKind]) {
    for &kind in kinds {
        let ids: Vec<BlockId> = arena.blocks_of(kind).map(|b| b.id).collect();
        for id in ids {
            arena.set_active(id, false);
        }
    }
}

/// 4x4 level, all 9 intersections on, every road block off: the pruner
/// has nothing to cut and nothing to restore.
#[test]
fn test_intersections_only_level_is_left_alone() {
    let net = TestNetwork::authored(NetworkConfig::default(), |arena| {
        all_off(
            arena,
            &[BlockKind::HorizontalRoad, BlockKind::VerticalRoad],
        );
    });
    assert_eq!(net.arena().active_count(BlockKind::Intersection), 9);
    assert_eq!(net.arena().active_count(BlockKind::HorizontalRoad), 0);
    assert_eq!(net.arena().active_count(BlockKind::VerticalRoad), 0);
    assert!(net.report().deactivated.is_empty());
    assert!(net.report().restored.is_empty());
}

/// 5x5 level with a single active road (0,0)-(0,1): nearest-edge repair
/// walks outward, linking each remaining node to its nearest visited
/// neighbor until all 25 coordinates are mutually reachable.
#[test]
fn test_single_edge_grows_to_cover_the_grid() {
    let mut cfg = NetworkConfig::dense(5, 5);
    cfg.strategy = RepairStrategy::NearestEdge;
    let net = TestNetwork::authored(cfg, |arena| {
        all_off(arena, BlockKind::all());
        let start = BlockId::new(
            BlockKind::VerticalRoad,
            coord_index(Coord::new(0, 0), 5),
        );
        arena.set_active(start, true);
    });

    assert!(net.report().unlinked.is_empty());
    // 25 nodes, 2 seeded by the starting edge, one new link per node.
    assert_eq!(net.report().activated.len(), 23);

    let graph = net.graph();
    let reached = bfs_reachable([Coord::new(0, 0)], |c| graph.neighbors(c));
    assert_eq!(reached.len(), 25);
}

#[test]
fn test_force_activate_revives_every_intersection() {
    let mut cfg = NetworkConfig::dense(3, 3);
    cfg.strategy = RepairStrategy::ForceActivate;
    let net = TestNetwork::authored(cfg, |arena| {
        all_off(arena, BlockKind::all());
        let seed = arena.intersection_at(Coord::new(0, 0)).unwrap();
        arena.set_active(seed, true);
    });
    assert_eq!(net.arena().active_count(BlockKind::Intersection), 9);
    assert_eq!(net.report().activated.len(), 8);
    // This policy never touches roads: the revived nodes stay roadless.
    assert_eq!(net.arena().active_count(BlockKind::HorizontalRoad), 0);
    assert_eq!(net.arena().active_count(BlockKind::VerticalRoad), 0);
}

#[test]
fn test_empty_level_reports_no_active_seed() {
    let mut cfg = NetworkConfig::dense(3, 3);
    cfg.strategy = RepairStrategy::NearestEdge;
    let net = TestNetwork::authored(cfg, |arena| {
        all_off(arena, BlockKind::all());
    });
    assert!(net.report().no_active_seed);
    assert!(net.report().activated.is_empty());
    assert_eq!(net.arena().active_count(BlockKind::HorizontalRoad), 0);
    assert_eq!(net.arena().active_count(BlockKind::Intersection), 0);
}

/// Every randomized layout on a fully declared grid ends with every node
/// linked into the network grown from the starting roads: whenever an
/// unvisited node exists, some unvisited node sits next to the visited
/// set, and a distance-1 nearest target is always linkable. Road
/// components that existed before the repair are grown, never merged, so
/// reachability is measured from the union of starting roads.
#[test]
fn test_nearest_edge_links_every_node_to_a_starting_road() {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::blocks::BlockArena;
    use crate::graph::RoadGraph;
    use crate::randomize::randomize_blocks;
    use crate::repair::{nearest_edge, RepairOutcome};

    for seed in 0..16 {
        let cfg = NetworkConfig::dense(4, 4);
        let mut arena = BlockArena::from_config(&cfg);
        randomize_blocks(&mut arena, &mut ChaCha8Rng::seed_from_u64(seed));
        let seeds = RoadGraph::from_blocks(&arena).nodes_with_edges();

        match nearest_edge(&mut arena) {
            RepairOutcome::NoActiveSeed => assert!(seeds.is_empty(), "seed {seed}"),
            RepairOutcome::Repaired { unlinked, .. } => {
                assert!(unlinked.is_empty(), "seed {seed}");
                let graph = RoadGraph::from_blocks(&arena);
                let reached = bfs_reachable(seeds, |c| graph.neighbors(c));
                assert_eq!(reached.len(), 16, "seed {seed}");
            }
        }
    }
}
