//! Procedural road-grid network generation.
//!
//! Generates a tile-grid road network for a level: intersections plus
//! horizontal/vertical road blocks on a regular grid. A random pass
//! toggles which blocks are present, then a repair strategy makes the
//! result topologically valid: no road connected to nothing useful
//! (pruning), or no node left out of the network (repair). A final
//! proximity sweep wakes intersections sitting next to active roads.
//!
//! The whole pass runs synchronously once at `Startup`; there is nothing
//! to schedule afterwards.

use bevy::prelude::*;

pub mod addressing;
pub mod ascii_map;
pub mod blocks;
pub mod config;
pub mod gen_rng;
pub mod graph;
pub mod propagation;
pub mod pruning;
pub mod randomize;
pub mod reachability;
pub mod repair;


use addressing::{BlockId, BlockKind, Coord};
use blocks::BlockArena;
use config::{NetworkConfig, RepairStrategy};
use gen_rng::GenRng;
use rand_chacha::ChaCha8Rng;

// ---------------------------------------------------------------------------
// Generation report
// ---------------------------------------------------------------------------

/// Summary of one generation pass, inserted as a resource when the
/// pipeline finishes.
#[derive(Resource, Debug, Clone, Default)]
pub struct GenerationReport {
    pub strategy: RepairStrategy,
    /// Blocks left active by the random pass (all declared blocks when the
    /// random pass was skipped).
    pub randomized_active: usize,
    /// Road blocks the pruner switched off.
    pub deactivated: Vec<BlockId>,
    /// Dead-end stubs the pruner switched back on.
    pub restored: Vec<BlockId>,
    /// Blocks a repair policy switched on.
    pub activated: Vec<BlockId>,
    /// Coordinates repair could not connect.
    pub unlinked: Vec<Coord>,
    /// True when a repair policy found nothing active to grow from.
    pub no_active_seed: bool,
    /// Intersections woken by the proximity sweep.
    pub proximity_activated: usize,
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// Runs the full generation pipeline against an arena: random toggle
/// (skipped when `rng` is `None`), the configured repair strategy, then
/// the proximity sweep.
pub fn generate(
    arena: &mut BlockArena,
    cfg: &NetworkConfig,
    rng: Option<&mut ChaCha8Rng>,
) -> GenerationReport {
    let mut report = GenerationReport {
        strategy: cfg.strategy,
        ..GenerationReport::default()
    };

    report.randomized_active = match rng {
        Some(rng) => randomize::randomize_blocks(arena, rng),
        None => BlockKind::all()
            .iter()
            .map(|&k| arena.active_count(k))
            .sum(),
    };

    match cfg.strategy {
        RepairStrategy::PruneIsolated => {
            let pruned = pruning::prune_isolated(arena, cfg);
            report.deactivated = pruned.deactivated;
            report.restored = pruned.restored;
        }
        RepairStrategy::ForceActivate => {
            apply_repair(&mut report, repair::force_activate(arena));
        }
        RepairStrategy::NearestEdge => {
            apply_repair(&mut report, repair::nearest_edge(arena));
        }
    }

    report.proximity_activated = propagation::propagate_adjacent(arena, cfg.proximity_threshold);
    report
}

fn apply_repair(report: &mut GenerationReport, outcome: repair::RepairOutcome) {
    match outcome {
        repair::RepairOutcome::NoActiveSeed => report.no_active_seed = true,
        repair::RepairOutcome::Repaired { activated, unlinked } => {
            report.activated = activated;
            report.unlinked = unlinked;
        }
    }
}

// ---------------------------------------------------------------------------
// Systems
// ---------------------------------------------------------------------------

/// Marker resource: when present, `run_generation` leaves whatever
/// activation state the arena already holds and only repairs it. Used by
/// tests and by levels with hand-authored layouts.
#[derive(Resource)]
pub struct SkipRandomize;

fn setup_network(
    mut commands: Commands,
    mut cfg: ResMut<NetworkConfig>,
    existing: Option<Res<BlockArena>>,
) {
    if let Err(e) = cfg.validate() {
        warn!("network config rejected ({e}); falling back to defaults");
        *cfg = NetworkConfig::default();
    }
    // An arena inserted before startup (hand-authored layout) is kept as-is.
    if existing.is_none() {
        commands.insert_resource(BlockArena::from_config(&cfg));
    }
}

fn run_generation(
    mut arena: ResMut<BlockArena>,
    cfg: Res<NetworkConfig>,
    mut rng: ResMut<GenRng>,
    skip: Option<Res<SkipRandomize>>,
    mut commands: Commands,
) {
    let rng = if skip.is_some() {
        None
    } else {
        Some(&mut rng.0)
    };
    let report = generate(&mut arena, &cfg, rng);

    info!(
        "road network generated: strategy {:?}, {} active after random pass, \
         {} pruned ({} restored), {} repaired, {} unlinked, {} woken by proximity",
        report.strategy,
        report.randomized_active,
        report.deactivated.len(),
        report.restored.len(),
        report.activated.len(),
        report.unlinked.len(),
        report.proximity_activated,
    );
    if report.no_active_seed {
        info!("repair found no active seed; network left as randomized");
    }
    debug!("network layout:\n{}", ascii_map::render_network(&arena));

    commands.insert_resource(report);
}

// ---------------------------------------------------------------------------
// Plugin
// ---------------------------------------------------------------------------

pub struct RoadNetPlugin;

impl Plugin for RoadNetPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<NetworkConfig>();
        app.init_resource::<GenRng>();
        app.add_systems(Startup, (setup_network, run_generation).chain());
    }
}
