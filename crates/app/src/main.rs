//! Headless generator binary: runs one generation pass and prints the
//! resulting lattice to stdout.
//!
//! Environment knobs:
//! - `GRIDTOWN_SEED=<u64>` reseeds the generator (default 42).
//! - `GRIDTOWN_STRATEGY=prune|force|nearest` picks the repair policy.

use bevy::app::ScheduleRunnerPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;

use roadnet::ascii_map::render_network;
use roadnet::blocks::BlockArena;
use roadnet::config::{NetworkConfig, RepairStrategy};
use roadnet::gen_rng::GenRng;
use roadnet::{GenerationReport, RoadNetPlugin};

fn main() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins.set(ScheduleRunnerPlugin::run_once()));
    app.add_plugins(LogPlugin::default());
    app.add_plugins(RoadNetPlugin);

    if let Ok(seed) = std::env::var("GRIDTOWN_SEED") {
        match seed.parse::<u64>() {
            Ok(seed) => {
                app.insert_resource(GenRng::from_seed_u64(seed));
            }
            Err(_) => warn!("GRIDTOWN_SEED '{seed}' is not a u64; using the default seed"),
        }
    }

    if let Ok(strategy) = std::env::var("GRIDTOWN_STRATEGY") {
        let mut cfg = NetworkConfig::default();
        match strategy.as_str() {
            "prune" => cfg.strategy = RepairStrategy::PruneIsolated,
            "force" => cfg.strategy = RepairStrategy::ForceActivate,
            "nearest" => cfg.strategy = RepairStrategy::NearestEdge,
            other => warn!("unknown strategy '{other}'; using {:?}", cfg.strategy),
        }
        app.insert_resource(cfg);
    }

    app.add_systems(PostStartup, print_network);
    app.run();
}

fn print_network(arena: Res<BlockArena>, report: Res<GenerationReport>) {
    println!("{}", render_network(&arena));
    if report.no_active_seed {
        info!("nothing was active after the random pass; no repair ran");
    }
    info!(
        "{} blocks active after the random pass; {} pruned, {} restored, {} repaired",
        report.randomized_active,
        report.deactivated.len(),
        report.restored.len(),
        report.activated.len(),
    );
}
