//! Random activation pass.
//!
//! One uniform draw per declared block: `active = draw > 0.5`. Draw order
//! is fixed (intersections by index, then vertical/horizontal pairs by
//! index) so a given seed always produces the same raw layout for the
//! repair pass to work on.

use rand::Rng;

use crate::addressing::{BlockId, BlockKind};
use crate::blocks::BlockArena;

/// Coin-flips every declared block. Returns the number of blocks left
/// active.
pub fn randomize_blocks<R: Rng>(arena: &mut BlockArena, rng: &mut R) -> usize {
    for index in 1..=arena.declared_count(BlockKind::Intersection) {
        toggle(arena, BlockId::new(BlockKind::Intersection, index), rng);
    }
    let segments = arena
        .declared_count(BlockKind::VerticalRoad)
        .max(arena.declared_count(BlockKind::HorizontalRoad));
    for index in 1..=segments {
        toggle(arena, BlockId::new(BlockKind::VerticalRoad, index), rng);
        toggle(arena, BlockId::new(BlockKind::HorizontalRoad, index), rng);
    }
    BlockKind::all()
        .iter()
        .map(|&k| arena.active_count(k))
        .sum()
}

fn toggle<R: Rng>(arena: &mut BlockArena, id: BlockId, rng: &mut R) {
    // Draw only for blocks that exist, so absent identities consume no
    // randomness (a missing block is "skip", not an error).
    if arena.find(id).is_some() {
        arena.set_active(id, rng.gen::<f32>() > 0.5);
    }
}
