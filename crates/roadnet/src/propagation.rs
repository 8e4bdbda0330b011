//! Proximity activation sweep.
//!
//! Final pass: every intersection whose world position sits within the
//! configured offset of an active road block gets switched on, comparing
//! x offsets against horizontal roads and y offsets against vertical
//! roads. Brute-force over roads x intersections, which is fine at grid
//! scale.

use bevy::math::Vec2;

use crate::addressing::{BlockId, BlockKind};
use crate::blocks::BlockArena;

/// Activates intersections near active roads. Returns how many flipped on.
pub fn propagate_adjacent(arena: &mut BlockArena, threshold: f32) -> usize {
    let horizontal: Vec<Vec2> = active_positions(arena, BlockKind::HorizontalRoad);
    let vertical: Vec<Vec2> = active_positions(arena, BlockKind::VerticalRoad);

    let dormant: Vec<(BlockId, Vec2)> = arena
        .blocks_of(BlockKind::Intersection)
        .filter(|b| !b.active)
        .map(|b| (b.id, b.world_pos))
        .collect();

    let mut flipped = 0;
    for (id, pos) in dormant {
        let near_horizontal = horizontal
            .iter()
            .any(|road| (road.x - pos.x).abs() <= threshold);
        let near_vertical = vertical
            .iter()
            .any(|road| (road.y - pos.y).abs() <= threshold);
        if near_horizontal || near_vertical {
            arena.set_active(id, true);
            flipped += 1;
        }
    }
    flipped
}

fn active_positions(arena: &BlockArena, kind: BlockKind) -> Vec<Vec2> {
    arena
        .blocks_of(kind)
        .filter(|b| b.active)
        .map(|b| b.world_pos)
        .collect()
}
