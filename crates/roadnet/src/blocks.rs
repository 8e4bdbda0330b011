//! Block arena: every road block and intersection a level declares.
//!
//! Scene lookups by string name happen once, at construction: identities
//! resolve to arena slots and are never re-resolved during analysis.
//! Lookups by identity return `Option`; an absent block is "skip", not an
//! error.

use std::collections::BTreeSet;

use bevy::math::Vec2;
use bevy::prelude::*;

use crate::addressing::{block_coord, coord_index, BlockId, BlockKind, Coord, GridBounds};
use crate::config::{ConfigError, NetworkConfig, CELL_SIZE};

/// One declared block and its activation state.
#[derive(Debug, Clone)]
pub struct Block {
    pub id: BlockId,
    pub coord: Coord,
    /// World-space position, used by the proximity sweep.
    pub world_pos: Vec2,
    pub active: bool,
}

/// Arena of all declared blocks, indexed by `(kind, index)`.
#[derive(Resource, Debug, Clone, Default)]
pub struct BlockArena {
    bounds: GridBounds,
    intersections: Vec<Block>,
    horizontal: Vec<Block>,
    vertical: Vec<Block>,
}

/// Cell-center world position of a coordinate.
pub fn grid_to_world(c: Coord) -> Vec2 {
    Vec2::new(
        c.x as f32 * CELL_SIZE + CELL_SIZE * 0.5,
        c.y as f32 * CELL_SIZE + CELL_SIZE * 0.5,
    )
}

fn block_world_pos(kind: BlockKind, coord: Coord) -> Vec2 {
    let center = grid_to_world(coord);
    // Road blocks sit halfway toward their far endpoint.
    match kind {
        BlockKind::Intersection => center,
        BlockKind::HorizontalRoad => center + Vec2::new(CELL_SIZE * 0.5, 0.0),
        BlockKind::VerticalRoad => center + Vec2::new(0.0, CELL_SIZE * 0.5),
    }
}

impl BlockArena {
    /// Declares every block the config names, all initially active.
    pub fn from_config(cfg: &NetworkConfig) -> Self {
        let mut arena = Self {
            bounds: cfg.bounds,
            intersections: Vec::with_capacity(cfg.intersection_count),
            horizontal: Vec::with_capacity(cfg.segment_count),
            vertical: Vec::with_capacity(cfg.segment_count),
        };
        for &kind in BlockKind::all() {
            for index in 1..=cfg.count_of(kind) {
                arena.declare(BlockId::new(kind, index));
            }
        }
        arena
    }

    /// Declares blocks from a list of scene names, e.g. a level manifest.
    /// Any malformed name aborts construction with the offending identity.
    pub fn from_names<'a, I>(names: I, bounds: GridBounds) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut arena = Self {
            bounds,
            ..Self::default()
        };
        for name in names {
            let id = crate::addressing::parse_block_name(name)?;
            arena.declare(id);
        }
        Ok(arena)
    }

    fn declare(&mut self, id: BlockId) {
        let coord = block_coord(id.index, self.bounds.cols);
        let block = Block {
            id,
            coord,
            world_pos: block_world_pos(id.kind, coord),
            active: true,
        };
        self.slab_mut(id.kind).push(block);
    }

    fn slab(&self, kind: BlockKind) -> &Vec<Block> {
        match kind {
            BlockKind::Intersection => &self.intersections,
            BlockKind::HorizontalRoad => &self.horizontal,
            BlockKind::VerticalRoad => &self.vertical,
        }
    }

    fn slab_mut(&mut self, kind: BlockKind) -> &mut Vec<Block> {
        match kind {
            BlockKind::Intersection => &mut self.intersections,
            BlockKind::HorizontalRoad => &mut self.horizontal,
            BlockKind::VerticalRoad => &mut self.vertical,
        }
    }

    pub fn bounds(&self) -> GridBounds {
        self.bounds
    }

    /// Resolves an identity to its block. `None` means the level never
    /// declared it.
    pub fn find(&self, id: BlockId) -> Option<&Block> {
        self.slab(id.kind)
            .iter()
            .find(|b| b.id.index == id.index)
    }

    fn find_mut(&mut self, id: BlockId) -> Option<&mut Block> {
        self.slab_mut(id.kind)
            .iter_mut()
            .find(|b| b.id.index == id.index)
    }

    /// Activation state of a block; absent blocks read as inactive.
    pub fn is_active(&self, id: BlockId) -> bool {
        self.find(id).is_some_and(|b| b.active)
    }

    /// Flips a block's activation flag. Returns `false` (and does nothing)
    /// when the identity was never declared.
    pub fn set_active(&mut self, id: BlockId, active: bool) -> bool {
        match self.find_mut(id) {
            Some(block) => {
                block.active = active;
                true
            }
            None => false,
        }
    }

    /// Batch enumeration of one kind, in declaration (index) order.
    pub fn blocks_of(&self, kind: BlockKind) -> impl Iterator<Item = &Block> + '_ {
        self.slab(kind).iter()
    }

    pub fn declared_count(&self, kind: BlockKind) -> usize {
        self.slab(kind).len()
    }

    pub fn active_count(&self, kind: BlockKind) -> usize {
        self.slab(kind).iter().filter(|b| b.active).count()
    }

    /// Every coordinate occupied by at least one active block, any kind.
    pub fn active_coords(&self) -> BTreeSet<Coord> {
        let mut coords = BTreeSet::new();
        for &kind in BlockKind::all() {
            coords.extend(
                self.slab(kind)
                    .iter()
                    .filter(|b| b.active)
                    .map(|b| b.coord),
            );
        }
        coords
    }

    /// Coordinates of all active intersections.
    pub fn active_intersection_coords(&self) -> BTreeSet<Coord> {
        self.intersections
            .iter()
            .filter(|b| b.active)
            .map(|b| b.coord)
            .collect()
    }

    /// The intersection block occupying `coord`, if one was declared there.
    pub fn intersection_at(&self, coord: Coord) -> Option<BlockId> {
        let id = BlockId::new(BlockKind::Intersection, coord_index(coord, self.bounds.cols));
        self.find(id).map(|b| b.id)
    }
}
