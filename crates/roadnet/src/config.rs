//! Named configuration for the road-grid generator.
//!
//! The observed level data disagreed with itself about its constants
//! (9 vs 16 intersections, 4x4 vs 5x5 grids), so nothing here is a
//! hardcoded literal inside an algorithm: grid dimensions, block counts,
//! the repair strategy, and the boundary rule are all explicit
//! per-deployment configuration. The canonical default is the
//! 4x4 / 9-intersection / 12-segment layout.

use std::fmt;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::addressing::{block_coord, BlockKind, Coord, GridBounds};

pub const GRID_COLS: usize = 4;
pub const GRID_ROWS: usize = 4;
pub const INTERSECTION_COUNT: usize = 9;
/// Per orientation: the level declares this many horizontal and this many
/// vertical road blocks.
pub const SEGMENT_COUNT: usize = 12;

/// World-space size of one grid cell.
pub const CELL_SIZE: f32 = 16.0;

/// Default world-space offset within which the proximity sweep considers an
/// intersection adjacent to a road block.
pub const PROXIMITY_THRESHOLD: f32 = CELL_SIZE * 0.5;

/// Which post-randomize pass makes the network topologically valid.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
pub enum RepairStrategy {
    /// Deactivate segments that connect a boundary exit to nothing useful,
    /// restoring genuine dead-end stubs afterwards.
    #[default]
    PruneIsolated,
    /// Force every intersection unreachable from the first active one back
    /// on. Fixes node activation only, not segment connectivity.
    ForceActivate,
    /// Link every disconnected node to its nearest already-visited node by
    /// activating the connecting segment.
    NearestEdge,
}

/// How the pruning pass decides which blocks count as boundary-connected.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
pub enum BoundaryRule {
    /// A block is boundary-connected iff its own coordinate is a designated
    /// boundary-anchor coordinate on the grid edge.
    #[default]
    Positional,
    /// Legacy rule kept for behavior parity: every block counts as
    /// boundary-connected as long as at least one anchor exists anywhere.
    GlobalAnchor,
}

/// Configuration errors surfaced while wiring a level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A scene block name did not parse as `(kind, index)`.
    InvalidIdentity(String),
    /// A boundary anchor was declared off the grid's outer ring.
    AnchorOffEdge(Coord),
    /// More blocks of a kind were declared than the grid has coordinates.
    CountExceedsGrid { kind: BlockKind, count: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidIdentity(name) => {
                write!(f, "block name '{name}' does not parse as a (kind, index) identity")
            }
            ConfigError::AnchorOffEdge(c) => {
                write!(f, "boundary anchor {c} is not on the grid's outer ring")
            }
            ConfigError::CountExceedsGrid { kind, count } => write!(
                f,
                "{count} {}s declared, more than the grid holds",
                kind.name_prefix().trim_end_matches("_block")
            ),
        }
    }
}

/// Everything a generation pass needs to know about the level.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub bounds: GridBounds,
    /// Number of declared intersection blocks (indices `1..=n`).
    pub intersection_count: usize,
    /// Number of declared road blocks per orientation (indices `1..=n`).
    pub segment_count: usize,
    pub strategy: RepairStrategy,
    pub boundary_rule: BoundaryRule,
    /// Coordinates on the grid edge that connect to the outside of the
    /// generated area.
    pub boundary_anchors: Vec<Coord>,
    /// World-space offset bound for the proximity sweep.
    pub proximity_threshold: f32,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            bounds: GridBounds::new(GRID_COLS, GRID_ROWS),
            intersection_count: INTERSECTION_COUNT,
            segment_count: SEGMENT_COUNT,
            strategy: RepairStrategy::default(),
            boundary_rule: BoundaryRule::default(),
            boundary_anchors: vec![Coord::new(0, 0)],
            proximity_threshold: PROXIMITY_THRESHOLD,
        }
    }
}

impl NetworkConfig {
    /// A square `cols x rows` layout with an intersection on every
    /// coordinate and a full complement of segments, anchored at the
    /// origin. Used by tests and by levels that want a dense lattice.
    pub fn dense(cols: usize, rows: usize) -> Self {
        Self {
            bounds: GridBounds::new(cols, rows),
            intersection_count: cols * rows,
            segment_count: cols * rows,
            boundary_anchors: vec![Coord::new(0, 0)],
            ..Self::default()
        }
    }

    /// Checks the declared layout is internally consistent. Violations are
    /// recoverable (the caller falls back to defaults); nothing here is
    /// fatal.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for &c in &self.boundary_anchors {
            if !self.bounds.contains(c) || !self.bounds.on_edge(c) {
                return Err(ConfigError::AnchorOffEdge(c));
            }
        }
        if self.intersection_count > self.bounds.coord_count() {
            return Err(ConfigError::CountExceedsGrid {
                kind: BlockKind::Intersection,
                count: self.intersection_count,
            });
        }
        if self.segment_count > self.bounds.coord_count() {
            return Err(ConfigError::CountExceedsGrid {
                kind: BlockKind::HorizontalRoad,
                count: self.segment_count,
            });
        }
        Ok(())
    }

    /// The highest declared index for a kind.
    pub fn count_of(&self, kind: BlockKind) -> usize {
        match kind {
            BlockKind::Intersection => self.intersection_count,
            BlockKind::HorizontalRoad | BlockKind::VerticalRoad => self.segment_count,
        }
    }

    /// True if a block of `kind` with this 1-based index is declared and
    /// its coordinate lies inside the grid.
    pub fn declares(&self, kind: BlockKind, index: usize) -> bool {
        index >= 1
            && index <= self.count_of(kind)
            && self.bounds.contains(block_coord(index, self.bounds.cols))
    }
}
