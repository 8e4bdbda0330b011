//! ASCII rendering of the road lattice.
//!
//! One character per intersection coordinate, interleaved with the road
//! blocks between them. Built on demand from `&BlockArena`; no systems
//! required.
//!
//! Legend: `+` active intersection, `.` declared-but-inactive
//! intersection, `-`/`|` active road blocks, space for everything else.

use crate::addressing::{coord_index, BlockId, BlockKind, Coord};
use crate::blocks::BlockArena;

fn intersection_char(arena: &BlockArena, c: Coord) -> char {
    let cols = arena.bounds().cols;
    let id = BlockId::new(BlockKind::Intersection, coord_index(c, cols));
    match arena.find(id) {
        Some(block) if block.active => '+',
        Some(_) => '.',
        None => ' ',
    }
}

fn road_char(arena: &BlockArena, kind: BlockKind, glyph: char, c: Coord) -> char {
    let cols = arena.bounds().cols;
    let id = BlockId::new(kind, coord_index(c, cols));
    if arena.is_active(id) {
        glyph
    } else {
        ' '
    }
}

/// Renders the whole lattice, top row first.
pub fn render_network(arena: &BlockArena) -> String {
    let bounds = arena.bounds();
    let mut out = String::new();
    for y in 0..bounds.rows {
        // Intersection row, with horizontal blocks between columns.
        for x in 0..bounds.cols {
            out.push(intersection_char(arena, Coord::new(x, y)));
            if x + 1 < bounds.cols {
                out.push(road_char(arena, BlockKind::HorizontalRoad, '-', Coord::new(x, y)));
            }
        }
        out.push('\n');
        // Vertical blocks between this row and the next.
        if y + 1 < bounds.rows {
            for x in 0..bounds.cols {
                out.push(road_char(arena, BlockKind::VerticalRoad, '|', Coord::new(x, y)));
                if x + 1 < bounds.cols {
                    out.push(' ');
                }
            }
            out.push('\n');
        }
    }
    out
}
