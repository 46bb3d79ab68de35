use rand::{Rng, XorShiftRng};

use crate::grid::MazeGrid;
use crate::tiles::{Coordinate, CoordinateSmallVec, TileDesignation};

/// Build the grid for one maze segment.
///
/// The usual segment is a carved maze; a center piece segment skips carving
/// and opens the whole grid up as one plaza. Even dimension sizes are bumped
/// to the next odd number by the grid itself.
pub fn generate(dimension_size: usize, center_piece: bool, rng: &mut XorShiftRng) -> MazeGrid {
    let mut grid = MazeGrid::new(dimension_size);
    if center_piece {
        open_plaza(&mut grid);
    } else {
        recursive_backtracker(&mut grid, rng);
    }
    grid
}

/// Carve a perfect maze into the grid with the randomized depth-first
/// backtracker, working on a doubled lattice: cells sit at even-even indices
/// with candidate wall tiles between them.
///
/// From the tile on top of the stack, pick an uncarved cell two tiles away at
/// random, open the wall between them and move on to it; dead ends pop the
/// stack. Every cell is reached exactly once, so the path tiles of the result
/// form a spanning tree of the cell lattice: exactly one route between any
/// two path tiles and no cycles. The stack shrinks to empty once every cell
/// has been visited, so termination needs no further argument.
pub fn recursive_backtracker(grid: &mut MazeGrid, rng: &mut XorShiftRng) {
    for coord in grid.iter() {
        let designation = if coord.x % 2 == 0 && coord.y % 2 == 0 {
            TileDesignation::Cell
        } else {
            TileDesignation::Wall
        };
        grid.set_designation(coord, designation);
    }

    let origin = Coordinate::new(0, 0);
    grid.set_designation(origin, TileDesignation::Path);
    let mut tile_stack = vec![origin];

    while let Some(&head) = tile_stack.last() {
        let unvisited = uncarved_cells_two_apart(grid, head);

        if unvisited.is_empty() {
            tile_stack.pop();
        } else {
            let next = unvisited[rng.gen::<usize>() % unvisited.len()];
            let linking_wall = Coordinate::new((head.x + next.x) / 2, (head.y + next.y) / 2);
            grid.set_designation(linking_wall, TileDesignation::Path);
            grid.set_designation(next, TileDesignation::Path);
            tile_stack.push(next);
        }
    }
}

/// Fill every tile with `Path` - the open center piece variant.
pub fn open_plaza(grid: &mut MazeGrid) {
    for coord in grid.iter() {
        grid.set_designation(coord, TileDesignation::Path);
    }
}

/// Cells two tiles away on either axis that have not been carved into the
/// maze yet. Out of bounds lookups read as `OutOfBounds` and are skipped.
fn uncarved_cells_two_apart(grid: &MazeGrid, from: Coordinate) -> CoordinateSmallVec {
    let mut cells = CoordinateSmallVec::new();
    {
        let mut consider = |candidate: Option<Coordinate>| {
            if let Some(coord) = candidate {
                if grid.designation_at(coord) == TileDesignation::Cell {
                    cells.push(coord);
                }
            }
        };

        let (x, y) = (from.x, from.y);
        consider(if y >= 2 { Some(Coordinate::new(x, y - 2)) } else { None });
        consider(Some(Coordinate::new(x, y + 2)));
        consider(if x >= 2 { Some(Coordinate::new(x - 2, y)) } else { None });
        consider(Some(Coordinate::new(x + 2, y)));
    }
    cells
}

/// Deterministic RNG for tests across the crate.
#[cfg(test)]
pub(crate) fn test_rng(seed: u32) -> XorShiftRng {
    use rand::SeedableRng;
    // XorShift rejects an all zero seed.
    XorShiftRng::from_seed([seed | 1, seed ^ 0x9E3779B9, seed.rotate_left(16) | 1, 0x12345678])
}
