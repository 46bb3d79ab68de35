use std::fmt;

use crate::tiles::{Coordinate, CoordinateSmallVec, Direction, TileDesignation, ALL_DIRECTIONS};
use crate::utils::FnvHashSet;

/// An N x N row-major matrix of tile designations forming one maze segment.
///
/// The dimension is always odd: walls occupy the odd indices of the doubled
/// lattice between cells at even indices, which only lines up on odd sizes.
/// Once a generator has run over the grid it is treated as immutable; walks
/// clone it and scribble `Visited` markers on their own copy.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct MazeGrid {
    tiles: Vec<TileDesignation>,
    dimension: usize,
}

impl MazeGrid {
    /// An ungenerated grid of the requested dimension, every tile a `Wall`.
    /// Even dimension sizes are bumped up to the next odd number.
    pub fn new(dimension_size: usize) -> MazeGrid {
        let dimension = if dimension_size % 2 == 0 {
            dimension_size + 1
        } else {
            dimension_size
        };

        MazeGrid {
            tiles: vec![TileDesignation::Wall; dimension * dimension],
            dimension,
        }
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.dimension * self.dimension
    }

    #[inline]
    pub fn is_valid_tile_location(&self, coord: Coordinate) -> bool {
        (coord.x as usize) < self.dimension && (coord.y as usize) < self.dimension
    }

    /// The stored designation of a tile, or `OutOfBounds` for invalid indices.
    /// Never panics.
    pub fn designation_at(&self, coord: Coordinate) -> TileDesignation {
        if self.is_valid_tile_location(coord) {
            self.tiles[self.tile_index(coord)]
        } else {
            TileDesignation::OutOfBounds
        }
    }

    pub(crate) fn set_designation(&mut self, coord: Coordinate, designation: TileDesignation) {
        debug_assert!(self.is_valid_tile_location(coord));
        let index = self.tile_index(coord);
        self.tiles[index] = designation;
    }

    /// Tiles to the North, South, East or West of a particular tile, whatever
    /// their designation.
    pub fn neighbours(&self, coord: Coordinate) -> CoordinateSmallVec {
        ALL_DIRECTIONS
            .iter()
            .filter_map(|&dir| coord.offset(dir))
            .filter(|&adjacent| self.is_valid_tile_location(adjacent))
            .collect()
    }

    /// Is the adjacent tile in the given direction an open `Path`?
    pub fn is_path_at_direction(&self, coord: Coordinate, direction: Direction) -> bool {
        coord
            .offset(direction)
            .map_or(false, |adjacent| {
                self.designation_at(adjacent) == TileDesignation::Path
            })
    }

    /// A branch point: an in-bounds tile with at least 3 `Path` neighbours.
    pub fn is_intersection(&self, coord: Coordinate) -> bool {
        if !self.is_valid_tile_location(coord) {
            return false;
        }

        let path_neighbours = self
            .neighbours(coord)
            .iter()
            .filter(|&&adjacent| self.designation_at(adjacent) == TileDesignation::Path)
            .count();
        path_neighbours >= 3
    }

    /// A bend in the route: an in-bounds tile with a `Path` neighbour on the
    /// vertical axis and another on the horizontal axis. A straight corridor
    /// tile is not a corner.
    pub fn is_corner(&self, coord: Coordinate) -> bool {
        self.is_valid_tile_location(coord)
            && (self.is_path_at_direction(coord, Direction::North)
                || self.is_path_at_direction(coord, Direction::South))
            && (self.is_path_at_direction(coord, Direction::East)
                || self.is_path_at_direction(coord, Direction::West))
    }

    pub fn iter(&self) -> TileIter {
        TileIter {
            current_tile_number: 0,
            dimension: self.dimension,
            tiles_count: self.size(),
        }
    }

    /// Textual rendering with the given route's tiles marked, for showing the
    /// outcome of a walk on top of the maze.
    pub fn render_with_route(&self, route: &[Coordinate]) -> String {
        let on_route: FnvHashSet<Coordinate> = route.iter().cloned().collect();
        self.render(|coord, designation| {
            if on_route.contains(&coord) {
                ROUTE_TILE
            } else {
                tile_glyph(designation)
            }
        })
    }

    fn render<F>(&self, glyph_of: F) -> String
    where
        F: Fn(Coordinate, TileDesignation) -> &'static str,
    {
        let mut output = String::with_capacity(self.size() * 2 + self.dimension);
        for coord in self.iter() {
            output.push_str(glyph_of(coord, self.designation_at(coord)));
            if coord.x as usize == self.dimension - 1 {
                output.push('\n');
            }
        }
        output
    }

    #[inline]
    fn tile_index(&self, coord: Coordinate) -> usize {
        coord.y as usize * self.dimension + coord.x as usize
    }
}

// Two characters per tile, otherwise the maze renders squashed in a terminal.
const WALL_TILE: &str = "██";
const PATH_TILE: &str = "  ";
const CELL_TILE: &str = "░░";
const VISITED_TILE: &str = "··";
const ROUTE_TILE: &str = "()";

fn tile_glyph(designation: TileDesignation) -> &'static str {
    match designation {
        TileDesignation::Wall => WALL_TILE,
        TileDesignation::Path => PATH_TILE,
        TileDesignation::Cell => CELL_TILE,
        TileDesignation::Visited => VISITED_TILE,
        TileDesignation::OutOfBounds => "??",
    }
}

impl fmt::Display for MazeGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.render(|_, designation| tile_glyph(designation)))
    }
}

#[derive(Debug, Copy, Clone)]
pub struct TileIter {
    current_tile_number: usize,
    dimension: usize,
    tiles_count: usize,
}

impl Iterator for TileIter {
    type Item = Coordinate;
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_tile_number < self.tiles_count {
            let y = self.current_tile_number / self.dimension;
            let x = self.current_tile_number - (y * self.dimension);
            self.current_tile_number += 1;
            Some(Coordinate::new(x as u32, y as u32))
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.tiles_count - self.current_tile_number;
        (remaining, Some(remaining))
    }
}

impl<'a> IntoIterator for &'a MazeGrid {
    type Item = Coordinate;
    type IntoIter = TileIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Test helper shared across the crate: '#' is a Wall, '.' a Path. Row
/// strings are listed north to south.
#[cfg(test)]
pub(crate) fn grid_from_rows(rows: &[&str]) -> MazeGrid {
    let mut grid = MazeGrid::new(rows.len());
    assert_eq!(grid.dimension(), rows.len());
    for (y, row) in rows.iter().enumerate() {
        assert_eq!(row.len(), rows.len());
        for (x, tile) in row.chars().enumerate() {
            let designation = match tile {
                '#' => TileDesignation::Wall,
                '.' => TileDesignation::Path,
                other => panic!("unknown tile glyph {}", other),
            };
            grid.set_designation(Coordinate::new(x as u32, y as u32), designation);
        }
    }
    grid
}
