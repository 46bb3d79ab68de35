use itertools::Itertools;
use rand::{Rng, XorShiftRng};

use crate::grid::MazeGrid;
use crate::tiles::{Coordinate, CoordinateSmallVec, Direction, TileDesignation, ALL_DIRECTIONS};

/// The machinery shared by every constrained walk.
///
/// The canonical grid is cloned into a scratch copy so visited markers never
/// leak into the maze itself; concurrent walks over one grid cannot observe
/// each other. The stack of visited coordinates is the walk's current path:
/// a step pushes a random unvisited `Path` neighbour of the head, a dead end
/// pops back to the previous tile. The scratch copy only ever loses unvisited
/// tiles and exhausted heads only ever pop, so every walk terminates.
struct SectionWalk {
    scratch: MazeGrid,
    path_stack: Vec<Coordinate>,
}

impl SectionWalk {
    fn new(grid: &MazeGrid, start: Coordinate) -> SectionWalk {
        let mut scratch = grid.clone();
        scratch.set_designation(start, TileDesignation::Visited);
        SectionWalk {
            scratch,
            path_stack: vec![start],
        }
    }

    fn head(&self) -> Option<Coordinate> {
        self.path_stack.last().cloned()
    }

    fn depth(&self) -> usize {
        self.path_stack.len()
    }

    fn open_neighbours(&self, of: Coordinate) -> CoordinateSmallVec {
        self.scratch
            .neighbours(of)
            .iter()
            .cloned()
            .filter(|&adjacent| self.scratch.designation_at(adjacent) == TileDesignation::Path)
            .collect()
    }

    /// Advance the walk by one move. Pushes and returns a uniformly random
    /// unvisited `Path` neighbour of the head, or pops the head when it is a
    /// dead end.
    fn step(&mut self, rng: &mut XorShiftRng) -> Option<Coordinate> {
        let head = match self.head() {
            Some(h) => h,
            None => return None,
        };

        let open = self.open_neighbours(head);
        if open.is_empty() {
            self.path_stack.pop();
            None
        } else {
            let next = open[rng.gen::<usize>() % open.len()];
            self.scratch.set_designation(next, TileDesignation::Visited);
            self.path_stack.push(next);
            Some(next)
        }
    }

    /// Constrain the first move of the walk to continue in the established
    /// travel direction: when the tile faced by `direction` is an open
    /// corridor, the three other neighbours of the start are pre-marked
    /// `Visited` so the walk cannot double back. When the claimed direction
    /// does not face a `Path` tile the start is discarded and the whole walk
    /// becomes a no-op; false tells the caller to yield its empty result.
    fn suppress_entry(&mut self, start: Coordinate, direction: Direction) -> bool {
        if !self.scratch.is_path_at_direction(start, direction) {
            self.path_stack.pop();
            return false;
        }

        for &side_direction in ALL_DIRECTIONS.iter() {
            if side_direction == direction {
                continue;
            }
            if let Some(side) = start.offset(side_direction) {
                if self.scratch.is_valid_tile_location(side) {
                    self.scratch.set_designation(side, TileDesignation::Visited);
                }
            }
        }
        true
    }
}

fn walkable_start(grid: &MazeGrid, start: Coordinate) -> bool {
    grid.is_valid_tile_location(start) && grid.designation_at(start) != TileDesignation::Wall
}

/// Self-avoiding random walk from `start` until it reaches `end`, returning
/// the direct route the walk settled on (backtracked dead ends are dropped).
/// Inside one maze segment the route always exists since the carved paths
/// form a spanning tree; an unreachable `end` exhausts the walk and yields an
/// empty sequence, as does any wall or out-of-bounds endpoint.
pub fn walk_to_target(
    grid: &MazeGrid,
    start: Coordinate,
    end: Coordinate,
    entry: Option<Direction>,
    rng: &mut XorShiftRng,
) -> Vec<Coordinate> {
    if !walkable_start(grid, start) || grid.designation_at(end) == TileDesignation::Wall {
        return Vec::new();
    }

    let mut walk = SectionWalk::new(grid, start);
    if let Some(direction) = entry {
        if !walk.suppress_entry(start, direction) {
            return Vec::new();
        }
    }

    while let Some(head) = walk.head() {
        if head == end {
            break;
        }
        walk.step(rng);
    }
    walk.path_stack
}

/// Every tile reachable from `start`, in visit order: a full depth-first
/// traversal of the section with the branch order randomized at every tile.
pub fn walk_section(
    grid: &MazeGrid,
    start: Coordinate,
    entry: Option<Direction>,
    rng: &mut XorShiftRng,
) -> Vec<Coordinate> {
    if !walkable_start(grid, start) {
        return Vec::new();
    }

    let mut walk = SectionWalk::new(grid, start);
    if let Some(direction) = entry {
        if !walk.suppress_entry(start, direction) {
            return Vec::new();
        }
    }

    let mut visit_order = vec![start];
    while walk.head().is_some() {
        if let Some(visited) = walk.step(rng) {
            visit_order.push(visited);
        }
    }
    visit_order
}

/// Random route of up to `length` tiles starting at `start`. The walk stops
/// as soon as its path holds `length` tiles; a section too small to carry the
/// requested length exhausts the walk and yields an empty sequence.
pub fn walk_fixed_length(
    grid: &MazeGrid,
    start: Coordinate,
    length: usize,
    rng: &mut XorShiftRng,
) -> Vec<Coordinate> {
    if length == 0 || !walkable_start(grid, start) {
        return Vec::new();
    }

    let mut walk = SectionWalk::new(grid, start);
    while walk.depth() != 0 && walk.depth() < length {
        walk.step(rng);
    }
    walk.path_stack
}

/// Find an intersection reachable from `start` within a step budget.
///
/// A start tile that is already an intersection is returned immediately.
/// Otherwise the walk runs until its head is an intersection no more than
/// `max_distance` steps along the current path (`max_distance` of zero only
/// accepts an intersection adjacent to the start). None means the section
/// holds no intersection within range.
pub fn next_intersection(
    grid: &MazeGrid,
    start: Coordinate,
    entry: Option<Direction>,
    max_distance: usize,
    rng: &mut XorShiftRng,
) -> Option<Coordinate> {
    if !walkable_start(grid, start) {
        return None;
    }
    if grid.is_intersection(start) {
        return Some(start);
    }

    let mut walk = SectionWalk::new(grid, start);
    if let Some(direction) = entry {
        if !walk.suppress_entry(start, direction) {
            return None;
        }
    }

    while let Some(head) = walk.head() {
        if walk.depth().saturating_sub(2) <= max_distance && grid.is_intersection(head) {
            return Some(head);
        }
        walk.step(rng);
    }
    None
}

/// Reduce a route to its waypoints: the first tile, every tile where the
/// route bends and the last tile. Routes shorter than two tiles are returned
/// unchanged.
pub fn extract_corners(path: &[Coordinate]) -> Vec<Coordinate> {
    if path.len() < 2 {
        return path.to_vec();
    }

    let mut corners = vec![path[0]];
    for (previous, current, next) in path.iter().cloned().tuple_windows() {
        if (current.x == previous.x && current.x != next.x)
            || (current.y == previous.y && current.y != next.y)
        {
            corners.push(current);
        }
    }
    corners.push(path[path.len() - 1]);
    corners
}

/// The compass direction of each consecutive step along a route. Consecutive
/// pairs that are not orthogonally adjacent contribute nothing.
pub fn directions_along(path: &[Coordinate]) -> Vec<Direction> {
    path.iter()
        .cloned()
        .tuple_windows()
        .filter_map(|(from, to)| Direction::between(from, to))
        .collect()
}
