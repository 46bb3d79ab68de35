use smallvec::SmallVec;
use std::convert::From;

/// Classification of a single tile in a maze segment grid.
///
/// `Cell` and `Wall` are the only designations present while a maze is being
/// carved; a finished grid stores `Path` and `Wall` exclusively. `Visited` is
/// a transient marker written to a walk's private scratch copy of the grid,
/// never to the canonical maze. `OutOfBounds` is returned from queries with
/// invalid indices and is never stored.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub enum TileDesignation {
    Cell,
    Wall,
    Path,
    Visited,
    OutOfBounds,
}

/// A tile index pair: `x` is the column, `y` is the row. `y` grows southward.
#[derive(Hash, Eq, PartialEq, Debug, Copy, Clone, Ord, PartialOrd)]
pub struct Coordinate {
    pub x: u32,
    pub y: u32,
}

pub type CoordinateSmallVec = SmallVec<[Coordinate; 4]>;

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

pub const ALL_DIRECTIONS: [Direction; 4] =
    [Direction::North, Direction::South, Direction::East, Direction::West];

impl Coordinate {
    pub fn new(x: u32, y: u32) -> Coordinate {
        Coordinate { x, y }
    }

    /// The coordinate one tile away in the given direction.
    /// Returns None when that tile is not representable (north or west of the
    /// grid origin); nothing here knows the grid's upper bounds.
    pub fn offset(&self, dir: Direction) -> Option<Coordinate> {
        let (x, y) = (self.x, self.y);
        match dir {
            Direction::North => {
                if y > 0 {
                    Some(Coordinate { x, y: y - 1 })
                } else {
                    None
                }
            }
            Direction::South => Some(Coordinate { x, y: y + 1 }),
            Direction::East => Some(Coordinate { x: x + 1, y }),
            Direction::West => {
                if x > 0 {
                    Some(Coordinate { x: x - 1, y })
                } else {
                    None
                }
            }
        }
    }
}

impl From<(u32, u32)> for Coordinate {
    fn from(x_y_pair: (u32, u32)) -> Coordinate {
        Coordinate::new(x_y_pair.0, x_y_pair.1)
    }
}

impl Direction {
    /// Compass direction of the step from `a` to an orthogonally adjacent `b`.
    /// None when the tiles are equal, diagonal or further than one tile apart.
    pub fn between(a: Coordinate, b: Coordinate) -> Option<Direction> {
        if a.x == b.x {
            if b.y + 1 == a.y {
                Some(Direction::North)
            } else if a.y + 1 == b.y {
                Some(Direction::South)
            } else {
                None
            }
        } else if a.y == b.y {
            if a.x + 1 == b.x {
                Some(Direction::East)
            } else if b.x + 1 == a.x {
                Some(Direction::West)
            } else {
                None
            }
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn offsets_at_origin() {
        let origin = Coordinate::new(0, 0);
        assert_eq!(origin.offset(Direction::North), None);
        assert_eq!(origin.offset(Direction::West), None);
        assert_eq!(origin.offset(Direction::South), Some(Coordinate::new(0, 1)));
        assert_eq!(origin.offset(Direction::East), Some(Coordinate::new(1, 0)));
    }

    #[test]
    fn offsets_inside_grid() {
        let c = Coordinate::new(2, 3);
        assert_eq!(c.offset(Direction::North), Some(Coordinate::new(2, 2)));
        assert_eq!(c.offset(Direction::South), Some(Coordinate::new(2, 4)));
        assert_eq!(c.offset(Direction::East), Some(Coordinate::new(3, 3)));
        assert_eq!(c.offset(Direction::West), Some(Coordinate::new(1, 3)));
    }

    #[test]
    fn direction_between_adjacent_tiles() {
        let gc = |x, y| Coordinate::new(x, y);
        assert_eq!(Direction::between(gc(1, 1), gc(1, 0)), Some(Direction::North));
        assert_eq!(Direction::between(gc(1, 1), gc(1, 2)), Some(Direction::South));
        assert_eq!(Direction::between(gc(1, 1), gc(2, 1)), Some(Direction::East));
        assert_eq!(Direction::between(gc(1, 1), gc(0, 1)), Some(Direction::West));
    }

    #[test]
    fn direction_between_non_neighbours() {
        let gc = |x, y| Coordinate::new(x, y);
        assert_eq!(Direction::between(gc(1, 1), gc(1, 1)), None);
        assert_eq!(Direction::between(gc(1, 1), gc(2, 2)), None);
        assert_eq!(Direction::between(gc(1, 1), gc(1, 3)), None);
        assert_eq!(Direction::between(gc(0, 1), gc(3, 1)), None);
    }
}
