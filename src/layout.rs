use crate::tiles::Coordinate;

pub const DEFAULT_TILE_SIZE: f32 = 400.0;
pub const DEFAULT_FLOOR_HEIGHT: f32 = 100.0;

/// A position in the segment's local world space. `x`/`y` span the floor,
/// `z` is height.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WorldPoint {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Pure conversions between tile indices and world-space positions, for the
/// renderer/placement layer sitting above the grid algorithms.
///
/// Tile (0, 0) sits one tile-width inside the segment origin: the outermost
/// ring is reserved for the segment's border walls, hence the +1/-1 offsets
/// on both conversions. Positions are relative to the segment origin.
#[derive(Debug, Copy, Clone)]
pub struct TileLayout {
    tile_size: f32,
    half_tile_size: f32,
    floor_height: f32,
}

impl TileLayout {
    pub fn new(tile_size: f32, floor_height: f32) -> TileLayout {
        TileLayout {
            tile_size,
            half_tile_size: tile_size / 2.0,
            floor_height,
        }
    }

    /// World position of the tile's footprint origin (its north-west ground
    /// corner), at floor height.
    pub fn tile_origin(&self, tile: Coordinate) -> WorldPoint {
        WorldPoint {
            x: (tile.x + 1) as f32 * self.tile_size,
            y: (tile.y + 1) as f32 * self.tile_size,
            z: self.floor_height,
        }
    }

    /// World position of the middle of the tile's floor, the waypoint an
    /// actor steers towards when following a route.
    pub fn tile_centre(&self, tile: Coordinate) -> WorldPoint {
        let origin = self.tile_origin(tile);
        WorldPoint {
            x: origin.x + self.half_tile_size,
            y: origin.y + self.half_tile_size,
            z: origin.z,
        }
    }

    /// The tile whose footprint contains the given position. None for
    /// positions on or beyond the north/west border ring; indices past the
    /// south/east edge are returned as-is for the caller's bounds check,
    /// since the layout does not know the grid dimension.
    pub fn tile_at(&self, position: WorldPoint) -> Option<Coordinate> {
        let column = (position.x / self.tile_size).floor() as i64 - 1;
        let row = (position.y / self.tile_size).floor() as i64 - 1;

        if column < 0 || row < 0 {
            None
        } else {
            Some(Coordinate::new(column as u32, row as u32))
        }
    }

    /// Centre waypoints for each tile of a route.
    pub fn route_points(&self, route: &[Coordinate]) -> Vec<WorldPoint> {
        route.iter().map(|&tile| self.tile_centre(tile)).collect()
    }
}

impl Default for TileLayout {
    fn default() -> TileLayout {
        TileLayout::new(DEFAULT_TILE_SIZE, DEFAULT_FLOOR_HEIGHT)
    }
}
