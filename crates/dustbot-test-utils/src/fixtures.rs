//! Grid fixtures shared across test suites.

use dustbot_core::TilePos;
use dustbot_grid::{Grid, GridSpec};

/// The classic 10x10 room: dirt at (1,2) and (4,3), an obstacle
/// column from (5,4) to (5,8), sealed border.
pub fn classic_room_spec() -> GridSpec {
    GridSpec {
        width: 10,
        height: 10,
        dirty: vec![TilePos::new(1, 2), TilePos::new(4, 3)],
        blocked: (4..=8).map(|y| TilePos::new(5, y)).collect(),
    }
}

/// Constructed classic room.
///
/// # Panics
///
/// Never; the spec is statically valid.
pub fn classic_room() -> Grid {
    Grid::new(&classic_room_spec()).expect("classic room spec is valid")
}

/// An empty sealed room with no dirt and no obstacles.
pub fn sealed_room_spec(width: u32, height: u32) -> GridSpec {
    GridSpec {
        width,
        height,
        dirty: vec![],
        blocked: vec![],
    }
}

/// A 5x5 room whose center tile (2,2) is walled in on all four sides.
///
/// The only interior tiles left open are the corners of the interior
/// ring; the center is unreachable and inescapable.
pub fn pocket_room_spec() -> GridSpec {
    GridSpec {
        width: 5,
        height: 5,
        dirty: vec![],
        blocked: vec![
            TilePos::new(2, 3),
            TilePos::new(3, 2),
            TilePos::new(2, 1),
            TilePos::new(1, 2),
        ],
    }
}
