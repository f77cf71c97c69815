//! Grid coordinates.

use crate::heading::Heading;
use std::fmt;

/// A tile coordinate on the grid.
///
/// `x` grows eastward, `y` grows northward. Valid positions satisfy
/// `0 <= x < width` and `0 <= y < height`; the type itself is
/// unbounded so that one-step offsets can be computed before the
/// grid bounds check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TilePos {
    /// Column, increasing eastward.
    pub x: i32,
    /// Row, increasing northward.
    pub y: i32,
}

impl TilePos {
    /// Construct a position from raw coordinates.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The position one step in the given heading.
    ///
    /// North is `+y`, east is `+x`, south is `-y`, west is `-x`.
    /// The result may be out of bounds; callers must check against
    /// the grid.
    pub fn step(self, heading: Heading) -> Self {
        let (dx, dy) = heading.offset();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for TilePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for TilePos {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}
