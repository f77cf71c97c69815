//! Error types for grid construction and access.

use dustbot_core::TilePos;
use std::fmt;

/// Errors arising from grid construction or tile access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A coordinate is outside `[0, width) x [0, height)`.
    ///
    /// With a sealed border every legal move stays in bounds, so
    /// seeing this during a run means the border invariant is broken;
    /// the engine aborts rather than clamping.
    OutOfBounds {
        /// The offending position.
        pos: TilePos,
        /// Grid width at the time of the access.
        width: u32,
        /// Grid height at the time of the access.
        height: u32,
    },
    /// Either dimension is too small to hold a sealed border plus at
    /// least one interior tile.
    TooSmall {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
    /// An axis exceeds the `i32` coordinate range.
    DimensionTooLarge {
        /// Which axis ("width" or "height").
        name: &'static str,
        /// The requested size.
        value: u32,
        /// The maximum supported size.
        max: u32,
    },
    /// A dirty or blocked seed coordinate is off the grid.
    SeedOutOfBounds {
        /// The offending seed position.
        pos: TilePos,
    },
    /// A dirty seed lies on the border, which is always blocked.
    DirtOnBorder {
        /// The offending seed position.
        pos: TilePos,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { pos, width, height } => {
                write!(f, "position {pos} out of bounds [0, {width}) x [0, {height})")
            }
            Self::TooSmall { width, height } => {
                write!(
                    f,
                    "grid {width}x{height} too small: a sealed border needs at least 3x3"
                )
            }
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum {max}")
            }
            Self::SeedOutOfBounds { pos } => {
                write!(f, "seed position {pos} is off the grid")
            }
            Self::DirtOnBorder { pos } => {
                write!(f, "dirty seed {pos} lies on the blocked border")
            }
        }
    }
}

impl std::error::Error for GridError {}
