//! Tile status enumeration.

use std::fmt;

/// The status of a single grid tile.
///
/// `Blocked` tiles never change; `Dirty` tiles become `Clean` through
/// the transition function's clean effect and never become dirty
/// again within a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TileStatus {
    /// Traversable, nothing to do here.
    Clean,
    /// Traversable, awards score when sucked up.
    Dirty,
    /// Impassable. All border tiles are blocked.
    Blocked,
}

impl TileStatus {
    /// Single-character glyph used by the ASCII renderers.
    pub fn glyph(self) -> char {
        match self {
            TileStatus::Clean => '.',
            TileStatus::Dirty => 'D',
            TileStatus::Blocked => 'B',
        }
    }
}

impl fmt::Display for TileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyphs_match_renderer_legend() {
        assert_eq!(TileStatus::Clean.glyph(), '.');
        assert_eq!(TileStatus::Dirty.glyph(), 'D');
        assert_eq!(TileStatus::Blocked.glyph(), 'B');
    }
}
