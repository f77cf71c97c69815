//! The [`Grid`] tile map and its [`GridSpec`] seed description.

use crate::error::GridError;
use dustbot_core::{TilePos, TileStatus};
use smallvec::SmallVec;
use std::fmt;

/// Seed description for constructing a [`Grid`].
///
/// Interior tiles start `Clean` except the listed `dirty` and
/// `blocked` positions; every border tile is sealed `Blocked`
/// regardless of the seed lists. A position listed in both `dirty`
/// and `blocked` ends up `Blocked` (blocked seeds are applied last).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GridSpec {
    /// Number of columns, including the blocked border.
    pub width: u32,
    /// Number of rows, including the blocked border.
    pub height: u32,
    /// Interior tiles seeded `Dirty`.
    pub dirty: Vec<TilePos>,
    /// Interior tiles seeded `Blocked` (obstacles).
    pub blocked: Vec<TilePos>,
}

/// A fixed-size rectangle of tile statuses with a sealed border.
///
/// Row-major storage indexed by [`TilePos`], `x` eastward and `y`
/// northward. Created once per run; the only mutation is the clean
/// effect ([`clean()`](Grid::clean)), which turns the addressed tile
/// `Clean` unconditionally. `Blocked` tiles never change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    tiles: Vec<TileStatus>,
}

impl Grid {
    /// Maximum dimension size: coordinates use `i32`, so each axis
    /// must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Minimum dimension size: a sealed border plus one interior tile.
    pub const MIN_DIM: u32 = 3;

    /// Build a grid from a seed specification.
    ///
    /// Seals the border, seeds the interior, and validates every seed
    /// coordinate. Dirty seeds on the border are rejected: the
    /// border is blocked by invariant and a dirty tile there could
    /// never be cleaned.
    ///
    /// # Examples
    ///
    /// ```
    /// use dustbot_core::TilePos;
    /// use dustbot_grid::{Grid, GridSpec};
    ///
    /// let grid = Grid::new(&GridSpec {
    ///     width: 10,
    ///     height: 10,
    ///     dirty: vec![TilePos::new(1, 2)],
    ///     blocked: vec![TilePos::new(5, 4)],
    /// })
    /// .unwrap();
    /// assert!(grid.is_dirty(TilePos::new(1, 2)).unwrap());
    /// assert!(grid.is_blocked(TilePos::new(0, 0)).unwrap());
    /// ```
    pub fn new(spec: &GridSpec) -> Result<Self, GridError> {
        if spec.width < Self::MIN_DIM || spec.height < Self::MIN_DIM {
            return Err(GridError::TooSmall {
                width: spec.width,
                height: spec.height,
            });
        }
        if spec.width > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "width",
                value: spec.width,
                max: Self::MAX_DIM,
            });
        }
        if spec.height > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "height",
                value: spec.height,
                max: Self::MAX_DIM,
            });
        }

        let mut grid = Self {
            width: spec.width,
            height: spec.height,
            tiles: vec![TileStatus::Clean; (spec.width as usize) * (spec.height as usize)],
        };

        // Seal the border.
        for x in 0..spec.width as i32 {
            grid.set(TilePos::new(x, 0), TileStatus::Blocked);
            grid.set(TilePos::new(x, spec.height as i32 - 1), TileStatus::Blocked);
        }
        for y in 0..spec.height as i32 {
            grid.set(TilePos::new(0, y), TileStatus::Blocked);
            grid.set(TilePos::new(spec.width as i32 - 1, y), TileStatus::Blocked);
        }

        // Seed dirt, then obstacles (obstacles win on overlap).
        for &pos in &spec.dirty {
            if !grid.contains(pos) {
                return Err(GridError::SeedOutOfBounds { pos });
            }
            if grid.is_border(pos) {
                return Err(GridError::DirtOnBorder { pos });
            }
            grid.set(pos, TileStatus::Dirty);
        }
        for &pos in &spec.blocked {
            if !grid.contains(pos) {
                return Err(GridError::SeedOutOfBounds { pos });
            }
            grid.set(pos, TileStatus::Blocked);
        }

        Ok(grid)
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of tiles.
    pub fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Whether `pos` lies on the grid at all.
    pub fn contains(&self, pos: TilePos) -> bool {
        pos.x >= 0 && pos.x < self.width as i32 && pos.y >= 0 && pos.y < self.height as i32
    }

    /// Whether `pos` lies on the outermost ring of tiles.
    ///
    /// Border tiles are `Blocked` by construction and stay that way.
    pub fn is_border(&self, pos: TilePos) -> bool {
        pos.x == 0
            || pos.y == 0
            || pos.x == self.width as i32 - 1
            || pos.y == self.height as i32 - 1
    }

    /// The status of the tile at `pos`.
    pub fn status(&self, pos: TilePos) -> Result<TileStatus, GridError> {
        self.index(pos).map(|i| self.tiles[i])
    }

    /// Whether the tile at `pos` is dirty.
    pub fn is_dirty(&self, pos: TilePos) -> Result<bool, GridError> {
        Ok(self.status(pos)? == TileStatus::Dirty)
    }

    /// Whether the tile at `pos` is blocked.
    pub fn is_blocked(&self, pos: TilePos) -> Result<bool, GridError> {
        Ok(self.status(pos)? == TileStatus::Blocked)
    }

    /// Set the tile at `pos` to `Clean`, unconditionally.
    ///
    /// Idempotent: cleaning an already-clean tile is a no-op. This is
    /// the only mutator on a constructed grid. The engine only ever
    /// addresses the tile under an agent, which is never blocked.
    pub fn clean(&mut self, pos: TilePos) -> Result<(), GridError> {
        let i = self.index(pos)?;
        self.tiles[i] = TileStatus::Clean;
        Ok(())
    }

    /// Count of dirty tiles remaining.
    pub fn dirty_count(&self) -> usize {
        self.tiles
            .iter()
            .filter(|&&t| t == TileStatus::Dirty)
            .count()
    }

    /// The in-bounds 4-connected neighbours of `pos`.
    ///
    /// Purely topological; blocked tiles are included. Interior
    /// tiles always have exactly four neighbours.
    pub fn neighbours(&self, pos: TilePos) -> SmallVec<[TilePos; 4]> {
        dustbot_core::Heading::ALL
            .iter()
            .map(|&h| pos.step(h))
            .filter(|&p| self.contains(p))
            .collect()
    }

    /// Render the grid with agent markers overlaid.
    ///
    /// Rows print top (max `y`) first. Agents print as their index;
    /// an agent on a dirty tile hides the `D` beneath it.
    pub fn render_with_agents(&self, agents: &[TilePos]) -> String {
        let mut out = String::with_capacity(self.cell_count() * 2);
        for y in (0..self.height as i32).rev() {
            for x in 0..self.width as i32 {
                let pos = TilePos::new(x, y);
                let glyph = match agents.iter().position(|&a| a == pos) {
                    Some(i) => char::from_digit((i % 10) as u32, 10).unwrap_or('?'),
                    None => self.tiles[self.index_unchecked(pos)].glyph(),
                };
                if x > 0 {
                    out.push(' ');
                }
                out.push(glyph);
            }
            out.push('\n');
        }
        out
    }

    fn index(&self, pos: TilePos) -> Result<usize, GridError> {
        if !self.contains(pos) {
            return Err(GridError::OutOfBounds {
                pos,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.index_unchecked(pos))
    }

    fn index_unchecked(&self, pos: TilePos) -> usize {
        (pos.y as usize) * (self.width as usize) + pos.x as usize
    }

    fn set(&mut self, pos: TilePos, status: TileStatus) {
        let i = self.index_unchecked(pos);
        self.tiles[i] = status;
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_with_agents(&[]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn p(x: i32, y: i32) -> TilePos {
        TilePos::new(x, y)
    }

    fn sealed(width: u32, height: u32) -> Grid {
        Grid::new(&GridSpec {
            width,
            height,
            dirty: vec![],
            blocked: vec![],
        })
        .unwrap()
    }

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn border_is_sealed_blocked() {
        let g = sealed(10, 10);
        for x in 0..10 {
            assert!(g.is_blocked(p(x, 0)).unwrap());
            assert!(g.is_blocked(p(x, 9)).unwrap());
        }
        for y in 0..10 {
            assert!(g.is_blocked(p(0, y)).unwrap());
            assert!(g.is_blocked(p(9, y)).unwrap());
        }
    }

    #[test]
    fn interior_defaults_to_clean() {
        let g = sealed(5, 5);
        for x in 1..4 {
            for y in 1..4 {
                assert_eq!(g.status(p(x, y)).unwrap(), TileStatus::Clean);
            }
        }
    }

    #[test]
    fn seeds_apply_to_interior() {
        let g = Grid::new(&GridSpec {
            width: 10,
            height: 10,
            dirty: vec![p(1, 2), p(4, 3)],
            blocked: vec![p(5, 4), p(5, 5)],
        })
        .unwrap();
        assert!(g.is_dirty(p(1, 2)).unwrap());
        assert!(g.is_dirty(p(4, 3)).unwrap());
        assert!(g.is_blocked(p(5, 4)).unwrap());
        assert_eq!(g.dirty_count(), 2);
    }

    #[test]
    fn blocked_seed_wins_over_dirty_seed() {
        let g = Grid::new(&GridSpec {
            width: 5,
            height: 5,
            dirty: vec![p(2, 2)],
            blocked: vec![p(2, 2)],
        })
        .unwrap();
        assert_eq!(g.status(p(2, 2)).unwrap(), TileStatus::Blocked);
    }

    #[test]
    fn too_small_grid_rejected() {
        let spec = GridSpec {
            width: 2,
            height: 5,
            ..GridSpec::default()
        };
        assert!(matches!(Grid::new(&spec), Err(GridError::TooSmall { .. })));
    }

    #[test]
    fn dirty_seed_on_border_rejected() {
        let spec = GridSpec {
            width: 5,
            height: 5,
            dirty: vec![p(0, 2)],
            blocked: vec![],
        };
        assert!(matches!(
            Grid::new(&spec),
            Err(GridError::DirtOnBorder { .. })
        ));
    }

    #[test]
    fn seed_off_grid_rejected() {
        let spec = GridSpec {
            width: 5,
            height: 5,
            dirty: vec![],
            blocked: vec![p(7, 7)],
        };
        assert!(matches!(
            Grid::new(&spec),
            Err(GridError::SeedOutOfBounds { .. })
        ));
    }

    // ── Access ──────────────────────────────────────────────────

    #[test]
    fn out_of_bounds_access_is_an_error() {
        let g = sealed(5, 5);
        assert!(matches!(
            g.status(p(5, 0)),
            Err(GridError::OutOfBounds { .. })
        ));
        assert!(matches!(
            g.status(p(0, -1)),
            Err(GridError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn clean_is_idempotent() {
        let mut g = Grid::new(&GridSpec {
            width: 5,
            height: 5,
            dirty: vec![p(2, 2)],
            blocked: vec![],
        })
        .unwrap();
        g.clean(p(2, 2)).unwrap();
        assert_eq!(g.status(p(2, 2)).unwrap(), TileStatus::Clean);
        g.clean(p(2, 2)).unwrap();
        assert_eq!(g.status(p(2, 2)).unwrap(), TileStatus::Clean);
    }

    #[test]
    fn neighbours_of_interior_tile() {
        let g = sealed(5, 5);
        let n = g.neighbours(p(2, 2));
        assert_eq!(n.len(), 4);
        assert!(n.contains(&p(2, 3)));
        assert!(n.contains(&p(3, 2)));
        assert!(n.contains(&p(2, 1)));
        assert!(n.contains(&p(1, 2)));
    }

    #[test]
    fn neighbours_of_corner_tile() {
        let g = sealed(5, 5);
        assert_eq!(g.neighbours(p(0, 0)).len(), 2);
    }

    // ── Rendering ───────────────────────────────────────────────

    #[test]
    fn render_places_top_row_first() {
        let g = Grid::new(&GridSpec {
            width: 4,
            height: 4,
            dirty: vec![p(1, 2)],
            blocked: vec![],
        })
        .unwrap();
        let rendered = g.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        // y=2 is the second line from the top on a height-4 grid.
        assert_eq!(lines[1], "B D . B");
    }

    #[test]
    fn render_overlays_agent_index() {
        let g = sealed(4, 4);
        let out = g.render_with_agents(&[p(1, 1)]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[2], "B 0 . B");
    }

    // ── Properties ──────────────────────────────────────────────

    proptest! {
        #[test]
        fn border_stays_blocked_under_interior_cleaning(
            width in 3u32..16,
            height in 3u32..16,
            x in 1i32..15,
            y in 1i32..15,
        ) {
            let mut g = sealed(width, height);
            // Clamp the seed to an interior tile; the engine only ever
            // cleans under an agent, which is never on the border.
            let pos = p(
                1 + (x - 1) % (width as i32 - 2),
                1 + (y - 1) % (height as i32 - 2),
            );
            g.clean(pos).unwrap();
            for bx in 0..width as i32 {
                prop_assert!(g.is_blocked(p(bx, 0)).unwrap());
                prop_assert!(g.is_blocked(p(bx, height as i32 - 1)).unwrap());
            }
            for by in 0..height as i32 {
                prop_assert!(g.is_blocked(p(0, by)).unwrap());
                prop_assert!(g.is_blocked(p(width as i32 - 1, by)).unwrap());
            }
        }

        #[test]
        fn neighbours_are_symmetric(
            width in 3u32..12,
            height in 3u32..12,
            x in 0i32..12,
            y in 0i32..12,
        ) {
            let g = sealed(width, height);
            let pos = p(x % width as i32, y % height as i32);
            for nb in g.neighbours(pos) {
                prop_assert!(g.neighbours(nb).contains(&pos));
            }
        }
    }
}
