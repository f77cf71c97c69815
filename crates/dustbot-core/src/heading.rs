//! Cardinal headings and rotation.

use std::fmt;

/// The direction an agent is facing.
///
/// Rotation forms a cyclic group of order 4: four `turned_right()`
/// calls return to the original heading, and `turned_right()` /
/// `turned_left()` are mutual inverses. Because the enum is closed
/// and every match is exhaustive, there is no "unrecognized heading"
/// runtime path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Heading {
    /// Toward `+y`.
    North,
    /// Toward `+x`.
    East,
    /// Toward `-y`.
    South,
    /// Toward `-x`.
    West,
}

impl Heading {
    /// All headings in clockwise order, for exhaustive iteration in
    /// tests and renderers.
    pub const ALL: [Heading; 4] = [
        Heading::North,
        Heading::East,
        Heading::South,
        Heading::West,
    ];

    /// The `(dx, dy)` of one forward step in this heading.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Heading::North => (0, 1),
            Heading::East => (1, 0),
            Heading::South => (0, -1),
            Heading::West => (-1, 0),
        }
    }

    /// Heading after a 90° clockwise turn.
    pub fn turned_right(self) -> Self {
        match self {
            Heading::North => Heading::East,
            Heading::East => Heading::South,
            Heading::South => Heading::West,
            Heading::West => Heading::North,
        }
    }

    /// Heading after a 90° counter-clockwise turn.
    pub fn turned_left(self) -> Self {
        match self {
            Heading::North => Heading::West,
            Heading::West => Heading::South,
            Heading::South => Heading::East,
            Heading::East => Heading::North,
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Heading::North => "north",
            Heading::East => "east",
            Heading::South => "south",
            Heading::West => "west",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn right_turn_cycle_is_n_e_s_w() {
        assert_eq!(Heading::North.turned_right(), Heading::East);
        assert_eq!(Heading::East.turned_right(), Heading::South);
        assert_eq!(Heading::South.turned_right(), Heading::West);
        assert_eq!(Heading::West.turned_right(), Heading::North);
    }

    #[test]
    fn offsets_are_unit_steps() {
        for h in Heading::ALL {
            let (dx, dy) = h.offset();
            assert_eq!(dx.abs() + dy.abs(), 1, "heading {h} offset not unit");
        }
    }

    fn arb_heading() -> impl Strategy<Value = Heading> {
        prop_oneof![
            Just(Heading::North),
            Just(Heading::East),
            Just(Heading::South),
            Just(Heading::West),
        ]
    }

    proptest! {
        #[test]
        fn four_right_turns_are_identity(h in arb_heading()) {
            let rotated = h
                .turned_right()
                .turned_right()
                .turned_right()
                .turned_right();
            prop_assert_eq!(rotated, h);
        }

        #[test]
        fn right_and_left_are_inverses(h in arb_heading()) {
            prop_assert_eq!(h.turned_right().turned_left(), h);
            prop_assert_eq!(h.turned_left().turned_right(), h);
        }

        #[test]
        fn opposite_offsets_cancel(h in arb_heading()) {
            let (dx, dy) = h.offset();
            let (ox, oy) = h.turned_right().turned_right().offset();
            prop_assert_eq!((dx + ox, dy + oy), (0, 0));
        }
    }
}
