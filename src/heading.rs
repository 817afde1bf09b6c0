use crate::error::ParseError;
use std::fmt;
use std::str::FromStr;

/// The direction the robot is facing.
///
/// North is towards increasing `y`, east towards increasing `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    North,
    South,
    East,
    West,
}

impl Heading {
    /// All headings in clockwise order starting from north.
    pub const ALL: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    /// Rotate 90 degrees counter-clockwise.
    pub fn left(self) -> Self {
        match self {
            Heading::North => Heading::West,
            Heading::West => Heading::South,
            Heading::South => Heading::East,
            Heading::East => Heading::North,
        }
    }

    /// Rotate 90 degrees clockwise.
    pub fn right(self) -> Self {
        match self {
            Heading::North => Heading::East,
            Heading::East => Heading::South,
            Heading::South => Heading::West,
            Heading::West => Heading::North,
        }
    }

    /// Rotate 180 degrees.
    pub fn flip(self) -> Self {
        match self {
            Heading::North => Heading::South,
            Heading::South => Heading::North,
            Heading::East => Heading::West,
            Heading::West => Heading::East,
        }
    }

    /// The cell one step away from `(x, y)` in this direction.
    ///
    /// Returns `None` when the step would leave the unsigned coordinate space,
    /// which can never be a cell of any grid.
    pub fn step(self, x: u32, y: u32) -> Option<(u32, u32)> {
        match self {
            Heading::North => y.checked_add(1).map(|y| (x, y)),
            Heading::South => y.checked_sub(1).map(|y| (x, y)),
            Heading::East => x.checked_add(1).map(|x| (x, y)),
            Heading::West => x.checked_sub(1).map(|x| (x, y)),
        }
    }

    /// The instruction token for this heading.
    pub fn as_str(self) -> &'static str {
        match self {
            Heading::North => "NORTH",
            Heading::South => "SOUTH",
            Heading::East => "EAST",
            Heading::West => "WEST",
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Heading {
    type Err = ParseError;

    /// Case-sensitive: only the upper-case tokens are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NORTH" => Ok(Heading::North),
            "SOUTH" => Ok(Heading::South),
            "EAST" => Ok(Heading::East),
            "WEST" => Ok(Heading::West),
            other => Err(ParseError::Heading(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_lefts_restore_heading() {
        for h in Heading::ALL {
            assert_eq!(h.left().left().left().left(), h);
        }
    }

    #[test]
    fn test_left_and_right_are_inverses() {
        for h in Heading::ALL {
            assert_eq!(h.left().right(), h);
            assert_eq!(h.right().left(), h);
        }
    }

    #[test]
    fn test_flip_is_its_own_inverse() {
        for h in Heading::ALL {
            assert_ne!(h.flip(), h);
            assert_eq!(h.flip().flip(), h);
            assert_eq!(h.flip(), h.right().right());
        }
    }

    #[test]
    fn test_left_cycle_order() {
        assert_eq!(Heading::North.left(), Heading::West);
        assert_eq!(Heading::West.left(), Heading::South);
        assert_eq!(Heading::South.left(), Heading::East);
        assert_eq!(Heading::East.left(), Heading::North);
    }

    #[test]
    fn test_step_directions() {
        assert_eq!(Heading::North.step(2, 2), Some((2, 3)));
        assert_eq!(Heading::South.step(2, 2), Some((2, 1)));
        assert_eq!(Heading::East.step(2, 2), Some((3, 2)));
        assert_eq!(Heading::West.step(2, 2), Some((1, 2)));
        assert_eq!(Heading::West.step(0, 2), None);
        assert_eq!(Heading::South.step(2, 0), None);
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!("EAST".parse::<Heading>(), Ok(Heading::East));
        assert_eq!(
            "east".parse::<Heading>(),
            Err(ParseError::Heading("east".to_string()))
        );
        assert!("North".parse::<Heading>().is_err());
        assert!("".parse::<Heading>().is_err());
    }

    #[test]
    fn test_display_round_trips_tokens() {
        for h in Heading::ALL {
            assert_eq!(h.to_string().parse::<Heading>(), Ok(h));
        }
    }
}
