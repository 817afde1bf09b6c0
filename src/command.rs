use crate::error::ParseError;
use crate::heading::Heading;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Prefix of the only instruction that carries arguments. The trailing space is required.
const PLACE_PREFIX: &str = "PLACE ";

/// A plain decimal number: no sign, no decimal point, ASCII digits only.
static COORDINATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("coordinate pattern is valid"));

/// A validated robot instruction.
///
/// Values of this type are always well formed; malformed text is rejected by
/// [`Command::parse`] before a `Command` exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Put the robot at `(x, y)` facing `heading`.
    Place { x: u32, y: u32, heading: Heading },
    /// Step one cell forward.
    Move,
    /// Turn 90 degrees counter-clockwise.
    Left,
    /// Turn 90 degrees clockwise.
    Right,
    /// Turn 180 degrees.
    Flip,
    /// Print the current position and heading.
    Report,
}

impl Command {
    /// Parse one instruction line.
    ///
    /// Matching is exact and case-sensitive. The simple instructions must equal their
    /// token (`MOVE2` is not `MOVE`), and `PLACE` must be followed by a single space and
    /// three comma separated fields, whitespace around each field being ignored.
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        match line {
            "MOVE" => return Ok(Command::Move),
            "LEFT" => return Ok(Command::Left),
            "RIGHT" => return Ok(Command::Right),
            "FLIP" => return Ok(Command::Flip),
            "REPORT" => return Ok(Command::Report),
            _ => {}
        }

        if line.trim().is_empty() {
            return Err(ParseError::Empty);
        }

        let Some(args) = line.strip_prefix(PLACE_PREFIX) else {
            return Err(ParseError::Unknown(line.to_string()));
        };

        let fields: Vec<&str> = args.split(',').map(str::trim).collect();
        let &[x, y, heading] = fields.as_slice() else {
            return Err(ParseError::FieldCount(fields.len()));
        };

        Ok(Command::Place {
            x: parse_coordinate(x)?,
            y: parse_coordinate(y)?,
            heading: heading.parse()?,
        })
    }
}

fn parse_coordinate(field: &str) -> Result<u32, ParseError> {
    if !COORDINATE.is_match(field) {
        return Err(ParseError::Coordinate(field.to_string()));
    }
    // Digits only, so the sole failure left is overflow.
    field
        .parse()
        .map_err(|_| ParseError::Coordinate(field.to_string()))
}

/// Parse one instruction line, discarding the failure reason.
pub fn parse(line: &str) -> Option<Command> {
    Command::parse(line).ok()
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::parse(s)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Place { x, y, heading } => write!(f, "PLACE {x},{y},{heading}"),
            Command::Move => f.write_str("MOVE"),
            Command::Left => f.write_str("LEFT"),
            Command::Right => f.write_str("RIGHT"),
            Command::Flip => f.write_str("FLIP"),
            Command::Report => f.write_str("REPORT"),
        }
    }
}
