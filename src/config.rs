//! Session settings, parsed from the command line with [`argh`].

use crate::error::{ConfigError, GridError};
use crate::grid::{Grid, Position};
use argh::FromArgs;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::level_filters::LevelFilter;

pub const NAME: &str = "grid_robot";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Largest command file accepted, in bytes.
pub const MAX_FILE_SIZE: u64 = 1024 * 1024;

pub const DEFAULT_BOARD: BoardSize = BoardSize {
    length: 5,
    width: 5,
};

/// Grid dimensions as given on the command line: `length,width`.
///
/// Zero is accepted here and rejected when the [`Grid`] is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardSize {
    pub length: u32,
    pub width: u32,
}

impl Default for BoardSize {
    fn default() -> Self {
        DEFAULT_BOARD
    }
}

impl FromStr for BoardSize {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (length, width) =
            parse_pair(s).ok_or_else(|| ConfigError::BoardSize(s.to_string()))?;
        Ok(Self { length, width })
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.length, self.width)
    }
}

/// One blocked cell given on the command line: `x,y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Obstacle(pub Position);

impl FromStr for Obstacle {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_pair(s)
            .map(Obstacle)
            .ok_or_else(|| ConfigError::Obstacle(s.to_string()))
    }
}

/// Two unsigned integers separated by a single comma.
fn parse_pair(s: &str) -> Option<(u32, u32)> {
    let (a, b) = s.split_once(',')?;
    let number = |part: &str| {
        let part = part.trim();
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        part.parse().ok()
    };
    Some((number(a)?, number(b)?))
}

#[derive(FromArgs, Debug)]
/// Simulate a robot on a rectangular grid.
///
/// Reads instructions from COMMAND_FILE, or from an interactive prompt when no file is
/// given. Valid instructions are PLACE x,y,HEADING, MOVE, LEFT, RIGHT, FLIP and REPORT.
pub struct Settings {
    #[argh(positional)]
    /// file with one instruction per line. The name must have no extension.
    pub command_file: Option<PathBuf>,

    #[argh(option, short = 'b', default = "BoardSize::default()")]
    /// grid size as 'length,width'. Defaults to 5,5.
    pub board: BoardSize,

    #[argh(option, short = 'o')]
    /// a blocked cell as 'x,y'. May be repeated.
    pub obstacle: Vec<Obstacle>,

    #[argh(option, default = "LevelFilter::OFF")]
    /// diagnostics level: off, error, warn, info, debug or trace. Logs go to stderr.
    pub log_level: LevelFilter,
}

impl Settings {
    /// Build the grid described by `--board` and `--obstacle`.
    pub fn grid(&self) -> Result<Grid, GridError> {
        Grid::new(
            self.board.length,
            self.board.width,
            self.obstacle.iter().map(|o| o.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(args: &[&str]) -> Result<Settings, argh::EarlyExit> {
        Settings::from_args(&[NAME], args)
    }

    #[test]
    fn test_board_size_parse() {
        assert_eq!(
            "3,4".parse(),
            Ok(BoardSize {
                length: 3,
                width: 4
            })
        );
        assert_eq!(
            " 7 , 2 ".parse(),
            Ok(BoardSize {
                length: 7,
                width: 2
            })
        );
        for bad in ["invalid", "5", "5,5,5", "-1,5", "5,", ",5", "a,b", "5;5"] {
            assert_eq!(
                bad.parse::<BoardSize>(),
                Err(ConfigError::BoardSize(bad.to_string())),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn test_obstacle_parse() {
        assert_eq!("2,3".parse(), Ok(Obstacle((2, 3))));
        assert_eq!(
            "2".parse::<Obstacle>(),
            Err(ConfigError::Obstacle("2".to_string()))
        );
    }

    #[test]
    fn test_defaults() {
        let s = settings(&[]).unwrap();
        assert_eq!(s.command_file, None);
        assert_eq!(s.board, DEFAULT_BOARD);
        assert!(s.obstacle.is_empty());
        assert_eq!(s.log_level, LevelFilter::OFF);

        let grid = s.grid().unwrap();
        assert_eq!((grid.length(), grid.width()), (5, 5));
    }

    #[test]
    fn test_full_command_line() {
        let s = settings(&[
            "commands",
            "--board",
            "3,4",
            "-o",
            "1,1",
            "--obstacle",
            "2,0",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(s.command_file, Some(PathBuf::from("commands")));
        assert_eq!(
            s.board,
            BoardSize {
                length: 3,
                width: 4
            }
        );
        assert_eq!(s.log_level, LevelFilter::DEBUG);

        let grid = s.grid().unwrap();
        assert!(grid.has_obstacle(1, 1));
        assert!(grid.has_obstacle(2, 0));
        assert!(!grid.has_obstacle(0, 0));
    }

    #[test]
    fn test_bad_board_is_an_early_exit() {
        let err = settings(&["--board", "five"]).unwrap_err();
        assert!(err.status.is_err());
    }

    #[test]
    fn test_zero_board_fails_at_grid_construction() {
        let s = settings(&["--board", "0,5"]).unwrap();
        assert_eq!(
            s.grid(),
            Err(GridError::ZeroDimension {
                length: 0,
                width: 5
            })
        );
    }
}
