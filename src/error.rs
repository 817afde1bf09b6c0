//! Error types for the fallible edges of the crate.
//!
//! Only construction and configuration can fail. Once a session is running, rejected
//! instructions are reported as data (see [`crate::robot::Outcome`]), not as errors.

use std::path::PathBuf;
use thiserror::Error;

/// The grid could not be built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Both dimensions must be at least one cell.
    #[error("grid dimensions must be positive, got {length}x{width}")]
    ZeroDimension { length: u32, width: u32 },
}

/// Why a raw instruction line did not produce a [`crate::Command`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Nothing but whitespace.
    #[error("empty instruction")]
    Empty,
    /// Not one of the known instruction tokens.
    #[error("unknown instruction: {0:?}")]
    Unknown(String),
    /// `PLACE` arguments did not split into exactly three fields.
    #[error("PLACE expects 3 comma separated fields, got {0}")]
    FieldCount(usize),
    /// A coordinate that is not a plain non-negative decimal integer.
    #[error("invalid coordinate: {0:?}")]
    Coordinate(String),
    /// A heading that is not one of `NORTH`, `SOUTH`, `EAST`, `WEST`.
    #[error("invalid heading: {0:?}")]
    Heading(String),
}

/// Invalid command line settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board size must be in the format 'length,width', got {0:?}")]
    BoardSize(String),
    #[error("obstacle must be in the format 'x,y', got {0:?}")]
    Obstacle(String),
}

/// The command file cannot be used as an instruction source.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("command file is required")]
    Missing,
    #[error("command file {0} does not exist")]
    NotFound(PathBuf),
    #[error("command file {0} is not readable")]
    NotReadable(PathBuf),
    /// Command files are plain names without an extension.
    #[error("command file type is not valid: {0}")]
    InvalidName(PathBuf),
    #[error("command file size is too large: {size} bytes (limit {limit})")]
    TooLarge { size: u64, limit: u64 },
    #[error("command file {0} must be a plain text file")]
    NotText(PathBuf),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
