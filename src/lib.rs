//! A small robot simulator on a rectangular grid.
//!
//! The robot is driven by a textual instruction stream, one instruction per line:
//! `PLACE x,y,HEADING`, `MOVE`, `LEFT`, `RIGHT`, `FLIP` and `REPORT`. Lines are parsed
//! into a typed [`Command`] and applied to the [`Robot`] state machine, which consults
//! an immutable [`Grid`] for bounds and obstacles. Invalid lines and illegal moves are
//! never fatal: they are dropped and the robot state stays exactly as it was.
//!
//! The main entry point is [`Interpreter`], which feeds lines from a command file or an
//! interactive prompt through the parser and the robot, writing `REPORT` output to any
//! [`std::io::Write`] sink.

pub mod command;
pub mod config;
pub mod error;
pub mod grid;
pub mod heading;
mod interpreter;
pub mod robot;
pub mod source;

pub use command::{Command, parse};
pub use grid::{Grid, Position};
pub use heading::Heading;
pub use robot::{Outcome, Placement, Rejection, Robot, RobotState};

/// Just a convenient re-export of the line-driven runner.
///
/// See [`Interpreter`] for the high-level API and examples.
pub use interpreter::{Interpreter, LineOutcome};
