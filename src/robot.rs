//! The robot state machine.
//!
//! [`RobotState::next`] is a pure transition function: it computes the complete next
//! state for a command, or the reason the command is rejected, without touching the
//! current state. [`Robot::apply`] commits accepted transitions, so a rejected command
//! can never leave the robot half-updated.

use crate::command::Command;
use crate::grid::{Grid, Position};
use crate::heading::Heading;
use std::fmt;
use thiserror::Error;

/// Where the robot stands and which way it faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub x: u32,
    pub y: u32,
    pub heading: Heading,
}

impl Placement {
    pub fn position(&self) -> Position {
        (self.x, self.y)
    }
}

/// Formats as the `REPORT` line, e.g. `2,2,EAST`.
impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.x, self.y, self.heading)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RobotState {
    #[default]
    Unplaced,
    /// Always an in-bounds, obstacle-free cell of the grid it was placed on.
    Placed(Placement),
}

/// Why a well-formed command had no effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("robot is not placed on the grid")]
    NotPlaced,
    /// The target cell is outside the grid. Coordinates are `None` when the step would
    /// go below zero.
    #[error("{} is outside the grid", fmt_target(.x, .y))]
    OutOfBounds { x: Option<u32>, y: Option<u32> },
    #[error("{x},{y} is blocked by an obstacle")]
    Obstacle { x: u32, y: u32 },
}

fn fmt_target(x: &Option<u32>, y: &Option<u32>) -> String {
    let show = |c: &Option<u32>| c.map_or_else(|| "-1".to_string(), |c| c.to_string());
    format!("{},{}", show(x), show(y))
}

/// An accepted command: the state to adopt and, for `REPORT`, what to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub state: RobotState,
    pub report: Option<Placement>,
}

/// What applying a command did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Reported(Placement),
    Rejected(Rejection),
}

impl RobotState {
    pub fn is_placed(&self) -> bool {
        matches!(self, RobotState::Placed(_))
    }

    pub fn placement(&self) -> Option<Placement> {
        match self {
            RobotState::Unplaced => None,
            RobotState::Placed(p) => Some(*p),
        }
    }

    /// Compute the state that follows `command` on `grid`.
    pub fn next(&self, command: Command, grid: &Grid) -> Result<Transition, Rejection> {
        let turned = |current: Placement, heading| Transition::to(Placement { heading, ..current });
        match (command, *self) {
            (Command::Place { x, y, heading }, _) => {
                check_target(grid, x, y)?;
                Ok(Transition::to(Placement { x, y, heading }))
            }
            (_, RobotState::Unplaced) => Err(Rejection::NotPlaced),
            (Command::Move, RobotState::Placed(current)) => {
                let Some((x, y)) = current.heading.step(current.x, current.y) else {
                    return Err(out_of_bounds_step(current));
                };
                check_target(grid, x, y)?;
                Ok(Transition::to(Placement { x, y, ..current }))
            }
            (Command::Left, RobotState::Placed(current)) => {
                Ok(turned(current, current.heading.left()))
            }
            (Command::Right, RobotState::Placed(current)) => {
                Ok(turned(current, current.heading.right()))
            }
            (Command::Flip, RobotState::Placed(current)) => {
                Ok(turned(current, current.heading.flip()))
            }
            (Command::Report, RobotState::Placed(current)) => Ok(Transition {
                state: *self,
                report: Some(current),
            }),
        }
    }
}

impl Transition {
    fn to(placement: Placement) -> Self {
        Self {
            state: RobotState::Placed(placement),
            report: None,
        }
    }
}

fn check_target(grid: &Grid, x: u32, y: u32) -> Result<(), Rejection> {
    if !grid.contains(x, y) {
        return Err(Rejection::OutOfBounds {
            x: Some(x),
            y: Some(y),
        });
    }
    if grid.has_obstacle(x, y) {
        return Err(Rejection::Obstacle { x, y });
    }
    Ok(())
}

/// The step left the unsigned coordinate space: report the axis that went negative.
fn out_of_bounds_step(from: Placement) -> Rejection {
    match from.heading {
        Heading::West => Rejection::OutOfBounds {
            x: None,
            y: Some(from.y),
        },
        _ => Rejection::OutOfBounds {
            x: Some(from.x),
            y: None,
        },
    }
}

/// A single robot, owning its state.
#[derive(Debug, Clone, Default)]
pub struct Robot {
    state: RobotState,
}

impl Robot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> RobotState {
        self.state
    }

    /// Apply a command, committing the new state only if the command is accepted.
    pub fn apply(&mut self, command: Command, grid: &Grid) -> Outcome {
        match self.state.next(command, grid) {
            Ok(Transition {
                state,
                report: Some(placement),
            }) => {
                self.state = state;
                Outcome::Reported(placement)
            }
            Ok(Transition {
                state,
                report: None,
            }) => {
                self.state = state;
                Outcome::Applied
            }
            Err(rejection) => Outcome::Rejected(rejection),
        }
    }
}
