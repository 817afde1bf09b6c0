use crate::command::Command;
use crate::error::ParseError;
use crate::grid::Grid;
use crate::robot::{Outcome, Rejection, Robot};
use anyhow::Context;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::Write;
use tracing::{debug, info, warn};

const PROMPT: &str = "robot> ";

/// Interactive-only words that end the session. They are not robot commands.
const EXIT_WORDS: [&str; 2] = ["EXIT", "QUIT"];

/// What happened to one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Blank line, nothing to do.
    Skipped,
    /// The line is not a valid instruction and was dropped.
    Invalid(ParseError),
    /// The line parsed; the robot applied, reported or rejected it.
    Executed(Command, Outcome),
}

/// Feeds instruction lines to a [`Robot`] on a [`Grid`], in order.
///
/// Reports are written to the output sink passed to each call, one `x,y,HEADING` line
/// per `REPORT`. Rejected lines and commands are logged and otherwise ignored.
///
/// Example
/// ```
/// use grid_robot::{Grid, Interpreter};
/// let mut robot = Interpreter::new(Grid::empty(5, 5).unwrap());
/// let mut out = Vec::new();
/// robot
///     .run_lines(["PLACE 1,2,EAST", "MOVE", "LEFT", "RIGHT", "REPORT"], &mut out)
///     .unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "2,2,EAST\n");
/// ```
pub struct Interpreter {
    grid: Grid,
    robot: Robot,
}

impl Interpreter {
    /// Create an interpreter with an unplaced robot.
    pub fn new(grid: Grid) -> Self {
        info!(
            "Grid initialized with length: {} and width: {}",
            grid.length(),
            grid.width()
        );
        Self {
            grid,
            robot: Robot::new(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn robot(&self) -> &Robot {
        &self.robot
    }

    /// Parse and apply a single line.
    ///
    /// Only failures to write a report are returned as errors.
    pub fn execute_line(
        &mut self,
        line: &str,
        out: &mut dyn Write,
    ) -> anyhow::Result<LineOutcome> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(LineOutcome::Skipped);
        }

        debug!("Executing command: {line}");
        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(e) => {
                warn!("Invalid command {line:?}: {e}");
                return Ok(LineOutcome::Invalid(e));
            }
        };

        let outcome = self.robot.apply(command, &self.grid);
        match outcome {
            Outcome::Applied => info!("{command}: robot now at {:?}", self.robot.state()),
            Outcome::Reported(placement) => {
                info!("{placement}");
                writeln!(out, "{placement}").context("failed to write report")?;
            }
            Outcome::Rejected(Rejection::NotPlaced) => {
                debug!("Robot is not placed on the grid, ignoring {command}")
            }
            Outcome::Rejected(reason) => warn!("{command} rejected: {reason}"),
        }
        Ok(LineOutcome::Executed(command, outcome))
    }

    /// Run a batch of lines in order, then flush `out`.
    pub fn run_lines<I, S>(&mut self, lines: I, out: &mut dyn Write) -> anyhow::Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.execute_line(line.as_ref(), out)?;
        }
        out.flush().context("failed to flush output")?;
        Ok(())
    }

    /// Read-Eval-Print Loop over an interactive terminal.
    ///
    /// Ends on `EXIT`/`QUIT`, Ctrl-C or Ctrl-D. Output is flushed after every line, so
    /// an interrupt never loses a report.
    pub fn repl(&mut self, out: &mut dyn Write) -> anyhow::Result<()> {
        let mut rl = DefaultEditor::new().context("failed to open line editor")?;

        loop {
            match rl.readline(PROMPT) {
                Ok(line) => {
                    let line = line.trim();
                    if EXIT_WORDS.contains(&line) {
                        break;
                    }
                    if !line.is_empty() {
                        rl.add_history_entry(line)
                            .context("failed to record history")?;
                    }
                    self.execute_line(line, out)?;
                    out.flush().context("failed to flush output")?;
                }
                Err(ReadlineError::Interrupted) => {
                    info!("Interrupted");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    info!("Eof");
                    break;
                }
                Err(err) => return Err(err).context("failed to read line"),
            }
        }

        out.flush().context("failed to flush output")?;
        Ok(())
    }
}
