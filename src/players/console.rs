//! Human player that types positions at the console.

use super::Player;
use anyhow::{Context, Result, bail};
use noughts_core::{Board, Player as Mark, Position};
use std::io::{BufRead, Stdin, Stdout, Write};
use tracing::{debug, instrument};

/// Line-at-a-time input for console players.
pub trait LineSource {
    /// Appends the next line to `buf`, returning the bytes read (0 at end of input).
    fn next_line(&mut self, buf: &mut String) -> std::io::Result<usize>;
}

impl<T: BufRead> LineSource for T {
    fn next_line(&mut self, buf: &mut String) -> std::io::Result<usize> {
        self.read_line(buf)
    }
}

/// Process stdin, locked only while a line is read.
///
/// Both seats can hold one, so two console players share the terminal.
#[derive(Debug)]
pub struct SharedStdin(Stdin);

impl SharedStdin {
    /// Wraps the process stdin.
    pub fn new() -> Self {
        Self(std::io::stdin())
    }
}

impl Default for SharedStdin {
    fn default() -> Self {
        Self::new()
    }
}

impl LineSource for SharedStdin {
    fn next_line(&mut self, buf: &mut String) -> std::io::Result<usize> {
        self.0.read_line(buf)
    }
}

/// Human player reading `(row, col)` positions line by line.
///
/// Input that does not parse, or names a cell that is not open, is reported
/// and asked for again. Only a validated open position reaches the board.
pub struct ConsolePlayer<R, W> {
    name: String,
    mark: Mark,
    input: R,
    output: W,
}

impl ConsolePlayer<SharedStdin, Stdout> {
    /// Creates a console player on the process stdin and stdout.
    pub fn stdio(mark: Mark) -> Self {
        Self::new(mark, SharedStdin::new(), std::io::stdout())
    }
}

impl<R: LineSource, W: Write> ConsolePlayer<R, W> {
    /// Creates a console player over arbitrary input and output.
    pub fn new(mark: Mark, input: R, output: W) -> Self {
        Self {
            name: format!("Console {}", mark),
            mark,
            input,
            output,
        }
    }

    /// Reads one line, `None` once input is exhausted.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .next_line(&mut line)
            .context("Failed to read from console")?;
        Ok((read > 0).then_some(line))
    }
}

impl<R: LineSource, W: Write> Player for ConsolePlayer<R, W> {
    #[instrument(skip(self, board), fields(mark = %self.mark))]
    fn get_move(&mut self, board: &Board, turn_index: usize) -> Result<Position> {
        let open = board.open_positions();
        if open.is_empty() {
            bail!("No open positions left to play");
        }

        loop {
            write!(self.output, "Enter a position tuple of the form (row, col): ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                bail!("Console input closed");
            };

            let position = match line.parse::<Position>() {
                Ok(position) => position,
                Err(e) => {
                    debug!(input = %line.trim(), "Unparsable position");
                    writeln!(self.output, "{}", e)?;
                    continue;
                }
            };

            if board.is_open(position) {
                return Ok(position);
            }

            let listed: Vec<String> = open.iter().map(ToString::to_string).collect();
            writeln!(
                self.output,
                "The position {} is not open for play. The open positions are:",
                position
            )?;
            writeln!(self.output, "{}", listed.join(", "))?;
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn mark(&self) -> Mark {
        self.mark
    }
}

/// Asks whether to play another game.
///
/// Accepts `y`/`yes` and `n`/`no` in any case and asks again otherwise.
/// Closed input counts as no.
pub fn ask_play_again<R: LineSource, W: Write>(input: &mut R, output: &mut W) -> Result<bool> {
    loop {
        write!(output, "Would you like to play again? [y/n]: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.next_line(&mut line)? == 0 {
            return Ok(false);
        }

        match line.trim().to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => writeln!(output, "Please answer y or n.")?,
        }
    }
}
