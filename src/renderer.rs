//! Line-oriented text output.

use anyhow::Context;
use std::io::{self, Stderr, Stdout, Write};

/// Trait for presenting game text to the player
pub trait Renderer {
    /// Print one line of game text
    fn line(&mut self, text: &str) -> anyhow::Result<()>;

    /// Print a prompt without a trailing newline
    fn prompt(&mut self, text: &str) -> anyhow::Result<()>;

    /// Report a recoverable error to the player
    fn error(&mut self, text: &str) -> anyhow::Result<()>;
}

/// Writes game text to one stream and errors to another
pub struct ConsoleRenderer<O, E> {
    pub out: O,
    pub err: E,
}

impl ConsoleRenderer<Stdout, Stderr> {
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> ConsoleRenderer<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }
}

impl<O: Write, E: Write> Renderer for ConsoleRenderer<O, E> {
    fn line(&mut self, text: &str) -> anyhow::Result<()> {
        writeln!(self.out, "{}", text).context("Failed to write to console")
    }

    fn prompt(&mut self, text: &str) -> anyhow::Result<()> {
        write!(self.out, "{}", text).context("Failed to write to console")?;
        self.out.flush().context("Failed to flush console")
    }

    fn error(&mut self, text: &str) -> anyhow::Result<()> {
        // stdout first so the error lands after any text already printed
        self.out.flush().context("Failed to flush console")?;
        writeln!(self.err, "{}", text).context("Failed to write to console")
    }
}
