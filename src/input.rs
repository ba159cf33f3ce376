//! Input handling abstractions for the console game.

use anyhow::Context;
use error::GameError;
use std::collections::VecDeque;
use std::io::{self, BufRead, StdinLock};

/// Trait for input sources
pub trait InputSource {
    /// Next whitespace-delimited token, `None` once input is exhausted
    fn next_token(&mut self) -> anyhow::Result<Option<String>>;
}

/// Turn a numeric selector token into a menu entry or action.
///
/// Anything the `parse` function rejects becomes `GameError::InvalidChoice`.
pub fn parse_selector<T>(
    token: &str,
    parse: impl FnOnce(&str) -> Option<T>,
) -> Result<T, GameError> {
    parse(token).ok_or_else(|| GameError::InvalidChoice(token.to_string()))
}

/// Line-buffered console input, split into tokens.
///
/// Several answers typed on one line are handed out one at a time, the way a
/// player would expect from `1 Hero` at the main menu.
pub struct ConsoleInput<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl ConsoleInput<StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> ConsoleInput<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }
}

impl<R: BufRead> InputSource for ConsoleInput<R> {
    fn next_token(&mut self) -> anyhow::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            let mut line = String::new();
            let read = self
                .reader
                .read_line(&mut line)
                .context("Failed to read from console")?;
            if read == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }
}
