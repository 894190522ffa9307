//! Whitespace-token input with `scanf`-like recovery semantics.
//!
//! Each read consumes one token, pulling further lines from the underlying
//! reader as needed. A token that fails to parse is consumed and reported as
//! [`Input::Malformed`]; callers then use [`TokenReader::discard_line`] to drop
//! whatever else was typed on that line before re-prompting. Bytes that are
//! not UTF-8 become U+FFFD, so such tokens are malformed rather than fatal.

use std::collections::VecDeque;
use std::io::BufRead;
use std::str::FromStr;

use anyhow::{Context, Result};
use tracing::trace;

/// Outcome of a single typed read.
#[derive(Debug, Clone, PartialEq)]
pub enum Input<T> {
    /// The next token parsed as `T`.
    Value(T),
    /// The next token did not parse; carries the raw token.
    Malformed(String),
    /// The reader hit end of input before any token.
    Closed,
}

/// Tokenizing reader over any buffered input.
#[derive(Debug)]
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Return the next whitespace-separated token, or `None` at end of input.
    ///
    /// Blank lines are skipped.
    pub fn next_token(&mut self) -> Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = Vec::new();
            let read = self
                .reader
                .read_until(b'\n', &mut line)
                .context("read stdin")?;
            if read == 0 {
                return Ok(None);
            }
            self.pending.extend(
                String::from_utf8_lossy(&line)
                    .split_whitespace()
                    .map(str::to_string),
            );
        }
        Ok(self.pending.pop_front())
    }

    /// Read the next token and parse it as `T`.
    pub fn read<T: FromStr>(&mut self) -> Result<Input<T>> {
        let Some(token) = self.next_token()? else {
            return Ok(Input::Closed);
        };
        match token.parse::<T>() {
            Ok(value) => Ok(Input::Value(value)),
            Err(_) => {
                trace!(token = %token, "token did not parse");
                Ok(Input::Malformed(token))
            }
        }
    }

    /// Drop the tokens still pending from the current line.
    ///
    /// Returns how many tokens were dropped.
    pub fn discard_line(&mut self) -> usize {
        let dropped = self.pending.len();
        self.pending.clear();
        dropped
    }
}
