//! Interactive console: token input plus separate output and error streams.

use std::io::{self, BufRead, StdinLock, Stderr, Stdout, Write};
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::input::{Input, TokenReader};

/// Input reader, program output, and user-facing error stream.
///
/// Session loops are generic over the three streams so they can be driven by
/// in-memory buffers in tests.
#[derive(Debug)]
pub struct Console<R, O, E> {
    input: TokenReader<R>,
    out: O,
    err: E,
}

/// Console bound to the process stdio.
pub type StdConsole = Console<StdinLock<'static>, Stdout, Stderr>;

impl StdConsole {
    pub fn stdio() -> Self {
        Console::new(io::stdin().lock(), io::stdout(), io::stderr())
    }
}

impl<R: BufRead, O: Write, E: Write> Console<R, O, E> {
    pub fn new(input: R, out: O, err: E) -> Self {
        Self {
            input: TokenReader::new(input),
            out,
            err,
        }
    }

    /// Write `text` without a newline and flush so it shows before a blocking read.
    pub fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.out, "{text}").context("write prompt")?;
        self.out.flush().context("flush stdout")
    }

    /// Write a line of program output.
    pub fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.out, "{line}").context("write stdout")
    }

    /// Write a line to the error stream.
    pub fn complain(&mut self, line: &str) -> Result<()> {
        writeln!(self.err, "{line}").context("write stderr")?;
        self.err.flush().context("flush stderr")
    }

    pub fn read<T: FromStr>(&mut self) -> Result<Input<T>> {
        self.input.read()
    }

    pub fn discard_line(&mut self) -> usize {
        self.input.discard_line()
    }

    /// Flush program output; called once a session finishes.
    pub fn finish(&mut self) -> Result<()> {
        self.out.flush().context("flush stdout")
    }

    pub fn into_parts(self) -> (O, E) {
        (self.out, self.err)
    }
}
