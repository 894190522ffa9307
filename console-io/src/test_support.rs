//! Test-only helpers for driving session loops from in-memory buffers.

use std::io::Cursor;

use crate::console::Console;

/// Console fed from a fixed input script, capturing stdout and stderr.
pub type ScriptedConsole = Console<Cursor<Vec<u8>>, Vec<u8>, Vec<u8>>;

impl ScriptedConsole {
    pub fn with_input(input: &str) -> Self {
        Self::with_bytes(input.as_bytes())
    }

    /// Like [`Self::with_input`], for scripts that are not valid UTF-8.
    pub fn with_bytes(input: &[u8]) -> Self {
        Console::new(Cursor::new(input.to_vec()), Vec::new(), Vec::new())
    }

    /// Consume the console and return captured `(stdout, stderr)` as text.
    pub fn into_transcript(self) -> (String, String) {
        let (out, err) = self.into_parts();
        (
            String::from_utf8_lossy(&out).into_owned(),
            String::from_utf8_lossy(&err).into_owned(),
        )
    }
}
