//! Console adapters: stdin for actions, stdout for narration

use std::io::{self, BufRead, Write};

use hex_core::{ActionSource, Narrator};

/// Reads one action per line, showing a `> ` prompt first
///
/// Bytes that are not UTF-8 are replaced rather than rejected, so a garbled
/// line is just a key no room knows.
pub struct ConsoleInput<R, W> {
    reader: R,
    prompt: W,
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(reader: R, prompt: W) -> Self {
        Self { reader, prompt }
    }
}

impl<R: BufRead, W: Write> ActionSource for ConsoleInput<R, W> {
    fn next_input(&mut self) -> io::Result<Option<String>> {
        if let Err(err) = write!(self.prompt, "> ").and_then(|_| self.prompt.flush()) {
            tracing::warn!(%err, "could not show prompt");
        }

        let mut line = Vec::new();
        if self.reader.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&line).into_owned()))
    }
}

/// Prints each narration line
pub struct ConsoleNarrator<W> {
    out: W,
}

impl<W: Write> ConsoleNarrator<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Narrator for ConsoleNarrator<W> {
    fn narrate(&mut self, line: &str) {
        if let Err(err) = writeln!(self.out, "{}", line) {
            tracing::warn!(%err, "could not write narration");
        }
    }
}
