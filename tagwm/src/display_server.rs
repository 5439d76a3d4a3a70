//! A display server speaking line delimited JSON.
//!
//! Every line read is one [`DisplayEvent`], every line written one [`DisplayAction`]. The
//! process on the other end owns the actual display connection.
use std::io::{self, BufRead, BufWriter, StdinLock, Stdout, Write};
use tagwm_core::errors::Result;
use tagwm_core::{DisplayAction, DisplayEvent, DisplayServer};

#[derive(Debug)]
pub struct JsonLines<R, W> {
    reader: R,
    writer: W,
    closed: bool,
}

pub type StdioDisplayServer = JsonLines<StdinLock<'static>, BufWriter<Stdout>>;

impl<R: BufRead, W: Write> JsonLines<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            closed: false,
        }
    }

    /// The next event that parses. Blank and malformed lines are skipped, `None` at the end of
    /// the input.
    pub fn read_event(&mut self) -> Option<DisplayEvent> {
        let mut line = String::new();
        loop {
            line.clear();
            match self.reader.read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(err) => {
                    tracing::error!("Unable to read the next event: {err}");
                    return None;
                }
            }
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match serde_json::from_str(line) {
                Ok(event) => return Some(event),
                Err(err) => tracing::warn!("Ignoring malformed event {line:?}: {err}"),
            }
        }
    }

    /// # Errors
    ///
    /// Fails when the action cannot be serialized or written.
    pub fn write_action(&mut self, act: &DisplayAction) -> Result<()> {
        serde_json::to_writer(&mut self.writer, act)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn close(&mut self, err: &dyn std::fmt::Display) {
        if !self.closed {
            tracing::error!("Lost the display server: {err}");
        }
        self.closed = true;
    }
}

impl DisplayServer for StdioDisplayServer {
    fn new(_: &impl tagwm_core::Config) -> Self {
        JsonLines::new(io::stdin().lock(), BufWriter::new(io::stdout()))
    }

    fn next_event(&mut self) -> Option<DisplayEvent> {
        if self.closed {
            return None;
        }
        self.read_event()
    }

    fn execute_action(&mut self, act: DisplayAction) -> Option<DisplayEvent> {
        if let Err(err) = self.write_action(&act) {
            self.close(&err);
        }
        None
    }

    fn flush(&mut self) {
        if let Err(err) = self.writer.flush() {
            self.close(&err);
        }
    }
}
