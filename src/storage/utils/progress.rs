use crate::storage::constants::{PROGRESS_LABEL, PROGRESS_MARKER};
use std::io::Write;

/// Receives liveness notifications while an upload worker is running.
pub trait ProgressReporter {
    /// Called once before the worker starts.
    fn start(&mut self);
    /// Called on every progress interval that elapses while the worker runs.
    fn tick(&mut self);
    /// Called once after the worker has stopped, successfully or not.
    fn finish(&mut self);
}

/// A minimal progress reporter that prints a label followed by one marker
/// character per interval.
pub struct ConsoleProgressReporter<W: Write> {
    out: W,
}

impl<W: Write> ConsoleProgressReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn emit(&mut self, text: impl std::fmt::Display) {
        // Best effort: a closed stdout must not fail the upload.
        let _ = write!(self.out, "{text}");
        let _ = self.out.flush();
    }
}

impl<W: Write> ProgressReporter for ConsoleProgressReporter<W> {
    fn start(&mut self) {
        self.emit(PROGRESS_LABEL);
    }

    fn tick(&mut self) {
        self.emit(PROGRESS_MARKER);
    }

    fn finish(&mut self) {
        self.emit('\n');
    }
}
