use crate::error::{Error, Result};
use std::{fmt::Display, io::Write};

/// Writes indented lines to an output sink.
///
/// Holds no nesting state: every call names its own depth.
pub(crate) struct LineWriter<'w> {
    out: &'w mut dyn Write,
    indent_width: usize,
    lines_written: usize,
}

impl<'w> LineWriter<'w> {
    pub(crate) fn new(out: &'w mut dyn Write, indent_width: usize) -> Self {
        Self {
            out,
            indent_width,
            lines_written: 0,
        }
    }

    /// Writes `text` prefixed by `depth` indentation levels.
    pub(crate) fn line(&mut self, depth: usize, text: impl Display) -> Result<()> {
        let width = depth * self.indent_width;
        writeln!(self.out, "{:width$}{text}", "").map_err(|e| Error::output(&e))?;
        self.lines_written += 1;
        Ok(())
    }

    /// Writes an empty line.
    pub(crate) fn blank(&mut self) -> Result<()> {
        self.line(0, "")
    }

    pub(crate) fn finish(self) -> Result<usize> {
        self.out.flush().map_err(|e| Error::output(&e))?;
        Ok(self.lines_written)
    }
}
