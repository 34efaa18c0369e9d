//! Output buffering and full-frame repaint.
//!
//! A frame is written into an [`OutputBuffer`] first and flushed with a
//! single write, so the terminal never shows a half-painted frame.

use std::io::{self, Write};

use super::ansi;

// =============================================================================
// OutputBuffer
// =============================================================================

/// A buffer that accumulates output for batch writing.
#[derive(Debug, Default)]
pub struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    /// Create a new output buffer with default capacity.
    pub fn new() -> Self {
        Self::with_capacity(16384)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.data.extend_from_slice(s.as_bytes());
    }

    /// Write the accumulated bytes to `writer` and clear the buffer.
    pub fn flush_to<W: Write>(&mut self, writer: &mut W) -> io::Result<()> {
        if self.data.is_empty() {
            return Ok(());
        }
        writer.write_all(&self.data)?;
        writer.flush()?;
        self.data.clear();
        Ok(())
    }

    /// Get the accumulated data as a string (lossy).
    pub fn as_str(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.data)
    }
}

impl Write for OutputBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.data.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// =============================================================================
// Frame painting
// =============================================================================

/// Queue a full repaint of `lines` into `out`.
///
/// Every line gets an absolute cursor position and a line clear before its
/// content; whatever a previous, taller frame left below is erased.
/// Nothing is diffed against the previous frame.
pub fn paint_frame<S: AsRef<str>>(out: &mut OutputBuffer, lines: &[S]) -> io::Result<()> {
    for (row, line) in lines.iter().enumerate() {
        ansi::cursor_to(out, 0, u16::try_from(row).unwrap_or(u16::MAX))?;
        ansi::erase_line(out)?;
        out.write_str(line.as_ref());
    }

    ansi::cursor_to(out, 0, u16::try_from(lines.len()).unwrap_or(u16::MAX))?;
    ansi::erase_down(out)
}
