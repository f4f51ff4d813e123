//! Terminal host: draws animation frames on the alternate screen.

mod tty;

pub use tty::{is_tty, terminal_size};

use crate::ansi::{self, sync};
use crate::view::{display_width, truncate};
use std::io::{self, Write};

/// Full-screen frame writer.
///
/// [`enter`](Self::enter) switches to the alternate screen and hides the
/// cursor; dropping the screen (or [`leave`](Self::leave)) restores both.
pub struct Screen<W: Write> {
    writer: W,
    width: u16,
    height: u16,
    active: bool,
}

impl<W: Write> Screen<W> {
    /// Create a screen of `width` x `height` cells. Nothing is written yet.
    pub fn new(writer: W, width: u16, height: u16) -> Self {
        Self {
            writer,
            width,
            height,
            active: false,
        }
    }

    /// Rows available for text above the status line.
    #[must_use]
    pub const fn text_rows(&self) -> u16 {
        self.height.saturating_sub(1)
    }

    /// The underlying writer.
    pub const fn writer(&self) -> &W {
        &self.writer
    }

    /// Switch to the alternate screen and hide the cursor.
    pub fn enter(&mut self) -> io::Result<()> {
        if !self.active {
            self.writer.write_all(ansi::ALT_SCREEN_ON.as_bytes())?;
            self.writer.write_all(ansi::CURSOR_HIDE.as_bytes())?;
            self.writer.write_all(ansi::CLEAR_SCREEN.as_bytes())?;
            self.writer.flush()?;
            self.active = true;
        }
        Ok(())
    }

    /// Restore the main screen and the cursor.
    pub fn leave(&mut self) -> io::Result<()> {
        if self.active {
            self.active = false;
            self.writer.write_all(ansi::RESET.as_bytes())?;
            self.writer.write_all(ansi::CURSOR_SHOW.as_bytes())?;
            self.writer.write_all(ansi::ALT_SCREEN_OFF.as_bytes())?;
            self.writer.flush()?;
        }
        Ok(())
    }

    /// Draw one frame: text rows from the top, `status` on the last row.
    ///
    /// Lines beyond the available rows or columns are cut off. Short rows
    /// are cleared to their end so a previous frame leaves no residue.
    pub fn draw(&mut self, lines: &[String], status: &str) -> io::Result<()> {
        let width = usize::from(self.width);
        let mut out = String::new();
        out.push_str(sync::BEGIN);
        out.push_str(ansi::CURSOR_HOME);

        for row in 0..self.text_rows() {
            out.push_str(&ansi::move_to(row, 0));
            let line = lines.get(usize::from(row)).map_or("", String::as_str);
            push_row(&mut out, line, width);
        }

        if self.height > 0 {
            out.push_str(&ansi::move_to(self.height - 1, 0));
            out.push_str(ansi::INVERSE);
            push_row(&mut out, status, width);
            out.push_str(ansi::RESET);
        }

        out.push_str(sync::END);
        self.writer.write_all(out.as_bytes())?;
        self.writer.flush()
    }
}

/// Write `text` cut to `width`, clearing the rest of the row. A row that
/// fills the width is not cleared, since the cursor sits on its last cell.
fn push_row(out: &mut String, text: &str, width: usize) {
    let text = truncate(text, width);
    out.push_str(text);
    if display_width(text) < width {
        out.push_str(ansi::CLEAR_LINE_RIGHT);
    }
}

impl<W: Write> Drop for Screen<W> {
    fn drop(&mut self) {
        let _ = self.leave();
    }
}
