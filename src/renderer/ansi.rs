//! ANSI escape sequences for terminal control and text styling.
//!
//! - [`encode`] wraps a text fragment in SGR start/reset codes
//! - [`fill`] builds background-coloured padding
//! - the `write`-style helpers emit the control sequences the run loop needs

use std::io::Write;

use crate::types::{Color, Style};

// =============================================================================
// Constants
// =============================================================================

/// Control Sequence Introducer.
pub const CSI: &str = "\x1b[";

/// Full SGR reset.
pub const RESET: &str = "\x1b[0m";

// =============================================================================
// Styling
// =============================================================================

/// Wrap `text` in a style-start sequence and a trailing full reset.
///
/// Codes are emitted attributes first (bold before anything else), then
/// foreground, then background. An empty style still produces `ESC[m`, so
/// every fragment goes through the same escape grammar.
pub fn encode(text: &str, style: Style) -> String {
    let codes: Vec<String> = style
        .attrs
        .codes()
        .chain(style.fg.map(|c| c.fg_code()))
        .chain(style.bg.map(|c| c.bg_code()))
        .map(|code| code.to_string())
        .collect();

    format!("{CSI}{}m{text}{RESET}", codes.join(";"))
}

/// `width` background-filled blank cells.
pub fn fill(width: usize, bg: Option<Color>) -> String {
    encode(" ", Style::fill(bg)).repeat(width)
}

// =============================================================================
// Cursor
// =============================================================================

/// Move cursor to absolute position (0-indexed arguments, 1-indexed wire format).
#[inline]
pub fn cursor_to<W: Write>(w: &mut W, x: u16, y: u16) -> std::io::Result<()> {
    write!(w, "\x1b[{};{}H", y + 1, x + 1)
}

#[inline]
pub fn cursor_hide<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[?25l")
}

#[inline]
pub fn cursor_show<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[?25h")
}

// =============================================================================
// Erasing
// =============================================================================

/// Erase the entire current line.
#[inline]
pub fn erase_line<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[2K")
}

/// Erase from the cursor to the end of the screen.
#[inline]
pub fn erase_down<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[J")
}

/// Clear scrollback and screen, then home the cursor.
pub fn clear_screen<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[3J\x1b[2J\x1b[H")
}

// =============================================================================
// Alternate screen
// =============================================================================

pub fn enter_alt_screen<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[?1049h")
}

pub fn exit_alt_screen<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[?1049l")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Attr;

    #[test]
    fn encode_unstyled_still_wraps() {
        assert_eq!(encode("hi", Style::new()), "\x1b[mhi\x1b[0m");
    }

    #[test]
    fn encode_bold_before_color() {
        assert_eq!(
            encode("hi", Style::new().fg(Color::Yellow).bold()),
            "\x1b[1;33mhi\x1b[0m"
        );
    }

    #[test]
    fn encode_background_and_attrs() {
        let style = Style::new().bg(Color::Blue).attrs(Attr::UNDERLINE | Attr::BOLD);
        assert_eq!(encode("x", style), "\x1b[1;4;44mx\x1b[0m");
    }

    #[test]
    fn fill_repeats_styled_space() {
        assert_eq!(fill(0, None), "");
        assert_eq!(fill(2, Some(Color::White)), "\x1b[47m \x1b[0m\x1b[47m \x1b[0m");
    }

    #[test]
    fn control_sequences() {
        let mut out = Vec::new();
        cursor_to(&mut out, 0, 2).unwrap();
        erase_line(&mut out).unwrap();
        assert_eq!(out, b"\x1b[3;1H\x1b[2K");
    }
}
