//! Core types for tad.
//!
//! These types are shared by the layout nodes, the navigator and the renderer.

use std::fmt;

// =============================================================================
// Focus
// =============================================================================

/// Address of one interactive cell in the sparse navigation grid.
///
/// The grid is unbounded and may use negative indices; [`crate::Bounds`]
/// decides which part of it arrow keys can reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Focus {
    pub row: i32,
    pub col: i32,
}

impl Focus {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

impl From<(i32, i32)> for Focus {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Focus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Arrow direction delivered to locked-movement subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

// =============================================================================
// Color
// =============================================================================

/// The 16-colour terminal palette.
///
/// The same colour is emitted as a foreground (30-37, 90-97) or a
/// background (40-47, 100-107) SGR code depending on where it is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Color {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
    Gray = 8,
    BrightRed = 9,
    BrightGreen = 10,
    BrightYellow = 11,
    BrightBlue = 12,
    BrightMagenta = 13,
    BrightCyan = 14,
    BrightWhite = 15,
}

impl Color {
    /// SGR code when used as the text colour.
    pub const fn fg_code(self) -> u8 {
        let n = self as u8;
        if n < 8 { 30 + n } else { 90 + (n - 8) }
    }

    /// SGR code when used as the cell background.
    pub const fn bg_code(self) -> u8 {
        self.fg_code() + 10
    }
}

// =============================================================================
// Attributes
// =============================================================================

bitflags::bitflags! {
    /// Text attributes as a bitfield.
    ///
    /// Combine with bitwise OR: `Attr::BOLD | Attr::UNDERLINE`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Attr: u8 {
        const NONE = 0;
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const INVERSE = 1 << 4;
    }
}

impl Attr {
    /// SGR codes for the set attributes, bold first.
    pub fn codes(self) -> impl Iterator<Item = u8> {
        [
            (Attr::BOLD, 1),
            (Attr::DIM, 2),
            (Attr::ITALIC, 3),
            (Attr::UNDERLINE, 4),
            (Attr::INVERSE, 7),
        ]
        .into_iter()
        .filter(move |(flag, _)| self.contains(*flag))
        .map(|(_, code)| code)
    }
}

// =============================================================================
// Style
// =============================================================================

/// Foreground, background and attributes applied to one text fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub attrs: Attr,
}

impl Style {
    pub const fn new() -> Self {
        Self { fg: None, bg: None, attrs: Attr::NONE }
    }

    pub const fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    pub const fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.attrs |= Attr::BOLD;
        self
    }

    pub fn attrs(mut self, attrs: Attr) -> Self {
        self.attrs |= attrs;
        self
    }

    /// Style used to fill padding and gaps with a background colour.
    pub const fn fill(bg: Option<Color>) -> Self {
        Self { fg: None, bg, attrs: Attr::NONE }
    }
}

// =============================================================================
// Borders
// =============================================================================

/// Glyph set used by [`crate::Border`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderStyle {
    /// ─ │ ┌ ┐ └ ┘
    #[default]
    Single,
    /// ═ ║ ╔ ╗ ╚ ╝
    Double,
    /// ─ │ ╭ ╮ ╰ ╯
    Rounded,
    /// ━ ┃ ┏ ┓ ┗ ┛
    Bold,
    /// - | + + + +
    Ascii,
}

impl BorderStyle {
    /// Returns: (horizontal, vertical, top_left, top_right, bottom_right, bottom_left)
    pub const fn chars(&self) -> (&'static str, &'static str, &'static str, &'static str, &'static str, &'static str) {
        match self {
            Self::Single => ("─", "│", "┌", "┐", "┘", "└"),
            Self::Double => ("═", "║", "╔", "╗", "╝", "╚"),
            Self::Rounded => ("─", "│", "╭", "╮", "╯", "╰"),
            Self::Bold => ("━", "┃", "┏", "┓", "┛", "┗"),
            Self::Ascii => ("-", "|", "+", "+", "+", "+"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_codes() {
        assert_eq!(Color::Black.fg_code(), 30);
        assert_eq!(Color::White.fg_code(), 37);
        assert_eq!(Color::Gray.fg_code(), 90);
        assert_eq!(Color::BrightWhite.fg_code(), 97);
        assert_eq!(Color::Blue.bg_code(), 44);
        assert_eq!(Color::BrightCyan.bg_code(), 106);
    }

    #[test]
    fn attr_codes_bold_first() {
        let codes: Vec<u8> = (Attr::UNDERLINE | Attr::BOLD).codes().collect();
        assert_eq!(codes, vec![1, 4]);
        assert_eq!(Attr::NONE.codes().count(), 0);
    }

    #[test]
    fn focus_from_tuple() {
        assert_eq!(Focus::from((2, -1)), Focus::new(2, -1));
        assert_eq!(Focus::new(1, 3).to_string(), "(1, 3)");
    }
}
