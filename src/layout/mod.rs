//! Box-model layout helpers.
//!
//! Containers lay out fixed-width lines of styled text. This module holds
//! the pieces they share:
//!
//! 1. [`Width`] resolves a container's width against the width its parent allows
//! 2. [`place`] pads one line of child output into a row of known width
//! 3. `text_measure` measures and clips styled strings
//!
//! All arithmetic saturates at zero: a negative width degrades to an empty
//! row instead of failing.
//!
//! # Example
//!
//! ```ignore
//! use tad::layout::Width;
//!
//! let half: Width = "50-%".parse()?;
//! assert_eq!(half.resolve(81), 40);
//! assert_eq!(Width::Chars(30).resolve(20), 20);
//! ```

mod text_measure;

use std::fmt;
use std::str::FromStr;

pub use text_measure::*;

use crate::error::Error;
use crate::renderer::fill;
use crate::types::Color;

// =============================================================================
// Width
// =============================================================================

/// Width specifier for containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Width {
    /// Percentage of the parent's allowed width, floored. Values above 100
    /// resolve to the full allowed width.
    Percent(u32),
    /// Absolute character count, capped at the parent's allowed width.
    Chars(usize),
}

impl Default for Width {
    fn default() -> Self {
        Self::Percent(100)
    }
}

impl Width {
    /// Resolve against the width the parent allows.
    pub fn resolve(self, allowed: usize) -> usize {
        match self {
            Self::Percent(p) => (allowed.saturating_mul(p as usize) / 100).min(allowed),
            Self::Chars(n) => n.min(allowed),
        }
    }
}

impl FromStr for Width {
    type Err = Error;

    /// Parse `"<n>-%"` or `"<n>-char"`. A bare number means characters.
    /// Percentages above 100 are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidWidth(s.to_string());
        let (amount, unit) = match s.trim().split_once('-') {
            Some((amount, unit)) => (amount, unit),
            None => (s.trim(), "char"),
        };

        match unit {
            "%" => match amount.parse::<u32>() {
                Ok(p) if p <= 100 => Ok(Self::Percent(p)),
                _ => Err(invalid()),
            },
            "char" => amount.parse().map(Self::Chars).map_err(|_| invalid()),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Percent(p) => write!(f, "{p}-%"),
            Self::Chars(n) => write!(f, "{n}-char"),
        }
    }
}

// =============================================================================
// Line placement
// =============================================================================

/// Pad `line` into a row of `width` cells with background-filled blanks.
///
/// `hgap` blank cells are reserved on both sides. With `center`, the line is
/// centred inside what remains (extra cell goes right); otherwise it sits
/// right after the left gap. Padding never pushes a line that fits past
/// `width`, even when the gaps alone are wider than the row. Lines wider
/// than the row are not clipped here.
pub fn place(line: &str, width: usize, hgap: usize, center: bool, bg: Option<Color>) -> String {
    let len = visible_width(line);
    let inner = width.saturating_sub(hgap * 2);
    let pad = if center { inner.saturating_sub(len) / 2 } else { 0 };
    let left = (hgap + pad).min(width.saturating_sub(len));
    let right = width.saturating_sub(left + len);

    let mut out = fill(left, bg);
    out.push_str(line);
    out.push_str(&fill(right, bg));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_floors() {
        for w in [0usize, 1, 7, 80, 81, 133] {
            for p in [0u32, 1, 33, 50, 99, 100] {
                assert_eq!(Width::Percent(p).resolve(w), w * p as usize / 100);
            }
        }
    }

    #[test]
    fn chars_cap_at_allowed() {
        assert_eq!(Width::Chars(30).resolve(80), 30);
        assert_eq!(Width::Chars(30).resolve(20), 20);
        assert_eq!(Width::Chars(0).resolve(20), 0);
    }

    #[test]
    fn default_is_full_width() {
        assert_eq!(Width::default().resolve(57), 57);
    }

    #[test]
    fn percent_over_hundred_caps_at_allowed() {
        assert_eq!(Width::Percent(150).resolve(10), 10);
        assert_eq!(Width::Percent(u32::MAX).resolve(80), 80);
        assert_eq!(Width::Percent(101).resolve(0), 0);
    }

    #[test]
    fn parse_notation() {
        assert_eq!("50-%".parse::<Width>().unwrap(), Width::Percent(50));
        assert_eq!("30-char".parse::<Width>().unwrap(), Width::Chars(30));
        assert_eq!("12".parse::<Width>().unwrap(), Width::Chars(12));
        assert!(matches!("x-%".parse::<Width>(), Err(Error::InvalidWidth(_))));
        assert!("10-px".parse::<Width>().is_err());
        assert_eq!("100-%".parse::<Width>().unwrap(), Width::Percent(100));
        assert!(matches!("150-%".parse::<Width>(), Err(Error::InvalidWidth(_))));
        assert_eq!(Width::Percent(25).to_string(), "25-%");
    }

    #[test]
    fn place_left_aligned() {
        let row = place("hi", 6, 1, false, None);
        assert_eq!(strip_ansi(&row), " hi   ");
        assert_eq!(visible_width(&row), 6);
    }

    #[test]
    fn place_centered() {
        assert_eq!(strip_ansi(&place("ab", 7, 0, true, None)), "  ab   ");
        assert_eq!(strip_ansi(&place("ab", 8, 1, true, None)), "   ab   ");
    }

    #[test]
    fn place_overflowing_line_gets_no_right_pad() {
        assert_eq!(strip_ansi(&place("abcdef", 4, 0, true, None)), "abcdef");
    }

    #[test]
    fn place_gaps_wider_than_row_stay_inside() {
        assert_eq!(strip_ansi(&place("", 4, 5, false, None)), "    ");
        assert_eq!(strip_ansi(&place("ab", 4, 3, false, None)), "  ab");
        assert_eq!(strip_ansi(&place("ab", 4, 3, true, None)), "  ab");
        for hgap in 0..8 {
            assert_eq!(visible_width(&place("x", 5, hgap, false, None)), 5);
        }
    }
}
