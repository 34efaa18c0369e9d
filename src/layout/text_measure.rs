//! Text Measurement
//!
//! Utilities for measuring and clipping styled text in terminal cells.
//!
//! Every fragment a node emits is wrapped in SGR sequences, so width
//! measurement has to skip escape sequences entirely:
//! - CSI sequences: `ESC [` ... final byte (0x40-0x7E)
//! - OSC sequences: `ESC ]` ... BEL (0x07) or ST (ESC \)
//! - DCS/PM/APC sequences: `ESC P`/`ESC ^`/`ESC _` ... ST
//! - Two-character sequences: `ESC` + single char
//!
//! Visible width is counted in terminal cells with `unicode-width`, and
//! clipping never splits a grapheme cluster.

use std::borrow::Cow;

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::renderer::ansi::RESET;

const ESC: u8 = 0x1B;

/// Strip escape sequences from a string.
///
/// Returns `Cow::Borrowed` when no escape sequences are present.
pub fn strip_ansi(s: &str) -> Cow<'_, str> {
    if !s.as_bytes().contains(&ESC) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len());
    for segment in segments(s) {
        if let Segment::Text(text) = segment {
            result.push_str(text);
        }
    }
    Cow::Owned(result)
}

/// Width of `s` in terminal cells, ignoring escape sequences.
pub fn visible_width(s: &str) -> usize {
    segments(s)
        .map(|segment| match segment {
            Segment::Text(text) => text.width(),
            Segment::Escape(_) => 0,
        })
        .sum()
}

/// Copy `s` keeping at most `max_width` visible cells.
///
/// Escape sequences pass through untouched and are never counted. Copying
/// stops at the first grapheme that would overflow; in that case a full
/// reset is appended so no style leaks past the cut. When everything fits
/// the result is byte-for-byte identical to the input.
pub fn clip(s: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::with_capacity(s.len());
    let mut used = 0usize;

    for segment in segments(s) {
        match segment {
            Segment::Escape(seq) => out.push_str(seq),
            Segment::Text(text) => {
                for grapheme in text.graphemes(true) {
                    let w = grapheme.width();
                    if used + w > max_width {
                        out.push_str(RESET);
                        return out;
                    }
                    used += w;
                    out.push_str(grapheme);
                }
            }
        }
    }

    out
}

// =============================================================================
// Segmentation
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment<'a> {
    Text(&'a str),
    Escape(&'a str),
}

/// Split `s` into alternating runs of plain text and escape sequences.
fn segments(s: &str) -> impl Iterator<Item = Segment<'_>> {
    let bytes = s.as_bytes();
    let mut i = 0;

    std::iter::from_fn(move || {
        if i >= bytes.len() {
            return None;
        }

        let start = i;
        if bytes[i] == ESC {
            i = escape_end(bytes, i);
            Some(Segment::Escape(&s[start..i]))
        } else {
            // ESC is a single-byte ASCII character, so splitting at ESC
            // positions never breaks a UTF-8 sequence.
            while i < bytes.len() && bytes[i] != ESC {
                i += 1;
            }
            Some(Segment::Text(&s[start..i]))
        }
    })
}

/// End of the escape run that [`segments`] reports for the ESC at `esc`.
///
/// Everything up to the returned index counts as zero cells and is copied
/// through by [`clip`] untouched. A sequence cut off by the end of the line
/// runs to the end.
fn escape_end(bytes: &[u8], esc: usize) -> usize {
    let Some(&kind) = bytes.get(esc + 1) else {
        return bytes.len();
    };

    match kind {
        b'[' => csi_end(bytes, esc + 2),
        b']' | b'P' | b'^' | b'_' => terminated_end(bytes, esc + 2),
        // A lone ESC before a multi-byte character: keep the character.
        b if b >= 0x80 => esc + 1,
        _ => esc + 2,
    }
}

/// CSI body starting at `from`: runs through the first byte in 0x40-0x7E.
/// A control byte or non-ASCII byte ends it early and stays visible text.
fn csi_end(bytes: &[u8], from: usize) -> usize {
    bytes[from.min(bytes.len())..]
        .iter()
        .position(|b| !(0x20..=0x3F).contains(b))
        .map_or(bytes.len(), |offset| {
            let at = from + offset;
            if (0x40..=0x7E).contains(&bytes[at]) {
                at + 1
            } else {
                at
            }
        })
}

/// OSC, DCS, PM or APC body starting at `from`: runs through BEL or `ESC \`.
fn terminated_end(bytes: &[u8], from: usize) -> usize {
    let mut i = from;
    while i < bytes.len() {
        match bytes[i] {
            0x07 => return i + 1,
            ESC if bytes.get(i + 1) == Some(&b'\\') => return i + 2,
            _ => i += 1,
        }
    }
    bytes.len()
}
