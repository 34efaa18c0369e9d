//! Border Primitive - one child inside a box-drawing frame.
//!
//! The frame takes one column on each side. The child renders against the
//! interior minus `2 * hgap`, and each of its lines is clipped to that width
//! before being padded (or centred) into the interior, so oversized content
//! can never push the right edge out of place.
//!
//! # Example
//!
//! ```ignore
//! let card = border()
//!     .width("30-char".parse()?)
//!     .hgap(1)
//!     .style(BorderStyle::Rounded)
//!     .child(text("Hello"));
//! ```

use crate::layout::{clip, place, Width};
use crate::renderer::fill;
use crate::types::{BorderStyle, Color, Focus};

use super::types::{Child, Node, RenderContext};

#[derive(Default)]
pub struct Border {
    child: Option<Child>,
    hgap: usize,
    vgap: usize,
    center: bool,
    bg: Option<Color>,
    width: Width,
    style: BorderStyle,
}

impl Border {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the framed node, replacing any previous one.
    pub fn child(mut self, child: impl Node + 'static) -> Self {
        self.child = Some(Box::new(child));
        self
    }

    /// Set `hgap` and `vgap` together.
    pub fn gap(self, n: usize) -> Self {
        self.hgap(n).vgap(n)
    }

    pub fn hgap(mut self, n: usize) -> Self {
        self.hgap = n;
        self
    }

    pub fn vgap(mut self, n: usize) -> Self {
        self.vgap = n;
        self
    }

    pub fn center(mut self) -> Self {
        self.center = true;
        self
    }

    pub fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    pub fn width(mut self, width: Width) -> Self {
        self.width = width;
        self
    }

    pub fn style(mut self, style: BorderStyle) -> Self {
        self.style = style;
        self
    }
}

impl Node for Border {
    fn render(&self, ctx: &RenderContext<'_>, allowed_width: usize, focus: Focus) -> Vec<String> {
        let (h, v, tl, tr, br, bl) = self.style.chars();
        let inner = self.width.resolve(allowed_width).saturating_sub(2);
        let content_width = inner.saturating_sub(self.hgap * 2);

        let child_lines = match &self.child {
            Some(child) => child.render(ctx, content_width, focus),
            None => Vec::new(),
        };

        let blank_row = format!("{v}{}{v}", fill(inner, self.bg));

        let mut lines = Vec::with_capacity(child_lines.len() + self.vgap * 2 + 2);
        lines.push(format!("{tl}{}{tr}", h.repeat(inner)));
        lines.extend(std::iter::repeat_n(blank_row.clone(), self.vgap));
        for line in &child_lines {
            let content = place(&clip(line, content_width), inner, self.hgap, self.center, self.bg);
            lines.push(format!("{v}{content}{v}"));
        }
        lines.extend(std::iter::repeat_n(blank_row, self.vgap));
        lines.push(format!("{bl}{}{br}", h.repeat(inner)));
        lines
    }
}
