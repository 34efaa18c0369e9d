//! Stack Primitives - vertical and horizontal composition.
//!
//! - [`VStack`] - children top to bottom
//! - [`HStack`] - children side by side, row by row
//!
//! Both resolve a [`Width`] against the width their parent allows, surround
//! each child (VStack) or the whole block (HStack) with `vgap` blank rows,
//! and paint every padding cell with the optional background colour.
//!
//! # Example
//!
//! ```ignore
//! let menu = vstack()
//!     .center()
//!     .vgap(1)
//!     .add(text("Menu").bold())
//!     .add(hstack().hgap(2).add(open).add(quit));
//! ```

use crate::layout::{place, visible_width, Width};
use crate::renderer::fill;
use crate::types::{Color, Focus};

use super::types::{Child, Node, RenderContext};

// =============================================================================
// VStack
// =============================================================================

/// Children rendered top to bottom.
///
/// Each child renders against the resolved width minus `2 * hgap`. With
/// `center`, every child line is centred and background-padded to the full
/// resolved width. Without it, lines are emitted exactly as the child
/// produced them and `hgap` only narrows the children.
#[derive(Default)]
pub struct VStack {
    children: Vec<Child>,
    hgap: usize,
    vgap: usize,
    center: bool,
    bg: Option<Color>,
    width: Width,
}

impl VStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, child: impl Node + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }

    /// Append every child of `children`, in order.
    pub fn extend<N: Node + 'static>(mut self, children: impl IntoIterator<Item = N>) -> Self {
        self.children.extend(children.into_iter().map(|child| Box::new(child) as Child));
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

    /// Blank rows above and below every child.
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
}

impl Node for VStack {
    fn render(&self, ctx: &RenderContext<'_>, allowed_width: usize, focus: Focus) -> Vec<String> {
        let width = self.width.resolve(allowed_width);
        let child_width = width.saturating_sub(self.hgap * 2);
        let gap_row = fill(width, self.bg);

        let mut lines = Vec::new();
        for child in &self.children {
            let rendered = child.render(ctx, child_width, focus);

            lines.extend(std::iter::repeat_n(gap_row.clone(), self.vgap));
            for line in rendered {
                if self.center {
                    lines.push(place(&line, width, self.hgap, true, self.bg));
                } else {
                    lines.push(line);
                }
            }
            lines.extend(std::iter::repeat_n(gap_row.clone(), self.vgap));
        }
        lines
    }
}

// =============================================================================
// HStack
// =============================================================================

/// Children rendered side by side.
///
/// Every child renders against the full resolved width; the stack does not
/// divide it between them. Shorter children are padded with blank rows as
/// wide as their own widest line, columns are separated by `hgap` blank
/// cells, and each composed row is centred or right-padded to the resolved
/// width. `vgap` blank rows go above and below the whole block.
#[derive(Default)]
pub struct HStack {
    children: Vec<Child>,
    hgap: usize,
    vgap: usize,
    center: bool,
    bg: Option<Color>,
    width: Width,
}

impl HStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, child: impl Node + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }

    /// Append every child of `children`, in order.
    pub fn extend<N: Node + 'static>(mut self, children: impl IntoIterator<Item = N>) -> Self {
        self.children.extend(children.into_iter().map(|child| Box::new(child) as Child));
        self
    }

    /// Set `hgap` and `vgap` together.
    pub fn gap(self, n: usize) -> Self {
        self.hgap(n).vgap(n)
    }

    /// Blank cells between neighbouring children.
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
}

impl Node for HStack {
    fn render(&self, ctx: &RenderContext<'_>, allowed_width: usize, focus: Focus) -> Vec<String> {
        let width = self.width.resolve(allowed_width);

        let mut columns: Vec<Vec<String>> = self
            .children
            .iter()
            .map(|child| child.render(ctx, width, focus))
            .collect();
        let height = columns.iter().map(Vec::len).max().unwrap_or(0);

        for column in &mut columns {
            let column_width = column.iter().map(|l| visible_width(l)).max().unwrap_or(0);
            column.resize(height, fill(column_width, self.bg));
        }

        let separator = fill(self.hgap, self.bg);
        let gap_row = fill(width, self.bg);

        let mut lines = Vec::with_capacity(height + self.vgap * 2);
        lines.extend(std::iter::repeat_n(gap_row.clone(), self.vgap));
        for row in 0..height {
            let composed = columns
                .iter()
                .map(|column| column[row].as_str())
                .collect::<Vec<_>>()
                .join(&separator);
            lines.push(place(&composed, width, 0, self.center, self.bg));
        }
        lines.extend(std::iter::repeat_n(gap_row, self.vgap));
        lines
    }
}
