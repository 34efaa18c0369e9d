//! Text Primitive - styled literal lines.
//!
//! Content can be fixed lines or a closure evaluated on every render, so a
//! text node can show state that changes between frames.
//!
//! # Example
//!
//! ```ignore
//! use tad::{text, Color};
//!
//! let title = text("Introduction").bold();
//! let hint = text(["line one", "line two"]).color(Color::Gray);
//! let live = Text::dynamic(move || vec![format!("selected: {}", current.get())]);
//! ```

use crate::renderer::encode;
use crate::types::{Color, Focus, Style};

use super::types::{Node, RenderContext};

enum Content {
    Lines(Vec<String>),
    Dynamic(Box<dyn Fn() -> Vec<String>>),
}

/// One or more lines wrapped in a single style.
pub struct Text {
    content: Content,
    style: Style,
}

impl Text {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            content: Content::Lines(lines.into_iter().map(Into::into).collect()),
            style: Style::new(),
        }
    }

    /// Content produced by `f` on every render.
    pub fn dynamic(f: impl Fn() -> Vec<String> + 'static) -> Self {
        Self {
            content: Content::Dynamic(Box::new(f)),
            style: Style::new(),
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.style = self.style.fg(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.style = self.style.bold();
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    fn encode_lines(&self, lines: &[String]) -> Vec<String> {
        lines.iter().map(|line| encode(line, self.style)).collect()
    }
}

impl From<&str> for Text {
    fn from(line: &str) -> Self {
        Self::new([line])
    }
}

impl From<String> for Text {
    fn from(line: String) -> Self {
        Self::new([line])
    }
}

impl<const N: usize> From<[&str; N]> for Text {
    fn from(lines: [&str; N]) -> Self {
        Self::new(lines)
    }
}

impl From<Vec<String>> for Text {
    fn from(lines: Vec<String>) -> Self {
        Self::new(lines)
    }
}

impl Node for Text {
    fn render(&self, _ctx: &RenderContext<'_>, _allowed_width: usize, _focus: Focus) -> Vec<String> {
        match &self.content {
            Content::Lines(lines) => self.encode_lines(lines),
            Content::Dynamic(f) => self.encode_lines(&f()),
        }
    }
}

/// `n` empty lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct Blank(pub usize);

impl Node for Blank {
    fn render(&self, _ctx: &RenderContext<'_>, _allowed_width: usize, _focus: Focus) -> Vec<String> {
        vec![String::new(); self.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::types::testing::render_plain;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn single_line() {
        assert_eq!(render_plain(&Text::from("hello"), 80, Focus::default()), vec!["hello"]);
    }

    #[test]
    fn lines_are_each_styled() {
        let scheduler = crate::state::Scheduler::new();
        let ctx = RenderContext::new(80, &scheduler);
        let lines = Text::from(["a", "b"]).color(Color::Red).bold().render(&ctx, 80, Focus::default());
        assert_eq!(lines, vec!["\x1b[1;31ma\x1b[0m", "\x1b[1;31mb\x1b[0m"]);
    }

    #[test]
    fn dynamic_content_is_reevaluated() {
        let n = Rc::new(Cell::new(1));
        let source = n.clone();
        let node = Text::dynamic(move || vec![format!("n = {}", source.get())]);

        assert_eq!(render_plain(&node, 80, Focus::default()), vec!["n = 1"]);
        n.set(2);
        assert_eq!(render_plain(&node, 80, Focus::default()), vec!["n = 2"]);
    }

    #[test]
    fn blank_lines() {
        assert_eq!(render_plain(&Blank(2), 10, Focus::default()), vec!["", ""]);
        assert!(render_plain(&Blank(0), 10, Focus::default()).is_empty());
    }
}
