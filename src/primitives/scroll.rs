//! Scroll Primitive - fixed-height window over a taller child.
//!
//! The offset lives in the [`Navigator`]'s viewport registry under the id
//! given at construction, so a screen rebuilt with the same id keeps its
//! position. Pressing Enter on a coordinate passed to [`Scroll::select`]
//! locks movement; while locked, Up and Down scroll instead of moving focus
//! and Escape releases the lock.
//!
//! # Example
//!
//! ```ignore
//! let body = Scroll::new(&mut nav, "intro", 10, text(INTRO_LINES))
//!     .select(&mut nav, (1, 0));
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use crate::layout::{clip, visible_width};
use crate::renderer::encode;
use crate::state::{Navigator, Viewport, LINE_SCROLL};
use crate::types::{Color, Direction, Focus, Style};

use super::types::{Child, Node, RenderContext};

/// Gutter glyph at the thumb row.
pub const THUMB: &str = "▮";
/// Gutter glyph on every other row.
pub const TRACK: &str = "│";

pub struct Scroll {
    child: Child,
    viewport: Rc<RefCell<Viewport>>,
    anchors: Vec<Focus>,
}

impl Scroll {
    /// Wrap `child` in a viewport `height` lines tall, keyed by `id`.
    pub fn new(nav: &mut Navigator, id: &str, height: usize, child: impl Node + 'static) -> Self {
        Self {
            child: Box::new(child),
            viewport: nav.viewport(id, height),
            anchors: Vec::new(),
        }
    }

    /// Make the viewport scrollable from `at`.
    ///
    /// May be called with several coordinates; each gets the same press
    /// action.
    pub fn select(mut self, nav: &mut Navigator, at: impl Into<Focus>) -> Self {
        let at = at.into();
        self.anchors.push(at);

        let viewport = self.viewport.clone();
        nav.on_press(at, move |nav| {
            nav.lock_movement();
            let viewport = viewport.clone();
            nav.on_locked_move(move |_, direction| {
                let delta = match direction {
                    Direction::Up => -LINE_SCROLL,
                    Direction::Down => LINE_SCROLL,
                    Direction::Left | Direction::Right => return,
                };
                viewport.borrow_mut().scroll_by(delta);
            });
        });
        self
    }

    /// Current viewport state.
    pub fn viewport(&self) -> Viewport {
        *self.viewport.borrow()
    }
}

impl Node for Scroll {
    fn render(&self, ctx: &RenderContext<'_>, allowed_width: usize, focus: Focus) -> Vec<String> {
        let inner = allowed_width.saturating_sub(1);
        let lines: Vec<String> = self
            .child
            .render(ctx, inner, focus)
            .iter()
            .map(|line| clip(line, inner))
            .collect();

        let mut viewport = self.viewport.borrow_mut();
        viewport.set_content_len(lines.len());

        let total = lines.len();
        if total < viewport.height {
            return lines;
        }

        let locked = ctx.lock.is_some_and(|origin| self.anchors.contains(&origin));
        let gutter = Style::new().fg(if locked { Color::Green } else { Color::Gray });
        let thumb = viewport.thumb_row(total);

        lines
            .into_iter()
            .skip(viewport.scroll_top)
            .take(viewport.height)
            .enumerate()
            .map(|(row, mut line)| {
                let pad = inner.saturating_sub(visible_width(&line));
                line.push_str(&" ".repeat(pad));
                line.push_str(&encode(if row == thumb { THUMB } else { TRACK }, gutter));
                line
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::types::testing::render_plain;
    use crate::primitives::Text;
    use crate::state::{Key, Scheduler};

    fn five_lines() -> Text {
        Text::from(["l0", "l1", "l2", "l3", "l4"])
    }

    #[test]
    fn shows_window_with_thumb_at_top() {
        let mut nav = Navigator::new();
        let scroll = Scroll::new(&mut nav, "doc", 2, five_lines());
        assert_eq!(render_plain(&scroll, 4, Focus::default()), vec!["l0 ▮", "l1 │"]);
    }

    #[test]
    fn short_content_has_no_gutter() {
        let mut nav = Navigator::new();
        let scroll = Scroll::new(&mut nav, "doc", 10, five_lines());
        assert_eq!(render_plain(&scroll, 4, Focus::default()), vec!["l0", "l1", "l2", "l3", "l4"]);
    }

    #[test]
    fn lines_are_clipped_before_the_gutter() {
        let mut nav = Navigator::new();
        let scroll = Scroll::new(&mut nav, "doc", 1, Text::from("abcdef"));
        assert_eq!(render_plain(&scroll, 4, Focus::default()), vec!["abc▮"]);
    }

    #[test]
    fn press_locks_and_arrows_scroll() {
        let mut nav = Navigator::new();
        let scroll = Scroll::new(&mut nav, "doc", 2, five_lines()).select(&mut nav, (0, 0));
        render_plain(&scroll, 4, nav.focus());

        nav.handle_key(Key::Enter);
        assert_eq!(nav.lock_origin(), Some(Focus::new(0, 0)));

        nav.handle_key(Key::Down);
        nav.handle_key(Key::Down);
        assert_eq!(nav.focus(), Focus::new(0, 0));
        assert_eq!(scroll.viewport().scroll_top, 2);
        assert_eq!(render_plain(&scroll, 4, nav.focus()), vec!["l2 │", "l3 ▮"]);

        nav.handle_key(Key::Up);
        nav.handle_key(Key::Left);
        assert_eq!(scroll.viewport().scroll_top, 1);

        nav.handle_key(Key::Escape);
        assert!(!nav.is_locked());
        nav.handle_key(Key::Down);
        assert_eq!(scroll.viewport().scroll_top, 1);
    }

    #[test]
    fn scrolling_stops_at_last_full_window() {
        let mut nav = Navigator::new();
        let scroll = Scroll::new(&mut nav, "doc", 2, five_lines()).select(&mut nav, (0, 0));
        render_plain(&scroll, 4, nav.focus());

        nav.handle_key(Key::Enter);
        for _ in 0..10 {
            nav.handle_key(Key::Down);
        }
        assert_eq!(scroll.viewport().scroll_top, 3);
        assert_eq!(render_plain(&scroll, 4, nav.focus()), vec!["l3 │", "l4 ▮"]);
    }

    #[test]
    fn thumb_is_green_only_while_locked_here() {
        let mut nav = Navigator::new();
        let scroll = Scroll::new(&mut nav, "doc", 2, five_lines())
            .select(&mut nav, (1, 0))
            .select(&mut nav, (2, 0));
        let scheduler = Scheduler::new();

        let green = encode(THUMB, Style::new().fg(Color::Green));
        let gray = encode(THUMB, Style::new().fg(Color::Gray));

        let unlocked = scroll.render(&RenderContext::new(4, &scheduler), 4, Focus::default());
        assert!(unlocked[0].ends_with(&gray));

        let ctx = RenderContext::new(4, &scheduler).with_lock(Some(Focus::new(2, 0)));
        assert!(scroll.render(&ctx, 4, Focus::new(2, 0))[0].ends_with(&green));

        let elsewhere = RenderContext::new(4, &scheduler).with_lock(Some(Focus::new(5, 5)));
        assert!(scroll.render(&elsewhere, 4, Focus::new(5, 5))[0].ends_with(&gray));
    }

    #[test]
    fn same_id_shares_offset() {
        let mut nav = Navigator::new();
        let first = Scroll::new(&mut nav, "shared", 2, five_lines());
        render_plain(&first, 4, Focus::default());
        first.viewport.borrow_mut().scroll_by(2);

        let rebuilt = Scroll::new(&mut nav, "shared", 2, five_lines());
        assert_eq!(rebuilt.viewport().scroll_top, 2);
    }
}
