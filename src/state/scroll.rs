//! Scroll State Module
//!
//! Manages scrolling behavior for [`crate::Scroll`] viewports:
//! - Per-viewport scroll offset, keyed by a caller-supplied id
//! - Content length recorded by the last render
//! - Scroll operations with clamping
//! - Scrollbar thumb placement
//!
//! Viewports live in a [`ViewportRegistry`] for the whole run. Two scroll
//! nodes built with the same id share one [`Viewport`], which is what lets
//! a rebuilt screen keep its scroll position.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Default scroll amount for arrow keys (lines).
pub const LINE_SCROLL: isize = 1;

// =============================================================================
// Viewport
// =============================================================================

/// Visible window over a scroll node's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    /// Index of the first visible content line.
    pub scroll_top: usize,
    /// Number of visible lines.
    pub height: usize,
    /// Total content lines seen by the last render.
    pub content_len: usize,
}

impl Viewport {
    pub fn new(height: usize) -> Self {
        Self {
            scroll_top: 0,
            height,
            content_len: 0,
        }
    }

    /// Largest valid `scroll_top` for the current content.
    pub fn max_scroll(&self) -> usize {
        self.content_len.saturating_sub(self.height)
    }

    /// Record the content length and pull `scroll_top` back into range.
    pub fn set_content_len(&mut self, len: usize) {
        self.content_len = len;
        self.scroll_top = self.scroll_top.min(self.max_scroll());
    }

    /// Scroll by a delta, clamped to `[0, max_scroll]`.
    ///
    /// Returns `true` if scrolling occurred, `false` if already at boundary.
    pub fn scroll_by(&mut self, delta: isize) -> bool {
        let target = self
            .scroll_top
            .saturating_add_signed(delta)
            .min(self.max_scroll());
        let changed = target != self.scroll_top;
        self.scroll_top = target;
        changed
    }

    /// Row of the scrollbar thumb for `total` content lines.
    ///
    /// `floor(scroll_top / total * height * 2)`, clamped into the viewport.
    /// Non-decreasing in `scroll_top`.
    pub fn thumb_row(&self, total: usize) -> usize {
        if total == 0 || self.height == 0 {
            return 0;
        }
        let row = self.scroll_top.saturating_mul(self.height).saturating_mul(2) / total;
        row.min(self.height - 1)
    }
}

// =============================================================================
// Registry
// =============================================================================

/// Viewports keyed by scroll id.
#[derive(Debug, Default)]
pub struct ViewportRegistry {
    viewports: HashMap<String, Rc<RefCell<Viewport>>>,
}

impl ViewportRegistry {
    /// Fetch the viewport for `id`, creating it on first use.
    ///
    /// An existing viewport keeps its offset and takes the new height.
    pub fn get_or_create(&mut self, id: &str, height: usize) -> Rc<RefCell<Viewport>> {
        let viewport = self
            .viewports
            .entry(id.to_string())
            .or_insert_with(|| Rc::new(RefCell::new(Viewport::new(height))));
        viewport.borrow_mut().height = height;
        viewport.clone()
    }

    pub fn get(&self, id: &str) -> Option<Viewport> {
        self.viewports.get(id).map(|v| *v.borrow())
    }

    pub fn len(&self) -> usize {
        self.viewports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.viewports.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(height: usize, content_len: usize) -> Viewport {
        let mut v = Viewport::new(height);
        v.set_content_len(content_len);
        v
    }

    #[test]
    fn scroll_by_clamps_to_content() {
        let mut v = viewport(3, 10);
        assert_eq!(v.max_scroll(), 7);

        assert!(v.scroll_by(5));
        assert_eq!(v.scroll_top, 5);

        assert!(v.scroll_by(10));
        assert_eq!(v.scroll_top, 7);

        // At boundary
        assert!(!v.scroll_by(1));
        assert_eq!(v.scroll_top, 7);
    }

    #[test]
    fn scroll_by_negative() {
        let mut v = viewport(3, 10);
        v.scroll_by(4);
        assert!(v.scroll_by(-LINE_SCROLL));
        assert_eq!(v.scroll_top, 3);
        assert!(v.scroll_by(-10));
        assert_eq!(v.scroll_top, 0);
        assert!(!v.scroll_by(-1));
    }

    #[test]
    fn short_content_cannot_scroll() {
        let mut v = viewport(10, 4);
        assert_eq!(v.max_scroll(), 0);
        assert!(!v.scroll_by(1));
        assert_eq!(v.scroll_top, 0);
    }

    #[test]
    fn shrinking_content_pulls_offset_back() {
        let mut v = viewport(2, 10);
        v.scroll_by(8);
        v.set_content_len(5);
        assert_eq!(v.scroll_top, 3);
    }

    #[test]
    fn thumb_row_formula() {
        let mut v = viewport(2, 5);
        assert_eq!(v.thumb_row(5), 0);
        v.scroll_by(1);
        // floor(1/5 * 2 * 2) = 0
        assert_eq!(v.thumb_row(5), 0);
        v.scroll_by(1);
        // floor(2/5 * 4) = 1
        assert_eq!(v.thumb_row(5), 1);
        v.scroll_by(1);
        // floor(3/5 * 4) = 2, clamped to 1
        assert_eq!(v.thumb_row(5), 1);
    }

    #[test]
    fn thumb_row_monotonic() {
        for height in 1..6 {
            for total in height..30 {
                let mut v = viewport(height, total);
                let mut last = 0;
                for _ in 0..total {
                    let row = v.thumb_row(total);
                    assert!(row >= last);
                    assert!(row < height);
                    last = row;
                    v.scroll_by(1);
                }
            }
        }
    }

    #[test]
    fn registry_shares_state_by_id() {
        let mut registry = ViewportRegistry::default();
        let a = registry.get_or_create("doc", 5);
        a.borrow_mut().set_content_len(20);
        a.borrow_mut().scroll_by(3);

        let b = registry.get_or_create("doc", 8);
        assert_eq!(b.borrow().scroll_top, 3);
        assert_eq!(a.borrow().height, 8);
        assert_eq!(registry.len(), 1);

        registry.get_or_create("other", 2);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("other").map(|v| v.height), Some(2));
        assert!(registry.get("missing").is_none());
    }
}
