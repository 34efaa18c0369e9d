//! The node contract shared by every widget and container.

use std::rc::Rc;

use crate::state::Scheduler;
use crate::types::Focus;

/// Everything a node may read during a render pass besides its own fields.
pub struct RenderContext<'a> {
    /// Terminal width in columns.
    pub width: usize,
    /// Origin of the active movement lock, if any.
    pub lock: Option<Focus>,
    /// Queue for deferred work such as animation frames.
    pub scheduler: &'a Scheduler,
}

impl<'a> RenderContext<'a> {
    pub fn new(width: usize, scheduler: &'a Scheduler) -> Self {
        Self {
            width,
            lock: None,
            scheduler,
        }
    }

    pub fn with_lock(mut self, lock: Option<Focus>) -> Self {
        self.lock = lock;
        self
    }
}

/// A renderable element of the layout tree.
///
/// `render` turns the node into display lines no wider than it was allowed
/// (containers clip or pad as documented on each type). It must not change
/// the tree; widgets only touch external state such as viewports or the
/// scheduler.
pub trait Node {
    fn render(&self, ctx: &RenderContext<'_>, allowed_width: usize, focus: Focus) -> Vec<String>;
}

impl<T: Node + ?Sized> Node for Box<T> {
    fn render(&self, ctx: &RenderContext<'_>, allowed_width: usize, focus: Focus) -> Vec<String> {
        (**self).render(ctx, allowed_width, focus)
    }
}

impl<T: Node + ?Sized> Node for Rc<T> {
    fn render(&self, ctx: &RenderContext<'_>, allowed_width: usize, focus: Focus) -> Vec<String> {
        (**self).render(ctx, allowed_width, focus)
    }
}

/// Owned child node.
pub type Child = Box<dyn Node>;
