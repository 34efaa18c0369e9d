//! Control Flow Primitive - subtree chosen at render time.
//!
//! [`Dynamic`] asks a callback for the node to draw on every render pass.
//! Screen routing is the usual case: build each screen once, keep them in
//! `Rc`s, and let the callback return whichever one the current state names.
//!
//! # Example
//!
//! ```ignore
//! let home: Rc<dyn Node> = Rc::new(home_screen(&mut nav)?);
//! let about: Rc<dyn Node> = Rc::new(about_screen(&mut nav)?);
//! let page = Rc::new(Cell::new(Page::Home));
//!
//! let router = dynamic(move || match page.get() {
//!     Page::Home => home.clone(),
//!     Page::About => about.clone(),
//! });
//! ```

use std::rc::Rc;

use crate::types::Focus;

use super::types::{Node, RenderContext};

pub struct Dynamic {
    select: Box<dyn Fn() -> Rc<dyn Node>>,
}

impl Dynamic {
    pub fn new(select: impl Fn() -> Rc<dyn Node> + 'static) -> Self {
        Self {
            select: Box::new(select),
        }
    }
}

impl Node for Dynamic {
    fn render(&self, ctx: &RenderContext<'_>, allowed_width: usize, focus: Focus) -> Vec<String> {
        (self.select)().render(ctx, allowed_width, focus)
    }
}
