//! TUI Primitives - Node building blocks.
//!
//! This module provides the nodes a layout tree is made of:
//! - [`text`] / [`Blank`] - Styled literal lines and spacers
//! - [`button`] - Focusable label with press and select actions
//! - [`dynamic`] - Subtree picked by a callback on every render
//! - [`Animate`] - Self-advancing frame sequence
//! - [`vstack`] / [`hstack`] - Vertical and horizontal stacks
//! - [`border`] - Box-drawing frame around one child
//! - [`scroll`] - Fixed-height window with a scrollbar gutter
//!
//! # Architecture
//!
//! Every node implements [`Node`]: given a [`RenderContext`], an allowed
//! width and the current focus coordinate, it returns display lines.
//! Parents own their children as `Box<dyn Node>`, and the tree is not
//! changed once built. Interactive nodes register their actions with the
//! [`Navigator`](crate::state::Navigator) while the tree is being
//! constructed, which is why their constructors take `&mut Navigator`.
//!
//! ```ignore
//! let mut nav = Navigator::new();
//! let ui = vstack()
//!     .center()
//!     .add(text("Hello").bold())
//!     .add(button("Quit").at((0, 0)).on_press(&mut nav, |_| std::process::exit(0))?);
//! ```

mod animate;
mod border;
mod button;
mod control_flow;
mod scroll;
mod stack;
mod text;
mod types;

use std::rc::Rc;

pub use animate::{Animate, DEFAULT_DELAY};
pub use border::Border;
pub use button::{Button, HIGHLIGHT};
pub use control_flow::Dynamic;
pub use scroll::{Scroll, THUMB, TRACK};
pub use stack::{HStack, VStack};
pub use text::{Blank, Text};
pub use types::*;

use crate::state::Navigator;

pub fn text(content: impl Into<Text>) -> Text {
    content.into()
}

pub fn button(label: impl Into<String>) -> Button {
    Button::new(label)
}

pub fn dynamic(select: impl Fn() -> Rc<dyn Node> + 'static) -> Dynamic {
    Dynamic::new(select)
}

pub fn vstack() -> VStack {
    VStack::new()
}

pub fn hstack() -> HStack {
    HStack::new()
}

pub fn border() -> Border {
    Border::new()
}

pub fn scroll(nav: &mut Navigator, id: &str, height: usize, child: impl Node + 'static) -> Scroll {
    Scroll::new(nav, id, height, child)
}
