//! Button Primitive - a focusable label.
//!
//! A button sits at one coordinate of the navigation grid. When focus is
//! there it renders highlighted (or through a custom view); Enter runs its
//! press action and every invalidation while focused runs its select action.
//!
//! # Example
//!
//! ```ignore
//! let explore = button("Explore the docs")
//!     .at((0, 0))
//!     .on_press(&mut nav, |nav| nav.set_focus((0, 1)))?;
//! ```

use crate::error::{Error, Result};
use crate::layout::clip;
use crate::renderer::encode;
use crate::state::Navigator;
use crate::types::{Color, Focus, Style};

use super::types::{Node, RenderContext};

/// Style of a focused button label without a custom view.
pub const HIGHLIGHT: Style = Style::new().fg(Color::Black).bg(Color::White);

pub struct Button {
    label: String,
    at: Option<Focus>,
    selected_view: Option<Box<dyn Fn() -> Vec<String>>>,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            at: None,
            selected_view: None,
        }
    }

    /// Place the button at `focus` in the navigation grid.
    pub fn at(mut self, focus: impl Into<Focus>) -> Self {
        self.at = Some(focus.into());
        self
    }

    /// Lines rendered instead of the default highlight while focused.
    pub fn selected_view(mut self, view: impl Fn() -> Vec<String> + 'static) -> Self {
        self.selected_view = Some(Box::new(view));
        self
    }

    /// Run `action` when Enter is pressed while this button is focused.
    ///
    /// Fails if the button has no coordinate yet.
    pub fn on_press(self, nav: &mut Navigator, action: impl Fn(&mut Navigator) + 'static) -> Result<Self> {
        let at = self.at.ok_or(Error::Unfocusable { action: "press" })?;
        nav.on_press(at, action);
        Ok(self)
    }

    /// Run `action` on every invalidation while this button is focused.
    ///
    /// Fails if the button has no coordinate yet.
    pub fn on_select(self, nav: &mut Navigator, action: impl Fn(&mut Navigator) + 'static) -> Result<Self> {
        let at = self.at.ok_or(Error::Unfocusable { action: "select" })?;
        nav.on_select(at, action);
        Ok(self)
    }

    pub fn focus(&self) -> Option<Focus> {
        self.at
    }
}

impl Node for Button {
    fn render(&self, _ctx: &RenderContext<'_>, allowed_width: usize, focus: Focus) -> Vec<String> {
        if self.at == Some(focus) {
            return match &self.selected_view {
                Some(view) => view(),
                None => vec![format!("[ {} ]", encode(&self.label, HIGHLIGHT.bold()))],
            };
        }

        vec![format!("[ {} ]", clip(&self.label, allowed_width.saturating_sub(2)))]
    }
}
