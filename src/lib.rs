//! # tad
//!
//! Declarative terminal UI toolkit with keyboard-driven grid navigation.
//!
//! ## Architecture
//!
//! A UI is a tree of [`Node`]s built once at startup. Every frame the whole
//! tree is flattened into fixed-width lines of styled text and repainted:
//!
//! ```text
//! key event → Navigator (focus / lock / actions) → dirty flag
//! frame tick → root.render(width, focus) → lines → full repaint
//! ```
//!
//! Focus is a `(row, col)` coordinate in a sparse grid. Buttons and scroll
//! views claim coordinates and register their actions with the
//! [`Navigator`] as they are constructed. Nothing is diffed; a dirty frame
//! is recomputed and repainted in full.
//!
//! ## Modules
//!
//! - [`types`] - Focus coordinates, colours, styles, border glyphs
//! - [`layout`] - Width specifiers, ANSI-aware measuring and clipping
//! - [`renderer`] - Style encoding and full-frame output
//! - [`state`] - Navigator, key tokens, scroll viewports, task scheduler
//! - [`primitives`] - The node types and their constructors
//! - [`pipeline`] - Terminal setup and the frame loop ([`App`])
//! - [`logging`] - Diagnostic log file

pub mod error;
pub mod layout;
pub mod logging;
pub mod pipeline;
pub mod primitives;
pub mod renderer;
pub mod state;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use error::{Error, Result};

pub use layout::{clip, strip_ansi, visible_width, Width};

pub use renderer::{encode, fill};

pub use pipeline::{App, AppConfig, TerminalGuard};

pub use primitives::{
    border, button, dynamic, hstack, scroll, text, vstack, Animate, Blank, Border, Button, Dynamic,
    HStack, Node, RenderContext, Scroll, Text, VStack,
};

pub use state::{Bounds, Flow, Key, Lock, Navigator, Scheduler, Viewport};
