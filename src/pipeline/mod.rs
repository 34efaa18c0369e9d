//! Frame Pipeline
//!
//! Connects the node tree to the terminal.
//!
//! ```text
//! Navigator + Scheduler → root.render → lines → paint_frame → stdout
//! ```
//!
//! - **terminal** - raw mode, cursor and alternate screen, restored on every exit path
//! - **mount** - the [`App`] builder and its single-threaded frame loop

pub mod mount;
pub mod terminal;

// Re-exports
pub use mount::{App, AppConfig, DEFAULT_FRAME_INTERVAL};
pub use terminal::{terminal_width, TerminalGuard};
