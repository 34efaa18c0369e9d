//! State Module - runtime state driven by input
//!
//! - **Focus** - focus coordinate, bounds, action registries, movement lock
//! - **Keyboard** - recognized key tokens
//! - **Scroll** - viewport offsets and clamping
//! - **Scheduler** - deferred one-shot tasks and redraw requests

mod focus;
mod keyboard;
mod scheduler;
mod scroll;

pub use focus::*;
pub use keyboard::*;
pub use scheduler::*;
pub use scroll::*;
