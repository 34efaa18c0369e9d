//! Terminal renderer - the "blind" output layer.
//!
//! The renderer knows only about styled lines. It doesn't understand nodes
//! or focus; it encodes styles and repaints whole frames.

pub mod ansi;
pub mod output;

pub use ansi::{encode, fill, RESET};
pub use output::{paint_frame, OutputBuffer};
