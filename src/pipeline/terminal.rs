//! Terminal mode handling.
//!
//! [`TerminalGuard::enter`] switches the terminal into the state the run loop
//! needs (raw input, hidden cursor, cleared alternate screen) and undoes all
//! of it when dropped. A panic hook performs the same restore before the
//! panic message is printed, so a crash never leaves the shell unusable.

use std::io::{self, Write};
use std::sync::Once;

use crossterm::terminal;

use crate::renderer::ansi;

/// Width used when the terminal size cannot be queried.
pub const FALLBACK_WIDTH: usize = 80;

/// Current terminal width in columns.
pub fn terminal_width() -> usize {
    terminal::size().map_or(FALLBACK_WIDTH, |(cols, _)| cols as usize)
}

/// Terminal state for the lifetime of the run loop.
///
/// Dropping the guard restores the terminal, whether the loop ended
/// normally, returned an error or unwound from a panic.
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    /// Enable raw mode, hide the cursor, clear the screen and switch to the
    /// alternate screen buffer.
    pub fn enter() -> io::Result<Self> {
        install_panic_hook();

        terminal::enable_raw_mode()?;
        // From here on, a failure still restores through Drop.
        let guard = Self { _private: () };

        let mut out = io::stdout().lock();
        ansi::cursor_hide(&mut out)?;
        ansi::clear_screen(&mut out)?;
        ansi::enter_alt_screen(&mut out)?;
        out.flush()?;

        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore();
    }
}

/// Undo every change made by [`TerminalGuard::enter`], ignoring errors.
fn restore() {
    let _ = terminal::disable_raw_mode();
    let mut out = io::stdout();
    let _ = ansi::exit_alt_screen(&mut out);
    let _ = ansi::cursor_show(&mut out);
    let _ = out.flush();
}

fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            tracing::error!("panic: {info}");
            restore();
            default_hook(info);
        }));
    });
}

