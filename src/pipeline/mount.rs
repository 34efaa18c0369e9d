//! Mount API - application lifecycle and frame loop.
//!
//! [`App`] owns the root node, the [`Navigator`] and the [`Scheduler`].
//! [`App::run`] takes over the terminal and serializes everything onto one
//! thread: key events, deferred tasks and the fixed-rate frame tick. A tick
//! repaints the whole frame, and only when something marked it dirty.
//!
//! # Example
//!
//! ```ignore
//! use tad::{App, Bounds, Navigator};
//!
//! let mut nav = Navigator::new();
//! let root = build_ui(&mut nav)?;
//!
//! App::new(nav)
//!     .title("Demo")
//!     .bound(Bounds::rows(0..=2))
//!     .root(root)
//!     .run()?;
//! ```

use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::logging;
use crate::primitives::{Child, Node, RenderContext};
use crate::renderer::{encode, paint_frame, OutputBuffer};
use crate::state::{Bounds, Flow, Key, Navigator, Scheduler};
use crate::types::{Color, Style};

use super::terminal::{terminal_width, TerminalGuard};

// =============================================================================
// Configuration
// =============================================================================

/// Default time between frame ticks (about 60 per second).
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Environment variable holding the frame interval in milliseconds.
pub const FRAME_MS_VAR: &str = "TAD_FRAME_MS";
/// Environment variable naming the diagnostic log file.
pub const LOG_FILE_VAR: &str = "TAD_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub frame_interval: Duration,
    /// Bold yellow line painted above the root, followed by a blank line.
    pub title: Option<String>,
    /// Diagnostic log installed by [`App::run`].
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            frame_interval: DEFAULT_FRAME_INTERVAL,
            title: None,
            log_file: None,
        }
    }
}

impl AppConfig {
    /// Defaults overridden by `TAD_FRAME_MS` and `TAD_LOG`.
    ///
    /// A frame interval that is not a positive integer is ignored.
    pub fn from_env() -> Self {
        Self::from_vars(env::var(FRAME_MS_VAR).ok(), env::var_os(LOG_FILE_VAR).map(PathBuf::from))
    }

    fn from_vars(frame_ms: Option<String>, log_file: Option<PathBuf>) -> Self {
        let mut config = Self::default();
        if let Some(ms) = frame_ms.and_then(|v| v.trim().parse::<u64>().ok()).filter(|&ms| ms > 0) {
            config.frame_interval = Duration::from_millis(ms);
        }
        config.log_file = log_file.filter(|p| !p.as_os_str().is_empty());
        config
    }
}

// =============================================================================
// App
// =============================================================================

pub struct App {
    nav: Navigator,
    scheduler: Scheduler,
    root: Option<Child>,
    config: AppConfig,
}

impl App {
    /// An app driving `nav`, configured from the environment.
    pub fn new(nav: Navigator) -> Self {
        Self {
            nav,
            scheduler: Scheduler::new(),
            root: None,
            config: AppConfig::from_env(),
        }
    }

    pub fn config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.config.title = Some(title.into());
        self
    }

    /// Constrain arrow-key movement.
    pub fn bound(mut self, bounds: Bounds) -> Self {
        self.nav.set_bounds(bounds);
        self
    }

    pub fn root(mut self, root: impl Node + 'static) -> Self {
        self.root = Some(Box::new(root));
        self
    }

    pub fn frame_interval(mut self, interval: Duration) -> Self {
        self.config.frame_interval = interval;
        self
    }

    pub fn navigator(&self) -> &Navigator {
        &self.nav
    }

    pub fn navigator_mut(&mut self) -> &mut Navigator {
        &mut self.nav
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Render the title and root node at `width` without touching any state
    /// besides what widgets record (viewports, scheduled tasks).
    pub fn frame(&self, width: usize) -> Result<Vec<String>> {
        let root = self.root.as_ref().ok_or(Error::NoRoot)?;

        let mut lines = Vec::new();
        if let Some(title) = &self.config.title {
            lines.push(encode(title, Style::new().fg(Color::Yellow).bold()));
            lines.push(String::new());
        }

        let ctx = RenderContext::new(width, &self.scheduler).with_lock(self.nav.lock_origin());
        lines.extend(root.render(&ctx, width, self.nav.focus()));
        Ok(lines)
    }

    /// Run due tasks and, if the frame is dirty, repaint it into `out`.
    ///
    /// A redraw requested by a task goes through [`Navigator::invalidate`].
    /// Returns whether a frame was painted.
    pub fn tick<W: Write>(&mut self, out: &mut W, width: usize, now: Instant) -> Result<bool> {
        self.scheduler.run_due(now);
        if self.scheduler.take_redraw() {
            self.nav.invalidate();
        }
        if !self.nav.take_dirty() {
            return Ok(false);
        }

        let lines = self.frame(width)?;
        let mut buf = OutputBuffer::new();
        paint_frame(&mut buf, &lines)?;
        buf.flush_to(out)?;
        Ok(true)
    }

    /// Apply one terminal event. Returns [`Flow::Exit`] on Ctrl+C.
    pub fn handle_event(&mut self, event: &Event, width: &mut usize) -> Flow {
        match event {
            Event::Key(key) => match Key::from_event(key) {
                Some(key) => self.nav.handle_key(key),
                None => Flow::Continue,
            },
            Event::Resize(cols, _) => {
                debug!(cols, "resize");
                *width = *cols as usize;
                self.nav.mark_dirty();
                Flow::Continue
            }
            _ => Flow::Continue,
        }
    }

    /// Take over the terminal and run until Ctrl+C or a termination signal.
    ///
    /// Fails with [`Error::NoRoot`] before the terminal is touched if no
    /// root was set. The terminal is restored on every exit path.
    pub fn run(mut self) -> Result<()> {
        if self.root.is_none() {
            return Err(Error::NoRoot);
        }
        if let Some(path) = &self.config.log_file {
            logging::init(path)?;
        }

        let shutdown = Arc::new(AtomicBool::new(false));
        register_signals(&shutdown)?;

        let _guard = TerminalGuard::enter()?;
        let interval = self.config.frame_interval;
        let mut width = terminal_width();
        let mut stdout = io::stdout();
        let mut next_tick = Instant::now();
        info!(width, interval_ms = interval.as_millis() as u64, "started");

        loop {
            if shutdown.load(Ordering::Relaxed) {
                info!("termination signal");
                break;
            }

            let now = Instant::now();
            if now >= next_tick {
                self.tick(&mut stdout, width, now)?;
                next_tick = now + interval;
            } else {
                self.scheduler.run_due(now);
            }

            let wake = self.scheduler.next_due().map_or(next_tick, |due| due.min(next_tick));
            if event::poll(wake.saturating_duration_since(Instant::now()))? {
                let event = event::read()?;
                if self.handle_event(&event, &mut width) == Flow::Exit {
                    info!("interrupt");
                    break;
                }
            }
        }

        info!("stopped");
        Ok(())
    }
}

#[cfg(unix)]
fn register_signals(shutdown: &Arc<AtomicBool>) -> io::Result<()> {
    use signal_hook::consts::signal::{SIGHUP, SIGINT, SIGTERM};
    use signal_hook::flag;

    flag::register(SIGINT, Arc::clone(shutdown))?;
    flag::register(SIGTERM, Arc::clone(shutdown))?;
    flag::register(SIGHUP, Arc::clone(shutdown))?;
    Ok(())
}

#[cfg(not(unix))]
fn register_signals(_shutdown: &Arc<AtomicBool>) -> io::Result<()> {
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::strip_ansi;
    use crate::primitives::{Animate, Button, Text, VStack};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn app(nav: Navigator) -> App {
        App::new(nav).config(AppConfig::default())
    }

    fn plain(lines: &[String]) -> Vec<String> {
        lines.iter().map(|l| strip_ansi(l).into_owned()).collect()
    }

    #[test]
    fn frame_without_root_fails() {
        assert!(matches!(app(Navigator::new()).frame(80), Err(Error::NoRoot)));
    }

    #[test]
    fn run_without_root_fails_before_terminal_setup() {
        assert!(matches!(app(Navigator::new()).run(), Err(Error::NoRoot)));
    }

    #[test]
    fn frame_has_title_then_root() {
        let app = app(Navigator::new()).title("Docs").root(Text::from("body"));
        let lines = app.frame(20).unwrap();
        assert_eq!(lines[0], encode("Docs", Style::new().fg(Color::Yellow).bold()));
        assert_eq!(plain(&lines), vec!["Docs", "", "body"]);
    }

    #[test]
    fn tick_paints_only_when_dirty() {
        let mut app = app(Navigator::new()).root(Text::from("x"));
        let mut out = Vec::new();

        assert!(app.tick(&mut out, 10, Instant::now()).unwrap());
        assert!(String::from_utf8_lossy(&out).contains("x"));

        out.clear();
        assert!(!app.tick(&mut out, 10, Instant::now()).unwrap());
        assert!(out.is_empty());

        app.navigator_mut().handle_key(Key::Down);
        assert!(app.tick(&mut out, 10, Instant::now()).unwrap());
    }

    #[test]
    fn focus_drives_rendering() {
        let mut nav = Navigator::new();
        nav.set_bounds(Bounds::rows(0..=1));
        let root = VStack::new().add(Button::new("a").at((0, 0))).add(Button::new("b").at((1, 0)));
        let mut app = app(nav).root(root);

        let before = app.frame(20).unwrap();
        app.navigator_mut().handle_key(Key::Down);
        let after = app.frame(20).unwrap();

        assert_eq!(plain(&before), plain(&after));
        assert_ne!(before, after);
        assert_eq!(after[0], "[ a ]");
    }

    #[test]
    fn animation_redraw_reaches_the_frame() {
        let anim = Animate::new([vec!["1"], vec!["2"]]).delay(Duration::from_millis(5));
        let mut app = app(Navigator::new()).root(anim);
        let mut out = Vec::new();
        let start = Instant::now();

        assert!(app.tick(&mut out, 10, start).unwrap());
        assert!(!app.tick(&mut out, 10, start).unwrap());

        out.clear();
        assert!(app.tick(&mut out, 10, start + Duration::from_secs(1)).unwrap());
        assert!(String::from_utf8_lossy(&out).contains(&encode("2", Style::new())));
    }

    #[test]
    fn events_map_to_navigation() {
        let mut app = app(Navigator::new()).root(Text::from("x"));
        let mut width = 80;

        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(app.handle_event(&ctrl_c, &mut width), Flow::Exit);

        let down = Event::Key(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE));
        assert_eq!(app.handle_event(&down, &mut width), Flow::Continue);
        assert_eq!(app.navigator().focus().row, 1);

        app.navigator_mut().take_dirty();
        assert_eq!(app.handle_event(&Event::Resize(40, 10), &mut width), Flow::Continue);
        assert_eq!(width, 40);
        assert!(app.navigator().is_dirty());
    }

    #[test]
    fn config_from_vars() {
        let config = AppConfig::from_vars(Some("33".into()), Some(PathBuf::from("tad.log")));
        assert_eq!(config.frame_interval, Duration::from_millis(33));
        assert_eq!(config.log_file, Some(PathBuf::from("tad.log")));

        for bad in ["0", "-5", "fast", ""] {
            let config = AppConfig::from_vars(Some(bad.into()), None);
            assert_eq!(config.frame_interval, DEFAULT_FRAME_INTERVAL);
        }
        assert_eq!(AppConfig::from_vars(None, Some(PathBuf::new())).log_file, None);
    }
}
