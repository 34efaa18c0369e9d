//! Focus System - grid navigation, action registries and movement lock
//!
//! The [`Navigator`] owns everything keyboard input can change:
//! - the focused [`Focus`] coordinate and the [`Bounds`] arrows may reach
//! - press and select actions registered per coordinate
//! - the single-slot movement lock and its subscribers
//! - the viewport registry used by scroll nodes
//! - the dirty flag read by the run loop
//!
//! # Lock protocol
//!
//! ```text
//!            lock_movement()
//! Unlocked ─────────────────▶ Locked(origin)
//!    ▲                            │  arrows go to on_locked_move subscribers
//!    └──────── Escape ────────────┘  (focus does not move)
//! ```
//!
//! Acquiring a lock drops every subscriber registered for the previous one;
//! there is no nesting.
//!
//! # Example
//!
//! ```ignore
//! let mut nav = Navigator::new();
//! nav.set_bounds(Bounds::new(0..=2, 0..=0));
//! nav.on_press(Focus::new(1, 0), |nav| nav.lock_movement());
//!
//! nav.handle_key(Key::Down);
//! nav.handle_key(Key::Enter);
//! assert!(nav.is_locked());
//! ```

use std::collections::HashMap;
use std::fmt;
use std::ops::RangeInclusive;
use std::rc::Rc;
use std::cell::RefCell;

use tracing::{debug, warn};

use super::keyboard::Key;
use super::scroll::{Viewport, ViewportRegistry};
use crate::types::{Direction, Focus};

/// Action bound to a coordinate or to unlocking.
pub type Action = Rc<dyn Fn(&mut Navigator)>;

/// Subscriber receiving arrow directions while movement is locked.
pub type DirectionAction = Rc<dyn Fn(&mut Navigator, Direction)>;

// =============================================================================
// Bounds
// =============================================================================

/// Region of the grid arrow keys can move focus into.
///
/// The column maximum may be given per row; rows without an entry (including
/// negative rows) fall back to `max_col`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bounds {
    pub min_row: i32,
    pub max_row: i32,
    pub min_col: i32,
    pub max_col: i32,
    pub row_max_cols: Option<Vec<i32>>,
}

impl Default for Bounds {
    /// Unbounded in every direction.
    fn default() -> Self {
        Self {
            min_row: i32::MIN,
            max_row: i32::MAX,
            min_col: i32::MIN,
            max_col: i32::MAX,
            row_max_cols: None,
        }
    }
}

impl Bounds {
    pub fn new(rows: RangeInclusive<i32>, cols: RangeInclusive<i32>) -> Self {
        Self {
            min_row: *rows.start(),
            max_row: *rows.end(),
            min_col: *cols.start(),
            max_col: *cols.end(),
            row_max_cols: None,
        }
    }

    /// Rows limited, columns unbounded.
    pub fn rows(rows: RangeInclusive<i32>) -> Self {
        Self::new(rows, i32::MIN..=i32::MAX)
    }

    /// Per-row column maxima, indexed by row.
    pub fn per_row(mut self, max_cols: Vec<i32>) -> Self {
        self.row_max_cols = Some(max_cols);
        self
    }

    /// Column maximum that applies on `row`.
    pub fn max_col_for(&self, row: i32) -> i32 {
        usize::try_from(row)
            .ok()
            .and_then(|r| self.row_max_cols.as_ref()?.get(r).copied())
            .unwrap_or(self.max_col)
    }

    /// Pull `focus` into the bounds.
    ///
    /// Inverted ranges never panic; the maximum wins.
    pub fn clamp(&self, focus: Focus) -> Focus {
        let row = focus.row.max(self.min_row).min(self.max_row);
        let col = focus.col.max(self.min_col).min(self.max_col_for(row));
        Focus::new(row, col)
    }

    pub fn contains(&self, focus: Focus) -> bool {
        self.clamp(focus) == focus
    }
}

// =============================================================================
// Lock
// =============================================================================

/// Movement lock state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lock {
    #[default]
    Unlocked,
    /// Locked while focus was at the contained coordinate.
    Locked(Focus),
}

/// What the run loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

// =============================================================================
// Navigator
// =============================================================================

/// Focus coordinate, action registries, lock and dirty flag.
pub struct Navigator {
    focus: Focus,
    bounds: Bounds,
    press: HashMap<Focus, Action>,
    select: HashMap<Focus, Action>,
    lock: Lock,
    on_unlock: Vec<Action>,
    on_locked_move: Vec<DirectionAction>,
    viewports: ViewportRegistry,
    dirty: bool,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Navigator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Navigator")
            .field("focus", &self.focus)
            .field("bounds", &self.bounds)
            .field("press", &self.press.len())
            .field("select", &self.select.len())
            .field("lock", &self.lock)
            .field("dirty", &self.dirty)
            .finish_non_exhaustive()
    }
}

impl Navigator {
    /// Focus at (0, 0), unbounded, unlocked, dirty so the first tick paints.
    pub fn new() -> Self {
        Self {
            focus: Focus::default(),
            bounds: Bounds::default(),
            press: HashMap::new(),
            select: HashMap::new(),
            lock: Lock::Unlocked,
            on_unlock: Vec::new(),
            on_locked_move: Vec::new(),
            viewports: ViewportRegistry::default(),
            dirty: true,
        }
    }

    // -------------------------------------------------------------------------
    // Focus and bounds
    // -------------------------------------------------------------------------

    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Move focus directly, ignoring bounds.
    pub fn set_focus(&mut self, focus: impl Into<Focus>) {
        self.focus = focus.into();
        self.dirty = true;
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Replace the bounds. The current focus is left where it is; the next
    /// arrow key pulls it inside.
    pub fn set_bounds(&mut self, bounds: Bounds) {
        debug!(?bounds, "bounds changed");
        self.bounds = bounds;
        self.dirty = true;
    }

    // -------------------------------------------------------------------------
    // Registries
    // -------------------------------------------------------------------------

    /// Register the action run when Enter is pressed at `at`.
    ///
    /// A later registration at the same coordinate replaces this one.
    pub fn on_press(&mut self, at: impl Into<Focus>, action: impl Fn(&mut Navigator) + 'static) {
        let at = at.into();
        if self.press.insert(at, Rc::new(action)).is_some() {
            warn!(focus = %at, "press action replaced");
        }
    }

    /// Register the action run by [`Navigator::invalidate`] while focus is at `at`.
    pub fn on_select(&mut self, at: impl Into<Focus>, action: impl Fn(&mut Navigator) + 'static) {
        let at = at.into();
        if self.select.insert(at, Rc::new(action)).is_some() {
            warn!(focus = %at, "select action replaced");
        }
    }

    pub fn has_press(&self, at: Focus) -> bool {
        self.press.contains_key(&at)
    }

    pub fn has_select(&self, at: Focus) -> bool {
        self.select.contains_key(&at)
    }

    /// Viewport state for a scroll id, created on first use.
    pub fn viewport(&mut self, id: &str, height: usize) -> Rc<RefCell<Viewport>> {
        self.viewports.get_or_create(id, height)
    }

    pub fn viewports(&self) -> &ViewportRegistry {
        &self.viewports
    }

    // -------------------------------------------------------------------------
    // Lock
    // -------------------------------------------------------------------------

    pub fn lock(&self) -> Lock {
        self.lock
    }

    pub fn is_locked(&self) -> bool {
        matches!(self.lock, Lock::Locked(_))
    }

    /// Coordinate the active lock was taken at.
    pub fn lock_origin(&self) -> Option<Focus> {
        match self.lock {
            Lock::Locked(origin) => Some(origin),
            Lock::Unlocked => None,
        }
    }

    /// Lock movement at the current focus, dropping the previous lock's subscribers.
    pub fn lock_movement(&mut self) {
        debug!(origin = %self.focus, "movement locked");
        self.lock = Lock::Locked(self.focus);
        self.on_unlock.clear();
        self.on_locked_move.clear();
    }

    /// Subscribe to the next Escape.
    pub fn on_unlock(&mut self, action: impl Fn(&mut Navigator) + 'static) {
        self.on_unlock.push(Rc::new(action));
    }

    /// Subscribe to arrow keys pressed while locked.
    pub fn on_locked_move(&mut self, action: impl Fn(&mut Navigator, Direction) + 'static) {
        self.on_locked_move.push(Rc::new(action));
    }

    /// Release the lock and fire unlock subscribers in registration order.
    ///
    /// Runs even when no lock is held. Subscribers stay registered until the
    /// next [`Navigator::lock_movement`].
    pub fn unlock(&mut self) {
        if self.is_locked() {
            debug!("movement unlocked");
        }
        self.lock = Lock::Unlocked;
        let subscribers = self.on_unlock.clone();
        for action in subscribers {
            action(self);
        }
    }

    // -------------------------------------------------------------------------
    // Input
    // -------------------------------------------------------------------------

    /// Apply one key.
    ///
    /// Unlocked arrows move one step, then clamp the whole coordinate
    /// against the bounds, not only the component that moved. A vertical
    /// move onto a row with a smaller per-row maximum pulls the column in,
    /// and a focus placed outside the bounds is pulled back by any arrow.
    /// Locked arrows leave focus alone and go to the locked-move
    /// subscribers. Every key except Ctrl+C ends in [`Navigator::invalidate`].
    pub fn handle_key(&mut self, key: Key) -> Flow {
        debug!(?key, focus = %self.focus, "key");

        match key {
            Key::Interrupt => return Flow::Exit,
            Key::Up | Key::Down | Key::Left | Key::Right => {
                if let Some(direction) = key.direction() {
                    self.arrow(direction);
                }
            }
            Key::Enter => {
                if let Some(action) = self.press.get(&self.focus).cloned() {
                    action(self);
                }
            }
            Key::Escape => self.unlock(),
        }

        self.invalidate();
        Flow::Continue
    }

    fn arrow(&mut self, direction: Direction) {
        if self.is_locked() {
            let subscribers = self.on_locked_move.clone();
            for action in subscribers {
                action(self, direction);
            }
            return;
        }

        let Focus { row, col } = self.focus;
        let moved = match direction {
            Direction::Up => Focus::new(row.saturating_sub(1), col),
            Direction::Down => Focus::new(row.saturating_add(1), col),
            Direction::Left => Focus::new(row, col.saturating_sub(1)),
            Direction::Right => Focus::new(row, col.saturating_add(1)),
        };
        self.focus = self.bounds.clamp(moved);
    }

    // -------------------------------------------------------------------------
    // Dirty flag
    // -------------------------------------------------------------------------

    /// Run the select action at the current focus, then mark the frame dirty.
    ///
    /// The select action runs on every call, not only when focus changed.
    pub fn invalidate(&mut self) {
        if let Some(action) = self.select.get(&self.focus).cloned() {
            action(self);
        }
        self.dirty = true;
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear the dirty flag, returning whether it was set.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }
}
