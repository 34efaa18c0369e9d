//! Animate Primitive - self-advancing frame sequence.
//!
//! Each render shows the current frame and, if no advance is waiting yet,
//! queues one on the [`Scheduler`](crate::state::Scheduler) `delay` later.
//! The advance moves to the next frame (wrapping) and requests a redraw, so
//! the animation runs without any input and at its own pace, independent of
//! the frame tick. Frame lines are emitted unstyled through the encoder,
//! like any other text.
//!
//! # Example
//!
//! ```ignore
//! let spinner = Animate::new(vec![vec!["|"], vec!["/"], vec!["-"], vec!["\\"]])
//!     .delay(Duration::from_millis(120));
//! ```

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use crate::renderer::encode;
use crate::types::{Focus, Style};

use super::types::{Node, RenderContext};

/// Delay between frames when none is given.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(200);

pub struct Animate {
    frames: Vec<Vec<String>>,
    delay: Duration,
    stage: Rc<Cell<usize>>,
    /// An advance is queued and not yet run.
    pending: Rc<Cell<bool>>,
}

impl Animate {
    pub fn new<F, S>(frames: impl IntoIterator<Item = F>) -> Self
    where
        F: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            frames: frames
                .into_iter()
                .map(|frame| frame.into_iter().map(Into::into).collect())
                .collect(),
            delay: DEFAULT_DELAY,
            stage: Rc::new(Cell::new(0)),
            pending: Rc::new(Cell::new(false)),
        }
    }

    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Index of the frame shown by the next render.
    pub fn stage(&self) -> usize {
        self.stage.get()
    }
}

impl Node for Animate {
    fn render(&self, ctx: &RenderContext<'_>, _allowed_width: usize, _focus: Focus) -> Vec<String> {
        let count = self.frames.len();
        let Some(frame) = self.frames.get(self.stage.get() % count.max(1)) else {
            return Vec::new();
        };

        if !self.pending.replace(true) {
            let stage = self.stage.clone();
            let pending = self.pending.clone();
            ctx.scheduler.after(self.delay, move |scheduler| {
                stage.set((stage.get() + 1) % count);
                pending.set(false);
                scheduler.request_redraw();
            });
        }

        frame.iter().map(|line| encode(line, Style::new())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::strip_ansi;
    use crate::state::Scheduler;
    use std::time::Instant;

    fn plain(lines: Vec<String>) -> Vec<String> {
        lines.iter().map(|line| strip_ansi(line).into_owned()).collect()
    }

    fn frames() -> Animate {
        Animate::new([vec!["one"], vec!["two", "lines"], vec!["three"]]).delay(Duration::from_millis(50))
    }

    #[test]
    fn renders_current_frame_and_queues_one_advance() {
        let anim = frames();
        let scheduler = Scheduler::new();
        let ctx = RenderContext::new(80, &scheduler);

        assert_eq!(anim.render(&ctx, 80, Focus::default()), vec![encode("one", Style::new())]);
        assert_eq!(scheduler.pending(), 1);

        // Rendering again before the advance runs does not queue another.
        anim.render(&ctx, 80, Focus::default());
        assert_eq!(scheduler.pending(), 1);
    }

    #[test]
    fn advance_wraps_and_requests_redraw() {
        let anim = frames();
        let scheduler = Scheduler::new();
        let ctx = RenderContext::new(80, &scheduler);
        let later = Instant::now() + Duration::from_secs(1);

        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(plain(anim.render(&ctx, 80, Focus::default())));
            assert!(!scheduler.take_redraw());
            assert_eq!(scheduler.run_due(later), 1);
            assert!(scheduler.take_redraw());
        }

        assert_eq!(seen[0], vec!["one"]);
        assert_eq!(seen[1], vec!["two", "lines"]);
        assert_eq!(seen[2], vec!["three"]);
        assert_eq!(seen[3], vec!["one"]);
    }

    #[test]
    fn advance_waits_for_delay() {
        let anim = frames();
        let scheduler = Scheduler::new();
        let ctx = RenderContext::new(80, &scheduler);

        anim.render(&ctx, 80, Focus::default());
        assert_eq!(scheduler.run_due(Instant::now()), 0);
        assert_eq!(anim.stage(), 0);
    }

    #[test]
    fn no_frames_renders_nothing() {
        let anim = Animate::new(Vec::<Vec<String>>::new());
        let scheduler = Scheduler::new();
        let ctx = RenderContext::new(80, &scheduler);
        assert!(anim.render(&ctx, 80, Focus::default()).is_empty());
        assert_eq!(scheduler.pending(), 0);
    }
}
