//! Explicit animation stepping.
//!
//! Instead of self-rescheduling frame callbacks, an animation owns a
//! [`Timeline`] and the host feeds it elapsed time; each step reports whether
//! the animation wants further frames. This keeps every animation testable
//! with synthetic clocks.

use std::time::Duration;

/// Outcome of advancing a timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The animation still wants frames.
    Continue,
    /// The timeline is exhausted; no further frames are needed.
    Done,
}

/// Elapsed/total clock for a fixed-duration animation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline {
    elapsed: Duration,
    duration: Duration,
}

impl Timeline {
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            duration,
        }
    }

    /// Advance by `delta` and report whether the animation should continue.
    pub fn advance(&mut self, delta: Duration) -> Step {
        self.elapsed = self.elapsed.saturating_add(delta);
        if self.is_finished() { Step::Done } else { Step::Continue }
    }

    /// Normalized progress in [0, 1]. A zero-duration timeline is complete.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}
