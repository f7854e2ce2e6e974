//! Environment capabilities, evaluated once at startup.

use crate::tuning::Tuning;

/// Immutable capability flags consumed by every component.
///
/// The host evaluates its media queries and feature checks once, before
/// mounting a page, and the resulting value never changes. Later breakpoint
/// crossings arrive as input events instead of mutating this struct, so every
/// animated behavior is selected exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Capabilities {
    /// The environment requested minimal animation.
    pub reduce_motion: bool,
    /// A precise pointing device that can hover (mouse-like, not touch-only).
    pub fine_pointer: bool,
    /// Viewport was at or below the mobile breakpoint at startup.
    pub mobile_viewport: bool,
    /// Viewport-intersection observation is available.
    pub intersection_observer: bool,
    /// Animation-frame scheduling is available.
    pub animation_frames: bool,
}

impl Capabilities {
    /// Whether viewport-entry triggers can animate at all. Without
    /// intersection support there is no trigger, so the static fallback
    /// presentation is used.
    #[must_use]
    pub fn reveals_animated(self) -> bool {
        !self.reduce_motion && self.intersection_observer
    }

    /// Counters additionally need frame callbacks to step their timeline.
    #[must_use]
    pub fn counters_animated(self) -> bool {
        !self.reduce_motion && self.intersection_observer && self.animation_frames
    }

    /// Tilt requires a hover-capable fine pointer and permission to move.
    #[must_use]
    pub fn tilt_enabled(self) -> bool {
        !self.reduce_motion && self.fine_pointer
    }

    /// Section tracking only needs intersection observation.
    #[must_use]
    pub fn tracking_enabled(self) -> bool {
        self.intersection_observer
    }

    /// Evaluate the startup viewport flag the way a host's breakpoint query
    /// would, keeping the threshold in one place.
    #[must_use]
    pub fn with_viewport_width(self, width: f64, tuning: &Tuning) -> Self {
        Self {
            mobile_viewport: width <= tuning.mobile_breakpoint,
            ..self
        }
    }
}

impl Default for Capabilities {
    /// A full-featured desktop environment.
    fn default() -> Self {
        Self {
            reduce_motion: false,
            fine_pointer: true,
            mobile_viewport: false,
            intersection_observer: true,
            animation_frames: true,
        }
    }
}
