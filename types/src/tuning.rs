//! Behavior constants gathered into one place.

use std::time::Duration;

/// Every tunable constant of the page behaviors. `Default` is the shipped
/// feel; hosts can deserialize an override but nothing is read from disk.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Viewport width at or below which the collapsible nav applies.
    pub mobile_breakpoint: f64,
    /// Extra clearance under a sticky header when jumping to an anchor.
    pub header_clearance: f64,
    /// Anchor clearance when the page has no header element.
    pub header_fallback: f64,
    /// Intersection ratio at which a reveal item fires.
    pub reveal_threshold: f64,
    /// Fraction of the viewport bottom excluded from reveal observation.
    pub reveal_bottom_inset: f64,
    /// Delay step between items of one reveal cascade.
    pub reveal_stagger_step: Duration,
    /// Cascade length before the stagger pattern repeats.
    pub reveal_stagger_cycle: usize,
    /// Ratios at which section visibility is re-evaluated.
    pub section_thresholds: [f64; 3],
    /// Fraction of the viewport top excluded from section observation.
    pub section_top_inset: f64,
    /// Fraction of the viewport bottom excluded from section observation.
    pub section_bottom_inset: f64,
    /// Intersection ratio at which a counter starts counting.
    pub counter_threshold: f64,
    /// Full count-up duration.
    pub counter_duration: Duration,
    /// Degrees of X-axis rotation across a card's full height.
    pub tilt_x_range: f64,
    /// Degrees of Y-axis rotation across a card's full width.
    pub tilt_y_range: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            mobile_breakpoint: 760.0,
            header_clearance: 12.0,
            header_fallback: 82.0,
            reveal_threshold: 0.18,
            reveal_bottom_inset: 0.08,
            reveal_stagger_step: Duration::from_millis(70),
            reveal_stagger_cycle: 6,
            section_thresholds: [0.2, 0.45, 0.7],
            section_top_inset: 0.22,
            section_bottom_inset: 0.45,
            counter_threshold: 0.45,
            counter_duration: Duration::from_millis(1100),
            tilt_x_range: 7.0,
            tilt_y_range: 8.0,
        }
    }
}
