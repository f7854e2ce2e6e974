//! Scroll progress indicator.

use veneer_types::{Effect, NodeId, StyleProp};

use crate::snapshot::DocumentGeometry;

/// Fraction of the scrollable height consumed by `scroll_y`, in [0, 1].
/// Content that fits in the viewport has no scrollable height and reports 0.
#[must_use]
pub fn scroll_ratio(scroll_y: f64, viewport_height: f64, content_height: f64) -> f64 {
    let scrollable = content_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

/// Maps scroll position onto a horizontal fill transform.
#[derive(Debug)]
pub struct ProgressBar {
    node: Option<NodeId>,
}

impl ProgressBar {
    #[must_use]
    pub fn new(node: Option<NodeId>) -> Self {
        Self { node }
    }

    /// Emit the current fill; a no-op when the page has no indicator bar.
    pub fn update(&self, geometry: &DocumentGeometry, scroll_y: f64, effects: &mut Vec<Effect>) {
        let Some(node) = self.node else { return };
        let ratio = scroll_ratio(scroll_y, geometry.viewport.height, geometry.content_height);
        effects.push(Effect::StyleSet {
            node,
            prop: StyleProp::Transform,
            value: format!("scaleX({ratio})"),
        });
    }
}
