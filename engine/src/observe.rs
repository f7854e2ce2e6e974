//! Viewport intersection watching.
//!
//! A [`Watcher`] is the engine's stand-in for intersection observation: it is
//! configured with ratio thresholds and fractional root insets, and on every
//! evaluation it computes each target's visible ratio against the inset
//! viewport. Entries are delivered for every target on the first evaluation
//! and afterwards only when a target's intersecting flag or crossed-threshold
//! count changes, mirroring observer callback timing closely enough that
//! one-shot triggers fire for content already in view at mount.

use veneer_types::{NodeId, RootInsets};

use crate::snapshot::DocumentGeometry;

/// One delivered observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObservationEntry {
    pub node: NodeId,
    /// Fraction of the target inside the (inset) root, in [0, 1].
    pub ratio: f64,
    pub is_intersecting: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Delivered {
    crossed: usize,
    intersecting: bool,
}

#[derive(Debug, Clone)]
struct Target {
    node: NodeId,
    last: Option<Delivered>,
}

/// Threshold-based intersection watcher over a set of targets.
/// Registration order is preserved; it doubles as the tie-break order for
/// consumers that rank entries.
#[derive(Debug, Clone)]
pub struct Watcher {
    thresholds: Vec<f64>,
    insets: RootInsets,
    targets: Vec<Target>,
}

impl Watcher {
    #[must_use]
    pub fn new(thresholds: &[f64], insets: RootInsets) -> Self {
        Self {
            thresholds: thresholds.to_vec(),
            insets,
            targets: Vec::new(),
        }
    }

    pub fn observe(&mut self, node: NodeId) {
        if !self.is_observing(node) {
            self.targets.push(Target { node, last: None });
        }
    }

    /// Detach a target; used by one-shot consumers after their trigger.
    pub fn unobserve(&mut self, node: NodeId) {
        self.targets.retain(|t| t.node != node);
    }

    #[must_use]
    pub fn is_observing(&self, node: NodeId) -> bool {
        self.targets.iter().any(|t| t.node == node)
    }

    /// Recompute every target against the current geometry and scroll offset
    /// and return the entries whose observation state changed. Targets with
    /// no reported rectangle are skipped entirely.
    pub fn evaluate(&mut self, geometry: &DocumentGeometry, scroll_y: f64) -> Vec<ObservationEntry> {
        let root = self.insets.apply(geometry.viewport.rect());
        let mut entries = Vec::new();
        for target in &mut self.targets {
            let Some(doc_rect) = geometry.rect_of(target.node) else {
                continue;
            };
            let view_rect = doc_rect.translated(0.0, -scroll_y);
            let ratio = view_rect.visible_ratio(&root);
            let intersecting = view_rect.overlap(&root).is_some();
            let crossed = self.thresholds.iter().filter(|t| ratio >= **t).count();
            let now = Delivered {
                crossed,
                intersecting,
            };
            if target.last != Some(now) {
                target.last = Some(now);
                entries.push(ObservationEntry {
                    node: target.node,
                    ratio,
                    is_intersecting: intersecting,
                });
            }
        }
        entries
    }
}
