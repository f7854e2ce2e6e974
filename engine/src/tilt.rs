//! Pointer tilt effect for cards.

use std::collections::HashSet;

use veneer_types::{Capabilities, Effect, NodeId, StyleProp, Tuning};

use crate::snapshot::DocumentGeometry;

/// Maps pointer position over a card to a pair of tilt angles.
///
/// Horizontal cursor position drives the Y rotation and vertical drives X,
/// with deliberately asymmetric ranges; both are part of the visual feel and
/// must not be "corrected". Angles update on every move with no smoothing and
/// are cleared when the pointer leaves.
#[derive(Debug)]
pub struct TiltSet {
    cards: HashSet<NodeId>,
    enabled: bool,
    x_range: f64,
    y_range: f64,
}

impl TiltSet {
    #[must_use]
    pub fn new(cards: &[NodeId], caps: &Capabilities, tuning: &Tuning) -> Self {
        Self {
            cards: cards.iter().copied().collect(),
            enabled: caps.tilt_enabled(),
            x_range: tuning.tilt_x_range,
            y_range: tuning.tilt_y_range,
        }
    }

    /// Pointer moved over `card` at viewport coordinates (x, y).
    pub fn pointer_moved(
        &self,
        card: NodeId,
        x: f64,
        y: f64,
        geometry: &DocumentGeometry,
        scroll_y: f64,
        effects: &mut Vec<Effect>,
    ) {
        if !self.enabled || !self.cards.contains(&card) {
            return;
        }
        let Some(rect) = geometry.rect_of(card) else {
            return;
        };
        let bounds = rect.translated(0.0, -scroll_y);
        if bounds.width <= 0.0 || bounds.height <= 0.0 {
            return;
        }
        let nx = (x - bounds.left) / bounds.width;
        let ny = (y - bounds.top) / bounds.height;
        let rotate_y = (nx - 0.5) * self.y_range;
        let rotate_x = (0.5 - ny) * self.x_range;
        effects.push(Effect::StyleSet {
            node: card,
            prop: StyleProp::TiltX,
            value: format!("{rotate_x:.2}deg"),
        });
        effects.push(Effect::StyleSet {
            node: card,
            prop: StyleProp::TiltY,
            value: format!("{rotate_y:.2}deg"),
        });
    }

    /// Pointer left `card`: return to the neutral tilt.
    pub fn pointer_left(&self, card: NodeId, effects: &mut Vec<Effect>) {
        if !self.enabled || !self.cards.contains(&card) {
            return;
        }
        effects.push(Effect::StyleCleared {
            node: card,
            prop: StyleProp::TiltX,
        });
        effects.push(Effect::StyleCleared {
            node: card,
            prop: StyleProp::TiltY,
        });
    }
}
