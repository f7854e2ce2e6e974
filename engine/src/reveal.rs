//! Scroll-triggered reveal cascade.

use std::time::Duration;

use veneer_types::{Capabilities, CssClass, Effect, NodeId, RootInsets, StyleProp, Tuning};

use crate::observe::Watcher;
use crate::snapshot::DocumentGeometry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RevealState {
    Pending,
    Revealed,
}

/// One-shot reveal-on-view for a set of elements.
///
/// Items revealed once never go back to pending. Groups entering together
/// cascade: each item waits (index mod cycle) stagger steps before its
/// transition plays, and the pattern repeats for later groups.
#[derive(Debug)]
pub struct RevealSet {
    items: Vec<(NodeId, RevealState)>,
    stagger_step: Duration,
    stagger_cycle: usize,
    watcher: Option<Watcher>,
}

impl RevealSet {
    #[must_use]
    pub fn new(items: &[NodeId], caps: &Capabilities, tuning: &Tuning) -> Self {
        let watcher = (caps.reveals_animated() && !items.is_empty()).then(|| {
            let mut watcher = Watcher::new(
                &[tuning.reveal_threshold],
                RootInsets::shrink(0.0, tuning.reveal_bottom_inset),
            );
            for node in items {
                watcher.observe(*node);
            }
            watcher
        });
        Self {
            items: items.iter().map(|n| (*n, RevealState::Pending)).collect(),
            stagger_step: tuning.reveal_stagger_step,
            stagger_cycle: tuning.reveal_stagger_cycle.max(1),
            watcher,
        }
    }

    /// Apply stagger delays and either start observing or, on the static
    /// path, reveal everything immediately. The delays are written even when
    /// motion is off; the instant reveal means they never play.
    pub fn mount(
        &mut self,
        geometry: &DocumentGeometry,
        scroll_y: f64,
        effects: &mut Vec<Effect>,
    ) {
        for (index, (node, _)) in self.items.iter().enumerate() {
            let step = (index % self.stagger_cycle).min(self.stagger_cycle - 1);
            let delay_ms = step as u128 * self.stagger_step.as_millis();
            effects.push(Effect::StyleSet {
                node: *node,
                prop: StyleProp::TransitionDelay,
                value: format!("{delay_ms}ms"),
            });
        }
        if self.watcher.is_some() {
            self.reassess(geometry, scroll_y, effects);
        } else {
            for (node, state) in &mut self.items {
                *state = RevealState::Revealed;
                effects.push(Effect::ClassAdded {
                    node: *node,
                    class: CssClass::InView,
                });
            }
        }
    }

    /// Reveal newly-visible items after a scroll or layout change.
    pub fn reassess(
        &mut self,
        geometry: &DocumentGeometry,
        scroll_y: f64,
        effects: &mut Vec<Effect>,
    ) {
        let Some(watcher) = &mut self.watcher else {
            return;
        };
        for entry in watcher.evaluate(geometry, scroll_y) {
            if !entry.is_intersecting {
                continue;
            }
            if let Some((node, state)) = self.items.iter_mut().find(|(n, _)| *n == entry.node)
                && *state == RevealState::Pending
            {
                *state = RevealState::Revealed;
                effects.push(Effect::ClassAdded {
                    node: *node,
                    class: CssClass::InView,
                });
                watcher.unobserve(entry.node);
            }
        }
    }

    #[must_use]
    pub fn is_revealed(&self, node: NodeId) -> bool {
        self.items
            .iter()
            .any(|(n, state)| *n == node && *state == RevealState::Revealed)
    }
}
