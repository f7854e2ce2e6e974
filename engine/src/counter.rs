//! Count-up stat animation.

use std::time::Duration;

use veneer_types::{
    Capabilities, Effect, NodeId, RootInsets, Step, Timeline, Tuning, count_text, ease_out_cubic,
    parse_target,
};

use crate::observe::Watcher;
use crate::snapshot::{CounterRef, DocumentGeometry};

#[derive(Debug, Clone, PartialEq, Eq)]
enum CounterPhase {
    Idle,
    Animating(Timeline),
    Done,
}

#[derive(Debug)]
struct CounterItem {
    node: NodeId,
    target: i64,
    suffix: String,
    phase: CounterPhase,
}

/// Animated numeric displays, counting from zero to their target on first
/// viewport entry. Each counter runs exactly once; repeated triggers are
/// ignored, and the final frame lands on the exact grouped target.
#[derive(Debug)]
pub struct CounterSet {
    items: Vec<CounterItem>,
    watcher: Option<Watcher>,
    duration: Duration,
}

impl CounterSet {
    #[must_use]
    pub fn new(counters: &[CounterRef], caps: &Capabilities, tuning: &Tuning) -> Self {
        let items = counters
            .iter()
            .map(|c| CounterItem {
                node: c.node,
                target: parse_target(c.target.as_deref().unwrap_or_default()),
                suffix: c.suffix.clone().unwrap_or_default(),
                phase: CounterPhase::Idle,
            })
            .collect();
        let watcher = (caps.counters_animated() && !counters.is_empty()).then(|| {
            let mut watcher = Watcher::new(&[tuning.counter_threshold], RootInsets::NONE);
            for counter in counters {
                watcher.observe(counter.node);
            }
            watcher
        });
        Self {
            items,
            watcher,
            duration: tuning.counter_duration,
        }
    }

    /// Render the initial text: zero on the animated path (plus a first
    /// observation pass for counters already in view), the final value on the
    /// static path.
    pub fn mount(
        &mut self,
        geometry: &DocumentGeometry,
        scroll_y: f64,
        effects: &mut Vec<Effect>,
    ) {
        if self.watcher.is_some() {
            for item in &self.items {
                effects.push(Effect::TextSet {
                    node: item.node,
                    text: count_text(0.0, &item.suffix),
                });
            }
            self.reassess(geometry, scroll_y);
        } else {
            for item in &mut self.items {
                item.phase = CounterPhase::Done;
                effects.push(Effect::TextSet {
                    node: item.node,
                    text: count_text(item.target as f64, &item.suffix),
                });
            }
        }
    }

    /// Start counters whose elements came into view. Triggering emits no
    /// effects by itself; the next frame draws.
    pub fn reassess(&mut self, geometry: &DocumentGeometry, scroll_y: f64) {
        let Some(watcher) = &mut self.watcher else {
            return;
        };
        for entry in watcher.evaluate(geometry, scroll_y) {
            if !entry.is_intersecting {
                continue;
            }
            if let Some(item) = self.items.iter_mut().find(|i| i.node == entry.node) {
                if item.phase == CounterPhase::Idle {
                    item.phase = CounterPhase::Animating(Timeline::new(self.duration));
                    tracing::debug!(node = %item.node, target = item.target, "counter started");
                }
                watcher.unobserve(entry.node);
            }
        }
    }

    /// Step every running counter by the frame delta.
    pub fn on_frame(&mut self, delta: Duration, effects: &mut Vec<Effect>) {
        for item in &mut self.items {
            if let CounterPhase::Animating(timeline) = &mut item.phase {
                let step = timeline.advance(delta);
                let eased = ease_out_cubic(timeline.progress());
                effects.push(Effect::TextSet {
                    node: item.node,
                    text: count_text(item.target as f64 * eased, &item.suffix),
                });
                if step == Step::Done {
                    tracing::debug!(node = %item.node, "counter finished");
                    item.phase = CounterPhase::Done;
                }
            }
        }
    }

    /// Whether any counter still wants frames.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.items
            .iter()
            .any(|i| matches!(i.phase, CounterPhase::Animating(_)))
    }
}
