//! Active-section tracking.

use std::collections::HashMap;

use veneer_types::{Capabilities, Effect, NodeId, RootInsets, Tuning};

use crate::links::{DEFAULT_SECTION, NavLinks};
use crate::observe::Watcher;
use crate::snapshot::{DocumentGeometry, SectionRef};

/// Watches page sections and keeps the nav marking on the one most in view.
///
/// The observation root is shrunk toward the upper-center band of the screen,
/// so "active" biases to the section a reader is actually looking at. Among
/// currently-intersecting sections the highest ratio wins; ties go to the
/// earlier registration. When nothing intersects the previous marking stays
/// (sticky last-known state).
#[derive(Debug)]
pub struct SectionTracker {
    sections: Vec<(NodeId, String)>,
    latest: HashMap<NodeId, (f64, bool)>,
    watcher: Option<Watcher>,
}

impl SectionTracker {
    #[must_use]
    pub fn new(sections: &[SectionRef], caps: &Capabilities, tuning: &Tuning) -> Self {
        let watcher = (caps.tracking_enabled() && !sections.is_empty()).then(|| {
            let mut watcher = Watcher::new(
                &tuning.section_thresholds,
                RootInsets::shrink(tuning.section_top_inset, tuning.section_bottom_inset),
            );
            for section in sections {
                watcher.observe(section.node);
            }
            watcher
        });
        Self {
            sections: sections
                .iter()
                .map(|s| (s.node, s.id.clone()))
                .collect(),
            latest: HashMap::new(),
            watcher,
        }
    }

    /// Initial "home" marking plus a first observation pass, so a page opened
    /// mid-document starts on the right link.
    pub fn mount(
        &mut self,
        links: &mut NavLinks,
        geometry: &DocumentGeometry,
        scroll_y: f64,
        effects: &mut Vec<Effect>,
    ) {
        links.set_active(DEFAULT_SECTION, effects);
        self.reassess(links, geometry, scroll_y, effects);
    }

    /// Re-evaluate after a scroll or layout change.
    pub fn reassess(
        &mut self,
        links: &mut NavLinks,
        geometry: &DocumentGeometry,
        scroll_y: f64,
        effects: &mut Vec<Effect>,
    ) {
        let Some(watcher) = &mut self.watcher else {
            return;
        };
        let entries = watcher.evaluate(geometry, scroll_y);
        if entries.is_empty() {
            return;
        }
        for entry in entries {
            self.latest
                .insert(entry.node, (entry.ratio, entry.is_intersecting));
        }
        let mut best: Option<(&str, f64)> = None;
        for (node, id) in &self.sections {
            if let Some((ratio, true)) = self.latest.get(node)
                && best.is_none_or(|(_, r)| *ratio > r)
            {
                best = Some((id, *ratio));
            }
        }
        if let Some((id, _)) = best {
            let id = if id.is_empty() { DEFAULT_SECTION } else { id };
            links.set_active(id, effects);
        }
    }
}
