//! In-page anchor navigation.

use std::collections::HashMap;

use veneer_types::{Capabilities, NodeId, ScrollBehavior, Tuning};

use crate::links::DEFAULT_SECTION;
use crate::snapshot::{DocumentGeometry, PageSnapshot};

/// A resolved anchor activation.
#[derive(Debug, Clone, PartialEq)]
pub struct AnchorJump {
    pub section: NodeId,
    /// Section id to mark active immediately (defaulted when empty).
    pub section_id: String,
    /// Absolute document offset to scroll to, already clamped to >= 0.
    pub top: f64,
    pub behavior: ScrollBehavior,
    /// Fragment to swap into the location, e.g. `"#services"`.
    pub fragment: String,
}

/// Resolves link activations to scroll jumps. Links whose href is not an
/// in-page fragment, or whose fragment matches no observed section, resolve
/// to `None` and the host lets native navigation proceed.
#[derive(Debug)]
pub struct AnchorNav {
    hrefs: HashMap<NodeId, String>,
    sections: HashMap<String, NodeId>,
    behavior: ScrollBehavior,
    clearance: f64,
    fallback: f64,
}

impl AnchorNav {
    #[must_use]
    pub fn from_snapshot(snapshot: &PageSnapshot, caps: &Capabilities, tuning: &Tuning) -> Self {
        let hrefs = snapshot
            .links
            .iter()
            .map(|l| (l.node, l.href.clone()))
            .collect();
        let mut sections = HashMap::new();
        for section in &snapshot.sections {
            // First registration wins on duplicate ids.
            sections.entry(section.id.clone()).or_insert(section.node);
        }
        let behavior = if caps.reduce_motion {
            ScrollBehavior::Auto
        } else {
            ScrollBehavior::Smooth
        };
        Self {
            hrefs,
            sections,
            behavior,
            clearance: tuning.header_clearance,
            fallback: tuning.header_fallback,
        }
    }

    /// Resolve an activation of `link` against the current layout.
    #[must_use]
    pub fn activate(&self, link: NodeId, geometry: &DocumentGeometry) -> Option<AnchorJump> {
        let href = self.hrefs.get(&link)?;
        let fragment = href.strip_prefix('#')?;
        let section = *self.sections.get(fragment)?;
        let rect = geometry.rect_of(section)?;
        let offset = geometry
            .header_height
            .map_or(self.fallback, |h| h + self.clearance);
        let section_id = if fragment.is_empty() {
            DEFAULT_SECTION
        } else {
            fragment
        };
        Some(AnchorJump {
            section,
            section_id: section_id.to_owned(),
            top: (rect.top - offset).max(0.0),
            behavior: self.behavior,
            fragment: href.clone(),
        })
    }
}
