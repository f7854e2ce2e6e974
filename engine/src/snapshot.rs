//! Host-provided description of the page.

use std::collections::HashMap;

use veneer_types::{NodeId, Rect, Viewport};

/// A navigation link and its raw href (`"#services"`, `"/pricing"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LinkRef {
    pub node: NodeId,
    pub href: String,
}

/// A page section observed for active-link tracking.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SectionRef {
    pub node: NodeId,
    pub id: String,
}

/// A counter element with its attached configuration data.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CounterRef {
    pub node: NodeId,
    /// Raw target value as attached to the element; parsed leniently.
    pub target: Option<String>,
    pub suffix: Option<String>,
}

/// Layout facts about the document: viewport, scrollable height, and the
/// document-space rectangle of every node the engine cares about.
///
/// The host replaces this wholesale on re-layout; the engine never mutates
/// it except by swapping in the replacement.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DocumentGeometry {
    pub viewport: Viewport,
    /// Full scrollable document height.
    pub content_height: f64,
    /// Current height of the sticky header, when one exists.
    pub header_height: Option<f64>,
    rects: HashMap<NodeId, Rect>,
}

impl DocumentGeometry {
    #[must_use]
    pub fn new(viewport: Viewport, content_height: f64) -> Self {
        Self {
            viewport,
            content_height,
            header_height: None,
            rects: HashMap::new(),
        }
    }

    pub fn set_rect(&mut self, node: NodeId, rect: Rect) {
        self.rects.insert(node, rect);
    }

    /// Document-space rectangle of `node`, if the host reported one.
    #[must_use]
    pub fn rect_of(&self, node: NodeId) -> Option<Rect> {
        self.rects.get(&node).copied()
    }
}

/// Everything the engine needs to wire a page: the element roster plus the
/// initial geometry. Optional anchors that are absent simply disable the
/// dependent feature.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PageSnapshot {
    pub body: NodeId,
    pub header: Option<NodeId>,
    pub nav_toggle: Option<NodeId>,
    pub nav_toggle_label: Option<NodeId>,
    pub nav_panel: Option<NodeId>,
    pub nav_backdrop: Option<NodeId>,
    pub progress_bar: Option<NodeId>,
    pub links: Vec<LinkRef>,
    pub sections: Vec<SectionRef>,
    pub reveal_items: Vec<NodeId>,
    pub counters: Vec<CounterRef>,
    pub cards: Vec<NodeId>,
    pub geometry: DocumentGeometry,
}
