//! Simulated document construction.

use std::collections::HashSet;

use veneer_engine::{
    CounterRef, DocumentGeometry, LinkRef, Page, PageSnapshot, SectionRef,
};
use veneer_types::{Capabilities, NodeId, Rect, Tuning, Viewport};

use crate::trace::EffectTrace;

/// Structural problems a simulated document refuses to represent.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum DocumentError {
    #[error("viewport must have positive dimensions")]
    InvalidViewport,
    #[error("duplicate section id `{0}`")]
    DuplicateSectionId(String),
}

/// Node ids of the mobile nav chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavChrome {
    pub toggle: NodeId,
    pub label: NodeId,
    pub panel: NodeId,
    pub backdrop: NodeId,
}

/// Builds a [`PageSnapshot`] for tests: full-width sections stack vertically
/// in registration order, everything else is placed at explicit coordinates.
/// Node ids are assigned sequentially; the body is always node 0.
#[derive(Debug)]
pub struct DocumentBuilder {
    viewport: Viewport,
    next_id: u64,
    cursor_y: f64,
    body: NodeId,
    header: Option<(NodeId, f64)>,
    nav_toggle: Option<NodeId>,
    nav_toggle_label: Option<NodeId>,
    nav_panel: Option<NodeId>,
    nav_backdrop: Option<NodeId>,
    progress_bar: Option<NodeId>,
    links: Vec<LinkRef>,
    sections: Vec<SectionRef>,
    section_ids: HashSet<String>,
    reveal_items: Vec<NodeId>,
    counters: Vec<CounterRef>,
    cards: Vec<NodeId>,
    rects: Vec<(NodeId, Rect)>,
    content_height: Option<f64>,
    error: Option<DocumentError>,
}

impl DocumentBuilder {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        let error = (viewport.width <= 0.0 || viewport.height <= 0.0)
            .then_some(DocumentError::InvalidViewport);
        Self {
            viewport,
            next_id: 1,
            cursor_y: 0.0,
            body: NodeId::new(0),
            header: None,
            nav_toggle: None,
            nav_toggle_label: None,
            nav_panel: None,
            nav_backdrop: None,
            progress_bar: None,
            links: Vec::new(),
            sections: Vec::new(),
            section_ids: HashSet::new(),
            reveal_items: Vec::new(),
            counters: Vec::new(),
            cards: Vec::new(),
            rects: Vec::new(),
            content_height: None,
            error,
        }
    }

    fn alloc(&mut self) -> NodeId {
        let id = NodeId::new(self.next_id);
        self.next_id += 1;
        id
    }

    /// Sticky header pinned to the document top.
    pub fn with_header(&mut self, height: f64) -> NodeId {
        let node = self.alloc();
        self.rects
            .push((node, Rect::new(0.0, 0.0, self.viewport.width, height)));
        self.header = Some((node, height));
        node
    }

    /// Toggle control, its text label, the nav panel, and the backdrop.
    pub fn with_nav_chrome(&mut self) -> NavChrome {
        let chrome = NavChrome {
            toggle: self.alloc(),
            label: self.alloc(),
            panel: self.alloc(),
            backdrop: self.alloc(),
        };
        self.nav_toggle = Some(chrome.toggle);
        self.nav_toggle_label = Some(chrome.label);
        self.nav_panel = Some(chrome.panel);
        self.nav_backdrop = Some(chrome.backdrop);
        chrome
    }

    pub fn with_progress_bar(&mut self) -> NodeId {
        let node = self.alloc();
        self.progress_bar = Some(node);
        node
    }

    pub fn add_nav_link(&mut self, href: &str) -> NodeId {
        let node = self.alloc();
        self.links.push(LinkRef {
            node,
            href: href.to_owned(),
        });
        node
    }

    /// Full-width section stacked below the previous one.
    pub fn add_section(&mut self, id: &str, height: f64) -> NodeId {
        let node = self.alloc();
        if !self.section_ids.insert(id.to_owned()) && self.error.is_none() {
            self.error = Some(DocumentError::DuplicateSectionId(id.to_owned()));
        }
        self.sections.push(SectionRef {
            node,
            id: id.to_owned(),
        });
        self.rects.push((
            node,
            Rect::new(0.0, self.cursor_y, self.viewport.width, height),
        ));
        self.cursor_y += height;
        node
    }

    /// Full-width section at an explicit document offset, ignoring the
    /// stacking cursor.
    pub fn place_section(&mut self, id: &str, top: f64, height: f64) -> NodeId {
        let node = self.alloc();
        if !self.section_ids.insert(id.to_owned()) && self.error.is_none() {
            self.error = Some(DocumentError::DuplicateSectionId(id.to_owned()));
        }
        self.sections.push(SectionRef {
            node,
            id: id.to_owned(),
        });
        self.rects
            .push((node, Rect::new(0.0, top, self.viewport.width, height)));
        node
    }

    /// Reveal item at an explicit document offset.
    pub fn add_reveal(&mut self, top: f64, height: f64) -> NodeId {
        let node = self.alloc();
        self.rects
            .push((node, Rect::new(0.0, top, self.viewport.width, height)));
        self.reveal_items.push(node);
        node
    }

    pub fn add_counter(
        &mut self,
        top: f64,
        height: f64,
        target: &str,
        suffix: Option<&str>,
    ) -> NodeId {
        let node = self.alloc();
        self.rects
            .push((node, Rect::new(0.0, top, 240.0, height)));
        self.counters.push(CounterRef {
            node,
            target: Some(target.to_owned()),
            suffix: suffix.map(str::to_owned),
        });
        node
    }

    pub fn add_card(&mut self, rect: Rect) -> NodeId {
        let node = self.alloc();
        self.rects.push((node, rect));
        self.cards.push(node);
        node
    }

    /// Override the derived scrollable height.
    pub fn content_height(&mut self, height: f64) -> &mut Self {
        self.content_height = Some(height);
        self
    }

    pub fn build(self) -> Result<PageSnapshot, DocumentError> {
        if let Some(error) = self.error {
            return Err(error);
        }
        let derived = self
            .rects
            .iter()
            .map(|(_, r)| r.bottom())
            .fold(self.viewport.height, f64::max);
        let mut geometry =
            DocumentGeometry::new(self.viewport, self.content_height.unwrap_or(derived));
        geometry.header_height = self.header.map(|(_, h)| h);
        for (node, rect) in self.rects {
            geometry.set_rect(node, rect);
        }
        Ok(PageSnapshot {
            body: self.body,
            header: self.header.map(|(node, _)| node),
            nav_toggle: self.nav_toggle,
            nav_toggle_label: self.nav_toggle_label,
            nav_panel: self.nav_panel,
            nav_backdrop: self.nav_backdrop,
            progress_bar: self.progress_bar,
            links: self.links,
            sections: self.sections,
            reveal_items: self.reveal_items,
            counters: self.counters,
            cards: self.cards,
            geometry,
        })
    }

    /// Build, mount, and fold the mount effects into a fresh trace.
    pub fn mount(
        self,
        caps: Capabilities,
        tuning: &Tuning,
    ) -> Result<(Page, EffectTrace), DocumentError> {
        let snapshot = self.build()?;
        let (page, effects) = Page::mount(snapshot, caps, tuning);
        let mut trace = EffectTrace::new();
        trace.absorb(effects);
        Ok((page, trace))
    }
}
