//! The page runtime: owns every component and routes events.

use veneer_types::{Capabilities, CssClass, Effect, NodeId, Tuning};

use crate::anchor::AnchorNav;
use crate::counter::CounterSet;
use crate::events::PageEvent;
use crate::links::NavLinks;
use crate::nav::{NavSession, NavState};
use crate::progress::ProgressBar;
use crate::reveal::RevealSet;
use crate::snapshot::{DocumentGeometry, PageSnapshot};
use crate::tilt::TiltSet;
use crate::tracker::SectionTracker;

/// A mounted page.
///
/// Constructed once per page session from an immutable [`Capabilities`]
/// context and a [`PageSnapshot`]; afterwards the host feeds it events and
/// applies the returned effects. The runtime holds the only mutable state in
/// the system and is strictly single-threaded.
#[derive(Debug)]
pub struct Page {
    caps: Capabilities,
    geometry: DocumentGeometry,
    scroll_y: f64,
    links: NavLinks,
    nav: NavSession,
    anchor: AnchorNav,
    tracker: SectionTracker,
    reveals: RevealSet,
    progress: ProgressBar,
    counters: CounterSet,
    tilt: TiltSet,
}

impl Page {
    /// Wire every component and return the mount effects: the `js-ready`
    /// marker, nav closed-state sync, reveal stagger delays (and immediate
    /// reveals on the static path), the initial "home" link marking, the
    /// initial progress fill, and initial counter text.
    #[must_use]
    pub fn mount(snapshot: PageSnapshot, caps: Capabilities, tuning: &Tuning) -> (Self, Vec<Effect>) {
        tracing::debug!(
            links = snapshot.links.len(),
            sections = snapshot.sections.len(),
            reveals = snapshot.reveal_items.len(),
            counters = snapshot.counters.len(),
            cards = snapshot.cards.len(),
            "mounting page"
        );
        let body = snapshot.body;
        let mut page = Self {
            caps,
            links: NavLinks::new(&snapshot.links),
            nav: NavSession::from_snapshot(&snapshot),
            anchor: AnchorNav::from_snapshot(&snapshot, &caps, tuning),
            tracker: SectionTracker::new(&snapshot.sections, &caps, tuning),
            reveals: RevealSet::new(&snapshot.reveal_items, &caps, tuning),
            progress: ProgressBar::new(snapshot.progress_bar),
            counters: CounterSet::new(&snapshot.counters, &caps, tuning),
            tilt: TiltSet::new(&snapshot.cards, &caps, tuning),
            geometry: snapshot.geometry,
            scroll_y: 0.0,
        };

        let mut effects = Vec::new();
        effects.push(Effect::ClassAdded {
            node: body,
            class: CssClass::JsReady,
        });
        page.nav.mount(&mut effects);
        page.reveals.mount(&page.geometry, page.scroll_y, &mut effects);
        page.tracker
            .mount(&mut page.links, &page.geometry, page.scroll_y, &mut effects);
        page.progress.update(&page.geometry, page.scroll_y, &mut effects);
        page.counters.mount(&page.geometry, page.scroll_y, &mut effects);
        (page, effects)
    }

    /// Route one input event; returns the effects to apply, possibly none.
    pub fn handle_event(&mut self, event: PageEvent) -> Vec<Effect> {
        let mut effects = Vec::new();
        match event {
            PageEvent::NavToggleActivated => self.nav.toggle(&mut effects),
            PageEvent::BackdropActivated | PageEvent::EscapePressed => {
                self.nav.close(&mut effects);
            }
            PageEvent::LinkActivated { link } => self.link_activated(link, &mut effects),
            PageEvent::Scrolled { y } => {
                self.scroll_y = y;
                self.view_changed(&mut effects);
            }
            PageEvent::LayoutChanged { geometry } => {
                self.geometry = geometry;
                self.view_changed(&mut effects);
            }
            PageEvent::MediaChanged { mobile_viewport } => {
                self.nav.viewport_changed(mobile_viewport, &mut effects);
            }
            PageEvent::PointerMoved { card, x, y } => {
                self.tilt
                    .pointer_moved(card, x, y, &self.geometry, self.scroll_y, &mut effects);
            }
            PageEvent::PointerLeft { card } => self.tilt.pointer_left(card, &mut effects),
            PageEvent::Frame { delta } => self.counters.on_frame(delta, &mut effects),
        }
        effects
    }

    fn link_activated(&mut self, link: NodeId, effects: &mut Vec<Effect>) {
        let Some(jump) = self.anchor.activate(link, &self.geometry) else {
            return;
        };
        tracing::debug!(section = %jump.section_id, top = jump.top, "anchor jump");
        effects.push(Effect::ScrollTo {
            top: jump.top,
            behavior: jump.behavior,
        });
        effects.push(Effect::FragmentReplaced {
            fragment: jump.fragment,
        });
        // Mark immediately rather than waiting for the observer to catch up.
        self.links.set_active(&jump.section_id, effects);
        self.nav.close(effects);
    }

    /// Common path for scroll and layout changes.
    fn view_changed(&mut self, effects: &mut Vec<Effect>) {
        self.reveals.reassess(&self.geometry, self.scroll_y, effects);
        self.tracker
            .reassess(&mut self.links, &self.geometry, self.scroll_y, effects);
        self.progress.update(&self.geometry, self.scroll_y, effects);
        self.counters.reassess(&self.geometry, self.scroll_y);
    }

    #[must_use]
    pub fn nav_state(&self) -> NavState {
        self.nav.state()
    }

    /// Currently marked section id.
    #[must_use]
    pub fn active_link(&self) -> Option<&str> {
        self.links.active()
    }

    /// Whether any animation still wants `Frame` events.
    #[must_use]
    pub fn wants_frames(&self) -> bool {
        self.counters.is_animating()
    }

    #[must_use]
    pub fn capabilities(&self) -> Capabilities {
        self.caps
    }

    #[must_use]
    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }
}
