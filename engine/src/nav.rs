//! Mobile navigation session.

use veneer_types::{Attr, CssClass, Effect, NodeId};

use crate::snapshot::PageSnapshot;

const LABEL_WHEN_CLOSED: &str = "Open navigation menu";
const LABEL_WHEN_OPEN: &str = "Close navigation menu";
const TOGGLE_TEXT_CLOSED: &str = "Menu";
const TOGGLE_TEXT_OPEN: &str = "Close";

/// Session state. `Open` is reachable only from `Closed` and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy)]
struct Anchors {
    body: NodeId,
    toggle: NodeId,
    label: Option<NodeId>,
    panel: NodeId,
    backdrop: NodeId,
}

/// The collapsible mobile nav state machine.
///
/// All transitions are no-ops unless the toggle, panel, and backdrop anchors
/// were all present in the snapshot; the feature degrades silently instead of
/// failing. Transitions that would not change state emit nothing.
#[derive(Debug)]
pub struct NavSession {
    anchors: Option<Anchors>,
    state: NavState,
}

impl NavSession {
    #[must_use]
    pub fn from_snapshot(snapshot: &PageSnapshot) -> Self {
        let anchors = match (
            snapshot.nav_toggle,
            snapshot.nav_panel,
            snapshot.nav_backdrop,
        ) {
            (Some(toggle), Some(panel), Some(backdrop)) => Some(Anchors {
                body: snapshot.body,
                toggle,
                label: snapshot.nav_toggle_label,
                panel,
                backdrop,
            }),
            _ => None,
        };
        Self {
            anchors,
            state: NavState::Closed,
        }
    }

    #[must_use]
    pub fn state(&self) -> NavState {
        self.state
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state == NavState::Open
    }

    /// Synchronize the closed-state attributes once at mount.
    pub fn mount(&self, effects: &mut Vec<Effect>) {
        let Some(a) = self.anchors else { return };
        effects.push(Effect::AttrSet {
            node: a.toggle,
            attr: Attr::AriaExpanded,
            value: "false".to_owned(),
        });
        effects.push(Effect::AttrSet {
            node: a.toggle,
            attr: Attr::AriaLabel,
            value: LABEL_WHEN_CLOSED.to_owned(),
        });
        effects.push(Effect::AttrSet {
            node: a.backdrop,
            attr: Attr::Hidden,
            value: String::new(),
        });
    }

    /// Toggle activation: open when closed, close when open.
    pub fn toggle(&mut self, effects: &mut Vec<Effect>) {
        match self.state {
            NavState::Closed => self.open(effects),
            NavState::Open => self.close(effects),
        }
    }

    pub fn open(&mut self, effects: &mut Vec<Effect>) {
        let Some(a) = self.anchors else { return };
        if self.state == NavState::Open {
            return;
        }
        self.state = NavState::Open;
        tracing::debug!("mobile nav opened");
        effects.push(Effect::AttrSet {
            node: a.toggle,
            attr: Attr::AriaExpanded,
            value: "true".to_owned(),
        });
        effects.push(Effect::AttrSet {
            node: a.toggle,
            attr: Attr::AriaLabel,
            value: LABEL_WHEN_OPEN.to_owned(),
        });
        if let Some(label) = a.label {
            effects.push(Effect::TextSet {
                node: label,
                text: TOGGLE_TEXT_OPEN.to_owned(),
            });
        }
        effects.push(Effect::ClassAdded {
            node: a.panel,
            class: CssClass::Open,
        });
        effects.push(Effect::AttrRemoved {
            node: a.backdrop,
            attr: Attr::Hidden,
        });
        effects.push(Effect::ClassAdded {
            node: a.body,
            class: CssClass::NavOpen,
        });
    }

    pub fn close(&mut self, effects: &mut Vec<Effect>) {
        let Some(a) = self.anchors else { return };
        if self.state == NavState::Closed {
            return;
        }
        self.state = NavState::Closed;
        tracing::debug!("mobile nav closed");
        effects.push(Effect::AttrSet {
            node: a.toggle,
            attr: Attr::AriaExpanded,
            value: "false".to_owned(),
        });
        effects.push(Effect::AttrSet {
            node: a.toggle,
            attr: Attr::AriaLabel,
            value: LABEL_WHEN_CLOSED.to_owned(),
        });
        if let Some(label) = a.label {
            effects.push(Effect::TextSet {
                node: label,
                text: TOGGLE_TEXT_CLOSED.to_owned(),
            });
        }
        effects.push(Effect::ClassRemoved {
            node: a.panel,
            class: CssClass::Open,
        });
        effects.push(Effect::AttrSet {
            node: a.backdrop,
            attr: Attr::Hidden,
            value: String::new(),
        });
        effects.push(Effect::ClassRemoved {
            node: a.body,
            class: CssClass::NavOpen,
        });
    }

    /// Breakpoint growth past the mobile threshold always forces the session
    /// closed; shrinking back below it changes nothing.
    pub fn viewport_changed(&mut self, mobile: bool, effects: &mut Vec<Effect>) {
        if !mobile {
            self.close(effects);
        }
    }
}
