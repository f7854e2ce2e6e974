//! Active-link marking for the navigation.

use veneer_types::{Attr, CssClass, Effect, NodeId};

use crate::snapshot::LinkRef;

/// Active section identifier assumed before any observation fires, and the
/// fallback for sections without an id.
pub const DEFAULT_SECTION: &str = "home";

#[derive(Debug)]
struct Link {
    node: NodeId,
    /// Section id this link targets; `None` for non-fragment hrefs, which
    /// can never be marked active.
    fragment: Option<String>,
}

/// Owns the "at most one link is active" invariant. Re-marking the current
/// section is a no-op, so consumers can call [`NavLinks::set_active`] freely.
#[derive(Debug)]
pub struct NavLinks {
    links: Vec<Link>,
    active: Option<String>,
}

impl NavLinks {
    #[must_use]
    pub fn new(links: &[LinkRef]) -> Self {
        let links = links
            .iter()
            .map(|l| Link {
                node: l.node,
                fragment: l.href.strip_prefix('#').map(str::to_owned),
            })
            .collect();
        Self {
            links,
            active: None,
        }
    }

    /// Currently marked section id, if any observation has happened yet.
    #[must_use]
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Mark the link(s) targeting `id` active and clear the previous marking.
    pub fn set_active(&mut self, id: &str, effects: &mut Vec<Effect>) {
        if self.active.as_deref() == Some(id) {
            return;
        }
        for link in &self.links {
            let Some(fragment) = link.fragment.as_deref() else {
                continue;
            };
            if fragment == id {
                effects.push(Effect::ClassAdded {
                    node: link.node,
                    class: CssClass::Active,
                });
                effects.push(Effect::AttrSet {
                    node: link.node,
                    attr: Attr::AriaCurrent,
                    value: "location".to_owned(),
                });
            } else if self.active.as_deref() == Some(fragment) {
                effects.push(Effect::ClassRemoved {
                    node: link.node,
                    class: CssClass::Active,
                });
                effects.push(Effect::AttrRemoved {
                    node: link.node,
                    attr: Attr::AriaCurrent,
                });
            }
        }
        tracing::debug!(section = id, "active link changed");
        self.active = Some(id.to_owned());
    }
}
