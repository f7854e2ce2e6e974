//! The command vocabulary the engine emits toward the presentation layer.
//!
//! Effects are plain data; the host (DOM adapter, simulator) applies them in
//! order. The engine never touches presentation state directly.

use crate::node::NodeId;

/// CSS classes the engine toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CssClass {
    /// Script is live; styling may rely on enhanced behaviors.
    JsReady,
    /// The navigation link for the section currently in view.
    Active,
    /// A reveal item that has entered the viewport.
    InView,
    /// The mobile nav panel is expanded.
    Open,
    /// Body scroll-lock while the mobile nav is open.
    NavOpen,
}

impl CssClass {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CssClass::JsReady => "js-ready",
            CssClass::Active => "active",
            CssClass::InView => "in-view",
            CssClass::Open => "open",
            CssClass::NavOpen => "nav-open",
        }
    }
}

/// Attributes the engine writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Attr {
    AriaExpanded,
    AriaLabel,
    AriaCurrent,
    Hidden,
}

impl Attr {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Attr::AriaExpanded => "aria-expanded",
            Attr::AriaLabel => "aria-label",
            Attr::AriaCurrent => "aria-current",
            Attr::Hidden => "hidden",
        }
    }
}

/// Inline style properties the engine writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyleProp {
    TransitionDelay,
    Transform,
    TiltX,
    TiltY,
}

impl StyleProp {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            StyleProp::TransitionDelay => "transition-delay",
            StyleProp::Transform => "transform",
            StyleProp::TiltX => "--tilt-x",
            StyleProp::TiltY => "--tilt-y",
        }
    }
}

/// How a scroll request should move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    Smooth,
    /// Jump without interpolation (reduced motion).
    Auto,
}

/// One presentation command.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Effect {
    ClassAdded { node: NodeId, class: CssClass },
    ClassRemoved { node: NodeId, class: CssClass },
    AttrSet { node: NodeId, attr: Attr, value: String },
    AttrRemoved { node: NodeId, attr: Attr },
    StyleSet { node: NodeId, prop: StyleProp, value: String },
    StyleCleared { node: NodeId, prop: StyleProp },
    TextSet { node: NodeId, text: String },
    /// Scroll the page to an absolute document offset.
    ScrollTo { top: f64, behavior: ScrollBehavior },
    /// Swap the location fragment without adding a history entry.
    FragmentReplaced { fragment: String },
}
