//! Input events from the host.

use std::time::Duration;

use veneer_types::NodeId;

use crate::snapshot::DocumentGeometry;

/// Discrete inputs the host feeds into [`crate::Page::handle_event`].
///
/// Events naming an unknown node are inert: a pointer move over an element
/// that was removed mid-session produces no effects instead of an error.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum PageEvent {
    /// The nav toggle control was activated.
    NavToggleActivated,
    /// The backdrop behind the open mobile nav was activated.
    BackdropActivated,
    EscapePressed,
    /// A navigation link was activated.
    LinkActivated { link: NodeId },
    /// The page scrolled to `y` document pixels.
    Scrolled { y: f64 },
    /// The document was re-laid-out (resize, content change).
    LayoutChanged { geometry: DocumentGeometry },
    /// The mobile breakpoint media query flipped.
    MediaChanged { mobile_viewport: bool },
    /// Pointer moved over a tilt card, in viewport coordinates.
    PointerMoved { card: NodeId, x: f64, y: f64 },
    /// Pointer left a tilt card.
    PointerLeft { card: NodeId },
    /// An animation frame elapsed.
    Frame { delta: Duration },
}
