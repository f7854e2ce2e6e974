//! Scripted interaction replay.

use std::time::Duration;

use veneer_engine::{Page, PageEvent};
use veneer_types::NodeId;

use crate::trace::EffectTrace;

/// One scripted interaction against a mounted page.
#[derive(Debug, Clone, PartialEq)]
pub enum SimStep {
    Scroll { y: f64 },
    /// `count` animation frames of `delta` each.
    Frames { count: usize, delta: Duration },
    TapToggle,
    TapBackdrop,
    PressEscape,
    ActivateLink { link: NodeId },
    PointerMove { card: NodeId, x: f64, y: f64 },
    PointerLeave { card: NodeId },
    Media { mobile_viewport: bool },
}

/// Replay `steps` through the page, folding every effect into `trace`.
pub fn run_script(page: &mut Page, steps: &[SimStep], trace: &mut EffectTrace) {
    for step in steps {
        match *step {
            SimStep::Scroll { y } => trace.absorb(page.handle_event(PageEvent::Scrolled { y })),
            SimStep::Frames { count, delta } => {
                for _ in 0..count {
                    trace.absorb(page.handle_event(PageEvent::Frame { delta }));
                }
            }
            SimStep::TapToggle => {
                trace.absorb(page.handle_event(PageEvent::NavToggleActivated));
            }
            SimStep::TapBackdrop => {
                trace.absorb(page.handle_event(PageEvent::BackdropActivated));
            }
            SimStep::PressEscape => trace.absorb(page.handle_event(PageEvent::EscapePressed)),
            SimStep::ActivateLink { link } => {
                trace.absorb(page.handle_event(PageEvent::LinkActivated { link }));
            }
            SimStep::PointerMove { card, x, y } => {
                trace.absorb(page.handle_event(PageEvent::PointerMoved { card, x, y }));
            }
            SimStep::PointerLeave { card } => {
                trace.absorb(page.handle_event(PageEvent::PointerLeft { card }));
            }
            SimStep::Media { mobile_viewport } => {
                trace.absorb(page.handle_event(PageEvent::MediaChanged { mobile_viewport }));
            }
        }
    }
}
