//! Pointer tilt scenarios.

use veneer_engine::PageEvent;
use veneer_types::{Capabilities, StyleProp};

use crate::common::marketing_page;

#[test]
fn corner_pointer_produces_the_documented_angles() {
    let mut fixture = marketing_page(Capabilities::default());
    // Card document rect is (100, 2200) 300x200; at scroll 2000 its viewport
    // top-left corner sits at (100, 200).
    fixture.feed(PageEvent::Scrolled { y: 2000.0 });
    fixture.feed(PageEvent::PointerMoved {
        card: fixture.card,
        x: 100.0,
        y: 200.0,
    });
    assert_eq!(
        fixture.trace.style(fixture.card, StyleProp::TiltX),
        Some("3.50deg"),
    );
    assert_eq!(
        fixture.trace.style(fixture.card, StyleProp::TiltY),
        Some("-4.00deg"),
    );
}

#[test]
fn center_pointer_is_neutral_and_leave_clears() {
    let mut fixture = marketing_page(Capabilities::default());
    fixture.feed(PageEvent::Scrolled { y: 2000.0 });
    fixture.feed(PageEvent::PointerMoved {
        card: fixture.card,
        x: 250.0,
        y: 300.0,
    });
    assert_eq!(
        fixture.trace.style(fixture.card, StyleProp::TiltX),
        Some("0.00deg"),
    );
    assert_eq!(
        fixture.trace.style(fixture.card, StyleProp::TiltY),
        Some("0.00deg"),
    );

    fixture.feed(PageEvent::PointerLeft { card: fixture.card });
    assert_eq!(fixture.trace.style(fixture.card, StyleProp::TiltX), None);
    assert_eq!(fixture.trace.style(fixture.card, StyleProp::TiltY), None);
}

#[test]
fn tilt_is_inert_without_a_fine_pointer_or_with_reduced_motion() {
    for caps in [
        Capabilities {
            fine_pointer: false,
            ..Capabilities::default()
        },
        Capabilities {
            reduce_motion: true,
            ..Capabilities::default()
        },
    ] {
        let mut fixture = marketing_page(caps);
        let before = fixture.trace.log().len();
        fixture.feed(PageEvent::PointerMoved {
            card: fixture.card,
            x: 150.0,
            y: 2250.0,
        });
        fixture.feed(PageEvent::PointerLeft { card: fixture.card });
        assert_eq!(fixture.trace.log().len(), before);
        assert_eq!(fixture.trace.style(fixture.card, StyleProp::TiltX), None);
    }
}
