//! Scroll progress scenarios.

use veneer_engine::PageEvent;
use veneer_sim::DocumentBuilder;
use veneer_types::{Capabilities, StyleProp, Tuning, Viewport};

use crate::common::marketing_page;

#[test]
fn fill_tracks_the_scroll_position() {
    let mut fixture = marketing_page(Capabilities::default());
    assert_eq!(
        fixture.trace.style(fixture.progress, StyleProp::Transform),
        Some("scaleX(0)"),
    );

    // Scrollable height is 3800 - 800 = 3000.
    fixture.feed(PageEvent::Scrolled { y: 1500.0 });
    assert_eq!(
        fixture.trace.style(fixture.progress, StyleProp::Transform),
        Some("scaleX(0.5)"),
    );

    fixture.feed(PageEvent::Scrolled { y: 3000.0 });
    assert_eq!(
        fixture.trace.style(fixture.progress, StyleProp::Transform),
        Some("scaleX(1)"),
    );

    // Rubber-band overscroll is clamped.
    fixture.feed(PageEvent::Scrolled { y: 5000.0 });
    assert_eq!(
        fixture.trace.style(fixture.progress, StyleProp::Transform),
        Some("scaleX(1)"),
    );
}

#[test]
fn content_fitting_the_viewport_reports_zero() {
    let mut doc = DocumentBuilder::new(Viewport::new(1200.0, 800.0));
    let bar = doc.with_progress_bar();
    let _ = doc.add_section("home", 300.0);
    let (mut page, mut trace) = doc
        .mount(Capabilities::default(), &Tuning::default())
        .expect("valid document");
    assert_eq!(trace.style(bar, StyleProp::Transform), Some("scaleX(0)"));

    trace.absorb(page.handle_event(PageEvent::Scrolled { y: 120.0 }));
    assert_eq!(trace.style(bar, StyleProp::Transform), Some("scaleX(0)"));
}
