//! Active-section tracking and anchor navigation scenarios.

use veneer_engine::{NavState, PageEvent};
use veneer_sim::DocumentBuilder;
use veneer_types::{Capabilities, CssClass, ScrollBehavior, Tuning, Viewport};

use crate::common::marketing_page;

#[test]
fn home_is_active_at_mount() {
    let fixture = marketing_page(Capabilities::default());
    assert_eq!(fixture.page.active_link(), Some("home"));
    assert_eq!(
        fixture.trace.nodes_with_class(CssClass::Active),
        vec![fixture.link_home],
    );
    assert_eq!(
        fixture.trace.attr(fixture.link_home, "aria-current"),
        Some("location"),
    );
}

#[test]
fn scrolling_moves_the_marker_section_by_section() {
    let mut fixture = marketing_page(Capabilities::default());

    fixture.feed(PageEvent::Scrolled { y: 900.0 });
    assert_eq!(fixture.page.active_link(), Some("services"));
    assert_eq!(
        fixture.trace.nodes_with_class(CssClass::Active),
        vec![fixture.link_services],
    );
    assert_eq!(fixture.trace.attr(fixture.link_home, "aria-current"), None);

    fixture.feed(PageEvent::Scrolled { y: 2000.0 });
    assert_eq!(fixture.page.active_link(), Some("pricing"));
    assert_eq!(
        fixture.trace.nodes_with_class(CssClass::Active),
        vec![fixture.link_pricing],
    );

    fixture.feed(PageEvent::Scrolled { y: 3000.0 });
    assert_eq!(fixture.page.active_link(), Some("contact"));
    assert_eq!(
        fixture.trace.nodes_with_class(CssClass::Active),
        vec![fixture.link_contact],
    );
}

#[test]
fn lone_dominant_section_wins() {
    // "pricing" alone covers the whole observation band (ratio 1.0, past the
    // 0.7 threshold); nothing else intersects.
    let mut doc = DocumentBuilder::new(Viewport::new(1200.0, 800.0));
    let link_home = doc.add_nav_link("#home");
    let link_pricing = doc.add_nav_link("#pricing");
    let _ = doc.place_section("home", 0.0, 900.0);
    let _ = doc.place_section("pricing", 1000.0, 264.0);
    doc.content_height(3000.0);
    let (mut page, mut trace) = doc
        .mount(Capabilities::default(), &Tuning::default())
        .expect("valid document");

    trace.absorb(page.handle_event(PageEvent::Scrolled { y: 824.0 }));
    assert_eq!(page.active_link(), Some("pricing"));
    assert_eq!(trace.nodes_with_class(CssClass::Active), vec![link_pricing]);
    assert!(!trace.has_class(link_home, CssClass::Active));
}

#[test]
fn marker_sticks_when_nothing_intersects() {
    let mut doc = DocumentBuilder::new(Viewport::new(1200.0, 800.0));
    let _ = doc.add_nav_link("#home");
    let link_pricing = doc.add_nav_link("#pricing");
    let _ = doc.place_section("home", 0.0, 500.0);
    let _ = doc.place_section("pricing", 2000.0, 264.0);
    doc.content_height(4000.0);
    let (mut page, mut trace) = doc
        .mount(Capabilities::default(), &Tuning::default())
        .expect("valid document");

    trace.absorb(page.handle_event(PageEvent::Scrolled { y: 1800.0 }));
    assert_eq!(page.active_link(), Some("pricing"));

    // Deep in the gap between sections: the last marking stays.
    trace.absorb(page.handle_event(PageEvent::Scrolled { y: 1000.0 }));
    assert_eq!(page.active_link(), Some("pricing"));
    assert_eq!(trace.nodes_with_class(CssClass::Active), vec![link_pricing]);
}

#[test]
fn anchor_activation_jumps_marks_and_closes() {
    let mut fixture = marketing_page(Capabilities::default());
    fixture.feed(PageEvent::NavToggleActivated);

    fixture.feed(PageEvent::LinkActivated {
        link: fixture.link_pricing,
    });
    // Section top 2000 minus header clearance (70 + 12).
    assert_eq!(
        fixture.trace.last_scroll(),
        Some((1918.0, ScrollBehavior::Smooth)),
    );
    assert_eq!(fixture.trace.fragment(), Some("#pricing"));
    assert_eq!(fixture.page.active_link(), Some("pricing"));
    assert_eq!(fixture.page.nav_state(), NavState::Closed);
}

#[test]
fn anchor_jump_is_instant_under_reduced_motion() {
    let mut fixture = marketing_page(Capabilities {
        reduce_motion: true,
        ..Capabilities::default()
    });
    fixture.feed(PageEvent::LinkActivated {
        link: fixture.link_services,
    });
    assert_eq!(
        fixture.trace.last_scroll(),
        Some((900.0 - 82.0, ScrollBehavior::Auto)),
    );
}

#[test]
fn foreign_links_fall_back_to_native_navigation() {
    let mut doc = DocumentBuilder::new(Viewport::new(1200.0, 800.0));
    let external = doc.add_nav_link("/pricing");
    let dangling = doc.add_nav_link("#nowhere");
    let _ = doc.add_section("home", 1200.0);
    let (mut page, trace) = doc
        .mount(Capabilities::default(), &Tuning::default())
        .expect("valid document");

    for link in [external, dangling] {
        let effects = page.handle_event(PageEvent::LinkActivated { link });
        assert!(effects.is_empty());
    }
    assert_eq!(trace.scroll_count(), 0);
}
