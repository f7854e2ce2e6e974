//! Effect-log snapshots for small documents.

use std::time::Duration;

use veneer_engine::PageEvent;
use veneer_sim::{DocumentBuilder, SimStep, run_script};
use veneer_types::{Capabilities, Tuning, Viewport};

#[test]
fn mount_and_anchor_activation_log() {
    let mut doc = DocumentBuilder::new(Viewport::new(1000.0, 800.0));
    let _bar = doc.with_progress_bar();
    let link = doc.add_nav_link("#home");
    let _ = doc.add_section("home", 1200.0);
    let (mut page, mut trace) = doc
        .mount(Capabilities::default(), &Tuning::default())
        .expect("valid document");

    // The jump target is above the fallback clearance, so it clamps to 0.
    trace.absorb(page.handle_event(PageEvent::LinkActivated { link }));

    insta::assert_snapshot!(trace.render_log(), @r"
    class+ 0 js-ready
    class+ 2 active
    attr 2 aria-current=location
    style 1 transform=scaleX(0)
    scroll 0 smooth
    fragment #home
    ");
}

#[test]
fn nav_open_close_cycle_log() {
    let mut doc = DocumentBuilder::new(Viewport::new(600.0, 800.0));
    let _chrome = doc.with_nav_chrome();
    let (mut page, mut trace) = doc
        .mount(Capabilities::default(), &Tuning::default())
        .expect("valid document");

    run_script(
        &mut page,
        &[SimStep::TapToggle, SimStep::PressEscape],
        &mut trace,
    );

    insta::assert_snapshot!(trace.render_log(), @r"
    class+ 0 js-ready
    attr 1 aria-expanded=false
    attr 1 aria-label=Open navigation menu
    attr 4 hidden=
    attr 1 aria-expanded=true
    attr 1 aria-label=Close navigation menu
    text 2 Close
    class+ 3 open
    attr- 4 hidden
    class+ 0 nav-open
    attr 1 aria-expanded=false
    attr 1 aria-label=Open navigation menu
    text 2 Menu
    class- 3 open
    attr 4 hidden=
    class- 0 nav-open
    ");
}

#[test]
fn counter_frame_by_frame_log() {
    let mut doc = DocumentBuilder::new(Viewport::new(1000.0, 800.0));
    let _counter = doc.add_counter(100.0, 80.0, "1200", Some("+"));
    let (mut page, mut trace) = doc
        .mount(Capabilities::default(), &Tuning::default())
        .expect("valid document");

    run_script(
        &mut page,
        &[SimStep::Frames {
            count: 11,
            delta: Duration::from_millis(100),
        }],
        &mut trace,
    );

    insta::assert_snapshot!(trace.render_log(), @r"
    class+ 0 js-ready
    text 1 0+
    text 1 298+
    text 1 543+
    text 1 738+
    text 1 891+
    text 1 1,005+
    text 1 1,087+
    text 1 1,142+
    text 1 1,176+
    text 1 1,193+
    text 1 1,199+
    text 1 1,200+
    ");
}
