//! Count-up scenarios.

use std::time::Duration;

use veneer_engine::{Effect, PageEvent};
use veneer_sim::{SimStep, run_script};
use veneer_types::Capabilities;

use crate::common::{Fixture, marketing_page};

fn counter_text_updates(fixture: &Fixture) -> usize {
    fixture
        .trace
        .log()
        .iter()
        .filter(|e| matches!(e, Effect::TextSet { node, .. } if *node == fixture.counter))
        .count()
}

#[test]
fn counter_starts_at_zero_with_its_suffix() {
    let fixture = marketing_page(Capabilities::default());
    assert_eq!(fixture.trace.text(fixture.counter), Some("0+"));
}

#[test]
fn full_run_lands_exactly_on_the_grouped_target() {
    let mut fixture = marketing_page(Capabilities::default());
    fixture.feed(PageEvent::Scrolled { y: 1500.0 });
    assert!(fixture.page.wants_frames());

    run_script(
        &mut fixture.page,
        &[SimStep::Frames {
            count: 11,
            delta: Duration::from_millis(100),
        }],
        &mut fixture.trace,
    );
    assert_eq!(fixture.trace.text(fixture.counter), Some("1,200+"));
    assert!(!fixture.page.wants_frames());
}

#[test]
fn finished_counters_never_restart() {
    let mut fixture = marketing_page(Capabilities::default());
    run_script(
        &mut fixture.page,
        &[
            SimStep::Scroll { y: 1500.0 },
            SimStep::Frames {
                count: 2,
                delta: Duration::from_millis(800),
            },
        ],
        &mut fixture.trace,
    );
    assert_eq!(fixture.trace.text(fixture.counter), Some("1,200+"));
    let updates = counter_text_updates(&fixture);

    // Leave, come back, and keep feeding frames: nothing more is drawn.
    run_script(
        &mut fixture.page,
        &[
            SimStep::Scroll { y: 0.0 },
            SimStep::Scroll { y: 1500.0 },
            SimStep::Frames {
                count: 4,
                delta: Duration::from_millis(100),
            },
        ],
        &mut fixture.trace,
    );
    assert_eq!(counter_text_updates(&fixture), updates);
    assert_eq!(fixture.trace.text(fixture.counter), Some("1,200+"));
}

#[test]
fn reduced_motion_renders_the_final_value_at_mount() {
    let mut fixture = marketing_page(Capabilities {
        reduce_motion: true,
        ..Capabilities::default()
    });
    assert_eq!(fixture.trace.text(fixture.counter), Some("1,200+"));

    // Frames are inert on the static path.
    let effects = fixture.page.handle_event(PageEvent::Frame {
        delta: Duration::from_millis(100),
    });
    assert!(effects.is_empty());
}
