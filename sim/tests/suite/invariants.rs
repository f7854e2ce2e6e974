//! Cross-cutting invariants driven with generated scroll sequences.

use proptest::prelude::*;
use veneer_engine::PageEvent;
use veneer_types::{Capabilities, CssClass, StyleProp};

use crate::common::marketing_page;

fn progress_value(style: &str) -> f64 {
    style
        .strip_prefix("scaleX(")
        .and_then(|s| s.strip_suffix(')'))
        .and_then(|s| s.parse().ok())
        .expect("transform is a scaleX() value")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn at_most_one_link_is_ever_active(
        scrolls in prop::collection::vec(-500.0f64..5000.0, 1..32),
    ) {
        let mut fixture = marketing_page(Capabilities::default());
        for y in scrolls {
            fixture.feed(PageEvent::Scrolled { y });
            prop_assert!(fixture.trace.nodes_with_class(CssClass::Active).len() <= 1);
        }
    }

    #[test]
    fn progress_fill_stays_in_unit_range(
        scrolls in prop::collection::vec(-500.0f64..10_000.0, 1..32),
    ) {
        let mut fixture = marketing_page(Capabilities::default());
        for y in scrolls {
            fixture.feed(PageEvent::Scrolled { y });
            let style = fixture
                .trace
                .style(fixture.progress, StyleProp::Transform)
                .expect("progress bar was painted");
            let value = progress_value(style);
            prop_assert!((0.0..=1.0).contains(&value));
        }
    }

    #[test]
    fn reveals_are_monotonic(
        scrolls in prop::collection::vec(0.0f64..4000.0, 1..32),
    ) {
        let mut fixture = marketing_page(Capabilities::default());
        let mut seen = 0usize;
        for y in scrolls {
            fixture.feed(PageEvent::Scrolled { y });
            let revealed = fixture
                .reveals
                .iter()
                .filter(|node| fixture.trace.has_class(**node, CssClass::InView))
                .count();
            prop_assert!(revealed >= seen);
            seen = revealed;
        }
    }
}
