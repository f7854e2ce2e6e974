//! Page behavior engine for Veneer.
//!
//! The engine is headless and synchronous: the host builds a [`PageSnapshot`]
//! describing the page, mounts a [`Page`] with the environment's
//! [`Capabilities`], then feeds it [`PageEvent`]s. Every call returns the
//! ordered [`Effect`] commands the presentation layer should apply. Nothing
//! in here blocks, schedules, or fails on the event path.

mod anchor;
mod counter;
mod events;
mod links;
mod nav;
mod observe;
mod page;
mod progress;
mod reveal;
mod snapshot;
mod tilt;
mod tracker;

pub use anchor::{AnchorJump, AnchorNav};
pub use counter::CounterSet;
pub use events::PageEvent;
pub use links::{DEFAULT_SECTION, NavLinks};
pub use nav::{NavSession, NavState};
pub use observe::{ObservationEntry, Watcher};
pub use page::Page;
pub use progress::{ProgressBar, scroll_ratio};
pub use reveal::RevealSet;
pub use snapshot::{CounterRef, DocumentGeometry, LinkRef, PageSnapshot, SectionRef};
pub use tilt::TiltSet;
pub use tracker::SectionTracker;

// Re-export the domain types hosts use alongside the engine.
pub use veneer_types::{
    Attr, Capabilities, CssClass, Effect, NodeId, Rect, RootInsets, ScrollBehavior, StyleProp,
    Tuning, Viewport,
};
