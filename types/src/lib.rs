//! Core domain types for Veneer.
//!
//! This crate contains pure domain types with no IO, no async, and minimal
//! dependencies. Everything here can be used from any layer: the engine, a
//! host adapter, or the test simulator.

mod animation;
mod caps;
mod easing;
mod effect;
mod format;
mod geometry;
mod node;
mod tuning;

pub use animation::{Step, Timeline};
pub use caps::Capabilities;
pub use easing::ease_out_cubic;
pub use effect::{Attr, CssClass, Effect, ScrollBehavior, StyleProp};
pub use format::{count_text, group_thousands, parse_target};
pub use geometry::{Rect, RootInsets, Viewport};
pub use node::NodeId;
pub use tuning::Tuning;
