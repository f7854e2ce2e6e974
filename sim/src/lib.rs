//! Headless test harness for the Veneer engine.
//!
//! A [`DocumentBuilder`] assembles a simulated page, [`run_script`] replays
//! scripted interactions through a mounted [`veneer_engine::Page`], and an
//! [`EffectTrace`] folds the emitted effects into per-node presentation state
//! that tests can query or snapshot.

mod document;
mod logging;
mod script;
mod trace;

pub use document::{DocumentBuilder, DocumentError, NavChrome};
pub use logging::init_test_logging;
pub use script::{SimStep, run_script};
pub use trace::{EffectTrace, NodeState};
