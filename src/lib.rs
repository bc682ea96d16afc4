//! Core library for a rule-configurable Life-family cellular automaton.
//!
//! The transition rules are lookup tables indexed by live-neighbor
//! count rather than the hard-coded Conway rules, so Life variants can
//! be dialed in at runtime.

pub mod engine;
pub mod error;
pub mod grid;
pub mod neighbors;
pub mod rules;

pub use engine::{Clock, Scheduler, SchedulerState, Simulation, SystemClock, Tick, step};
pub use error::EngineError;
pub use grid::{Cell, Grid};
pub use neighbors::neighbors_of;
pub use rules::RuleTable;
