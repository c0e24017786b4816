//! Rules engine trait and placement outcomes.
//!
//! Games implement `RulesEngine` to define:
//! - Legal insertion points for each game state
//! - How a placement modifies state
//! - End conditions
//!
//! Renderers call into `RulesEngine` and read back outcomes and snapshots;
//! they never mutate `GameState` directly.

pub mod engine;

pub use engine::{GameResult, NextQuestion, PlacementError, PlacementOutcome, RulesEngine};
