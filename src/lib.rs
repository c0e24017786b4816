//! # rust-timeline
//!
//! A chronology card game engine: draw a historical event, place it into
//! your timeline, and find out whether the order is right.
//!
//! ## Rules
//!
//! 1. Two distinct events are dealt: one seeds the table, one is the first
//!    question.
//!
//! 2. Each turn the player picks an insertion point, before, between or
//!    after the cards on the table.
//!
//! 3. A placement that keeps every card no later than its successor scores
//!    a point. Anything else is a strike: the card is flagged and the table
//!    is sorted back into order.
//!
//! 4. The game ends on the last strike, or when every event has been placed.
//!
//! ## Architecture
//!
//! - **Owned state**: one `GameState` value per game, mutated only through
//!   `RulesEngine::insert_at`. No globals.
//!
//! - **Deterministic draws**: a seeded `GameRng` picks uniformly from the
//!   events not yet used, so a seed replays the same game.
//!
//! - **Snapshots out, positions in**: renderers read `GameSnapshot`s and send
//!   back an insertion index; the engine never touches I/O beyond loading the
//!   catalog.
//!
//! ## Modules
//!
//! - `core`: State, placement records, RNG, configuration
//! - `catalog`: Events, dates and the JSON catalog loader
//! - `table`: Placed cards and the order check
//! - `rules`: RulesEngine trait, outcomes and errors
//! - `games`: The timeline game and its snapshots
//! - `render`: Renderer trait, terminal renderer, input commands

pub mod core;
pub mod catalog;
pub mod table;
pub mod rules;
pub mod games;
pub mod render;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, GameConfig,
    GameRng,
    GameState, Phase,
    PlacementRecord,
};

pub use crate::catalog::{Catalog, DateKey, Event, EventDate, EventId, LoadError};

pub use crate::table::{PlacedCard, Table};

pub use crate::rules::{GameResult, NextQuestion, PlacementError, PlacementOutcome, RulesEngine};

pub use crate::games::{CardView, GameSnapshot, TimelineGame};

pub use crate::render::{Command, InputError, Renderer, TerminalRenderer};
