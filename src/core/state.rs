//! Game state: everything that changes during a session.
//!
//! ## GameState
//!
//! - Phase
//! - Table (the player's timeline)
//! - Pending question
//! - Used events (the draw pool is the catalog minus these)
//! - Strikes and score
//! - Placement history
//! - RNG
//!
//! The catalog itself lives with the rules (`TimelineGame`); the state only
//! refers to events by `EventId`.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::record::PlacementRecord;
use super::rng::GameRng;
use crate::catalog::EventId;
use crate::table::Table;

/// Where a game is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Cards not dealt yet.
    Initializing,
    /// A question is pending and the player may place it.
    AwaitingPlacement,
    /// Every event has been placed. Terminal.
    DrawExhausted,
    /// The strike limit was reached. Terminal.
    GameOver,
}

impl Phase {
    /// Check if no further placement can happen.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::DrawExhausted | Phase::GameOver)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Initializing => "initializing",
            Phase::AwaitingPlacement => "awaiting placement",
            Phase::DrawExhausted => "draw exhausted",
            Phase::GameOver => "game over",
        };
        f.write_str(name)
    }
}

/// Mutable state of one game.
///
/// Only the rules engine mutates it; everything else reads through the
/// accessors. Cloning is cheap enough to hand copies to a renderer.
#[derive(Clone, Debug)]
pub struct GameState {
    phase: Phase,

    table: Table,

    pending: Option<EventId>,

    used: FxHashSet<EventId>,

    strikes: u32,

    score: u32,

    /// Placements made so far.
    turn: u32,

    history: Vector<PlacementRecord>,

    /// Deterministic RNG.
    pub rng: GameRng,
}

impl GameState {
    /// Create an undealt state.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self {
            phase: Phase::Initializing,
            table: Table::new(),
            pending: None,
            used: FxHashSet::default(),
            strikes: 0,
            score: 0,
            turn: 0,
            history: Vector::new(),
            rng,
        }
    }

    // === Queries ===

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The player's timeline.
    #[must_use]
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// The event awaiting placement, if any.
    #[must_use]
    pub fn pending(&self) -> Option<EventId> {
        self.pending
    }

    /// Events drawn so far.
    #[must_use]
    pub fn used(&self) -> &FxHashSet<EventId> {
        &self.used
    }

    /// Check if an event has been drawn.
    #[must_use]
    pub fn is_used(&self, event: EventId) -> bool {
        self.used.contains(&event)
    }

    /// Strikes taken.
    #[must_use]
    pub fn strikes(&self) -> u32 {
        self.strikes
    }

    /// Correct placements.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Placements made so far.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Placement history, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<PlacementRecord> {
        &self.history
    }

    // === Mutation (rules engine only) ===

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    pub(crate) fn table_mut(&mut self) -> &mut Table {
        &mut self.table
    }

    pub(crate) fn set_pending(&mut self, event: Option<EventId>) {
        self.pending = event;
    }

    /// Returns false if the event was already used.
    pub(crate) fn mark_used(&mut self, event: EventId) -> bool {
        self.used.insert(event)
    }

    pub(crate) fn add_strike(&mut self) {
        self.strikes += 1;
    }

    pub(crate) fn add_point(&mut self) {
        self.score += 1;
    }

    /// Advance the turn counter and return the new turn number.
    pub(crate) fn next_turn(&mut self) -> u32 {
        self.turn += 1;
        self.turn
    }

    pub(crate) fn record_placement(&mut self, record: PlacementRecord) {
        self.history.push_back(record);
    }
}
