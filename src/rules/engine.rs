//! Rules engine trait for timeline games.
//!
//! A rules engine decides:
//! - Which insertion points are legal
//! - How a placement modifies state
//! - When the game is over

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::catalog::EventId;
use crate::core::state::{GameState, Phase};

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// The strike limit was reached.
    GameOver {
        /// Score when the game ended.
        score: u32,
    },
    /// Every event was placed.
    DrawExhausted {
        /// Score when the pool ran out.
        score: u32,
    },
}

impl GameResult {
    /// Final score.
    #[must_use]
    pub fn score(&self) -> u32 {
        match self {
            GameResult::GameOver { score } | GameResult::DrawExhausted { score } => *score,
        }
    }

    /// Check if the game ended by running out of events rather than strikes.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        matches!(self, GameResult::DrawExhausted { .. })
    }
}

/// What follows a placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NextQuestion {
    /// A new event is awaiting placement.
    Question(EventId),
    /// The pool is empty; offer a replay.
    DrawExhausted,
    /// The strike limit was reached.
    GameOver {
        /// Score frozen at game end.
        final_score: u32,
    },
}

/// Everything a renderer needs after one placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementOutcome {
    /// The event that was placed.
    pub event: EventId,
    /// Where the player put it.
    pub position: usize,
    /// Whether the timeline was in order.
    pub correct: bool,
    /// Score after the placement.
    pub score: u32,
    /// Strikes after the placement.
    pub strikes: u32,
    /// The next question or a terminal signal.
    pub next: NextQuestion,
}

/// Errors from a placement request. State is untouched when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    /// The insertion index is outside `0..=table length`.
    #[error("position {position} is out of range for a table of {len} cards")]
    InvalidPosition {
        /// Requested index.
        position: usize,
        /// Table length at the time of the request.
        len: usize,
    },

    /// The game is not waiting for a placement.
    #[error("cannot place a card while {phase}")]
    NotAwaitingPlacement {
        /// Current phase.
        phase: Phase,
    },

    /// The pending event is not in this game's catalog.
    #[error("{0} is not in the catalog")]
    UnknownEvent(EventId),
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_positions`: Return an empty range if the player can't act
/// - `insert_at`: Must validate before mutating, and be deterministic given
///   the state's RNG
/// - `is_terminal`: Return None if the game continues
pub trait RulesEngine {
    /// Legal insertion indices for the pending question.
    fn legal_positions(&self, state: &GameState) -> Range<usize>;

    /// Place the pending question at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError`] without touching `state` if the game is not
    /// awaiting a placement or `position` is out of range.
    fn insert_at(&self, state: &mut GameState, position: usize) -> Result<PlacementOutcome, PlacementError>;

    /// Check if the game is over.
    ///
    /// Returns `Some(result)` if the game has ended, `None` if it continues.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Check if `position` would be accepted by `insert_at`.
    fn is_legal(&self, state: &GameState, position: usize) -> bool {
        self.legal_positions(state).contains(&position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_score() {
        let over = GameResult::GameOver { score: 4 };
        let exhausted = GameResult::DrawExhausted { score: 9 };

        assert_eq!(over.score(), 4);
        assert!(!over.is_exhausted());
        assert_eq!(exhausted.score(), 9);
        assert!(exhausted.is_exhausted());
    }

    #[test]
    fn test_error_messages() {
        let err = PlacementError::InvalidPosition { position: 5, len: 2 };
        assert_eq!(err.to_string(), "position 5 is out of range for a table of 2 cards");

        let err = PlacementError::NotAwaitingPlacement { phase: Phase::GameOver };
        assert_eq!(err.to_string(), "cannot place a card while game over");
    }
}
