//! Placement history.

use serde::{Deserialize, Serialize};

use crate::catalog::EventId;

/// A recorded placement.
///
/// Used for:
/// - Replay/debugging
/// - End-of-game summaries
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlacementRecord {
    /// Placement number, starting at 1.
    pub turn: u32,

    /// The event that was placed.
    pub event: EventId,

    /// Insertion index the player chose.
    pub position: usize,

    /// Whether the table was in order after the insertion.
    pub correct: bool,
}

impl PlacementRecord {
    /// Create a new placement record.
    #[must_use]
    pub fn new(turn: u32, event: EventId, position: usize, correct: bool) -> Self {
        Self {
            turn,
            event,
            position,
            correct,
        }
    }
}
