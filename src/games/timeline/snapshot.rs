//! Render-ready views of a game.
//!
//! A `GameSnapshot` resolves every event ID against the catalog so a
//! renderer can draw the question, the table and the status line without
//! access to engine internals.

use serde::{Deserialize, Serialize};

use super::game::TimelineGame;
use crate::catalog::{Event, EventId};
use crate::core::state::{GameState, Phase};
use crate::rules::{GameResult, RulesEngine};

/// One card as a renderer sees it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    /// The event shown.
    pub event: EventId,
    /// Date as written in the catalog.
    pub date: String,
    /// Front label.
    pub label: String,
    /// Front auxiliary line.
    pub info1: String,
    /// Back side text.
    pub info2: String,
    /// Resolved image path.
    pub image: Option<String>,
    /// External lookup link.
    pub reference_url: String,
    /// Set on the card that broke the order.
    pub misplaced: bool,
}

/// Everything needed to redraw the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub phase: Phase,
    pub score: u32,
    pub strikes: u32,
    pub max_strikes: u32,
    /// Events still in the draw pool.
    pub remaining: usize,
    pub question: Option<CardView>,
    /// Cards in table order. Insertion point `i` sits before `table[i]`.
    pub table: Vec<CardView>,
    pub result: Option<GameResult>,
}

impl GameSnapshot {
    /// Number of insertion points the renderer should offer.
    #[must_use]
    pub fn insertion_points(&self) -> usize {
        if self.phase == Phase::AwaitingPlacement {
            self.table.len() + 1
        } else {
            0
        }
    }
}

impl TimelineGame {
    /// Build a snapshot of `state` for rendering.
    #[must_use]
    pub fn snapshot(&self, state: &GameState) -> GameSnapshot {
        let question = state
            .pending()
            .and_then(|id| self.catalog().get(id))
            .map(|event| self.card_view(event, false));

        let table = state
            .table()
            .iter()
            .filter_map(|card| {
                self.catalog()
                    .get(card.event)
                    .map(|event| self.card_view(event, card.misplaced))
            })
            .collect();

        GameSnapshot {
            phase: state.phase(),
            score: state.score(),
            strikes: state.strikes(),
            max_strikes: self.max_strikes(),
            remaining: self.remaining(state),
            question,
            table,
            result: self.is_terminal(state),
        }
    }

    fn card_view(&self, event: &Event, misplaced: bool) -> CardView {
        let config = self.config();
        CardView {
            event: event.id,
            date: event.date.to_string(),
            label: event.label.clone(),
            info1: event.info1.clone(),
            info2: event.info2.clone(),
            image: event.image_path(&config.image_dir),
            reference_url: event.reference_url(&config.reference_base),
            misplaced,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, EventDate};
    use crate::core::config::GameConfig;

    fn game() -> TimelineGame {
        let events = vec![
            Event::new(EventDate::from_year(1900), "A").with_image("a.png"),
            Event::new(EventDate::from_year(1950), "B").with_info("front", "back"),
        ];
        TimelineGame::new(Catalog::from_events(events).unwrap(), GameConfig::new()).unwrap()
    }

    #[test]
    fn test_snapshot_of_fresh_game() {
        let game = game();
        let state = game.new_game(1);
        let snapshot = game.snapshot(&state);

        assert_eq!(snapshot.phase, Phase::AwaitingPlacement);
        assert_eq!(snapshot.score, 0);
        assert_eq!(snapshot.strikes, 0);
        assert_eq!(snapshot.max_strikes, 3);
        assert_eq!(snapshot.remaining, 0);
        assert_eq!(snapshot.table.len(), 1);
        assert_eq!(snapshot.insertion_points(), 2);
        assert!(snapshot.result.is_none());

        let question = snapshot.question.unwrap();
        assert_eq!(Some(question.event), state.pending());
        assert!(!question.misplaced);
    }

    #[test]
    fn test_snapshot_resolves_card_fields() {
        let game = game();
        let state = game.new_game(1);
        let snapshot = game.snapshot(&state);

        let cards: Vec<_> = snapshot.question.iter().chain(snapshot.table.iter()).collect();
        let a = cards.iter().find(|c| c.label == "A").unwrap();
        let b = cards.iter().find(|c| c.label == "B").unwrap();

        assert_eq!(a.image.as_deref(), Some("data_images/a.png"));
        assert_eq!(a.date, "1900");
        assert!(a.reference_url.ends_with("A%20wikipedia"));
        assert_eq!(b.info1, "front");
        assert_eq!(b.info2, "back");
        assert!(b.image.is_none());
    }

    #[test]
    fn test_snapshot_after_exhaustion() {
        let game = game();
        let mut state = game.new_game(1);
        game.insert_at(&mut state, 0).unwrap();

        let snapshot = game.snapshot(&state);
        assert_eq!(snapshot.phase, Phase::DrawExhausted);
        assert!(snapshot.question.is_none());
        assert_eq!(snapshot.table.len(), 2);
        assert_eq!(snapshot.insertion_points(), 0);
        assert!(snapshot.result.unwrap().is_exhausted());

        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"phase\":\"DrawExhausted\""));
    }
}
