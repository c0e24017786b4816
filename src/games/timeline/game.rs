//! Timeline game implementation.

use std::ops::Range;

use tracing::{debug, info};

use crate::catalog::{Catalog, EventId, MIN_EVENTS};
use crate::core::config::{ConfigError, GameConfig};
use crate::core::record::PlacementRecord;
use crate::core::rng::GameRng;
use crate::core::state::{GameState, Phase};
use crate::rules::{GameResult, NextQuestion, PlacementError, PlacementOutcome, RulesEngine};
use crate::table::{PlacedCard, Table};

/// The chronology game: a catalog plus its rules configuration.
///
/// Holds no per-game state; every game lives in its own [`GameState`].
#[derive(Clone, Debug)]
pub struct TimelineGame {
    catalog: Catalog,
    config: GameConfig,
}

impl TimelineGame {
    /// Create a game over `catalog`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configuration is not playable.
    pub fn new(catalog: Catalog, config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { catalog, config })
    }

    /// Get the catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Strikes that end a game.
    #[must_use]
    pub fn max_strikes(&self) -> u32 {
        self.config.max_strikes
    }

    /// Start a game using the configured seed, or a random one.
    #[must_use]
    pub fn start(&self) -> GameState {
        let rng = match self.config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        self.deal(rng)
    }

    /// Start a game with an explicit seed.
    #[must_use]
    pub fn new_game(&self, seed: u64) -> GameState {
        self.deal(GameRng::new(seed))
    }

    /// Throw away a game and deal a fresh one from the same catalog.
    ///
    /// The new game's RNG is forked from the old one, so a seeded session
    /// replays deterministically.
    #[must_use]
    pub fn replay(&self, mut previous: GameState) -> GameState {
        let rng = previous.rng.fork();
        info!(
            previous_score = previous.score(),
            previous_phase = %previous.phase(),
            "replaying"
        );
        self.deal(rng)
    }

    /// Events not drawn yet.
    #[must_use]
    pub fn remaining(&self, state: &GameState) -> usize {
        self.catalog.len().saturating_sub(state.used().len())
    }

    /// Deal the opening: first draw is the question, second seeds the table.
    fn deal(&self, rng: GameRng) -> GameState {
        let mut state = GameState::new(rng);
        let seed = state.rng.seed();

        let (Some(question), Some(opening)) = (self.draw(&mut state), self.draw(&mut state)) else {
            unreachable!("catalog holds at least {MIN_EVENTS} events");
        };

        let Some(card) = self.placed_card(opening) else {
            unreachable!("drawn ids come from the catalog");
        };
        *state.table_mut() = Table::seeded(card);
        state.set_pending(Some(question));
        state.set_phase(Phase::AwaitingPlacement);

        info!(
            seed,
            events = self.catalog.len(),
            table = %opening,
            question = %question,
            "game started"
        );
        state
    }

    /// Draw uniformly from the events not used yet and mark the pick used.
    fn draw(&self, state: &mut GameState) -> Option<EventId> {
        let pool: Vec<EventId> = self.catalog.ids().filter(|id| !state.is_used(*id)).collect();
        let drawn = state.rng.choose(&pool).copied()?;
        state.mark_used(drawn);
        debug!(event = %drawn, remaining = pool.len() - 1, "drew event");
        Some(drawn)
    }

    fn placed_card(&self, event: EventId) -> Option<PlacedCard> {
        self.catalog.get(event).map(PlacedCard::new)
    }
}

impl RulesEngine for TimelineGame {
    fn legal_positions(&self, state: &GameState) -> Range<usize> {
        if state.phase() != Phase::AwaitingPlacement || state.pending().is_none() {
            return 0..0;
        }
        0..state.table().len() + 1
    }

    fn insert_at(&self, state: &mut GameState, position: usize) -> Result<PlacementOutcome, PlacementError> {
        let phase = state.phase();
        if phase != Phase::AwaitingPlacement {
            return Err(PlacementError::NotAwaitingPlacement { phase });
        }
        let Some(event) = state.pending() else {
            return Err(PlacementError::NotAwaitingPlacement { phase });
        };
        if !state.table().accepts(position) {
            return Err(PlacementError::InvalidPosition {
                position,
                len: state.table().len(),
            });
        }
        let card = self.placed_card(event).ok_or(PlacementError::UnknownEvent(event))?;

        // Validated; from here on the placement always completes.
        state.set_pending(None);
        state.table_mut().insert(position, card);

        let correct = state.table().is_order_correct();
        if correct {
            state.add_point();
            debug!(event = %event, position, score = state.score(), "correct placement");
        } else {
            state.table_mut().mark_misplaced(position);
            state.add_strike();
            state.table_mut().sort_chronologically();
            info!(event = %event, position, strikes = state.strikes(), "misplaced card");
        }

        let turn = state.next_turn();
        state.record_placement(PlacementRecord::new(turn, event, position, correct));

        let next = if state.strikes() >= self.config.max_strikes {
            state.set_phase(Phase::GameOver);
            info!(score = state.score(), turns = turn, "game over");
            NextQuestion::GameOver {
                final_score: state.score(),
            }
        } else {
            match self.draw(state) {
                Some(question) => {
                    state.set_pending(Some(question));
                    NextQuestion::Question(question)
                }
                None => {
                    state.set_phase(Phase::DrawExhausted);
                    info!(score = state.score(), turns = turn, "all events placed");
                    NextQuestion::DrawExhausted
                }
            }
        };

        Ok(PlacementOutcome {
            event,
            position,
            correct,
            score: state.score(),
            strikes: state.strikes(),
            next,
        })
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        let score = state.score();
        match state.phase() {
            Phase::GameOver => Some(GameResult::GameOver { score }),
            Phase::DrawExhausted => Some(GameResult::DrawExhausted { score }),
            Phase::Initializing | Phase::AwaitingPlacement => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Event, EventDate};

    fn catalog(years: &[i32]) -> Catalog {
        let events = years
            .iter()
            .enumerate()
            .map(|(i, &y)| Event::new(EventDate::from_year(y), format!("E{i}")))
            .collect();
        Catalog::from_events(events).unwrap()
    }

    fn game(years: &[i32]) -> TimelineGame {
        TimelineGame::new(catalog(years), GameConfig::new()).unwrap()
    }

    /// Index that keeps the table in order for the pending event.
    fn correct_position(game: &TimelineGame, state: &GameState) -> usize {
        let date = game.catalog().get(state.pending().unwrap()).unwrap().date_key();
        state.table().iter().take_while(|c| c.date <= date).count()
    }

    #[test]
    fn test_deal() {
        let game = game(&[1900, 1950, 1920, 2000]);
        let state = game.new_game(42);

        assert_eq!(state.phase(), Phase::AwaitingPlacement);
        assert_eq!(state.table().len(), 1);
        assert_eq!(state.used().len(), 2);

        let question = state.pending().unwrap();
        assert!(state.is_used(question));
        assert!(!state.table().contains(question));
        for id in state.table().event_ids() {
            assert!(state.is_used(id));
        }
        assert_eq!(game.remaining(&state), 2);
    }

    #[test]
    fn test_deal_seeds_table_with_a_drawn_event() {
        let game = game(&[1900, 1950]);

        for seed in 0..20 {
            let state = game.new_game(seed);
            let question = state.pending().unwrap();
            let opening = state.table().get(0).unwrap();

            assert_eq!(state.table().len(), 1);
            assert_ne!(opening.event, question);
            assert_eq!(opening.date, game.catalog().get(opening.event).unwrap().date_key());
            assert!(!opening.misplaced);
        }
    }

    #[test]
    fn test_deal_is_deterministic() {
        let game = game(&[1, 2, 3, 4, 5, 6, 7, 8]);
        let a = game.new_game(7);
        let b = game.new_game(7);

        assert_eq!(a.pending(), b.pending());
        assert_eq!(a.table(), b.table());
    }

    #[test]
    fn test_start_with_configured_seed() {
        let config = GameConfig::new().with_seed(99);
        let game = TimelineGame::new(catalog(&[1, 2, 3, 4, 5]), config).unwrap();

        let a = game.start();
        let b = game.new_game(99);
        assert_eq!(a.pending(), b.pending());
        assert_eq!(a.table(), b.table());
    }

    #[test]
    fn test_zero_strikes_config_rejected() {
        let config = GameConfig::new().with_max_strikes(0);
        assert!(TimelineGame::new(catalog(&[1, 2]), config).is_err());
    }

    #[test]
    fn test_correct_placement_scores() {
        let game = game(&[1900, 1950, 1920, 2000]);
        let mut state = game.new_game(3);

        let position = correct_position(&game, &state);
        let outcome = game.insert_at(&mut state, position).unwrap();

        assert!(outcome.correct);
        assert_eq!(outcome.score, 1);
        assert_eq!(outcome.strikes, 0);
        assert_eq!(state.table().len(), 2);
        assert!(state.table().is_order_correct());
        assert!(state.table().iter().all(|c| !c.misplaced));
        assert!(matches!(outcome.next, NextQuestion::Question(_)));
    }

    #[test]
    fn test_wrong_placement_strikes_and_sorts() {
        let game = game(&[1900, 1950]);
        let mut state = game.new_game(11);

        let correct = correct_position(&game, &state);
        let wrong = 1 - correct;
        let event = state.pending().unwrap();

        let outcome = game.insert_at(&mut state, wrong).unwrap();

        assert!(!outcome.correct);
        assert_eq!(outcome.strikes, 1);
        assert_eq!(outcome.score, 0);
        assert!(state.table().is_order_correct());

        let flagged: Vec<_> = state.table().iter().filter(|c| c.misplaced).map(|c| c.event).collect();
        assert_eq!(flagged, vec![event]);
    }

    /// Writer collecting formatted log lines.
    #[derive(Clone, Default)]
    struct Captured(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_misplacement_is_quiet_at_warn_level() {
        let game = game(&[1900, 1950, 1920, 1990]);
        let mut state = game.new_game(11);
        let wrong = 1 - correct_position(&game, &state);

        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_writer(move || writer.clone())
            .finish();

        let outcome = tracing::subscriber::with_default(subscriber, || game.insert_at(&mut state, wrong).unwrap());

        assert!(!outcome.correct);
        assert!(captured.0.lock().unwrap().is_empty());
    }

    #[test]
    fn test_two_event_catalog_exhausts_after_one_turn() {
        let game = game(&[1900, 1950]);
        let mut state = game.new_game(5);

        let position = correct_position(&game, &state);
        let outcome = game.insert_at(&mut state, position).unwrap();

        assert_eq!(outcome.next, NextQuestion::DrawExhausted);
        assert_eq!(state.phase(), Phase::DrawExhausted);
        assert_eq!(state.pending(), None);
        assert_eq!(game.is_terminal(&state), Some(GameResult::DrawExhausted { score: 1 }));
        assert_eq!(game.legal_positions(&state), 0..0);
    }

    #[test]
    fn test_invalid_position_leaves_state_untouched() {
        let game = game(&[1900, 1950, 1920]);
        let mut state = game.new_game(8);
        let before = state.clone();

        let err = game.insert_at(&mut state, 2).unwrap_err();

        assert_eq!(err, PlacementError::InvalidPosition { position: 2, len: 1 });
        assert_eq!(state.table(), before.table());
        assert_eq!(state.pending(), before.pending());
        assert_eq!(state.used(), before.used());
        assert_eq!(state.turn(), 0);
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_placement_after_game_over_rejected() {
        let config = GameConfig::new().with_max_strikes(1);
        let game = TimelineGame::new(catalog(&[1900, 1950, 1920, 1990]), config).unwrap();
        let mut state = game.new_game(21);

        let wrong = 1 - correct_position(&game, &state);
        let outcome = game.insert_at(&mut state, wrong).unwrap();

        assert_eq!(outcome.next, NextQuestion::GameOver { final_score: 0 });
        assert_eq!(state.pending(), None);
        assert_eq!(
            game.insert_at(&mut state, 0),
            Err(PlacementError::NotAwaitingPlacement { phase: Phase::GameOver })
        );
    }

    #[test]
    fn test_history_records_placements() {
        let game = game(&[1, 2, 3, 4, 5]);
        let mut state = game.new_game(13);

        let first = state.pending().unwrap();
        let position = correct_position(&game, &state);
        game.insert_at(&mut state, position).unwrap();

        let record = state.history().get(0).copied().unwrap();
        assert_eq!(record, PlacementRecord::new(1, first, position, true));
        assert_eq!(state.turn(), 1);
    }

    #[test]
    fn test_replay_resets_everything() {
        let game = game(&[1900, 1950, 1920]);
        let mut state = game.new_game(17);
        while game.is_terminal(&state).is_none() {
            game.insert_at(&mut state, 0).unwrap();
        }

        let fresh = game.replay(state);

        assert_eq!(fresh.phase(), Phase::AwaitingPlacement);
        assert_eq!(fresh.table().len(), 1);
        assert_eq!(fresh.used().len(), 2);
        assert_eq!(fresh.score(), 0);
        assert_eq!(fresh.strikes(), 0);
        assert!(fresh.history().is_empty());
    }

    #[test]
    fn test_is_legal() {
        let game = game(&[1900, 1950, 1920]);
        let state = game.new_game(1);

        assert!(game.is_legal(&state, 0));
        assert!(game.is_legal(&state, 1));
        assert!(!game.is_legal(&state, 2));
    }
}
