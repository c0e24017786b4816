//! Core engine types: state, placement records, RNG, configuration.
//!
//! Everything here is independent of how a game is rendered.

pub mod config;
pub mod record;
pub mod rng;
pub mod state;

pub use config::{ConfigError, GameConfig};
pub use record::PlacementRecord;
pub use rng::GameRng;
pub use state::{GameState, Phase};
