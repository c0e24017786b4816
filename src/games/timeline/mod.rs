//! The chronology game: place each drawn event into the timeline.

pub mod game;
pub mod snapshot;

pub use game::TimelineGame;
pub use snapshot::{CardView, GameSnapshot};
