//! The table: the player's ordered timeline of placed cards.

pub mod card;
pub mod timeline;

pub use card::PlacedCard;
pub use timeline::Table;
