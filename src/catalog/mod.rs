//! Event catalog: the fixed set of historical events a game draws from.
//!
//! - `EventDate`/`DateKey`: orderable dates
//! - `Event`/`EventId`: immutable event records
//! - `Catalog`: the loaded collection and its JSON loader

pub mod date;
pub mod event;
pub mod loader;

pub use date::{DateKey, EventDate};
pub use event::{Event, EventId};
pub use loader::{Catalog, LoadError, MIN_EVENTS};
