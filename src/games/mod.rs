//! Game implementations on top of the rules engine.

pub mod timeline;

pub use timeline::{CardView, GameSnapshot, TimelineGame};
