//! Rendering collaborator.
//!
//! The engine never draws anything. After each action the caller takes a
//! [`GameSnapshot`] and hands it to a `Renderer`, which decides how the
//! question, the table with its insertion points, the status line and the
//! terminal messages look.

pub mod input;
pub mod terminal;

use std::io;

use crate::games::{CardView, GameSnapshot};
use crate::rules::{GameResult, PlacementOutcome};

pub use input::{Command, InputError};
pub use terminal::TerminalRenderer;

/// Something that can draw a timeline game.
pub trait Renderer {
    /// Draw score, strikes and pool size.
    fn render_status(&mut self, snapshot: &GameSnapshot) -> io::Result<()>;

    /// Draw the pending question, or hide it when there is none.
    fn render_question(&mut self, question: Option<&CardView>) -> io::Result<()>;

    /// Draw the table. With `insertion_points`, mark every index a card can
    /// go: before, between and after the cards.
    fn render_table(&mut self, table: &[CardView], insertion_points: bool) -> io::Result<()>;

    /// Report the result of one placement.
    fn render_outcome(&mut self, outcome: &PlacementOutcome, max_strikes: u32) -> io::Result<()>;

    /// Announce the end of a game and offer a replay.
    fn render_terminal(&mut self, result: &GameResult) -> io::Result<()>;

    /// Show the external lookup link for a card.
    fn render_link(&mut self, card: &CardView) -> io::Result<()>;

    /// Redraw everything from a snapshot.
    fn render(&mut self, snapshot: &GameSnapshot) -> io::Result<()> {
        self.render_status(snapshot)?;
        self.render_table(&snapshot.table, snapshot.insertion_points() > 0)?;
        self.render_question(snapshot.question.as_ref())?;
        if let Some(result) = &snapshot.result {
            self.render_terminal(result)?;
        }
        Ok(())
    }
}
