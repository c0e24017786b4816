//! Plain-text renderer for an interactive terminal.

use std::io::{self, Write};

use rustc_hash::FxHashSet;

use super::Renderer;
use crate::catalog::EventId;
use crate::games::{CardView, GameSnapshot};
use crate::rules::{GameResult, NextQuestion, PlacementOutcome};

const LIFE: &str = "❤";
const LOST: &str = "🤍";

/// Draws the game as text on any writer.
///
/// Cards can be flipped to their back side, which shows `info2`.
#[derive(Debug)]
pub struct TerminalRenderer<W: Write> {
    out: W,
    flipped: FxHashSet<EventId>,
}

impl<W: Write> TerminalRenderer<W> {
    /// Create a renderer writing to `out`.
    pub fn new(out: W) -> Self {
        Self {
            out,
            flipped: FxHashSet::default(),
        }
    }

    /// Turn a card over. Returns true if it now shows its back.
    pub fn toggle_flip(&mut self, event: EventId) -> bool {
        if self.flipped.remove(&event) {
            false
        } else {
            self.flipped.insert(event);
            true
        }
    }

    /// Forget flipped cards, e.g. on replay.
    pub fn reset(&mut self) {
        self.flipped.clear();
    }

    /// Print a line of free text.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn message(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")?;
        self.out.flush()
    }

    /// Print the command summary.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn help(&mut self) -> io::Result<()> {
        writeln!(self.out, "Commands:")?;
        writeln!(self.out, "  <n>       place the question at slot [n]")?;
        writeln!(self.out, "  flip <n>  turn table card n over")?;
        writeln!(self.out, "  link <n>  show a lookup link for table card n")?;
        writeln!(self.out, "  quit      leave the game")?;
        self.out.flush()
    }

    /// Consume the renderer and return its writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn card_line(&self, card: &CardView) -> String {
        let mut line = if self.flipped.contains(&card.event) {
            format!("{:>10}  {}", card.date, card.info2)
        } else if card.info1.is_empty() {
            format!("{:>10}  {}", card.date, card.label)
        } else {
            format!("{:>10}  {} - {}", card.date, card.label, card.info1)
        };
        if card.misplaced {
            line.push_str("  (misplaced)");
        }
        line
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render_status(&mut self, snapshot: &GameSnapshot) -> io::Result<()> {
        let lives = snapshot.max_strikes.saturating_sub(snapshot.strikes) as usize;
        let hearts: Vec<&str> = std::iter::repeat(LIFE)
            .take(lives)
            .chain(std::iter::repeat(LOST).take(snapshot.strikes as usize))
            .collect();

        writeln!(self.out)?;
        writeln!(
            self.out,
            "Score: {}   Lives: {}   Left: {}",
            snapshot.score,
            hearts.join(" "),
            snapshot.remaining
        )
    }

    fn render_question(&mut self, question: Option<&CardView>) -> io::Result<()> {
        let Some(card) = question else {
            return self.out.flush();
        };

        writeln!(self.out)?;
        write!(self.out, "Place this event: {}", card.label)?;
        if !card.info1.is_empty() {
            write!(self.out, " ({})", card.info1)?;
        }
        writeln!(self.out)?;
        if let Some(image) = &card.image {
            writeln!(self.out, "  image: {image}")?;
        }
        self.out.flush()
    }

    fn render_table(&mut self, table: &[CardView], insertion_points: bool) -> io::Result<()> {
        writeln!(self.out)?;
        if insertion_points {
            writeln!(self.out, "  [0]")?;
        }
        for (index, card) in table.iter().enumerate() {
            let line = self.card_line(card);
            writeln!(self.out, "  {index:>2}: {line}")?;
            if insertion_points {
                writeln!(self.out, "  [{}]", index + 1)?;
            }
        }
        Ok(())
    }

    fn render_outcome(&mut self, outcome: &PlacementOutcome, max_strikes: u32) -> io::Result<()> {
        if outcome.correct {
            writeln!(self.out, "Correct! Score: {}", outcome.score)?;
        } else {
            writeln!(
                self.out,
                "Wrong! Strike {} of {}. The timeline has been put back in order.",
                outcome.strikes, max_strikes
            )?;
        }
        if let NextQuestion::GameOver { final_score } = outcome.next {
            writeln!(self.out, "No lives left (final score {final_score}).")?;
        }
        self.out.flush()
    }

    fn render_terminal(&mut self, result: &GameResult) -> io::Result<()> {
        writeln!(self.out)?;
        match result {
            GameResult::GameOver { score } => writeln!(self.out, "Game Over! Final Score: {score}")?,
            GameResult::DrawExhausted { score } => {
                writeln!(self.out, "You've placed all events! Final Score: {score}")?;
            }
        }
        write!(self.out, "Replay? [y/N] ")?;
        self.out.flush()
    }

    fn render_link(&mut self, card: &CardView) -> io::Result<()> {
        writeln!(self.out, "{}: {}", card.label, card.reference_url)?;
        self.out.flush()
    }
}
