//! The player's timeline.
//!
//! `Table` is an ordered sequence of placed cards. It supports:
//! - Insertion at any point, both ends included
//! - The chronological order check (ties allowed)
//! - The recovery sort applied after a misplacement
//!
//! Backed by `im::Vector` so snapshots of the table are O(1) clones.

use std::ops::RangeInclusive;

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::PlacedCard;
use crate::catalog::EventId;

/// Ordered sequence of placed cards.
///
/// ## Usage
///
/// ```
/// use rust_timeline::catalog::{DateKey, EventId};
/// use rust_timeline::table::{PlacedCard, Table};
///
/// let mut table = Table::seeded(PlacedCard::from_parts(EventId(0), DateKey::year(1950)));
///
/// // Insertion points run from before the first card to after the last
/// assert_eq!(table.insertion_points(), 0..=1);
///
/// table.insert(0, PlacedCard::from_parts(EventId(1), DateKey::year(1900)));
/// assert!(table.is_order_correct());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    cards: Vector<PlacedCard>,
}

impl Table {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table holding a single seed card.
    #[must_use]
    pub fn seeded(card: PlacedCard) -> Self {
        let mut cards = Vector::new();
        cards.push_back(card);
        Self { cards }
    }

    /// Number of cards on the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the table has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Valid insertion indices: `0..=len`.
    #[must_use]
    pub fn insertion_points(&self) -> RangeInclusive<usize> {
        0..=self.cards.len()
    }

    /// Check if `position` is a valid insertion index.
    #[must_use]
    pub fn accepts(&self, position: usize) -> bool {
        position <= self.cards.len()
    }

    /// Get the card at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&PlacedCard> {
        self.cards.get(index)
    }

    /// Iterate over the cards in table order.
    pub fn iter(&self) -> impl Iterator<Item = &PlacedCard> {
        self.cards.iter()
    }

    /// Event IDs in table order.
    pub fn event_ids(&self) -> impl Iterator<Item = EventId> + '_ {
        self.cards.iter().map(|c| c.event)
    }

    /// Check if an event is on the table.
    #[must_use]
    pub fn contains(&self, event: EventId) -> bool {
        self.cards.iter().any(|c| c.event == event)
    }

    /// Insert a card at `position`, shifting later cards right.
    ///
    /// # Panics
    ///
    /// Panics if `position > len`. Callers check with [`Table::accepts`].
    pub fn insert(&mut self, position: usize, card: PlacedCard) {
        self.cards.insert(position, card);
    }

    /// Flag the card at `index` as misplaced.
    ///
    /// Returns false if there is no card at `index`.
    pub fn mark_misplaced(&mut self, index: usize) -> bool {
        match self.cards.get_mut(index) {
            Some(card) => {
                card.misplaced = true;
                true
            }
            None => false,
        }
    }

    /// True iff no card is dated strictly after the card following it.
    #[must_use]
    pub fn is_order_correct(&self) -> bool {
        self.cards
            .iter()
            .zip(self.cards.iter().skip(1))
            .all(|(earlier, later)| earlier.date <= later.date)
    }

    /// Re-sort by date ascending. Cards with equal dates keep their order.
    pub fn sort_chronologically(&mut self) {
        let mut cards: Vec<PlacedCard> = self.cards.iter().copied().collect();
        cards.sort_by_key(|c| c.date);
        self.cards = cards.into_iter().collect();
    }
}
