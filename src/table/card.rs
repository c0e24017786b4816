//! Placed cards - runtime card state on the table.
//!
//! A `PlacedCard` points back at its catalog event and carries the one
//! piece of mutable state a card has: whether it was misplaced.

use serde::{Deserialize, Serialize};

use crate::catalog::{DateKey, Event, EventId};

/// A card on the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlacedCard {
    /// The catalog event this card shows.
    pub event: EventId,

    /// Sort key copied from the event.
    pub date: DateKey,

    /// Set when this card was the one that broke the order.
    pub misplaced: bool,
}

impl PlacedCard {
    /// Create a correctly-placed card for an event.
    #[must_use]
    pub fn new(event: &Event) -> Self {
        Self {
            event: event.id,
            date: event.date_key(),
            misplaced: false,
        }
    }

    /// Create a card from its raw parts.
    #[must_use]
    pub const fn from_parts(event: EventId, date: DateKey) -> Self {
        Self {
            event,
            date,
            misplaced: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::EventDate;

    #[test]
    fn test_new_copies_event() {
        let mut event = Event::new(EventDate::parse("1815-06-18").unwrap(), "Waterloo");
        event.id = EventId::new(3);

        let card = PlacedCard::new(&event);
        assert_eq!(card.event, EventId::new(3));
        assert_eq!(card.date, DateKey { year: 1815, month: 6, day: 18 });
        assert!(!card.misplaced);
    }
}
