//! Catalog loading.
//!
//! The catalog is read once at startup from a JSON document of the form
//!
//! ```json
//! { "events": [ { "year": 1969, "event": "Moon landing",
//!                 "info1": "...", "info2": "...", "imgUrl": "moon.jpg" } ] }
//! ```
//!
//! `year` and `event` are required. `year` is an integer or a
//! `YYYY[-MM[-DD]]` string. The remaining fields are optional.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

use super::date::EventDate;
use super::event::{Event, EventId};

/// The smallest catalog a game can start from: one table seed, one question.
pub const MIN_EVENTS: usize = 2;

/// Errors that can occur while loading the catalog.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The data source could not be read.
    #[error("failed to read catalog {path}: {source}")]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON or is missing required fields.
    #[error("malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// An event's year could not be interpreted as a date.
    #[error("event {index} has an invalid year: {value:?}")]
    InvalidDate {
        /// Position of the event in the source.
        index: usize,
        /// The raw year value.
        value: String,
    },

    /// Not enough events to deal the opening table and question.
    #[error("catalog needs at least 2 events, found {found}")]
    TooFewEvents {
        /// Number of events found.
        found: usize,
    },

    /// More events than an [`EventId`] can address.
    #[error("catalog has {found} events, more than event ids can address")]
    TooManyEvents {
        /// Number of events found.
        found: usize,
    },
}

#[derive(Deserialize)]
struct RawCatalog {
    events: Vec<RawEvent>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEvent {
    year: RawYear,
    event: String,
    #[serde(default)]
    info1: String,
    #[serde(default)]
    info2: String,
    #[serde(default)]
    img_url: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawYear {
    Number(i64),
    Text(String),
}

impl RawYear {
    fn into_date(self, index: usize) -> Result<EventDate, LoadError> {
        match self {
            RawYear::Number(n) => i32::try_from(n)
                .map(EventDate::from_year)
                .map_err(|_| LoadError::InvalidDate {
                    index,
                    value: n.to_string(),
                }),
            RawYear::Text(text) => EventDate::parse(&text).ok_or(LoadError::InvalidDate { index, value: text }),
        }
    }
}

fn id_for_position(index: usize, found: usize) -> Result<EventId, LoadError> {
    u32::try_from(index)
        .map(EventId::new)
        .map_err(|_| LoadError::TooManyEvents { found })
}

/// The immutable set of events a game is played from.
///
/// Events are identified by their position: `catalog.get(EventId(i))` is the
/// i-th event of the source.
#[derive(Clone, Debug)]
pub struct Catalog {
    events: Vec<Event>,
}

impl Catalog {
    /// Build a catalog from events, assigning IDs by position.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::TooFewEvents`] if fewer than two events are given,
    /// [`LoadError::TooManyEvents`] if positions overflow an [`EventId`].
    pub fn from_events(mut events: Vec<Event>) -> Result<Self, LoadError> {
        let found = events.len();
        if found < MIN_EVENTS {
            return Err(LoadError::TooFewEvents { found });
        }
        for (index, event) in events.iter_mut().enumerate() {
            event.id = id_for_position(index, found)?;
        }
        Ok(Self { events })
    }

    /// Parse a catalog from its JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] if the document is malformed, a year is invalid,
    /// or there are too few events.
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        let raw: RawCatalog = serde_json::from_str(json)?;

        let events = raw
            .events
            .into_iter()
            .enumerate()
            .map(|(index, raw)| {
                let date = raw.year.into_date(index)?;
                let mut event = Event::new(date, raw.event).with_info(raw.info1, raw.info2);
                event.image = raw.img_url.filter(|url| !url.is_empty());
                Ok(event)
            })
            .collect::<Result<Vec<_>, LoadError>>()?;

        debug!(count = events.len(), "parsed catalog events");
        Self::from_events(events)
    }

    /// Read and parse a catalog file.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Io`] if the file cannot be read, otherwise as
    /// [`Catalog::from_json_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = Self::from_json_str(&json)?;
        info!(path = %path.display(), events = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Get an event by ID.
    #[must_use]
    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.events.get(id.index())
    }

    /// Get the number of events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if the catalog is empty. Always false for a loaded catalog.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Iterate over all event IDs in catalog order.
    pub fn ids(&self) -> impl Iterator<Item = EventId> + '_ {
        self.events.iter().map(|e| e.id)
    }

    /// Iterate over all events in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }
}
