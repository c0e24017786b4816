//! Orderable event dates.
//!
//! Catalog entries carry either a bare year (`1969`, `-44`) or a calendar
//! date string (`"1969"`, `"1969-07"`, `"1969-07-20"`). Missing parts
//! default to the first month/day, so a bare year sorts at its Jan 1st.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Sort key of an event: (year, month, day).
///
/// Small and `Copy` so placed cards can carry it without touching the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DateKey {
    /// Astronomical-ish year; negative for BC.
    pub year: i32,
    /// Month, 1-12.
    pub month: u8,
    /// Day of month, 1-31.
    pub day: u8,
}

impl DateKey {
    /// Key for Jan 1st of `year`.
    #[must_use]
    pub const fn year(year: i32) -> Self {
        Self { year, month: 1, day: 1 }
    }
}

/// A date as written in the catalog, with its sort key.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EventDate {
    key: DateKey,
    text: String,
}

impl EventDate {
    /// Date from a bare integer year.
    #[must_use]
    pub fn from_year(year: i32) -> Self {
        Self {
            key: DateKey::year(year),
            text: year.to_string(),
        }
    }

    /// Parse `YYYY`, `YYYY-MM` or `YYYY-MM-DD`, with an optional leading `-`.
    ///
    /// Returns `None` if the text is not one of those forms.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        let (negative, body) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let mut parts = body.split('-');
        let year_part = parts.next()?;
        if year_part.is_empty() || !year_part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let magnitude: i32 = year_part.parse().ok()?;
        let year = if negative { -magnitude } else { magnitude };

        let month = match parts.next() {
            Some(m) => parse_component(m, 12)?,
            None => 1,
        };
        let day = match parts.next() {
            Some(d) => parse_component(d, 31)?,
            None => 1,
        };
        if parts.next().is_some() {
            return None;
        }

        Some(Self {
            key: DateKey { year, month, day },
            text: trimmed.to_string(),
        })
    }

    /// The sort key.
    #[must_use]
    pub fn key(&self) -> DateKey {
        self.key
    }

    /// The year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.key.year
    }

    /// The date as written in the source.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

fn parse_component(raw: &str, max: u8) -> Option<u8> {
    if raw.is_empty() || raw.len() > 2 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value: u8 = raw.parse().ok()?;
    (1..=max).contains(&value).then_some(value)
}

impl PartialEq for EventDate {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for EventDate {}

impl PartialOrd for EventDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EventDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl fmt::Display for EventDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
