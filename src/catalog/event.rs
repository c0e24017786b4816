//! Event definitions - static card data.
//!
//! An `Event` is one historical occurrence from the catalog. It never
//! changes once loaded; the table tracks placement state separately in
//! `PlacedCard`.

use serde::{Deserialize, Serialize};

use super::date::{DateKey, EventDate};

/// Identifier of an event: its index in catalog order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EventId(pub u32);

impl EventId {
    /// Create a new event ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The catalog index this ID refers to.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Event({})", self.0)
    }
}

/// A historical event.
///
/// ## Example
///
/// ```
/// use rust_timeline::catalog::{Event, EventDate};
///
/// let landing = Event::new(EventDate::from_year(1969), "Moon landing")
///     .with_info("Apollo 11", "Armstrong and Aldrin walk on the Moon")
///     .with_image("apollo.jpg");
///
/// assert_eq!(landing.image_path("data_images").as_deref(), Some("data_images/apollo.jpg"));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Event {
    /// Identity. Assigned from catalog position when the catalog is built.
    pub id: EventId,

    /// When it happened.
    pub date: EventDate,

    /// Short label shown on the card front.
    pub label: String,

    /// First auxiliary line, shown under the label.
    pub info1: String,

    /// Second auxiliary line, shown on the card back.
    pub info2: String,

    /// Image file name, relative to the image directory.
    pub image: Option<String>,
}

impl Event {
    /// Create an event with empty auxiliary text and no image.
    #[must_use]
    pub fn new(date: EventDate, label: impl Into<String>) -> Self {
        Self {
            id: EventId::default(),
            date,
            label: label.into(),
            info1: String::new(),
            info2: String::new(),
            image: None,
        }
    }

    /// Set both auxiliary texts (builder pattern).
    #[must_use]
    pub fn with_info(mut self, info1: impl Into<String>, info2: impl Into<String>) -> Self {
        self.info1 = info1.into();
        self.info2 = info2.into();
        self
    }

    /// Set the image reference (builder pattern).
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Sort key of this event.
    #[must_use]
    pub fn date_key(&self) -> DateKey {
        self.date.key()
    }

    /// Image path under `image_dir`, if the event has an image.
    #[must_use]
    pub fn image_path(&self, image_dir: &str) -> Option<String> {
        let image = self.image.as_deref()?;
        let dir = image_dir.trim_end_matches('/');
        if dir.is_empty() {
            Some(image.to_string())
        } else {
            Some(format!("{dir}/{image}"))
        }
    }

    /// External lookup link: a search for "<label> wikipedia" under `base`.
    #[must_use]
    pub fn reference_url(&self, base: &str) -> String {
        let query = format!("{} wikipedia", self.label);
        format!("{base}{}", encode_component(&query))
    }
}

/// Percent-encode everything outside `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
fn encode_component(input: &str) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";

    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => {
                out.push('%');
                out.push(HEX[(byte >> 4) as usize] as char);
                out.push(HEX[(byte & 0x0F) as usize] as char);
            }
        }
    }
    out
}
