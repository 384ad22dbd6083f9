// ABOUTME: Deck data model consumed by the renderer
// ABOUTME: Mirrors the slide records produced by the upstream extractor

use crate::errors::Result;
use serde::Deserialize;
use serde_json::Value;

/// Whether a list region renders as `<ol>` or `<ul>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum ListKind {
    Ordered,
    Unordered,
}

// The extractor tags ordered lists explicitly; everything else is a bullet list.
impl From<String> for ListKind {
    fn from(tag: String) -> Self {
        if tag == "ordered" {
            ListKind::Ordered
        } else {
            ListKind::Unordered
        }
    }
}

/// A list block embedded in a body, as a span of character offsets.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListRegion {
    pub start: usize,
    pub end: usize,
    #[serde(rename = "type")]
    pub kind: ListKind,
}

impl ListRegion {
    pub fn new(start: usize, end: usize, kind: ListKind) -> Self {
        Self { start, end, kind }
    }

    pub fn ordered(start: usize, end: usize) -> Self {
        Self::new(start, end, ListKind::Ordered)
    }

    pub fn unordered(start: usize, end: usize) -> Self {
        Self::new(start, end, ListKind::Unordered)
    }
}

/// A block of prose, possibly containing list regions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Body {
    pub raw_text: String,
    #[serde(default, rename = "listMarkers", alias = "listRegions")]
    pub list_regions: Vec<ListRegion>,
}

impl Body {
    /// A body with no lists, rendered as a single paragraph.
    pub fn paragraph(raw_text: impl Into<String>) -> Self {
        Self {
            raw_text: raw_text.into(),
            list_regions: Vec::new(),
        }
    }

    pub fn with_regions(raw_text: impl Into<String>, list_regions: Vec<ListRegion>) -> Self {
        Self {
            raw_text: raw_text.into(),
            list_regions,
        }
    }
}

/// Single-line text used for titles and subtitles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineText {
    pub raw_text: String,
}

impl InlineText {
    pub fn new(raw_text: impl Into<String>) -> Self {
        Self {
            raw_text: raw_text.into(),
        }
    }
}

/// One slide of the deck.
///
/// Tables, videos, images, notes and the background image are carried through untouched;
/// the renderer only reads the title, subtitle and bodies.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    #[serde(default)]
    pub title: Option<InlineText>,
    #[serde(default)]
    pub subtitle: Option<InlineText>,
    #[serde(default)]
    pub background_image: Option<String>,
    #[serde(default)]
    pub bodies: Vec<Body>,
    #[serde(default)]
    pub tables: Value,
    #[serde(default)]
    pub videos: Value,
    #[serde(default)]
    pub images: Value,
    #[serde(default)]
    pub notes: Value,
}

impl Slide {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(InlineText::new(title));
        self
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(InlineText::new(subtitle));
        self
    }

    pub fn body(mut self, body: Body) -> Self {
        self.bodies.push(body);
        self
    }
}

/// The ordered slide sequence of a presentation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "DeckRepr")]
pub struct Deck {
    pub slides: Vec<Slide>,
}

// The extractor emits a bare array; hand-written decks may wrap it in an object.
#[derive(Deserialize)]
#[serde(untagged)]
enum DeckRepr {
    Bare(Vec<Slide>),
    Wrapped { slides: Vec<Slide> },
}

impl From<DeckRepr> for Deck {
    fn from(repr: DeckRepr) -> Self {
        match repr {
            DeckRepr::Bare(slides) | DeckRepr::Wrapped { slides } => Deck { slides },
        }
    }
}

impl Deck {
    pub fn new(slides: Vec<Slide>) -> Self {
        Self { slides }
    }

    /// Parse a deck from the extractor's JSON output.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}
