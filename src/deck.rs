// ABOUTME: Deck renderer for the big-deck engine
// ABOUTME: Maps the slide renderer over a deck, isolating per-slide failures

use crate::errors::{DeckError, Result};
use crate::model::{Deck, Slide};
use crate::slide::render_slide;
use log::{debug, info, warn};
use std::str::FromStr;
use std::thread;

/// Render every slide of `deck`, one result per slide, in deck order.
///
/// A slide that fails to render produces its own `Err`; the rest of the deck is unaffected.
pub fn render_deck(deck: &Deck) -> Vec<Result<String>> {
    info!("Rendering deck of {} slides", deck.len());
    deck.slides.iter().enumerate().map(render_indexed).collect()
}

/// Like [`render_deck`], but renders slides on scoped worker threads.
///
/// Results come back in deck order regardless of which thread finishes first.
pub fn render_deck_parallel(deck: &Deck) -> Vec<Result<String>> {
    info!("Rendering deck of {} slides in parallel", deck.len());
    let workers = thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
        .max(1);
    let chunk_size = deck.len().div_ceil(workers).max(1);

    thread::scope(|scope| {
        let handles = deck
            .slides
            .chunks(chunk_size)
            .enumerate()
            .map(|(chunk_index, chunk)| {
                let handle = scope.spawn(move || {
                    chunk
                        .iter()
                        .enumerate()
                        .map(|(i, slide)| render_indexed((chunk_index * chunk_size + i, slide)))
                        .collect::<Vec<_>>()
                });
                (chunk.len(), handle)
            })
            .collect::<Vec<_>>();

        // Joining in spawn order restores deck order.
        handles
            .into_iter()
            .flat_map(|(count, handle)| match handle.join() {
                Ok(results) => results,
                Err(_) => (0..count)
                    .map(|_| {
                        Err(DeckError::UnknownError(
                            "slide render worker panicked".to_string(),
                        ))
                    })
                    .collect(),
            })
            .collect()
    })
}

fn render_indexed((index, slide): (usize, &Slide)) -> Result<String> {
    debug!("Rendering slide {}", index + 1);
    render_slide(slide)
}

/// What to do with a slide that failed to render when joining fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Leave the slide out.
    Skip,
    /// Put an HTML comment naming the failure where the slide would have been.
    #[default]
    Marker,
}

impl FromStr for FailurePolicy {
    type Err = DeckError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "skip" => Ok(FailurePolicy::Skip),
            "marker" => Ok(FailurePolicy::Marker),
            other => Err(DeckError::ConfigError(format!(
                "Unknown failure policy: {} (expected 'skip' or 'marker')",
                other
            ))),
        }
    }
}

/// Per-slide render results for a whole deck.
#[derive(Debug)]
pub struct RenderedDeck {
    results: Vec<Result<String>>,
}

impl RenderedDeck {
    pub fn new(results: Vec<Result<String>>) -> Self {
        Self { results }
    }

    pub fn from_deck(deck: &Deck) -> Self {
        Self::new(render_deck(deck))
    }

    pub fn from_deck_parallel(deck: &Deck) -> Self {
        Self::new(render_deck_parallel(deck))
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn results(&self) -> &[Result<String>] {
        &self.results
    }

    /// Successfully rendered fragments, in deck order.
    pub fn fragments(&self) -> Vec<&str> {
        self.results
            .iter()
            .filter_map(|result| result.as_ref().ok().map(String::as_str))
            .collect()
    }

    /// Failed slides as `(index, error)`, indices zero-based.
    pub fn failures(&self) -> Vec<(usize, &DeckError)> {
        self.results
            .iter()
            .enumerate()
            .filter_map(|(index, result)| result.as_ref().err().map(|err| (index, err)))
            .collect()
    }

    /// Fragments after applying `policy` to failed slides, in deck order.
    pub fn resolve(&self, policy: FailurePolicy) -> Vec<String> {
        self.results
            .iter()
            .enumerate()
            .filter_map(|(index, result)| match result {
                Ok(fragment) => Some(fragment.clone()),
                Err(err) => {
                    warn!("Slide {} failed to render: {}", index + 1, err);
                    match policy {
                        FailurePolicy::Skip => None,
                        FailurePolicy::Marker => Some(failure_marker(index, err)),
                    }
                }
            })
            .collect()
    }

    /// Join the resolved fragments with `separator`.
    pub fn join(&self, policy: FailurePolicy, separator: &str) -> String {
        self.resolve(policy).join(separator)
    }
}

fn failure_marker(index: usize, err: &DeckError) -> String {
    format!(
        "<!-- slide {} failed to render: {} -->",
        index + 1,
        comment_safe(&err.to_string())
    )
}

// A comment body may not contain "--" nor end in "-".
fn comment_safe(text: &str) -> String {
    let mut safe = text.to_string();
    while safe.contains("--") {
        safe = safe.replace("--", "- -");
    }
    if safe.ends_with('-') {
        safe.push(' ');
    }
    safe
}
