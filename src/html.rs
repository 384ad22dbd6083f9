// ABOUTME: HTML generation module for the big-deck application
// ABOUTME: Loads an extracted deck, renders its slides and wraps them in a page

use crate::config::Config;
use crate::deck::RenderedDeck;
use crate::errors::{DeckError, Result};
use crate::model::Deck;
use crate::page::Page;
use log::{info, warn};
use std::fs;
use std::path::Path;

/// Fail unless `path` names an existing regular file
pub fn require_deck_file(path: &Path) -> Result<()> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_file() => Ok(()),
        Ok(_) => Err(DeckError::ValidationError(format!(
            "Deck path is not a file: {:?}",
            path
        ))),
        Err(_) => Err(DeckError::PathNotFoundError(path.to_path_buf())),
    }
}

/// Create the directory an output file will be written into
pub fn prepare_output_dir(output_path: &Path) -> Result<()> {
    match output_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => {
            fs::create_dir_all(dir).map_err(DeckError::FileReadError)
        }
        _ => Ok(()),
    }
}

/// Read and parse a deck from the extractor's JSON output
pub fn load_deck(deck_path: &Path) -> Result<Deck> {
    info!("Loading deck: {:?}", deck_path);
    require_deck_file(deck_path)?;

    let json = fs::read_to_string(deck_path).map_err(DeckError::FileReadError)?;
    let deck = Deck::from_json(&json)?;

    info!("Loaded {} slides", deck.len());
    Ok(deck)
}

/// Render every slide of a deck, honoring the configured execution mode
pub fn render(deck: &Deck, config: &Config) -> RenderedDeck {
    let rendered = if config.parallel {
        RenderedDeck::from_deck_parallel(deck)
    } else {
        RenderedDeck::from_deck(deck)
    };

    let failures = rendered.failures();
    if !failures.is_empty() {
        warn!(
            "{} of {} slides failed to render",
            failures.len(),
            rendered.len()
        );
    }

    rendered
}

/// Render a deck file into its slide fragments, failed slides resolved per config
pub fn generate_fragments(deck_path: &Path, config: &Config) -> Result<Vec<String>> {
    let deck = load_deck(deck_path)?;
    Ok(render(&deck, config).resolve(config.failure_policy))
}

/// Render a deck file into a complete HTML page
pub fn generate_html(deck_path: &Path, config: &Config) -> Result<String> {
    info!("Generating HTML from deck: {:?}", deck_path);

    let deck = load_deck(deck_path)?;
    let slides_html = render(&deck, config).join(config.failure_policy, &config.separator);

    Page::new(config.title.clone()).render(&slides_html)
}

/// Utility function to write HTML content to a file
pub fn write_html_to_file(html_content: &str, output_path: &Path) -> Result<()> {
    info!("Writing HTML to file: {:?}", output_path);

    prepare_output_dir(output_path)?;
    fs::write(output_path, html_content).map_err(DeckError::FileReadError)?;

    Ok(())
}
