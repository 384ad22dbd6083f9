// ABOUTME: Watch module for monitoring deck changes and regenerating the page
// ABOUTME: Re-renders the HTML output whenever the extracted deck file changes

use log::{debug, error, info};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::{Duration, Instant};

use notify::{RecursiveMode, Watcher};
use notify_debouncer_full::new_debouncer;

use crate::config::Config as AppConfig;
use crate::errors::{DeckError, Result};
use crate::html;

/// Configuration for watch mode
pub struct WatchConfig {
    /// Path to the deck JSON file to watch
    pub deck_path: PathBuf,

    /// Output HTML file path
    pub html_output: PathBuf,

    /// Debounce time in milliseconds
    pub debounce_ms: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            deck_path: PathBuf::new(),
            html_output: PathBuf::new(),
            debounce_ms: 500,
        }
    }
}

/// Starts watching a deck file and regenerates the HTML page when it changes
pub fn watch_deck(config: WatchConfig, app_config: &AppConfig) -> Result<()> {
    html::require_deck_file(&config.deck_path)?;
    html::prepare_output_dir(&config.html_output)?;

    // Initial generation
    regenerate_output(&config, app_config)?;

    let (tx, rx) = mpsc::channel();

    let mut debouncer = new_debouncer(Duration::from_millis(config.debounce_ms), None, tx)
        .map_err(|e| DeckError::WatchError(format!("Failed to create file watcher: {}", e)))?;

    let watch_path = match config.deck_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let abs_watch_path = fs::canonicalize(watch_path).map_err(|e| {
        DeckError::WatchError(format!("Failed to resolve {:?}: {}", watch_path, e))
    })?;

    debug!("Watching absolute path: {:?}", abs_watch_path);

    debouncer
        .watcher()
        .watch(&abs_watch_path, RecursiveMode::NonRecursive)
        .map_err(|e| {
            DeckError::WatchError(format!(
                "Failed to start watching directory {:?}: {}",
                abs_watch_path, e
            ))
        })?;

    info!("Watching for changes in {:?}", watch_path);
    println!(
        "Watching for changes in {:?} (Press Ctrl+C to stop)",
        watch_path
    );

    let mut last_processed = Instant::now();

    for result in rx {
        match result {
            Ok(events) => {
                let relevant_changes = events
                    .iter()
                    .flat_map(|event| event.paths.iter())
                    .any(|path| is_relevant_path(path, &config));

                let now = Instant::now();
                if relevant_changes
                    && now.duration_since(last_processed)
                        > Duration::from_millis(config.debounce_ms)
                {
                    match regenerate_output(&config, app_config) {
                        Ok(()) => {
                            info!("Regenerated output successfully");
                            last_processed = now;
                        }
                        Err(e) => error!("Failed to regenerate output: {}", e),
                    }
                }
            }
            Err(e) => error!("Watch error: {:?}", e),
        }
    }

    Ok(())
}

/// Checks whether a changed path should trigger regeneration
fn is_relevant_path(path: &Path, config: &WatchConfig) -> bool {
    // Never react to our own output
    if is_same_file(path, &config.html_output) {
        return false;
    }

    if is_same_file(path, &config.deck_path) {
        debug!("Detected change in deck {:?}", path);
        return true;
    }

    path.extension()
        .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

fn is_same_file(path: &Path, other: &Path) -> bool {
    if path == other {
        return true;
    }
    match (fs::canonicalize(path), fs::canonicalize(other)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Regenerate the HTML page from the current state of the deck file
fn regenerate_output(config: &WatchConfig, app_config: &AppConfig) -> Result<()> {
    info!("Regenerating output...");

    let html_content = html::generate_html(&config.deck_path, app_config)?;
    html::write_html_to_file(&html_content, &config.html_output)?;

    info!("HTML regenerated: {:?}", config.html_output);
    Ok(())
}
