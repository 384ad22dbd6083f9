// ABOUTME: Library module for the big-deck program.
// ABOUTME: Renders extracted slide decks into HTML section fragments and pages.

// Reexport modules
pub mod body;
pub mod config;
pub mod deck;
pub mod errors;
pub mod html;
pub mod list;
pub mod model;
pub mod page;
pub mod segment;
pub mod slide;
pub mod watch;

// Reexport common types and functions
pub use body::render_body;
pub use config::Config;
pub use deck::{FailurePolicy, RenderedDeck, render_deck, render_deck_parallel};
pub use errors::{DeckError, Result};
pub use html::{
    generate_fragments, generate_html, load_deck, prepare_output_dir, require_deck_file,
    write_html_to_file,
};
pub use list::render_list;
pub use model::{Body, Deck, InlineText, ListKind, ListRegion, Slide};
pub use page::Page;
pub use segment::{Segment, extract_segments, utf16_len};
pub use slide::{escape_html, render_slide};
pub use watch::{WatchConfig, watch_deck};
