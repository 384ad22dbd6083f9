// ABOUTME: Slide renderer for the big-deck engine
// ABOUTME: Assembles title, subtitle and bodies into one <section> fragment

use crate::body::render_body;
use crate::errors::Result;
use crate::model::{InlineText, Slide};

/// Escape text for interpolation into HTML element content or attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn render_heading(tag: &str, text: Option<&InlineText>) -> String {
    match text {
        Some(text) => format!("<{tag}>{}</{tag}>", escape_html(&text.raw_text)),
        None => String::new(),
    }
}

/// `<h2>` with the escaped title, or an empty string when there is none.
pub fn render_title(title: Option<&InlineText>) -> String {
    render_heading("h2", title)
}

/// `<h3>` with the escaped subtitle, or an empty string when there is none.
pub fn render_subtitle(subtitle: Option<&InlineText>) -> String {
    render_heading("h3", subtitle)
}

/// Render one slide as a `<section class='slide'>` fragment.
///
/// The fragment always has the same line layout: opening tag, title line, subtitle line,
/// bodies, closing tag. A missing title or subtitle leaves its line blank.
pub fn render_slide(slide: &Slide) -> Result<String> {
    let bodies = slide
        .bodies
        .iter()
        .map(render_body)
        .collect::<Result<Vec<_>>>()?;

    let lines = [
        "<section class='slide'>".to_string(),
        render_title(slide.title.as_ref()),
        render_subtitle(slide.subtitle.as_ref()),
        bodies.join("\n"),
        "</section>".to_string(),
    ];

    Ok(lines.join("\n"))
}
