// ABOUTME: List renderer for the big-deck body engine
// ABOUTME: Turns one list region into a flat <ol> or <ul> block

use crate::errors::Result;
use crate::model::{ListKind, ListRegion};
use crate::segment::region_text;

/// Render one list region of `raw_text`.
///
/// The region text is trimmed and split on line breaks; each line becomes one item,
/// verbatim. Indentation does not nest.
pub fn render_list(region: &ListRegion, raw_text: &str) -> Result<String> {
    let text = region_text(raw_text, region)?.trim();

    let items = text
        .split('\n')
        .map(|item| format!("<li>{}</li>", item))
        .collect::<Vec<_>>()
        .join("\n");

    Ok(match region.kind {
        ListKind::Ordered => format!("<ol>{}</ol>", items),
        ListKind::Unordered => format!("<ul>{}</ul>", items),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DeckError;

    #[test]
    fn splits_items_on_line_breaks() {
        let html = render_list(&ListRegion::unordered(0, 5), "a\nb\nc").unwrap();
        assert_eq!(html, "<ul><li>a</li>\n<li>b</li>\n<li>c</li></ul>");
    }

    #[test]
    fn ordered_kind_uses_ol() {
        let html = render_list(&ListRegion::ordered(0, 9), "1. a\n2. b").unwrap();
        assert_eq!(html, "<ol><li>1. a</li>\n<li>2. b</li></ol>");
    }

    #[test]
    fn trims_region_but_not_items() {
        let raw = "\n  - a\n    - b  \n";
        let html = render_list(&ListRegion::unordered(0, raw.len()), raw).unwrap();
        assert_eq!(html, "<ul><li>- a</li>\n<li>    - b</li></ul>");
    }

    #[test]
    fn slices_only_the_region() {
        let raw = "Intro\n- x\n- y\nOutro";
        let html = render_list(&ListRegion::unordered(6, 13), raw).unwrap();
        assert_eq!(html, "<ul><li>- x</li>\n<li>- y</li></ul>");
    }

    #[test]
    fn empty_region_renders_one_empty_item() {
        let html = render_list(&ListRegion::ordered(2, 2), "abc").unwrap();
        assert_eq!(html, "<ol><li></li></ol>");
    }

    #[test]
    fn item_markup_is_not_escaped() {
        let html = render_list(&ListRegion::unordered(0, 12), "<b>bold</b>!").unwrap();
        assert_eq!(html, "<ul><li><b>bold</b>!</li></ul>");
    }

    #[test]
    fn out_of_range_region_is_an_error() {
        let err = render_list(&ListRegion::unordered(0, 10), "short").unwrap_err();
        assert!(matches!(err, DeckError::InvalidRegion { len: 5, .. }));
    }
}
