// ABOUTME: Body renderer for the big-deck engine
// ABOUTME: Interleaves paragraph and list markup in document order

use crate::errors::Result;
use crate::list::render_list;
use crate::model::Body;
use crate::segment::{Segment, extract_segments};
use log::debug;

/// Wrap trimmed prose in a paragraph tag. Blank prose still yields `<p></p>`.
pub fn render_paragraph(text: &str) -> String {
    format!("<p>{}</p>", text.trim())
}

/// Render a body as paragraphs and lists, one block per line.
pub fn render_body(body: &Body) -> Result<String> {
    let segments = extract_segments(&body.raw_text, &body.list_regions)?;
    debug!(
        "Rendering body with {} segments ({} lists)",
        segments.len(),
        body.list_regions.len()
    );

    let blocks = segments
        .iter()
        .map(|segment| match segment {
            Segment::Prose(text) => Ok(render_paragraph(text)),
            Segment::List(region) => render_list(region, &body.raw_text),
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(blocks.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ListRegion;

    #[test]
    fn plain_body_is_one_trimmed_paragraph() {
        let body = Body::paragraph("  Hello world \n");
        assert_eq!(render_body(&body).unwrap(), "<p>Hello world</p>");
    }

    #[test]
    fn empty_body_is_empty_paragraph() {
        assert_eq!(render_body(&Body::default()).unwrap(), "<p></p>");
    }

    #[test]
    fn whitespace_only_body_is_empty_paragraph() {
        assert_eq!(render_body(&Body::paragraph(" \n\t ")).unwrap(), "<p></p>");
    }

    #[test]
    fn prose_around_a_list() {
        let body = Body::with_regions(
            "Intro\n- x\n- y\nOutro",
            vec![ListRegion::unordered(6, 13)],
        );
        assert_eq!(
            render_body(&body).unwrap(),
            "<p>Intro</p>\n<ul><li>- x</li>\n<li>- y</li></ul>\n<p>Outro</p>"
        );
    }

    #[test]
    fn full_span_list_has_no_paragraphs() {
        let body = Body::with_regions("a\nb\nc", vec![ListRegion::unordered(0, 5)]);
        assert_eq!(
            render_body(&body).unwrap(),
            "<ul><li>a</li>\n<li>b</li>\n<li>c</li></ul>"
        );
    }

    #[test]
    fn whitespace_tail_still_renders_paragraph() {
        let body = Body::with_regions("1. a\n", vec![ListRegion::ordered(0, 4)]);
        assert_eq!(render_body(&body).unwrap(), "<ol><li>1. a</li></ol>\n<p></p>");
    }

    #[test]
    fn multiple_lists_in_order() {
        let body = Body::with_regions(
            "Top\n- a\n1. b\nEnd",
            vec![ListRegion::unordered(4, 8), ListRegion::ordered(8, 12)],
        );
        assert_eq!(
            render_body(&body).unwrap(),
            "<p>Top</p>\n<ul><li>- a</li></ul>\n<ol><li>1. b</li></ol>\n<p>End</p>"
        );
    }

    #[test]
    fn prose_is_passed_through_raw() {
        let body = Body::paragraph("<em>raw</em> & more");
        assert_eq!(render_body(&body).unwrap(), "<p><em>raw</em> & more</p>");
    }

    #[test]
    fn emoji_before_list_keeps_items_whole() {
        let body = Body::with_regions(
            "Party 🎉\n- a\n- b\nBye",
            vec![ListRegion::unordered(9, 16)],
        );
        assert_eq!(
            render_body(&body).unwrap(),
            "<p>Party 🎉</p>\n<ul><li>- a</li>\n<li>- b</li></ul>\n<p>Bye</p>"
        );
    }

    #[test]
    fn invalid_region_fails_the_body() {
        let body = Body::with_regions("abc", vec![ListRegion::ordered(2, 9)]);
        assert!(render_body(&body).is_err());
    }
}
