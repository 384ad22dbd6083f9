// ABOUTME: Splits a body's raw text into prose and list segments
// ABOUTME: Converts UTF-16 offsets from the extractor into byte slices

use crate::errors::{DeckError, Result};
use crate::model::ListRegion;
/// A piece of a body: free prose, or one of the body's list regions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    Prose(&'a str),
    List(&'a ListRegion),
}

impl<'a> Segment<'a> {
    /// The unrendered text this segment covers within `raw_text`.
    pub fn text(&self, raw_text: &'a str) -> Result<&'a str> {
        match self {
            Segment::Prose(text) => Ok(*text),
            Segment::List(region) => region_text(raw_text, region),
        }
    }
}

/// Partition `raw_text` into segments.
///
/// Text before the first region and after the last region becomes prose. Regions are
/// emitted in the order given; text between consecutive regions is not recovered.
/// Every region is checked against the text before anything is emitted.
///
/// Offsets count UTF-16 code units, the way the extractor measures its text.
pub fn extract_segments<'a>(
    raw_text: &'a str,
    regions: &'a [ListRegion],
) -> Result<Vec<Segment<'a>>> {
    let len = utf16_len(raw_text);
    for region in regions {
        validate_region(region, len)?;
    }

    let (Some(first), Some(last)) = (regions.first(), regions.last()) else {
        return Ok(vec![Segment::Prose(raw_text)]);
    };

    let mut segments = Vec::with_capacity(regions.len() + 2);

    if first.start > 0 {
        let head = byte_offset(raw_text, first.start, len)?;
        segments.push(Segment::Prose(&raw_text[..head]));
    }

    segments.extend(regions.iter().map(Segment::List));

    if last.end < len {
        let tail = byte_offset(raw_text, last.end, len)?;
        segments.push(Segment::Prose(&raw_text[tail..]));
    }

    Ok(segments)
}

/// The slice of `raw_text` covered by `region`.
pub fn region_text<'a>(raw_text: &'a str, region: &ListRegion) -> Result<&'a str> {
    let len = utf16_len(raw_text);
    validate_region(region, len)?;
    let start = byte_offset(raw_text, region.start, len)?;
    let end = byte_offset(raw_text, region.end, len)?;
    Ok(&raw_text[start..end])
}

/// Length of `text` in UTF-16 code units.
pub fn utf16_len(text: &str) -> usize {
    text.chars().map(char::len_utf16).sum()
}

fn validate_region(region: &ListRegion, len: usize) -> Result<()> {
    if region.start > region.end || region.end > len {
        return Err(DeckError::InvalidRegion {
            start: region.start,
            end: region.end,
            len,
        });
    }
    Ok(())
}

/// Byte index of UTF-16 offset `unit_index`; an offset splitting a surrogate pair is invalid.
fn byte_offset(text: &str, unit_index: usize, len: usize) -> Result<usize> {
    let mut units = 0;
    for (byte, c) in text.char_indices() {
        if units == unit_index {
            return Ok(byte);
        }
        units += c.len_utf16();
        if units > unit_index {
            break;
        }
    }
    if units == unit_index {
        return Ok(text.len());
    }
    Err(DeckError::InvalidRegion {
        start: unit_index,
        end: unit_index,
        len,
    })
}
