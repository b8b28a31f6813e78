//! # Text Storage
//!
//! The primitives formatters need from attributed text: character access,
//! paragraph lookup and attribute get/set over character ranges.
//!
//! Paragraphs end with a line feed or U+2029 PARAGRAPH SEPARATOR. A
//! paragraph range includes its terminator; the final paragraph may have
//! none.

use crate::Attributes;
use folio_common::TextRange;

pub const LINE_FEED: char = '\n';
pub const PARAGRAPH_SEPARATOR: char = '\u{2029}';

pub fn is_paragraph_terminator(c: char) -> bool {
    c == LINE_FEED || c == PARAGRAPH_SEPARATOR
}

pub trait TextStorage {
    /// Length in characters
    fn len(&self) -> usize;

    fn char_at(&self, location: usize) -> Option<char>;

    fn substring(&self, range: TextRange) -> String;

    /// Attributes of the character at `location`. Panics past the end.
    fn attributes_at(&self, location: usize) -> Attributes;

    /// Maximal runs of equal attributes, clipped to `range`
    fn attribute_runs(&self, range: TextRange) -> Vec<(TextRange, Attributes)>;

    /// Merge `attributes` into every run overlapping `range`
    fn add_attributes(&mut self, attributes: &Attributes, range: TextRange);

    /// Replace the attributes of `range` with `attributes`
    fn set_attributes(&mut self, attributes: &Attributes, range: TextRange);

    /// Replace every occurrence of `of` inside `range` with `with`, returning
    /// the number of replacements.
    fn replace_occurrences(&mut self, of: &str, with: &str, range: TextRange) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whole paragraphs covering `range`.
    ///
    /// Panics when `range` ends past the text.
    fn paragraph_range(&self, range: TextRange) -> TextRange {
        let length = self.len();
        assert!(
            range.end() <= length,
            "The specified range {range} is out of bounds for text of length {length}."
        );

        let mut start = range.location;
        while start > 0 && !self.char_at(start - 1).is_some_and(is_paragraph_terminator) {
            start -= 1;
        }

        let mut end = if range.is_empty() {
            range.location
        } else {
            range.end() - 1
        };
        while end < length && !self.char_at(end).is_some_and(is_paragraph_terminator) {
            end += 1;
        }
        if end < length {
            end += 1;
        }

        TextRange::from_bounds(start, end)
    }

    /// The paragraph directly before the paragraphs covering `range`
    fn paragraph_range_before(&self, range: TextRange) -> Option<TextRange> {
        let paragraph = self.paragraph_range(range);
        if paragraph.location == 0 {
            return None;
        }
        Some(self.paragraph_range(TextRange::caret(paragraph.location - 1)))
    }

    /// The paragraph directly after the paragraphs covering `range`
    fn paragraph_range_after(&self, range: TextRange) -> Option<TextRange> {
        let paragraph = self.paragraph_range(range);
        if paragraph.end() >= self.len() {
            return None;
        }
        Some(self.paragraph_range(TextRange::caret(paragraph.end())))
    }

    /// Every paragraph of the text, in order. Empty text has none.
    fn paragraph_ranges(&self) -> Vec<TextRange> {
        let mut paragraphs = Vec::new();
        let mut location = 0;
        while location < self.len() {
            let paragraph = self.paragraph_range(TextRange::caret(location));
            location = paragraph.end();
            paragraphs.push(paragraph);
        }
        paragraphs
    }

    /// `range` without a trailing paragraph terminator
    fn without_terminator(&self, range: TextRange) -> TextRange {
        match range.end().checked_sub(1).and_then(|last| self.char_at(last)) {
            Some(c) if !range.is_empty() && is_paragraph_terminator(c) => {
                TextRange::new(range.location, range.length - 1)
            }
            _ => range,
        }
    }
}
